//! Display formatting for object fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use hierarchy::RealEstateObject;

pub const NOT_ASSIGNED: &str = "Not assigned";
pub const UNKNOWN: &str = "Unknown";

/// Render an ISO timestamp as `DD.MM.YYYY`.
///
/// Anything without a leading `YYYY-MM-DD` date is shown as-is.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return UNKNOWN.to_owned();
    };
    let date = raw.get(..10).unwrap_or(raw);
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4 && m.len() == 2 && d.len() == 2 && date.chars().all(|c| c.is_ascii_digit() || c == '-') =>
        {
            format!("{d}.{m}.{y}")
        }
        _ => raw.to_owned(),
    }
}

/// Label/value pairs shown on the object info card.
pub fn info_items(object: &RealEstateObject) -> Vec<(&'static str, String)> {
    vec![
        ("Object type", object.object_type.label().to_owned()),
        ("Created", format_date(object.created_at.as_deref())),
        ("Created by", object.created_by_name().unwrap_or_else(|| UNKNOWN.to_owned())),
        ("Responsible", object.responsible_user_name().unwrap_or_else(|| NOT_ASSIGNED.to_owned())),
        ("Parent object", if object.parent_id.is_some() { "Yes" } else { "No" }.to_owned()),
    ]
}

/// Left padding of a tree row at `depth`, in rem.
pub fn indent_rem(depth: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let depth = depth as f64;
    depth * 1.5 + 0.5
}
