//! Real-estate object DTOs shared by the browser client and the CLI.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON with numeric ids. Ids are kept as an
//! opaque string newtype on this side so tree bookkeeping never depends on
//! the numeric representation, while serialization still emits numbers when
//! the id is numeric.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier of a real-estate object, unique within the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for ObjectId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(numeric) = self.0.parse::<i64>() {
            serializer.serialize_i64(numeric)
        } else if let Ok(numeric) = self.0.parse::<u64>() {
            serializer.serialize_u64(numeric)
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => number
                .as_i64()
                .map(Self::from)
                .or_else(|| number.as_u64().map(|n| Self(n.to_string())))
                .ok_or_else(|| D::Error::custom("expected integer object id")),
            serde_json::Value::String(raw) if !raw.is_empty() => Ok(Self(raw)),
            _ => Err(D::Error::custom("expected object id")),
        }
    }
}

/// Kind of real-estate object.
///
/// Codes the console does not know yet are kept verbatim in [`ObjectType::Other`]
/// so newer backends keep working; their label is the raw code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectType {
    Building,
    Entrance,
    BasementFloor,
    Floor,
    Stairwell,
    Elevator,
    FloorBalcony,
    Corridor,
    ElevatorHall,
    Apartment,
    ApartmentBalcony,
    Room,
    Task,
    Other(String),
}

impl ObjectType {
    /// Every known type, in hierarchy order. Used to populate type pickers.
    pub const KNOWN: [ObjectType; 13] = [
        Self::Building,
        Self::Entrance,
        Self::BasementFloor,
        Self::Floor,
        Self::Stairwell,
        Self::Elevator,
        Self::FloorBalcony,
        Self::Corridor,
        Self::ElevatorHall,
        Self::Apartment,
        Self::ApartmentBalcony,
        Self::Room,
        Self::Task,
    ];

    /// Wire code, e.g. `"BASEMENT_FLOOR"`.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Building => "BUILDING",
            Self::Entrance => "ENTRANCE",
            Self::BasementFloor => "BASEMENT_FLOOR",
            Self::Floor => "FLOOR",
            Self::Stairwell => "STAIRWELL",
            Self::Elevator => "ELEVATOR",
            Self::FloorBalcony => "FLOOR_BALCONY",
            Self::Corridor => "CORRIDOR",
            Self::ElevatorHall => "ELEVATOR_HALL",
            Self::Apartment => "APARTMENT",
            Self::ApartmentBalcony => "APARTMENT_BALCONY",
            Self::Room => "ROOM",
            Self::Task => "TASK",
            Self::Other(code) => code,
        }
    }

    /// Human-readable label shown next to object names.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Building => "Building",
            Self::Entrance => "Entrance",
            Self::BasementFloor => "Basement floor",
            Self::Floor => "Floor",
            Self::Stairwell => "Stairwell",
            Self::Elevator => "Elevator",
            Self::FloorBalcony => "Floor balcony",
            Self::Corridor => "Corridor",
            Self::ElevatorHall => "Elevator hall",
            Self::Apartment => "Apartment",
            Self::ApartmentBalcony => "Apartment balcony",
            Self::Room => "Room",
            Self::Task => "Task",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for ObjectType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "BUILDING" => Self::Building,
            "ENTRANCE" => Self::Entrance,
            "BASEMENT_FLOOR" => Self::BasementFloor,
            "FLOOR" => Self::Floor,
            "STAIRWELL" => Self::Stairwell,
            "ELEVATOR" => Self::Elevator,
            "FLOOR_BALCONY" => Self::FloorBalcony,
            "CORRIDOR" => Self::Corridor,
            "ELEVATOR_HALL" => Self::ElevatorHall,
            "APARTMENT" => Self::Apartment,
            "APARTMENT_BALCONY" => Self::ApartmentBalcony,
            "ROOM" => Self::Room,
            "TASK" => Self::Task,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for ObjectType {
    fn from(code: &str) -> Self {
        Self::from(code.to_owned())
    }
}

impl From<ObjectType> for String {
    fn from(value: ObjectType) -> Self {
        match value {
            ObjectType::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full object record as returned by `GET /real-estate-objects/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateObject {
    pub id: ObjectId,
    pub name: String,
    pub object_type: ObjectType,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<ObjectId>,
    #[serde(default)]
    pub created_by_first_name: Option<String>,
    #[serde(default)]
    pub created_by_last_name: Option<String>,
    #[serde(default)]
    pub responsible_user_id: Option<ObjectId>,
    #[serde(default)]
    pub responsible_user_first_name: Option<String>,
    #[serde(default)]
    pub responsible_user_last_name: Option<String>,
    #[serde(default)]
    pub responsible_user_role: Option<String>,
}

impl RealEstateObject {
    #[must_use]
    pub fn summary(&self) -> ObjectSummary {
        ObjectSummary { id: self.id.clone(), name: self.name.clone(), object_type: self.object_type.clone() }
    }

    /// "First Last" of the creator, if the backend sent either part.
    #[must_use]
    pub fn created_by_name(&self) -> Option<String> {
        join_name(self.created_by_first_name.as_deref(), self.created_by_last_name.as_deref())
    }

    /// "First Last" of the responsible user, if one is assigned.
    #[must_use]
    pub fn responsible_user_name(&self) -> Option<String> {
        self.responsible_user_id.as_ref()?;
        join_name(self.responsible_user_first_name.as_deref(), self.responsible_user_last_name.as_deref())
    }
}

fn join_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let joined = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() { None } else { Some(joined) }
}

/// Display order shared by every object listing: top-level objects first,
/// then case-insensitive by name, ties by id.
#[must_use]
pub fn display_order(a: &RealEstateObject, b: &RealEstateObject) -> std::cmp::Ordering {
    a.parent_id
        .is_some()
        .cmp(&b.parent_id.is_some())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.id.as_str().cmp(b.id.as_str()))
}

/// Sort a listing by [`display_order`].
pub fn sort_for_display(objects: &mut [RealEstateObject]) {
    objects.sort_by(display_order);
}

/// Lightweight child entry returned by `GET /real-estate-objects/{id}/children`.
///
/// Extra fields on the wire are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    pub id: ObjectId,
    pub name: String,
    pub object_type: ObjectType,
}

/// Target of the "back to parent" affordance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentLink {
    pub id: ObjectId,
    pub name: String,
}

/// Payload for `POST /real-estate-objects`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewObject {
    pub name: String,
    pub object_type: ObjectType,
    pub parent_id: Option<ObjectId>,
}

/// Payload for `PUT /real-estate-objects/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectUpdate {
    pub name: String,
    pub object_type: ObjectType,
    pub parent_id: Option<ObjectId>,
}

impl ObjectUpdate {
    /// Rename while keeping type and placement, the way the edit modal does.
    #[must_use]
    pub fn rename(object: &RealEstateObject, name: &str) -> Self {
        Self { name: name.trim().to_owned(), object_type: object.object_type.clone(), parent_id: object.parent_id.clone() }
    }
}

/// Staff account as returned by `/users/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: ObjectId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl UserInfo {
    #[must_use]
    pub fn display_name(&self) -> String {
        join_name(Some(&self.first_name), Some(&self.last_name)).unwrap_or_else(|| self.username.clone())
    }
}
