use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.success("Saved");
    let second = state.error("Failed");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.success("one");
    let _second = state.success("two");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for n in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Info, format!("toast {n}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "toast 2");
}

#[test]
fn kind_classes_are_distinct() {
    assert_eq!(ToastKind::Success.class(), "toast--success");
    assert_eq!(ToastKind::Error.class(), "toast--error");
    assert_eq!(ToastKind::Info.class(), "toast--info");
}

#[test]
fn sign_out_notice_is_an_info_toast() {
    let mut state = ToastState::default();
    let id = state.info(crate::components::top_bar::SIGNED_OUT_MESSAGE);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, id);
    assert_eq!(state.items[0].kind, ToastKind::Info);
    assert_eq!(state.items[0].message, "Signed out");
}
