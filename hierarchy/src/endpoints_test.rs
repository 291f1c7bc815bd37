use super::*;

#[test]
fn object_paths_embed_the_id() {
    let id = ObjectId::from(15);
    assert_eq!(object_path(&id), "/real-estate-objects/15");
    assert_eq!(children_path(&id), "/real-estate-objects/15/children");
    assert_eq!(ancestry_path(&id), "/real-estate-objects/15/path");
    assert_eq!(remove_responsible_path(&id), "/real-estate-objects/15/remove-responsible");
}

#[test]
fn assign_path_carries_user() {
    assert_eq!(
        assign_responsible_path(&ObjectId::from(3), &ObjectId::from(8)),
        "/real-estate-objects/3/assign-responsible/8"
    );
}

#[test]
fn object_route_points_at_detail_view() {
    assert_eq!(object_route(&ObjectId::from(77)), "/objects/77");
}

#[test]
fn join_url_strips_trailing_slash() {
    assert_eq!(join_url("http://localhost:8080/", "/auth/login"), "http://localhost:8080/auth/login");
    assert_eq!(join_url("/api", OBJECTS_PATH), "/api/real-estate-objects");
}
