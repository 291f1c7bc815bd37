use futures::executor::block_on;

use super::*;

#[test]
fn url_goes_through_api_prefix() {
    let source = HttpObjectSource::new(Session::anonymous());
    assert_eq!(source.url(&children_path(&ObjectId::from(4))), "/api/real-estate-objects/4/children");
}

#[test]
fn source_keeps_injected_session() {
    let source = HttpObjectSource::new(Session::with_token("tok"));
    assert_eq!(source.session().authorization().as_deref(), Some("Bearer tok"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_requests_fail_as_network_errors() {
    let source = HttpObjectSource::new(Session::anonymous());
    let err = block_on(source.list_children(&ObjectId::from(1))).unwrap_err();
    assert_eq!(err, SourceError::Network(NOT_IN_BROWSER.to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_mutations_fail_as_network_errors() {
    let source = HttpObjectSource::new(Session::with_token("tok"));
    let id = ObjectId::from(3);
    let err = block_on(source.delete_object(&id)).unwrap_err();
    assert_eq!(err, SourceError::Network(NOT_IN_BROWSER.to_owned()));
    let err = block_on(source.assign_responsible(&id, &ObjectId::from(9))).unwrap_err();
    assert_eq!(err, SourceError::Network(NOT_IN_BROWSER.to_owned()));
}

#[test]
fn responsible_urls_go_through_api_prefix() {
    let source = HttpObjectSource::new(Session::anonymous());
    let id = ObjectId::from(3);
    assert_eq!(
        source.url(&assign_responsible_path(&id, &ObjectId::from(9))),
        "/api/real-estate-objects/3/assign-responsible/9"
    );
    assert_eq!(source.url(&remove_responsible_path(&id)), "/api/real-estate-objects/3/remove-responsible");
}
