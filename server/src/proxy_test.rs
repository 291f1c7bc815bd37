use super::*;

#[test]
fn backend_target_joins_without_double_slash() {
    assert_eq!(
        backend_target("http://localhost:8080/", "real-estate-objects/4/children", None),
        "http://localhost:8080/real-estate-objects/4/children"
    );
    assert_eq!(backend_target("http://localhost:8080", "/auth/login", None), "http://localhost:8080/auth/login");
}

#[test]
fn backend_target_keeps_query() {
    assert_eq!(
        backend_target("http://b", "real-estate-objects", Some("page=2&size=10")),
        "http://b/real-estate-objects?page=2&size=10"
    );
    assert_eq!(backend_target("http://b", "users/info", Some("")), "http://b/users/info");
}

#[test]
fn forwarded_headers_keep_credential_and_drop_cookies() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    headers.insert(header::HOST, HeaderValue::from_static("console.local"));

    let forwarded = forwarded_headers(&headers);
    let names: Vec<_> = forwarded.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["authorization", "content-type"]);
    assert_eq!(forwarded[0].1, HeaderValue::from_static("Bearer abc"));
}

#[test]
fn proxy_state_uses_config_backend() {
    let config = HostConfig {
        port: 3000,
        backend_url: "http://backend.test".to_owned(),
        backend_timeout_secs: 3,
    };
    let state = ProxyState::new(&config).unwrap();
    assert_eq!(state.backend_url, "http://backend.test");
}
