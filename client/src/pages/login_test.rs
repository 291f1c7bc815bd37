use super::*;

#[test]
fn validate_login_input_trims_username() {
    let (user, pass) = validate_login_input("  admin ", "secret").unwrap();
    assert_eq!(user, "admin");
    assert_eq!(pass, "secret");
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let (_, pass) = validate_login_input("admin", " pass ").unwrap();
    assert_eq!(pass, " pass ");
}

#[test]
fn validate_login_input_rejects_blank_fields() {
    assert_eq!(validate_login_input("   ", "secret").unwrap_err(), "Enter your username.");
    assert_eq!(validate_login_input("admin", "").unwrap_err(), "Enter your password.");
}
