use super::*;

#[test]
fn trimmed_credentials_trims_email_only() {
    let (email, password) = trimmed_credentials("  a@b.com  ", "  x ");
    assert_eq!(email, "a@b.com");
    assert_eq!(password, "  x ");
}

#[test]
fn trimmed_registration_trims_email_and_name() {
    let (email, password, name) = trimmed_registration(" a@b.com ", "x", "  Ada ");
    assert_eq!(email, "a@b.com");
    assert_eq!(password, "x");
    assert_eq!(name, "Ada");
}
