use super::*;

#[test]
fn pk_suffix_marks_primary_keys_only() {
    assert_eq!(pk_suffix(true), " (PK)");
    assert_eq!(pk_suffix(false), "");
}
