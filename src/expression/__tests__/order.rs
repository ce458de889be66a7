use crate::dialect::mysql;
use crate::expression::{asc, desc, ident, raw};

#[test]
fn suffix_qualifiers() {
    assert_eq!(asc(raw("name")).render(mysql()), "name ASC");
    assert_eq!(desc(raw("name")).render(mysql()), "name DESC");
}

#[test]
fn suffix_methods_on_identifiers() {
    assert_eq!(ident("created_at").desc().render(mysql()), "`created_at` DESC");
    assert_eq!(ident("id").asc().render(mysql()), "`id` ASC");
}
