use crate::dialect::mysql;
use crate::expression::{and, eq, gt, raw, star};
use crate::query_builder::select;

#[test]
fn single_where() {
    let sql = select(raw("Users"), star())
        .r#where(eq(raw("name"), raw("Jimmy")))
        .render(mysql());
    assert_eq!(sql, "SELECT * FROM Users WHERE name = Jimmy");
}

#[test]
fn repeated_where_merges_like_explicit_and() {
    let a = eq(raw("a"), raw("1"));
    let b = gt(raw("b"), raw("2"));

    let merged = select(raw("t"), star())
        .r#where(a.clone())
        .r#where(b.clone())
        .render(mysql());
    let explicit = select(raw("t"), star()).r#where(and(a, b)).render(mysql());

    assert_eq!(merged, explicit);
    assert_eq!(merged, "SELECT * FROM t WHERE a = 1 AND b > 2");
}

#[test]
fn three_wheres_accumulate_in_arrival_order() {
    let sql = select(raw("t"), star())
        .r#where(raw("x"))
        .where_(raw("y"))
        .r#where(raw("z"))
        .render(mysql());
    assert_eq!(sql, "SELECT * FROM t WHERE x AND y AND z");
}

#[test]
fn where_underscore_alias() {
    let a = select(raw("t"), star()).where_(raw("x")).render(mysql());
    let b = select(raw("t"), star()).r#where(raw("x")).render(mysql());
    assert_eq!(a, b);
}
