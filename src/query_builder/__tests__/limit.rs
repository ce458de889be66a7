use crate::dialect::mysql;
use crate::expression::{num, raw, star};
use crate::query_builder::select;

#[test]
fn limit_only() {
    let sql = select(raw("users"), star()).limit(num(10)).render(mysql());
    assert_eq!(sql, "SELECT * FROM users LIMIT 10");
}

#[test]
fn offset_only() {
    let sql = select(raw("users"), star()).offset(20u64).render(mysql());
    assert_eq!(sql, "SELECT * FROM users OFFSET 20");
}

#[test]
fn limit_and_offset() {
    let sql = select(raw("orders"), star())
        .limit_offset(10u64, 5u64)
        .render(mysql());
    assert_eq!(sql, "SELECT * FROM orders LIMIT 10 OFFSET 5");
}

#[test]
fn offset_before_limit_renders_limit_first() {
    let sql = select(raw("orders"), star())
        .offset(raw("5"))
        .limit(raw("10"))
        .render(mysql());
    assert_eq!(sql, "SELECT * FROM orders LIMIT 10 OFFSET 5");
}

#[test]
fn last_limit_wins() {
    let sql = select(raw("t"), star())
        .limit(num(1))
        .limit(num(2))
        .render(mysql());
    assert_eq!(sql, "SELECT * FROM t LIMIT 2");
}
