use crate::dialect::{Dialect, mysql, postgres, sqlite};
use crate::expression::{avg, count, max, min, random, raw, star, sum};

#[test]
fn random_without_argument() {
    assert_eq!(random(None).render(mysql()), "RAND()");
    assert_eq!(random(None).render(postgres()), "RANDOM()");
    assert_eq!(random(None).render(sqlite()), "RANDOM()");
}

#[test]
fn random_with_seed() {
    assert_eq!(random(Some(raw("42"))).render(mysql()), "RAND(42)");
}

#[test]
fn count_wraps_argument() {
    assert_eq!(count(raw("Users.id")).render(mysql()), "COUNT(Users.id)");
    assert_eq!(count(star()).render(mysql()), "COUNT(*)");
}

#[test]
fn other_aggregates() {
    let d = mysql();
    assert_eq!(sum(raw("total")).render(d), "SUM(total)");
    assert_eq!(min(raw("total")).render(d), "MIN(total)");
    assert_eq!(max(raw("total")).render(d), "MAX(total)");
    assert_eq!(avg(raw("total")).render(d), "AVG(total)");
}

#[test]
fn missing_function_token_keeps_parentheses() {
    assert_eq!(random(None).render(&Dialect::new("empty")), "()");
}
