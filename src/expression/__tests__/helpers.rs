use crate::dialect::{Dialect, mysql, postgres, token};
use crate::expression::{Expression, ident, list, num, raw, star};

#[test]
fn raw_ignores_dialect() {
    let e = raw("name = 'x'");
    assert_eq!(e.render(mysql()), "name = 'x'");
    assert_eq!(e.render(&Dialect::new("empty")), "name = 'x'");
}

#[test]
fn raw_accepts_owned_strings() {
    let table = String::from("Users");
    assert_eq!(raw(table).render(mysql()), "Users");
    assert_eq!(Expression::from("Orders").render(mysql()), "Orders");
}

#[test]
fn star_renders_asterisk() {
    assert_eq!(star().render(mysql()), "*");
}

#[test]
fn ident_quotes_per_dialect() {
    assert_eq!(ident("users").render(mysql()), "`users`");
    assert_eq!(ident("users").render(postgres()), "\"users\"");
    assert_eq!(ident("Users.id").render(mysql()), "`Users`.`id`");
    assert_eq!(ident("public.users.id").render(postgres()), r#""public"."users"."id""#);
}

#[test]
fn ident_keeps_star_bare() {
    assert_eq!(ident("u.*").render(mysql()), "`u`.*");
    assert!(ident("*").tokens().is_empty());
}

#[test]
fn ident_escapes_embedded_quote() {
    assert_eq!(ident("a`b").render(mysql()), "`a``b`");
    assert_eq!(ident(r#"a"b"#).render(postgres()), r#""a""b""#);
}

#[test]
fn ident_without_quote_token_stays_bare() {
    let d = Dialect::new("noquote");
    assert_eq!(ident("users.id").render(&d), "users.id");
    let tokens = ident("users").tokens();
    let names: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    assert_eq!(names, vec![token::QUOTE]);
}

#[test]
fn list_joins_with_comma() {
    let e = list([ident("id"), ident("name")]);
    assert_eq!(e.render(mysql()), "`id`, `name`");

    let plain = list(["Users", "Orders"]);
    assert_eq!(plain.render(mysql()), "Users, Orders");
}

#[test]
fn empty_list_renders_nothing() {
    let e = list(Vec::<Expression>::new());
    assert_eq!(e.render(mysql()), "");
}

#[test]
fn num_renders_integer() {
    assert_eq!(num(0).render(mysql()), "0");
    assert_eq!(num(18_446_744_073_709_551_615).render(mysql()), "18446744073709551615");
    assert_eq!(Expression::from(25u64).render(mysql()), "25");
}
