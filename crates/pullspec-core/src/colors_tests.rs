use crate::Colors;

#[test]
fn plain_by_default() {
    assert_eq!(Colors::default(), Colors::PLAIN);
    assert_eq!(Colors::new(false), Colors::PLAIN);
    assert_eq!(Colors::new(true), Colors::ANSI);
}

#[test]
fn paint_wraps_each_role() {
    let colors = Colors::ANSI;
    assert_eq!(colors.paint(colors.key, ":name"), "\x1b[34m:name\x1b[0m");
    assert_eq!(colors.paint(colors.value, "5"), "\x1b[32m5\x1b[0m");
    assert_eq!(colors.paint(colors.punct, "["), "\x1b[2m[\x1b[0m");
}

#[test]
fn paint_is_identity_when_plain() {
    let colors = Colors::PLAIN;
    assert_eq!(colors.paint(colors.key, ":name"), ":name");
}
