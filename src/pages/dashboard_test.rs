use super::*;

#[test]
fn upgrade_banner_absent_when_nothing_is_hidden() {
    assert_eq!(upgrade_banner_text(0), None);
}

#[test]
fn upgrade_banner_handles_singular_and_plural() {
    assert_eq!(
        upgrade_banner_text(1),
        Some("1 premium deal is hidden. Upgrade to see it.".to_owned())
    );
    assert_eq!(
        upgrade_banner_text(4),
        Some("4 premium deals are hidden. Upgrade to see them.".to_owned())
    );
}
