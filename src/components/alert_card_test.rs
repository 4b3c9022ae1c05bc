use super::*;

#[test]
fn format_price_drops_decimals_for_whole_amounts() {
    assert_eq!(format_price(199.0, "EUR"), "199 EUR");
    assert_eq!(format_price(1250.0, "USD"), "1250 USD");
}

#[test]
fn format_price_keeps_two_decimals_otherwise() {
    assert_eq!(format_price(199.5, "EUR"), "199.50 EUR");
    assert_eq!(format_price(99.99, "GBP"), "99.99 GBP");
}

#[test]
fn date_range_label_handles_round_trips_and_one_ways() {
    assert_eq!(
        date_range_label("2026-10-01", Some("2026-10-08")),
        "2026-10-01 to 2026-10-08"
    );
    assert_eq!(date_range_label("2026-10-01", None), "2026-10-01, one way");
}
