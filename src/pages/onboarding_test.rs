use super::*;

#[test]
fn parse_airport_codes_splits_uppercases_and_dedupes() {
    assert_eq!(
        parse_airport_codes("lhr, LGW  stn,lhr"),
        vec!["LHR".to_owned(), "LGW".to_owned(), "STN".to_owned()]
    );
}

#[test]
fn parse_airport_codes_drops_non_iata_tokens() {
    assert_eq!(parse_airport_codes("London, JF, JFKX, 123, NRT"), vec!["NRT".to_owned()]);
    assert!(parse_airport_codes("").is_empty());
    assert!(parse_airport_codes("  ,, ").is_empty());
}

#[test]
fn step_zero_requires_home_airports() {
    assert!(!step_can_continue(0, &[], &[]));
    assert!(step_can_continue(0, &["LHR".to_owned()], &[]));
}

#[test]
fn step_one_requires_destinations() {
    assert!(!step_can_continue(1, &["LHR".to_owned()], &[]));
    assert!(step_can_continue(1, &["LHR".to_owned()], &["JFK".to_owned()]));
}
