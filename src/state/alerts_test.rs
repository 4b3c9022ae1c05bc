use super::*;

fn alert(id: &str, detected_at: &str, premium: bool) -> FlightAlert {
    FlightAlert {
        id: id.to_owned(),
        origin: "LHR".to_owned(),
        destination: "JFK".to_owned(),
        price: 199.0,
        currency: "EUR".to_owned(),
        previous_price: None,
        departure_date: "2026-10-01".to_owned(),
        return_date: None,
        detected_at: detected_at.to_owned(),
        deal_url: None,
        premium,
    }
}

#[test]
fn premium_users_see_all_alerts_newest_first() {
    let items = vec![
        alert("a", "2026-08-01T00:00:00Z", false),
        alert("b", "2026-08-03T00:00:00Z", true),
        alert("c", "2026-08-02T00:00:00Z", false),
    ];
    let visible = visible_alerts(&items, true);
    let ids: Vec<&str> = visible.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn free_users_do_not_see_premium_alerts() {
    let items = vec![
        alert("a", "2026-08-01T00:00:00Z", false),
        alert("b", "2026-08-03T00:00:00Z", true),
    ];
    let visible = visible_alerts(&items, false);
    let ids: Vec<&str> = visible.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn locked_alert_count_only_applies_to_free_users() {
    let items = vec![
        alert("a", "2026-08-01T00:00:00Z", false),
        alert("b", "2026-08-02T00:00:00Z", true),
        alert("c", "2026-08-03T00:00:00Z", true),
    ];
    assert_eq!(locked_alert_count(&items, false), 2);
    assert_eq!(locked_alert_count(&items, true), 0);
}

#[test]
fn empty_inventory_is_handled() {
    assert!(visible_alerts(&[], false).is_empty());
    assert_eq!(locked_alert_count(&[], false), 0);
}
