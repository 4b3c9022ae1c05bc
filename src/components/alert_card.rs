//! Card rendering a single flight deal on the dashboard.

#[cfg(test)]
#[path = "alert_card_test.rs"]
mod alert_card_test;

use leptos::prelude::*;

use crate::net::types::FlightAlert;

/// Render a price with its currency code, dropping the decimals when the
/// amount is whole.
#[must_use]
pub fn format_price(price: f64, currency: &str) -> String {
    if (price - price.round()).abs() < f64::EPSILON {
        format!("{price:.0} {currency}")
    } else {
        format!("{price:.2} {currency}")
    }
}

/// Human label for the travel window.
#[must_use]
pub fn date_range_label(departure: &str, return_date: Option<&str>) -> String {
    match return_date {
        Some(back) => format!("{departure} to {back}"),
        None => format!("{departure}, one way"),
    }
}

/// One flight deal with route, price, discount badge, and deal link.
#[component]
pub fn AlertCard(alert: FlightAlert) -> impl IntoView {
    let price_label = format_price(alert.price, &alert.currency);
    let dates = date_range_label(&alert.departure_date, alert.return_date.as_deref());
    let discount = alert.discount_percent();
    let route = alert.route_label();
    let deal_url = alert.deal_url.clone();

    view! {
        <div class="alert-card">
            <div class="alert-card__route">
                <span class="alert-card__airports">{route}</span>
                <Show when=move || discount.is_some()>
                    <span class="alert-card__discount">
                        {move || format!("-{}%", discount.unwrap_or_default())}
                    </span>
                </Show>
            </div>
            <div class="alert-card__price">{price_label}</div>
            <div class="alert-card__dates">{dates}</div>
            <Show when={
                let deal_url = deal_url.clone();
                move || deal_url.is_some()
            }>
                {
                    let href = deal_url.clone().unwrap_or_default();
                    view! {
                        <a class="alert-card__link" href=href target="_blank" rel="noopener">
                            "View deal"
                        </a>
                    }
                }
            </Show>
        </div>
    }
}
