//! Public marketing landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Never overpay for a flight again"</h1>
                <p class="home-hero__subtitle">
                    "GlobeGenius watches fares from your home airports around the clock and
                    alerts you the moment a price drops."
                </p>
                <Show
                    when=move || session_signal.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="home-hero__actions">
                                <a class="btn btn--primary" href="/register">
                                    "Start free"
                                </a>
                                <a class="btn" href="/login">
                                    "Sign in"
                                </a>
                            </div>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to your deals"
                    </a>
                </Show>
            </section>
            <section class="home-features">
                <div class="home-feature">
                    <h2>"Real fares, real drops"</h2>
                    <p>"Alerts fire on verified price drops, not marketing promos."</p>
                </div>
                <div class="home-feature">
                    <h2>"Your airports"</h2>
                    <p>"Tell us where you fly from and we only watch routes you can use."</p>
                </div>
                <div class="home-feature">
                    <h2>"Premium deals"</h2>
                    <p>"Premium members see mistake fares and business-class drops first."</p>
                </div>
            </section>
        </div>
    }
}
