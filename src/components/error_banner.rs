//! Inline error banner shown under forms and list headers.

use leptos::prelude::*;

/// Renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="error-banner">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
