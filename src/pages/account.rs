//! Account page: profile edits, password change, account deletion.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::RequireAuth;
use crate::net::types::ProfileUpdate;
use crate::state::session::{self, SessionState};

const MIN_PASSWORD_LEN: usize = 8;

/// Name/email pair from the live profile, empty fields when none is loaded.
fn profile_identity(state: &SessionState) -> (String, String) {
    state
        .profile
        .as_ref()
        .map(|p| (p.name.clone(), p.email.clone()))
        .unwrap_or_default()
}

/// Build the partial update from the form, or `None` when nothing changed.
fn profile_update_from_form(
    current_name: &str,
    current_email: &str,
    name: &str,
    email: &str,
) -> Option<ProfileUpdate> {
    let name = name.trim();
    let email = email.trim();
    let mut update = ProfileUpdate::default();
    if !name.is_empty() && name != current_name {
        update.name = Some(name.to_owned());
    }
    if !email.is_empty() && email.contains('@') && email != current_email {
        update.email = Some(email.to_owned());
    }
    if update.name.is_none() && update.email.is_none() {
        None
    } else {
        Some(update)
    }
}

fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    if current.is_empty() {
        return Err("Enter your current password.");
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 8 characters.");
    }
    if new != confirm {
        return Err("New passwords do not match.");
    }
    Ok((current.to_owned(), new.to_owned()))
}

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AccountContent />
        </RequireAuth>
    }
}

#[component]
fn AccountContent() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let (initial_name, initial_email) = session_signal.with_untracked(profile_identity);
    let name = RwSignal::new(initial_name);
    let email = RwSignal::new(initial_email);

    let current_pw = RwSignal::new(String::new());
    let new_pw = RwSignal::new(String::new());
    let confirm_pw = RwSignal::new(String::new());
    let pw_message = RwSignal::new(None::<String>);

    let show_delete = RwSignal::new(false);
    let local_error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);

    let busy = move || session_signal.get().loading;
    let banner = Signal::derive(move || {
        local_error.get().or_else(|| session_signal.get().error)
    });

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (current_name, current_email) = session_signal.with_untracked(profile_identity);
        let Some(update) = profile_update_from_form(&current_name, &current_email, &name.get(), &email.get())
        else {
            local_error.set(Some("Nothing to save.".to_owned()));
            return;
        };
        local_error.set(None);
        saved.set(false);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if session::update_profile(session_signal, update).await {
                saved.set(true);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (current_value, new_value) =
            match validate_password_change(&current_pw.get(), &new_pw.get(), &confirm_pw.get()) {
                Ok(values) => values,
                Err(message) => {
                    pw_message.set(Some(message.to_owned()));
                    return;
                }
            };
        pw_message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_password(&current_value, &new_value).await {
                Ok(resp) => {
                    current_pw.set(String::new());
                    new_pw.set(String::new());
                    confirm_pw.set(String::new());
                    pw_message.set(Some(resp.message));
                }
                Err(err) => pw_message.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current_value, new_value);
        }
    };

    let on_delete_confirm = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_account().await {
                    Ok(()) => {
                        session::logout(session_signal);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        show_delete.set(false);
                        local_error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    });

    view! {
        <div class="account-page">
            <h1>"Your account"</h1>

            <section class="account-section">
                <h2>"Profile"</h2>
                <form class="auth-form" on:submit=on_save_profile>
                    <input
                        class="auth-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        "Save changes"
                    </button>
                </form>
                <ErrorBanner message=banner />
                <Show when=move || saved.get()>
                    <p class="account-section__confirmation">"Profile updated."</p>
                </Show>
            </section>

            <section class="account-section">
                <h2>"Password"</h2>
                <form class="auth-form" on:submit=on_change_password>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Current password"
                        prop:value=move || current_pw.get()
                        on:input=move |ev| current_pw.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password (min 8 characters)"
                        prop:value=move || new_pw.get()
                        on:input=move |ev| new_pw.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm_pw.get()
                        on:input=move |ev| confirm_pw.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        "Change password"
                    </button>
                </form>
                <Show when=move || pw_message.get().is_some()>
                    <p class="account-section__message">{move || pw_message.get().unwrap_or_default()}</p>
                </Show>
            </section>

            <section class="account-section account-section--danger">
                <h2>"Danger zone"</h2>
                <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                    "Delete account"
                </button>
            </section>

            <Show when=move || show_delete.get()>
                <DeleteAccountDialog
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

/// Confirmation dialog for the irreversible account deletion.
#[component]
fn DeleteAccountDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete account"</h2>
                <p class="dialog__danger">
                    "This permanently deletes your account, alerts, and preferences."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
