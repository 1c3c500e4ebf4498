//! Profile Page Component
//!
//! Account summary plus the notification and language preferences.
//! Saving writes the session blob back to storage so preferences
//! survive a reload.

use leptos::prelude::*;

use crate::auth;
use crate::models::{Session, ToastKind};
use crate::records::use_stores;
use crate::store::{push_toast, set_session, use_app_store};

const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("hi", "हिंदी"), ("mr", "मराठी")];

#[component]
pub fn ProfilePage(session: Session) -> impl IntoView {
    let ui = use_app_store();
    let stores = use_stores();
    let storage = stores.storage();

    let (notifications, set_notifications) = signal(session.user.settings.notifications);
    let (newsletter, set_newsletter) = signal(session.user.settings.newsletter);
    let (language, set_language) = signal(session.user.settings.language.clone());

    let saved_session = session.clone();
    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut updated = saved_session.clone();
        updated.user.settings.notifications = notifications.get();
        updated.user.settings.newsletter = newsletter.get();
        updated.user.settings.language = language.get();
        auth::save_session(&storage, &updated);
        set_session(&ui, Some(updated));
        push_toast(&ui, ToastKind::Success, "Preferences saved");
    };

    let reset = {
        let stores = stores.clone();
        move |_| {
            stores.reset_demo_data();
            push_toast(&ui, ToastKind::Info, "Demo data reset to the sample pilot");
        }
    };

    view! {
        <div class="page profile">
            <h1>"Profile"</h1>
            <section class="profile-card">
                <h2>{session.user.name.clone()}</h2>
                <p class="profile-email">{session.user.email.clone()}</p>
                <span class="plan-badge">{format!("{} plan", session.user.plan)}</span>
            </section>

            <form class="profile-settings" on:submit=save>
                <h3>"Preferences"</h3>
                <label class="check-row">
                    <input
                        type="checkbox"
                        prop:checked=move || notifications.get()
                        on:change=move |ev| set_notifications.set(event_target_checked(&ev))
                    />
                    "Delivery notifications"
                </label>
                <label class="check-row">
                    <input
                        type="checkbox"
                        prop:checked=move || newsletter.get()
                        on:change=move |ev| set_newsletter.set(event_target_checked(&ev))
                    />
                    "Monthly impact newsletter"
                </label>
                <label>
                    "Language"
                    <select on:change=move |ev| set_language.set(event_target_value(&ev))>
                        {LANGUAGES
                            .iter()
                            .copied()
                            .map(|(code, label)| {
                                view! {
                                    <option
                                        value=code
                                        prop:selected=move || language.get() == code
                                    >
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" class="cta">"Save"</button>
            </form>

            <section class="danger-zone">
                <h3>"Demo data"</h3>
                <p>
                    "Every dashboard edit lives only in this browser. Resetting \
                     puts all six dashboards back on the sample pilot datasets."
                </p>
                <button class="row-action danger" on:click=reset>"Reset demo data"</button>
            </section>
        </div>
    }
}
