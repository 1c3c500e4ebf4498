//! Auth Form Components
//!
//! Sign-in and sign-up cards. Validation errors render inline under
//! the form; success stores the session and jumps to the first
//! dashboard.

use leptos::prelude::*;

use crate::auth;
use crate::models::ToastKind;
use crate::records::use_stores;
use crate::routes::Page;
use crate::store::{navigate, push_toast, set_session, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ui = use_app_store();
    let storage = use_stores().storage();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match auth::login(&storage, &email.get(), &password.get()) {
            Ok(session) => {
                let name = session.user.name.clone();
                set_session(&ui, Some(session));
                navigate(&ui, Page::DroneDashboard);
                push_toast(&ui, ToastKind::Success, format!("Welcome back, {name}"));
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="page auth">
            <form class="auth-card" on:submit=submit>
                <h1>"Sign In"</h1>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="you@example.in"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="cta">"Sign In"</button>
                <p class="form-note">"Demo environment: any email and password sign you in."</p>
                <p class="form-switch">
                    "New here? "
                    <button
                        type="button"
                        class="inline-link"
                        on:click=move |_| navigate(&ui, Page::Register)
                    >
                        "Create an account"
                    </button>
                </p>
            </form>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = use_app_store();
    let storage = use_stores().storage();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match auth::register(&storage, &name.get(), &email.get(), &password.get()) {
            Ok(session) => {
                set_session(&ui, Some(session));
                navigate(&ui, Page::DroneDashboard);
                push_toast(&ui, ToastKind::Success, "Account created, welcome aboard");
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="page auth">
            <form class="auth-card" on:submit=submit>
                <h1>"Create Account"</h1>
                <label>
                    "Name"
                    <input
                        type="text"
                        placeholder="Asha Chavan"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="you@example.in"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="cta">"Create Account"</button>
                <p class="form-switch">
                    "Already registered? "
                    <button
                        type="button"
                        class="inline-link"
                        on:click=move |_| navigate(&ui, Page::Login)
                    >
                        "Sign in"
                    </button>
                </p>
            </form>
        </div>
    }
}
