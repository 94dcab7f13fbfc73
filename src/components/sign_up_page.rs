//! Sign Up Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::{sign_up, SignUpForm};
use crate::context::use_app_context;
use crate::dialogs::BrowserDialogs;
use crate::error::AppError;
use crate::routes::Route;

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input
            id=id
            type=kind
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignUpForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            repeat_password: repeat_password.get_untracked(),
        };
        if let Err(e) = form.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let (api, session) = ctx.with_value(|c| (c.api(), c.session.clone()));
            let result = sign_up(&api, &session, &BrowserDialogs, &form).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(next) => navigate(&next.path(), Default::default()),
                Err(AppError::Validation(e)) => {
                    let _ = error.try_set(Some(e.to_string()));
                }
                Err(AppError::Request(_)) => {}
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign Up"</h1>
            <form class="auth-form" on:submit=on_submit>
                <Field id="username" label="Username" kind="text" value=username />
                <Field id="email" label="Email" kind="email" value=email />
                <Field id="password" label="Password" kind="password" value=password />
                <Field id="repeatPassword" label="Repeat Password" kind="password" value=repeat_password />

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
                </button>
            </form>
            <p>
                "Already have an account? "
                <A href=Route::SignIn.path()>"Sign In"</A>
            </p>
        </div>
    }
}
