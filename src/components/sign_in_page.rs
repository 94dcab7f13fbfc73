//! Sign In Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::{sign_in, SignInForm};
use crate::context::use_app_context;
use crate::dialogs::BrowserDialogs;
use crate::error::AppError;
use crate::routes::Route;

#[component]
pub fn SignInPage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignInForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
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
            let result = sign_in(&api, &session, &BrowserDialogs, &form).await;
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
            <h1>"Sign In"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />

                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <p>
                "No account yet? "
                <A href=Route::SignUp.path()>"Sign Up"</A>
            </p>
        </div>
    }
}
