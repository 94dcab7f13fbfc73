//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::sign_out;
use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let logout = move |_| {
        let next = sign_out(&ctx.session);
        navigate(&next.path(), Default::default());
    };

    view! {
        <nav class="nav-bar">
            <A href=Route::Home.path()>"Tasks"</A>
            <A href=Route::Profile.path()>"Profile"</A>
            <button class="logout-btn" on:click=logout>"Logout"</button>
        </nav>
    }
}
