//! Taskboard Frontend App
//!
//! Router with the signed-in area behind `RequireAuth` and the auth pages behind `RequireAnonymous`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    EditProfilePage, Layout, ProfilePage, RequireAnonymous, SignInPage, SignUpPage, TaskDetailsPage, TaskListPage,
};
use crate::config::AppConfig;
use crate::context::{AppContext, Session};
use crate::session::LocalStorageSession;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] backend at {}", config.api_base_url);

    // Provide context to all children
    let session = Session::new(Arc::new(LocalStorageSession));
    provide_context(AppContext::new(session, config));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route
                    path=path!("/signin")
                    view=|| view! { <RequireAnonymous><SignInPage /></RequireAnonymous> }
                />
                <Route
                    path=path!("/signup")
                    view=|| view! { <RequireAnonymous><SignUpPage /></RequireAnonymous> }
                />
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=TaskListPage />
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!("profile/edit") view=EditProfilePage />
                    <Route path=path!("task/:id") view=TaskDetailsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
