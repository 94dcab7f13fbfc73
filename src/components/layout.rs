//! Signed-in Layout
//!
//! Navigation bar above the nested route, all behind `RequireAuth`.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::{NavBar, RequireAuth};

#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="app-layout">
                <NavBar />
                <hr />
                <main class="main-content">
                    <Outlet />
                </main>
            </div>
        </RequireAuth>
    }
}
