//! Route Guard Components
//!
//! Render children or redirect, re-decided whenever the session changes.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;

use crate::context::use_app_context;
use crate::gate::{GateDecision, Guard};

fn gated(guard: Guard, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    move || match guard.decide(&ctx.session) {
        GateDecision::Render => children(),
        GateDecision::Redirect(route) => {
            log::debug!("[GATE] {:?} guard redirecting to {}", guard, route.path());
            // Replace so Back does not return to the guarded view
            view! {
                <Redirect
                    path=route.path()
                    options=NavigateOptions { replace: true, ..Default::default() }
                />
            }
            .into_any()
        }
    }
}

/// Signed-in users only
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    gated(Guard::Authenticated, children)
}

/// Signed-out users only
#[component]
pub fn RequireAnonymous(children: ChildrenFn) -> impl IntoView {
    gated(Guard::Anonymous, children)
}
