#![allow(dead_code)]
//! Taskboard Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod dialogs;
mod error;
mod gate;
mod models;
mod profile;
mod routes;
mod search;
mod session;
mod store;
mod task_detail;
mod task_list;
mod validation;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("[APP] starting taskboard");
    mount_to_body(App);
}
