//! App Routes
//!
//! Every view the router knows, and its URL.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Task list
    Home,
    SignIn,
    SignUp,
    Profile,
    EditProfile,
    Task(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::EditProfile => "/profile/edit".to_string(),
            Route::Task(id) => format!("/task/{}", utf8_percent_encode(id, NON_ALPHANUMERIC)),
        }
    }
}
