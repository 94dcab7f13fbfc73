//! Auth Mutator
//!
//! Sign in / sign up. A token returned by the server becomes the session.

use crate::api::AuthApi;
use crate::dialogs::Dialogs;
use crate::error::{AppResult, ValidationError};
use crate::routes::Route;
use crate::session::SessionStore;
use crate::validation::{validate_email, validate_password, validate_username};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        if self.password != self.repeat_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Log in and keep the token. Returns where to go next.
pub async fn sign_in<A, S, D>(api: &A, session: &S, dialogs: &D, form: &SignInForm) -> AppResult<Route>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
    D: Dialogs + ?Sized,
{
    form.validate()?;
    match api.login(&form.email, &form.password).await {
        Ok(token) => {
            session.set(&token.access_token);
            log::info!("[AUTH] signed in as {}", form.email);
            Ok(Route::Home)
        }
        Err(e) => {
            log::error!("[AUTH] login failed: {}", e);
            dialogs.notify("Login failed. Please check your credentials.");
            Err(e.into())
        }
    }
}

/// Register, then behave like a successful sign-in
pub async fn sign_up<A, S, D>(api: &A, session: &S, dialogs: &D, form: &SignUpForm) -> AppResult<Route>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
    D: Dialogs + ?Sized,
{
    form.validate()?;
    match api.register(form.username.trim(), &form.email, &form.password).await {
        Ok(token) => {
            session.set(&token.access_token);
            log::info!("[AUTH] registered {}", form.username.trim());
            Ok(Route::Home)
        }
        Err(e) => {
            log::error!("[AUTH] registration failed: {}", e);
            dialogs.notify("Registration failed. Please try again.");
            Err(e.into())
        }
    }
}

/// Drop the session; the gates send the user to sign-in
pub fn sign_out<S: SessionStore + ?Sized>(session: &S) -> Route {
    session.clear();
    log::info!("[AUTH] signed out");
    Route::SignIn
}
