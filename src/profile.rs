//! Profile Mutator
//!
//! Loads and edits the signed-in user's profile. Photo removal is applied
//! locally without fetching the profile again.

use leptos_filedrop::FileOrigin;

use crate::api::UserApi;
use crate::dialogs::Dialogs;
use crate::error::{AppResult, Mutation, ValidationError};
use crate::models::{PhotoUpload, Profile};
use crate::routes::Route;
use crate::store::{Remote, StateCell};
use crate::validation::{validate_photo, validate_username, PhotoCandidate};

pub const DELETE_PHOTO_PROMPT: &str = "Are you sure you want to delete your photo?";

/// Shown in place of a missing photo
pub const NO_PHOTO_URL: &str = "/assets/no-image-icon.png";

/// Check a picked or dropped file. Both origins go through the same rules.
pub fn screen_photo(origin: FileOrigin, candidate: &PhotoCandidate) -> Result<(), ValidationError> {
    let verdict = validate_photo(candidate);
    if let Err(e) = &verdict {
        log::warn!("[PROFILE] rejected {:?} photo ({}, {} bytes): {}", origin, candidate.mime_type, candidate.size, e);
    }
    verdict
}

pub struct ProfileSync<A, C, D> {
    api: A,
    state: C,
    dialogs: D,
}

impl<A, C, D> ProfileSync<A, C, D>
where
    A: UserApi,
    C: StateCell<Remote<Profile>>,
    D: Dialogs,
{
    pub fn new(api: A, state: C, dialogs: D) -> Self {
        Self { api, state, dialogs }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub async fn load(&self) -> AppResult<Mutation> {
        if self.state.write(|s| *s = Remote::Loading).is_none() {
            return Ok(Mutation::Stale);
        }
        match self.api.current_user().await {
            Ok(profile) => Ok(self.settle(Remote::Loaded(profile))),
            Err(e) => {
                log::error!("[PROFILE] failed to fetch user: {}", e);
                self.settle(Remote::Failed("Failed to load profile data".to_string()));
                Err(e.into())
            }
        }
    }

    fn settle(&self, outcome: Remote<Profile>) -> Mutation {
        match self.state.write(|s| *s = outcome) {
            Some(()) => Mutation::Applied,
            None => Mutation::Stale,
        }
    }

    /// Send username and optional new photo. Returns where to go next.
    pub async fn update(&self, username: &str, photo: Option<PhotoUpload>) -> AppResult<Route> {
        if let Err(e) = self.check_update(username, photo.as_ref()) {
            self.dialogs.notify(&e.to_string());
            return Err(e.into());
        }
        match self.api.update_profile(username, photo).await {
            Ok(()) => {
                log::info!("[PROFILE] updated profile of {}", username);
                self.dialogs.notify("Profile updated successfully!");
                Ok(Route::Profile)
            }
            Err(e) => {
                log::error!("[PROFILE] failed to update profile: {}", e);
                self.dialogs.notify("Failed to update profile");
                Err(e.into())
            }
        }
    }

    fn check_update(&self, username: &str, photo: Option<&PhotoUpload>) -> Result<(), ValidationError> {
        validate_username(username)?;
        if let Some(photo) = photo {
            validate_photo(&PhotoCandidate {
                mime_type: photo.mime_type.clone(),
                size: photo.bytes.len() as u64,
            })?;
        }
        Ok(())
    }

    /// Delete the photo after confirmation, then clear it locally
    pub async fn delete_photo(&self) -> AppResult<Mutation> {
        if !self.dialogs.confirm(DELETE_PHOTO_PROMPT) {
            return Ok(Mutation::Declined);
        }
        match self.api.delete_photo().await {
            Ok(()) => {
                let cleared = self.state.write(|s| match s.loaded_mut() {
                    Some(profile) => {
                        profile.photo = None;
                        true
                    }
                    None => false,
                });
                Ok(if cleared == Some(true) { Mutation::Applied } else { Mutation::Stale })
            }
            Err(e) => {
                log::error!("[PROFILE] failed to delete photo: {}", e);
                self.dialogs.notify("Failed to delete photo");
                Err(e.into())
            }
        }
    }
}
