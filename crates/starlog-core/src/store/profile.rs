//! Profile store: the single current-user account.
//!
//! Holds at most one [`UserProfile`] in memory and mirrors it to a
//! [`KeyValueStorage`] collaborator on every mutation. A logged-out state
//! is persisted by removing the stored key, never by writing a null.
//!
//! Credential checks are exact string comparisons against the in-memory
//! profile. There is no multi-account support and no hashing; failures are
//! reported as [`Error::Validation`] results, never panics.

use crate::error::{Error, Result};
use crate::media::MediaRef;
use crate::models::UserProfile;
use crate::persist::KeyValueStorage;
use crate::util::normalize_text;

/// Storage key the profile record lives under.
pub const PROFILE_KEY: &str = "current_profile";

/// Store for the current user's account record.
#[derive(Debug)]
pub struct ProfileStore<S: KeyValueStorage> {
    current: Option<UserProfile>,
    storage: S,
}

impl<S: KeyValueStorage> ProfileStore<S> {
    /// Create a store over the given storage backend, with no profile
    /// loaded. Call [`ProfileStore::restore`] to pick up a persisted one.
    pub fn new(storage: S) -> Self {
        Self {
            current: None,
            storage,
        }
    }

    /// The current profile, `None` when logged out.
    #[must_use]
    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Register a new account and make it the current profile.
    ///
    /// Overwrites any existing profile without complaint; this design has
    /// exactly one account slot.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        avatar: Option<MediaRef>,
    ) -> Result<()> {
        let email = normalize_text(email)
            .ok_or_else(|| Error::Validation("Email must not be empty".to_string()))?;
        if password.is_empty() {
            return Err(Error::Validation("Password must not be empty".to_string()));
        }
        self.current = Some(UserProfile::new(email, password, avatar));
        self.persist()
    }

    /// Validate credentials against the current profile. Does not mutate
    /// anything; a profile must already be registered or restored.
    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        let profile = self
            .current
            .as_ref()
            .ok_or_else(|| Error::Validation("No registered profile".to_string()))?;
        if profile.email == email && profile.password == password {
            Ok(())
        } else {
            Err(Error::Validation("Email or password does not match".to_string()))
        }
    }

    /// Clear the current profile and remove the persisted record.
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        self.persist()
    }

    /// Replace the email and avatar of the current profile.
    pub fn update_profile(&mut self, email: &str, avatar: Option<MediaRef>) -> Result<()> {
        let email = normalize_text(email)
            .ok_or_else(|| Error::Validation("Email must not be empty".to_string()))?;
        let profile = self
            .current
            .as_mut()
            .ok_or_else(|| Error::Validation("No registered profile".to_string()))?;
        profile.email = email;
        profile.avatar = avatar;
        self.persist()
    }

    /// Replace the password after an exact match of the old one. No
    /// mutation happens on a mismatch.
    pub fn change_password(&mut self, old_password: &str, new_password: &str) -> Result<()> {
        if new_password.is_empty() {
            return Err(Error::Validation("Password must not be empty".to_string()));
        }
        let profile = self
            .current
            .as_mut()
            .ok_or_else(|| Error::Validation("No registered profile".to_string()))?;
        if profile.password != old_password {
            return Err(Error::Validation("Old password does not match".to_string()));
        }
        profile.password = new_password.to_string();
        self.persist()
    }

    /// Load the persisted profile, if any.
    ///
    /// An absent key restores the logged-out state and is not an error;
    /// bytes that fail to decode are, so callers can tell corruption apart
    /// from "never saved".
    pub fn restore(&mut self) -> Result<()> {
        match self.storage.get(PROFILE_KEY)? {
            Some(bytes) => {
                let profile: UserProfile = serde_json::from_slice(&bytes).map_err(|error| {
                    tracing::warn!(%error, "Persisted profile failed to decode");
                    Error::Serialization(error)
                })?;
                self.current = Some(profile);
            }
            None => self.current = None,
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        match &self.current {
            Some(profile) => {
                let bytes = serde_json::to_vec(profile)?;
                self.storage.set(PROFILE_KEY, &bytes)
            }
            None => self.storage.remove(PROFILE_KEY),
        }
    }
}
