//! User profile model

use serde::{Deserialize, Serialize};

use crate::media::MediaRef;

/// The single current-user account record.
///
/// The password is held and compared as a plaintext string. That matches the
/// exact-match login and change-password contract of this design; it is a
/// documented gap, not something to copy into a multi-user system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account email, also the login identifier
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Reference to a stored avatar image, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<MediaRef>,
}

impl UserProfile {
    /// Create a profile record.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        avatar: Option<MediaRef>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            avatar,
        }
    }
}
