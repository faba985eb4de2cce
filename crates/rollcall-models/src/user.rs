//! User registry records.

use serde::{Deserialize, Serialize};

/// Display name used when the platform reports no handle.
pub const NO_HANDLE: &str = "N/A";

/// One row of the user registry: a `(user_id, username)` pair.
///
/// The registry treats the full pair as the key, so the same user id can
/// appear more than once if the handle changed between registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Numeric Telegram identity.
    pub user_id: u64,

    /// Normalized display name: `@handle`, or `N/A` without a handle.
    pub username: String,
}

impl UserRecord {
    /// Creates a record from an already-normalized username.
    pub fn new(user_id: u64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Creates a record from the platform-provided handle.
    ///
    /// A present, non-empty handle becomes `@handle`; anything else is the
    /// literal `N/A`.
    pub fn from_handle(user_id: u64, handle: Option<&str>) -> Self {
        let username = match handle {
            Some(h) if !h.is_empty() => format!("@{}", h),
            _ => NO_HANDLE.to_string(),
        };
        Self { user_id, username }
    }
}
