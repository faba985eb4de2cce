//! Registry of users who have started the bot.

use rollcall_models::UserRecord;
use tracing::debug;

/// Ordered registry of `(user_id, username)` pairs.
///
/// The full pair is the key: registering the same user id with a changed
/// handle appends a second row instead of replacing the first. The registry
/// is append-only in memory; the caller persists it after each append.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<UserRecord>,
}

impl UserRegistry {
    /// Builds a registry from previously persisted records.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Number of registered pairs.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Registers a user unless the exact `(user_id, username)` pair is
    /// already present.
    ///
    /// Returns `true` when a new entry was appended; the caller is expected
    /// to persist the registry in that case. Callers must serialize
    /// invocations (the bot keeps the registry behind a write lock) so two
    /// concurrent registrations cannot both observe the pair as absent.
    pub fn register_if_absent(&mut self, user_id: u64, handle: Option<&str>) -> bool {
        let record = UserRecord::from_handle(user_id, handle);

        let present = self
            .users
            .iter()
            .any(|u| u.user_id == record.user_id && u.username == record.username);
        if present {
            return false;
        }

        debug!(user_id = record.user_id, username = %record.username, "registered new user");
        self.users.push(record);
        true
    }

    /// Full registry contents in registration order.
    pub fn export_all(&self) -> &[UserRecord] {
        &self.users
    }
}
