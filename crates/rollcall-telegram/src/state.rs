//! Shared state for the Telegram bot.

use std::path::Path;

use rollcall_core::{StudentDirectory, UserRegistry};
use rollcall_models::UserRecord;
use rollcall_persistence::{load_roster, RegistryStore};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::error::{BotError, Result};

/// Shared state for the bot, accessible across all handlers.
pub struct BotState {
    /// Immutable student roster; reads need no lock.
    directory: StudentDirectory,
    /// Registry of users who have started the bot. All mutation goes
    /// through the write lock so concurrent /start handlers cannot both
    /// append the same pair.
    registry: RwLock<UserRegistry>,
    /// Backing store for the registry.
    store: RegistryStore,
    /// Telegram user id allowed to run /users.
    admin_id: Option<u64>,
}

impl BotState {
    /// Loads state from disk.
    ///
    /// A roster that cannot be read is fatal. A missing registry file just
    /// starts an empty registry.
    pub fn load(roster_path: &Path, registry_path: &Path, admin_id: Option<u64>) -> Result<Self> {
        let records = load_roster(roster_path).map_err(BotError::RosterLoad)?;
        info!(students = records.len(), path = %roster_path.display(), "roster loaded");

        let store = RegistryStore::new(registry_path);
        let users = store.load().map_err(BotError::RegistryLoad)?;
        info!(users = users.len(), path = %registry_path.display(), "user registry loaded");

        Ok(Self {
            directory: StudentDirectory::new(records),
            registry: RwLock::new(UserRegistry::new(users)),
            store,
            admin_id,
        })
    }

    /// Builds state from already-loaded parts.
    pub fn with_parts(
        directory: StudentDirectory,
        registry: UserRegistry,
        store: RegistryStore,
        admin_id: Option<u64>,
    ) -> Self {
        Self {
            directory,
            registry: RwLock::new(registry),
            store,
            admin_id,
        }
    }

    /// The student roster.
    pub fn directory(&self) -> &StudentDirectory {
        &self.directory
    }

    /// Whether `user_id` may export the registry.
    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_id == Some(user_id)
    }

    /// Registers a user, persisting the registry when a new pair appears.
    ///
    /// The in-memory append is committed before the persist attempt; a
    /// failed write is logged for the operator and does not fail the
    /// caller, so the user still gets their reply.
    pub async fn register_user(&self, user_id: u64, handle: Option<&str>) {
        let mut registry = self.registry.write().await;
        if registry.register_if_absent(user_id, handle) {
            if let Err(e) = self.store.save(registry.export_all()) {
                error!(
                    error = %e,
                    path = %self.store.path().display(),
                    "failed to persist user registry"
                );
            }
        }
    }

    /// Snapshot of the full registry, in registration order.
    pub async fn export_users(&self) -> Vec<UserRecord> {
        self.registry.read().await.export_all().to_vec()
    }
}
