pub mod table;

mod queries;
mod seed;

use thiserror::Error;

use shoal_types::models::{Alert, ChatMessage, Donation, User};

use crate::table::Table;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

/// Input for persisting one side of a chat exchange. Unlike the HTTP send
/// request, this carries `is_user` because both the person's message and
/// the assistant's reply land in the same table.
#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub user_id: Option<i64>,
    pub message: String,
    pub is_user: bool,
    pub language: Option<String>,
}

/// All entity state for the process lifetime. One arena table per kind,
/// each behind its own coarse lock; there are no cross-table transactions,
/// so every store call touches exactly one table.
///
/// Constructed once at startup and handed to the API layer — tests build
/// their own isolated instances.
pub struct Store {
    pub(crate) users: Table<User>,
    pub(crate) donations: Table<Donation>,
    pub(crate) alerts: Table<Alert>,
    pub(crate) chat_messages: Table<ChatMessage>,
}

impl Store {
    /// An empty store. Ids start at 1 in every table.
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            donations: Table::new(),
            alerts: Table::new(),
            chat_messages: Table::new(),
        }
    }

    /// A store pre-populated with the demonstration data set the front-end
    /// expects on a fresh deployment.
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        seed::install(&store);
        store
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
