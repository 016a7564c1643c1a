pub mod alerts;
pub mod chat;
pub mod donations;
pub mod error;
pub mod export;
pub mod extract;
pub mod router;
pub mod state;
pub mod users;
