//! Authentication: token storage, session lifecycle, route guard

pub mod cookie;
pub mod guard;
pub mod session;
pub mod token_store;

pub use cookie::AUTH_COOKIE;
pub use guard::{evaluate, GuardDecision};
pub use session::Session;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
