pub mod session;
pub mod store;

pub use session::{AppState, ArticleEntry, Effect, Event};
pub use store::{use_store, Store};
