pub mod cli;
pub mod collection;
pub mod config;
pub mod confirm;
pub mod entity;
pub mod error;
pub mod logging;
pub mod storage;
pub mod store;

pub use collection::NoteCollection;
pub use config::Config;
pub use confirm::{Confirm, ConfirmPrompt, Decision};
pub use entity::Note;
pub use error::{NoteError, Result};
pub use store::NoteStore;
