mod codec;
mod file_store;
mod kv;
mod sqlite_store;

pub use codec::{decode_notes, encode_notes};
pub use file_store::FileKvStore;
pub use kv::{validate_key, KvStore, MemoryKvStore, UnavailableKvStore};
pub use sqlite_store::{SqliteKvStore, SQLITE_DB};

/// Key the collection is stored under unless configured otherwise.
pub const NOTES_KEY: &str = "notes";
