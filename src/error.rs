use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Not in a pocketnote project. Run 'pocketnote init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .pocketnote/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Ambiguous note id '{0}': matches more than one note")]
    AmbiguousId(String),

    #[error("Nothing to add: title and content are both empty")]
    EmptyNote,

    #[error("Already editing note {0}. Save or cancel it first.")]
    EditInProgress(String),

    #[error("No note is being edited")]
    NotEditing,

    #[error("Use --force to delete in non-interactive mode")]
    ConfirmationRequired,

    #[error("Storage unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, NoteError>;
