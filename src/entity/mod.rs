mod note;

pub use note::{mint_id, Note, DEFAULT_COLOR};
