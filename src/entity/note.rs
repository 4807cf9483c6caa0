// src/entity/note.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display color given to every new note.
pub const DEFAULT_COLOR: &str = "#fff";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Note {
    /// Build a note with a freshly minted id and the default color.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: mint_id(),
            title: title.into(),
            content: content.into(),
            color: default_color(),
        }
    }

    /// First seven characters of the id, as printed in listings.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }

    /// True when both title and content are blank after trimming.
    pub fn is_blank(title: &str, content: &str) -> bool {
        title.trim().is_empty() && content.trim().is_empty()
    }

    /// Case-insensitive substring match on title or content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Mint a new note id (random v4 UUID, hyphenated).
pub fn mint_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_uses_default_color() {
        let note = Note::new("Groceries", "Milk, eggs");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "Milk, eggs");
        assert_eq!(note.color, "#fff");
        assert!(Uuid::parse_str(&note.id).is_ok());
    }

    #[test]
    fn test_minted_ids_are_distinct() {
        let a = Note::new("a", "");
        let b = Note::new("a", "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_short_id() {
        let mut note = Note::new("t", "");
        note.id = "a1b2c3d4-0000".to_string();
        assert_eq!(note.short_id(), "a1b2c3d");

        note.id = "1700".to_string();
        assert_eq!(note.short_id(), "1700");
    }

    #[test]
    fn test_is_blank() {
        assert!(Note::is_blank("", "   "));
        assert!(Note::is_blank(" \t", "\n"));
        assert!(!Note::is_blank("Hi", ""));
        assert!(!Note::is_blank("", "x"));
    }

    #[test]
    fn test_matches_title_or_content() {
        let titled = Note::new("Notebook", "");
        let body = Note::new("", "this is a note");
        let other = Note::new("Groceries", "Milk");

        assert!(titled.matches("not"));
        assert!(body.matches("not"));
        assert!(!other.matches("not"));
    }

    #[test]
    fn test_missing_color_defaults() {
        let note: Note =
            serde_json::from_str(r#"{"id":"1","title":"t","content":"c"}"#).unwrap();
        assert_eq!(note.color, DEFAULT_COLOR);
    }
}
