//! The canonical, ordered note collection.
//!
//! Newest notes sit at the front. Ids are unique within a collection; the
//! only way in is [`NoteCollection::add`] (mints an id) or
//! [`NoteCollection::from_notes`] (drops duplicate ids).

use std::collections::HashSet;

use crate::entity::Note;
use crate::error::{NoteError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from stored notes, keeping the first note for
    /// each id.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut seen = HashSet::with_capacity(notes.len());
        let mut kept = Vec::with_capacity(notes.len());
        for note in notes {
            if seen.insert(note.id.clone()) {
                kept.push(note);
            } else {
                tracing::warn!(id = %note.id, "dropping note with duplicate id");
            }
        }
        Self { notes: kept }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Prepend a new note. Returns `None` (and leaves the collection alone)
    /// when title and content are both blank.
    pub fn add(&mut self, title: &str, content: &str) -> Option<&Note> {
        if Note::is_blank(title, content) {
            return None;
        }
        self.notes.insert(0, Note::new(title, content));
        self.notes.first()
    }

    /// Replace title and content of the note with `id`. Id and color are
    /// left alone. Returns false if no such note exists.
    pub fn edit(&mut self, id: &str, title: &str, content: &str) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.title = title.to_string();
                note.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the note with `id`, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// Notes whose title or content contains `query`, ignoring case, in
    /// collection order. An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.is_empty() {
            return self.notes.iter().collect();
        }
        let needle = query.to_lowercase();
        self.notes.iter().filter(|n| n.matches(&needle)).collect()
    }

    /// Resolve a full id or a unique id prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&Note> {
        if let Some(note) = self.get(id_or_prefix) {
            return Ok(note);
        }
        if id_or_prefix.is_empty() {
            return Err(NoteError::NoteNotFound(id_or_prefix.to_string()));
        }

        let mut matches = self.notes.iter().filter(|n| n.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(note), None) => Ok(note),
            (Some(_), Some(_)) => Err(NoteError::AmbiguousId(id_or_prefix.to_string())),
            (None, _) => Err(NoteError::NoteNotFound(id_or_prefix.to_string())),
        }
    }
}
