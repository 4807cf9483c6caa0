//! The note store: owns the collection and every piece of state the screen
//! shows (new-note draft, search query, edit session), and writes the whole
//! collection back to the key-value store after each change.

mod edit;

pub use edit::{Draft, EditSession, WorkingCopy};

use crate::collection::NoteCollection;
use crate::config::Config;
use crate::confirm::{Confirm, ConfirmPrompt, Decision};
use crate::entity::Note;
use crate::error::{NoteError, Result};
use crate::storage::{decode_notes, encode_notes, KvStore, NOTES_KEY};

pub struct NoteStore<S> {
    kv: S,
    key: String,
    autosave: bool,
    notes: NoteCollection,
    dirty: bool,
    draft: Draft,
    query: String,
    session: EditSession,
}

impl<S: KvStore> NoteStore<S> {
    /// Load under the default key with autosave on.
    pub fn load(kv: S) -> Self {
        Self::load_with(kv, NOTES_KEY, true)
    }

    pub fn from_config(kv: S, config: &Config) -> Self {
        Self::load_with(kv, config.storage_key.clone(), config.autosave)
    }

    /// Load the collection stored under `key`. Missing, unreadable, or
    /// malformed data all start an empty collection; failures are logged.
    pub fn load_with(kv: S, key: impl Into<String>, autosave: bool) -> Self {
        let key = key.into();
        let notes = read_collection(&kv, &key);
        tracing::debug!(key = %key, count = notes.len(), "loaded notes");

        Self {
            kv,
            key,
            autosave,
            notes,
            dirty: false,
            draft: Draft::default(),
            query: String::new(),
            session: EditSession::default(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.notes()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Look up a note by full id or unique id prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&Note> {
        self.notes.resolve(id_or_prefix)
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    // ========== Mutations ==========

    /// Add a note at the front. Blank input is ignored and returns `None`.
    pub fn add(&mut self, title: &str, content: &str) -> Option<Note> {
        let note = self.notes.add(title, content)?.clone();
        tracing::debug!(id = %note.id, "added note");
        self.mutated();
        Some(note)
    }

    /// Replace title and content of `id`. Returns false if it does not exist.
    pub fn edit(&mut self, id: &str, title: &str, content: &str) -> bool {
        if !self.notes.edit(id, title, content) {
            return false;
        }
        tracing::debug!(id, "edited note");
        self.mutated();
        true
    }

    /// Remove `id` without asking.
    pub fn remove(&mut self, id: &str) -> Option<Note> {
        let removed = self.notes.remove(id)?;
        tracing::debug!(id, "deleted note");
        self.mutated();
        Some(removed)
    }

    /// Ask `confirm` before removing `id`. Unknown ids are not prompted for.
    pub fn delete_with_confirmation(
        &mut self,
        id: &str,
        confirm: &mut dyn Confirm,
    ) -> Option<Note> {
        self.notes.get(id)?;
        match confirm.confirm(&ConfirmPrompt::delete_note()) {
            Decision::Confirm => self.remove(id),
            Decision::Cancel => {
                tracing::debug!(id, "delete cancelled");
                None
            }
        }
    }

    // ========== Draft ==========

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Add the draft as a new note. The draft is kept if it was blank.
    pub fn submit_draft(&mut self) -> Option<Note> {
        let Draft { title, content } = self.draft.clone();
        let note = self.add(&title, &content)?;
        self.draft.clear();
        Some(note)
    }

    // ========== Search ==========

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The collection filtered by the current query.
    pub fn visible(&self) -> Vec<&Note> {
        self.notes.search(&self.query)
    }

    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.search(query)
    }

    // ========== Edit session ==========

    /// Open `id` for editing. Only one note can be open at a time.
    pub fn begin_edit(&mut self, id: &str) -> Result<&WorkingCopy> {
        if let Some(open) = self.session.working_copy() {
            return Err(NoteError::EditInProgress(open.id.clone()));
        }
        let note = self
            .notes
            .get(id)
            .ok_or_else(|| NoteError::NoteNotFound(id.to_string()))?;
        self.session = EditSession::Editing(WorkingCopy::of(note));
        self.session.working_copy().ok_or(NoteError::NotEditing)
    }

    pub fn editing(&self) -> Option<&WorkingCopy> {
        self.session.working_copy()
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) -> Result<()> {
        let copy = self.session.working_copy_mut().ok_or(NoteError::NotEditing)?;
        copy.title = title.into();
        Ok(())
    }

    pub fn set_edit_content(&mut self, content: impl Into<String>) -> Result<()> {
        let copy = self.session.working_copy_mut().ok_or(NoteError::NotEditing)?;
        copy.content = content.into();
        Ok(())
    }

    /// Write the working copy back and return to idle.
    pub fn save_edit(&mut self) -> Result<Note> {
        let copy = self.session.finish().ok_or(NoteError::NotEditing)?;
        if !self.edit(&copy.id, &copy.title, &copy.content) {
            return Err(NoteError::NoteNotFound(copy.id));
        }
        self.notes
            .get(&copy.id)
            .cloned()
            .ok_or(NoteError::NoteNotFound(copy.id))
    }

    /// Drop the working copy. Returns false if nothing was open.
    pub fn cancel_edit(&mut self) -> bool {
        self.session.finish().is_some()
    }

    // ========== Persistence ==========

    /// Write the whole collection under the store key.
    pub fn save(&mut self) -> Result<()> {
        let blob = encode_notes(self.notes.notes())?;
        self.kv.set(&self.key, &blob)?;
        self.dirty = false;
        tracing::debug!(key = %self.key, count = self.notes.len(), "saved notes");
        Ok(())
    }

    /// True when the in-memory collection has changes the store has not
    /// accepted yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mutated(&mut self) {
        self.dirty = true;
        if !self.autosave {
            return;
        }
        if let Err(e) = self.save() {
            tracing::warn!(key = %self.key, error = %e, "failed to save notes; keeping changes in memory");
        }
    }
}

fn read_collection<S: KvStore>(kv: &S, key: &str) -> NoteCollection {
    let blob = match kv.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return NoteCollection::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "error loading notes; starting empty");
            return NoteCollection::new();
        }
    };
    match decode_notes(&blob) {
        Ok(notes) => NoteCollection::from_notes(notes),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored notes are unreadable; starting empty");
            NoteCollection::new()
        }
    }
}
