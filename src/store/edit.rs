use crate::entity::Note;

/// Title and content of a note being edited, held apart from the
/// collection until saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl WorkingCopy {
    pub fn of(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

/// Edit flow: `Idle` until a note is opened, `Editing` until save or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(WorkingCopy),
}

impl EditSession {
    pub fn working_copy(&self) -> Option<&WorkingCopy> {
        match self {
            EditSession::Editing(copy) => Some(copy),
            EditSession::Idle => None,
        }
    }

    pub fn working_copy_mut(&mut self) -> Option<&mut WorkingCopy> {
        match self {
            EditSession::Editing(copy) => Some(copy),
            EditSession::Idle => None,
        }
    }

    /// Leave the editing state, handing back the working copy.
    pub fn finish(&mut self) -> Option<WorkingCopy> {
        match std::mem::take(self) {
            EditSession::Editing(copy) => Some(copy),
            EditSession::Idle => None,
        }
    }
}

/// The pending new-note input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}
