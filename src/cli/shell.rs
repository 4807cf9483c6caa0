//! Interactive single-screen session over a [`NoteStore`].
//!
//! Reads one command per line. The new-note draft, search query, and edit
//! session all live in the store, so the shell only translates lines into
//! store calls and prints the result.

use std::io::{BufRead, Write};

use super::display::{note_detail, note_list};
use crate::confirm::LinePrompt;
use crate::error::Result;
use crate::storage::KvStore;
use crate::store::NoteStore;

const HELP: &str = "\
Commands:
  list                 show notes matching the current search
  search [QUERY]       set the search query (empty clears it)
  title TEXT           set the new note's title
  content TEXT         set the new note's content
  add                  add the new note
  open ID              start editing a note
  set-title TEXT       change the title being edited
  set-content TEXT     change the content being edited
  save                 save the edit
  cancel               discard the edit
  delete ID            delete a note (asks first)
  retry-save           write the notes again after a failed save
  help                 show this help
  quit                 leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S, R, W> {
    store: NoteStore<S>,
    input: R,
    output: W,
}

impl<S: KvStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(store: NoteStore<S>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "pocketnote shell: {} notes. Type 'help' for commands.",
            self.store.notes().len()
        )?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\n', '\r']);

            match self.execute(line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        if self.store.is_dirty() {
            tracing::warn!("leaving shell with unsaved notes");
            writeln!(
                self.output,
                "Warning: some changes could not be saved."
            )?;
        }
        Ok(())
    }

    fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim_start();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        // Extra separators are not part of the argument; its trailing
        // whitespace is kept.
        let arg = arg.trim_start();

        match command {
            "" => {}
            "help" => writeln!(self.output, "{}", HELP)?,
            "list" => self.print_visible()?,
            "search" => {
                self.store.set_query(arg);
                self.print_visible()?;
            }
            "title" => self.store.set_draft_title(arg),
            "content" => self.store.set_draft_content(arg),
            "add" => match self.store.submit_draft() {
                Some(note) => {
                    writeln!(self.output, "Added ({}) - {}", note.short_id(), note.title)?
                }
                None => writeln!(
                    self.output,
                    "Nothing to add: title and content are both empty."
                )?,
            },
            "open" => {
                let id = self.store.resolve(arg.trim())?.id.clone();
                self.store.begin_edit(&id)?;
                if let Some(note) = self.store.get(&id) {
                    writeln!(self.output, "Editing:\n{}", note_detail(note))?;
                }
            }
            "set-title" => self.store.set_edit_title(arg)?,
            "set-content" => self.store.set_edit_content(arg)?,
            "save" => {
                let note = self.store.save_edit()?;
                writeln!(self.output, "Saved ({}) - {}", note.short_id(), note.title)?;
            }
            "cancel" => {
                let message = if self.store.cancel_edit() {
                    "Edit cancelled."
                } else {
                    "Nothing to cancel."
                };
                writeln!(self.output, "{}", message)?;
            }
            "delete" => {
                let id = self.store.resolve(arg.trim())?.id.clone();
                let removed = {
                    let mut prompt = LinePrompt::new(&mut self.input, &mut self.output);
                    self.store.delete_with_confirmation(&id, &mut prompt)
                };
                match removed {
                    Some(note) => writeln!(
                        self.output,
                        "\nDeleted ({}) - {}",
                        note.short_id(),
                        note.title
                    )?,
                    None => writeln!(self.output, "\nCancelled.")?,
                }
            }
            "retry-save" => {
                self.store.save()?;
                writeln!(self.output, "Saved {} notes.", self.store.notes().len())?;
            }
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(
                self.output,
                "Unknown command '{}'. Type 'help' for commands.",
                other
            )?,
        }
        Ok(Flow::Continue)
    }

    fn print_visible(&mut self) -> Result<()> {
        let visible = self.store.visible();
        let text = if self.store.query().is_empty() {
            note_list(&visible, "No notes yet.")
        } else {
            note_list(
                &visible,
                &format!("No notes match '{}'.", self.store.query()),
            )
        };
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use std::io::Cursor;

    fn run_script(store: NoteStore<MemoryKvStore>, script: &str) -> (NoteStore<MemoryKvStore>, String) {
        let mut shell = Shell::new(store, Cursor::new(script.as_bytes().to_vec()), Vec::new());
        shell.run().unwrap();
        let output = String::from_utf8(shell.output().clone()).unwrap();
        (shell.store, output)
    }

    fn empty_store() -> NoteStore<MemoryKvStore> {
        NoteStore::load(MemoryKvStore::new())
    }

    #[test]
    fn test_add_from_draft() {
        let (store, output) = run_script(
            empty_store(),
            "title Groceries\ncontent Milk, eggs\nadd\nlist\n",
        );

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "Groceries");
        assert_eq!(store.notes()[0].content, "Milk, eggs");
        assert!(output.contains("Added ("));
        assert!(output.contains("Milk, eggs"));
    }

    #[test]
    fn test_blank_add_rejected() {
        let (store, output) = run_script(empty_store(), "content    \nadd\n");
        assert!(store.notes().is_empty());
        assert!(output.contains("Nothing to add"));
    }

    #[test]
    fn test_search_filters_view() {
        let mut store = empty_store();
        store.add("Groceries", "Milk, eggs");
        store.add("Work", "Finish report");

        let (store, output) = run_script(store, "search MILK\nsearch nothing-here\n");
        assert!(output.contains("Groceries"));
        assert!(!output.contains("Work"));
        assert!(output.contains("No notes match 'nothing-here'."));
        assert_eq!(store.notes().len(), 2);
    }

    #[test]
    fn test_extra_spaces_after_command() {
        let mut store = empty_store();
        store.add("Groceries", "Milk, eggs");
        store.add("Work", "Finish report");

        let (store, output) = run_script(store, "search  milk\ntitle   Padded\nadd\n");
        assert_eq!(store.query(), "milk");
        assert!(!output.contains("No notes match"));
        assert!(output.contains("Groceries"));
        assert_eq!(store.notes()[0].title, "Padded");
    }

    #[test]
    fn test_edit_save_and_cancel() {
        let mut store = empty_store();
        let note = store.add("Draft", "body").unwrap();
        let prefix = &note.id[..8];

        let script = format!(
            "open {p}\nset-title Final\nsave\nopen {p}\nset-title Scratch\ncancel\n",
            p = prefix
        );
        let (store, output) = run_script(store, &script);

        assert_eq!(store.notes()[0].title, "Final");
        assert_eq!(store.notes()[0].content, "body");
        assert!(output.contains("Saved ("));
        assert!(output.contains("Edit cancelled."));
    }

    #[test]
    fn test_second_open_is_rejected() {
        let mut store = empty_store();
        let a = store.add("a", "").unwrap();
        let b = store.add("b", "").unwrap();

        let script = format!("open {}\nopen {}\n", a.id, b.id);
        let (store, output) = run_script(store, &script);
        assert!(output.contains("Error: Already editing"));
        assert_eq!(store.editing().unwrap().id, a.id);
    }

    #[test]
    fn test_delete_confirm_and_cancel() {
        let mut store = empty_store();
        let keep = store.add("keep", "").unwrap();
        let drop = store.add("drop", "").unwrap();

        let script = format!("delete {}\nn\ndelete {}\ny\n", keep.id, drop.id);
        let (store, output) = run_script(store, &script);

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].id, keep.id);
        assert!(output.contains("Cancelled."));
        assert!(output.contains("Deleted ("));
        assert!(output.contains("Are you sure you want to delete this note?"));
    }

    #[test]
    fn test_delete_at_eof_cancels() {
        let mut store = empty_store();
        let note = store.add("safe", "").unwrap();

        let (store, _) = run_script(store, &format!("delete {}\n", note.id));
        assert_eq!(store.notes().len(), 1);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (store, output) = run_script(
            empty_store(),
            "open missing\nsave\nbogus\ntitle after\nadd\nquit\ntitle ignored\nadd\n",
        );
        assert!(output.contains("Error: Note not found: missing"));
        assert!(output.contains("Error: No note is being edited"));
        assert!(output.contains("Unknown command 'bogus'"));
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "after");
    }
}
