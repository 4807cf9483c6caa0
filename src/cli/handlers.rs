use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::display::{note_detail, note_list, note_summary};
use super::shell::Shell;
use crate::config::{Backend, Config};
use crate::confirm::{Decision, LinePrompt};
use crate::error::{NoteError, Result};
use crate::storage::{KvStore, UnavailableKvStore};
use crate::store::NoteStore;

pub const PROJECT_DIR: &str = ".pocketnote";

type Store = NoteStore<Box<dyn KvStore>>;

/// Find the project root by looking for .pocketnote/ in `start` and its parents.
fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Resolve the `.pocketnote/` directory for this invocation.
fn project_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let cwd = env::current_dir()?;
            find_project_root(&cwd).ok_or(NoteError::NotInitialized)?
        }
    };
    let project = root.join(PROJECT_DIR);
    if !project.is_dir() {
        return Err(NoteError::NotInitialized);
    }
    Ok(project)
}

fn open_store(dir: Option<&Path>) -> Result<Store> {
    let project = project_dir(dir)?;
    let config = Config::load(&project)?;
    // A backend that cannot be opened loads as an empty collection; writes
    // to it keep failing and are reported when the command flushes.
    let kv: Box<dyn KvStore> = match config.open_kv(&project) {
        Ok(kv) => kv,
        Err(e) => {
            tracing::warn!(backend = %config.backend, error = %e, "failed to open note store");
            Box::new(UnavailableKvStore::new(e.to_string()))
        }
    };
    Ok(NoteStore::from_config(kv, &config))
}

/// Persist anything the mutation left unsaved (autosave off or a failed
/// autosave), surfacing the error this time.
fn flush(store: &mut Store) -> Result<()> {
    if store.is_dirty() {
        store.save()?;
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

pub fn handle_init(dir: Option<PathBuf>, backend: Backend) -> Result<()> {
    let root = match dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    let project = root.join(PROJECT_DIR);

    if project.exists() {
        return Err(NoteError::AlreadyInitialized);
    }
    fs::create_dir_all(&project)?;

    let config = Config {
        backend,
        ..Config::default()
    };
    config.save(&project)?;

    // Write an empty collection so the backend file exists from the start.
    let kv = config.open_kv(&project)?;
    let mut store = NoteStore::from_config(kv, &config);
    store.save()?;

    println!(
        "Initialized pocketnote project in {} ({} backend)",
        root.display(),
        backend
    );
    Ok(())
}

pub fn handle_add(
    dir: Option<PathBuf>,
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = open_store(dir.as_deref())?;

    let title = title.unwrap_or_default();
    let content = if stdin {
        read_stdin()?
    } else {
        content.unwrap_or_default()
    };

    let note = store.add(&title, &content).ok_or(NoteError::EmptyNote)?;
    flush(&mut store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", note.short_id(), note.title);
    }
    Ok(())
}

pub fn handle_list(dir: Option<PathBuf>, json: bool) -> Result<()> {
    let store = open_store(dir.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.notes())?);
    } else if store.notes().is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes:\n");
        let notes: Vec<_> = store.notes().iter().collect();
        println!("{}", note_list(&notes, ""));
    }
    Ok(())
}

pub fn handle_search(dir: Option<PathBuf>, query: String, json: bool) -> Result<()> {
    let store = open_store(dir.as_deref())?;
    let results = store.search(&query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No results found for '{}'.", query);
    } else {
        println!("Search results for '{}':\n", query);
        println!("{}", note_list(&results, ""));
    }
    Ok(())
}

pub fn handle_show(dir: Option<PathBuf>, id: String, json: bool) -> Result<()> {
    let store = open_store(dir.as_deref())?;
    let note = store.resolve(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("{}", note_detail(note));
    }
    Ok(())
}

pub fn handle_edit(
    dir: Option<PathBuf>,
    id: String,
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = open_store(dir.as_deref())?;
    let id = store.resolve(&id)?.id.clone();

    let content = if stdin { Some(read_stdin()?) } else { content };

    store.begin_edit(&id)?;
    if let Some(title) = title {
        store.set_edit_title(title)?;
    }
    if let Some(content) = content {
        store.set_edit_content(content)?;
    }
    let note = store.save_edit()?;
    flush(&mut store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Updated note ({}) - {}", note.short_id(), note.title);
    }
    Ok(())
}

pub fn handle_delete(dir: Option<PathBuf>, id: String, force: bool) -> Result<()> {
    let mut store = open_store(dir.as_deref())?;
    let note = store.resolve(&id)?.clone();

    let removed = if force {
        store.delete_with_confirmation(&note.id, &mut Decision::Confirm)
    } else if atty::is(atty::Stream::Stdin) {
        eprintln!("{}", note_summary(&note));
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        let mut prompt = LinePrompt::new(&mut input, &mut output);
        store.delete_with_confirmation(&note.id, &mut prompt)
    } else {
        return Err(NoteError::ConfirmationRequired);
    };

    match removed {
        Some(note) => {
            flush(&mut store)?;
            println!("Deleted note ({}) - {}", note.short_id(), note.title);
        }
        None => println!("Cancelled."),
    }
    Ok(())
}

pub fn handle_shell(dir: Option<PathBuf>) -> Result<()> {
    let store = open_store(dir.as_deref())?;
    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout());
    shell.run()
}
