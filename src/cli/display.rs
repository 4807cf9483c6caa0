//! Text rendering shared by the one-shot commands and the shell.

use crate::entity::Note;

fn title_or_placeholder(note: &Note) -> &str {
    if note.title.trim().is_empty() {
        "(untitled)"
    } else {
        &note.title
    }
}

/// One summary line, plus the first content line indented beneath it.
pub fn note_summary(note: &Note) -> String {
    let mut out = format!("  ({}) {}", note.short_id(), title_or_placeholder(note));
    if let Some(first) = note.content.lines().find(|l| !l.trim().is_empty()) {
        out.push_str("\n      ");
        out.push_str(first.trim());
    }
    out
}

pub fn note_list(notes: &[&Note], empty_message: &str) -> String {
    if notes.is_empty() {
        return empty_message.to_string();
    }
    notes
        .iter()
        .map(|n| note_summary(n))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn note_detail(note: &Note) -> String {
    let mut out = format!(
        "Note {}\nTitle: {}\nColor: {}",
        note.id, note.title, note.color
    );
    if !note.content.is_empty() {
        out.push_str("\n\n");
        out.push_str(&note.content);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            color: "#fff".to_string(),
        }
    }

    #[test]
    fn test_summary_shows_short_id_and_first_line() {
        let line = note_summary(&note("abcdef123456", "Groceries", "\nMilk\nEggs"));
        assert_eq!(line, "  (abcdef1) Groceries\n      Milk");
    }

    #[test]
    fn test_summary_untitled() {
        let line = note_summary(&note("1", "  ", ""));
        assert_eq!(line, "  (1) (untitled)");
    }

    #[test]
    fn test_list_empty_message() {
        assert_eq!(note_list(&[], "No notes found."), "No notes found.");
    }

    #[test]
    fn test_detail() {
        let text = note_detail(&note("id-1", "Work", "Finish report"));
        assert!(text.starts_with("Note id-1\nTitle: Work\nColor: #fff"));
        assert!(text.ends_with("\n\nFinish report"));
    }
}
