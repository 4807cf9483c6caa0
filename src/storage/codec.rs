//! Blob format for the persisted collection: a JSON array of
//! `{id, title, content, color}` objects in collection order.

use crate::entity::Note;
use crate::error::Result;

pub fn encode_notes(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

pub fn decode_notes(blob: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(blob)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let note = Note {
            id: "1700000000000".to_string(),
            title: "Groceries".to_string(),
            content: "Milk, eggs".to_string(),
            color: "#fff".to_string(),
        };
        let blob = encode_notes(&[note]).unwrap();
        assert_eq!(
            blob,
            r##"[{"id":"1700000000000","title":"Groceries","content":"Milk, eggs","color":"#fff"}]"##
        );
    }

    #[test]
    fn test_save_then_load_is_identity() {
        let notes = vec![
            Note::new("Work", "Finish report"),
            Note::new("", "ünïcode \"quoted\"\nnewline"),
            Note::new("Groceries", ""),
        ];
        let decoded = decode_notes(&encode_notes(&notes).unwrap()).unwrap();
        assert_eq!(decoded, notes);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_notes("not json").is_err());
        assert!(decode_notes(r#"{"id":"1"}"#).is_err());
        assert!(decode_notes(r#"[{"id":1,"title":"t","content":"c"}]"#).is_err());
    }
}
