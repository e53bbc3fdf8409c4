//! Conversation input reader
//!
//! Reads prior messages as a JSON array of `{role, name?, content}` objects
//! and appends the command-line prompt as a final user message.

use debate_domain::ConversationEntry;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversationInputError {
    #[error("Failed to read conversation from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid conversation JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Nothing to debate: pass a prompt or a non-empty --conversation file")]
    Empty,
}

pub struct ConversationReader;

impl ConversationReader {
    /// Build the debate input from an optional file (`-` reads stdin) and prompt
    pub fn read(
        file: Option<&Path>,
        prompt: Option<&str>,
    ) -> Result<Vec<ConversationEntry>, ConversationInputError> {
        let mut entries = match file {
            Some(path) => Self::parse(&Self::read_source(path)?, path)?,
            None => Vec::new(),
        };

        if let Some(prompt) = prompt.map(str::trim).filter(|p| !p.is_empty()) {
            entries.push(ConversationEntry::user(prompt));
        }

        if !entries
            .iter()
            .any(|e| e.seed_role().is_some() && !e.content.trim().is_empty())
        {
            return Err(ConversationInputError::Empty);
        }
        Ok(entries)
    }

    fn read_source(path: &Path) -> Result<String, ConversationInputError> {
        let io_error = |source| ConversationInputError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path == Path::new("-") {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(io_error)?;
            Ok(buffer)
        } else {
            std::fs::read_to_string(path).map_err(io_error)
        }
    }

    pub fn parse(
        source: &str,
        path: &Path,
    ) -> Result<Vec<ConversationEntry>, ConversationInputError> {
        serde_json::from_str(source).map_err(|source| ConversationInputError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_only() {
        let entries = ConversationReader::read(None, Some("  Write a poem ")).unwrap();
        assert_eq!(entries, vec![ConversationEntry::user("Write a poem")]);
    }

    #[test]
    fn test_file_then_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");
        std::fs::write(
            &path,
            r#"[
                {"role": "system", "content": "Be nice"},
                {"role": "user", "content": "Draft a memo"},
                {"role": "assistant", "name": "Writer", "content": "Memo v1"}
            ]"#,
        )
        .unwrap();

        let entries = ConversationReader::read(Some(&path), Some("Shorter please")).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].name.as_deref(), Some("Writer"));
        assert_eq!(entries[3], ConversationEntry::user("Shorter please"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            ConversationReader::read(None, Some("   ")),
            Err(ConversationInputError::Empty)
        ));

        let only_system = ConversationReader::parse(
            r#"[{"role": "system", "content": "rules"}]"#,
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(only_system.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = ConversationReader::parse("{not json", Path::new("chat.json")).unwrap_err();
        assert!(matches!(err, ConversationInputError::Parse { .. }));
        assert!(err.to_string().contains("chat.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConversationReader::read(Some(Path::new("/definitely/missing.json")), None)
            .unwrap_err();
        assert!(matches!(err, ConversationInputError::Io { .. }));
    }
}
