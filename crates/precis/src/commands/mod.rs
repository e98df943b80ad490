pub mod compare;
pub mod stats;
pub mod summarize;
pub mod version;

use anyhow::Context;
use precis_core::{Summarizer, SummarizerConfig};
use std::io::Read;
use std::path::Path;

/// Read the document from `file`, or stdin when absent
pub fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Build a summarizer from a JSON config file, or the defaults
pub fn load_summarizer(config: Option<&Path>) -> anyhow::Result<Summarizer> {
    let config = match config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let config = SummarizerConfig::from_json(&contents)
                .with_context(|| format!("invalid config {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded summarizer config");
            config
        }
        None => SummarizerConfig::default(),
    };
    Ok(Summarizer::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.txt");
        std::fs::write(&path, "Hello there. General Kenobi.").unwrap();

        let text = read_input(Some(path.as_path())).unwrap();
        assert_eq!(text, "Hello there. General Kenobi.");
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_input(Some(temp_dir.path().join("missing.txt").as_path())).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_load_summarizer_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("precis.json");
        std::fs::write(&path, r#"{"min_token_chars": 3}"#).unwrap();

        let summarizer = load_summarizer(Some(path.as_path())).unwrap();
        assert_eq!(summarizer.config().min_token_chars, 3);
    }

    #[test]
    fn test_load_summarizer_rejects_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_summarizer(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_load_summarizer_defaults() {
        let summarizer = load_summarizer(None).unwrap();
        assert_eq!(summarizer.config(), &SummarizerConfig::default());
    }
}
