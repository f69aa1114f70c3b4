//! Article files on disk.
//!
//! An article is stored as TOML:
//!
//! ```toml
//! pull_quote = "A memorable line"
//! paragraphs = [
//!     "Opening paragraph with **bold** text.",
//!     "• first\n• second",
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editing::Document;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid article file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize article: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The on-disk shape of an article body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_quote: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl From<Article> for Document {
    fn from(article: Article) -> Self {
        let mut doc = Document::new(article.paragraphs);
        doc.pull_quote = article.pull_quote;
        doc
    }
}

impl From<&Document> for Article {
    fn from(doc: &Document) -> Self {
        Self {
            pull_quote: doc.pull_quote.clone(),
            paragraphs: doc.paragraphs().to_vec(),
        }
    }
}

/// Read an article file and return its document
pub fn read_article(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let article: Article = toml::from_str(&content).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} paragraph(s) from {}",
        article.paragraphs.len(),
        path.display()
    );
    Ok(article.into())
}

/// Write a document to an article file
pub fn write_article(path: &Path, doc: &Document) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(&Article::from(doc))?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_article() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drafts/story.toml");
        let doc = Document::new(vec![
            "Opening with **bold**.".to_string(),
            "• one\n• two".to_string(),
        ])
        .with_pull_quote("Worth quoting");

        write_article(&path, &doc).unwrap();
        let loaded = read_article(&path).unwrap();

        assert_eq!(loaded, doc);
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(read_article(&path), Err(IoError::NotFound(p)) if p == path));
    }

    #[test]
    fn invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "paragraphs = [unterminated").unwrap();
        assert!(matches!(read_article(&path), Err(IoError::Parse { .. })));
    }

    #[test]
    fn article_without_paragraphs_gets_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "pull_quote = \"only a quote\"\n").unwrap();

        let doc = read_article(&path).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.pull_quote.as_deref(), Some("only a quote"));
    }
}
