use crate::parsing::{blocks::Block, render_blocks};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("no paragraph at index {index} (document has {len})")]
    NoSuchParagraph { index: usize, len: usize },
    #[error("cannot remove the only paragraph")]
    LastParagraph,
}

/// An article body: paragraphs in reading order plus an optional pull quote.
///
/// Paragraphs are addressed purely by index. A document always holds at least
/// one paragraph so the editor has somewhere to type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<String>,
    pub pull_quote: Option<String>,
}

impl Document {
    pub fn new(paragraphs: Vec<String>) -> Self {
        let paragraphs = if paragraphs.is_empty() {
            vec![String::new()]
        } else {
            paragraphs
        };
        Self {
            paragraphs,
            pull_quote: None,
        }
    }

    pub fn with_pull_quote(mut self, quote: impl Into<String>) -> Self {
        self.pull_quote = Some(quote.into());
        self
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.paragraphs.get(index).map(String::as_str)
    }

    /// Replaces a paragraph's text, returning the previous text.
    pub fn set(&mut self, index: usize, text: impl Into<String>) -> Result<String, DocumentError> {
        let len = self.len();
        let slot = self
            .paragraphs
            .get_mut(index)
            .ok_or(DocumentError::NoSuchParagraph { index, len })?;
        Ok(std::mem::replace(slot, text.into()))
    }

    /// Inserts an empty paragraph after `index`, returning the new index.
    pub fn insert_after(&mut self, index: usize) -> Result<usize, DocumentError> {
        self.check(index)?;
        self.paragraphs.insert(index + 1, String::new());
        Ok(index + 1)
    }

    /// Removes a paragraph, refusing to leave the document empty.
    pub fn remove(&mut self, index: usize) -> Result<String, DocumentError> {
        self.check(index)?;
        if self.paragraphs.len() == 1 {
            return Err(DocumentError::LastParagraph);
        }
        Ok(self.paragraphs.remove(index))
    }

    /// Renders every paragraph, one block sequence per paragraph.
    pub fn render(&self) -> Vec<Vec<Block>> {
        self.paragraphs.iter().map(|p| render_blocks(p)).collect()
    }

    fn check(&self, index: usize) -> Result<(), DocumentError> {
        if index < self.paragraphs.len() {
            Ok(())
        } else {
            Err(DocumentError::NoSuchParagraph {
                index,
                len: self.paragraphs.len(),
            })
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(vec![])
    }
}
