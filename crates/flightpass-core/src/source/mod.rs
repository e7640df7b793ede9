//! Input documents for the extractor.

mod email;

pub use email::{mail_text, mail_text_from_bytes};

use std::path::Path;

use tracing::debug;

use crate::error::SourceError;

/// Result type for document loading.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Kind of input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain text, usually OCR output.
    Text,
    /// RFC 822 mail message.
    Mail,
}

impl DocumentKind {
    /// Determine the kind from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" | "text" => Some(Self::Text),
            "eml" => Some(Self::Mail),
            _ => None,
        }
    }
}

/// A text blob handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name or other identifier.
    pub name: String,
    /// Text to extract from.
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Decode raw bytes of the given kind.
    ///
    /// Invalid UTF-8 in plain text is replaced rather than rejected.
    pub fn from_bytes(name: impl Into<String>, kind: DocumentKind, data: &[u8]) -> Result<Self> {
        let text = match kind {
            DocumentKind::Text => String::from_utf8_lossy(data).into_owned(),
            DocumentKind::Mail => mail_text_from_bytes(data)?,
        };
        Ok(Self::new(name, text))
    }
}

/// Load a document from disk.
pub fn load_document(path: &Path) -> Result<Document> {
    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| SourceError::Unsupported(path.display().to_string()))?;

    let data = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    debug!("Loaded {} ({:?}, {} bytes)", name, kind, data.len());

    Document::from_bytes(name, kind, &data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("a.TXT")), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_path(Path::new("a.eml")), Some(DocumentKind::Mail));
        assert_eq!(DocumentKind::from_path(Path::new("a.png")), None);
        assert_eq!(DocumentKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_lossy_text() {
        let doc = Document::from_bytes("x.txt", DocumentKind::Text, b"AI101 \xff").unwrap();
        assert!(doc.text.starts_with("AI101 "));
    }

    #[test]
    fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pass.txt");
        std::fs::write(&path, "FLIGHT: 6E205").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc, Document::new("pass.txt", "FLIGHT: 6E205"));
    }

    #[test]
    fn test_load_unsupported_and_missing() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            load_document(&dir.path().join("scan.png")),
            Err(SourceError::Unsupported(_))
        ));
        assert!(matches!(
            load_document(&dir.path().join("missing.txt")),
            Err(SourceError::Read { .. })
        ));
    }
}
