use std::path::Path;

use bytes::Bytes;

/// Document format derived from the file-name suffix, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// Legacy binary Word. Recognized but never extracted.
    Doc,
    Unsupported,
}

impl DocumentFormat {
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => DocumentFormat::Pdf,
            Some("docx") => DocumentFormat::Docx,
            Some("doc") => DocumentFormat::Doc,
            _ => DocumentFormat::Unsupported,
        }
    }
}

/// An uploaded document as received from the storage/upload layer:
/// raw bytes plus the file name the format tag is derived from.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub format: DocumentFormat,
    pub file_name: String,
}

impl RawDocument {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let format = DocumentFormat::from_file_name(&file_name);
        Self {
            bytes: bytes.into(),
            format,
            file_name,
        }
    }

    /// The file-name suffix, for error messages. Empty when the name has none.
    pub fn extension(&self) -> String {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_file_name_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.PDF"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("resume.Docx"),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_file_name("resume.DOC"),
            DocumentFormat::Doc
        );
    }

    #[test]
    fn test_unknown_suffix_is_unsupported() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.txt"),
            DocumentFormat::Unsupported
        );
        assert_eq!(
            DocumentFormat::from_file_name("resume"),
            DocumentFormat::Unsupported
        );
    }

    #[test]
    fn test_raw_document_derives_format_and_extension() {
        let doc = RawDocument::new("cv.PdF", vec![1, 2, 3]);
        assert_eq!(doc.format, DocumentFormat::Pdf);
        assert_eq!(doc.extension(), ".pdf");
        assert_eq!(doc.bytes.len(), 3);
    }

    #[test]
    fn test_extension_empty_when_missing() {
        let doc = RawDocument::new("resume", Vec::new());
        assert_eq!(doc.extension(), "");
    }
}
