//! Text extraction for uploaded documents (résumés).
//!
//! Nothing in the career catalog depends on this; it only feeds the assistant
//! endpoints.

use std::path::Path;

use thiserror::Error;

pub mod docx;
pub mod pdf;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX archive: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("could not read document body: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Picks the extractor from the file extension (case-insensitive).
    pub fn from_filename(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" | "md" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Extracts plain text from an uploaded document.
pub async fn extract_text(kind: DocumentKind, data: &[u8]) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => pdf::extract(data.to_vec()).await,
        DocumentKind::Docx => docx::extract(data),
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(data).into_owned()),
    }
}

#[cfg(test)]
pub mod test_support {
    //! Builders for small, valid documents used by extraction and upload tests.

    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;

    /// Zips the given `(path, content)` parts into an in-memory archive.
    pub fn docx_bytes(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, content) in parts {
            writer.start_file(*name, options.clone()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// A .docx whose body holds one paragraph per entry in `paragraphs`.
    pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                if p.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>")
                }
            })
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}<w:sectPr/></w:body></w:document>"
        );
        docx_bytes(&[("[Content_Types].xml", "<Types/>"), ("word/document.xml", &xml)])
    }

    /// A single-page PDF that draws `text` in Helvetica, with a correct xref table.
    pub fn pdf_with_text(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{object}\nendobj\n", i + 1));
        }

        let xref_offset = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }
}
