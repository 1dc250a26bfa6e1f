use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use zip::ZipArchive;

use crate::extraction::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Text runs plus the inline elements that stand for whitespace.
static RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab\s*/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
        .expect("run regex is valid")
});

/// Paragraph boundaries: a closing tag, or a self-closing empty paragraph.
static PARAGRAPH_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</w:p>|<w:p(?:\s[^>]*)?/>").expect("paragraph regex is valid")
});

static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);").expect("entity regex is valid")
});

/// Extracts paragraph text from a .docx file, one line per paragraph.
pub fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    Ok(document_text(&xml))
}

/// Walks `word/document.xml`, joining paragraphs with `\n`.
fn document_text(xml: &str) -> String {
    let mut chunks: Vec<&str> = PARAGRAPH_END_RE.split(xml).collect();
    // Whatever follows the last paragraph close (section properties) has no text.
    chunks.pop();

    chunks
        .into_iter()
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(chunk: &str) -> String {
    let mut text = String::new();
    for caps in RUN_RE.captures_iter(chunk) {
        match caps.get(1) {
            Some(run) => text.push_str(&unescape(run.as_str())),
            None if caps[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text
}

fn unescape(raw: &str) -> String {
    ENTITY_RE
        .replace_all(raw, |caps: &Captures| match &caps[1] {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            numeric => {
                let code = match numeric.strip_prefix("#x") {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => numeric[1..].parse::<u32>().ok(),
                };
                code.and_then(char::from_u32)
                    .map(String::from)
                    .unwrap_or_else(|| caps[0].to_string())
            }
        })
        .into_owned()
}
