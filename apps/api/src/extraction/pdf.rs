use tokio::task;
use tracing::debug;

use crate::extraction::ExtractionError;

/// Extracts the text layer of a PDF held in memory.
///
/// `pdf-extract` is CPU-bound and can panic on malformed input, so it runs on
/// the blocking pool and a panic is reported as an extraction error.
pub async fn extract(data: Vec<u8>) -> Result<String, ExtractionError> {
    let size = data.len();
    let result = task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;

    match result {
        Ok(Ok(text)) => {
            debug!("Extracted {} chars from {size}-byte PDF", text.len());
            Ok(text)
        }
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(join_error) => Err(ExtractionError::Pdf(format!(
            "PDF parser aborted: {join_error}"
        ))),
    }
}
