//! Axum route handlers for the assistant (LLM relay) endpoints.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::markdown::clean_markdown;
use crate::assistant::prompts::{
    learning_path_prompt, learning_plan_prompt, resume_ats_prompt, resume_review_prompt,
};
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::extraction::{extract_text, DocumentKind, ExtractionError};
use crate::state::AppState;

const NO_TEXT_EXTRACTED: &str = "Could not extract text.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub interest: String,
    pub known_languages: Vec<String>,
    pub goal: String,
}

#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct LearningPlanRequest {
    pub language: String,
    pub level: String,
}

#[derive(Debug, Serialize)]
pub struct LearningPlanResponse {
    pub plan: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub extracted_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// A single file pulled out of a multipart form.
struct Upload {
    filename: String,
    data: Bytes,
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reads the file part named `field` from a multipart body; other parts are skipped.
async fn read_upload(multipart: &mut Multipart, field: &str) -> Result<Upload, AppError> {
    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if part.name() != Some(field) {
            continue;
        }
        let filename = part.file_name().unwrap_or_default().to_string();
        let data = part
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok(Upload { filename, data });
    }

    Err(AppError::Validation(format!(
        "multipart field '{field}' is required"
    )))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /gemini-chat
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    require("question", &request.question)?;

    let answer = state
        .llm
        .generate(&request.question)
        .await
        .map_err(|e| AppError::Llm(format!("Chat failed: {e}")))?;

    Ok(Json(ChatResponse { answer }))
}

/// POST /ai-tools/resume-analyzer
///
/// Reviews pasted résumé text. Markdown emphasis is stripped from the reply.
pub async fn handle_resume_analyzer(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeTextRequest>,
) -> Result<Json<ToolResponse>, AppError> {
    require("resume_text", &request.resume_text)?;

    let result = state
        .llm
        .generate(&resume_review_prompt(&request.resume_text))
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    Ok(Json(ToolResponse {
        response: clean_markdown(&result),
    }))
}

/// POST /ai-tools/learning-path-generator
pub async fn handle_learning_path(
    State(state): State<AppState>,
    AppJson(request): AppJson<LearningPathRequest>,
) -> Result<Json<ToolResponse>, AppError> {
    require("interest", &request.interest)?;
    require("goal", &request.goal)?;

    let prompt = learning_path_prompt(&request.interest, &request.known_languages, &request.goal);
    let result = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Learning path generation failed: {e}")))?;

    Ok(Json(ToolResponse {
        response: clean_markdown(&result),
    }))
}

/// POST /ai-tools/resume-upload
///
/// Extracts text from an uploaded PDF or DOCX résumé (multipart field `file`).
pub async fn handle_resume_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart?;
    let upload = read_upload(&mut multipart, "file").await?;
    let kind = match DocumentKind::from_filename(&upload.filename) {
        Some(kind @ (DocumentKind::Pdf | DocumentKind::Docx)) => kind,
        _ => return Err(ExtractionError::UnsupportedFormat(upload.filename).into()),
    };

    let text = extract_text(kind, &upload.data).await?;
    info!(
        "Extracted {} chars from uploaded {:?} ({} bytes)",
        text.len(),
        kind,
        upload.data.len()
    );

    let extracted_text = if text.trim().is_empty() {
        NO_TEXT_EXTRACTED.to_string()
    } else {
        text
    };
    Ok(Json(UploadResponse { extracted_text }))
}

/// POST /generate-learning-plan
pub async fn handle_learning_plan(
    State(state): State<AppState>,
    AppJson(request): AppJson<LearningPlanRequest>,
) -> Result<Json<LearningPlanResponse>, AppError> {
    require("language", &request.language)?;
    require("level", &request.level)?;

    let plan = state
        .llm
        .generate(&learning_plan_prompt(&request.language, &request.level))
        .await
        .map_err(|e| AppError::Llm(format!("Learning plan generation failed: {e}")))?;

    Ok(Json(LearningPlanResponse { plan }))
}

/// POST /analyze-resume
///
/// Uploaded résumé (multipart field `resume`) → ATS-style review. Files that are
/// not PDF or DOCX are read as UTF-8 text.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut multipart = multipart?;
    let upload = read_upload(&mut multipart, "resume").await?;
    let kind = DocumentKind::from_filename(&upload.filename).unwrap_or(DocumentKind::PlainText);
    let text = extract_text(kind, &upload.data).await?;

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the uploaded resume".to_string(),
        ));
    }

    let analysis = state
        .llm
        .generate(&resume_ats_prompt(&text))
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    Ok(Json(AnalysisResponse { analysis }))
}
