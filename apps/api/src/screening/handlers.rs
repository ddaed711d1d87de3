//! Axum route handlers for the Screening API.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::{self, UploadedDocument};
use crate::llm_client::CompletionClient;
use crate::screening::assembler::build_screening_prompt;
use crate::screening::corpus::merge_candidates;
use crate::screening::prompts::SCREENING_SYSTEM;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A resume file that failed extraction and was skipped. One malformed file
/// does not abort the batch; it is reported here so the caller can see what
/// was left out of the ranking.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    /// The completion service's report, verbatim.
    pub report: String,
    pub candidate_count: usize,
    pub skipped: Vec<SkippedDocument>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub job_description_detected: bool,
    pub candidate_count: usize,
    pub skipped: Vec<SkippedDocument>,
}

/// The parsed multipart form shared by both screening endpoints.
#[derive(Debug, Default)]
struct ScreeningForm {
    job_description_text: Option<String>,
    job_description_file: Option<UploadedDocument>,
    resumes: Vec<UploadedDocument>,
    pasted_resumes: Option<String>,
}

/// Extraction output for one request: the resolved job description, the
/// merged candidate corpus, and the resumes that had to be skipped.
#[derive(Debug)]
struct ExtractedBatch {
    job_description: String,
    candidates: Vec<String>,
    skipped: Vec<SkippedDocument>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screen
///
/// Full screening pipeline: multipart parse → source validation → document
/// extraction → corpus merge → prompt assembly → completion call.
/// Returns the report verbatim plus any per-resume skips.
pub async fn handle_screen(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreenResponse>, AppError> {
    let form = read_form(multipart).await?;
    validate_sources(&form)?;
    run_screening(state.llm.as_ref(), form).await.map(Json)
}

/// POST /api/v1/screen/preview
///
/// Extraction and merge only — no completion call. Lets a caller verify what
/// the screen endpoint would see (resolved JD, candidate count, skips)
/// before spending tokens.
pub async fn handle_preview(
    multipart: Multipart,
) -> Result<Json<PreviewResponse>, AppError> {
    let form = read_form(multipart).await?;
    let batch = extract_batch(&form)?;
    Ok(Json(PreviewResponse {
        job_description_detected: !batch.job_description.is_empty(),
        candidate_count: batch.candidates.len(),
        skipped: batch.skipped,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

async fn run_screening(
    llm: &dyn CompletionClient,
    form: ScreeningForm,
) -> Result<ScreenResponse, AppError> {
    let batch = extract_batch(&form)?;

    if batch.job_description.is_empty() {
        return Err(AppError::Validation(
            "no job description text could be resolved from the provided input".to_string(),
        ));
    }
    if batch.candidates.is_empty() {
        return Err(AppError::Validation(
            "no usable candidate text remained after extraction".to_string(),
        ));
    }

    let prompt = build_screening_prompt(&batch.job_description, &batch.candidates);
    info!(
        "screening {} candidates ({} skipped)",
        batch.candidates.len(),
        batch.skipped.len()
    );

    let report = llm.complete(SCREENING_SYSTEM, &prompt).await?;

    Ok(ScreenResponse {
        report,
        candidate_count: batch.candidates.len(),
        skipped: batch.skipped,
    })
}

/// Cheap presence checks that run before any extraction cost is incurred.
fn validate_sources(form: &ScreeningForm) -> Result<(), AppError> {
    let has_job_description = form.job_description_file.is_some()
        || form
            .job_description_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
    if !has_job_description {
        return Err(AppError::Validation(
            "a job description is required: paste text or upload a file".to_string(),
        ));
    }

    let has_candidates = !form.resumes.is_empty()
        || form
            .pasted_resumes
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
    if !has_candidates {
        return Err(AppError::Validation(
            "at least one candidate resume is required: upload files or paste text".to_string(),
        ));
    }

    Ok(())
}

fn extract_batch(form: &ScreeningForm) -> Result<ExtractedBatch, AppError> {
    // An uploaded JD file overrides pasted JD text whenever it yields any
    // content. A JD file that fails extraction blocks the whole request —
    // there is nothing meaningful to screen against without it.
    let jd_from_file = extract::extract_text(form.job_description_file.as_ref())?;
    let job_description = if !jd_from_file.trim().is_empty() {
        jd_from_file.trim().to_string()
    } else {
        form.job_description_text
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string()
    };

    // Resume failures are per-document: skip and report, keep the batch.
    let mut file_texts: Vec<String> = Vec::new();
    let mut skipped: Vec<SkippedDocument> = Vec::new();
    for document in &form.resumes {
        match extract::extract_text(Some(document)) {
            Ok(text) => file_texts.push(text),
            Err(e) => {
                warn!("skipping resume {}: {e}", document.name);
                skipped.push(SkippedDocument {
                    file_name: document.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let candidates = merge_candidates(file_texts, form.pasted_resumes.as_deref());

    Ok(ExtractedBatch {
        job_description,
        candidates,
        skipped,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart parsing
// ────────────────────────────────────────────────────────────────────────────

async fn read_form(mut multipart: Multipart) -> Result<ScreeningForm, AppError> {
    let mut form = ScreeningForm::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_part)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                form.job_description_text = Some(field.text().await.map_err(bad_part)?);
            }
            "job_description_file" => {
                let file_name = field.file_name().unwrap_or("job_description").to_string();
                let bytes = field.bytes().await.map_err(bad_part)?;
                form.job_description_file = Some(UploadedDocument {
                    name: file_name,
                    bytes,
                });
            }
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let bytes = field.bytes().await.map_err(bad_part)?;
                form.resumes.push(UploadedDocument {
                    name: file_name,
                    bytes,
                });
            }
            "pasted_resumes" => {
                form.pasted_resumes = Some(field.text().await.map_err(bad_part)?);
            }
            other => {
                warn!("ignoring unknown multipart field: {other}");
            }
        }
    }

    Ok(form)
}

fn bad_part(e: MultipartError) -> AppError {
    AppError::Validation(format!("invalid multipart payload: {e}"))
}
