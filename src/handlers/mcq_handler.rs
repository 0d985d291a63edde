use actix_multipart::Multipart;
use actix_web::{get, http::StatusCode, post, web, HttpRequest, HttpResponse, ResponseError};
use maud::Markup;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    middleware::get_request_id,
    models::{
        domain::{McqResult, Submission},
        dto::{request::SubmissionForm, response::McqResponseDto},
    },
    views::index::{index_page, PageState},
};

fn render(status: StatusCode, page: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(page.into_string())
}

async fn read_submission(state: &AppState, payload: Multipart) -> AppResult<Submission> {
    Ok(SubmissionForm::from_multipart(payload, state.config.max_upload_bytes)
        .await?
        .into_submission())
}

/// Limits enforced by the JSON API on top of the form pipeline.
fn check_api_submission(submission: &Submission) -> AppResult<()> {
    submission.validate()?;
    if submission.is_blank() {
        return Err(AppError::ValidationError(
            "enter a topic or upload a file".to_string(),
        ));
    }
    Ok(())
}

async fn run_page_pipeline(state: &AppState, payload: Multipart) -> AppResult<McqResult> {
    let submission = read_submission(state, payload).await?;
    state.mcq_service.generate(&submission).await
}

async fn run_api_pipeline(state: &AppState, payload: Multipart) -> AppResult<McqResult> {
    let submission = read_submission(state, payload).await?;
    check_api_submission(&submission)?;
    state.mcq_service.generate(&submission).await
}

fn log_failure(req: &HttpRequest, err: &AppError) {
    log::error!(
        "[{}] MCQ generation failed ({}): {}",
        get_request_id(req).unwrap_or_default(),
        err.error_code(),
        err
    );
}

#[get("/")]
pub async fn index() -> HttpResponse {
    render(StatusCode::OK, index_page(PageState::default()))
}

#[post("/")]
pub async fn generate_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> HttpResponse {
    match run_page_pipeline(&state, payload).await {
        Ok(result) => {
            let output = result.compose();
            render(
                StatusCode::OK,
                index_page(PageState {
                    mcqs: Some(&output),
                    error: None,
                }),
            )
        }
        Err(err) => {
            log_failure(&req, &err);
            let message = err.user_message();
            render(
                err.status_code(),
                index_page(PageState {
                    mcqs: None,
                    error: Some(&message),
                }),
            )
        }
    }
}

#[post("/api/mcqs")]
pub async fn generate_json(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let result = run_api_pipeline(&state, payload)
        .await
        .inspect_err(|err| log_failure(&req, err))?;

    Ok(HttpResponse::Ok().json(McqResponseDto::from(result)))
}
