use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::review::CreateReviewDto,
    server::{
        error::AppError, model::review::CreateReviewParams, service::review::ReviewService,
        state::AppState,
    },
};

/// Creates a review.
///
/// # Returns
/// - `201 Created` - Review stored, body is the `ReviewDto`
/// - `400 Bad Request` - Payload fails validation
/// - `404 Not Found` - "Server not found"
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::try_from(payload)?;

    let review_service = ReviewService::new(&state.db);

    let review = review_service.create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}
