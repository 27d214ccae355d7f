use crate::{
    client::model::error::ApiError,
    model::review::{CreateReviewDto, ReviewDto},
};

use super::helper::{parse_response, post, send_request, serialize_json};

/// Submit a review; validation and unknown-server failures come back as `ApiError`
pub async fn create_review(payload: &CreateReviewDto) -> Result<ReviewDto, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post("/api/reviews").body(body)).await?;
    parse_response(response).await
}
