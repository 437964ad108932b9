use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use pixfit_application::TransformImageParams;

use crate::error::{error_mapper, HttpError};
use crate::state::AppState;

pub async fn transform_image(
    State(state): State<AppState>,
    Query(params): Query<TransformImageParams>,
) -> Result<Response, HttpError> {
    tracing::info!(
        image = params.image.as_deref().unwrap_or(""),
        width = params.width.as_deref().unwrap_or("0"),
        height = params.height.as_deref().unwrap_or("0"),
        mode = params.mode.as_deref().unwrap_or("resize"),
        "received transform request"
    );

    match state.usecase.transform_image(params).await {
        Ok(output) => {
            tracing::info!(
                media_type = %output.media_type,
                byte_count = output.bytes.len(),
                "transform request completed"
            );
            Ok(([(header::CONTENT_TYPE, output.media_type)], output.bytes).into_response())
        }
        Err(error) => {
            tracing::error!(error = %error, "transform request failed");
            Err(error_mapper(error))
        }
    }
}

pub async fn health() -> &'static str {
    "OK"
}
