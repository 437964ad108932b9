use std::sync::Arc;

use async_trait::async_trait;

use pixfit_domain::{resolve_sizing, ImageFetchPort, ImageTransformPort};

use crate::{validate_params, ApplicationError, TransformImageOutput, TransformImageParams};

#[async_trait]
pub trait TransformImageUseCase: Send + Sync {
    async fn transform_image(
        &self,
        params: TransformImageParams,
    ) -> Result<TransformImageOutput, ApplicationError>;
}

pub struct TransformImageUseCaseImpl {
    fetcher: Arc<dyn ImageFetchPort>,
    transformer: Arc<dyn ImageTransformPort>,
    max_dimension: u32,
}

impl TransformImageUseCaseImpl {
    pub fn new(
        fetcher: Arc<dyn ImageFetchPort>,
        transformer: Arc<dyn ImageTransformPort>,
        max_dimension: u32,
    ) -> Self {
        Self {
            fetcher,
            transformer,
            max_dimension,
        }
    }
}

#[async_trait]
impl TransformImageUseCase for TransformImageUseCaseImpl {
    async fn transform_image(
        &self,
        params: TransformImageParams,
    ) -> Result<TransformImageOutput, ApplicationError> {
        let request =
            validate_params(&params, self.max_dimension).map_err(ApplicationError::Validation)?;

        tracing::debug!(
            image_url = %request.image_url,
            width = request.width,
            height = request.height,
            mode = request.mode.as_str(),
            "starting image transformation"
        );

        let fetched = self.fetcher.fetch(&request.image_url).await?;
        let media_type = fetched.media_type.clone();
        let sizing = resolve_sizing(request.width, request.height);
        let transformed = self
            .transformer
            .transform(fetched, sizing, request.mode)
            .await?;

        tracing::debug!(
            media_type = %media_type,
            output_bytes = transformed.bytes.len(),
            preserve_aspect_ratio = sizing.preserve_aspect_ratio,
            "image transformation completed"
        );

        Ok(TransformImageOutput {
            bytes: transformed.bytes,
            media_type: transformed.media_type,
        })
    }
}
