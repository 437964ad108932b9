use async_trait::async_trait;

use crate::{DomainError, FetchedImage, SizingInstruction, TransformMode, TransformedImage};

#[async_trait]
pub trait ImageFetchPort: Send + Sync {
    /// Retrieve the encoded source image at `url`, verifying it is image
    /// content before buffering it.
    async fn fetch(&self, url: &str) -> Result<FetchedImage, DomainError>;
}

#[async_trait]
pub trait ImageTransformPort: Send + Sync {
    /// Decode `image`, apply `mode` with the resolved `sizing`, and
    /// re-encode in the source format. Consumes the fetched bytes.
    async fn transform(
        &self,
        image: FetchedImage,
        sizing: SizingInstruction,
        mode: TransformMode,
    ) -> Result<TransformedImage, DomainError>;
}
