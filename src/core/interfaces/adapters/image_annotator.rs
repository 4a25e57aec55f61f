use async_trait::async_trait;

use crate::core::errors::Result;
use crate::core::models::{ImageContent, LabelAnnotation, LogoDetection};

/// The remote annotation boundary. One call is one request; implementations
/// do not retry.
#[async_trait]
pub trait ImageAnnotator: Send + Sync {
    async fn annotate_labels(&self, image: &ImageContent) -> Result<Vec<LabelAnnotation>>;

    async fn annotate_logos(&self, image: &ImageContent) -> Result<LogoDetection>;
}
