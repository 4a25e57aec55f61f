use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::core::errors::Result;
use crate::core::interfaces::adapters::ImageAnnotator;
use crate::core::models::{ImageContent, LabelAnnotation};

pub struct LabelReader {
    annotator: Arc<dyn ImageAnnotator>,
}

/// Consumes the annotations, yielding each description once in response order.
pub fn label_descriptions(labels: Vec<LabelAnnotation>) -> impl Iterator<Item = String> {
    labels.into_iter().map(|label| label.description)
}

impl LabelReader {
    pub fn build(annotator: Arc<dyn ImageAnnotator>) -> Self {
        Self { annotator }
    }

    /// Prints one line per label. A service error attached to the response is
    /// not raised here; only transport and HTTP failures propagate.
    pub async fn print_labels(&self, image_path: &Path, output: &mut dyn Write) -> Result<()> {
        log::info!("[LABEL_READER] Reading labels for {:?}", image_path);

        let image = ImageContent::read_from_path(image_path).await?;
        let labels = self.annotator.annotate_labels(&image).await?;

        log::debug!("[LABEL_READER] Received {} labels", labels.len());

        for description in label_descriptions(labels) {
            writeln!(output, "{}", description)?;
        }

        Ok(())
    }
}
