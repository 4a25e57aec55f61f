use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::core::errors::{Result, VisionError};
use crate::core::interfaces::adapters::ImageAnnotator;
use crate::core::models::ImageContent;
use crate::global_constants;

pub struct LogoReader {
    annotator: Arc<dyn ImageAnnotator>,
}

impl LogoReader {
    pub fn build(annotator: Arc<dyn ImageAnnotator>) -> Self {
        Self { annotator }
    }

    /// Prints every detected brand and returns the top-ranked one, or `None`
    /// when the service found no logo. A service-reported error is returned
    /// as [`VisionError::RemoteService`] before anything is printed.
    pub async fn detect_logo_brand(
        &self,
        image_path: &Path,
        output: &mut dyn Write,
    ) -> Result<Option<String>> {
        log::info!("[LOGO_READER] Detecting logos in {:?}", image_path);

        let image = ImageContent::read_from_path(image_path).await?;
        let detection = self.annotator.annotate_logos(&image).await?;

        if let Some(message) = detection.error_message() {
            log::error!("[LOGO_READER] Service reported error: {}", message);
            return Err(VisionError::RemoteService(message.to_string()));
        }

        if detection.logos.is_empty() {
            log::info!("[LOGO_READER] No logo annotations returned");
            writeln!(output, "{}", global_constants::MESSAGE_NO_LOGO_DETECTED)?;
            return Ok(None);
        }

        log::info!("[LOGO_READER] Detected {} brand(s)", detection.logos.len());

        for logo in &detection.logos {
            writeln!(output, "{}", logo.format_detection_line())?;
        }

        Ok(detection
            .logos
            .into_iter()
            .next()
            .map(|logo| logo.description))
    }
}
