use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::Result;
use crate::core::interfaces::adapters::ImageAnnotator;
use crate::core::models::{
    AnnotationFeature, ImageContent, LabelAnnotation, LogoAnnotation, LogoDetection,
};

pub struct MockImageAnnotator {
    labels: Vec<LabelAnnotation>,
    logo_detection: LogoDetection,
    requested_features: Arc<Mutex<Vec<AnnotationFeature>>>,
}

impl MockImageAnnotator {
    pub fn returning_labels(descriptions: &[&str]) -> Self {
        Self {
            labels: descriptions
                .iter()
                .map(|description| LabelAnnotation::new(*description, 0.9))
                .collect(),
            logo_detection: LogoDetection::default(),
            requested_features: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning_logos(logos: &[(&str, f32)]) -> Self {
        Self::returning_logo_detection(LogoDetection::with_logos(
            logos
                .iter()
                .map(|(description, score)| LogoAnnotation::new(*description, *score))
                .collect(),
        ))
    }

    pub fn returning_logo_detection(logo_detection: LogoDetection) -> Self {
        Self {
            labels: Vec::new(),
            logo_detection,
            requested_features: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requested_features.lock().unwrap().len()
    }

    pub fn requested_features(&self) -> Vec<AnnotationFeature> {
        self.requested_features.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageAnnotator for MockImageAnnotator {
    async fn annotate_labels(&self, _image: &ImageContent) -> Result<Vec<LabelAnnotation>> {
        self.requested_features
            .lock()
            .unwrap()
            .push(AnnotationFeature::LabelDetection);
        Ok(self.labels.clone())
    }

    async fn annotate_logos(&self, _image: &ImageContent) -> Result<LogoDetection> {
        self.requested_features
            .lock()
            .unwrap()
            .push(AnnotationFeature::LogoDetection);
        Ok(self.logo_detection.clone())
    }
}

pub fn write_test_image() -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x89, 0x50, 0x4E, 0x47]).unwrap();
    file
}
