use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelAnnotation {
    pub description: String,
    #[serde(default)]
    pub score: f32,
}

impl LabelAnnotation {
    pub fn new(description: impl Into<String>, score: f32) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogoAnnotation {
    pub description: String,
    #[serde(default)]
    pub score: f32,
}

impl LogoAnnotation {
    pub fn new(description: impl Into<String>, score: f32) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }

    pub fn format_detection_line(&self) -> String {
        format!("- {} (confidence: {:.2})", self.description, self.score)
    }
}

/// Result of a logo request: the annotations in vendor ranking order plus the
/// application-level error the service attached to the image, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogoDetection {
    pub logos: Vec<LogoAnnotation>,
    pub error: Option<String>,
}

impl LogoDetection {
    pub fn with_logos(logos: Vec<LogoAnnotation>) -> Self {
        Self { logos, error: None }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            logos: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_line_rounds_to_two_decimals() {
        let logo = LogoAnnotation::new("Google", 0.873);

        assert_eq!(logo.format_detection_line(), "- Google (confidence: 0.87)");
    }

    #[test]
    fn test_format_detection_line_pads_to_two_decimals() {
        let logo = LogoAnnotation::new("Nike", 0.9);

        assert_eq!(logo.format_detection_line(), "- Nike (confidence: 0.90)");
    }

    #[test]
    fn test_format_detection_line_handles_full_confidence() {
        let logo = LogoAnnotation::new("Adidas", 1.0);

        assert_eq!(logo.format_detection_line(), "- Adidas (confidence: 1.00)");
    }

    #[test]
    fn test_error_message_ignores_empty_string() {
        let detection = LogoDetection {
            logos: vec![],
            error: Some(String::new()),
        };

        assert_eq!(detection.error_message(), None);
    }

    #[test]
    fn test_error_message_returns_service_text() {
        let detection = LogoDetection::with_error("Image processing error!");

        assert_eq!(detection.error_message(), Some("Image processing error!"));
    }

    #[test]
    fn test_label_annotation_deserializes_without_score() {
        let label: LabelAnnotation = serde_json::from_str(r#"{"description": "Dog"}"#).unwrap();

        assert_eq!(label, LabelAnnotation::new("Dog", 0.0));
    }
}
