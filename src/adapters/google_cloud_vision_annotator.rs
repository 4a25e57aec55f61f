use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, VisionError};
use crate::core::interfaces::adapters::ImageAnnotator;
use crate::core::models::{
    AnnotationFeature, ImageContent, LabelAnnotation, LogoAnnotation, LogoDetection,
    VisionCredentials, VisionSettings,
};

#[derive(Serialize)]
struct BatchAnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Serialize)]
struct AnnotateImageRequest {
    image: ImagePayload,
    features: Vec<FeatureRequest>,
}

#[derive(Serialize)]
struct ImagePayload {
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeatureRequest {
    #[serde(rename = "type")]
    feature_type: AnnotationFeature,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

#[derive(Deserialize, Default)]
struct BatchAnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    label_annotations: Vec<LabelAnnotation>,
    #[serde(default)]
    logo_annotations: Vec<LogoAnnotation>,
    #[serde(default)]
    error: Option<ServiceStatus>,
}

#[derive(Deserialize, Default)]
struct ServiceStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ServiceStatus,
}

pub struct GoogleCloudVisionAnnotator {
    client: reqwest::Client,
    endpoint_url: String,
    credentials: VisionCredentials,
    max_results: Option<u32>,
}

impl GoogleCloudVisionAnnotator {
    pub fn build(settings: &VisionSettings, credentials: VisionCredentials) -> Self {
        log::debug!(
            "[CLOUD_VISION] Building annotator for {} with {:?}",
            settings.endpoint_url,
            credentials
        );

        Self {
            client: reqwest::Client::new(),
            endpoint_url: settings.endpoint_url.clone(),
            credentials,
            max_results: settings.max_results,
        }
    }

    fn request_url(&self) -> String {
        match &self.credentials {
            VisionCredentials::ApiKey(key) => {
                format!("{}?key={}", self.endpoint_url, urlencoding::encode(key))
            }
            VisionCredentials::AccessToken(_) => self.endpoint_url.clone(),
        }
    }

    fn build_request_body(
        &self,
        image: &ImageContent,
        feature: AnnotationFeature,
    ) -> BatchAnnotateRequest {
        BatchAnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImagePayload {
                    content: image.encode_base64(),
                },
                features: vec![FeatureRequest {
                    feature_type: feature,
                    max_results: self.max_results,
                }],
            }],
        }
    }

    async fn annotate(
        &self,
        image: &ImageContent,
        feature: AnnotationFeature,
    ) -> Result<AnnotateImageResponse> {
        log::info!(
            "[CLOUD_VISION] Requesting {:?} for {:?}",
            feature,
            image.source_path
        );

        let body = self.build_request_body(image, feature);
        let mut request = self.client.post(self.request_url()).json(&body);

        if let VisionCredentials::AccessToken(token) = &self.credentials {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            log::error!("[CLOUD_VISION] Request failed with status {}", status);
            return Err(VisionError::Api {
                status: status.as_u16(),
                message: extract_error_message(&response_text),
            });
        }

        log::debug!("[CLOUD_VISION] Response: {}", response_text);

        let batch: BatchAnnotateResponse = serde_json::from_str(&response_text)?;

        Ok(batch.responses.into_iter().next().unwrap_or_default())
    }
}

fn extract_error_message(response_text: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(response_text)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| response_text.to_string())
}

#[async_trait]
impl ImageAnnotator for GoogleCloudVisionAnnotator {
    async fn annotate_labels(&self, image: &ImageContent) -> Result<Vec<LabelAnnotation>> {
        let response = self
            .annotate(image, AnnotationFeature::LabelDetection)
            .await?;

        if let Some(status) = response.error.as_ref().filter(|s| !s.message.is_empty()) {
            log::warn!(
                "[CLOUD_VISION] Label response carried error (code {}): {}",
                status.code,
                status.message
            );
        }

        Ok(response.label_annotations)
    }

    async fn annotate_logos(&self, image: &ImageContent) -> Result<LogoDetection> {
        let response = self
            .annotate(image, AnnotationFeature::LogoDetection)
            .await?;

        Ok(LogoDetection {
            logos: response.logo_annotations,
            error: response.error.map(|status| status.message),
        })
    }
}
