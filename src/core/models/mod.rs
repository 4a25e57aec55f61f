mod annotation;
mod annotation_feature;
mod image_content;
mod vision_settings;

pub use annotation::{LabelAnnotation, LogoAnnotation, LogoDetection};
pub use annotation_feature::AnnotationFeature;
pub use image_content::ImageContent;
pub use vision_settings::{VisionCredentials, VisionSettings};
