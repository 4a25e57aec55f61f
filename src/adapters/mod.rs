mod google_cloud_vision_annotator;

pub use google_cloud_vision_annotator::GoogleCloudVisionAnnotator;
