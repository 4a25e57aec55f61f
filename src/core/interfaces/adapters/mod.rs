mod image_annotator;

pub use image_annotator::ImageAnnotator;
