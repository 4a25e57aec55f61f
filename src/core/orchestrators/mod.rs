mod label_reader;
mod logo_reader;

#[cfg(test)]
mod mock_image_annotator;

pub use label_reader::{label_descriptions, LabelReader};
pub use logo_reader::LogoReader;
