pub const APPLICATION_NAME: &str = "vision-readers";

pub const DEFAULT_LABEL_IMAGE_PATH: &str = "headshot.jpeg";
pub const DEFAULT_LOGO_IMAGE_PATH: &str = "logo3.jpg";

pub const CLOUD_VISION_ANNOTATE_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

pub const ENV_API_KEY: &str = "GOOGLE_CLOUD_VISION_API_KEY";
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_CLOUD_ACCESS_TOKEN";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const MESSAGE_NO_LOGO_DETECTED: &str = "No logo detected.";
pub const MESSAGE_BRAND_PREFIX: &str = "Brand:";
