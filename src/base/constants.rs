//! Constants describing the DKF document format.

/// Value the `format` metadata field must hold.
pub const FORMAT_NAME: &str = "devkitty";

/// Value the `type` metadata field must hold for icon documents.
pub const DOCUMENT_TYPE: &str = "icon";

/// File extension for DKF documents.
pub const DKF_EXT: &str = "dkf";

/// Quote character delimiting path data.
pub const PATH_QUOTE: char = '"';

/// Metadata keys every document must declare, in the order they are checked.
pub const REQUIRED_META: [&str; 5] = ["format", "version", "type", "mode", "iconCount"];

/// Allowed values of the `mode` metadata field.
pub const ALLOWED_MODES: [&str; 2] = ["single", "package"];

/// SVG namespace used when emitting icon markup.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
