//! Fixed tokens of the DKF grammar.

/// Opens the metadata section
pub const META_SECTION: &str = "@meta";
/// Opens the icons section
pub const ICONS_SECTION: &str = "@icons";
/// Introduces one icon definition
pub const ICON_KW: &str = "icon";
/// Icon property holding the four view box components
pub const VIEW_BOX_KEY: &str = "viewBox:";
/// Icon property opening a block of quoted path data
pub const PATHS_KEY: &str = "paths";

pub const L_BRACE: &str = "{";
pub const R_BRACE: &str = "}";

/// Properties allowed inside an icon body.
pub const ICON_PROPERTIES: &[&str] = &[VIEW_BOX_KEY, PATHS_KEY];
