//! Parse context tracking for context-aware error messages
//!
//! Each grammar production records where the cursor is, so a structural
//! error can say which part of the document it interrupted.

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// Outside any block
    #[default]
    TopLevel,
    /// Inside `@meta { ... }`
    MetaBlock,
    /// Inside `@icons { ... }`
    IconsBlock,
    /// Reading an `icon NAME {` header
    Icon,
    /// Inside an icon body
    IconBody,
    /// Reading the four view box components
    ViewBox,
    /// Inside `paths { ... }`
    Paths,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::MetaBlock => "in metadata block",
            Self::IconsBlock => "in icons block",
            Self::Icon => "in icon header",
            Self::IconBody => "in icon body",
            Self::ViewBox => "in viewBox",
            Self::Paths => "in paths block",
        }
    }

    /// Get a description of what is expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "an `@meta` block followed by an `@icons` block",
            Self::MetaBlock => "`key value` pairs",
            Self::IconsBlock => "`icon NAME { ... }` definitions",
            Self::Icon => "an icon name followed by `{`",
            Self::IconBody => "`viewBox:` or `paths` entries",
            Self::ViewBox => "four numbers",
            Self::Paths => "quoted path data",
        }
    }
}

impl std::fmt::Display for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
