//! Metadata validation
//!
//! Runs once the `@meta` block has closed: every required key must be
//! present, then `format`, `type`, `mode` and `iconCount` are checked
//! against their allowed values.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use text_size::TextRange;

use super::errors::{ParseError, ParseErrorKind};
use super::lexer::Token;
use crate::base::constants::{ALLOWED_MODES, DOCUMENT_TYPE, FORMAT_NAME, REQUIRED_META};
use crate::syntax::{MetadataBlock, Mode};

/// Raw metadata pairs in declaration order. `None` marks a key with no value.
pub(super) type MetaPairs<'a> = IndexMap<&'a str, Option<Token<'a>>, FxBuildHasher>;

/// Validate raw metadata pairs. `close` is the range of the block's `}`.
pub(super) fn validate_meta(
    pairs: &MetaPairs<'_>,
    close: TextRange,
) -> Result<MetadataBlock, ParseError> {
    // Presence first, in REQUIRED_META order, before any value is judged
    let format = required(pairs, "format", close)?;
    let version = required(pairs, "version", close)?;
    let doc_type = required(pairs, "type", close)?;
    let mode = required(pairs, "mode", close)?;
    let icon_count = required(pairs, "iconCount", close)?;

    if format.text != FORMAT_NAME {
        return Err(invalid("format", format, format!("\"{FORMAT_NAME}\"")));
    }
    if doc_type.text != DOCUMENT_TYPE {
        return Err(invalid("type", doc_type, format!("\"{DOCUMENT_TYPE}\"")));
    }
    let mode: Mode = mode
        .text
        .parse()
        .map_err(|_| invalid("mode", mode, format!("one of {}", ALLOWED_MODES.join(", "))))?;
    let icon_count: usize = icon_count
        .text
        .parse()
        .map_err(|_| invalid("iconCount", icon_count, "a non-negative integer".to_string()))?;

    let extra = pairs
        .iter()
        .filter(|(key, _)| !REQUIRED_META.contains(*key))
        .filter_map(|(key, value)| value.map(|v| (SmolStr::from(*key), v.text.to_string())))
        .collect();

    Ok(MetadataBlock {
        format: format.text.to_string(),
        version: version.text.to_string(),
        doc_type: doc_type.text.to_string(),
        mode,
        icon_count,
        extra,
    })
}

fn required<'a>(
    pairs: &MetaPairs<'a>,
    field: &'static str,
    close: TextRange,
) -> Result<Token<'a>, ParseError> {
    pairs
        .get(field)
        .copied()
        .flatten()
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingField { field }, close))
}

fn invalid(field: &'static str, value: Token<'_>, expected: String) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidValue {
            field,
            value: value.text.to_string(),
            expected,
        },
        value.range,
    )
}
