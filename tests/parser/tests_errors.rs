//! Error codes, positions and display

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use crate::helpers::source_fixtures::{package_with_count, with_icon_body, with_meta};
use devkitty::parser::{Found, ParseContext};
use devkitty::{ErrorCode, ParseErrorKind, parse};

#[rstest]
#[case("", ErrorCode::E0101)]
#[case("@meta { format devkitty", ErrorCode::E0101)]
#[case(&with_meta("format devkitty"), ErrorCode::E0201)]
#[case(&with_meta("format devkitty version 1 type icon mode diagonal iconCount 0"), ErrorCode::E0202)]
#[case(&with_icon_body("viewBox: 0 0 1 1 stroke 2"), ErrorCode::E0301)]
#[case(&with_icon_body("viewBox: 0 0 1 1 viewBox: 0 0 1 1"), ErrorCode::E0302)]
#[case(&with_icon_body("viewBox: 0 0 1 x"), ErrorCode::E0303)]
#[case(&with_icon_body("viewBox: 0 0 1 1 paths { M0 }"), ErrorCode::E0304)]
#[case(&with_icon_body("viewBox: 0 0 1 1"), ErrorCode::E0305)]
#[case(&package_with_count("1", 0, &[("a", "M0")]), ErrorCode::E0401)]
fn test_error_codes(#[case] source: &str, #[case] code: ErrorCode) {
    let err = parse(source).unwrap_err();
    assert_eq!(err.code(), code, "{err}");
}

#[test]
fn test_missing_icons_section() {
    let source = with_meta("format devkitty version 1 type icon mode single iconCount 0")
        .replace("@icons { }", "");
    let err = parse(&source).unwrap_err();
    assert_eq!(
        err.kind(),
        &ParseErrorKind::Structural {
            expected: "@icons".to_string(),
            found: Found::EndOfInput,
            context: ParseContext::TopLevel,
        }
    );
}

#[test]
fn test_unclosed_icon_reports_icon_body() {
    let err = parse(
        "@meta { format devkitty version 1 type icon mode single iconCount 1 }\n@icons { icon cat { viewBox: 0 0 1 1",
    )
    .unwrap_err();
    assert!(matches!(
        err.kind(),
        ParseErrorKind::Structural {
            found: Found::EndOfInput,
            context: ParseContext::IconBody,
            ..
        }
    ));
}

#[test]
fn test_error_position_points_at_offending_token() {
    let source = with_icon_body("viewBox: 0 0 24 24\n  fillColor: red");
    let err = parse(&source).unwrap_err();

    assert_eq!(&source[err.range()], "fillColor:");
    let pos = err.line_col(&source);
    assert_eq!((pos.line, pos.col), (3, 2));
}

#[test]
fn test_formatted_error_has_code_position_and_hint() {
    let source = with_icon_body("viewBox: 0 0 24 24 paths { M0 }");
    let formatted = parse(&source).unwrap_err().format(&source);

    assert!(formatted.starts_with("E0304 [3:"), "{formatted}");
    assert!(formatted.contains("path `M0` in icon \"cat\" must be wrapped in quotes"));
    assert!(formatted.ends_with("hint: wrap path data in double quotes"));
}

#[test]
fn test_count_mismatch_display() {
    let err = parse(&package_with_count("1", 2, &[("a", "M0")])).unwrap_err();
    assert_eq!(err.to_string(), "iconCount mismatch: meta=2, found=1");
}
