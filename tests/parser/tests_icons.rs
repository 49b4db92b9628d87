//! Icon block parsing

#![allow(clippy::unwrap_used)]

use crate::helpers::parse_err;
use crate::helpers::source_fixtures::{CAT, PACKAGE, package, package_with_count, with_icon_body};
use devkitty::parser::{IconPart, PathFault};
use devkitty::{ParseErrorKind, parse};

#[test]
fn test_multi_token_path_is_rejoined() {
    let doc = parse(CAT).unwrap();
    let cat = doc.get("cat").unwrap();
    assert_eq!(cat.paths(), ["M12 2 L2 22 H22 Z"]);
    assert_eq!(cat.view_box().as_str(), "0 0 24 24");
}

#[test]
fn test_irregular_whitespace_collapses_inside_paths() {
    let doc = parse(&with_icon_body("viewBox: 0 0 24 24\n paths {\n \"M1   2\n\t3\" }")).unwrap();
    assert_eq!(doc.get("cat").unwrap().paths(), ["M1 2 3"]);
}

#[test]
fn test_lone_quote_yields_empty_path() {
    let doc = parse(&with_icon_body("viewBox: 0 0 24 24 paths { \" }")).unwrap();
    assert_eq!(doc.get("cat").unwrap().paths(), [""]);
}

#[test]
fn test_lone_quote_before_path_data_is_closed() {
    let kind = parse_err(&with_icon_body("viewBox: 0 0 24 24 paths { \" M0 0\" }"));
    assert_eq!(
        kind,
        ParseErrorKind::MalformedPath {
            icon: "cat".to_string(),
            path: "M0".to_string(),
            fault: PathFault::Unquoted,
        }
    );
}

#[test]
fn test_icons_keep_declaration_order() {
    let doc = parse(PACKAGE).unwrap();
    let names: Vec<_> = doc.icons.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, ["home", "search"]);
}

#[test]
fn test_multiple_paths_blocks_accumulate() {
    let doc = parse(PACKAGE).unwrap();
    assert_eq!(
        doc.get("search").unwrap().paths(),
        ["M10 17 A7 7 0 1 1 10 3", "M15 15 L21 21"]
    );
}

#[test]
fn test_fractional_and_negative_view_box() {
    let doc = parse(PACKAGE).unwrap();
    let view_box = doc.get("search").unwrap().view_box();
    assert_eq!(view_box.min_x, -1.0);
    assert_eq!(view_box.height, 26.5);
    assert_eq!(view_box.as_str(), "-1 -1 26 26.5");
}

#[test]
fn test_declared_count_matches_parsed() {
    let source = package("1", &[("a", "M0"), ("b", "M1"), ("c", "M2")]);
    let doc = parse(&source).unwrap();
    assert_eq!(doc.icon_count(), doc.meta.icon_count);
}

#[test]
fn test_empty_icons_block_with_zero_count() {
    let doc = parse(&package("1", &[])).unwrap();
    assert_eq!(doc.icon_count(), 0);
}

#[test]
fn test_count_mismatch_too_many_declared() {
    let kind = parse_err(&package_with_count("1", 3, &[("a", "M0"), ("b", "M1")]));
    assert_eq!(kind, ParseErrorKind::CountMismatch { declared: 3, found: 2 });
}

#[test]
fn test_count_mismatch_too_few_declared() {
    let kind = parse_err(&package_with_count("1", 1, &[("a", "M0"), ("b", "M1")]));
    assert_eq!(kind, ParseErrorKind::CountMismatch { declared: 1, found: 2 });
}

#[test]
fn test_unknown_property() {
    let kind = parse_err(&with_icon_body(
        "viewBox: 0 0 24 24 fillColor: red paths { \"M0\" }",
    ));
    assert_eq!(
        kind,
        ParseErrorKind::UnknownProperty {
            icon: "cat".to_string(),
            property: "fillColor:".to_string(),
        }
    );
}

#[test]
fn test_view_box_key_requires_colon() {
    let kind = parse_err(&with_icon_body("viewBox 0 0 24 24 paths { \"M0\" }"));
    assert!(matches!(kind, ParseErrorKind::UnknownProperty { property, .. } if property == "viewBox"));
}

#[test]
fn test_unquoted_path() {
    let kind = parse_err(&with_icon_body("viewBox: 0 0 24 24 paths { M10 10 }"));
    assert_eq!(
        kind,
        ParseErrorKind::MalformedPath {
            icon: "cat".to_string(),
            path: "M10".to_string(),
            fault: PathFault::Unquoted,
        }
    );
}

#[test]
fn test_missing_view_box() {
    let kind = parse_err(&with_icon_body("paths { \"M0\" }"));
    assert_eq!(
        kind,
        ParseErrorKind::IncompleteIcon {
            icon: "cat".to_string(),
            missing: IconPart::ViewBox,
        }
    );
}

#[test]
fn test_missing_paths() {
    let kind = parse_err(&with_icon_body("viewBox: 0 0 24 24 paths { }"));
    assert_eq!(
        kind,
        ParseErrorKind::IncompleteIcon {
            icon: "cat".to_string(),
            missing: IconPart::Paths,
        }
    );
}

#[test]
fn test_duplicate_view_box() {
    let kind = parse_err(&with_icon_body(
        "viewBox: 0 0 24 24 viewBox: 0 0 8 8 paths { \"M0\" }",
    ));
    assert!(matches!(kind, ParseErrorKind::DuplicateProperty { .. }));
}

#[test]
fn test_non_numeric_view_box() {
    let kind = parse_err(&with_icon_body("viewBox: 0 0 wide 24 paths { \"M0\" }"));
    assert_eq!(
        kind,
        ParseErrorKind::InvalidViewBox {
            icon: "cat".to_string(),
            value: "0 0 wide 24".to_string(),
        }
    );
}

#[test]
fn test_duplicate_icon_name() {
    let kind = parse_err(&package("1", &[("a", "M0"), ("a", "M1")]));
    assert_eq!(kind, ParseErrorKind::DuplicateIcon { name: "a".to_string() });
}

#[test]
fn test_svg_export() {
    let doc = parse(CAT).unwrap();
    let svg = doc.get("cat").unwrap().to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">"));
    assert!(svg.contains("<path d=\"M12 2 L2 22 H22 Z\"/>"));
    assert!(svg.ends_with("</svg>"));
}
