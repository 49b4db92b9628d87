//! Common DKF document fixtures for tests.

/// A well-formed single-icon document.
pub const CAT: &str = r#"
@meta {
  format devkitty
  version 1.0
  type icon
  mode single
  iconCount 1
}
@icons {
  icon cat {
    viewBox: 0 0 24 24
    paths {
      "M12 2 L2 22 H22 Z"
    }
  }
}
"#;

/// Two icons, with extra metadata keys and colon-suffixed keys.
pub const PACKAGE: &str = r#"
@meta {
  format: devkitty
  version: 2.3
  type: icon
  mode: package
  iconCount: 2
  author: kitty
  license MIT
}
@icons {
  icon home {
    viewBox: 0 0 24 24
    paths { "M3 12 L12 3 L21 12" "M5 10 V21 H19 V10" }
  }
  icon search {
    viewBox: -1 -1 26 26.5
    paths { "M10 17 A7 7 0 1 1 10 3" }
    paths { "M15 15 L21 21" }
  }
}
"#;

/// Build a package document with one single-path icon per entry.
/// `iconCount` is set to the number of entries.
pub fn package(version: &str, icons: &[(&str, &str)]) -> String {
    package_with_count(version, icons.len(), icons)
}

/// Like [`package`], but with an explicit declared `iconCount`.
pub fn package_with_count(version: &str, count: usize, icons: &[(&str, &str)]) -> String {
    let mut text = format!(
        "@meta {{\n  format devkitty\n  version {version}\n  type icon\n  mode package\n  iconCount {count}\n}}\n@icons {{\n"
    );
    for (name, path) in icons {
        text.push_str(&format!(
            "  icon {name} {{\n    viewBox: 0 0 24 24\n    paths {{ \"{path}\" }}\n  }}\n"
        ));
    }
    text.push_str("}\n");
    text
}

/// A document whose metadata pairs are `meta` verbatim, with no icons.
pub fn with_meta(meta: &str) -> String {
    format!("@meta {{ {meta} }}\n@icons {{ }}")
}

/// A single-icon document whose icon body is `body` verbatim.
pub fn with_icon_body(body: &str) -> String {
    format!(
        "@meta {{ format devkitty version 1 type icon mode single iconCount 1 }}\n@icons {{\n  icon cat {{ {body} }}\n}}"
    )
}
