use std::fmt;

use smol_str::SmolStr;

use crate::base::constants::SVG_NAMESPACE;

/// An icon's coordinate frame: `min-x min-y width height`.
///
/// Keeps the source text of the four components so renderers receive
/// exactly what the document declared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
    text: SmolStr,
}

impl ViewBox {
    /// Build a view box from four numeric components.
    ///
    /// Returns `None` if any component is not a finite number.
    pub fn from_components(components: [&str; 4]) -> Option<Self> {
        let mut values = [0.0f64; 4];
        for (slot, component) in values.iter_mut().zip(components) {
            let value: f64 = component.parse().ok()?;
            if !value.is_finite() {
                return None;
            }
            *slot = value;
        }
        let [min_x, min_y, width, height] = values;
        Some(Self {
            min_x,
            min_y,
            width,
            height,
            text: SmolStr::from(components.join(" ")),
        })
    }

    /// Parse a whitespace-separated view box string.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let components = [parts.next()?, parts.next()?, parts.next()?, parts.next()?];
        if parts.next().is_some() {
            return None;
        }
        Self::from_components(components)
    }

    /// The four source components joined by single spaces.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A named, validated icon: one view box plus an ordered, non-empty list of
/// path-data strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconRecord {
    name: SmolStr,
    view_box: ViewBox,
    paths: Vec<String>,
}

impl IconRecord {
    /// Create a record. Returns `None` when `paths` is empty.
    pub fn new(name: impl Into<SmolStr>, view_box: ViewBox, paths: Vec<String>) -> Option<Self> {
        if paths.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            view_box,
            paths,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view_box(&self) -> &ViewBox {
        &self.view_box
    }

    /// Path data in source order, quotes stripped.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Render the record as standalone SVG markup.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="{}" viewBox="{}">"#,
            SVG_NAMESPACE,
            escape_attr(self.view_box.as_str())
        );
        for path in &self.paths {
            svg.push_str(r#"<path d=""#);
            svg.push_str(&escape_attr(path));
            svg.push_str(r#""/>"#);
        }
        svg.push_str("</svg>");
        svg
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
