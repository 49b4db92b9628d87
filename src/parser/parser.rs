//! Recursive descent parser for DKF documents
//!
//! Consumes the token stream with a single forward cursor and builds a
//! validated [`Document`]. Any violated rule aborts the parse.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use text_size::{TextRange, TextSize};

use super::errors::{Found, IconPart, ParseContext, ParseError, ParseErrorKind, PathFault};
use super::keywords::{
    ICON_KW, ICONS_SECTION, L_BRACE, META_SECTION, PATHS_KEY, R_BRACE, VIEW_BOX_KEY,
};
use super::lexer::{Token, TokenKind, tokenize};
use super::validate::{MetaPairs, validate_meta};
use crate::base::constants::PATH_QUOTE;
use crate::syntax::{Document, IconMap, IconRecord, MetadataBlock, ViewBox};

/// Parse DKF source text into a validated document.
///
/// This is a pure function: the registry is not touched.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    let tokens = tokenize(input);
    let mut parser = Parser::new(tokens, TextSize::of(input));
    parser.parse_document()
}

/// Body of an icon while it is being parsed
#[derive(Default)]
struct IconBody {
    view_box: Option<ViewBox>,
    paths: Vec<String>,
}

/// The parser state
struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Offset reported for errors at end of input
    end: TextSize,
    context: ParseContext,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token<'a>>, end: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            context: ParseContext::TopLevel,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// The only lookahead the grammar needs: is the block closing here?
    fn at_r_brace(&self) -> bool {
        self.current().is_some_and(|t| t.kind == TokenKind::RBrace)
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| t.range)
            .unwrap_or_else(|| TextRange::empty(self.end))
    }

    fn found(&self) -> Found {
        match self.current() {
            Some(token) => Found::Token(token.text.to_string()),
            None => Found::EndOfInput,
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    /// Advance past `literal`, or fail naming the expected and actual token.
    fn expect(&mut self, literal: &str) -> Result<TextRange, ParseError> {
        match self.current() {
            Some(token) if token.text == literal => {
                let range = token.range;
                self.pos += 1;
                Ok(range)
            }
            _ => Err(self.structural(literal)),
        }
    }

    /// Return the current token and advance, whatever it is.
    ///
    /// `what` describes the free-form value for the end-of-input error.
    fn next_token(&mut self, what: &str) -> Result<Token<'a>, ParseError> {
        match self.bump() {
            Some(token) => Ok(token),
            None => Err(self.structural(what)),
        }
    }

    /// Enter a production, returning the context to restore on exit.
    fn enter(&mut self, context: ParseContext) -> ParseContext {
        std::mem::replace(&mut self.context, context)
    }

    fn leave(&mut self, previous: ParseContext) {
        self.context = previous;
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn structural(&self, expected: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::Structural {
                expected: expected.to_string(),
                found: self.found(),
                context: self.context,
            },
            self.current_range(),
        )
    }

    // =========================================================================
    // Productions
    // =========================================================================

    /// document := '@meta' '{' meta-pairs '}' '@icons' '{' icon* '}'
    fn parse_document(&mut self) -> Result<Document, ParseError> {
        let meta = self.parse_meta_block()?;
        let icons = self.parse_icons_block(&meta)?;
        Ok(Document::new(meta, icons))
    }

    /// '@meta' '{' meta-pairs '}'
    fn parse_meta_block(&mut self) -> Result<MetadataBlock, ParseError> {
        self.expect(META_SECTION)?;
        let previous = self.enter(ParseContext::MetaBlock);
        self.expect(L_BRACE)?;

        let mut pairs = MetaPairs::with_hasher(FxBuildHasher);
        while !self.at_r_brace() {
            let (key, value) = self.parse_meta_pair()?;
            // Later declarations of a key replace earlier ones
            pairs.insert(key, value);
        }
        let close = self.expect(R_BRACE)?;
        self.leave(previous);

        validate_meta(&pairs, close)
    }

    /// key value
    ///
    /// The key may carry one trailing `:`. A key directly followed by the
    /// closing brace has no value.
    fn parse_meta_pair(&mut self) -> Result<(&'a str, Option<Token<'a>>), ParseError> {
        let key = self.next_token("metadata key")?;
        let name = key.text.strip_suffix(':').unwrap_or(key.text);
        if self.at_r_brace() {
            return Ok((name, None));
        }
        let value = self.next_token("metadata value")?;
        Ok((name, Some(value)))
    }

    /// '@icons' '{' icon* '}'
    fn parse_icons_block(&mut self, meta: &MetadataBlock) -> Result<IconMap, ParseError> {
        self.expect(ICONS_SECTION)?;
        let previous = self.enter(ParseContext::IconsBlock);
        self.expect(L_BRACE)?;

        let mut icons: IconMap = IndexMap::new();
        while !self.at_r_brace() {
            let (icon, name_range) = self.parse_icon()?;
            if icons.contains_key(icon.name()) {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateIcon {
                        name: icon.name().to_string(),
                    },
                    name_range,
                ));
            }
            icons.insert(icon.name().into(), icon);
        }
        let close = self.expect(R_BRACE)?;
        self.leave(previous);

        if icons.len() != meta.icon_count {
            return Err(ParseError::new(
                ParseErrorKind::CountMismatch {
                    declared: meta.icon_count,
                    found: icons.len(),
                },
                close,
            ));
        }
        Ok(icons)
    }

    /// 'icon' NAME '{' icon-body '}'
    fn parse_icon(&mut self) -> Result<(IconRecord, TextRange), ParseError> {
        self.expect(ICON_KW)?;
        let previous = self.enter(ParseContext::Icon);
        let name = self.next_token("icon name")?;
        self.expect(L_BRACE)?;

        self.enter(ParseContext::IconBody);
        let body = self.parse_icon_body(name.text)?;
        let close = self.expect(R_BRACE)?;
        self.leave(previous);

        let incomplete = |missing| {
            ParseError::new(
                ParseErrorKind::IncompleteIcon {
                    icon: name.text.to_string(),
                    missing,
                },
                close,
            )
        };
        let view_box = body.view_box.ok_or_else(|| incomplete(IconPart::ViewBox))?;
        let icon = IconRecord::new(name.text, view_box, body.paths)
            .ok_or_else(|| incomplete(IconPart::Paths))?;
        Ok((icon, name.range))
    }

    /// (viewbox-entry | paths-entry)*
    fn parse_icon_body(&mut self, icon: &str) -> Result<IconBody, ParseError> {
        let mut body = IconBody::default();

        while !self.at_r_brace() {
            let key = self.next_token("icon property")?;
            match key.text {
                VIEW_BOX_KEY => {
                    if body.view_box.is_some() {
                        return Err(ParseError::new(
                            ParseErrorKind::DuplicateProperty {
                                icon: icon.to_string(),
                                property: key.text.to_string(),
                            },
                            key.range,
                        ));
                    }
                    body.view_box = Some(self.parse_view_box(icon)?);
                }
                PATHS_KEY => self.parse_paths(icon, &mut body.paths)?,
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnknownProperty {
                            icon: icon.to_string(),
                            property: key.text.to_string(),
                        },
                        key.range,
                    ));
                }
            }
        }

        Ok(body)
    }

    /// 'viewBox:' NUM NUM NUM NUM
    fn parse_view_box(&mut self, icon: &str) -> Result<ViewBox, ParseError> {
        let previous = self.enter(ParseContext::ViewBox);
        let first = self.next_token("viewBox component")?;
        let second = self.next_token("viewBox component")?;
        let third = self.next_token("viewBox component")?;
        let fourth = self.next_token("viewBox component")?;
        self.leave(previous);

        let components = [first.text, second.text, third.text, fourth.text];
        ViewBox::from_components(components).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::InvalidViewBox {
                    icon: icon.to_string(),
                    value: components.join(" "),
                },
                first.range.cover(fourth.range),
            )
        })
    }

    /// 'paths' '{' quoted-path* '}'
    fn parse_paths(&mut self, icon: &str, paths: &mut Vec<String>) -> Result<(), ParseError> {
        let previous = self.enter(ParseContext::Paths);
        self.expect(L_BRACE)?;
        while !self.at_r_brace() {
            paths.push(self.parse_quoted_path(icon)?);
        }
        self.expect(R_BRACE)?;
        self.leave(previous);
        Ok(())
    }

    /// A token starting with `"`, re-joined with following tokens (one
    /// space apart) until the text ends with `"`. A lone `"` token is
    /// already closed and yields an empty path.
    fn parse_quoted_path(&mut self, icon: &str) -> Result<String, ParseError> {
        let first = self.next_token("quoted path")?;
        if !first.text.starts_with(PATH_QUOTE) {
            return Err(ParseError::new(
                ParseErrorKind::MalformedPath {
                    icon: icon.to_string(),
                    path: first.text.to_string(),
                    fault: PathFault::Unquoted,
                },
                first.range,
            ));
        }

        let mut text = first.text.to_string();
        let mut range = first.range;
        while !is_closed_quote(&text) {
            let Some(token) = self.bump() else {
                return Err(ParseError::new(
                    ParseErrorKind::MalformedPath {
                        icon: icon.to_string(),
                        path: text,
                        fault: PathFault::Unterminated,
                    },
                    range,
                ));
            };
            text.push(' ');
            text.push_str(token.text);
            range = range.cover(token.range);
        }

        let inner = text.strip_prefix(PATH_QUOTE).unwrap_or(text.as_str());
        Ok(inner.strip_suffix(PATH_QUOTE).unwrap_or(inner).to_string())
    }
}

fn is_closed_quote(text: &str) -> bool {
    text.ends_with(PATH_QUOTE)
}
