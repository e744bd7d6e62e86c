/*
 * callout.rs
 * Copyright (c) 2025 aside contributors
 *
 * Transform that converts marked block quotes to callouts.
 */

//! Callout conversion transform.
//!
//! This transform finds block quotes whose first paragraph opens with a
//! `[!type]` marker and converts them to [`Callout`] blocks that render as
//! an `<aside>` element classed by the marker type.
//!
//! ## Input Structure
//!
//! ```markdown
//! > [!WARNING] Careful
//! > Danger ahead
//! ```
//!
//! is read as a block quote whose first paragraph starts with the text run
//! `"[!WARNING] Careful\nDanger ahead"`.
//!
//! ## Output Structure
//!
//! - `callout_type`: `"warning"` (the marker type, lowercased)
//! - `children`: the quote's blocks, with the marker cut out of the first
//!   text run. A run left empty is removed, and so is a paragraph left empty.
//! - `data`: the quote's data with `h_name = "aside"` and
//!   `className = "warning"` merged in
//!
//! Anything that does not match the marker grammar exactly is left alone
//! as an ordinary block quote.

use aside_ast::{Block, BlockQuote, Blocks, CLASS_NAME, Callout, Data, Inline, Root};

use crate::Result;
use crate::transform::AstTransform;

/// Element callouts render as unless configured otherwise.
pub const DEFAULT_CALLOUT_ELEMENT: &str = "aside";

/// A `[!type]` marker found at the start of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutMarker<'a> {
    /// The type token as written, case preserved.
    pub callout_type: &'a str,
    /// Everything after the closing bracket, line breaks included.
    pub remainder: &'a str,
}

/// Match `^\[!(\w+)\](.*)$` with dot-matches-newline semantics.
///
/// The type token is one or more ASCII word characters (letters, digits,
/// underscore). The remainder runs to the end of the input.
pub fn parse_callout_marker(text: &str) -> Option<CalloutMarker<'_>> {
    let rest = text.strip_prefix("[!")?;
    let type_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if type_len == 0 {
        return None;
    }

    // Word characters are ASCII, so `type_len` is a char boundary
    let (callout_type, after) = rest.split_at(type_len);
    let remainder = after.strip_prefix(']')?;

    Some(CalloutMarker {
        callout_type,
        remainder,
    })
}

/// Remove the whitespace separating the marker from its body.
///
/// Equivalent to deleting `^\s*\n?`: the greedy whitespace run already
/// swallows the marker's own line break. Trailing content is kept verbatim.
fn strip_leading_separator(remainder: &str) -> &str {
    remainder.trim_start()
}

/// Transform that converts marked block quotes to callouts.
///
/// Holds only its immutable configuration.
#[derive(Debug, Clone)]
pub struct CalloutTransform {
    element: String,
}

impl CalloutTransform {
    /// Create a callout transform emitting `<aside>` elements.
    pub fn new() -> Self {
        Self::with_element(DEFAULT_CALLOUT_ELEMENT)
    }

    /// Create a callout transform emitting `element` instead of `<aside>`.
    pub fn with_element(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    /// Rewrite every block quote in `blocks`, including nested ones.
    pub fn rewrite_blocks(&self, blocks: &mut Blocks) {
        for block in blocks.iter_mut() {
            self.rewrite_block(block);
        }
    }

    /// Rewrite a single block quote, returning it unchanged when its first
    /// text run carries no marker. Nested blocks are not visited.
    pub fn rewrite_block_quote(&self, mut quote: BlockQuote) -> Block {
        match self.try_into_callout(&mut quote) {
            Some(callout) => Block::Callout(callout),
            None => Block::BlockQuote(quote),
        }
    }

    fn rewrite_block(&self, block: &mut Block) {
        // The quote is rewritten before its children are visited, so nested
        // quotes are matched against their own first paragraph.
        if let Block::BlockQuote(quote) = block {
            if let Some(callout) = self.try_into_callout(quote) {
                *block = Block::Callout(callout);
            }
        }

        match block {
            Block::BlockQuote(quote) => self.rewrite_blocks(&mut quote.children),
            Block::Callout(callout) => self.rewrite_blocks(&mut callout.children),
            Block::List(list) => {
                for item in &mut list.children {
                    self.rewrite_blocks(&mut item.children);
                }
            }
            // Other block types don't contain nested blocks
            _ => {}
        }
    }

    /// On a marker match, splice the marker out of `quote` and move its
    /// children and data into a new callout. Leaves `quote` untouched
    /// otherwise.
    fn try_into_callout(&self, quote: &mut BlockQuote) -> Option<Callout> {
        let Some(Block::Paragraph(paragraph)) = quote.children.first_mut() else {
            return None;
        };
        let Some(Inline::Text(text)) = paragraph.children.first_mut() else {
            return None;
        };
        let marker = parse_callout_marker(&text.value)?;

        let callout_type = marker.callout_type.to_ascii_lowercase();
        let body = if marker.remainder.trim().is_empty() {
            None
        } else {
            Some(strip_leading_separator(marker.remainder).to_string())
        };

        match body {
            Some(body) => text.value = body,
            None => {
                paragraph.children.remove(0);
                if paragraph.children.is_empty() {
                    quote.children.remove(0);
                }
            }
        }

        let mut data = std::mem::take(&mut quote.data);
        merge_callout_data(&mut data, &self.element, &callout_type);

        tracing::trace!(callout_type = %callout_type, "Converted block quote to callout");

        Some(Callout {
            callout_type,
            children: std::mem::take(&mut quote.children),
            data,
        })
    }
}

impl Default for CalloutTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl AstTransform for CalloutTransform {
    fn name(&self) -> &str {
        "callout"
    }

    fn transform(&self, ast: &mut Root) -> Result<()> {
        self.rewrite_blocks(&mut ast.children);
        Ok(())
    }
}

/// Rewrite every marked block quote in `root` into an `<aside>` callout.
pub fn rewrite_callouts(root: &mut Root) {
    CalloutTransform::new().rewrite_blocks(&mut root.children);
}

/// Merge the callout render hints into `data`, leaving other entries alone.
fn merge_callout_data(data: &mut Data, element: &str, callout_type: &str) {
    data.h_name = Some(element.to_string());
    data.set_property(CLASS_NAME, callout_type);
}
