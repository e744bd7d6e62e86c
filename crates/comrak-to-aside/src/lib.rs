/*
 * lib.rs
 * Copyright (c) 2025 aside contributors
 *
 * Convert comrak's CommonMark AST to the aside markdown tree.
 *
 * This crate provides direct conversion from comrak's arena-based AST
 * to our owned tree. The CommonMark core is supported, plus the GFM
 * strikethrough and autolink extensions when enabled. Other extension
 * nodes are dropped with a warning.
 */

mod block;
mod inline;

pub use block::convert_document;

use aside_ast::Root;
use comrak::{Arena, Options, parse_document};
use serde::{Deserialize, Serialize};

/// Reader settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReaderOptions {
    /// Enable GitHub-flavored strikethrough and autolinks.
    pub gfm: bool,
}

/// Parse markdown text into an owned tree.
pub fn parse_markdown(markdown: &str, options: &ReaderOptions) -> Root {
    let arena = Arena::new();
    let mut comrak_options = Options::default();
    comrak_options.extension.strikethrough = options.gfm;
    comrak_options.extension.autolink = options.gfm;

    let root = parse_document(&arena, markdown, &comrak_options);
    convert_document(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aside_ast::{Block, Inline};

    fn parse(markdown: &str) -> Root {
        parse_markdown(markdown, &ReaderOptions::default())
    }

    fn first_paragraph_inlines(blocks: &[Block]) -> &[Inline] {
        match &blocks[0] {
            Block::Paragraph(p) => &p.children,
            other => panic!("Expected Paragraph, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_simple_paragraph() {
        let root = parse("Hello world.\n");
        assert_eq!(root.children.len(), 1);
        assert_eq!(
            first_paragraph_inlines(&root.children),
            &[Inline::text("Hello world.")]
        );
    }

    #[test]
    fn test_soft_breaks_merge_into_one_text_run() {
        let root = parse("> [!note]\n> This is a note");
        match &root.children[0] {
            Block::BlockQuote(quote) => {
                assert_eq!(
                    first_paragraph_inlines(&quote.children),
                    &[Inline::text("[!note]\nThis is a note")]
                );
            }
            other => panic!("Expected BlockQuote, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_trailing_spaces_before_soft_break_are_dropped() {
        let root = parse("> [!info] Important information \n> Additional details");
        match &root.children[0] {
            Block::BlockQuote(quote) => {
                assert_eq!(
                    first_paragraph_inlines(&quote.children),
                    &[Inline::text("[!info] Important information\nAdditional details")]
                );
            }
            other => panic!("Expected BlockQuote, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_empty_blockquote_has_no_children() {
        let root = parse(">");
        match &root.children[0] {
            Block::BlockQuote(quote) => assert!(quote.children.is_empty()),
            other => panic!("Expected BlockQuote, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_heading() {
        let root = parse("# Hello\n");
        match &root.children[0] {
            Block::Heading(h) => {
                assert_eq!(h.depth, 1);
                assert_eq!(h.children, vec![Inline::text("Hello")]);
            }
            other => panic!("Expected Heading, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_emphasis_splits_text_runs() {
        let root = parse("a *b* c\n");
        let inlines = first_paragraph_inlines(&root.children);
        assert_eq!(inlines.len(), 3);
        assert_eq!(inlines[0], Inline::text("a "));
        assert!(matches!(inlines[1], Inline::Emphasis(_)));
        assert_eq!(inlines[2], Inline::text(" c"));
    }

    #[test]
    fn test_code_block_drops_final_newline() {
        let root = parse("```rust title\nfn main() {}\n```\n");
        match &root.children[0] {
            Block::Code(code) => {
                assert_eq!(code.lang.as_deref(), Some("rust"));
                assert_eq!(code.meta.as_deref(), Some("title"));
                assert_eq!(code.value, "fn main() {}");
            }
            other => panic!("Expected Code, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_tight_and_loose_lists() {
        let tight = parse("- a\n- b\n");
        match &tight.children[0] {
            Block::List(list) => {
                assert!(!list.ordered);
                assert!(!list.spread);
                assert_eq!(list.children.len(), 2);
            }
            other => panic!("Expected List, got {}", other.type_name()),
        }

        let loose = parse("3. a\n\n4. b\n");
        match &loose.children[0] {
            Block::List(list) => {
                assert!(list.ordered);
                assert_eq!(list.start, Some(3));
                assert!(list.spread);
            }
            other => panic!("Expected List, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_strikethrough_only_with_gfm() {
        let plain = parse("~~gone~~\n");
        assert_eq!(
            first_paragraph_inlines(&plain.children),
            &[Inline::text("~~gone~~")]
        );

        let gfm = parse_markdown("~~gone~~\n", &ReaderOptions { gfm: true });
        assert!(matches!(
            first_paragraph_inlines(&gfm.children)[0],
            Inline::Delete(_)
        ));
    }

    #[test]
    fn test_link_and_image() {
        let root = parse("[x](https://example.com \"T\") ![alt *text*](a.png)\n");
        let inlines = first_paragraph_inlines(&root.children);
        match &inlines[0] {
            Inline::Link(link) => {
                assert_eq!(link.url, "https://example.com");
                assert_eq!(link.title.as_deref(), Some("T"));
                assert_eq!(link.children, vec![Inline::text("x")]);
            }
            other => panic!("Expected Link, got {:?}", other),
        }
        match &inlines[2] {
            Inline::Image(image) => {
                assert_eq!(image.url, "a.png");
                assert_eq!(image.alt, "alt text");
                assert!(image.title.is_none());
            }
            other => panic!("Expected Image, got {:?}", other),
        }
    }
}
