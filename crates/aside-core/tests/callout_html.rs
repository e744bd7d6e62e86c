/*
 * callout_html.rs
 * Copyright (c) 2025 aside contributors
 *
 * End-to-end rendering of callout quotes to HTML.
 */

use aside_ast::{Block, BlockQuote, Data, Inline, Paragraph, Root};
use aside_core::{
    AsideConfig, HtmlOptions, html_writer, render_markdown_to_html, rewrite_callouts,
};

fn render(markdown: &str) -> String {
    render_markdown_to_html(markdown, &AsideConfig::default())
        .unwrap()
        .html
}

// === Basic conversion ===

#[test]
fn converts_note_callout() {
    assert_eq!(
        render("> [!note]\n> This is a note"),
        "<aside class=\"note\">\n<p>This is a note</p>\n</aside>"
    );
}

#[test]
fn keeps_content_on_marker_line() {
    assert_eq!(
        render("> [!warning] Be careful\n> This is dangerous"),
        "<aside class=\"warning\">\n<p>Be careful\nThis is dangerous</p>\n</aside>"
    );
}

#[test]
fn converts_multiple_callouts() {
    let markdown = "> [!note]\n> First\n\n> [!tip]\n> Second";
    assert_eq!(
        render(markdown),
        "<aside class=\"note\">\n<p>First</p>\n</aside>\n\
         <aside class=\"tip\">\n<p>Second</p>\n</aside>"
    );
}

#[test]
fn leaves_plain_blockquote_alongside_callout() {
    let markdown = "> Regular quote\n\n> [!info]\n> Callout";
    assert_eq!(
        render(markdown),
        "<blockquote>\n<p>Regular quote</p>\n</blockquote>\n\
         <aside class=\"info\">\n<p>Callout</p>\n</aside>"
    );
}

#[test]
fn keeps_multiple_paragraphs() {
    let markdown = "> [!note]\n> Line one\n> Line two\n>\n> Line four after blank line";
    assert_eq!(
        render(markdown),
        "<aside class=\"note\">\n<p>Line one\nLine two</p>\n\
         <p>Line four after blank line</p>\n</aside>"
    );
}

// === Class names ===

#[test]
fn lowercases_class_name() {
    assert_eq!(
        render("> [!Important]\n> Text"),
        "<aside class=\"important\">\n<p>Text</p>\n</aside>"
    );
    assert_eq!(
        render("> [!MyCustomType]\n> Text"),
        "<aside class=\"mycustomtype\">\n<p>Text</p>\n</aside>"
    );
    assert_eq!(
        render("> [!custom_type123]\n> Text"),
        "<aside class=\"custom_type123\">\n<p>Text</p>\n</aside>"
    );
}

// === Edge cases ===

#[test]
fn empty_callout_has_no_children() {
    assert_eq!(render("> [!note]"), "<aside class=\"note\">\n</aside>");
}

#[test]
fn whitespace_after_marker_is_dropped() {
    assert_eq!(render("> [!info]   "), "<aside class=\"info\">\n</aside>");
}

#[test]
fn malformed_marker_stays_blockquote() {
    assert_eq!(
        render("> [!note\n> Missing closing bracket"),
        "<blockquote>\n<p>[!note\nMissing closing bracket</p>\n</blockquote>"
    );
}

#[test]
fn marker_without_bang_stays_blockquote() {
    assert_eq!(
        render("> [note]\n> Should remain blockquote"),
        "<blockquote>\n<p>[note]\nShould remain blockquote</p>\n</blockquote>"
    );
}

#[test]
fn empty_blockquote_is_untouched() {
    assert_eq!(render(">"), "<blockquote>\n</blockquote>");
}

#[test]
fn quote_starting_with_heading_is_untouched() {
    assert_eq!(
        render("> # [!note]"),
        "<blockquote>\n<h1>[!note]</h1>\n</blockquote>"
    );
}

#[test]
fn quote_starting_with_emphasis_is_untouched() {
    assert_eq!(
        render("> *[!note]* text"),
        "<blockquote>\n<p><em>[!note]</em> text</p>\n</blockquote>"
    );
}

// === Formatting and nesting ===

#[test]
fn keeps_inline_formatting() {
    assert_eq!(
        render("> [!tip] **Bold** and *italic* and `code`"),
        "<aside class=\"tip\">\n<p><strong>Bold</strong> and <em>italic</em> \
         and <code>code</code></p>\n</aside>"
    );
}

#[test]
fn nested_quote_inside_callout() {
    let markdown = "> [!quote]\n> > This is a nested quote\n> > inside a callout";
    assert_eq!(
        render(markdown),
        "<aside class=\"quote\">\n<blockquote>\n<p>This is a nested quote\n\
         inside a callout</p>\n</blockquote>\n</aside>"
    );
}

#[test]
fn nested_callout_inside_callout() {
    let markdown = "> [!outer]\n> > [!inner]\n> > Deep";
    assert_eq!(
        render(markdown),
        "<aside class=\"outer\">\n<aside class=\"inner\">\n<p>Deep</p>\n</aside>\n</aside>"
    );
}

#[test]
fn links_and_lists_inside_callout() {
    let markdown = "> [!info]\n> Check out [this link](https://example.com)\n>\n> - Item 1\n> - Item 2";
    assert_eq!(
        render(markdown),
        "<aside class=\"info\">\n<p>Check out <a href=\"https://example.com\">this link</a></p>\n\
         <ul>\n<li>Item 1</li>\n<li>Item 2</li>\n</ul>\n</aside>"
    );
}

#[test]
fn callout_inside_list_item() {
    let markdown = "- > [!note]\n  > In a list";
    assert_eq!(
        render(markdown),
        "<ul>\n<li>\n<aside class=\"note\">\n<p>In a list</p>\n</aside>\n</li>\n</ul>"
    );
}

// === Metadata ===

#[test]
fn existing_node_data_is_preserved() {
    let mut data = Data::new().with_extra("source", serde_json::json!("import"));
    data.set_property("id", "first");

    let mut root = Root::new(vec![Block::BlockQuote(
        BlockQuote::new(vec![Block::Paragraph(Paragraph::new(vec![Inline::text(
            "[!note]\nBody",
        )]))])
        .with_data(data),
    )]);

    rewrite_callouts(&mut root);

    let Block::Callout(callout) = &root.children[0] else {
        panic!("Expected a callout");
    };
    assert_eq!(
        callout.data.get_extra("source"),
        Some(&serde_json::json!("import"))
    );
    assert_eq!(callout.data.class_name(), Some("note"));

    let html = html_writer::to_html(&root, &HtmlOptions::default()).unwrap();
    assert_eq!(
        html,
        "<aside id=\"first\" class=\"note\">\n<p>Body</p>\n</aside>"
    );
}

#[test]
fn escapes_text_in_callout() {
    assert_eq!(
        render("> [!note] a < b & c"),
        "<aside class=\"note\">\n<p>a &lt; b &amp; c</p>\n</aside>"
    );
}

#[test]
fn snapshot_mixed_document() {
    let markdown = "\
# Guide

> [!WARNING] Heads up
> Read this first.

Some text.

> Just a quote.

1. one
2. two
";
    insta::assert_snapshot!(render(markdown), @r#"
    <h1>Guide</h1>
    <aside class="warning">
    <p>Heads up
    Read this first.</p>
    </aside>
    <p>Some text.</p>
    <blockquote>
    <p>Just a quote.</p>
    </blockquote>
    <ol>
    <li>one</li>
    <li>two</li>
    </ol>
    "#);
}
