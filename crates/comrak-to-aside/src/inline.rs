/*
 * inline.rs
 * Copyright (c) 2025 aside contributors
 *
 * Convert comrak inline nodes to aside inlines.
 */

use aside_ast::{
    Delete, Emphasis, Image, Inline, InlineCode, InlineHtml, Inlines, Link, Strong, Text,
};
use comrak::nodes::{AstNode, NodeValue};

/// Convert a comrak node's inline children to aside inlines.
///
/// comrak splits literal text at every potential delimiter and emits soft
/// line breaks as separate nodes. Both are folded here into single text
/// runs, with soft breaks kept as `\n` inside the value.
pub fn convert_children_to_inlines<'a>(node: &'a AstNode<'a>) -> Inlines {
    let mut out = Inlines::new();
    for child in node.children() {
        convert_inline(child, &mut out);
    }
    out
}

fn push_text(out: &mut Inlines, value: &str) {
    if let Some(Inline::Text(last)) = out.last_mut() {
        last.value.push_str(value);
        return;
    }
    out.push(Inline::Text(Text {
        value: value.to_string(),
    }));
}

fn convert_inline<'a>(node: &'a AstNode<'a>, out: &mut Inlines) {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Text(text) => push_text(out, text),

        NodeValue::SoftBreak => push_text(out, "\n"),

        NodeValue::LineBreak => out.push(Inline::Break),

        NodeValue::Code(code) => out.push(Inline::InlineCode(InlineCode {
            value: code.literal.to_string(),
        })),

        NodeValue::Emph => out.push(Inline::Emphasis(Emphasis {
            children: convert_children_to_inlines(node),
        })),

        NodeValue::Strong => out.push(Inline::Strong(Strong {
            children: convert_children_to_inlines(node),
        })),

        NodeValue::Strikethrough => out.push(Inline::Delete(Delete {
            children: convert_children_to_inlines(node),
        })),

        NodeValue::Link(link) => out.push(Inline::Link(Link {
            url: link.url.to_string(),
            title: non_empty(&link.title),
            children: convert_children_to_inlines(node),
        })),

        NodeValue::Image(link) => out.push(Inline::Image(Image {
            url: link.url.to_string(),
            title: non_empty(&link.title),
            alt: plain_text(node),
        })),

        NodeValue::HtmlInline(html) => out.push(Inline::Html(InlineHtml {
            value: html.to_string(),
        })),

        // Escaped characters just become the character itself
        NodeValue::Escaped => {
            for child in node.children() {
                convert_inline(child, out);
            }
        }

        _ => {
            tracing::warn!(
                node = ?std::mem::discriminant(&ast.value),
                "Dropping unsupported inline node"
            );
        }
    }
}

/// Flatten a node's descendants to their literal text (image alt text).
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants().skip(1) {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push('\n'),
            _ => {}
        }
    }
    text
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
