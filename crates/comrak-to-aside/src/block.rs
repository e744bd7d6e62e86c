/*
 * block.rs
 * Copyright (c) 2025 aside contributors
 *
 * Convert comrak block nodes to aside blocks.
 */

use crate::inline::convert_children_to_inlines;
use aside_ast::{
    Block, BlockQuote, Blocks, Code, Data, Heading, Html, List, ListItem, Paragraph, Root,
    ThematicBreak,
};
use comrak::nodes::{AstNode, ListType, NodeCodeBlock, NodeList, NodeValue};

/// Convert a comrak document to an aside root.
///
/// # Panics
/// Panics if `root` is not a comrak `Document` node.
pub fn convert_document<'a>(root: &'a AstNode<'a>) -> Root {
    let is_document = matches!(root.data.borrow().value, NodeValue::Document);
    if !is_document {
        panic!("Expected Document node at root");
    }
    Root::new(convert_children_to_blocks(root))
}

/// Convert a comrak node's block children to aside blocks.
fn convert_children_to_blocks<'a>(node: &'a AstNode<'a>) -> Blocks {
    node.children().filter_map(convert_block).collect()
}

/// Convert a comrak block node. Returns `None` for nodes with no
/// counterpart in the tree model.
fn convert_block<'a>(node: &'a AstNode<'a>) -> Option<Block> {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Paragraph => Some(Block::Paragraph(Paragraph::new(
            convert_children_to_inlines(node),
        ))),

        NodeValue::Heading(heading) => Some(Block::Heading(Heading {
            depth: heading.level,
            children: convert_children_to_inlines(node),
            data: Data::default(),
        })),

        NodeValue::CodeBlock(code_block) => Some(convert_code_block(code_block)),

        NodeValue::BlockQuote => Some(Block::BlockQuote(BlockQuote::new(
            convert_children_to_blocks(node),
        ))),

        NodeValue::List(list) => Some(convert_list(node, list)),

        NodeValue::ThematicBreak => Some(Block::ThematicBreak(ThematicBreak::default())),

        NodeValue::HtmlBlock(html) => Some(Block::Html(Html {
            value: strip_final_newline(&html.literal).to_string(),
            data: Data::default(),
        })),

        // Front matter carries no renderable content
        NodeValue::FrontMatter(_) => None,

        _ => {
            tracing::warn!(
                node = ?std::mem::discriminant(&ast.value),
                "Dropping unsupported block node"
            );
            None
        }
    }
}

fn convert_code_block(code_block: &NodeCodeBlock) -> Block {
    // Info string: first word is the language, the rest is free-form meta
    let info = code_block.info.trim();
    let (lang, meta) = match info.split_once(char::is_whitespace) {
        Some((lang, meta)) => (lang, meta.trim()),
        None => (info, ""),
    };

    Block::Code(Code {
        lang: non_empty(lang),
        meta: non_empty(meta),
        value: strip_final_newline(&code_block.literal).to_string(),
        data: Data::default(),
    })
}

fn convert_list<'a>(node: &'a AstNode<'a>, list: &NodeList) -> Block {
    let spread = !list.tight;
    let ordered = list.list_type == ListType::Ordered;

    let items = node
        .children()
        .map(|child| ListItem {
            spread,
            children: convert_children_to_blocks(child),
            data: Data::default(),
        })
        .collect();

    Block::List(List {
        ordered,
        start: if ordered { Some(list.start) } else { None },
        spread,
        children: items,
        data: Data::default(),
    })
}

fn strip_final_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
