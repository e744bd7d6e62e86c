/*
 * lib.rs
 * Copyright (c) 2025 aside contributors
 *
 * Markdown tree type definitions for aside.
 *
 * This crate provides pure data types for a parsed markdown document,
 * shaped after mdast: an ordered sequence of block nodes, each carrying
 * an optional render metadata record that writers consult to decide the
 * emitted element name and its attributes. It has minimal dependencies
 * (serde, serde_json, hashlink) and is shared by the reader, the
 * transforms and the HTML writer.
 */

pub mod block;
pub mod data;
pub mod inline;
pub mod root;

// Re-export commonly used types at the crate root
pub use block::{
    Block, BlockQuote, Blocks, Callout, Code, Heading, Html, List, ListItem, Paragraph,
    ThematicBreak,
};
pub use data::{CLASS_NAME, Data};
pub use inline::{Delete, Emphasis, Image, Inline, InlineCode, InlineHtml, Inlines, Link, Strong, Text};
pub use root::Root;
