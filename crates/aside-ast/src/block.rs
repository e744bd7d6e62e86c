/*
 * block.rs
 * Copyright (c) 2025 aside contributors
 */

use crate::data::Data;
use crate::inline::Inlines;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    #[serde(rename = "blockquote")]
    BlockQuote(BlockQuote),
    /// A block quote reclassified by its leading `[!type]` marker.
    ///
    /// Only produced by transforms; readers never emit it.
    Callout(Callout),
    List(List),
    Code(Code),
    ThematicBreak(ThematicBreak),
    Html(Html),
}

pub type Blocks = Vec<Block>;

impl Block {
    /// The mdast-style type tag of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading(_) => "heading",
            Block::BlockQuote(_) => "blockquote",
            Block::Callout(_) => "callout",
            Block::List(_) => "list",
            Block::Code(_) => "code",
            Block::ThematicBreak(_) => "thematicBreak",
            Block::Html(_) => "html",
        }
    }

    pub fn data(&self) -> &Data {
        match self {
            Block::Paragraph(b) => &b.data,
            Block::Heading(b) => &b.data,
            Block::BlockQuote(b) => &b.data,
            Block::Callout(b) => &b.data,
            Block::List(b) => &b.data,
            Block::Code(b) => &b.data,
            Block::ThematicBreak(b) => &b.data,
            Block::Html(b) => &b.data,
        }
    }

    pub fn data_mut(&mut self) -> &mut Data {
        match self {
            Block::Paragraph(b) => &mut b.data,
            Block::Heading(b) => &mut b.data,
            Block::BlockQuote(b) => &mut b.data,
            Block::Callout(b) => &mut b.data,
            Block::List(b) => &mut b.data,
            Block::Code(b) => &mut b.data,
            Block::ThematicBreak(b) => &mut b.data,
            Block::Html(b) => &mut b.data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Inlines,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

impl Paragraph {
    pub fn new(children: Inlines) -> Self {
        Self {
            children,
            data: Data::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// 1 through 6.
    pub depth: u8,
    pub children: Inlines,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockQuote {
    pub children: Blocks,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

impl BlockQuote {
    pub fn new(children: Blocks) -> Self {
        Self {
            children,
            data: Data::default(),
        }
    }

    pub fn with_data(mut self, data: Data) -> Self {
        self.data = data;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callout {
    /// Lowercased marker type, e.g. `warning` for `[!WARNING]`.
    pub callout_type: String,
    pub children: Blocks,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    /// Starting number of an ordered list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    /// Loose list: items are separated by blank lines and keep their `<p>`.
    pub spread: bool,
    pub children: Vec<ListItem>,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub spread: bool,
    pub children: Blocks,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Code text without the final line ending.
    pub value: String,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThematicBreak {
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Html {
    pub value: String,
    #[serde(default, skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}
