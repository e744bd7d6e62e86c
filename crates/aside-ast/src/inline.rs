/*
 * inline.rs
 * Copyright (c) 2025 aside contributors
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    /// Literal text. Soft line breaks are kept inside the value as `\n`.
    Text(Text),
    Emphasis(Emphasis),
    Strong(Strong),
    /// Strikethrough (only produced with GFM enabled)
    Delete(Delete),
    InlineCode(InlineCode),
    /// Hard line break
    Break,
    Link(Link),
    Image(Image),
    Html(InlineHtml),
}

pub type Inlines = Vec<Inline>;

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(Text {
            value: value.into(),
        })
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Inline::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub children: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub children: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub children: Inlines,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub children: Inlines,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineHtml {
    pub value: String,
}
