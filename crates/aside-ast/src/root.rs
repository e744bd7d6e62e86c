/*
 * root.rs
 * Copyright (c) 2025 aside contributors
 */

use crate::block::{Block, Blocks};
use serde::{Deserialize, Serialize};

/*
 * The document root. Holds the top-level block sequence; transforms
 * mutate descendants, never the root itself.
 */

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    pub children: Blocks,
}

impl Root {
    pub fn new(children: Blocks) -> Self {
        Self { children }
    }

    /// Visit every block in document order (pre-order), including blocks
    /// nested in quotes, callouts and list items.
    pub fn walk_blocks<'a>(&'a self, f: &mut impl FnMut(&'a Block)) {
        walk(&self.children, f);
    }
}

fn walk<'a>(blocks: &'a [Block], f: &mut impl FnMut(&'a Block)) {
    for block in blocks {
        f(block);
        match block {
            Block::BlockQuote(quote) => walk(&quote.children, f),
            Block::Callout(callout) => walk(&callout.children, f),
            Block::List(list) => {
                for item in &list.children {
                    walk(&item.children, f);
                }
            }
            _ => {}
        }
    }
}
