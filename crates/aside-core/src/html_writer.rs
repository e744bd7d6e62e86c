/*
 * html_writer.rs
 * Copyright (c) 2025 aside contributors
 *
 * HTML writer honouring per-node render metadata.
 */

//! HTML writer.
//!
//! Output layout follows the remark-rehype / rehype-stringify conventions
//! so documents render identically to that toolchain:
//!
//! - top-level blocks are separated by a single `\n`, with no trailing newline
//! - container elements put each child on its own line:
//!   `<blockquote>\n<p>x</p>\n</blockquote>`, and `<blockquote>\n</blockquote>`
//!   when empty
//! - items of tight lists inline their paragraphs: `<li>Item</li>`
//!
//! Every block's [`Data`] is applied on output: `h_name` replaces the element
//! name and `h_properties` become attributes (`className` is written as
//! `class`). Raw HTML is dropped unless explicitly allowed.

use std::io::{self, Write};

use aside_ast::{Block, CLASS_NAME, Data, Inline, ListItem, Root};
use serde::{Deserialize, Serialize};

use crate::transforms::DEFAULT_CALLOUT_ELEMENT;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HtmlOptions {
    /// Pass raw HTML from the source through instead of dropping it.
    pub allow_dangerous_html: bool,
}

/// Main entry point: render a tree to HTML.
pub fn write<W: Write>(root: &Root, options: &HtmlOptions, buf: &mut W) -> io::Result<()> {
    write_blocks(&root.children, options, buf)
}

/// Render a tree to an HTML string.
pub fn to_html(root: &Root, options: &HtmlOptions) -> io::Result<String> {
    let mut buf = Vec::new();
    write(root, options, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a sequence of blocks separated by newlines.
pub fn write_blocks<W: Write>(
    blocks: &[Block],
    options: &HtmlOptions,
    buf: &mut W,
) -> io::Result<()> {
    let mut first = true;
    for block in blocks.iter().filter(|b| produces_output(b, options)) {
        if !first {
            writeln!(buf)?;
        }
        first = false;
        write_block(block, options, buf)?;
    }
    Ok(())
}

/// Write a sequence of inlines to HTML.
pub fn write_inlines<W: Write>(
    inlines: &[Inline],
    options: &HtmlOptions,
    buf: &mut W,
) -> io::Result<()> {
    for inline in inlines {
        write_inline(inline, options, buf)?;
    }
    Ok(())
}

fn produces_output(block: &Block, options: &HtmlOptions) -> bool {
    match block {
        Block::Html(_) => options.allow_dangerous_html,
        _ => true,
    }
}

/// Escape text content (`&` and `<`).
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value (`&` and `"`).
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Map a hast property name to its HTML attribute name.
fn attribute_name(property: &str) -> &str {
    match property {
        CLASS_NAME => "class",
        "htmlFor" => "for",
        _ => property,
    }
}

/// Write an opening tag. `attrs` are the element's own attributes;
/// `data.h_properties` are merged over them, replacing equal names in place.
fn write_open_tag<'a, W: Write>(
    tag: &str,
    attrs: Vec<(&'a str, String)>,
    data: &'a Data,
    buf: &mut W,
) -> io::Result<()> {
    let mut merged = attrs;
    for (property, value) in &data.h_properties {
        let name = attribute_name(property);
        match merged.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value.clone(),
            None => merged.push((name, value.clone())),
        }
    }

    write!(buf, "<{}", tag)?;
    for (name, value) in &merged {
        write!(buf, " {}=\"{}\"", name, escape_attr(value))?;
    }
    write!(buf, ">")
}

fn element_name<'a>(data: &'a Data, default: &'a str) -> &'a str {
    data.h_name.as_deref().unwrap_or(default)
}

/// Write a container element with one child block per line.
fn write_container<'a, W: Write>(
    tag: &str,
    attrs: Vec<(&'a str, String)>,
    data: &'a Data,
    children: &[Block],
    options: &HtmlOptions,
    buf: &mut W,
) -> io::Result<()> {
    write_open_tag(tag, attrs, data, buf)?;
    writeln!(buf)?;
    if children.iter().any(|b| produces_output(b, options)) {
        write_blocks(children, options, buf)?;
        writeln!(buf)?;
    }
    write!(buf, "</{}>", tag)
}

/// Write a single block to HTML.
fn write_block<W: Write>(block: &Block, options: &HtmlOptions, buf: &mut W) -> io::Result<()> {
    match block {
        Block::Paragraph(para) => {
            let tag = element_name(&para.data, "p");
            write_open_tag(tag, vec![], &para.data, buf)?;
            write_inlines(&para.children, options, buf)?;
            write!(buf, "</{}>", tag)?;
        }
        Block::Heading(heading) => {
            let default_tag = format!("h{}", heading.depth);
            let tag = element_name(&heading.data, &default_tag);
            write_open_tag(tag, vec![], &heading.data, buf)?;
            write_inlines(&heading.children, options, buf)?;
            write!(buf, "</{}>", tag)?;
        }
        Block::BlockQuote(quote) => {
            let tag = element_name(&quote.data, "blockquote");
            write_container(tag, vec![], &quote.data, &quote.children, options, buf)?;
        }
        Block::Callout(callout) => {
            let tag = element_name(&callout.data, DEFAULT_CALLOUT_ELEMENT);
            // The classification is normally carried in the data already
            let attrs = if callout.data.class_name().is_some() {
                vec![]
            } else {
                vec![("class", callout.callout_type.clone())]
            };
            write_container(tag, attrs, &callout.data, &callout.children, options, buf)?;
        }
        Block::List(list) => {
            let tag = element_name(&list.data, if list.ordered { "ol" } else { "ul" });
            let mut attrs = Vec::new();
            if let Some(start) = list.start {
                if list.ordered && start != 1 {
                    attrs.push(("start", start.to_string()));
                }
            }
            write_open_tag(tag, attrs, &list.data, buf)?;
            writeln!(buf)?;
            for (index, item) in list.children.iter().enumerate() {
                if index > 0 {
                    writeln!(buf)?;
                }
                write_list_item(item, list.spread, options, buf)?;
            }
            if !list.children.is_empty() {
                writeln!(buf)?;
            }
            write!(buf, "</{}>", tag)?;
        }
        Block::Code(code) => {
            write!(buf, "<pre>")?;
            let mut attrs = Vec::new();
            if let Some(lang) = &code.lang {
                attrs.push(("class", format!("language-{}", lang)));
            }
            let tag = element_name(&code.data, "code");
            write_open_tag(tag, attrs, &code.data, buf)?;
            if !code.value.is_empty() {
                writeln!(buf, "{}", escape_text(&code.value))?;
            }
            write!(buf, "</{}></pre>", tag)?;
        }
        Block::ThematicBreak(rule) => {
            write_open_tag(element_name(&rule.data, "hr"), vec![], &rule.data, buf)?;
        }
        Block::Html(html) => {
            if options.allow_dangerous_html {
                write!(buf, "{}", html.value)?;
            }
        }
    }
    Ok(())
}

/// Write a list item.
///
/// In tight lists a paragraph is unwrapped to its inline content. Line
/// breaks go before every child except a leading unwrapped paragraph, and
/// after the last child unless it is an unwrapped paragraph.
fn write_list_item<W: Write>(
    item: &ListItem,
    list_spread: bool,
    options: &HtmlOptions,
    buf: &mut W,
) -> io::Result<()> {
    let loose = list_spread || item.spread;
    let tag = element_name(&item.data, "li");
    write_open_tag(tag, vec![], &item.data, buf)?;

    let children: Vec<&Block> = item
        .children
        .iter()
        .filter(|b| produces_output(b, options))
        .collect();

    for (index, child) in children.iter().enumerate() {
        let unwrapped = !loose && matches!(child, Block::Paragraph(_));
        if index > 0 || !unwrapped {
            writeln!(buf)?;
        }
        match child {
            Block::Paragraph(para) if unwrapped => write_inlines(&para.children, options, buf)?,
            _ => write_block(child, options, buf)?,
        }
    }

    if let Some(last) = children.last() {
        if loose || !matches!(last, Block::Paragraph(_)) {
            writeln!(buf)?;
        }
    }

    write!(buf, "</{}>", tag)
}

/// Write a single inline to HTML.
fn write_inline<W: Write>(inline: &Inline, options: &HtmlOptions, buf: &mut W) -> io::Result<()> {
    match inline {
        Inline::Text(text) => {
            write!(buf, "{}", escape_text(&text.value))?;
        }
        Inline::Emphasis(emph) => {
            write!(buf, "<em>")?;
            write_inlines(&emph.children, options, buf)?;
            write!(buf, "</em>")?;
        }
        Inline::Strong(strong) => {
            write!(buf, "<strong>")?;
            write_inlines(&strong.children, options, buf)?;
            write!(buf, "</strong>")?;
        }
        Inline::Delete(delete) => {
            write!(buf, "<del>")?;
            write_inlines(&delete.children, options, buf)?;
            write!(buf, "</del>")?;
        }
        Inline::InlineCode(code) => {
            write!(buf, "<code>{}</code>", escape_text(&code.value))?;
        }
        Inline::Break => {
            writeln!(buf, "<br>")?;
        }
        Inline::Link(link) => {
            write!(buf, "<a href=\"{}\"", escape_attr(&link.url))?;
            if let Some(title) = &link.title {
                write!(buf, " title=\"{}\"", escape_attr(title))?;
            }
            write!(buf, ">")?;
            write_inlines(&link.children, options, buf)?;
            write!(buf, "</a>")?;
        }
        Inline::Image(image) => {
            write!(
                buf,
                "<img src=\"{}\" alt=\"{}\"",
                escape_attr(&image.url),
                escape_attr(&image.alt)
            )?;
            if let Some(title) = &image.title {
                write!(buf, " title=\"{}\"", escape_attr(title))?;
            }
            write!(buf, ">")?;
        }
        Inline::Html(html) => {
            if options.allow_dangerous_html {
                write!(buf, "{}", html.value)?;
            }
        }
    }
    Ok(())
}
