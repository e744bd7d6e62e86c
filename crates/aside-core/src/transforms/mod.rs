/*
 * mod.rs
 * Copyright (c) 2025 aside contributors
 *
 * Built-in AST transforms.
 */

pub mod callout;

pub use callout::{
    CalloutMarker, CalloutTransform, DEFAULT_CALLOUT_ELEMENT, parse_callout_marker,
    rewrite_callouts,
};
