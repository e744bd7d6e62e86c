/*
 * transform.rs
 * Copyright (c) 2025 aside contributors
 *
 * AST transformation pipeline infrastructure.
 */

//! AST transformation pipeline infrastructure.
//!
//! - [`AstTransform`] - The trait implemented by all transformations
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//!
//! Transforms run in a flat, ordered sequence (insertion order). Each one
//! receives exclusive access to the tree for the duration of its run.
//!
//! # Example
//!
//! ```
//! use aside_ast::Root;
//! use aside_core::transform::{AstTransform, TransformPipeline};
//! use aside_core::Result;
//!
//! struct DropRules;
//!
//! impl AstTransform for DropRules {
//!     fn name(&self) -> &str { "drop-rules" }
//!
//!     fn transform(&self, ast: &mut Root) -> Result<()> {
//!         ast.children.retain(|b| b.type_name() != "thematicBreak");
//!         Ok(())
//!     }
//! }
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(DropRules));
//!
//! let mut ast = Root::default();
//! pipeline.execute(&mut ast).unwrap();
//! ```

use aside_ast::Root;

use crate::Result;

/// Trait for AST transformations.
///
/// # Thread Safety
///
/// Transforms must be `Send + Sync` and must not keep mutable state between
/// runs, so a single instance can process different trees concurrently.
pub trait AstTransform: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Apply the transformation to the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails.
    fn transform(&self, ast: &mut Root) -> Result<()>;
}

/// A pipeline of AST transforms to execute in order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn AstTransform>>,
}

impl TransformPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline.
    ///
    /// Transforms run in the order they are added.
    pub fn push(&mut self, transform: Box<dyn AstTransform>) {
        self.transforms.push(transform);
    }

    /// Add multiple transforms to the pipeline.
    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn AstTransform>>) {
        self.transforms.extend(transforms);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Execute all transforms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute(&self, ast: &mut Root) -> Result<()> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.transform(ast)?;
        }

        Ok(())
    }

    /// List the names of all transforms in execution order.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
