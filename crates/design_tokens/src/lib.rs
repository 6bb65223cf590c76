//! Shared design tokens for the design-system primitives.
//!
//! Tokens are plain `&'static str` CSS values grouped by concern. Primitives
//! compose them into inline style declarations; nothing here knows about the
//! rendering layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod colors;
pub mod layers;
pub mod radius;
pub mod shadows;
pub mod spacing;
pub mod typography;
