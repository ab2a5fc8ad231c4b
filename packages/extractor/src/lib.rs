//! Juriscontent Section Extractor - Split cleaned legal HTML into
//! H1-bounded section artifacts.
//!
//! This crate takes a document's `juriscontent.html` (produced by the
//! upstream enrichment stage) and partitions its content into an
//! ordered, contiguously numbered sequence of sections, one per
//! top-level heading, with zero content loss.
//!
//! # Example
//!
//! ```
//! use juriscontent_extractor::{extract_sections, render};
//!
//! let html = "<body><h1>Part 1</h1><p>Some text.</p></body>";
//! let sections = extract_sections(html).unwrap();
//! assert_eq!(sections.len(), 1);
//! assert_eq!(render(&sections[0]), "Part 1\n\nSome text.");
//! ```
//!
//! # Architecture
//!
//! - [`document`]: HTML parsing into an ordered block node sequence
//! - [`segment`]: the section segmentation pass and invariant checks
//! - [`render`]: section-to-text serialization
//! - [`extractor`]: parse + segment + verify entry point
//! - [`config`]: constants (size limit, artifact names)
//! - [`error`]: error types and Result alias
//! - [`cli`]: standalone command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extractor;
pub mod render;
pub mod segment;

// Re-export main functions
pub use extractor::extract_sections;
pub use render::render;

// Re-export commonly used items
pub use document::{Node, NodeKind};
pub use error::{ExtractorError, Result};
pub use segment::{segment, verify, Section};
