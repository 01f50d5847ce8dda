//! # class-order-py
//!
//! Tree-sitter based Python frontend for the class-order linter.
//!
//! This crate turns Python source text into the class/member model that
//! `class-order-core` validates. It adds:
//!
//! - [`PythonExtractor`] for class body extraction via Tree-sitter
//! - [`ModuleAnalysis`] as the per-file analysis result
//!
//! The extractor is purely syntactic: it records statement shapes,
//! assignment targets, callee text, and decorator names, and leaves all
//! classification to the core engine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod python;

pub use python::{ModuleAnalysis, PythonExtractor};
