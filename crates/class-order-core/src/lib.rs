//! # class-order-core
//!
//! Core engine for class attribute ordering checks.
//!
//! The engine consumes an already-parsed sequence of class-like nodes
//! (see [`model`]) and a resolved configuration, and produces structured
//! [`Violation`]s. It never reads source text itself; language frontends
//! such as `class-order-py` build the model. It includes:
//!
//! - [`Classifier`] assigning each member a [`CategoryTag`]
//! - [`RankTable`] resolving tags to ordering weights
//! - [`OrderingValidator`] detecting rank inversions (`CCE001`) and
//!   stray class-level statements (`CCE002`)
//!
//! ## Example
//!
//! ```ignore
//! use class_order_core::{Classifier, OrderConfig, OrderingValidator, RankTable};
//!
//! let classifier = Classifier::new();
//! let (table, warnings) = RankTable::build(&config.order);
//! let validator = OrderingValidator::new(&classifier, &table);
//! let violations = validator.validate_unit(&path, &classes);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod classify;
mod config;
mod naming;
mod ranks;
mod types;
mod validate;

/// Syntactic model of class bodies, produced by language frontends.
pub mod model;

pub use category::{CategoryTag, ALL_CATEGORIES};
pub use classify::{Classifier, DEFAULT_RELATION_CONSTRUCTORS};
pub use config::{AnalyzerConfig, Config, ConfigError, OrderConfig};
pub use naming::display_name;
pub use ranks::{BuildWarning, RankTable};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
pub use validate::{
    OrderingValidator, EXPRESSION_CODE, EXPRESSION_RULE, ORDER_CODE, ORDER_RULE,
};
