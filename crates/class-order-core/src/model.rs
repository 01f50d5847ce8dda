//! Syntactic model of class bodies.
//!
//! These types are the contract between a language frontend (see
//! `class-order-py`) and the ordering engine. They capture only the
//! syntactic shape the classifier needs; the engine never mutates them.

/// A class-like declaration and its direct body members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// Declared class name.
    pub name: String,
    /// Line number of the declaration (1-indexed).
    pub line: usize,
    /// Column of the declaration (1-indexed).
    pub column: usize,
    /// Direct children of the class body, in source order.
    pub members: Vec<Member>,
}

/// One direct child statement of a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Syntactic shape of the statement.
    pub kind: MemberKind,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (1-indexed).
    pub column: usize,
}

impl Member {
    /// Creates a member at the given position.
    #[must_use]
    pub fn new(kind: MemberKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

/// Raw syntactic shape of a class body statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    /// Simple or annotated assignment.
    Assignment {
        /// The (first) assignment target.
        target: AssignTarget,
        /// Serialized callee text when the assigned value is a call,
        /// e.g. `models.ForeignKey`. Chained assignments are chased to
        /// the final value.
        callee: Option<String>,
    },
    /// Function or method definition (sync or async).
    FunctionDef {
        /// Declared function name.
        name: String,
        /// Decorator names, one per recognized decorator: the bare
        /// identifier, or the final attribute of an attribute-style
        /// decorator (`@bar.setter` yields `setter`). Call-shaped
        /// decorators are omitted.
        decorators: Vec<String>,
    },
    /// Nested class declaration.
    ClassDef {
        /// Declared class name.
        name: String,
    },
    /// Bare expression statement.
    Expression {
        /// Whether the sole content is a string literal.
        is_string_literal: bool,
    },
    /// Conditional statement at class-body level.
    If,
    /// A `pass` statement.
    Pass,
    /// Anything else; excluded from all checks.
    Other,
}

/// Target of a class-level assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    /// Single identifier target.
    Name(String),
    /// Attribute access target; carries the final attribute name.
    Attribute(String),
    /// Tuple target; carries only the identifier elements. Non-name
    /// elements are dropped here and thus omitted from display names.
    Tuple(Vec<String>),
    /// Subscript (indexed) target.
    Subscript,
    /// Any other target shape.
    Other,
}
