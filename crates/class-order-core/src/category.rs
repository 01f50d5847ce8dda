//! The closed category vocabulary and its hierarchy.

use serde::{Deserialize, Serialize};

/// Category assigned to a class body member.
///
/// Exactly one tag per classifiable member. The string form (used in
/// custom order lists and output) matches [`CategoryTag::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    /// Leading string literal expression.
    Docstring,
    /// `pass` statement.
    Pass,
    /// Nested class named exactly `Meta`.
    MetaClass,
    /// Any other nested class.
    NestedClass,
    /// Assignment to an ALL-CAPS identifier.
    Constant,
    /// Plain class-level assignment.
    Field,
    /// Assignment whose value calls a recognized relation constructor.
    OuterField,
    /// Conditional statement at class-body level.
    If,
    /// Bare non-docstring expression statement.
    Expression,
    /// `__new__` method.
    #[serde(rename = "__new__")]
    New,
    /// `__init__` method.
    #[serde(rename = "__init__")]
    Init,
    /// `__post_init__` method.
    #[serde(rename = "__post_init__")]
    PostInit,
    /// `__str__` method.
    #[serde(rename = "__str__")]
    Str,
    /// `save` method.
    Save,
    /// `delete` method.
    Delete,
    /// Public property-like accessor.
    PropertyMethod,
    /// Protected (`_name`) property-like accessor.
    ProtectedPropertyMethod,
    /// Private (`__name`) property-like accessor.
    PrivatePropertyMethod,
    /// Public static method.
    StaticMethod,
    /// Protected static method.
    ProtectedStaticMethod,
    /// Private static method.
    PrivateStaticMethod,
    /// Public class method.
    ClassMethod,
    /// Protected class method.
    ProtectedClassMethod,
    /// Private class method.
    PrivateClassMethod,
    /// Plain public method.
    Method,
    /// Dunder method not in the special-name set.
    MagicMethod,
    /// Method with a single leading underscore.
    ProtectedMethod,
    /// Method with two leading underscores.
    PrivateMethod,
}

/// All category tags, in vocabulary order.
pub const ALL_CATEGORIES: &[CategoryTag] = &[
    CategoryTag::Docstring,
    CategoryTag::Pass,
    CategoryTag::MetaClass,
    CategoryTag::NestedClass,
    CategoryTag::Constant,
    CategoryTag::Field,
    CategoryTag::OuterField,
    CategoryTag::If,
    CategoryTag::Expression,
    CategoryTag::New,
    CategoryTag::Init,
    CategoryTag::PostInit,
    CategoryTag::Str,
    CategoryTag::Save,
    CategoryTag::Delete,
    CategoryTag::PropertyMethod,
    CategoryTag::ProtectedPropertyMethod,
    CategoryTag::PrivatePropertyMethod,
    CategoryTag::StaticMethod,
    CategoryTag::ProtectedStaticMethod,
    CategoryTag::PrivateStaticMethod,
    CategoryTag::ClassMethod,
    CategoryTag::ProtectedClassMethod,
    CategoryTag::PrivateClassMethod,
    CategoryTag::Method,
    CategoryTag::MagicMethod,
    CategoryTag::ProtectedMethod,
    CategoryTag::PrivateMethod,
];

impl CategoryTag {
    /// The string form used in configuration and output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Docstring => "docstring",
            Self::Pass => "pass",
            Self::MetaClass => "meta_class",
            Self::NestedClass => "nested_class",
            Self::Constant => "constant",
            Self::Field => "field",
            Self::OuterField => "outer_field",
            Self::If => "if",
            Self::Expression => "expression",
            Self::New => "__new__",
            Self::Init => "__init__",
            Self::PostInit => "__post_init__",
            Self::Str => "__str__",
            Self::Save => "save",
            Self::Delete => "delete",
            Self::PropertyMethod => "property_method",
            Self::ProtectedPropertyMethod => "protected_property_method",
            Self::PrivatePropertyMethod => "private_property_method",
            Self::StaticMethod => "static_method",
            Self::ProtectedStaticMethod => "protected_static_method",
            Self::PrivateStaticMethod => "private_static_method",
            Self::ClassMethod => "class_method",
            Self::ProtectedClassMethod => "protected_class_method",
            Self::PrivateClassMethod => "private_class_method",
            Self::Method => "method",
            Self::MagicMethod => "magic_method",
            Self::ProtectedMethod => "protected_method",
            Self::PrivateMethod => "private_method",
        }
    }

    /// Parses the string form back into a tag.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|t| t.name() == name)
    }

    /// The general tag a specialized tag falls back to when absent from
    /// a custom order list. `None` for tags with no more general form.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::ProtectedPropertyMethod | Self::PrivatePropertyMethod => {
                Some(Self::PropertyMethod)
            }
            Self::ProtectedStaticMethod | Self::PrivateStaticMethod => Some(Self::StaticMethod),
            Self::ProtectedClassMethod | Self::PrivateClassMethod => Some(Self::ClassMethod),
            Self::PropertyMethod
            | Self::StaticMethod
            | Self::ClassMethod
            | Self::MagicMethod
            | Self::ProtectedMethod
            | Self::PrivateMethod => Some(Self::Method),
            Self::OuterField => Some(Self::Field),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
