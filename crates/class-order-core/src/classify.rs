//! Member classification: maps one class body member to a category tag.

use crate::category::CategoryTag;
use crate::model::{AssignTarget, Member, MemberKind};

/// Decorators marking property-like accessors.
const PROPERTY_DECORATORS: &[&str] = &["property", "cached_property", "setter", "deleter"];

/// Method names classified as their own category.
const SPECIAL_METHOD_NAMES: &[&str] = &[
    "__new__",
    "__init__",
    "__post_init__",
    "__str__",
    "save",
    "delete",
];

/// Default relation-constructor names used for `outer_field` detection.
pub const DEFAULT_RELATION_CONSTRUCTORS: &[&str] = &[
    "ForeignKey",
    "ManyToManyField",
    "OneToOneField",
    "GenericRelation",
];

/// Assigns category tags to class body members.
///
/// Pure function of the member's syntactic shape; the only state is the
/// relation-constructor registry used for `outer_field` detection.
#[derive(Debug, Clone)]
pub struct Classifier {
    relation_constructors: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates a classifier with the default relation-constructor registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            relation_constructors: DEFAULT_RELATION_CONSTRUCTORS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Creates a classifier with a caller-supplied constructor registry.
    #[must_use]
    pub fn with_relation_constructors<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            relation_constructors: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a classifier from the ordering configuration, using the
    /// configured registry when present.
    #[must_use]
    pub fn from_config(config: &crate::config::OrderConfig) -> Self {
        match &config.relation_constructors {
            Some(names) => Self::with_relation_constructors(names.iter().cloned()),
            None => Self::new(),
        }
    }

    /// Classifies a member, or returns `None` for unclassifiable shapes.
    #[must_use]
    pub fn classify(&self, member: &Member) -> Option<CategoryTag> {
        match &member.kind {
            MemberKind::Expression {
                is_string_literal: true,
            } => Some(CategoryTag::Docstring),
            MemberKind::Pass => Some(CategoryTag::Pass),
            MemberKind::ClassDef { name } => {
                if name == "Meta" {
                    Some(CategoryTag::MetaClass)
                } else {
                    Some(CategoryTag::NestedClass)
                }
            }
            MemberKind::If => Some(CategoryTag::If),
            MemberKind::Expression {
                is_string_literal: false,
            } => Some(CategoryTag::Expression),
            MemberKind::Assignment { target, callee } => {
                Some(self.classify_assignment(target, callee.as_deref()))
            }
            MemberKind::FunctionDef { name, decorators } => {
                Some(Self::classify_function(name, decorators))
            }
            MemberKind::Other => None,
        }
    }

    /// Assignment classification.
    ///
    /// The checks run in sequence and the last match wins: a recognized
    /// relation constructor overrides both the subscript and ALL-CAPS
    /// outcomes, so `OWNER = ForeignKey(...)` is an `outer_field`.
    fn classify_assignment(&self, target: &AssignTarget, callee: Option<&str>) -> CategoryTag {
        let mut tag = CategoryTag::Field;
        if matches!(target, AssignTarget::Subscript) {
            tag = CategoryTag::Expression;
        }
        if let AssignTarget::Name(name) = target {
            if is_caps_lock(name) {
                tag = CategoryTag::Constant;
            }
        }
        if let Some(callee) = callee {
            if self
                .relation_constructors
                .iter()
                .any(|ctor| callee.contains(ctor.as_str()))
            {
                tag = CategoryTag::OuterField;
            }
        }
        tag
    }

    fn classify_function(name: &str, decorators: &[String]) -> CategoryTag {
        if let Some(tag) = Self::classify_by_decorator(name, decorators) {
            return tag;
        }
        Self::classify_by_name(name)
    }

    /// Accessor-decorator classification; the first recognized decorator
    /// wins, with the visibility variant taken from the function name.
    fn classify_by_decorator(name: &str, decorators: &[String]) -> Option<CategoryTag> {
        for decorator in decorators {
            let family = if PROPERTY_DECORATORS.contains(&decorator.as_str()) {
                CategoryTag::PropertyMethod
            } else if decorator == "staticmethod" {
                CategoryTag::StaticMethod
            } else if decorator == "classmethod" {
                CategoryTag::ClassMethod
            } else {
                continue;
            };
            return Some(Self::visibility_variant(family, name));
        }
        None
    }

    fn visibility_variant(family: CategoryTag, name: &str) -> CategoryTag {
        if name.starts_with("__") {
            match family {
                CategoryTag::StaticMethod => CategoryTag::PrivateStaticMethod,
                CategoryTag::ClassMethod => CategoryTag::PrivateClassMethod,
                _ => CategoryTag::PrivatePropertyMethod,
            }
        } else if name.starts_with('_') {
            match family {
                CategoryTag::StaticMethod => CategoryTag::ProtectedStaticMethod,
                CategoryTag::ClassMethod => CategoryTag::ProtectedClassMethod,
                _ => CategoryTag::ProtectedPropertyMethod,
            }
        } else {
            family
        }
    }

    fn classify_by_name(name: &str) -> CategoryTag {
        if SPECIAL_METHOD_NAMES.contains(&name) {
            return match name {
                "__new__" => CategoryTag::New,
                "__init__" => CategoryTag::Init,
                "__post_init__" => CategoryTag::PostInit,
                "__str__" => CategoryTag::Str,
                "save" => CategoryTag::Save,
                _ => CategoryTag::Delete,
            };
        }
        if name.starts_with("__") && name.ends_with("__") {
            CategoryTag::MagicMethod
        } else if name.starts_with("__") {
            CategoryTag::PrivateMethod
        } else if name.starts_with('_') {
            CategoryTag::ProtectedMethod
        } else {
            CategoryTag::Method
        }
    }
}

fn is_caps_lock(name: &str) -> bool {
    name.to_uppercase() == name
}
