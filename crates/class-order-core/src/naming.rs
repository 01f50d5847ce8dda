//! Human-readable member labels for diagnostic messages.

use crate::category::CategoryTag;
use crate::model::{AssignTarget, Member, MemberKind};

/// Placeholder for assignments with no printable target.
const ASSIGNMENT_PLACEHOLDER: &str = "<class_level_assignment>";

/// Placeholder for bare expression statements.
const EXPRESSION_PLACEHOLDER: &str = "<class_level_expression>";

/// Produces the label used for a member inside diagnostic messages.
#[must_use]
pub fn display_name(member: &Member, tag: CategoryTag) -> String {
    match tag {
        CategoryTag::Docstring => "docstring".to_owned(),
        CategoryTag::MetaClass => "Meta".to_owned(),
        CategoryTag::Expression => EXPRESSION_PLACEHOLDER.to_owned(),
        CategoryTag::If => "if ...".to_owned(),
        CategoryTag::Pass => "pass".to_owned(),
        CategoryTag::Constant | CategoryTag::Field | CategoryTag::OuterField => {
            assignment_name(member)
        }
        _ => declared_name(member),
    }
}

fn assignment_name(member: &Member) -> String {
    let MemberKind::Assignment { target, .. } = &member.kind else {
        return ASSIGNMENT_PLACEHOLDER.to_owned();
    };
    match target {
        AssignTarget::Name(name) | AssignTarget::Attribute(name) => name.clone(),
        // Non-name tuple elements were already dropped by the frontend,
        // so they are silently omitted from the joined label.
        AssignTarget::Tuple(names) => names.join(", "),
        AssignTarget::Subscript | AssignTarget::Other => ASSIGNMENT_PLACEHOLDER.to_owned(),
    }
}

/// Declared name for methods (any category) and nested classes.
fn declared_name(member: &Member) -> String {
    match &member.kind {
        MemberKind::FunctionDef { name, .. } | MemberKind::ClassDef { name } => name.clone(),
        _ => ASSIGNMENT_PLACEHOLDER.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(kind: MemberKind) -> Member {
        Member::new(kind, 1, 1)
    }

    #[test]
    fn docstring_and_meta_are_literals() {
        let doc = member(MemberKind::Expression {
            is_string_literal: true,
        });
        assert_eq!(display_name(&doc, CategoryTag::Docstring), "docstring");
        let meta = member(MemberKind::ClassDef {
            name: "Meta".into(),
        });
        assert_eq!(display_name(&meta, CategoryTag::MetaClass), "Meta");
    }

    #[test]
    fn constant_uses_target_identifier() {
        let m = member(MemberKind::Assignment {
            target: AssignTarget::Name("MAX_SIZE".into()),
            callee: None,
        });
        assert_eq!(display_name(&m, CategoryTag::Constant), "MAX_SIZE");
    }

    #[test]
    fn attribute_target_uses_final_attribute() {
        let m = member(MemberKind::Assignment {
            target: AssignTarget::Attribute("objects".into()),
            callee: None,
        });
        assert_eq!(display_name(&m, CategoryTag::Field), "objects");
    }

    #[test]
    fn tuple_target_joins_names() {
        let m = member(MemberKind::Assignment {
            target: AssignTarget::Tuple(vec!["a".into(), "b".into()]),
            callee: None,
        });
        assert_eq!(display_name(&m, CategoryTag::Field), "a, b");
    }

    #[test]
    fn opaque_target_uses_placeholder() {
        let m = member(MemberKind::Assignment {
            target: AssignTarget::Other,
            callee: None,
        });
        assert_eq!(
            display_name(&m, CategoryTag::Field),
            "<class_level_assignment>"
        );
    }

    #[test]
    fn methods_and_nested_classes_use_declared_name() {
        let f = member(MemberKind::FunctionDef {
            name: "__init__".into(),
            decorators: vec![],
        });
        assert_eq!(display_name(&f, CategoryTag::Init), "__init__");
        let c = member(MemberKind::ClassDef {
            name: "Config".into(),
        });
        assert_eq!(display_name(&c, CategoryTag::NestedClass), "Config");
    }

    #[test]
    fn expression_and_if_placeholders() {
        let e = member(MemberKind::Expression {
            is_string_literal: false,
        });
        assert_eq!(
            display_name(&e, CategoryTag::Expression),
            "<class_level_expression>"
        );
        let i = member(MemberKind::If);
        assert_eq!(display_name(&i, CategoryTag::If), "if ...");
    }
}
