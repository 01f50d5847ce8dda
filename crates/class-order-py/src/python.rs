//! Python class extractor using Tree-sitter.

use std::path::{Path, PathBuf};

use tree_sitter::{Language, Node, Parser};

use class_order_core::model::{AssignTarget, ClassNode, Member, MemberKind};

/// Result of analyzing a single Python source file.
#[derive(Debug, Clone)]
pub struct ModuleAnalysis {
    /// Path relative to project root.
    pub file_path: PathBuf,
    /// All class declarations found, outer-to-inner, top-to-bottom.
    pub classes: Vec<ClassNode>,
}

/// Extracts class bodies from Python source into the core member model.
pub struct PythonExtractor {
    language: Language,
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonExtractor {
    /// Creates a new Python extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Extracts every class declaration from source code.
    ///
    /// Classes are collected over the whole tree, so nested classes and
    /// classes defined inside functions appear as their own entries, in
    /// pre-order (outer before inner, top to bottom).
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn analyze(&self, file_path: &Path, source: &str) -> ModuleAnalysis {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .expect("failed to set python language");

        let src = source.as_bytes();
        let tree = parser.parse(src, None).expect("failed to parse");

        let mut result = ModuleAnalysis {
            file_path: file_path.to_path_buf(),
            classes: Vec::new(),
        };
        Self::collect_classes(&tree.root_node(), src, &mut result.classes);
        result
    }

    fn collect_classes(node: &Node<'_>, src: &[u8], classes: &mut Vec<ClassNode>) {
        if node.kind() == "class_definition" {
            if let Some(class) = Self::extract_class(node, src) {
                classes.push(class);
            }
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::collect_classes(&child, src, classes);
        }
    }

    fn extract_class(node: &Node<'_>, src: &[u8]) -> Option<ClassNode> {
        let name = Self::text(&node.child_by_field_name("name")?, src).to_owned();
        let body = node.child_by_field_name("body")?;

        let mut members = Vec::new();
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            members.push(Self::extract_member(&child, src));
        }

        Some(ClassNode {
            name,
            line: node.start_position().row + 1,
            column: node.start_position().column + 1,
            members,
        })
    }

    fn extract_member(node: &Node<'_>, src: &[u8]) -> Member {
        let kind = match node.kind() {
            "expression_statement" => Self::expression_kind(node, src),
            "pass_statement" => MemberKind::Pass,
            "if_statement" => MemberKind::If,
            "function_definition" => Self::function_kind(node, src, Vec::new()),
            "class_definition" => Self::class_kind(node, src),
            "decorated_definition" => return Self::extract_decorated(node, src),
            _ => MemberKind::Other,
        };
        Member::new(
            kind,
            node.start_position().row + 1,
            node.start_position().column + 1,
        )
    }

    fn expression_kind(node: &Node<'_>, src: &[u8]) -> MemberKind {
        let Some(payload) = node.named_child(0) else {
            return MemberKind::Other;
        };
        match payload.kind() {
            "string" | "concatenated_string" => MemberKind::Expression {
                is_string_literal: Self::is_plain_string(&payload, src),
            },
            "assignment" => Self::assignment_kind(&payload, src),
            // Augmented assignments have no classification
            "augmented_assignment" => MemberKind::Other,
            _ => MemberKind::Expression {
                is_string_literal: false,
            },
        }
    }

    /// F-strings parse as `string` nodes too; an `f` prefix or
    /// interpolation children mark the statement as a computed
    /// expression rather than a literal.
    fn is_plain_string(node: &Node<'_>, src: &[u8]) -> bool {
        let mut cursor = node.walk();
        if node.kind() == "concatenated_string" {
            return node
                .named_children(&mut cursor)
                .filter(|part| part.kind() == "string")
                .all(|part| Self::is_plain_string(&part, src));
        }
        let prefixed = node
            .child(0)
            .is_some_and(|start| Self::text(&start, src).contains(['f', 'F']));
        !prefixed
            && !node
                .named_children(&mut cursor)
                .any(|child| child.kind() == "interpolation")
    }

    fn assignment_kind(node: &Node<'_>, src: &[u8]) -> MemberKind {
        let target = match node.child_by_field_name("left") {
            Some(left) => Self::assign_target(&left, src),
            None => AssignTarget::Other,
        };

        // Chained assignments nest to the right; chase to the final value
        let mut value = node.child_by_field_name("right");
        while let Some(v) = value {
            if v.kind() == "assignment" {
                value = v.child_by_field_name("right");
            } else {
                break;
            }
        }
        let callee = value
            .filter(|v| v.kind() == "call")
            .and_then(|call| call.child_by_field_name("function"))
            .map(|function| Self::text(&function, src).to_owned());

        MemberKind::Assignment { target, callee }
    }

    fn assign_target(node: &Node<'_>, src: &[u8]) -> AssignTarget {
        match node.kind() {
            "identifier" => AssignTarget::Name(Self::text(node, src).to_owned()),
            "attribute" => match node.child_by_field_name("attribute") {
                Some(attr) => AssignTarget::Attribute(Self::text(&attr, src).to_owned()),
                None => AssignTarget::Other,
            },
            "pattern_list" | "tuple_pattern" => {
                let mut names = Vec::new();
                let mut cursor = node.walk();
                for element in node.named_children(&mut cursor) {
                    if element.kind() == "identifier" {
                        names.push(Self::text(&element, src).to_owned());
                    }
                }
                AssignTarget::Tuple(names)
            }
            "subscript" => AssignTarget::Subscript,
            _ => AssignTarget::Other,
        }
    }

    fn function_kind(node: &Node<'_>, src: &[u8], decorators: Vec<String>) -> MemberKind {
        let name = node
            .child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned())
            .unwrap_or_default();
        MemberKind::FunctionDef { name, decorators }
    }

    fn class_kind(node: &Node<'_>, src: &[u8]) -> MemberKind {
        let name = node
            .child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned())
            .unwrap_or_default();
        MemberKind::ClassDef { name }
    }

    /// Unwraps a decorated definition: decorator names are collected,
    /// and the member position is the inner `def`/`class` line, not the
    /// decorator line.
    fn extract_decorated(node: &Node<'_>, src: &[u8]) -> Member {
        let mut decorators = Vec::new();
        let mut definition = None;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "decorator" => {
                    if let Some(name) = Self::decorator_name(&child, src) {
                        decorators.push(name);
                    }
                }
                "function_definition" | "class_definition" => definition = Some(child),
                _ => {}
            }
        }

        let Some(definition) = definition else {
            return Member::new(
                MemberKind::Other,
                node.start_position().row + 1,
                node.start_position().column + 1,
            );
        };

        let kind = if definition.kind() == "class_definition" {
            Self::class_kind(&definition, src)
        } else {
            Self::function_kind(&definition, src, decorators)
        };
        Member::new(
            kind,
            definition.start_position().row + 1,
            definition.start_position().column + 1,
        )
    }

    /// The recognized name of a decorator: the bare identifier, or the
    /// final path element of an attribute decorator (`@bar.setter`
    /// yields `setter`). Call-shaped decorators are skipped.
    fn decorator_name(node: &Node<'_>, src: &[u8]) -> Option<String> {
        let expression = node.named_child(0)?;
        match expression.kind() {
            "identifier" => Some(Self::text(&expression, src).to_owned()),
            "attribute" => expression
                .child_by_field_name("attribute")
                .map(|attr| Self::text(&attr, src).to_owned()),
            _ => None,
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(src: &str) -> ModuleAnalysis {
        PythonExtractor::new().analyze(Path::new("test.py"), src)
    }

    fn sole_class(src: &str) -> ClassNode {
        let analysis = analyze(src);
        assert_eq!(analysis.classes.len(), 1, "expected exactly one class");
        analysis.classes.into_iter().next().unwrap()
    }

    #[test]
    fn empty_source() {
        assert!(analyze("").classes.is_empty());
    }

    #[test]
    fn extracts_class_name_and_position() {
        let class = sole_class("class User:\n    pass\n");
        assert_eq!(class.name, "User");
        assert_eq!(class.line, 1);
        assert_eq!(class.members, vec![Member::new(MemberKind::Pass, 2, 5)]);
    }

    #[test]
    fn nested_classes_in_preorder() {
        let analysis = analyze(
            "class Outer:\n    class Meta:\n        pass\nclass Last:\n    pass\n",
        );
        let names: Vec<&str> = analysis.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Meta", "Last"]);
    }

    #[test]
    fn nested_class_is_also_a_member() {
        let class = analyze("class Outer:\n    class Meta:\n        pass\n")
            .classes
            .into_iter()
            .next()
            .unwrap();
        assert_eq!(
            class.members[0].kind,
            MemberKind::ClassDef {
                name: "Meta".into()
            }
        );
    }

    #[test]
    fn class_inside_function_is_found() {
        let analysis = analyze("def make():\n    class Inner:\n        pass\n");
        assert_eq!(analysis.classes.len(), 1);
        assert_eq!(analysis.classes[0].name, "Inner");
    }

    #[test]
    fn docstring_is_string_expression() {
        let class = sole_class("class C:\n    \"\"\"doc\"\"\"\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Expression {
                is_string_literal: true
            }
        );
    }

    #[test]
    fn interpolated_string_is_not_a_literal() {
        let class = sole_class("class C:\n    f\"{x}\"\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Expression {
                is_string_literal: false
            }
        );
        // An f prefix marks a computed expression even without
        // interpolations
        let class = sole_class("class C:\n    f\"text\"\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Expression {
                is_string_literal: false
            }
        );
    }

    #[test]
    fn concatenated_fstring_is_not_a_literal() {
        let class = sole_class("class C:\n    \"a\" f\"{x}\"\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Expression {
                is_string_literal: false
            }
        );
        let class = sole_class("class C:\n    \"a\" \"b\"\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Expression {
                is_string_literal: true
            }
        );
    }

    #[test]
    fn call_statement_is_plain_expression() {
        let class = sole_class("class C:\n    print('hi')\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Expression {
                is_string_literal: false
            }
        );
    }

    #[test]
    fn simple_assignment() {
        let class = sole_class("class C:\n    title = 'x'\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Assignment {
                target: AssignTarget::Name("title".into()),
                callee: None,
            }
        );
    }

    #[test]
    fn annotated_assignment_keeps_target() {
        let class = sole_class("class C:\n    count: int = 0\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Assignment {
                target: AssignTarget::Name("count".into()),
                callee: None,
            }
        );
    }

    #[test]
    fn annotation_without_value() {
        let class = sole_class("class C:\n    count: int\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Assignment {
                target: AssignTarget::Name("count".into()),
                callee: None,
            }
        );
    }

    #[test]
    fn call_value_records_callee_text() {
        let class = sole_class("class C:\n    author = models.ForeignKey('User')\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Assignment {
                target: AssignTarget::Name("author".into()),
                callee: Some("models.ForeignKey".into()),
            }
        );
    }

    #[test]
    fn chained_assignment_chases_final_value() {
        let class = sole_class("class C:\n    a = b = fk('User')\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Assignment {
                target: AssignTarget::Name("a".into()),
                callee: Some("fk".into()),
            }
        );
    }

    #[test]
    fn subscript_target() {
        let class = sole_class("class C:\n    registry['k'] = 1\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Assignment {
                target: AssignTarget::Subscript,
                callee: None,
            }
        );
    }

    #[test]
    fn tuple_target_keeps_identifiers_only() {
        let class = sole_class("class C:\n    a, b[0] = 1, 2\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::Assignment {
                target: AssignTarget::Tuple(vec!["a".into()]),
                callee: None,
            }
        );
    }

    #[test]
    fn augmented_assignment_is_other() {
        let class = sole_class("class C:\n    x += 1\n");
        assert_eq!(class.members[0].kind, MemberKind::Other);
    }

    #[test]
    fn function_with_decorators() {
        let class = sole_class(
            "class C:\n    @property\n    def bar(self):\n        return 1\n",
        );
        assert_eq!(
            class.members[0].kind,
            MemberKind::FunctionDef {
                name: "bar".into(),
                decorators: vec!["property".into()],
            }
        );
        // Position is the def line, not the decorator line
        assert_eq!(class.members[0].line, 3);
    }

    #[test]
    fn attribute_decorator_keeps_final_element() {
        let class = sole_class(
            "class C:\n    @bar.setter\n    def bar(self, value):\n        pass\n",
        );
        assert_eq!(
            class.members[0].kind,
            MemberKind::FunctionDef {
                name: "bar".into(),
                decorators: vec!["setter".into()],
            }
        );
    }

    #[test]
    fn call_decorator_is_skipped() {
        let class = sole_class(
            "class C:\n    @lru_cache(maxsize=1)\n    def bar(self):\n        pass\n",
        );
        assert_eq!(
            class.members[0].kind,
            MemberKind::FunctionDef {
                name: "bar".into(),
                decorators: vec![],
            }
        );
    }

    #[test]
    fn async_method_is_a_function() {
        let class = sole_class("class C:\n    async def run(self):\n        pass\n");
        assert_eq!(
            class.members[0].kind,
            MemberKind::FunctionDef {
                name: "run".into(),
                decorators: vec![],
            }
        );
    }

    #[test]
    fn if_statement_and_unknown_statements() {
        let class = sole_class("class C:\n    if DEBUG:\n        x = 1\n    import os\n");
        assert_eq!(class.members[0].kind, MemberKind::If);
        assert_eq!(class.members[1].kind, MemberKind::Other);
    }

    #[test]
    fn comments_are_not_members() {
        let class = sole_class("class C:\n    # note\n    pass\n");
        assert_eq!(class.members.len(), 1);
        assert_eq!(class.members[0].kind, MemberKind::Pass);
    }
}
