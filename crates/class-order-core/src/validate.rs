//! Ordering validation over classified, ranked class members.

use std::path::Path;

use crate::category::CategoryTag;
use crate::classify::Classifier;
use crate::model::{ClassNode, Member};
use crate::naming::display_name;
use crate::ranks::RankTable;
use crate::types::{Location, Severity, Violation};

/// Rule code for ordering violations.
pub const ORDER_CODE: &str = "CCE001";

/// Rule name for ordering violations.
pub const ORDER_RULE: &str = "attributes-order";

/// Rule code for stray class-level statements.
pub const EXPRESSION_CODE: &str = "CCE002";

/// Rule name for stray class-level statements.
pub const EXPRESSION_RULE: &str = "class-level-expression";

/// Detects rank inversions and stray statements in class bodies.
///
/// Holds only borrowed, read-only state; one validator is shared across
/// every class of a run.
pub struct OrderingValidator<'a> {
    classifier: &'a Classifier,
    table: &'a RankTable,
}

impl<'a> OrderingValidator<'a> {
    /// Creates a validator over the given classifier and rank table.
    #[must_use]
    pub fn new(classifier: &'a Classifier, table: &'a RankTable) -> Self {
        Self { classifier, table }
    }

    /// Validates every class of a unit, concatenating per-class
    /// violations in discovery order.
    #[must_use]
    pub fn validate_unit(&self, file: &Path, classes: &[ClassNode]) -> Vec<Violation> {
        classes
            .iter()
            .flat_map(|class| self.validate_class(file, class))
            .collect()
    }

    /// Validates one class body.
    ///
    /// CCE001 compares each ranked member against the next ranked member
    /// in source order; a run of N out-of-order members yields up to N-1
    /// diagnostics, one per violated adjacency. CCE002 fires for every
    /// `expression`/`if` member regardless of rank or neighbors.
    #[must_use]
    pub fn validate_class(&self, file: &Path, class: &ClassNode) -> Vec<Violation> {
        let classified: Vec<(&Member, CategoryTag, Option<usize>)> = class
            .members
            .iter()
            .filter_map(|member| {
                self.classifier
                    .classify(member)
                    .map(|tag| (member, tag, self.table.rank(tag)))
            })
            .collect();

        let mut violations = Vec::new();
        for (index, (member, tag, rank)) in classified.iter().enumerate() {
            if let Some(rank) = rank {
                let next_ranked = classified[index + 1..]
                    .iter()
                    .find_map(|(m, t, r)| r.map(|r| (*m, *t, r)));
                if let Some((next_member, next_tag, next_rank)) = next_ranked {
                    if *rank > next_rank {
                        violations.push(Self::order_violation(
                            file,
                            class,
                            member,
                            *tag,
                            next_member,
                            next_tag,
                        ));
                    }
                }
            }
            if matches!(tag, CategoryTag::Expression | CategoryTag::If) {
                violations.push(Self::expression_violation(file, class, member));
            }
        }
        violations
    }

    fn order_violation(
        file: &Path,
        class: &ClassNode,
        member: &Member,
        tag: CategoryTag,
        next_member: &Member,
        next_tag: CategoryTag,
    ) -> Violation {
        Violation::new(
            ORDER_CODE,
            ORDER_RULE,
            Severity::Error,
            Location::new(file.to_path_buf(), member.line, member.column),
            format!(
                "{class_name}.{current} should be after {class_name}.{next}",
                class_name = class.name,
                current = display_name(member, tag),
                next = display_name(next_member, next_tag),
            ),
        )
    }

    fn expression_violation(file: &Path, class: &ClassNode, member: &Member) -> Violation {
        Violation::new(
            EXPRESSION_CODE,
            EXPRESSION_RULE,
            Severity::Error,
            Location::new(file.to_path_buf(), member.line, member.column),
            format!(
                "Class level expression detected in class {}, line {}",
                class.name, member.line
            ),
        )
    }
}
