//! Rank tables: category tag to ordering weight.

use std::collections::HashMap;

use tracing::debug;

use crate::category::{CategoryTag, ALL_CATEGORIES};
use crate::config::OrderConfig;

/// Non-fatal signal raised while building a rank table.
///
/// Table construction never fails; degraded input degrades to fewer
/// ranked categories and one of these warnings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildWarning {
    /// Both strict mode and a custom order were configured; the custom
    /// order wins.
    #[error("custom_order is set; strict_mode is ignored")]
    StrictModeIgnored,
    /// A custom order entry does not name a known category.
    #[error("unknown category in custom_order: {0}")]
    UnknownCategory(String),
}

/// Mapping from category tag to a non-negative ordering weight.
///
/// Equal weights mean no ordering constraint between those categories.
/// Tags absent from the map are excluded from ordering checks. For
/// custom tables, hierarchy fallback is resolved once at build time, so
/// [`RankTable::rank`] is a plain lookup.
#[derive(Debug, Clone)]
pub struct RankTable {
    ranks: HashMap<CategoryTag, usize>,
}

impl RankTable {
    /// Builds the table for the given configuration.
    ///
    /// Returns the table together with any non-fatal warnings; callers
    /// decide how to surface them (the CLI logs each once per run).
    #[must_use]
    pub fn build(config: &OrderConfig) -> (Self, Vec<BuildWarning>) {
        let mut warnings = Vec::new();
        let mut table = match &config.custom_order {
            Some(order) => {
                if config.strict_mode {
                    warnings.push(BuildWarning::StrictModeIgnored);
                }
                Self::custom(order, &mut warnings)
            }
            None if config.strict_mode => Self::strict(),
            None => Self::relaxed(),
        };
        if config.ignore_docstring {
            table.ranks.remove(&CategoryTag::Docstring);
        }
        (table, warnings)
    }

    /// The default built-in table: protected/private accessor variants
    /// share the rank of their public counterpart.
    #[must_use]
    pub fn relaxed() -> Self {
        use CategoryTag::{
            ClassMethod, MagicMethod, Method, PrivateClassMethod, PrivateMethod,
            PrivatePropertyMethod, PrivateStaticMethod, PropertyMethod, ProtectedClassMethod,
            ProtectedMethod, ProtectedPropertyMethod, ProtectedStaticMethod, StaticMethod,
        };
        let mut ranks = Self::spine();
        ranks.extend([
            (PropertyMethod, 15),
            (ProtectedPropertyMethod, 15),
            (PrivatePropertyMethod, 15),
            (StaticMethod, 16),
            (ProtectedStaticMethod, 16),
            (PrivateStaticMethod, 16),
            (ClassMethod, 17),
            (ProtectedClassMethod, 17),
            (PrivateClassMethod, 17),
            (Method, 18),
            (MagicMethod, 19),
            (ProtectedMethod, 20),
            (PrivateMethod, 20),
        ]);
        Self { ranks }
    }

    /// The strict built-in table: every protected/private variant ranks
    /// strictly after its public/protected counterpart.
    #[must_use]
    pub fn strict() -> Self {
        use CategoryTag::{
            ClassMethod, MagicMethod, Method, PrivateClassMethod, PrivateMethod,
            PrivatePropertyMethod, PrivateStaticMethod, PropertyMethod, ProtectedClassMethod,
            ProtectedMethod, ProtectedPropertyMethod, ProtectedStaticMethod, StaticMethod,
        };
        let mut ranks = Self::spine();
        ranks.extend([
            (PropertyMethod, 15),
            (ProtectedPropertyMethod, 16),
            (PrivatePropertyMethod, 17),
            (StaticMethod, 18),
            (ProtectedStaticMethod, 19),
            (PrivateStaticMethod, 20),
            (ClassMethod, 21),
            (ProtectedClassMethod, 22),
            (PrivateClassMethod, 23),
            (Method, 24),
            (MagicMethod, 25),
            (ProtectedMethod, 26),
            (PrivateMethod, 27),
        ]);
        Self { ranks }
    }

    /// Builds a table from an explicit ordered list of category names.
    ///
    /// Rank is the list index; the last occurrence wins on duplicate
    /// entries. Unlisted tags resolve through the category hierarchy,
    /// transitively; tags still unresolved stay unranked. Unknown names
    /// are skipped with a warning.
    fn custom(order: &[String], warnings: &mut Vec<BuildWarning>) -> Self {
        let mut ranks = HashMap::new();
        for (index, name) in order.iter().enumerate() {
            match CategoryTag::from_name(name) {
                Some(tag) => {
                    ranks.insert(tag, index);
                }
                None => {
                    debug!("skipping unknown category {name:?} in custom order");
                    warnings.push(BuildWarning::UnknownCategory(name.clone()));
                }
            }
        }

        let mut resolved = ranks.clone();
        for tag in ALL_CATEGORIES {
            if resolved.contains_key(tag) {
                continue;
            }
            let mut ancestor = tag.parent();
            while let Some(general) = ancestor {
                if let Some(&rank) = ranks.get(&general) {
                    resolved.insert(*tag, rank);
                    break;
                }
                ancestor = general.parent();
            }
        }
        Self { ranks: resolved }
    }

    /// Shared low end of both built-in tables.
    fn spine() -> HashMap<CategoryTag, usize> {
        use CategoryTag::{
            Constant, Delete, Docstring, Expression, Field, If, Init, MetaClass, NestedClass, New,
            OuterField, Pass, PostInit, Save, Str,
        };
        HashMap::from([
            (Docstring, 0),
            (Pass, 1),
            (MetaClass, 2),
            (NestedClass, 3),
            (Constant, 4),
            (OuterField, 5),
            (Field, 6),
            (If, 7),
            (Expression, 8),
            (New, 9),
            (Init, 10),
            (PostInit, 11),
            (Str, 12),
            (Save, 13),
            (Delete, 14),
        ])
    }

    /// Looks up the rank for a tag, or `None` when unranked.
    #[must_use]
    pub fn rank(&self, tag: CategoryTag) -> Option<usize> {
        self.ranks.get(&tag).copied()
    }

    /// All ranked categories in vocabulary order with their weights.
    #[must_use]
    pub fn entries(&self) -> Vec<(CategoryTag, usize)> {
        let mut entries: Vec<(CategoryTag, usize)> = ALL_CATEGORIES
            .iter()
            .filter_map(|tag| self.rank(*tag).map(|rank| (*tag, rank)))
            .collect();
        entries.sort_by_key(|&(_, rank)| rank);
        entries
    }
}
