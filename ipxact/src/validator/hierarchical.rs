//! Name uniqueness within sibling collections

use std::{cell::RefCell, collections::HashMap};

use itertools::Itertools;

use crate::model::{EntityId, Named};

/// Tracks which children of the validated element are valid relative to their siblings
///
/// Composite validators embed one of these to check that child collections are name-unique. The
/// per-child result stays available through [`HierarchicalValidator::is_child_valid`] after the
/// check, so that a caller can tell exactly which siblings collide.
#[derive(Debug, Default)]
pub struct HierarchicalValidator {
    child_validities: RefCell<HashMap<EntityId, bool>>,
}

impl HierarchicalValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no two `children` share a name
    ///
    /// Names are compared trimmed and case-sensitively. Every child whose name occurs more than
    /// once is recorded as invalid, including the first occurrence. All other children are
    /// recorded as valid. Results of earlier checks are forgotten.
    pub fn children_have_unique_names<T: Named>(&self, children: &[T]) -> bool {
        self.clear();
        self.record_unique_names(children)
    }

    /// Like [`HierarchicalValidator::children_have_unique_names`], but keeps the results of
    /// earlier checks. Used to record several child collections of one element.
    pub fn record_unique_names<T: Named>(&self, children: &[T]) -> bool {
        let buckets = children
            .iter()
            .into_group_map_by(|child| child.name().trim().to_owned());

        let mut validities = self.child_validities.borrow_mut();
        let mut all_unique = true;
        for siblings in buckets.values() {
            let unique = siblings.len() == 1;
            all_unique &= unique;
            for child in siblings {
                validities.insert(child.id(), unique);
            }
        }
        all_unique
    }

    /// Returns the validity recorded for `id` by the last uniqueness check. Children that were
    /// never checked are valid.
    pub fn is_child_valid(&self, id: EntityId) -> bool {
        self.child_validities
            .borrow()
            .get(&id)
            .copied()
            .unwrap_or(true)
    }

    /// Forget all recorded validities
    pub fn clear(&self) {
        self.child_validities.borrow_mut().clear();
    }
}

/// Names occurring more than once among `children`, each reported once in order of first
/// appearance
pub fn duplicate_names<T: Named>(children: &[T]) -> Vec<&str> {
    duplicates_by(children, |child| child.name())
}

/// Keys occurring more than once, in order of first appearance. Keys are compared trimmed.
pub(crate) fn duplicates_by<'a, T>(items: &'a [T], key: impl Fn(&'a T) -> &'a str) -> Vec<&'a str> {
    let counts = items.iter().map(|item| key(item).trim()).counts();
    items
        .iter()
        .map(|item| key(item).trim())
        .filter(|name| counts.get(name).is_some_and(|&count| count > 1))
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NameGroup;

    #[test]
    fn duplicates_are_all_invalid() {
        let children = vec![NameGroup::new("A"), NameGroup::new("B"), NameGroup::new("A")];
        let validator = HierarchicalValidator::new();

        assert!(!validator.children_have_unique_names(&children));
        assert!(!validator.is_child_valid(children[0].id()));
        assert!(validator.is_child_valid(children[1].id()));
        assert!(!validator.is_child_valid(children[2].id()));
        assert_eq!(duplicate_names(&children), vec!["A"]);
    }

    #[test]
    fn names_are_compared_trimmed_and_case_sensitive() {
        let children = vec![NameGroup::new("a"), NameGroup::new("A"), NameGroup::new(" a ")];
        let validator = HierarchicalValidator::new();

        assert!(!validator.children_have_unique_names(&children));
        assert!(validator.is_child_valid(children[1].id()));
        assert!(!validator.is_child_valid(children[2].id()));
    }

    #[test]
    fn fixing_a_duplicate_updates_validity() {
        let mut children = vec![NameGroup::new("A"), NameGroup::new("A")];
        let validator = HierarchicalValidator::new();
        assert!(!validator.children_have_unique_names(&children));

        children[1].name = "B".to_owned();
        assert!(validator.children_have_unique_names(&children));
        assert!(validator.is_child_valid(children[0].id()));
        assert!(validator.is_child_valid(children[1].id()));
        assert!(duplicate_names(&children).is_empty());
    }

    #[test]
    fn removed_children_are_forgotten() {
        let mut children = vec![NameGroup::new("A"), NameGroup::new("A")];
        let validator = HierarchicalValidator::new();
        assert!(!validator.children_have_unique_names(&children));

        let removed = children.pop().map(|child| child.id());
        assert!(validator.children_have_unique_names(&children));
        assert!(validator.is_child_valid(children[0].id()));
        assert!(removed.is_some_and(|id| validator.is_child_valid(id)));
    }

    #[test]
    fn recorded_collections_accumulate() {
        let parameters = vec![NameGroup::new("p"), NameGroup::new("p")];
        let regions = vec![NameGroup::new("r")];
        let validator = HierarchicalValidator::new();

        assert!(!validator.record_unique_names(&parameters));
        assert!(validator.record_unique_names(&regions));
        assert!(!validator.is_child_valid(parameters[1].id()));
        assert!(validator.is_child_valid(regions[0].id()));
    }
}
