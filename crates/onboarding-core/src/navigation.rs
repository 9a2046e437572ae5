// ============================================================================
// Onboarding Core - Navigation Actions
// File: crates/onboarding-core/src/navigation.rs
// Description: Permission filtering, grouping, and primary/secondary split
// ============================================================================
//! Builds a user's navigation from the catalog in three steps:
//!
//! 1. [`filter_visible_actions`] keeps what the user's active roles allow and
//!    flags favorites.
//! 2. [`group_nested`] moves child actions under the parent of their group.
//! 3. [`group_priority`] fills the bottom bar (at most
//!    [`MAX_PRIMARY_ACTIONS`]) and sends the rest to the overflow list.
//!
//! Every step is pure. Ordering is deterministic: groups keep catalog order,
//! then a stable sort on `sequence_number` decides both selection ties and
//! the order of each output list.

use std::collections::{HashMap, HashSet};

use onboarding_shared::constants::MAX_PRIMARY_ACTIONS;
use onboarding_shared::utils::remove_duplicate_strings;
use tracing::{debug, warn};

use crate::domain::{
    GroupedNavigationActions, NavigationAction, NavigationGroup, Permission, Role,
};

/// True if any active role carries the permission's scope.
pub fn has_permission(roles: &[Role], permission: &Permission) -> bool {
    roles.iter().any(|role| role.grants(&permission.scope))
}

/// Scopes granted by the active roles, without repeats.
pub fn user_permissions(roles: &[Role]) -> Vec<String> {
    remove_duplicate_strings(
        roles
            .iter()
            .filter(|role| role.active)
            .flat_map(|role| role.scopes.iter().cloned()),
    )
}

/// Catalog entries the user may see, in catalog order, with `favorite` set.
///
/// Entries are cloned; the catalog itself is never touched.
pub fn filter_visible_actions(
    catalog: &[NavigationAction],
    roles: &[Role],
    favorite_titles: &HashSet<String>,
) -> Vec<NavigationAction> {
    catalog
        .iter()
        .filter(|action| match &action.required_permission {
            Some(permission) => has_permission(roles, permission),
            None => true,
        })
        .map(|action| {
            let mut action = action.clone();
            action.favorite = favorite_titles.contains(&action.title);
            action
        })
        .collect()
}

/// Parent actions keyed by group, in the order the parents were seen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedActions {
    actions: Vec<NavigationAction>,
    index: HashMap<NavigationGroup, usize>,
}

impl GroupedActions {
    pub fn get(&self, group: &NavigationGroup) -> Option<&NavigationAction> {
        self.index.get(group).map(|&i| &self.actions[i])
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavigationAction> {
        self.actions.iter()
    }

    pub fn into_vec(self) -> Vec<NavigationAction> {
        self.actions
    }

    fn insert_parent(&mut self, parent: NavigationAction) {
        if self.index.contains_key(&parent.group) {
            warn!(
                "Ignoring second parent action {} for group {}",
                parent.title, parent.group
            );
            return;
        }
        self.index.insert(parent.group.clone(), self.actions.len());
        self.actions.push(parent);
    }

    fn attach_child(&mut self, child: NavigationAction) {
        match self.index.get(&child.group) {
            Some(&i) => self.actions[i].nested.push(child),
            // Happens when the user may see a child but not its parent.
            None => debug!(
                "Dropping child action {} without a visible parent in group {}",
                child.title, child.group
            ),
        }
    }
}

/// Nest every child action under the parent of its group.
///
/// Parents are collected first, then children are appended in encounter
/// order. Children whose group has no parent are dropped.
pub fn group_nested<I>(actions: I) -> GroupedActions
where
    I: IntoIterator<Item = NavigationAction>,
{
    let (children, parents): (Vec<_>, Vec<_>) =
        actions.into_iter().partition(|action| action.has_parent);

    let mut grouped = GroupedActions::default();
    for parent in parents {
        grouped.insert_parent(parent);
    }
    for child in children {
        grouped.attach_child(child);
    }
    grouped
}

/// Split grouped actions into primary and secondary lists.
pub fn group_priority(grouped: GroupedActions) -> (Vec<NavigationAction>, Vec<NavigationAction>) {
    group_priority_with_limit(grouped, MAX_PRIMARY_ACTIONS)
}

/// [`group_priority`] with a smaller bottom bar. `limit` is capped at
/// [`MAX_PRIMARY_ACTIONS`].
///
/// Only leaf actions (no nested children) can be primary. When more leaves
/// exist than fit, high-priority leaves are taken first and the remaining
/// slots go to the other leaves, lowest `sequence_number` first.
pub fn group_priority_with_limit(
    grouped: GroupedActions,
    limit: usize,
) -> (Vec<NavigationAction>, Vec<NavigationAction>) {
    let limit = limit.min(MAX_PRIMARY_ACTIONS);

    let mut actions = grouped.into_vec();
    actions.sort_by_key(|action| action.sequence_number);

    let leaves = actions.iter().filter(|action| action.is_leaf()).count();
    let mut selected = vec![false; actions.len()];

    if leaves <= limit {
        for (slot, action) in selected.iter_mut().zip(&actions) {
            *slot = action.is_leaf();
        }
    } else {
        let mut taken = 0;
        let sweeps: [fn(&NavigationAction) -> bool; 2] =
            [|action: &NavigationAction| action.is_high_priority, |_| true];

        for wanted in sweeps {
            for (slot, action) in selected.iter_mut().zip(&actions) {
                if taken == limit {
                    break;
                }
                if !*slot && action.is_leaf() && wanted(action) {
                    *slot = true;
                    taken += 1;
                }
            }
        }
    }

    let (primary, secondary): (Vec<_>, Vec<_>) = actions
        .into_iter()
        .zip(selected)
        .partition(|(_, is_primary)| *is_primary);

    (
        primary.into_iter().map(|(action, _)| action).collect(),
        secondary.into_iter().map(|(action, _)| action).collect(),
    )
}

/// Run the whole pipeline for one user.
pub fn user_navigation_actions(
    catalog: &[NavigationAction],
    roles: &[Role],
    favorite_titles: &HashSet<String>,
) -> GroupedNavigationActions {
    user_navigation_actions_with_limit(catalog, roles, favorite_titles, MAX_PRIMARY_ACTIONS)
}

pub fn user_navigation_actions_with_limit(
    catalog: &[NavigationAction],
    roles: &[Role],
    favorite_titles: &HashSet<String>,
    max_primary_actions: usize,
) -> GroupedNavigationActions {
    let visible = filter_visible_actions(catalog, roles, favorite_titles);
    let grouped = group_nested(visible);
    let (primary, secondary) = group_priority_with_limit(grouped, max_primary_actions);

    GroupedNavigationActions { primary, secondary }
}
