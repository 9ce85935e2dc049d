//! Favorites: the set of dish ids liked on this device.

use std::collections::BTreeSet;

use ethiopia_core::DishId;

/// Set of favorite dish ids.
///
/// Ids are not checked against the catalog; an unknown id is kept but never
/// listed, since listings walk the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<DishId>,
}

impl Favorites {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &DishId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Whether `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of favorites, including ids missing from the catalog.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in sorted order (the persisted order).
    pub fn iter(&self) -> impl Iterator<Item = &DishId> {
        self.ids.iter()
    }
}

impl FromIterator<DishId> for Favorites {
    fn from_iter<I: IntoIterator<Item = DishId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_kitfo_twice() {
        let mut favorites = Favorites::new();
        let kitfo = DishId::from("kitfo");

        assert!(favorites.toggle(&kitfo));
        assert!(favorites.contains("kitfo"));
        assert_eq!(favorites.count(), 1);

        assert!(!favorites.toggle(&kitfo));
        assert!(!favorites.contains("kitfo"));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut favorites: Favorites = [DishId::from("tibs")].into_iter().collect();
        let before = favorites.clone();
        for id in ["tibs", "kikil", "ghost-dish"] {
            let id = DishId::from(id);
            favorites.toggle(&id);
            favorites.toggle(&id);
            assert_eq!(favorites, before);
        }
    }

    #[test]
    fn test_duplicates_collapse() {
        let favorites: Favorites = ["tibs", "tibs", "kitfo"]
            .into_iter()
            .map(DishId::from)
            .collect();
        assert_eq!(favorites.count(), 2);
        let ids: Vec<&str> = favorites.iter().map(DishId::as_str).collect();
        assert_eq!(ids, ["kitfo", "tibs"]);
    }
}
