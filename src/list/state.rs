use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::Destination;

/// Cache of the remote collection plus the ids currently checked for
/// deletion. Owned exclusively by the list controller.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub destinations: Vec<Destination>,
    pub selected: HashSet<i64>,
    pub last_error: Option<String>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached collection wholesale. Selected ids that no
    /// longer resolve are dropped, so a reload cannot leave phantom
    /// selections behind.
    pub fn replace(&mut self, destinations: Vec<Destination>) {
        self.destinations = destinations;
        let ids: HashSet<i64> = self.destinations.iter().map(|d| d.id).collect();
        self.selected.retain(|id| ids.contains(id));
    }

    /// Flips membership of `id`. The id does not have to exist in the
    /// cache. Returns whether the id is selected afterwards.
    pub fn toggle_select(&mut self, id: i64) -> bool {
        if self.selected.insert(id) {
            true
        } else {
            self.selected.remove(&id);
            false
        }
    }

    /// Display order: ascending by country. Copies; the cache itself is
    /// never reordered. The sort is stable, so equal keys keep fetch order.
    pub fn sorted_view(&self) -> Vec<Destination> {
        let mut view = self.destinations.clone();
        view.sort_by(|a, b| compare_countries(&a.country, &b.country));
        view
    }

    /// Removes the given ids from the cache and clears the selection set
    /// unconditionally. Called only once a whole delete batch succeeded.
    pub fn prune(&mut self, ids: &HashSet<i64>) {
        self.destinations.retain(|d| !ids.contains(&d.id));
        self.selected.clear();
    }
}

/// Case-insensitive ordering so "chile" collates next to "Chile". A
/// lowercase fold stands in for full locale collation.
pub fn compare_countries(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
