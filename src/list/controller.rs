use std::{collections::HashSet, sync::Arc};

use anyhow::{anyhow, Result};
use futures::future::join_all;
use log::{error, info};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    api::DestinationApi,
    countries::CountryDirectory,
    events::EventChannel,
    models::DestinationView,
};

use super::ListState;

/// What the webview renders: rows in display order with flag paths, the
/// checked ids, and the latest failure if any.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    pub destinations: Vec<DestinationView>,
    pub selected: Vec<i64>,
    pub last_error: Option<String>,
}

#[derive(Clone)]
pub struct ListController {
    state: Arc<Mutex<ListState>>,
    api: Arc<dyn DestinationApi>,
    events: EventChannel,
}

impl ListController {
    pub fn new(api: Arc<dyn DestinationApi>, events: EventChannel) -> Self {
        Self {
            state: Arc::new(Mutex::new(ListState::new())),
            api,
            events,
        }
    }

    pub async fn get_snapshot(&self) -> ListSnapshot {
        let state = self.state.lock().await;
        snapshot_of(&state)
    }

    /// Fetches the whole collection and replaces the cache. On failure the
    /// previous cache stays in place (empty if the first load fails).
    pub async fn load(&self) -> Result<()> {
        match self.api.fetch_destinations().await {
            Ok(destinations) => {
                info!("Loaded {} destinations", destinations.len());
                let mut state = self.state.lock().await;
                state.replace(destinations);
                state.last_error = None;
                self.emit_state(&state);
                Ok(())
            }
            Err(err) => {
                error!("Failed to load destinations: {err}");
                let mut state = self.state.lock().await;
                state.last_error = Some(err.to_string());
                self.emit_state(&state);
                Err(err.into())
            }
        }
    }

    pub async fn toggle_select(&self, id: i64) -> ListSnapshot {
        let mut state = self.state.lock().await;
        state.toggle_select(id);
        let snapshot = snapshot_of(&state);
        drop(state);
        self.events.emit("list-state-changed", snapshot.clone());
        snapshot
    }

    /// Deletes every selected destination, one request per id, all in
    /// flight at once. All-or-nothing: the batch settles fully before any
    /// shared state is touched, and a single failure leaves the cache and
    /// the selection exactly as they were.
    pub async fn delete_selected(&self) -> Result<usize> {
        let ids: Vec<i64> = {
            let state = self.state.lock().await;
            state.selected.iter().copied().collect()
        };

        if ids.is_empty() {
            return Ok(0);
        }

        let results = join_all(ids.iter().map(|&id| self.api.delete_destination(id))).await;

        let mut failed = 0usize;
        for (id, result) in ids.iter().zip(&results) {
            if let Err(err) = result {
                error!("Failed to delete destination {id}: {err}");
                failed += 1;
            }
        }

        let mut state = self.state.lock().await;
        if failed == 0 {
            state.prune(&ids.iter().copied().collect::<HashSet<i64>>());
            state.last_error = None;
            let snapshot = snapshot_of(&state);
            drop(state);
            self.emit_state_snapshot(snapshot);
            Ok(ids.len())
        } else {
            let summary = format!("failed to delete {failed} of {} destinations", ids.len());
            state.last_error = Some(summary.clone());
            let snapshot = snapshot_of(&state);
            drop(state);
            self.emit_state_snapshot(snapshot);
            Err(anyhow!(summary))
        }
    }

    fn emit_state(&self, state: &ListState) {
        self.emit_state_snapshot(snapshot_of(state));
    }

    fn emit_state_snapshot(&self, snapshot: ListSnapshot) {
        self.events.emit("list-state-changed", snapshot);
    }
}

fn snapshot_of(state: &ListState) -> ListSnapshot {
    let destinations = state
        .sorted_view()
        .into_iter()
        .map(|d| DestinationView {
            flag: CountryDirectory::flag_path(&d.iso),
            id: d.id,
            country: d.country,
            region: d.region,
            city: d.city,
            iso: d.iso,
            text: d.text,
        })
        .collect();

    let mut selected: Vec<i64> = state.selected.iter().copied().collect();
    selected.sort_unstable();

    ListSnapshot {
        destinations,
        selected,
        last_error: state.last_error.clone(),
    }
}
