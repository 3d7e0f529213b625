use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::models::{DeleteStatus, DownloadStatus, SheetUiState};
use crate::state::storage::StorageBackend;
use crate::utils::constants::STORAGE_KEY_SHEET_STATES;

pub type SheetStateMap = HashMap<String, SheetUiState>;

/// Owns the persisted per-sheet button states. Handed to components through
/// context so nothing reaches for localStorage directly.
#[derive(Clone)]
pub struct SheetStateStore {
    backend: Rc<dyn StorageBackend>,
}

impl PartialEq for SheetStateStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl SheetStateStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(crate::state::storage::BrowserStorage))
    }

    /// Whatever is persisted, or an empty map. Corrupt entries are dropped
    /// rather than surfaced; the next save overwrites them.
    pub fn load(&self) -> SheetStateMap {
        let Some(raw) = self.backend.get(STORAGE_KEY_SHEET_STATES) else {
            return SheetStateMap::new();
        };
        // Older releases sometimes stored the literal string "undefined"
        if raw == "undefined" {
            return SheetStateMap::new();
        }
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("⚠️ Discarding unreadable sheet states: {}", e);
                SheetStateMap::new()
            }
        }
    }

    /// Best-effort write-through; a failed write only costs cosmetic state.
    pub fn save(&self, map: &SheetStateMap) {
        match serde_json::to_string(map) {
            Ok(json) => {
                if let Err(e) = self.backend.set(STORAGE_KEY_SHEET_STATES, &json) {
                    log::warn!("⚠️ Could not persist sheet states: {}", e);
                }
            }
            Err(e) => log::warn!("⚠️ Could not serialize sheet states: {}", e),
        }
    }
}

/// Reconcile against the authoritative list: keep only entries whose id the
/// server still reports. Runs after every successful fetch.
pub fn prune_to_ids(map: &SheetStateMap, known_ids: &HashSet<String>) -> SheetStateMap {
    map.iter()
        .filter(|(id, _)| known_ids.contains(*id))
        .map(|(id, state)| (id.clone(), *state))
        .collect()
}

/// Copy of `map` with the download status of `id` replaced (entry created
/// when absent).
pub fn with_download_status(
    map: &SheetStateMap,
    id: &str,
    status: DownloadStatus,
) -> SheetStateMap {
    let mut next = map.clone();
    next.entry(id.to_string()).or_default().download_status = status;
    next
}

/// Copy of `map` with the delete status of `id` replaced.
pub fn with_delete_status(
    map: &SheetStateMap,
    id: &str,
    status: DeleteStatus,
) -> SheetStateMap {
    let mut next = map.clone();
    next.entry(id.to_string()).or_default().delete_status = status;
    next
}

/// Copy of `map` without `id`, for a confirmed delete.
pub fn without_sheet(map: &SheetStateMap, id: &str) -> SheetStateMap {
    let mut next = map.clone();
    next.remove(id);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeleteStatus, DownloadStatus};
    use crate::state::storage::memory::MemoryStorage;

    fn store_with(raw: Option<&str>) -> SheetStateStore {
        match raw {
            Some(value) => SheetStateStore::new(Rc::new(MemoryStorage::with_entry(
                STORAGE_KEY_SHEET_STATES,
                value,
            ))),
            None => SheetStateStore::new(Rc::new(MemoryStorage::default())),
        }
    }

    fn ids(list: &[&str]) -> HashSet<String> {
        list.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn missing_entry_loads_as_empty() {
        assert!(store_with(None).load().is_empty());
    }

    #[test]
    fn corrupt_json_loads_as_empty() {
        assert!(store_with(Some("{not json")).load().is_empty());
    }

    #[test]
    fn literal_undefined_loads_as_empty() {
        assert!(store_with(Some("undefined")).load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store_with(None);
        let map = with_download_status(&SheetStateMap::new(), "a", DownloadStatus::Downloaded);
        store.save(&map);
        assert_eq!(store.load(), map);
    }

    #[test]
    fn prune_drops_ids_the_server_no_longer_reports() {
        let mut map = SheetStateMap::new();
        map.insert("kept".to_string(), SheetUiState::default());
        map.insert("stale".to_string(), SheetUiState::default());

        let cleaned = prune_to_ids(&map, &ids(&["kept", "brand-new"]));
        assert_eq!(cleaned.len(), 1);
        assert!(cleaned.contains_key("kept"));
        assert!(!cleaned.contains_key("stale"));
    }

    #[test]
    fn prune_keeps_sticky_downloaded_state() {
        let map = with_download_status(&SheetStateMap::new(), "a", DownloadStatus::Downloaded);
        let cleaned = prune_to_ids(&map, &ids(&["a"]));
        assert_eq!(
            cleaned.get("a").unwrap().download_status,
            DownloadStatus::Downloaded
        );
    }

    #[test]
    fn map_never_holds_ids_absent_from_the_last_fetch() {
        // Arbitrary fetch/delete interleaving: the invariant holds after
        // every reconciliation.
        let store = store_with(None);
        let mut map = SheetStateMap::new();

        // fetch returns {a, b, c}
        for id in ["a", "b", "c"] {
            map = with_download_status(&map, id, DownloadStatus::Idle);
        }
        map = prune_to_ids(&map, &ids(&["a", "b", "c"]));
        store.save(&map);

        // delete b locally
        map = without_sheet(&map, "b");
        store.save(&map);

        // next fetch no longer has b or c
        map = prune_to_ids(&map, &ids(&["a"]));
        store.save(&map);

        assert_eq!(
            store.load().keys().cloned().collect::<Vec<String>>(),
            vec!["a".to_string()]
        );
    }

    #[test]
    fn delete_status_transitions_leave_other_rows_alone() {
        let mut map = SheetStateMap::new();
        map = with_download_status(&map, "a", DownloadStatus::Downloaded);
        map = with_delete_status(&map, "b", DeleteStatus::Deleting);

        assert_eq!(
            map.get("a").unwrap().download_status,
            DownloadStatus::Downloaded
        );
        assert_eq!(map.get("a").unwrap().delete_status, DeleteStatus::Idle);
        assert_eq!(map.get("b").unwrap().delete_status, DeleteStatus::Deleting);

        // failed delete reverts just that row
        map = with_delete_status(&map, "b", DeleteStatus::Idle);
        assert_eq!(map.get("b").unwrap().delete_status, DeleteStatus::Idle);
        assert_eq!(
            map.get("a").unwrap().download_status,
            DownloadStatus::Downloaded
        );
    }

    #[test]
    fn failed_download_reverts_to_idle_not_stuck() {
        let mut map = with_download_status(&SheetStateMap::new(), "a", DownloadStatus::Downloading);
        assert!(map.get("a").unwrap().download_disabled());

        map = with_download_status(&map, "a", DownloadStatus::Idle);
        assert_eq!(map.get("a").unwrap().download_status, DownloadStatus::Idle);
        assert!(!map.get("a").unwrap().download_disabled());
    }
}
