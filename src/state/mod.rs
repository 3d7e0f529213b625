pub mod sheet_states;
pub mod storage;

pub use sheet_states::{prune_to_ids, SheetStateMap, SheetStateStore};
pub use storage::{BrowserStorage, StorageBackend};
