use web_sys::{window, Storage};

/// Key-value persistence seam. The app wires in localStorage; tests wire in
/// an in-memory map so store logic runs without a browser.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// The real thing: window.localStorage.
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or("localStorage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Could not write to localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = local_storage().ok_or("localStorage unavailable")?;
        storage
            .remove_item(key)
            .map_err(|_| "Could not remove from localStorage".to_string())
    }
}

#[cfg(test)]
pub mod memory {
    use super::StorageBackend;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn with_entry(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl StorageBackend for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}
