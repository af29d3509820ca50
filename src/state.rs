// Shared state handed to page consumers. Built explicitly by the host
// instead of living in a global, so tests can construct their own.

use std::sync::{Arc, Mutex};

use crate::booking::BookingStore;
use crate::error::RouteError;
use crate::modules::navigation::Navigator;
use crate::modules::routes::RouteTable;
use crate::modules::storage::{FileStorage, Storage};
use crate::settings::Settings;

pub type SharedStorage = Box<dyn Storage>;

pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub navigator: Arc<Mutex<Navigator>>,
    pub cart: Arc<Mutex<BookingStore<SharedStorage>>>,
}

impl AppState {
    pub fn new(settings: &Settings, storage: SharedStorage) -> Result<Self, RouteError> {
        let routes = RouteTable::new();
        let navigator = Navigator::new(routes.clone(), &settings.start_path, settings.history_limit)?;
        Ok(Self {
            routes: Arc::new(routes),
            navigator: Arc::new(Mutex::new(navigator)),
            cart: Arc::new(Mutex::new(BookingStore::new(storage))),
        })
    }

    /// State persisting the booking under `settings.data_dir`.
    pub fn from_settings(settings: &Settings) -> Result<Self, RouteError> {
        Self::new(settings, Box::new(FileStorage::new(settings.data_dir.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::routes::Page;
    use crate::modules::storage::MemoryStorage;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_pages_share_cart() {
        let state = AppState::new(&Settings::default(), Box::new(MemoryStorage::new())).unwrap();

        {
            let mut nav = state.navigator.lock().unwrap();
            let m = nav.push("/book-now/42").unwrap();
            assert_eq!(m.page, Page::BookNow);
        }

        let cart = Arc::clone(&state.cart);
        cart.lock()
            .unwrap()
            .set_booking(json!({"pickupLocation": "A"}).as_object().cloned().unwrap())
            .unwrap();

        assert!(!state.cart.lock().unwrap().is_available(&json!("A")));
    }

    #[test]
    fn test_from_settings_restores_booking() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            data_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };

        {
            let state = AppState::from_settings(&settings).unwrap();
            let mut cart = state.cart.lock().unwrap();
            cart.set_booking(json!({"pickupLocation": "B"}).as_object().cloned().unwrap())
                .unwrap();
        }

        let state = AppState::from_settings(&settings).unwrap();
        assert!(!state.cart.lock().unwrap().is_available(&json!("B")));
    }

    #[test]
    fn test_bad_start_path() {
        let settings = Settings {
            start_path: "/nope".to_string(),
            ..Settings::default()
        };
        assert!(AppState::new(&settings, Box::new(MemoryStorage::new())).is_err());
    }
}
