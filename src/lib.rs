// Storefront library entry point.
// Route table and booking store for the rental shop front-end; the host
// builds an `AppState` and hands it to its pages.

pub mod error;

// Persisted booking
pub mod booking;
pub mod settings;

// Shared state
pub mod state;

// Pure logic modules (no storage access except through `modules::storage`)
pub mod modules;

pub use booking::{BookingStore, BOOKING_KEY};
pub use error::{RouteError, SettingsError, StorageError, StoreError};
pub use modules::booking_logic::Booking;
pub use modules::routes::{Page, RouteMatch, RouteTable};
pub use settings::Settings;
pub use state::AppState;
