use log::{debug, info, warn};
use serde_json::Value;

use crate::error::StoreResult;
use crate::modules::booking_logic::{self, Booking};
use crate::modules::storage::Storage;

/// Storage key owned by the booking store.
pub const BOOKING_KEY: &str = "booking";

/// The single current booking, mirrored to durable storage.
///
/// Every mutation writes storage first and only then updates the in-memory
/// copy, so both stay identical even when a write fails.
#[derive(Debug)]
pub struct BookingStore<S: Storage> {
    booking: Option<Booking>,
    storage: S,
}

impl<S: Storage> BookingStore<S> {
    /// Create the store and load whatever booking is persisted.
    pub fn new(storage: S) -> Self {
        let mut store = BookingStore {
            booking: None,
            storage,
        };
        store.initialize();
        store
    }

    /// Re-read the persisted booking. A missing, unreadable or corrupt value
    /// leaves the store empty; nothing is written back.
    pub fn initialize(&mut self) {
        self.booking = match self.storage.get(BOOKING_KEY) {
            Ok(Some(raw)) => booking_logic::decode(&raw).unwrap_or_else(|e| {
                warn!("[Booking] Discarding corrupt persisted booking: {}", e);
                None
            }),
            Ok(None) => None,
            Err(e) => {
                warn!("[Booking] Failed to read persisted booking: {}", e);
                None
            }
        };
        info!(
            "[Booking] Initialized ({})",
            if self.booking.is_some() { "booking restored" } else { "no booking" }
        );
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    pub fn has_booking(&self) -> bool {
        self.booking.is_some()
    }

    /// Replace the booking entirely and persist it.
    pub fn set_booking(&mut self, payload: Booking) -> StoreResult<()> {
        let next = booking_logic::replace(self.booking.as_ref(), payload);
        self.commit(next)
    }

    /// Shallow-merge `patch` into the current booking and persist the result.
    /// Does nothing when there is no booking.
    pub fn update_booking(&mut self, patch: Booking) -> StoreResult<()> {
        match booking_logic::merge(self.booking.as_ref(), patch) {
            Some(merged) => self.commit(Some(merged)),
            None => {
                debug!("[Booking] Update ignored, no booking");
                Ok(())
            }
        }
    }

    /// Drop the booking and remove the persisted key.
    pub fn clear_booking(&mut self) -> StoreResult<()> {
        let next = booking_logic::clear(self.booking.as_ref());
        self.commit(next)
    }

    /// `false` iff the current booking is for `location`.
    pub fn is_available(&self, location: &Value) -> bool {
        booking_logic::is_available(self.booking.as_ref(), location)
    }

    fn commit(&mut self, next: Option<Booking>) -> StoreResult<()> {
        match &next {
            Some(booking) => {
                let json = booking_logic::encode(booking)?;
                self.storage.set(BOOKING_KEY, &json)?;
                debug!("[Booking] Persisted booking ({} fields)", booking.len());
            }
            None => {
                self.storage.remove(BOOKING_KEY)?;
                debug!("[Booking] Cleared booking");
            }
        }
        self.booking = next;
        Ok(())
    }
}
