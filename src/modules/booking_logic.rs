// Pure booking state transitions - no storage access.

use serde_json::{Map, Value};

/// The in-progress reservation: an open JSON object. Only
/// `pickupLocation` is interpreted here, everything else is carried as-is.
pub type Booking = Map<String, Value>;

pub const PICKUP_LOCATION: &str = "pickupLocation";

/// Full replace. The payload is taken as given, without validation.
pub fn replace(_current: Option<&Booking>, payload: Booking) -> Option<Booking> {
    Some(payload)
}

/// Shallow merge of `patch` over the current booking.
///
/// Keys in `patch` overwrite, keys absent from it are preserved, nested
/// values are replaced whole. Without a current booking nothing is created.
pub fn merge(current: Option<&Booking>, patch: Booking) -> Option<Booking> {
    let mut merged = current?.clone();
    for (key, value) in patch {
        merged.insert(key, value);
    }
    Some(merged)
}

pub fn clear(_current: Option<&Booking>) -> Option<Booking> {
    None
}

/// `false` only when a booking exists and its pickup location equals
/// `location`.
pub fn is_available(current: Option<&Booking>, location: &Value) -> bool {
    match current.and_then(|b| b.get(PICKUP_LOCATION)) {
        Some(booked) => !same_location(booked, location),
        None => true,
    }
}

/// Strict equality where numbers compare by value, so `3` and `3.0` are the
/// same location but `3` and `"3"` are not.
fn same_location(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Decode a persisted value. Anything that is not a JSON object counts as
/// no booking.
pub fn decode(raw: &str) -> Result<Option<Booking>, serde_json::Error> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Ok(None),
    }
}

pub fn encode(booking: &Booking) -> Result<String, serde_json::Error> {
    serde_json::to_string(booking)
}
