// Module exports for pure logic
pub mod routes;
pub mod navigation;      // Back/forward history over the route table
pub mod booking_logic;   // Booking state transitions
pub mod storage;         // Persistence layer
