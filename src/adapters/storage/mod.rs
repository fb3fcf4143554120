//! Storage Adapters
//!
//! Implementations of the BookingRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryBookingRepository** - Stores bookings in memory (testing/development)

mod in_memory_booking_repository;

pub use in_memory_booking_repository::InMemoryBookingRepository;
