//! Infrastructure layer: the in-memory customer store and the clock seam.

pub mod clock;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{CustomerStore, InMemoryCustomerStore};
