pub mod clock;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use tracker::{Registration, Tracker};
