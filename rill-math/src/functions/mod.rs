//! Math scalar functions

mod floor;

pub use floor::Floor;
