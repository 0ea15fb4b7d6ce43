//! Command implementations

mod total;

pub use total::total;
