#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod progress;

pub use progress::{Decision, decide, next_step};
