pub mod algorithms;

pub use algorithms::{bits, buffer, integer};
