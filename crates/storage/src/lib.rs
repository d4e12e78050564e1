#![warn(clippy::pedantic)]

pub mod json;
pub mod memory;

pub use memory::InMemory;
