#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod muscle;
mod selection;
mod service;
mod signal;
mod slug;
mod video;
mod youtube;

pub use error::*;
pub use muscle::*;
pub use selection::*;
pub use service::*;
pub use signal::*;
pub use slug::*;
pub use video::*;
pub use youtube::*;
