pub mod config;
pub mod error;
pub mod lead;

pub use config::*;
pub use error::*;
pub use lead::*;
