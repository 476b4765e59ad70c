pub mod config;
pub mod error;
pub mod form;
pub mod link;

pub use config::*;
pub use error::*;
pub use form::*;
pub use link::*;
