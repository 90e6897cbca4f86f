pub mod catalog;
pub mod composer;
pub mod config;
pub mod dispatch;
pub mod error;

pub use error::{Error, Result, ValidationError};
