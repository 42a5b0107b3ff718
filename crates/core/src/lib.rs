//! Domain types shared by the store binding and the HTTP service.

pub mod error;
pub mod records;
pub mod types;
pub mod upload;
