//! Request handlers, one module per record collection.
//!
//! Every handler resolves the store through [`Database::ready`] and makes a
//! single repository call.
//!
//! [`Database::ready`]: sitebook_db::Database::ready

pub mod project;
pub mod report;
pub mod task;
