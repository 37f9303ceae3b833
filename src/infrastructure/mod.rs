//! Infrastructure layer implementing the interfaces defined by the domain.
//!
//! - [`persistence`] - SQLite repository implementations

pub mod persistence;
