//! Domain building blocks shared by the catalog crates.
//!
//! Zero I/O: error taxonomy, id/timestamp aliases, input validation,
//! listing helpers, and object-storage naming.

pub mod error;
pub mod naming;
pub mod search;
pub mod types;
pub mod validation;
