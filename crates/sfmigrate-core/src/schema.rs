//! Both sides of the translation.
//!
//! [`sobject`] holds the source-side metadata as exported by the remote
//! platform's describe call. [`db`] holds the relational side: storage
//! types, columns and the table that receives them.

pub mod db;
pub use db::{Column, Table};

pub mod sobject;
pub use sobject::{Field, SObject};
