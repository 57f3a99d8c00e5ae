mod error;
pub use error::{Error, IntoError};

pub mod schema;

/// A Result type alias that uses sfmigrate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
