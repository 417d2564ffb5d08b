//! Elements
//!
//! Elements are the single cells of a series. Each kind wraps its value in
//! [`OptionNA`] so that every element, whatever its type, has an `NA`
//! representation.
//!

mod core;
pub use self::core::*;

pub mod coercion;
pub mod types;
pub use types::*;

mod datetime;
pub use datetime::*;
