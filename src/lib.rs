//! Series elements
//!
//! A series is a homogeneous column of elements. Every element has a
//! representation for `NA` and shares a common capability set: it can be
//! set from loosely typed input, copied, rendered, converted and compared.
//!
//! The element kinds form a closed set, modeled by [`Element`]. The
//! date-time kind, [`DateTimeElement`], stores a single UTC instant and
//! coerces strings, epoch-milliseconds and other elements into it.
//!

pub mod element;
pub mod error;

pub use element::*;
pub use error::Error;
