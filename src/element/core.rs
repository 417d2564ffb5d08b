use std::fmt::Display;

use chrono::{DateTime, Utc};

use super::coercion::CoercibleInto;
use super::datetime::DateTimeElement;
use super::types::*;
use crate::error::Error;

/// Textual token used for `NA` whenever an element crosses a text boundary
pub const NA_TOKEN: &str = "NaN";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionNA<T> {
    #[default]
    NA,
    Some(T),
}

impl<T> PartialOrd for OptionNA<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (OptionNA::Some(l), OptionNA::Some(r)) => l.partial_cmp(r),
            _ => None,
        }
    }
}

impl<T> OptionNA<T> {
    pub fn map<F, U>(self, f: F) -> OptionNA<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OptionNA::Some(x) => OptionNA::Some(f(x)),
            OptionNA::NA => OptionNA::NA,
        }
    }

    pub fn as_option(self) -> Option<T> {
        match self {
            OptionNA::Some(x) => Option::Some(x),
            OptionNA::NA => Option::None,
        }
    }

    pub fn is_na(&self) -> bool {
        matches!(self, OptionNA::NA)
    }
}

impl<T> From<Option<T>> for OptionNA<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => OptionNA::Some(x),
            None => OptionNA::NA,
        }
    }
}

impl<T> Display for OptionNA<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionNA::Some(x) => write!(f, "{}", x),
            OptionNA::NA => write!(f, "{NA_TOKEN}"),
        }
    }
}

/// Element type tags
///
/// Identifies which variant an [`Element`] holds. Tags render in
/// snake_case and can be parsed back from the same text, which is how a
/// column reports its schema.
///
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum Type {
    String,
    Int,
    Float,
    Bool,
    #[strum(serialize = "datetime")]
    #[cfg_attr(feature = "serde", serde(rename = "datetime"))]
    DateTime,
}

/// Boxed element value
///
/// The generic value handed out by [`Element::val`] for non-missing
/// elements.
///
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
}

/// Element
///
/// The closed set of element kinds a series can hold. Each variant has an
/// `NA` representation; for floats a `NaN` payload is also treated as `NA`.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    String(Character),
    Int(Integer),
    Float(Double),
    Bool(Logical),
    DateTime(DateTimeElement),
}

impl Element {
    pub fn elem_type(&self) -> Type {
        match self {
            Element::String(_) => Type::String,
            Element::Int(_) => Type::Int,
            Element::Float(_) => Type::Float,
            Element::Bool(_) => Type::Bool,
            Element::DateTime(_) => Type::DateTime,
        }
    }

    pub fn is_na(&self) -> bool {
        match self {
            Element::String(x) => x.is_na(),
            Element::Int(x) => x.is_na(),
            Element::Float(OptionNA::Some(x)) => x.is_nan(),
            Element::Float(OptionNA::NA) => true,
            Element::Bool(x) => x.is_na(),
            Element::DateTime(x) => x.is_na(),
        }
    }

    pub fn val(&self) -> Option<ElementValue> {
        if self.is_na() {
            return None;
        }

        match self {
            Element::String(x) => x.clone().as_option().map(ElementValue::String),
            Element::Int(x) => x.as_option().map(ElementValue::Int),
            Element::Float(x) => x.as_option().map(ElementValue::Float),
            Element::Bool(x) => x.as_option().map(ElementValue::Bool),
            Element::DateTime(x) => x.val().map(ElementValue::DateTime),
        }
    }

    /// Epoch-millisecond reading of an element
    ///
    /// Every variant either has a temporal reading or reports that it has
    /// none. Missing elements, as well as non-finite floats, read as `NA`.
    /// Strings and booleans are never read as instants.
    ///
    pub fn as_epoch_millis(&self) -> Result<OptionNA<i64>, Error> {
        match self {
            Element::Int(x) => Ok(*x),
            Element::Float(OptionNA::Some(x)) if x.is_finite() => {
                Ok(OptionNA::Some(CoercibleInto::<i64>::coerce_into(*x)))
            }
            Element::Float(_) => Ok(OptionNA::NA),
            Element::DateTime(x) => Ok(x.epoch_millis()),
            Element::String(_) | Element::Bool(_) => Error::CannotBeCoercedTo("datetime").into(),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_na() {
            return write!(f, "{NA_TOKEN}");
        }

        match self {
            Element::String(x) => write!(f, "{x}"),
            Element::Int(x) => write!(f, "{x}"),
            Element::Float(x) => write!(f, "{x}"),
            Element::Bool(x) => write!(f, "{x}"),
            Element::DateTime(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Element {
    fn from(x: &str) -> Self {
        Element::String(OptionNA::Some(x.to_string()))
    }
}

impl From<String> for Element {
    fn from(x: String) -> Self {
        Element::String(OptionNA::Some(x))
    }
}

impl From<i64> for Element {
    fn from(x: i64) -> Self {
        Element::Int(OptionNA::Some(x))
    }
}

impl From<f64> for Element {
    fn from(x: f64) -> Self {
        Element::Float(OptionNA::Some(x))
    }
}

impl From<bool> for Element {
    fn from(x: bool) -> Self {
        Element::Bool(OptionNA::Some(x))
    }
}

impl From<DateTimeElement> for Element {
    fn from(x: DateTimeElement) -> Self {
        Element::DateTime(x)
    }
}
