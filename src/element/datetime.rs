//! Date-time elements
//!
//! A [`DateTimeElement`] holds a single UTC instant or `NA`. Values can be
//! set from loosely typed [`Input`]. Malformed data, such as unparseable
//! strings or non-finite floats, quietly becomes `NA`, the same way a
//! missing cell would be read from a dataset. Asking for something the
//! element can never provide, such as a logical conversion or a comparison
//! against a non-temporal element, is reported as an [`Error`] instead.
//!
//! The numeric representation of an instant is its count of milliseconds
//! since `1970-01-01T00:00:00Z`. The textual representation is RFC 3339,
//! or [`NA_TOKEN`] for missing values. Valid elements are confined to the
//! four-digit years RFC 3339 can express, so every valid element renders
//! to text that parses back into the same instant. Numbers and instants
//! outside of that range are rejected with [`Error::OutOfRange`].
//!

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use log::debug;

use super::coercion::CoercibleInto;
use super::{Element, OptionNA, Type, NA_TOKEN};
use crate::error::Error;

/// Epoch-milliseconds of `0000-01-01T00:00:00Z`
pub const MIN_EPOCH_MILLIS: i64 = -62_167_219_200_000;

/// Epoch-milliseconds of `9999-12-31T23:59:59.999Z`
pub const MAX_EPOCH_MILLIS: i64 = 253_402_300_799_999;

/// Input accepted by [`DateTimeElement::set`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Element(&'a Element),
    Null,
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(x: &'a str) -> Self {
        Input::Str(x)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(x: &'a String) -> Self {
        Input::Str(x.as_str())
    }
}

impl From<i64> for Input<'_> {
    fn from(x: i64) -> Self {
        Input::Int(x)
    }
}

impl From<i32> for Input<'_> {
    fn from(x: i32) -> Self {
        Input::Int(x as i64)
    }
}

impl From<f64> for Input<'_> {
    fn from(x: f64) -> Self {
        Input::Float(x)
    }
}

impl From<bool> for Input<'_> {
    fn from(x: bool) -> Self {
        Input::Bool(x)
    }
}

impl From<DateTime<Utc>> for Input<'_> {
    fn from(x: DateTime<Utc>) -> Self {
        Input::DateTime(x)
    }
}

impl<'a> From<&'a Element> for Input<'a> {
    fn from(x: &'a Element) -> Self {
        Input::Element(x)
    }
}

/// Date-time element
///
/// Either a valid instant or `NA`. A missing element carries no instant,
/// and copies never share state.
///
/// `PartialOrd` follows [`OptionNA`], so `NA` is unordered with respect to
/// everything. Note that `==` and `partial_cmp` disagree for `NA`: two
/// missing elements are `==`, yet `partial_cmp` between them is `None`.
/// The `elem_*` comparisons are the checked equivalents used when
/// comparing against arbitrary [`Element`]s.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd)]
pub struct DateTimeElement(OptionNA<DateTime<Utc>>);

impl DateTimeElement {
    pub fn na() -> Self {
        DateTimeElement(OptionNA::NA)
    }

    /// Build an element from input, see [`DateTimeElement::set`]
    pub fn new<'a>(value: impl Into<Input<'a>>) -> Result<Self, Error> {
        let mut x = DateTimeElement::na();
        x.set(value)?;
        Ok(x)
    }

    /// Overwrite the element from loosely typed input
    ///
    /// * `"NaN"` is `NA`; any other string is parsed as RFC 3339 and
    ///   becomes `NA` when it does not parse, or when its offset moves it
    ///   outside of years 0000 through 9999.
    /// * Integers are epoch-milliseconds. Floats are truncated toward zero
    ///   first; `NaN` and infinities are `NA`. Counts outside of
    ///   [`MIN_EPOCH_MILLIS`]..=[`MAX_EPOCH_MILLIS`] are an error.
    /// * Logicals, `true` and `false` alike, map onto the epoch origin.
    /// * Instants outside of years 0000 through 9999 are an error.
    /// * Elements are read through [`Element::as_epoch_millis`]. Kinds with
    ///   no temporal reading are an error.
    /// * [`Input::Null`] is `NA`.
    ///
    /// On error the element is left `NA`.
    ///
    pub fn set<'a>(&mut self, value: impl Into<Input<'a>>) -> Result<(), Error> {
        use OptionNA::*;
        let value = match value.into() {
            Input::Str(s) => Ok(parse(s)),
            Input::Int(x) => from_millis(x),
            Input::Float(x) if x.is_finite() => from_millis(x.coerce_into()),
            Input::Float(x) => {
                debug!("non-finite datetime {x} set as NA");
                Ok(NA)
            }
            Input::Bool(x) => Ok(Some(x.coerce_into())),
            Input::DateTime(t) => from_instant(t),
            Input::Element(e) => e.as_epoch_millis().and_then(|x| match x {
                Some(x) => from_millis(x),
                NA => Ok(NA),
            }),
            Input::Null => Ok(NA),
        };

        match value {
            Ok(x) => {
                self.0 = x;
                Ok(())
            }
            Err(err) => {
                self.0 = NA;
                Err(err)
            }
        }
    }

    pub fn is_na(&self) -> bool {
        self.0.is_na()
    }

    pub fn elem_type(&self) -> Type {
        Type::DateTime
    }

    pub fn val(&self) -> Option<DateTime<Utc>> {
        self.0.as_option()
    }

    pub fn epoch_millis(&self) -> OptionNA<i64> {
        self.0.coerce_into()
    }

    pub fn int(&self) -> Result<i64, Error> {
        match self.0 {
            OptionNA::Some(t) => Ok(t.coerce_into()),
            OptionNA::NA => Error::CannotConvertNA("int").into(),
        }
    }

    pub fn float(&self) -> f64 {
        match self.0 {
            OptionNA::Some(t) => t.coerce_into(),
            OptionNA::NA => f64::NAN,
        }
    }

    pub fn bool(&self) -> Result<bool, Error> {
        Error::CannotConvertDateTime {
            value: self.to_string(),
            to: "bool",
        }
        .into()
    }

    /// Chronological ordering against another element
    ///
    /// Both sides must hold an instant. A missing side is an
    /// [`Error::Missing`], and a non-temporal operand is an
    /// [`Error::CannotBeComparedTo`].
    ///
    pub fn compare(&self, other: &Element) -> Result<Ordering, Error> {
        let rhs = match other {
            Element::DateTime(x) => x.0,
            x => return Error::CannotBeComparedTo(x.elem_type()).into(),
        };

        match (self.0, rhs) {
            (OptionNA::Some(l), OptionNA::Some(r)) => Ok(l.cmp(&r)),
            _ => Error::Missing.into(),
        }
    }

    pub fn elem_eq(&self, other: &Element) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn elem_neq(&self, other: &Element) -> Result<bool, Error> {
        Ok(self.compare(other)? != Ordering::Equal)
    }

    pub fn elem_lt(&self, other: &Element) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn elem_lte(&self, other: &Element) -> Result<bool, Error> {
        use Ordering::*;
        Ok(matches!(self.compare(other)?, Less | Equal))
    }

    pub fn elem_gt(&self, other: &Element) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn elem_gte(&self, other: &Element) -> Result<bool, Error> {
        use Ordering::*;
        Ok(matches!(self.compare(other)?, Greater | Equal))
    }
}

fn parse(s: &str) -> OptionNA<DateTime<Utc>> {
    if s == NA_TOKEN {
        return OptionNA::NA;
    }

    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => match from_instant(t.with_timezone(&Utc)) {
            Ok(t) => t,
            Err(e) => {
                debug!("datetime {s:?} set as NA: {e}");
                OptionNA::NA
            }
        },
        Err(e) => {
            debug!("unparseable datetime {s:?} set as NA: {e}");
            OptionNA::NA
        }
    }
}

fn from_millis(x: i64) -> Result<OptionNA<DateTime<Utc>>, Error> {
    let t: OptionNA<DateTime<Utc>> = x.coerce_into();
    match t {
        OptionNA::NA => Error::OutOfRange(format!("{x}ms")).into(),
        t => Ok(t),
    }
}

fn from_instant(t: DateTime<Utc>) -> Result<OptionNA<DateTime<Utc>>, Error> {
    if !(0..=9999).contains(&t.year()) {
        return Error::OutOfRange(t.to_rfc3339()).into();
    }

    Ok(OptionNA::Some(t))
}

impl Display for DateTimeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            OptionNA::Some(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            OptionNA::NA => write!(f, "{NA_TOKEN}"),
        }
    }
}

impl From<&str> for DateTimeElement {
    fn from(x: &str) -> Self {
        DateTimeElement(parse(x))
    }
}

impl FromStr for DateTimeElement {
    type Err = Error;

    /// Unparseable text is read as `NA` rather than rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DateTimeElement(parse(s)))
    }
}

impl TryFrom<i64> for DateTimeElement {
    type Error = Error;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DateTimeElement::new(value)
    }
}

impl TryFrom<f64> for DateTimeElement {
    type Error = Error;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        DateTimeElement::new(value)
    }
}

impl From<bool> for DateTimeElement {
    fn from(x: bool) -> Self {
        DateTimeElement(OptionNA::Some(x.coerce_into()))
    }
}

impl TryFrom<DateTime<Utc>> for DateTimeElement {
    type Error = Error;
    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        DateTimeElement::new(value)
    }
}

impl TryFrom<&Element> for DateTimeElement {
    type Error = Error;
    fn try_from(value: &Element) -> Result<Self, Self::Error> {
        DateTimeElement::new(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateTimeElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateTimeElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DateTimeElement(parse(&s)))
    }
}
