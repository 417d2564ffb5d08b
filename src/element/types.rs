use super::OptionNA;

pub type Character = OptionNA<String>;
pub type Integer = OptionNA<i64>;
pub type Double = OptionNA<f64>;
pub type Logical = OptionNA<bool>;
