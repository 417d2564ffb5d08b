use core::fmt;

use crate::element::Type;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Missing,
    OutOfRange(String),
    CannotConvertNA(&'static str),
    CannotConvertDateTime { value: String, to: &'static str },
    CannotBeCoercedTo(&'static str),
    CannotBeComparedTo(Type),
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::Missing => "element is missing".to_string(),
            Error::OutOfRange(x) => {
                format!("'{x}' is outside of the datetime range 0000-01-01 to 9999-12-31")
            }
            Error::CannotConvertNA(to) => format!("can't convert NA to '{to}'"),
            Error::CannotConvertDateTime { value, to } => {
                format!("can't convert datetime \"{value}\" to '{to}'")
            }
            Error::CannotBeCoercedTo(to) => {
                format!("element cannot be coerced to type '{to}'")
            }
            Error::CannotBeComparedTo(ty) => {
                format!("datetime cannot be compared to type '{ty}'")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.as_str())
    }
}

impl std::error::Error for Error {}

impl<T> From<Error> for Result<T, Error> {
    fn from(val: Error) -> Self {
        Err(val)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        let e = Error::CannotConvertNA("int");
        assert_eq!(e.to_string(), "Error: can't convert NA to 'int'");
    }

    #[test]
    fn out_of_range_names_value() {
        let e = Error::OutOfRange("9223372036854775807ms".to_string());
        assert_eq!(
            e.to_string(),
            "Error: '9223372036854775807ms' is outside of the datetime range 0000-01-01 to 9999-12-31"
        );
    }

    #[test]
    fn comparison_error_names_type() {
        let e = Error::CannotBeComparedTo(Type::Float);
        assert_eq!(e.to_string(), "Error: datetime cannot be compared to type 'float'");
    }
}
