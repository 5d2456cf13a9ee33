use std::fmt;
use std::str::FromStr;

use crate::error::{CleanError, Result};
use crate::series::Series;

/// Target type for `extract_numeric_as`, chosen at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumericKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl NumericKind {
    /// Cast target used when the caller does not pick one.
    pub const DEFAULT: NumericKind = NumericKind::Float64;

    pub fn name(self) -> &'static str {
        match self {
            NumericKind::Int8 => "int8",
            NumericKind::Int16 => "int16",
            NumericKind::Int32 => "int32",
            NumericKind::Int64 => "int64",
            NumericKind::UInt8 => "uint8",
            NumericKind::UInt16 => "uint16",
            NumericKind::UInt32 => "uint32",
            NumericKind::UInt64 => "uint64",
            NumericKind::Float32 => "float32",
            NumericKind::Float64 => "float64",
        }
    }
}

impl Default for NumericKind {
    fn default() -> Self {
        NumericKind::DEFAULT
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = CleanError;

    /// Accepts `int`/`float` shorthands plus sized names such as `int32` or `u8`.
    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "int8" | "i8" => NumericKind::Int8,
            "int16" | "i16" => NumericKind::Int16,
            "int32" | "i32" => NumericKind::Int32,
            "int" | "int64" | "i64" => NumericKind::Int64,
            "uint8" | "u8" => NumericKind::UInt8,
            "uint16" | "u16" => NumericKind::UInt16,
            "uint32" | "u32" => NumericKind::UInt32,
            "uint" | "uint64" | "u64" => NumericKind::UInt64,
            "float32" | "f32" => NumericKind::Float32,
            "float" | "float64" | "f64" => NumericKind::Float64,
            _ => return Err(CleanError::UnknownNumericKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// A numeric value tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Numeric {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
}

impl Numeric {
    pub fn kind(&self) -> NumericKind {
        match self {
            Numeric::Int8(_) => NumericKind::Int8,
            Numeric::Int16(_) => NumericKind::Int16,
            Numeric::Int32(_) => NumericKind::Int32,
            Numeric::Int64(_) => NumericKind::Int64,
            Numeric::UInt8(_) => NumericKind::UInt8,
            Numeric::UInt16(_) => NumericKind::UInt16,
            Numeric::UInt32(_) => NumericKind::UInt32,
            Numeric::UInt64(_) => NumericKind::UInt64,
            Numeric::Float32(_) => NumericKind::Float32,
            Numeric::Float64(_) => NumericKind::Float64,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int8(v) => write!(f, "{}", v),
            Numeric::Int16(v) => write!(f, "{}", v),
            Numeric::Int32(v) => write!(f, "{}", v),
            Numeric::Int64(v) => write!(f, "{}", v),
            Numeric::UInt8(v) => write!(f, "{}", v),
            Numeric::UInt16(v) => write!(f, "{}", v),
            Numeric::UInt32(v) => write!(f, "{}", v),
            Numeric::UInt64(v) => write!(f, "{}", v),
            Numeric::Float32(v) => write!(f, "{}", v),
            Numeric::Float64(v) => write!(f, "{}", v),
        }
    }
}

/// Types a digit string can be cast to.
pub trait NumericTarget: Copy {
    const KIND: NumericKind;

    /// Parse an ASCII digit string. Empty and out-of-range input are errors.
    fn parse_digits(digits: &str) -> std::result::Result<Self, String>;

    fn into_numeric(self) -> Numeric;
}

macro_rules! int_target {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl NumericTarget for $ty {
                const KIND: NumericKind = NumericKind::$kind;

                fn parse_digits(digits: &str) -> std::result::Result<Self, String> {
                    digits.parse::<$ty>().map_err(|e| e.to_string())
                }

                fn into_numeric(self) -> Numeric {
                    Numeric::$kind(self)
                }
            }
        )*
    };
}

macro_rules! float_target {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl NumericTarget for $ty {
                const KIND: NumericKind = NumericKind::$kind;

                fn parse_digits(digits: &str) -> std::result::Result<Self, String> {
                    let value = digits.parse::<$ty>().map_err(|e| e.to_string())?;
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err("number too large to fit in target type".to_string())
                    }
                }

                fn into_numeric(self) -> Numeric {
                    Numeric::$kind(self)
                }
            }
        )*
    };
}

int_target!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
);

float_target!(f32 => Float32, f64 => Float64);

/// Keep only the ASCII digits of `text`. Signs and decimal points are dropped too.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strip every non-digit character from each element and cast the rest to `T`.
///
/// An element without digits becomes the empty string, which no target type
/// accepts, so it fails with `CleanError::Conversion`.
pub fn extract_numeric<T: NumericTarget>(series: &Series<Option<String>>) -> Result<Series<T>> {
    let kind = T::KIND;
    tracing::debug!(len = series.len(), %kind, "extracting numeric values");
    series.try_map_text(|position, text| {
        let digits = digits_only(text);
        T::parse_digits(&digits).map_err(|reason| {
            tracing::debug!(position, value = %digits, %reason, "numeric conversion failed");
            CleanError::Conversion {
                position,
                value: digits,
                target: kind.name(),
                reason,
            }
        })
    })
}

/// Like `extract_numeric`, with the target type picked at run time.
pub fn extract_numeric_as(
    series: &Series<Option<String>>,
    kind: NumericKind,
) -> Result<Series<Numeric>> {
    match kind {
        NumericKind::Int8 => tagged::<i8>(series),
        NumericKind::Int16 => tagged::<i16>(series),
        NumericKind::Int32 => tagged::<i32>(series),
        NumericKind::Int64 => tagged::<i64>(series),
        NumericKind::UInt8 => tagged::<u8>(series),
        NumericKind::UInt16 => tagged::<u16>(series),
        NumericKind::UInt32 => tagged::<u32>(series),
        NumericKind::UInt64 => tagged::<u64>(series),
        NumericKind::Float32 => tagged::<f32>(series),
        NumericKind::Float64 => tagged::<f64>(series),
    }
}

fn tagged<T: NumericTarget>(series: &Series<Option<String>>) -> Result<Series<Numeric>> {
    Ok(extract_numeric::<T>(series)?.map(|v| v.into_numeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_point_is_stripped() {
        let data = Series::from_strs(&["123.45", "456.78", "789.0"]);
        let result = extract_numeric::<i64>(&data).unwrap();
        assert_eq!(result.values(), &[12345, 45678, 7890]);
        assert_eq!(result.index(), data.index());
    }

    #[test]
    fn test_default_kind_is_float() {
        assert_eq!(NumericKind::default(), NumericKind::Float64);
        let data = Series::from_strs(&["$1,200", "-7"]);
        let result = extract_numeric_as(&data, NumericKind::DEFAULT).unwrap();
        assert_eq!(
            result.values(),
            &[Numeric::Float64(1200.0), Numeric::Float64(7.0)]
        );
    }

    #[test]
    fn test_no_digits_fails() {
        let data = Series::from_strs(&["abc"]);
        let err = extract_numeric::<i64>(&data).unwrap_err();
        match err {
            CleanError::Conversion {
                position,
                value,
                target,
                ..
            } => {
                assert_eq!(position, 0);
                assert_eq!(value, "");
                assert_eq!(target, "int64");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(extract_numeric::<f64>(&data).is_err());
    }

    #[test]
    fn test_overflow_fails() {
        let data = Series::from_strs(&["12", "300"]);
        let err = extract_numeric::<u8>(&data).unwrap_err();
        assert!(matches!(err, CleanError::Conversion { position: 1, .. }));

        let huge = "9".repeat(50);
        let data = Series::from_strs(&[huge.as_str()]);
        assert!(extract_numeric::<f32>(&data).is_err());
        assert!(extract_numeric::<f64>(&data).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let data = Series::new(vec![Some("1".to_string()), Some("x".to_string()), None]);
        let err = extract_numeric::<i32>(&data).unwrap_err();
        assert!(matches!(err, CleanError::Conversion { position: 1, .. }));

        let data = Series::new(vec![Some("1".to_string()), None, Some("x".to_string())]);
        let err = extract_numeric::<i32>(&data).unwrap_err();
        assert_eq!(err, CleanError::InputType { position: 1 });
    }

    #[test]
    fn test_kind_names() {
        assert_eq!("int".parse::<NumericKind>().unwrap(), NumericKind::Int64);
        assert_eq!("Float".parse::<NumericKind>().unwrap(), NumericKind::Float64);
        assert_eq!("uint8".parse::<NumericKind>().unwrap(), NumericKind::UInt8);
        assert!(matches!(
            "complex".parse::<NumericKind>(),
            Err(CleanError::UnknownNumericKind(_))
        ));
    }

    #[test]
    fn test_numeric_display() {
        let data = Series::from_strs(&["n=21", "0.5"]);
        let result = extract_numeric_as(&data, NumericKind::UInt16).unwrap();
        let rendered: Vec<String> = result.values().iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["21", "5"]);
    }

    #[test]
    fn test_non_ascii_digits_dropped() {
        assert_eq!(digits_only("٣4x５"), "4");
    }
}
