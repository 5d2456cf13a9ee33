//! Neat Series — element-wise text cleaning for tabular columns.
//!
//! Pure Rust library providing:
//! - Numeric extraction (digits-only filter + cast to a numeric type)
//! - Digit and punctuation stripping with per-character exclusions
//! - Alphanumeric stripping (regex substitution, ASCII only)
//!
//! Every operation takes a `Series` of text and returns a new series with the
//! same index, or the error for the first offending element.

pub mod charset;
pub mod error;
pub mod numeric;
pub mod series;
pub mod text;

// Re-export main types at crate root for convenience
pub use charset::{OneOrMany, RemovalSet, StripOptions};
pub use error::{CleanError, Result};
pub use numeric::{
    digits_only, extract_numeric, extract_numeric_as, Numeric, NumericKind, NumericTarget,
};
pub use series::{IndexLabel, Series};
pub use text::{strip_alphanumeric, strip_alphanumeric_str, strip_digits_and_punctuation};
