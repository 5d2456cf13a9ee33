use std::sync::LazyLock;

use regex::Regex;

use crate::charset::StripOptions;
use crate::error::Result;
use crate::series::Series;

static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)[a-z0-9]+").unwrap());

/// Remove digits, and punctuation unless disabled, from every element.
///
/// Characters listed in `options.keep` survive the punctuation pass and digits
/// listed in `options.keep_digits` survive the digit pass. Everything outside
/// the removal set is copied through unchanged.
pub fn strip_digits_and_punctuation(
    series: &Series<Option<String>>,
    options: &StripOptions,
) -> Result<Series<Option<String>>> {
    let removal = options.removal_set();
    tracing::debug!(
        len = series.len(),
        remove_punctuation = options.remove_punctuation,
        removal_set = removal.len(),
        "stripping digits and punctuation"
    );
    series.try_map_text(|_, text| Ok(Some(removal.strip(text))))
}

/// Delete ASCII letters and digits from a single string.
pub fn strip_alphanumeric_str(text: &str) -> String {
    ALPHANUMERIC_RE.replace_all(text, "").into_owned()
}

/// Remove ASCII letters (either case) and ASCII digits from every element.
///
/// Fully alphanumeric elements become empty strings.
pub fn strip_alphanumeric(series: &Series<Option<String>>) -> Result<Series<Option<String>>> {
    tracing::debug!(len = series.len(), "stripping alphanumeric characters");
    series.try_map_text(|_, text| Ok(Some(strip_alphanumeric_str(text))))
}
