use neat_series::{CleanError, NumericKind, OneOrMany, Series, StripOptions};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// A digit to keep, as JS hands it over: an integer, any other number, or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DigitValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl DigitValue {
    fn render(self) -> String {
        match self {
            DigitValue::Int(n) => n.to_string(),
            DigitValue::Float(x) => x.to_string(),
            DigitValue::Text(s) => s,
        }
    }
}

/// Options object accepted by `toText`. Each of `keep` and `keepDigits` may be
/// a single value or an array.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TextOptions {
    remove_punctuation: bool,
    keep: Option<OneOrMany<String>>,
    keep_digits: Option<OneOrMany<DigitValue>>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
            keep: None,
            keep_digits: None,
        }
    }
}

impl TextOptions {
    fn into_strip_options(self) -> StripOptions {
        let mut options = StripOptions::new().remove_punctuation(self.remove_punctuation);
        if let Some(keep) = self.keep {
            options = options.keep(keep);
        }
        if let Some(digits) = self.keep_digits {
            options = options.keep_digits(digits.map(DigitValue::render));
        }
        options
    }
}

fn numeric_kind(dtype: Option<&str>) -> Result<NumericKind, CleanError> {
    match dtype {
        Some(name) => name.parse(),
        None => Ok(NumericKind::DEFAULT),
    }
}

fn text_values(values: JsValue) -> Result<Series<Option<String>>, JsError> {
    let values: Vec<Option<String>> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsError::new(&format!("Expected an array of strings: {}", e)))?;
    Ok(Series::new(values))
}

fn to_js<T: serde::Serialize>(values: &[T]) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(values)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Strip non-digit characters and cast to `dtype` (defaults to "float").
/// Returns an array of numbers.
#[wasm_bindgen(js_name = toInteger)]
pub fn to_integer(values: JsValue, dtype: Option<String>) -> Result<JsValue, JsError> {
    let kind = numeric_kind(dtype.as_deref()).map_err(|e| JsError::new(&e.to_string()))?;
    let result = neat_series::extract_numeric_as(&text_values(values)?, kind)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(result.values())
}

/// Remove digits and/or punctuation.
/// `options` is `{ removePunctuation?, keep?: string | string[], keepDigits?: number | number[] }`.
#[wasm_bindgen(js_name = toText)]
pub fn to_text(values: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let options: TextOptions = if options.is_undefined() || options.is_null() {
        TextOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options object: {}", e)))?
    };
    let result = neat_series::strip_digits_and_punctuation(
        &text_values(values)?,
        &options.into_strip_options(),
    )
    .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(result.values())
}

/// Remove ASCII letters and digits. Returns an array of strings.
#[wasm_bindgen(js_name = toSpecialChr)]
pub fn to_special_chr(values: JsValue) -> Result<JsValue, JsError> {
    let result = neat_series::strip_alphanumeric(&text_values(values)?)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(result.values())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(json: &str) -> StripOptions {
        serde_json::from_str::<TextOptions>(json)
            .unwrap()
            .into_strip_options()
    }

    fn strip(json: &str, values: &[&str]) -> Vec<Option<String>> {
        let data = Series::from_strs(values);
        neat_series::strip_digits_and_punctuation(&data, &options(json))
            .unwrap()
            .into_values()
    }

    #[test]
    fn test_scalar_keep_and_list_digits() {
        let out = strip(
            r#"{"keep":"o","keepDigits":[2]}"#,
            &["Hello, 123!", "World456", "Python"],
        );
        assert_eq!(
            out,
            vec![
                Some("Hello 2".to_string()),
                Some("World".to_string()),
                Some("Python".to_string())
            ]
        );
    }

    #[test]
    fn test_multi_char_keep_string_spreads() {
        assert_eq!(options(r#"{"keep":["()"]}"#).keep, vec!['(', ')']);
        assert_eq!(strip(r#"{"keep":"()"}"#, &["f(x)!"]), vec![Some("f(x)".to_string())]);
    }

    #[test]
    fn test_scalar_keep_digits() {
        let opts = options(r#"{"keepDigits":2}"#);
        assert_eq!(opts.keep_digits, vec!["2".to_string()]);
        assert_eq!(strip(r#"{"keepDigits":"7"}"#, &["1727"]), vec![Some("77".to_string())]);
    }

    #[test]
    fn test_fractional_digit_is_noop() {
        assert_eq!(options(r#"{"keepDigits":2.5}"#), StripOptions::new().keep_digits(["2.5"]));
        assert_eq!(strip(r#"{"keepDigits":2.5}"#, &["a2b"]), vec![Some("ab".to_string())]);
    }

    #[test]
    fn test_empty_options_use_defaults() {
        assert_eq!(options("{}"), StripOptions::default());
        assert_eq!(
            options(r#"{"removePunctuation":false}"#),
            StripOptions::new().remove_punctuation(false)
        );
    }

    #[test]
    fn test_numbers_serialize_untagged() {
        let data = Series::from_strs(&["#7", "v300"]);
        let result = neat_series::extract_numeric_as(&data, NumericKind::UInt16).unwrap();
        assert_eq!(
            serde_json::to_string(result.values()).unwrap(),
            "[7,300]"
        );
    }

    #[test]
    fn test_numeric_kind_names() {
        assert_eq!(numeric_kind(None).unwrap(), NumericKind::Float64);
        assert_eq!(numeric_kind(Some("int32")).unwrap(), NumericKind::Int32);
        assert!(matches!(
            numeric_kind(Some("decimal")),
            Err(CleanError::UnknownNumericKind(_))
        ));
    }
}
