#![allow(clippy::useless_conversion)] // PyO3 generates conversions via proc macros

use neat_series::{CleanError, Numeric, NumericKind, OneOrMany, Series, StripOptions};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyLong, PyType};

/// `dtype` accepts the builtin `int`/`float` types or a type name such as "int32".
#[derive(FromPyObject)]
enum DType<'py> {
    Name(String),
    Type(Bound<'py, PyType>),
}

/// `keep` accepts a single string or a list of strings.
#[derive(FromPyObject)]
enum KeepChars {
    One(String),
    Many(Vec<String>),
}

/// `keep_num` accepts a single integer or a list of integers of any size.
#[derive(FromPyObject)]
enum KeepDigits<'py> {
    One(Bound<'py, PyLong>),
    Many(Vec<Bound<'py, PyLong>>),
}

impl From<KeepChars> for OneOrMany<String> {
    fn from(keep: KeepChars) -> Self {
        match keep {
            KeepChars::One(s) => OneOrMany::One(s),
            KeepChars::Many(list) => OneOrMany::Many(list),
        }
    }
}

impl From<KeepDigits<'_>> for OneOrMany<String> {
    // str() of the int, so values wider than i64 are matched like any other
    fn from(keep: KeepDigits<'_>) -> Self {
        match keep {
            KeepDigits::One(n) => OneOrMany::One(n.to_string()),
            KeepDigits::Many(list) => {
                OneOrMany::Many(list.iter().map(|n| n.to_string()).collect())
            }
        }
    }
}

fn to_py_err(err: CleanError) -> PyErr {
    match err {
        CleanError::InputType { .. } => PyTypeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn dtype_kind(dtype: Option<&DType<'_>>) -> PyResult<NumericKind> {
    match dtype {
        None => Ok(NumericKind::DEFAULT),
        Some(DType::Name(name)) => name.parse().map_err(to_py_err),
        Some(DType::Type(ty)) => {
            let py = ty.py();
            if ty.is(&py.get_type_bound::<PyLong>()) {
                Ok(NumericKind::Int64)
            } else if ty.is(&py.get_type_bound::<PyFloat>()) {
                Ok(NumericKind::Float64)
            } else {
                Err(PyValueError::new_err(format!("unsupported dtype: {}", ty)))
            }
        }
    }
}

fn strip_options(
    punct: bool,
    keep: Option<OneOrMany<String>>,
    keep_num: Option<OneOrMany<String>>,
) -> StripOptions {
    let mut options = StripOptions::new().remove_punctuation(punct);
    if let Some(keep) = keep {
        options = options.keep(keep);
    }
    if let Some(digits) = keep_num {
        options = options.keep_digits(digits);
    }
    options
}

fn numeric_to_py(py: Python<'_>, value: Numeric) -> PyObject {
    match value {
        Numeric::Int8(v) => v.into_py(py),
        Numeric::Int16(v) => v.into_py(py),
        Numeric::Int32(v) => v.into_py(py),
        Numeric::Int64(v) => v.into_py(py),
        Numeric::UInt8(v) => v.into_py(py),
        Numeric::UInt16(v) => v.into_py(py),
        Numeric::UInt32(v) => v.into_py(py),
        Numeric::UInt64(v) => v.into_py(py),
        Numeric::Float32(v) => v.into_py(py),
        Numeric::Float64(v) => v.into_py(py),
    }
}

/// Strip non-digit characters from each string and cast to `dtype` (`float` by default).
#[pyfunction]
#[pyo3(signature = (values, dtype = None))]
fn to_integer<'py>(
    py: Python<'py>,
    values: Vec<Option<String>>,
    dtype: Option<DType<'py>>,
) -> PyResult<Vec<PyObject>> {
    let kind = dtype_kind(dtype.as_ref())?;
    let result = neat_series::extract_numeric_as(&Series::new(values), kind).map_err(to_py_err)?;
    Ok(result
        .into_values()
        .into_iter()
        .map(|v| numeric_to_py(py, v))
        .collect())
}

/// Remove digits and/or punctuation, keeping the characters in `keep` and digits in `keep_num`.
#[pyfunction]
#[pyo3(signature = (values, punct = true, keep = None, keep_num = None))]
fn to_text<'py>(
    values: Vec<Option<String>>,
    punct: bool,
    keep: Option<KeepChars>,
    keep_num: Option<KeepDigits<'py>>,
) -> PyResult<Vec<Option<String>>> {
    let options = strip_options(punct, keep.map(Into::into), keep_num.map(Into::into));
    let result = neat_series::strip_digits_and_punctuation(&Series::new(values), &options)
        .map_err(to_py_err)?;
    Ok(result.into_values())
}

/// Remove ASCII letters and digits from each string.
#[pyfunction]
#[pyo3(name = "to_specialChr")]
fn to_special_chr(values: Vec<Option<String>>) -> PyResult<Vec<Option<String>>> {
    let result = neat_series::strip_alphanumeric(&Series::new(values)).map_err(to_py_err)?;
    Ok(result.into_values())
}

/// Native accelerator module for neat-series.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(to_integer, m)?)?;
    m.add_function(wrap_pyfunction!(to_text, m)?)?;
    m.add_function(wrap_pyfunction!(to_special_chr, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_strip_options_spread_scalars() {
        let options = strip_options(
            true,
            Some(OneOrMany::One("()".to_string())),
            Some(OneOrMany::One("2".to_string())),
        );
        assert_eq!(options.keep, vec!['(', ')']);
        assert_eq!(options.keep_digits, vec!["2".to_string()]);
    }

    #[test]
    fn test_dtype_accepts_builtin_types() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let int_type = DType::Type(py.get_type_bound::<PyLong>());
            let float_type = DType::Type(py.get_type_bound::<PyFloat>());
            assert_eq!(dtype_kind(Some(&int_type)).unwrap(), NumericKind::Int64);
            assert_eq!(dtype_kind(Some(&float_type)).unwrap(), NumericKind::Float64);
            assert_eq!(dtype_kind(None).unwrap(), NumericKind::Float64);

            let str_type = DType::Type(py.get_type_bound::<pyo3::types::PyString>());
            assert!(dtype_kind(Some(&str_type))
                .unwrap_err()
                .is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_to_integer_with_int_type() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let dtype = DType::Type(py.get_type_bound::<PyLong>());
            let out = to_integer(py, texts(&["123.45", "456.78", "789.0"]), Some(dtype)).unwrap();
            let ints: Vec<i64> = out.iter().map(|v| v.extract(py).unwrap()).collect();
            assert_eq!(ints, vec![12345, 45678, 7890]);
        });
    }

    #[test]
    fn test_big_keep_num_is_noop() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let big = py.eval_bound("10 ** 30", None, None).unwrap();
            let keep_num: KeepDigits = big.extract().unwrap();
            let out = to_text(texts(&["a1b2"]), true, None, Some(keep_num)).unwrap();
            assert_eq!(out, texts(&["ab"]));
        });
    }

    #[test]
    fn test_missing_value_is_type_error() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err = to_special_chr(vec![Some("x1".to_string()), None]).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
        });
    }
}
