//! # Python Bindings
//!
//! PyO3 bindings for the arithmetic engine.
//!
//! ## Python API
//!
//! ```python
//! from arith_engine import Calculator
//!
//! calc = Calculator()
//! calc.add(2, 3)            # 5.0
//! calc.divide(20, 4)        # 5.0
//! calc.average([1, 2, 3])   # 2.0 (not recorded)
//! calc.get_history()        # [5.0, 5.0]
//! calc.clear_history()
//!
//! calc.divide(1, 0)         # raises ZeroDivisionError
//! calc.add(float("nan"), 1) # raises ValueError
//! ```

use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

use crate::core::{CalcError, CalculatorConfig};
use crate::engine::Calculator;

impl From<CalcError> for PyErr {
    fn from(err: CalcError) -> PyErr {
        match err {
            CalcError::DivisionByZero => PyZeroDivisionError::new_err(err.to_string()),
            CalcError::InvalidArgument(_) | CalcError::EmptyInput => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// Validated arithmetic with a result history
///
/// Args:
///     history_capacity: Number of history slots to pre-allocate (default: 0)
#[pyclass(name = "Calculator")]
pub struct PyCalculator {
    inner: Calculator,
}

#[pymethods]
impl PyCalculator {
    #[new]
    #[pyo3(signature = (history_capacity=0))]
    fn new(history_capacity: usize) -> Self {
        let config = CalculatorConfig::new().with_history_capacity(history_capacity);
        Self {
            inner: Calculator::with_config(config),
        }
    }

    /// Return a + b and record it
    fn add(&mut self, a: f64, b: f64) -> PyResult<f64> {
        Ok(self.inner.add(a, b)?)
    }

    /// Return a - b and record it
    fn subtract(&mut self, a: f64, b: f64) -> PyResult<f64> {
        Ok(self.inner.subtract(a, b)?)
    }

    /// Return a / b and record it
    fn divide(&mut self, a: f64, b: f64) -> PyResult<f64> {
        Ok(self.inner.divide(a, b)?)
    }

    /// Return the arithmetic mean of numbers (not recorded)
    fn average(&self, numbers: Vec<f64>) -> PyResult<f64> {
        Ok(self.inner.average(&numbers)?)
    }

    /// Return a copy of the recorded results, oldest first
    fn get_history(&self) -> Vec<f64> {
        self.inner.history()
    }

    /// Forget all recorded results
    fn clear_history(&mut self) {
        self.inner.clear_history();
    }

    fn __len__(&self) -> usize {
        self.inner.history_len()
    }

    fn __repr__(&self) -> String {
        match self.inner.last_result() {
            Some(last) => format!(
                "Calculator(history={}, last={})",
                self.inner.history_len(),
                last
            ),
            None => "Calculator(history=0)".to_string(),
        }
    }
}

/// Arithmetic engine Python module
#[pymodule]
fn arith_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCalculator>()?;

    m.add("__doc__", "Validated arithmetic with a chronological result history")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
