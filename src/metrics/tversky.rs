use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::helpers::seq;

/// Parameters of the Tversky index.
#[derive(Debug, Clone)]
pub struct TverskyConfig {
    /// Weight applied to the symbols only found in the first operand.
    pub alpha: f64,
    /// Weight applied to the symbols only found in the second operand.
    pub beta: f64,
    /// Whether to compute the symmetric variant of the index.
    pub symmetric: bool,
}

impl TverskyConfig {
    /// Creates a config with default values: `alpha = 1.0`, `beta = 1.0`,
    /// asymmetric variant.
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            symmetric: false,
        }
    }

    /// Customizes the alpha parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Customizes the beta parameter.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Selects the symmetric variant of the index.
    pub fn symmetric(mut self) -> Self {
        self.symmetric = true;
        self
    }
}

impl Default for TverskyConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn intersection_size<T: Eq + Hash>(x: &HashSet<&T>, y: &HashSet<&T>) -> f64 {
    x.intersection(y).count() as f64
}

fn difference_size<T: Eq + Hash>(x: &HashSet<&T>, y: &HashSet<&T>) -> f64 {
    x.difference(y).count() as f64
}

/// Computes the Tversky index between two sequences, seen as sets of their
/// distinct symbols.
///
/// With `alpha = beta = 1` the asymmetric variant reduces to the Jaccard
/// index; with `alpha = beta = 0.5` it reduces to the Dice coefficient.
/// Comparing two empty sequences yields NaN.
///
/// Returns an error if either parameter is negative.
///
/// # Examples
///
/// ```
/// use textdist::metrics::tversky::{tversky, TverskyConfig};
///
/// let config = TverskyConfig::new();
/// let index = tversky(&config, &['a', 'b', 'c'], &['b', 'c', 'd']).unwrap();
/// assert!((index - 0.5).abs() < 1e-10);
/// ```
pub fn tversky<T: Eq + Hash>(config: &TverskyConfig, x: &[T], y: &[T]) -> Result<f64> {
    if config.alpha < 0.0 || config.beta < 0.0 {
        return Err(Error::invalid_input(
            "tversky: alpha & beta parameters should be >= 0",
        ));
    }

    let x: HashSet<&T> = x.iter().collect();
    let y: HashSet<&T> = y.iter().collect();

    let shared = intersection_size(&x, &y);
    let x_only = difference_size(&x, &y);
    let y_only = difference_size(&y, &x);

    if config.symmetric {
        let a = x_only.min(y_only);
        let b = x_only.max(y_only);

        Ok(shared / (shared + config.beta * (config.alpha * a + (config.alpha - 1.0).powf(b))))
    } else {
        Ok(shared / (shared + config.alpha * x_only + config.beta * y_only))
    }
}

/// Computes the Tversky index between two strings, compared as sets of their
/// characters.
pub fn tversky_str(config: &TverskyConfig, x: &str, y: &str) -> Result<f64> {
    tversky(config, &seq(x), &seq(y))
}
