use crate::error::{Error, Result};

/// Sums a series of values.
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Computes the mean of a series.
///
/// Returns an error if the series is empty.
///
/// # Examples
///
/// ```
/// use textdist::stats::descriptive::mean;
///
/// assert_eq!(mean(&[13.0, 14.0, 15.0, 8.0, 20.0]).unwrap(), 14.0);
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::invalid_input("mean: the given series is empty"));
    }

    Ok(sum(data) / data.len() as f64)
}

/// Folds one additional value into a known mean without revisiting the
/// series. `nb_values` is the number of values the mean was computed over.
pub fn add_to_mean(previous_mean: f64, nb_values: usize, value: f64) -> f64 {
    previous_mean + (value - previous_mean) / (nb_values as f64 + 1.0)
}

/// Removes a value from a known mean; inverse of [`add_to_mean`].
/// `nb_values` is the number of values the mean was computed over, including
/// the one being removed.
pub fn subtract_from_mean(previous_mean: f64, nb_values: usize, value: f64) -> f64 {
    (previous_mean * nb_values as f64 - value) / (nb_values as f64 - 1.0)
}

/// Pools the means of two series into the mean of their concatenation.
pub fn combine_means(mean_a: f64, nb_values_a: usize, mean_b: f64, nb_values_b: usize) -> f64 {
    (mean_a * nb_values_a as f64 + mean_b * nb_values_b as f64)
        / (nb_values_a + nb_values_b) as f64
}

/// Computes the population variance of a series.
///
/// Returns an error if the series is empty.
pub fn variance(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::invalid_input("variance: the given series is empty"));
    }

    let mean = sum(data) / data.len() as f64;
    let squared_deviations: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();

    Ok(squared_deviations / data.len() as f64)
}

/// Computes the population standard deviation of a series.
///
/// Returns an error if the series is empty.
pub fn stdev(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}

/// Pools the population variances of two series into the variance of their
/// concatenation, using each mean's displacement from the combined mean.
pub fn combine_variances(
    mean_a: f64,
    variance_a: f64,
    nb_values_a: usize,
    mean_b: f64,
    variance_b: f64,
    nb_values_b: usize,
) -> f64 {
    let combined_mean = combine_means(mean_a, nb_values_a, mean_b, nb_values_b);
    let na = nb_values_a as f64;
    let nb = nb_values_b as f64;

    (na * (variance_a + (mean_a - combined_mean).powi(2))
        + nb * (variance_b + (mean_b - combined_mean).powi(2)))
        / (na + nb)
}
