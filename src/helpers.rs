use std::collections::HashMap;

use rand::Rng;

use crate::error::{Error, Result};

/// Normalizes a string into a sequence of symbols.
///
/// Metrics in this crate operate on slices of symbols rather than on raw
/// strings, so that arbitrary token sequences can be compared with the same
/// code paths.
///
/// # Examples
///
/// ```
/// use textdist::helpers::seq;
///
/// assert_eq!(seq("abc"), vec!['a', 'b', 'c']);
/// ```
pub fn seq(target: &str) -> Vec<char> {
    target.chars().collect()
}

/// Squeezes a sequence by dropping consecutive duplicate symbols.
///
/// # Examples
///
/// ```
/// use textdist::helpers::squeeze;
///
/// assert_eq!(squeeze(&['a', 'a', 'b', 'b', 'c']), vec!['a', 'b', 'c']);
/// ```
pub fn squeeze<T: PartialEq + Clone>(sequence: &[T]) -> Vec<T> {
    let mut squeezed: Vec<T> = Vec::with_capacity(sequence.len());

    for symbol in sequence {
        if squeezed.last() != Some(symbol) {
            squeezed.push(symbol.clone());
        }
    }

    squeezed
}

/// String form of [`squeeze`].
pub fn squeeze_str(target: &str) -> String {
    squeeze(&seq(target)).into_iter().collect()
}

/// Builds an index mapping each symbol of `first` to the symbol of `second`
/// found at the same position.
///
/// Returns an error if the two strings don't have the same length.
pub fn translation(first: &str, second: &str) -> Result<HashMap<char, char>> {
    let first = seq(first);
    let second = seq(second);

    if first.len() != second.len() {
        return Err(Error::invalid_input(
            "translation: given strings don't have the same length",
        ));
    }

    Ok(first.into_iter().zip(second).collect())
}

/// Returns a random index drawn according to the given weights.
///
/// The weights must sum to 1. When floating-point rounding leaves the drawn
/// target uncovered, the last index is returned.
///
/// # Panics
///
/// Panics if `weights` is empty.
pub fn weighted_random_index(weights: &[f64]) -> usize {
    let target = rand::thread_rng().gen::<f64>();
    let mut cumulated = 0.0;

    for (i, &weight) in weights.iter().enumerate() {
        cumulated += weight;

        if target <= cumulated {
            return i;
        }
    }

    weights.len() - 1
}
