pub mod damerau_levenshtein;
pub mod tversky;

// Re-export the metrics with their usual names
pub use damerau_levenshtein::{damerau_levenshtein, damerau_levenshtein_str};
pub use tversky::{tversky, tversky_str, TverskyConfig};
