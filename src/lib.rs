pub mod error;
pub mod helpers;
pub mod metrics;
pub mod stats;

pub use error::{Error, Result};
pub use metrics::{damerau_levenshtein, damerau_levenshtein_str, tversky, tversky_str};
