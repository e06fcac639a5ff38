pub mod descriptive;

pub use descriptive::{
    add_to_mean, combine_means, combine_variances, mean, stdev, subtract_from_mean, sum, variance,
};
