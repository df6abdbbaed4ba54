pub mod diff;
pub mod sample;
pub mod utils;

pub use self::diff::diffs;
pub use self::sample::{domain, sample, sample_with};
pub use self::utils::{count_non_finite, finite_range};
