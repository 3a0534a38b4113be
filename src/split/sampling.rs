//! Uniform random two-way partitioning of paired features and labels.

use crate::common_types::Partition;
use crate::error::{LambdataError, Result};
use rand::Rng;
use rand::seq::SliceRandom; // Fisher-Yates shuffle

// Absorbs float noise such as 0.7 * 10 = 7.000000000000001 before rounding up.
const SIZE_TOLERANCE: f64 = 1e-9;

/// Number of records that go to the held-out side for `n` records.
///
/// Rounds up, so any non-zero fraction of a non-empty dataset holds out at least one record.
pub fn held_out_count(n: usize, fraction: f64) -> usize {
    let raw = (n as f64 * fraction - SIZE_TOLERANCE).ceil();
    (raw.max(0.0) as usize).min(n)
}

/// Randomly splits `(features, labels)` into `(remainder, held_out)`.
///
/// `fraction` is the share of records that go to `held_out` and must lie in `[0, 1]`.
/// Records keep their label; the order inside each side follows the shuffle.
pub fn train_test_split<X, Y, R>(
    features: Vec<X>,
    labels: Vec<Y>,
    fraction: f64,
    rng: &mut R,
) -> Result<(Partition<X, Y>, Partition<X, Y>)>
where
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&fraction) {
        // Also rejects NaN, which fails every comparison
        return Err(LambdataError::InvalidArgumentType(format!(
            "Split fraction must lie in [0, 1], got {fraction}"
        )));
    }
    if features.len() != labels.len() {
        return Err(LambdataError::LengthMismatch {
            features: features.len(),
            labels: labels.len(),
        });
    }

    let mut rows: Vec<(X, Y)> = features.into_iter().zip(labels).collect();
    rows.shuffle(rng);

    let n_held_out = held_out_count(rows.len(), fraction);
    let split_at = rows.len() - n_held_out;
    // split_off(n) keeps [0..n) in `rows` and returns [n..len)
    let held_out = rows.split_off(split_at);

    let (rest_x, rest_y) = rows.into_iter().unzip();
    let (held_x, held_y) = held_out.into_iter().unzip();
    Ok((Partition::new(rest_x, rest_y), Partition::new(held_x, held_y)))
}
