//! Three-way train/validation/test splitting.
//!
//! The split happens in two random passes over the data:
//!
//! 1. `(100 - train - validate) / 100` of the records are held out as the test set.
//! 2. `validate / (train + validate)` of what remains becomes the validation set,
//!    and the rest is the training set.
//!
//! Randomness is never global. A seed builds a generator local to the call, and
//! [`DatasetSplitter::split_with_rng`] accepts any caller-owned generator.

pub mod sampling;

pub use sampling::train_test_split;

use crate::common_types::DatasetSplit;
use crate::error::{LambdataError, Result};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub(crate) const TRAIN_LABEL: &str = "Train Set";
pub(crate) const VALIDATE_LABEL: &str = "Validation Set";

/// Percentages and seed for a three-way split.
///
/// Defaults to 60% train, 20% validation (so 20% test) and no seed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitConfig {
    pub train_percent: f64,
    pub validate_percent: f64,
    pub seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            train_percent: 60.0,
            validate_percent: 20.0,
            seed: None,
        }
    }
}

impl SplitConfig {
    pub fn new(train_percent: f64, validate_percent: f64) -> Self {
        SplitConfig {
            train_percent,
            validate_percent,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_train_percent(mut self, train_percent: f64) -> Self {
        self.train_percent = train_percent;
        self
    }

    pub fn with_validate_percent(mut self, validate_percent: f64) -> Self {
        self.validate_percent = validate_percent;
        self
    }

    /// Builds a config from textual arguments, e.g. values read from a form or a
    /// command line owned by the caller.
    ///
    /// Checks run in this order: each percentage parses as a number, each is
    /// finite and non-negative, their sum is at most 100, the seed parses as an
    /// integer, and finally their sum is not zero.
    pub fn from_args(train: &str, validate: &str, seed: Option<&str>) -> Result<Self> {
        let mut config = SplitConfig::new(
            parse_percent(TRAIN_LABEL, train)?,
            parse_percent(VALIDATE_LABEL, validate)?,
        );
        config.check_range()?;
        config.seed = seed.map(parse_seed).transpose()?;
        config.check_nonzero()?;
        Ok(config)
    }

    /// Checks the percentages, in order: each is a finite number, neither is
    /// negative, their sum is at most 100, and their sum is not zero.
    pub fn validate(&self) -> Result<()> {
        self.check_range()?;
        self.check_nonzero()
    }

    /// Everything [`validate`](Self::validate) checks except the zero sum.
    pub fn check_range(&self) -> Result<()> {
        check_percent(TRAIN_LABEL, self.train_percent)?;
        check_percent(VALIDATE_LABEL, self.validate_percent)?;

        if self.train_percent + self.validate_percent > 100.0 {
            return Err(LambdataError::PercentageOverflow {
                train: self.train_percent,
                validate: self.validate_percent,
            });
        }
        Ok(())
    }

    /// Fails with [`LambdataError::ZeroDivision`] when the percentages sum to zero.
    pub fn check_nonzero(&self) -> Result<()> {
        if self.train_percent + self.validate_percent == 0.0 {
            return Err(LambdataError::ZeroDivision);
        }
        Ok(())
    }

    /// Share of all records held out for testing.
    pub fn test_fraction(&self) -> f64 {
        (100.0 - (self.train_percent + self.validate_percent)) / 100.0
    }

    /// Share of the non-test records that go to validation.
    pub fn validate_fraction(&self) -> Result<f64> {
        let combined = self.train_percent + self.validate_percent;
        if combined == 0.0 {
            return Err(LambdataError::ZeroDivision);
        }
        Ok(self.validate_percent / combined)
    }
}

fn parse_percent(label: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        LambdataError::InvalidArgumentType(format!("Non-numeric {label} Percentage passed = {raw}"))
    })
}

fn parse_seed(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    trimmed.parse::<u64>().map_err(|_| match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => LambdataError::InvalidArgumentType(format!("Negative seed passed = {raw}")),
        _ => LambdataError::InvalidArgumentType(format!("Non-integer seed passed = {raw}")),
    })
}

fn check_percent(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LambdataError::InvalidArgumentType(format!(
            "Non-numeric {label} Percentage passed = {value}"
        )));
    }
    if value < 0.0 {
        return Err(LambdataError::InvalidArgumentType(format!(
            "Negative {label} Percentage passed = {value}"
        )));
    }
    Ok(())
}

/// Splits features and labels into train, test and validation sets.
#[derive(Debug, Clone)]
pub struct DatasetSplitter {
    config: SplitConfig,
}

impl DatasetSplitter {
    /// Validates `config` up front so a constructed splitter can only fail on its inputs.
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(DatasetSplitter { config })
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Splits using the configured seed, or OS entropy when there is none.
    ///
    /// Seeding only affects this call.
    pub fn split<X, Y>(&self, features: Vec<X>, labels: Vec<Y>) -> Result<DatasetSplit<X, Y>> {
        let mut rng = match self.config.seed {
            Some(seed) => {
                tracing::debug!(seed, "seeding dataset split");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        self.split_with_rng(features, labels, &mut rng)
    }

    /// Splits drawing randomness from `rng`; the configured seed is ignored.
    pub fn split_with_rng<X, Y, R>(
        &self,
        features: Vec<X>,
        labels: Vec<Y>,
        rng: &mut R,
    ) -> Result<DatasetSplit<X, Y>>
    where
        R: Rng + ?Sized,
    {
        if features.len() != labels.len() {
            return Err(LambdataError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        let total = features.len();

        let test_fraction = self.config.test_fraction();
        let validate_fraction = self.config.validate_fraction()?;

        let (remainder, test) = train_test_split(features, labels, test_fraction, rng)?;
        let (train, validate) =
            train_test_split(remainder.features, remainder.labels, validate_fraction, rng)?;

        let split = DatasetSplit::from_partitions(train, test, validate);
        let (n_train, n_test, n_val) = split.sizes();
        tracing::debug!(
            "Dataset split: {} training, {} test, {} validation (of {})",
            n_train,
            n_test,
            n_val,
            total,
        );
        Ok(split)
    }
}

/// Splits `(features, labels)` into train, test and validation sets per `config`.
///
/// Shorthand for `DatasetSplitter::new(config)?.split(features, labels)`.
pub fn train_validate_test_split<X, Y>(
    features: Vec<X>,
    labels: Vec<Y>,
    config: SplitConfig,
) -> Result<DatasetSplit<X, Y>> {
    DatasetSplitter::new(config)?.split(features, labels)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn rows(n: u32) -> (Vec<u32>, Vec<u32>) {
        let features: Vec<u32> = (0..n).collect();
        let labels = features.iter().map(|x| x + 1000).collect();
        (features, labels)
    }

    #[test]
    fn test_default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.train_percent, 60.0);
        assert_eq!(config.validate_percent, 20.0);
        assert_eq!(config.seed, None);
        assert_relative_eq!(config.test_fraction(), 0.2);
        assert_relative_eq!(config.validate_fraction().unwrap(), 0.25);
    }

    #[test]
    fn test_default_split_sizes() {
        let (x, y) = rows(10);
        let split = train_validate_test_split(x, y, SplitConfig::default().with_seed(42))
            .expect("default config is valid");
        assert_eq!(split.sizes(), (6, 2, 2));
        assert_eq!(split.y_train.len(), 6);
        assert_eq!(split.y_test.len(), 2);
        assert_eq!(split.y_val.len(), 2);
    }

    #[test]
    fn test_same_seed_same_partitions() {
        let config = SplitConfig::new(70.0, 15.0).with_seed(1234);
        let (x1, y1) = rows(57);
        let (x2, y2) = rows(57);
        let first = train_validate_test_split(x1, y1, config).unwrap();
        let second = train_validate_test_split(x2, y2, config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_injected_rng_is_used() {
        let splitter = DatasetSplitter::new(SplitConfig::default()).unwrap();
        let (x1, y1) = rows(30);
        let (x2, y2) = rows(30);
        let first = splitter.split_with_rng(x1, y1, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = splitter.split_with_rng(x2, y2, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_numeric_train_percent() {
        let err = SplitConfig::from_args("a", "20", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
        assert!(err.to_string().contains("Non-numeric"));
        assert!(err.to_string().contains("Train Set"));
    }

    #[test]
    fn test_non_numeric_validate_percent() {
        let err = SplitConfig::from_args("60", "twenty", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Non-numeric Validation Set Percentage passed = twenty"
        );
    }

    #[test]
    fn test_nan_percent_is_non_numeric() {
        let err = SplitConfig::new(f64::NAN, 20.0).validate().unwrap_err();
        assert!(err.to_string().contains("Non-numeric"));
    }

    #[test]
    fn test_negative_percent_rejected() {
        let err = SplitConfig::new(60.0, -5.0).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
        assert!(err.to_string().starts_with("Negative"));
    }

    #[test]
    fn test_non_integer_seed() {
        let err = SplitConfig::from_args("60", "20", Some("1.5")).unwrap_err();
        assert_eq!(err.to_string(), "Non-integer seed passed = 1.5");
    }

    #[test]
    fn test_negative_seed_has_its_own_message() {
        let err = SplitConfig::from_args("60", "20", Some("-3")).unwrap_err();
        assert_eq!(err.to_string(), "Negative seed passed = -3");
    }

    #[test]
    fn test_overflow_reported_before_bad_seed() {
        let err = SplitConfig::from_args("70", "40", Some("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PercentageOverflow);
        assert!(err.to_string().contains("> 100"));
    }

    #[test]
    fn test_bad_seed_reported_before_zero_sum() {
        let err = SplitConfig::from_args("0", "0", Some("x")).unwrap_err();
        assert_eq!(err.to_string(), "Non-integer seed passed = x");

        let err = SplitConfig::from_args("0", "0", Some("7")).unwrap_err();
        assert_eq!(err, LambdataError::ZeroDivision);
    }

    #[test]
    fn test_from_args_accepts_valid_input() {
        let config = SplitConfig::from_args(" 70 ", "10", Some("3")).unwrap();
        assert_eq!(config, SplitConfig::new(70.0, 10.0).with_seed(3));
    }

    #[test]
    fn test_percentages_over_100() {
        let (x, y) = rows(10);
        let err = train_validate_test_split(x, y, SplitConfig::new(70.0, 40.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PercentageOverflow);
        assert!(err.to_string().contains("> 100"));
    }

    #[test]
    fn test_zero_percentages_fail_fast() {
        let (x, y) = rows(10);
        let err = train_validate_test_split(x, y, SplitConfig::new(0.0, 0.0)).unwrap_err();
        assert_eq!(err, LambdataError::ZeroDivision);
    }

    #[test]
    fn test_length_mismatch() {
        let splitter = DatasetSplitter::new(SplitConfig::default()).unwrap();
        let err = splitter.split(vec![1, 2, 3], vec![1, 2]).unwrap_err();
        assert_eq!(err, LambdataError::LengthMismatch { features: 3, labels: 2 });
    }

    #[test]
    fn test_full_percentages_leave_no_test_set() {
        let (x, y) = rows(20);
        let split = train_validate_test_split(x, y, SplitConfig::new(80.0, 20.0).with_seed(5)).unwrap();
        assert!(split.x_test.is_empty());
        assert_eq!(split.sizes(), (16, 0, 4));
    }

    #[test]
    fn test_train_only() {
        let (x, y) = rows(12);
        let split = train_validate_test_split(x, y, SplitConfig::new(100.0, 0.0)).unwrap();
        assert_eq!(split.sizes(), (12, 0, 0));
    }

    #[test]
    fn test_into_parts_order() {
        let (x, y) = rows(10);
        let split = train_validate_test_split(x, y, SplitConfig::default().with_seed(3)).unwrap();
        let expected = split.clone();
        let (x_train, x_test, x_val, y_train, y_test, y_val) = split.into_parts();
        assert_eq!(x_train, expected.x_train);
        assert_eq!(x_test, expected.x_test);
        assert_eq!(x_val, expected.x_val);
        assert_eq!(y_train, expected.y_train);
        assert_eq!(y_test, expected.y_test);
        assert_eq!(y_val, expected.y_val);
    }

    fn percentages() -> impl Strategy<Value = (u32, u32)> {
        (0u32..=100).prop_flat_map(|train| (Just(train), 0u32..=(100 - train)))
    }

    proptest! {
        #[test]
        fn prop_partitions_cover_input_exactly_once(
            n in 0u32..200,
            (train, validate) in percentages(),
            seed in any::<u64>(),
        ) {
            prop_assume!(train + validate > 0);
            let (x, y) = rows(n);
            let config = SplitConfig::new(train as f64, validate as f64).with_seed(seed);
            let split = train_validate_test_split(x, y, config).unwrap();

            prop_assert_eq!(split.total_len(), n as usize);
            prop_assert_eq!(split.x_train.len(), split.y_train.len());
            prop_assert_eq!(split.x_test.len(), split.y_test.len());
            prop_assert_eq!(split.x_val.len(), split.y_val.len());

            let mut seen: Vec<u32> = split
                .x_train
                .iter()
                .chain(&split.x_test)
                .chain(&split.x_val)
                .copied()
                .collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());

            for (xs, ys) in [
                (&split.x_train, &split.y_train),
                (&split.x_test, &split.y_test),
                (&split.x_val, &split.y_val),
            ] {
                for (x, y) in xs.iter().zip(ys.iter()) {
                    prop_assert_eq!(*y, x + 1000);
                }
            }
        }

        #[test]
        fn prop_seeded_split_is_deterministic(n in 0u32..100, seed in any::<u64>()) {
            let config = SplitConfig::default().with_seed(seed);
            let (x1, y1) = rows(n);
            let (x2, y2) = rows(n);
            let first = train_validate_test_split(x1, y1, config).unwrap();
            let second = train_validate_test_split(x2, y2, config).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
