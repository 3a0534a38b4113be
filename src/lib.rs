//! Small data-wrangling utilities.
//!
//! - [`complex`]: a toy complex number with component-wise arithmetic.
//! - [`split`]: a seeded train/validation/test splitter for paired features and labels.
//! - [`states`]: a static lookup between US postal abbreviations and state names.
//!
//! Build with the `python` feature to get the `lambdata` Python extension module.

pub mod common_types;
pub mod complex;
pub mod error;
pub mod split;
pub mod states;

#[cfg(feature = "python")]
mod python;

pub use common_types::{DatasetSplit, Partition};
pub use complex::ComplexNumber;
pub use error::{ErrorKind, LambdataError, Result};
pub use split::{DatasetSplitter, SplitConfig, train_test_split, train_validate_test_split};
pub use states::{STATES, StateLookup, state_abbrev, state_name};
