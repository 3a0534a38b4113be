//! This module contains the data structures shared by the dataset splitting helpers.

/// One partition of a dataset: the records and, index for index, their labels.
///
/// - `X`: The type of a feature record (e.g., `Vec<f64>`, a struct, a row id).
/// - `Y`: The type of a label (e.g., `i32`, `String`, an enum).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition<X, Y> {
    pub features: Vec<X>,
    pub labels: Vec<Y>,
}

impl<X, Y> Partition<X, Y> {
    pub fn new(features: Vec<X>, labels: Vec<Y>) -> Self {
        Partition { features, labels }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// The outcome of a three-way split.
///
/// Every input record lands in exactly one of `x_train`, `x_test`, `x_val`,
/// and its label lands at the same position of the matching `y_*` collection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatasetSplit<X, Y> {
    pub x_train: Vec<X>,
    pub x_test: Vec<X>,
    pub x_val: Vec<X>,
    pub y_train: Vec<Y>,
    pub y_test: Vec<Y>,
    pub y_val: Vec<Y>,
}

impl<X, Y> DatasetSplit<X, Y> {
    pub fn from_partitions(
        train: Partition<X, Y>,
        test: Partition<X, Y>,
        validate: Partition<X, Y>,
    ) -> Self {
        DatasetSplit {
            x_train: train.features,
            x_test: test.features,
            x_val: validate.features,
            y_train: train.labels,
            y_test: test.labels,
            y_val: validate.labels,
        }
    }

    /// Consumes the split into `(X_train, X_test, X_val, y_train, y_test, y_val)`.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(self) -> (Vec<X>, Vec<X>, Vec<X>, Vec<Y>, Vec<Y>, Vec<Y>) {
        (self.x_train, self.x_test, self.x_val, self.y_train, self.y_test, self.y_val)
    }

    /// Row counts as `(train, test, validate)`.
    pub fn sizes(&self) -> (usize, usize, usize) {
        (self.x_train.len(), self.x_test.len(), self.x_val.len())
    }

    pub fn total_len(&self) -> usize {
        self.x_train.len() + self.x_test.len() + self.x_val.len()
    }
}
