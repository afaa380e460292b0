#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Edits in the order `calculate_diff` found them.
pub type EditScript<T> = Vec<Edit<T>>;

/// Operation carried by an [`Edit`].
///
/// `Move` is reserved for a future move-detection pass: `calculate_diff`
/// only ever produces `Insert`, `Substitute` and `Delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditKind {
    Insert,
    Substitute,
    Delete,
    Move,
}

/// A single step of an edit script.
///
/// `destination` is an index into the destination sequence for `Insert` and
/// `Substitute`, and an index into the origin sequence for `Delete`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edit<T> {
    action: EditKind,
    value: T,
    destination: usize,
}

impl<T> Edit<T> {
    pub fn new(action: EditKind, value: T, destination: usize) -> Self {
        Edit {
            action,
            value,
            destination,
        }
    }

    pub fn insert(value: T, destination: usize) -> Self {
        Edit::new(EditKind::Insert, value, destination)
    }

    pub fn substitute(value: T, destination: usize) -> Self {
        Edit::new(EditKind::Substitute, value, destination)
    }

    pub fn delete(value: T, destination: usize) -> Self {
        Edit::new(EditKind::Delete, value, destination)
    }

    pub fn action(&self) -> EditKind {
        self.action
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn destination(&self) -> usize {
        self.destination
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
