/// Returned by [`Tree::insert`][crate::Tree::insert] when the value compares equal
/// to one already stored in the tree. The rejected value is handed back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value {value} is already in the tree")]
pub struct DuplicateValue<T> {
    value: T,
}

impl<T> DuplicateValue<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// The value that was rejected.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Gives the rejected value back to the caller.
    pub fn into_value(self) -> T {
        self.value
    }
}
