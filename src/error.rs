use thiserror::Error;

/// Errors returned by [`OrderedMap`](crate::OrderedMap) operations that have no
/// meaningful answer for the current contents of the map.
///
/// Absence of a key is never an error: lookups, [`delete`](crate::OrderedMap::delete),
/// [`floor`](crate::OrderedMap::floor) and [`ceiling`](crate::OrderedMap::ceiling)
/// report it with `Option` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// `min`, `max`, `delete_min` or `delete_max` was called on an empty map.
    #[error("called {operation}() on an empty map")]
    EmptyCollection {
        /// Name of the operation that failed.
        operation: &'static str,
    },

    /// `select` was called with an index outside `0..len`.
    #[error("select index {index} is out of range for a map of length {len}")]
    InvalidArgument {
        /// The requested index.
        index: usize,
        /// Length of the map at the time of the call.
        len: usize,
    },
}

/// A `Result` alias whose error type is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        let empty = Error::EmptyCollection { operation: "min" };
        assert_eq!(empty.to_string(), "called min() on an empty map");

        let invalid = Error::InvalidArgument { index: 7, len: 3 };
        assert_eq!(invalid.to_string(), "select index 7 is out of range for a map of length 3");
    }
}
