//! Vector configuration.

/// Construction options for [`Vector`](crate::Vector).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorConfig {
    /// Capacity reserved in every column at construction, in elements
    pub initial_capacity: usize,
    /// Release column allocations on `clear()` instead of keeping them
    pub shrink_on_clear: bool,
}

impl VectorConfig {
    /// Returns a config reserving `initial_capacity` elements per column.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Default::default()
        }
    }
}
