//! The fixed track catalog.
//!
//! An ordered, read-only list of storage paths baked into the firmware.
//! Track library management is out of scope; the catalog never changes at
//! runtime.

/// Read-only, ordered list of track paths.
#[derive(Debug, Clone, Copy)]
pub struct TrackCatalog {
    paths: &'static [&'static str],
}

impl TrackCatalog {
    /// Wrap a static path list.
    #[must_use]
    pub const fn new(paths: &'static [&'static str]) -> Self {
        Self { paths }
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path of entry `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.paths.get(index).copied()
    }

    /// Cyclic successor of `index`. Requires a non-empty catalog.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // Safety: divisor forced >= 1
    pub fn next_index(&self, index: usize) -> usize {
        debug_assert!(!self.is_empty());
        let len = self.paths.len().max(1);
        index.wrapping_add(1) % len
    }

    /// Cyclic predecessor of `index`. Requires a non-empty catalog.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // Safety: divisor forced >= 1
    pub fn prev_index(&self, index: usize) -> usize {
        debug_assert!(!self.is_empty());
        let len = self.paths.len().max(1);
        index.checked_sub(1).unwrap_or(len.saturating_sub(1)) % len
    }
}

#[cfg(test)]
mod tests {
    use super::TrackCatalog;

    const PATHS: &[&str] = &["/a.wav", "/b.wav", "/c.wav"];

    #[test]
    fn next_wraps_to_zero() {
        let cat = TrackCatalog::new(PATHS);
        assert_eq!(cat.next_index(0), 1);
        assert_eq!(cat.next_index(2), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let cat = TrackCatalog::new(PATHS);
        assert_eq!(cat.prev_index(1), 0);
        assert_eq!(cat.prev_index(0), 2);
    }

    #[test]
    fn repeating_next_len_times_returns_to_start() {
        let cat = TrackCatalog::new(PATHS);
        let mut idx = 1;
        for _ in 0..cat.len() {
            idx = cat.next_index(idx);
        }
        assert_eq!(idx, 1);
    }

    #[test]
    fn next_and_prev_stay_in_range() {
        let cat = TrackCatalog::new(PATHS);
        for i in 0..cat.len() {
            assert!(cat.next_index(i) < cat.len());
            assert!(cat.prev_index(i) < cat.len());
        }
    }

    #[test]
    fn get_out_of_range_is_none() {
        let cat = TrackCatalog::new(PATHS);
        assert_eq!(cat.get(3), None);
        assert_eq!(cat.get(1), Some("/b.wav"));
    }
}
