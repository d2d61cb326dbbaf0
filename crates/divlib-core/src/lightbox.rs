//! Lightbox state machine
//!
//! Holds the single "current index" into the full, unfiltered gallery
//! sequence. Closed is `current == None`; every operation besides
//! `open` requires the open state. Navigation wraps circularly in both
//! directions.

/// Modal viewer state: closed, or open at an index into the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    current: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Index of the displayed record, while open.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Open at `index`. Out-of-range indices are ignored and the state
    /// is left unchanged.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Step back with wraparound. Returns the new index, or `None` when
    /// closed or the gallery is empty.
    pub fn show_prev(&mut self, len: usize) -> Option<usize> {
        let current = self.current?;
        if len == 0 {
            return None;
        }
        let index = (current + len - 1) % len;
        self.current = Some(index);
        Some(index)
    }

    /// Step forward with wraparound. Returns the new index, or `None`
    /// when closed or the gallery is empty.
    pub fn show_next(&mut self, len: usize) -> Option<usize> {
        let current = self.current?;
        if len == 0 {
            return None;
        }
        let index = (current + 1) % len;
        self.current = Some(index);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn test_open_within_bounds() {
        let mut lightbox = Lightbox::new();
        assert!(lightbox.open(2, 5));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn test_open_out_of_bounds_ignored() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(5, 5));
        assert!(!lightbox.is_open());
        assert!(!lightbox.open(0, 0));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_close_clears_index() {
        let mut lightbox = Lightbox::new();
        lightbox.open(1, 3);
        lightbox.close();
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn test_next_wraps_to_start() {
        let mut lightbox = Lightbox::new();
        lightbox.open(4, 5);
        assert_eq!(lightbox.show_next(5), Some(0));
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 5);
        assert_eq!(lightbox.show_prev(5), Some(4));
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut lightbox = Lightbox::new();
        lightbox.open(1, 3);
        for _ in 0..3 {
            lightbox.show_next(3);
        }
        assert_eq!(lightbox.current(), Some(1));
        for _ in 0..3 {
            lightbox.show_prev(3);
        }
        assert_eq!(lightbox.current(), Some(1));
    }

    #[test]
    fn test_navigation_requires_open() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.show_next(5), None);
        assert_eq!(lightbox.show_prev(5), None);
    }

    #[test]
    fn test_single_item_wraps_onto_itself() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 1);
        assert_eq!(lightbox.show_next(1), Some(0));
        assert_eq!(lightbox.show_prev(1), Some(0));
    }
}
