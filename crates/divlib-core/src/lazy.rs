//! Lazy-load bookkeeping for gallery thumbnails
//!
//! Rendered cards start with a pending image source that is only
//! applied once the card approaches the viewport. The viewport watching
//! itself lives in the UI layer (an intersection observer with a 120px
//! trigger margin); this module owns the one-shot pending-source state,
//! which is rebuilt wholesale after every render pass since the cards
//! are replaced wholesale too.

use std::collections::BTreeMap;

/// Extra margin beyond the viewport edge at which loading triggers
pub const LAZY_MARGIN_PX: u32 = 120;

/// One-shot pending-source registry keyed by card index.
#[derive(Debug, Clone, Default)]
pub struct LazyLoader {
    pending: BTreeMap<usize, String>,
    eager: bool,
}

impl LazyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader for environments without viewport observation: `rebuild`
    /// hands every source back immediately.
    pub fn eager() -> Self {
        Self {
            pending: BTreeMap::new(),
            eager: true,
        }
    }

    /// Replace all watches with `sources`. Returns the sources to apply
    /// right away (all of them in eager mode, none otherwise).
    pub fn rebuild(
        &mut self,
        sources: impl IntoIterator<Item = (usize, String)>,
    ) -> Vec<(usize, String)> {
        self.pending = sources.into_iter().collect();
        if self.eager {
            std::mem::take(&mut self.pending).into_iter().collect()
        } else {
            Vec::new()
        }
    }

    /// A card entered the trigger zone: hand over its pending source and
    /// stop watching it. Subsequent calls for the same index are no-ops.
    pub fn enter(&mut self, index: usize) -> Option<String> {
        self.pending.remove(&index)
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains_key(&index)
    }
}
