use crate::types::Index;

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Grow-only arena of per-hand visuals.
///
/// Slots are allocated lazily as new hands appear and are only ever hidden,
/// never destroyed, when fewer hands are detected. The pool length is the
/// historical maximum concurrent hand count. Slot `i` is reused for whichever
/// detection occupies index `i` this frame; there is no cross-frame hand
/// identity tracking.
#[derive(Debug)]
pub struct HandPool<V> {
    slots: Vec<Slot<V>>,
    active: usize,
}

#[derive(Debug)]
struct Slot<V> {
    visual: V,
    visible: bool,
}

impl<V> Default for HandPool<V> {
    fn default() -> Self {
        HandPool::new()
    }
}

impl<V> HandPool<V> {
    pub fn new() -> Self {
        HandPool {
            slots: Vec::new(),
            active: 0,
        }
    }

    /// Number of allocated slots. Only ever grows.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of currently visible slots.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Allocate slots until at least `n` exist. `alloc` is called with the
    /// slot index, so allocation order is deterministic and a given visual is
    /// reused for the same slot frame-to-frame.
    pub fn ensure_capacity(&mut self, n: usize, mut alloc: impl FnMut(Index) -> V) {
        while self.slots.len() < n {
            let visual = alloc(self.slots.len());
            self.slots.push(Slot {
                visual,
                visible: false,
            });
        }
    }

    /// Mark the first `n` slots visible and the rest hidden, without
    /// deallocating anything. Idempotent.
    pub fn set_active_count(&mut self, n: usize) {
        self.active = n.min(self.slots.len());
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.visible = i < self.active;
        }
    }

    pub fn is_visible(&self, slot: Index) -> bool {
        self.slots.get(slot).map_or(false, |s| s.visible)
    }

    pub fn visual(&self, slot: Index) -> Option<&V> {
        self.slots.get(slot).map(|s| &s.visual)
    }

    pub fn visual_mut(&mut self, slot: Index) -> Option<&mut V> {
        self.slots.get_mut(slot).map(|s| &mut s.visual)
    }

    /// Iterate over all slots as `(index, visible, visual)`.
    pub fn iter(&self) -> impl Iterator<Item = (Index, bool, &V)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.visible, &s.visual))
    }

    /// Iterate over the visible slots only.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (Index, &mut V)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(i, s)| (i, &mut s.visual))
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////
