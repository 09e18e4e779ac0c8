//! Insertion-ordered collections of live effects.

use nash_core::EffectId;

/// Opacity below which an effect is no longer drawn and gets pruned.
pub const VISIBILITY_THRESHOLD: f64 = 0.01;

/// A transient visual effect with per-tick growth and decay.
pub trait Effect {
    /// Identity of this effect.
    fn id(&self) -> EffectId;
    /// Current model opacity (0.0 - 1.0).
    fn opacity(&self) -> f64;
    /// Apply one tick of growth and decay.
    fn advance(&mut self);
}

/// Live effects of one kind, in spawn order.
#[derive(Debug, Clone)]
pub struct EffectSet<T> {
    items: Vec<T>,
}

impl<T> Default for EffectSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Effect> EffectSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: T) {
        self.items.push(effect);
    }

    /// Remove the effect with `id`. Returns whether anything was removed;
    /// an absent id leaves the set untouched.
    pub fn remove(&mut self, id: EffectId) -> bool {
        let before = self.items.len();
        self.items.retain(|e| e.id() != id);
        self.items.len() != before
    }

    /// One update pass: advance every effect, then drop the ones that faded
    /// below [`VISIBILITY_THRESHOLD`].
    pub fn advance_and_prune(&mut self) {
        for effect in &mut self.items {
            effect.advance();
        }
        self.items.retain(|e| e.opacity() >= VISIBILITY_THRESHOLD);
    }

    pub fn get(&self, id: EffectId) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: EffectId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
