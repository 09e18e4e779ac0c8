//! Animation state management.

use std::time::Duration;

use nash_core::{EffectId, Point, Vector};
use tracing::{debug, trace};

use crate::collection::EffectSet;
use crate::effects::ripple::RIPPLE_LIFETIME;
use crate::effects::wave::WAVE_LIFETIME;
use crate::effects::{RippleEffect, WaveEffect};
use crate::gradient::{self, GradientPoints, OffsetTransition};
use crate::params::AnimationParams;
use crate::removal::{DeferredRemovals, EffectKind};

/// Everything the backdrop animates.
///
/// The host calls [`tick`](Self::tick) on a fixed interval and forwards
/// pointer events; handlers run serially, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct AnimationState {
    params: AnimationParams,
    /// Phase accumulator driving all periodic motion.
    phase: f64,
    /// Grows with every pointer move and is never reset.
    pointer_wave: f64,
    /// Last known pointer position.
    pointer: Point,
    /// Target gradient offset in points.
    gradient_offset: Vector,
    /// Eased offset actually fed into the gradient.
    offset_transition: OffsetTransition,
    ripples: EffectSet<RippleEffect>,
    waves: EffectSet<WaveEffect>,
    removals: DeferredRemovals,
    next_id: EffectId,
    /// Logical clock, advanced by one tick interval per tick.
    elapsed: Duration,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(AnimationParams::default())
    }
}

impl AnimationState {
    /// Create a new animation state. The pointer starts at the reference
    /// center, so the initial offset is zero.
    pub fn new(params: AnimationParams) -> Self {
        let pointer = params.center;
        Self {
            params,
            phase: 0.0,
            pointer_wave: 0.0,
            pointer,
            gradient_offset: Vector::ZERO,
            offset_transition: OffsetTransition::settled(Vector::ZERO),
            ripples: EffectSet::new(),
            waves: EffectSet::new(),
            removals: DeferredRemovals::default(),
            next_id: EffectId::FIRST,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance one tick: step the phase and the clock, run due deferred
    /// removals, then the per-tick update pass.
    pub fn tick(&mut self) {
        self.phase += self.params.phase_step;
        self.elapsed += self.params.tick_interval;

        for removal in self.removals.take_due(self.elapsed) {
            let removed = match removal.kind {
                EffectKind::Ripple => self.ripples.remove(removal.id),
                EffectKind::Wave => self.waves.remove(removal.id),
            };
            if !removed {
                trace!(
                    id = removal.id.get(),
                    kind = ?removal.kind,
                    "deferred removal found nothing"
                );
            }
        }

        self.update_effects();
    }

    /// Per-tick growth and decay of every live effect, followed by pruning
    /// of the ones that faded out.
    pub fn update_effects(&mut self) {
        self.ripples.advance_and_prune();
        self.waves.advance_and_prune();
    }

    /// Pointer moved over the surface.
    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer = position;
        let offset = gradient::active_offset(position, self.params.center, self.phase);
        self.set_offset(offset);
        self.pointer_wave += self.params.pointer_wave_step;
    }

    /// Pointer left the surface. The pointer-wave accumulator keeps its value
    /// so the residual motion persists.
    pub fn pointer_idle(&mut self) {
        debug!(phase = self.phase, "pointer idle");
        self.set_offset(gradient::idle_offset(self.phase));
    }

    /// A tap spawns a ripple.
    pub fn tap(&mut self, position: Point) -> EffectId {
        self.create_ripple(position)
    }

    /// Spawn a ripple at `position` and schedule its removal once its
    /// transition completes.
    pub fn create_ripple(&mut self, position: Point) -> EffectId {
        let id = EffectId::take_next(&mut self.next_id);
        self.ripples.push(RippleEffect::new(id, position, self.elapsed));
        self.removals
            .schedule(self.elapsed + RIPPLE_LIFETIME, EffectKind::Ripple, id);
        debug!(id = id.get(), x = position.x, y = position.y, "ripple spawned");
        id
    }

    /// Spawn a radial glow at `position` and schedule its removal once its
    /// transition completes.
    pub fn create_wave(&mut self, position: Point) -> EffectId {
        let id = EffectId::take_next(&mut self.next_id);
        self.waves.push(WaveEffect::new(id, position, self.elapsed));
        self.removals
            .schedule(self.elapsed + WAVE_LIFETIME, EffectKind::Wave, id);
        debug!(id = id.get(), x = position.x, y = position.y, "wave spawned");
        id
    }

    /// Remove a ripple by id. Absent ids are ignored.
    pub fn remove_ripple(&mut self, id: EffectId) {
        self.ripples.remove(id);
    }

    /// Remove a wave by id. Absent ids are ignored.
    pub fn remove_wave(&mut self, id: EffectId) {
        self.waves.remove(id);
    }

    /// Drop every live effect. Pending deferred removals stay queued and
    /// become no-ops.
    pub fn clear_effects(&mut self) {
        self.ripples.clear();
        self.waves.clear();
    }

    /// Gradient control points for the current frame.
    pub fn gradient(&self) -> GradientPoints {
        gradient::derive_gradient(self.phase, self.presented_offset(), self.pointer_wave)
    }

    /// Gradient offset after easing.
    pub fn presented_offset(&self) -> Vector {
        self.offset_transition.value(self.elapsed)
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn pointer_wave(&self) -> f64 {
        self.pointer_wave
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Target gradient offset, before easing.
    pub fn gradient_offset(&self) -> Vector {
        self.gradient_offset
    }

    pub fn ripples(&self) -> &EffectSet<RippleEffect> {
        &self.ripples
    }

    pub fn waves(&self) -> &EffectSet<WaveEffect> {
        &self.waves
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Deferred removals not yet fired.
    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    fn set_offset(&mut self, offset: Vector) {
        self.gradient_offset = offset;
        self.offset_transition
            .retarget(offset, self.elapsed, self.params.gradient_transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_at_rest() {
        let state = AnimationState::default();
        assert_eq!(state.phase(), 0.0);
        assert_eq!(state.pointer_wave(), 0.0);
        assert_eq!(state.pointer(), Point::new(400.0, 300.0));
        assert_eq!(state.gradient_offset(), Vector::ZERO);
        assert!(state.ripples().is_empty());
        assert!(state.waves().is_empty());
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut state = AnimationState::default();
        state.tick();
        state.tick();
        assert_eq!(state.elapsed(), Duration::from_millis(66));
    }

    #[test]
    fn test_pointer_moved_sets_offset_and_wave() {
        let mut state = AnimationState::default();
        state.pointer_moved(Point::new(450.0, 300.0));
        assert_eq!(state.pointer(), Point::new(450.0, 300.0));
        assert_eq!(state.gradient_offset(), Vector::new(50.0, 20.0));
        assert_eq!(state.pointer_wave(), 0.05);
    }

    #[test]
    fn test_pointer_idle_keeps_wave() {
        let mut state = AnimationState::default();
        state.pointer_moved(Point::new(10.0, 10.0));
        state.pointer_moved(Point::new(20.0, 10.0));
        let wave = state.pointer_wave();
        state.pointer_idle();
        assert_eq!(state.pointer_wave(), wave);
        assert_eq!(state.gradient_offset(), gradient::idle_offset(state.phase()));
    }

    #[test]
    fn test_offset_change_is_eased() {
        let mut state = AnimationState::default();
        state.pointer_moved(Point::new(800.0, 300.0));
        // nothing has elapsed since the move, so the presented offset is unchanged
        assert_eq!(state.presented_offset(), Vector::ZERO);
        for _ in 0..30 {
            state.tick();
        }
        // 990 ms later the 800 ms transition has settled
        assert_eq!(state.presented_offset(), state.gradient_offset());
    }

    #[test]
    fn test_tap_spawns_ripple_only() {
        let mut state = AnimationState::default();
        let id = state.tap(Point::new(5.0, 5.0));
        assert!(state.ripples().contains(id));
        assert!(state.waves().is_empty());
    }

    #[test]
    fn test_ids_are_unique_across_kinds() {
        let mut state = AnimationState::default();
        let a = state.create_ripple(Point::default());
        let b = state.create_wave(Point::default());
        let c = state.create_ripple(Point::default());
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut state = AnimationState::default();
        let id = state.create_wave(Point::default());
        state.remove_wave(id);
        state.remove_wave(id);
        state.remove_ripple(id);
        assert!(state.waves().is_empty());
    }

    #[test]
    fn test_clear_effects() {
        let mut state = AnimationState::default();
        state.create_ripple(Point::default());
        state.create_wave(Point::default());
        state.clear_effects();
        assert!(state.ripples().is_empty());
        assert!(state.waves().is_empty());
        assert_eq!(state.pending_removals(), 2);
        // pending removals still fire without complaint
        for _ in 0..100 {
            state.tick();
        }
        assert_eq!(state.pending_removals(), 0);
    }
}
