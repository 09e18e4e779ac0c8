use std::time::Duration;

use nash_core::{EffectId, Point};
use nash_effects::{
    AnimationParams, AnimationState, EffectSet, RippleEffect, WaveEffect, idle_offset,
};

fn ticks(state: &mut AnimationState, n: usize) {
    for _ in 0..n {
        state.tick();
    }
}

#[test]
fn phase_grows_linearly_without_input() {
    let mut state = AnimationState::default();
    for n in 1..=500 {
        state.tick();
        assert!((state.phase() - 0.02 * n as f64).abs() < 1e-9, "tick {n}");
    }
}

#[test]
fn ripple_decay_prunes_after_459_passes() {
    let mut set = EffectSet::new();
    let id = EffectId::FIRST;
    set.push(RippleEffect::new(id, Point::new(1.0, 2.0), Duration::ZERO));
    for _ in 0..458 {
        set.advance_and_prune();
    }
    assert!(set.contains(id));
    set.advance_and_prune();
    assert!(!set.contains(id));
}

#[test]
fn wave_decay_prunes_at_ceil_of_log_ratio() {
    let expected = (0.01f64.ln() / 0.998f64.ln()).ceil() as usize;
    assert_eq!(expected, 2301);

    let mut set = EffectSet::new();
    let id = EffectId::FIRST;
    set.push(WaveEffect::new(id, Point::default(), Duration::ZERO));
    for _ in 0..expected - 1 {
        set.advance_and_prune();
    }
    assert!(set.contains(id));
    set.advance_and_prune();
    assert!(set.is_empty());
}

#[test]
fn idle_offset_ignores_pointer_wave() {
    let mut a = AnimationState::default();
    let mut b = AnimationState::default();
    ticks(&mut a, 10);
    ticks(&mut b, 10);
    for i in 0..25 {
        b.pointer_moved(Point::new(i as f64 * 7.0, 40.0));
    }
    a.pointer_idle();
    b.pointer_idle();
    assert_ne!(a.pointer_wave(), b.pointer_wave());
    assert_eq!(a.gradient_offset(), b.gradient_offset());
    assert_eq!(a.gradient_offset(), idle_offset(a.phase()));
}

#[test]
fn active_offset_depends_on_pointer_and_phase() {
    let mut state = AnimationState::default();
    state.pointer_moved(Point::new(500.0, 300.0));
    let first = state.gradient_offset();
    state.pointer_moved(Point::new(300.0, 300.0));
    assert_ne!(first, state.gradient_offset());

    let mut later = AnimationState::default();
    ticks(&mut later, 17);
    later.pointer_moved(Point::new(500.0, 300.0));
    assert_ne!(first, later.gradient_offset());
}

#[test]
fn pointer_wave_never_decreases() {
    let mut state = AnimationState::default();
    let mut last = state.pointer_wave();
    for i in 0..200 {
        if i % 7 == 0 {
            state.pointer_idle();
        } else {
            state.pointer_moved(Point::new(i as f64, (i * 3) as f64));
        }
        if i % 3 == 0 {
            state.tick();
        }
        assert!(state.pointer_wave() >= last);
        last = state.pointer_wave();
    }
    assert!(last > 0.0);
}

#[test]
fn back_to_back_taps_are_independent() {
    let mut state = AnimationState::default();
    let p = Point::new(100.0, 120.0);
    let q = Point::new(640.0, 80.0);
    let a = state.tap(p);
    let b = state.tap(q);
    assert_ne!(a, b);
    assert_eq!(state.ripples().len(), 2);
    assert_eq!(state.ripples().get(a).map(|r| r.position), Some(p));
    assert_eq!(state.ripples().get(b).map(|r| r.position), Some(q));

    state.tick();
    state.remove_ripple(a);
    let survivor = state.ripples().get(b).cloned();
    assert_eq!(survivor.map(|r| r.size), Some(21.0));
}

#[test]
fn removing_absent_effect_is_noop() {
    let mut state = AnimationState::default();
    state.tap(Point::default());
    let wave = state.create_wave(Point::default());
    state.remove_wave(wave);
    let ripples_before: Vec<_> = state.ripples().iter().cloned().collect();
    state.remove_wave(wave);
    state.remove_ripple(wave);
    let ripples_after: Vec<_> = state.ripples().iter().cloned().collect();
    assert_eq!(ripples_before, ripples_after);
    assert!(state.waves().is_empty());
}

#[test]
fn deferred_removal_expires_ripple_after_lifetime() {
    let mut state = AnimationState::default();
    let id = state.tap(Point::new(50.0, 50.0));
    // 45 ticks of 33 ms = 1485 ms, short of the 1.5 s lifetime
    ticks(&mut state, 45);
    assert!(state.ripples().contains(id));
    state.tick();
    assert!(!state.ripples().contains(id));
}

#[test]
fn deferred_removal_expires_wave_after_lifetime() {
    let mut state = AnimationState::default();
    let id = state.create_wave(Point::new(50.0, 50.0));
    // 90 ticks = 2970 ms
    ticks(&mut state, 90);
    assert!(state.waves().contains(id));
    state.tick();
    assert!(!state.waves().contains(id));
}

#[test]
fn custom_params_drive_the_loop() {
    let params = AnimationParams {
        tick_interval: Duration::from_millis(100),
        phase_step: 0.5,
        ..AnimationParams::default()
    };
    let mut state = AnimationState::new(params);
    let id = state.tap(Point::default());
    ticks(&mut state, 14);
    assert_eq!(state.phase(), 7.0);
    assert!(state.ripples().contains(id));
    state.tick();
    assert!(!state.ripples().contains(id));
}
