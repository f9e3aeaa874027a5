// Clock, phase schedule, light choreography and idle motion.

use badge_core::lighting::{self, pop_envelope};
use badge_core::*;
use std::f64::consts::TAU;

fn schedule() -> PhaseSchedule {
    TimelineConfig::default().phases
}

#[test]
fn clock_origin_is_the_first_tick() {
    let mut clock = Clock::new(0.033);
    assert!(!clock.is_started());
    let first = clock.tick(5_000.0);
    assert!(clock.is_started());
    assert_eq!(first, FrameTime { elapsed: 0.0, dt: 0.0 });
    let next = clock.tick(5_016.0);
    assert!((next.elapsed - 0.016).abs() < 1e-12);
    assert!((next.dt - 0.016).abs() < 1e-12);
}

#[test]
fn clock_clamps_large_and_negative_deltas() {
    let mut clock = Clock::new(0.033);
    clock.tick(0.0);
    // Backgrounded tab: a two second gap.
    let t = clock.tick(2_000.0);
    assert_eq!(t.dt, 0.033);
    assert_eq!(t.elapsed, 2.0);
    let back = clock.tick(1_990.0);
    assert_eq!(back.dt, 0.0);
    let nan = clock.tick(f64::NAN);
    assert_eq!(nan.dt, 0.0);
}

#[test]
fn exactly_one_phase_is_active_at_any_time() {
    let s = schedule();
    for ms in 0..5_000 {
        let t = ms as f64 / 1000.0;
        let active: Vec<Phase> = [Phase::Pop, Phase::Travel, Phase::Settle]
            .into_iter()
            .filter(|p| {
                let (start, end) = s.window(*p).unwrap();
                t >= start && t < end
            })
            .chain((t >= s.settle_end).then_some(Phase::Steady))
            .collect();
        assert_eq!(active.len(), 1, "t={t} active={active:?}");
        assert_eq!(active[0], s.phase_at(t));
    }
}

#[test]
fn phase_boundaries_match_defaults() {
    let s = schedule();
    assert_eq!(s.phase_at(0.0), Phase::Pop);
    assert_eq!(s.phase_at(0.15), Phase::Pop);
    assert_eq!(s.phase_at(0.30), Phase::Travel);
    assert_eq!(s.phase_at(1.0), Phase::Travel);
    assert_eq!(s.phase_at(1.60), Phase::Settle);
    assert_eq!(s.phase_at(1.8), Phase::Settle);
    assert_eq!(s.phase_at(2.0), Phase::Steady);
    assert_eq!(s.phase_at(1e6), Phase::Steady);

    assert_eq!(s.travel_progress(0.2), 0.0);
    assert!((s.travel_progress(0.95) - 0.5).abs() < 1e-12);
    assert_eq!(s.travel_progress(1.7), 1.0);
    assert_eq!(s.sample(3.0).progress, 1.0);
}

#[test]
fn only_pop_travel_and_settle_are_intro() {
    let s = schedule();
    assert!(!Phase::Loading.is_intro());
    assert!(!Phase::Steady.is_intro());
    for t in [0.0, 0.29, 0.3, 1.59, 1.6, 1.99] {
        assert!(s.phase_at(t).is_intro(), "t={t}");
    }
    assert!(!s.phase_at(2.0).is_intro());
}

#[test]
fn scheduler_never_moves_backwards() {
    let mut sched = PhaseScheduler::new(schedule());
    assert_eq!(sched.current(), Phase::Loading);
    assert_eq!(sched.advance(0.1).phase, Phase::Pop);
    assert_eq!(sched.advance(2.5).phase, Phase::Steady);
    let back = sched.advance(1.0);
    assert_eq!(back.phase, Phase::Steady);
    assert_eq!(sched.current(), Phase::Steady);
    sched.reset();
    assert_eq!(sched.current(), Phase::Loading);
}

#[test]
fn schedule_validation_rejects_overlap() {
    let bad = PhaseSchedule {
        pop_end: 0.3,
        travel_end: 0.3,
        settle_end: 2.0,
    };
    assert!(matches!(
        bad.validate(),
        Err(BadgeError::InvalidConfig { .. })
    ));
    assert!(schedule().validate().is_ok());
}

#[test]
fn pop_spikes_then_returns_to_baseline() {
    let timeline = TimelineConfig::default();
    let cfg = LightConfig::default();
    let s = timeline.phases;

    assert_eq!(pop_envelope(0.0, &s, timeline.pop_decay_sec), 0.0);
    assert!((pop_envelope(0.15, &s, timeline.pop_decay_sec) - 0.5).abs() < 1e-12);
    assert!((pop_envelope(0.36, &s, timeline.pop_decay_sec) - 0.5).abs() < 1e-9);
    assert_eq!(pop_envelope(0.5, &s, timeline.pop_decay_sec), 0.0);

    let at_pop = lighting::sample(0.15, s.sample(0.15), &cfg, &timeline);
    assert!(at_pop.key_intensity > cfg.key_intensity);
    assert!(at_pop.rim_intensity > cfg.rim_intensity);
    assert!(at_pop.exposure > cfg.exposure);

    let travel = lighting::sample(1.0, s.sample(1.0), &cfg, &timeline);
    assert_eq!(travel.key_intensity, cfg.key_intensity);
    assert_eq!(travel.rim_intensity, cfg.rim_intensity);
    assert_eq!(travel.exposure, cfg.exposure);
    assert_eq!(travel.ambient_intensity, cfg.ambient_intensity);
}

#[test]
fn glint_sweeps_the_key_light_during_settle() {
    let timeline = TimelineConfig::default();
    let cfg = LightConfig::default();
    let s = timeline.phases;
    let start = s.sample(1.6);
    let end = s.sample(1.999);
    assert_eq!(start.phase, Phase::Settle);
    assert!((lighting::glint_angle(start, &cfg) - cfg.glint_start).abs() < 1e-6);
    assert!(lighting::glint_angle(end, &cfg) > lighting::glint_angle(start, &cfg));
    assert_eq!(lighting::glint_angle(s.sample(1.0), &cfg), 0.0);
    assert_eq!(lighting::glint_angle(s.sample(3.0), &cfg), 0.0);
}

#[test]
fn drift_is_bounded_periodic_and_pure() {
    let timeline = TimelineConfig::default();
    let cfg = LightConfig::default();
    for i in 0..400 {
        let t = i as f64 * 0.1;
        let a = lighting::drift_angle(t, &cfg);
        assert!(a.abs() <= cfg.drift_amplitude + 1e-6);
        let b = lighting::drift_angle(t + cfg.drift_period_sec, &cfg);
        assert!((a - b).abs() < 1e-4);
        let s = timeline.phases.sample(t);
        assert_eq!(
            lighting::sample(t, s, &cfg, &timeline),
            lighting::sample(t, s, &cfg, &timeline)
        );
    }
    // Still moving once steady.
    let s = timeline.phases.sample(10.0);
    let p1 = lighting::sample(10.0, s, &cfg, &timeline).key_position;
    let p2 = lighting::sample(11.0, s, &cfg, &timeline).key_position;
    assert_ne!(p1, p2);
}

#[test]
fn idle_spin_is_monotonic_in_configured_direction() {
    for direction in [SpinDirection::Clockwise, SpinDirection::CounterClockwise] {
        let cfg = MotionConfig {
            spin_direction: direction,
            ..MotionConfig::default()
        };
        let mut idle = IdleMotion::new();
        let mut prev = idle.angle();
        for _ in 0..600 {
            idle.step(1.0 / 60.0, false, &cfg);
            let a = idle.angle();
            assert!((a - prev) * direction.sign() > 0.0);
            prev = a;
        }
        let expected = direction.sign() * cfg.spin_rate() * 10.0;
        assert!((idle.angle() - expected).abs() < 1e-9);
    }
}

#[test]
fn paused_idle_is_bit_for_bit_frozen() {
    let cfg = MotionConfig {
        wobble: Some(WobbleConfig::default()),
        ..MotionConfig::default()
    };
    let mut idle = IdleMotion::new();
    for _ in 0..37 {
        idle.step(0.016, false, &cfg);
    }
    let (angle, phase) = (idle.angle().to_bits(), idle.wobble_phase().to_bits());
    for _ in 0..1000 {
        idle.step(0.033, true, &cfg);
    }
    assert_eq!(idle.angle().to_bits(), angle);
    assert_eq!(idle.wobble_phase().to_bits(), phase);
}

#[test]
fn wobble_stays_bounded_and_in_sync() {
    let w = WobbleConfig::default();
    let cfg = MotionConfig {
        wobble: Some(w.clone()),
        ..MotionConfig::default()
    };
    let mut idle = IdleMotion::new();
    for _ in 0..10_000 {
        idle.step(0.016, false, &cfg);
        let t = idle.transform(&cfg);
        assert!(t.bob.abs() <= w.bob + 1e-6);
        assert!(t.pitch.abs() <= w.tilt + 1e-6);
        assert!((0.0..TAU).contains(&idle.wobble_phase()));
    }
    // One wobble period advances the phase by a full turn.
    let mut a = IdleMotion::new();
    for _ in 0..400 {
        a.step(0.01, false, &cfg);
    }
    let p = a.wobble_phase();
    assert!(p < 1e-6 || (TAU - p) < 1e-6, "phase {p}");
}

#[test]
fn intro_pose_turns_a_quarter_and_lands_flat() {
    let cfg = MotionConfig::default();
    let s = schedule();
    let start = idle::intro_transform(0.0, &s, &cfg);
    assert_eq!(start.yaw, 0.0);
    let end = idle::intro_transform(2.0, &s, &cfg);
    assert!((end.yaw + cfg.intro_yaw).abs() < 1e-6);
    let mid = idle::intro_transform(1.0, &s, &cfg);
    assert!(mid.roll.abs() <= cfg.intro_tilt * 0.6 + 1e-6);
    // Tilt is held after travel ends.
    assert_eq!(
        idle::intro_transform(1.7, &s, &cfg).roll,
        idle::intro_transform(1.9, &s, &cfg).roll
    );

    let steady = IdleMotion::new().transform(&cfg);
    assert_eq!((steady.pitch, steady.roll, steady.bob), (0.0, 0.0, 0.0));
    let wrapped = (-(cfg.intro_yaw as f64)).rem_euclid(TAU) as f32;
    assert!((steady.yaw - wrapped).abs() < 1e-5);
}

#[test]
fn spin_direction_parses() {
    assert_eq!("cw".parse::<SpinDirection>(), Ok(SpinDirection::Clockwise));
    assert_eq!(" CCW ".parse::<SpinDirection>(), Ok(SpinDirection::CounterClockwise));
    assert!("sideways".parse::<SpinDirection>().is_err());
}
