//! Whole-session behavior through the public engine API.

use genesis::camera::target_at;
use genesis::engine::{GenesisCommand, GenesisEngine};
use genesis::layers::LayerId;
use genesis::options::Options;
use genesis::timeline::{EndBehavior, Phase, PlaybackStatus, TickEvent};

const DT: f32 = 1.0 / 60.0;

fn options() -> Options {
    let mut options = Options::default();
    options.geometry.particle_count = 256;
    options.geometry.galaxy_count = 256;
    options.geometry.spark_count = 64;
    options.geometry.background_count = 64;
    options
}

fn engine_with(rate: f32, end: EndBehavior) -> GenesisEngine {
    let mut options = options();
    options.playback.rate = rate;
    options.playback.end_behavior = end;
    GenesisEngine::new(options)
}

fn visible(engine: &mut GenesisEngine, id: LayerId) -> bool {
    engine
        .frame(0.0)
        .layers
        .iter()
        .any(|p| p.layer == id && p.visible)
}

#[test]
fn autoplay_walks_phases_in_order() {
    let mut engine = engine_with(0.2, EndBehavior::Hold);
    let mut seen = vec![engine.phase()];
    let mut last = engine.progress();

    for _ in 0..(6 * 60) {
        let out = engine.frame(DT);
        assert!(out.snapshot.progress >= last);
        last = out.snapshot.progress;
        if let TickEvent::PhaseChanged { from, to } = out.event {
            assert_eq!(from.index() + 1, to.index());
            seen.push(to);
        }
    }

    assert_eq!(seen, Phase::ALL.to_vec());
    assert!(engine.has_finished());
}

#[test]
fn default_rate_takes_125_seconds() {
    let mut engine = GenesisEngine::new(options());
    for _ in 0..60 {
        let _ = engine.frame(DT);
    }
    assert!((engine.progress() - 0.008).abs() < 1e-5);
}

#[test]
fn loop_wraps_to_exact_zero() {
    let mut engine = engine_with(0.5, EndBehavior::Loop);
    engine.set_progress(0.9);
    let out = engine.frame(0.25);
    assert_eq!(out.event, TickEvent::Looped);
    assert_eq!(engine.progress(), 0.0);
    assert_eq!(engine.phase(), Phase::Ancestral);
    assert!(engine.is_playing());
    assert!(!engine.has_finished());
}

#[test]
fn hold_stops_at_end_until_restart() {
    let mut engine = engine_with(0.5, EndBehavior::Hold);
    engine.set_progress(0.95);
    let out = engine.frame(0.5);
    assert_eq!(out.event, TickEvent::Finished);
    assert_eq!(engine.progress(), 1.0);
    assert_eq!(engine.status(), PlaybackStatus::Finished);

    for _ in 0..10 {
        let _ = engine.frame(DT);
    }
    assert_eq!(engine.progress(), 1.0);

    engine.execute(GenesisCommand::Restart);
    assert_eq!(engine.progress(), 0.0);
    assert_eq!(engine.status(), PlaybackStatus::Playing);
}

#[test]
fn scrub_rearms_finished_session() {
    let mut engine = engine_with(1.0, EndBehavior::Hold);
    let _ = engine.frame(2.0);
    assert!(engine.has_finished());
    engine.set_progress(0.3);
    assert!(!engine.has_finished());
    assert!(engine.is_playing());
    assert_eq!(engine.phase(), Phase::Collapse);
}

#[test]
fn set_progress_clamps_out_of_range() {
    let mut engine = GenesisEngine::new(options());
    engine.set_progress(1.4);
    assert_eq!(engine.progress(), 1.0);
    assert_eq!(engine.phase(), Phase::Genesis);

    engine.set_progress(-0.2);
    assert_eq!(engine.progress(), 0.0);
    assert_eq!(engine.phase(), Phase::Ancestral);

    engine.set_progress(f32::NAN);
    assert_eq!(engine.progress(), 0.0);
}

#[test]
fn scrubbing_is_idempotent() {
    let mut engine = GenesisEngine::new(options());
    engine.set_progress(0.47);
    let once = engine.timeline().clone();
    engine.set_progress(0.47);
    assert_eq!(engine.timeline(), &once);
}

#[test]
fn paused_frames_hold_progress() {
    let mut engine = GenesisEngine::new(options());
    engine.set_progress(0.33);
    engine.toggle_play();
    for _ in 0..120 {
        let out = engine.frame(DT);
        assert_eq!(out.snapshot.progress, 0.33);
    }
    assert!((engine.elapsed() - 2.0).abs() < 1e-3);
}

#[test]
fn camera_glides_to_horizon_target() {
    let mut opts = options();
    opts.camera.shake_scale = 0.0;
    let mut engine = GenesisEngine::new(opts);
    engine.toggle_play();
    engine.set_progress(0.5);

    let target = target_at(0.5);
    assert!((target.z - 10.0).abs() < 1e-5);
    assert!((target.y - 0.5).abs() < 1e-5);

    let first = engine.frame(DT).camera;
    assert!(first.position.z > 11.0, "no jump cut on scrub");

    let mut pose = first;
    for _ in 0..1000 {
        pose = engine.frame(DT).camera;
    }
    assert!((pose.position.z - 10.0).abs() < 1e-3);
    assert!((pose.position.y - 0.5).abs() < 1e-3);
}

#[test]
fn layers_follow_the_story() {
    let mut engine = GenesisEngine::new(options());
    engine.toggle_play();

    engine.set_progress(0.1);
    assert!(visible(&mut engine, LayerId::StarCore));
    assert!(!visible(&mut engine, LayerId::EventHorizon));
    assert!(!visible(&mut engine, LayerId::Galaxy));

    engine.set_progress(0.3);
    assert!(!visible(&mut engine, LayerId::StarCore));
    assert!(visible(&mut engine, LayerId::Shockwave));
    assert!(visible(&mut engine, LayerId::EventHorizon));

    engine.set_progress(0.7);
    assert!(visible(&mut engine, LayerId::Wormhole));
    assert!(visible(&mut engine, LayerId::ElectricArcs));
    assert!(visible(&mut engine, LayerId::TunnelSparks));
    assert!(!visible(&mut engine, LayerId::EventHorizon));

    engine.set_progress(0.95);
    assert!(visible(&mut engine, LayerId::Galaxy));
    assert!(!visible(&mut engine, LayerId::Wormhole));
    assert!(visible(&mut engine, LayerId::BackgroundField));
}

#[test]
fn frames_serialize_to_json() {
    let mut engine = GenesisEngine::new(options());
    let out = engine.frame(DT);
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["snapshot"]["phase"], "ancestral");
    assert_eq!(json["layers"].as_array().map(Vec::len), Some(9));
}
