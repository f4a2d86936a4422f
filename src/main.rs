//! Headless driver for the genesis choreography engine.
//!
//! Runs a session at a fixed frame rate without a renderer, logging phase
//! transitions and optionally dumping every frame's derived parameters as
//! JSON.

use std::path::PathBuf;

use genesis::camera::CameraPose;
use genesis::engine::{FrameOutput, GenesisEngine};
use genesis::error::GenesisError;
use genesis::layers::LayerId;
use genesis::options::Options;
use genesis::timeline::{Phase, TickEvent};
use genesis::util::frame_timing::FrameTiming;
use serde::Serialize;

const USAGE: &str = "Usage: genesis [--preset FILE] [--fps N] [--seconds S] \
                     [--start P] [--dump FILE] [--realtime]";

/// Fallback run length when the clock is stopped (rate 0).
const DEFAULT_SECONDS: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
struct Args {
    preset: Option<PathBuf>,
    fps: u32,
    seconds: Option<f32>,
    start: Option<f32>,
    dump: Option<PathBuf>,
    realtime: bool,
    help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            preset: None,
            fps: 60,
            seconds: None,
            start: None,
            dump: None,
            realtime: false,
            help: false,
        }
    }
}

fn value_for(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, GenesisError> {
    args.next().ok_or_else(|| {
        GenesisError::InvalidArgument(format!("{flag} needs a value"))
    })
}

fn number<T: std::str::FromStr>(
    flag: &str,
    raw: &str,
) -> Result<T, GenesisError> {
    raw.parse().map_err(|_| {
        GenesisError::InvalidArgument(format!("{flag}: not a number: {raw}"))
    })
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<Args, GenesisError> {
    let mut parsed = Args::default();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--preset" => {
                parsed.preset = Some(value_for(&flag, &mut args)?.into());
            }
            "--fps" => {
                let fps: u32 = number(&flag, &value_for(&flag, &mut args)?)?;
                if fps == 0 {
                    return Err(GenesisError::InvalidArgument(
                        "--fps must be positive".into(),
                    ));
                }
                parsed.fps = fps;
            }
            "--seconds" => {
                let raw = value_for(&flag, &mut args)?;
                parsed.seconds = Some(number(&flag, &raw)?);
            }
            "--start" => {
                let raw = value_for(&flag, &mut args)?;
                parsed.start = Some(number(&flag, &raw)?);
            }
            "--dump" => {
                parsed.dump = Some(value_for(&flag, &mut args)?.into());
            }
            "--realtime" => parsed.realtime = true,
            "--help" | "-h" => parsed.help = true,
            other => {
                return Err(GenesisError::InvalidArgument(format!(
                    "unknown flag {other}"
                )));
            }
        }
    }
    Ok(parsed)
}

/// Compact per-frame record written by `--dump`.
#[derive(Debug, Serialize)]
struct FrameRecord {
    frame: u64,
    elapsed: f32,
    progress: f32,
    phase: Phase,
    event: TickEvent,
    camera: CameraPose,
    visible: Vec<(LayerId, f32)>,
}

impl From<&FrameOutput> for FrameRecord {
    fn from(out: &FrameOutput) -> Self {
        Self {
            frame: out.snapshot.frame,
            elapsed: out.snapshot.elapsed,
            progress: out.snapshot.progress,
            phase: out.snapshot.phase,
            event: out.event,
            camera: out.camera,
            visible: out
                .layers
                .iter()
                .filter(|p| p.visible)
                .map(|p| (p.layer, p.intensity))
                .collect(),
        }
    }
}

fn run(args: &Args) -> Result<(), GenesisError> {
    let options = match &args.preset {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let seconds = args
        .seconds
        .or_else(|| options.playback.clock().sequence_duration())
        .unwrap_or(DEFAULT_SECONDS);

    let mut engine = GenesisEngine::new(options);
    if let Some(start) = args.start {
        engine.set_progress(start);
    }

    let fixed_dt = 1.0 / args.fps as f32;
    let frames = (seconds * args.fps as f32).ceil().max(0.0) as u64;
    let mut timing = args.realtime.then(|| FrameTiming::new(args.fps));
    let mut records = Vec::new();

    log::info!(
        "running {frames} frames at {} fps from {} ({})",
        args.fps,
        engine.progress(),
        engine.phase().title()
    );

    for _ in 0..frames {
        let dt = match timing.as_mut() {
            Some(timing) => {
                std::thread::sleep(timing.time_until_next_frame());
                timing.end_frame()
            }
            None => fixed_dt,
        };

        let out = engine.frame(dt);
        if let TickEvent::PhaseChanged { to, .. } = out.event {
            log::info!("{}: {}", to.title(), to.subtitle());
        }
        if args.dump.is_some() {
            records.push(FrameRecord::from(&out));
        }
        if out.event == TickEvent::Finished {
            break;
        }
    }

    if let Some(timing) = &timing {
        log::info!("average {:.1} fps", timing.fps());
    }
    log::info!(
        "stopped at {:.3} ({}), {}",
        engine.progress(),
        engine.phase(),
        engine.status().status_line()
    );

    if let Some(path) = &args.dump {
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json)?;
        log::info!("wrote {} frames to {}", records.len(), path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(1);
        }
    };
    if args.help {
        log::info!("{USAGE}");
        return;
    }

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Args, GenesisError> {
        parse_args(line.split_whitespace().map(str::to_owned))
    }

    #[test]
    fn empty_command_line_uses_defaults() {
        assert_eq!(parse("").unwrap(), Args::default());
    }

    #[test]
    fn parses_every_flag() {
        let args = parse(
            "--preset slow.toml --fps 30 --seconds 5 --start 0.4 \
             --dump out.json --realtime",
        )
        .unwrap();
        assert_eq!(args.preset, Some(PathBuf::from("slow.toml")));
        assert_eq!(args.fps, 30);
        assert_eq!(args.seconds, Some(5.0));
        assert_eq!(args.start, Some(0.4));
        assert_eq!(args.dump, Some(PathBuf::from("out.json")));
        assert!(args.realtime);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("--fps").is_err());
        assert!(parse("--fps zero").is_err());
        assert!(parse("--fps 0").is_err());
        assert!(parse("--wat").is_err());
    }

    #[test]
    fn record_lists_only_visible_layers() {
        let mut engine = GenesisEngine::new(Options::default());
        engine.set_progress(0.5);
        let record = FrameRecord::from(&engine.frame(0.0));
        assert_eq!(record.phase, Phase::Horizon);
        assert!(record
            .visible
            .iter()
            .any(|(id, _)| *id == LayerId::EventHorizon));
        assert!(!record.visible.iter().any(|(id, _)| *id == LayerId::Galaxy));
    }
}
