// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Progress-driven choreography for a cinematic "universe genesis"
//! sequence.
//!
//! A single normalised progress value in `[0, 1]` drives everything: which
//! narrative phase is active, where the camera is headed, and the visibility,
//! intensity, and shape of every visual layer. Autoplay advances progress
//! at a fixed rate; the user can pause, scrub, or restart at any time.
//!
//! # Key entry points
//!
//! - [`engine::GenesisEngine`] - owns a session and runs the frame pipeline
//! - [`timeline`] - phase classifier, playhead state, and clock
//! - [`camera`] - piecewise camera path and the smoothing rig
//! - [`layers`] - per-layer parameter derivation and point-cloud geometry
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The timeline has exactly one per-frame writer, the clock. After it ticks,
//! an immutable [`timeline::FrameSnapshot`] is fanned out to every layer and
//! to the camera rig; none of them can write back. Everything downstream of
//! the snapshot is a function of it, except the camera rig, which blends
//! toward its target across frames so scrubs never jump-cut.
//!
//! ```no_run
//! use genesis::engine::GenesisEngine;
//! use genesis::options::Options;
//!
//! let mut engine = GenesisEngine::new(Options::default());
//! let frame = engine.frame(1.0 / 60.0);
//! assert_eq!(frame.snapshot.phase, engine.phase());
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod layers;
pub mod options;
pub mod timeline;
pub mod util;
