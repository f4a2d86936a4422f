use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of each phase, in phase order.
const PHASE_UPPER_BOUNDS: [f32; 5] = [0.20, 0.40, 0.60, 0.75, 1.00];

/// Named stretch of the sequence, used for narrative and HUD labeling.
///
/// Phases are ordered; `Phase::of` is total over `[0, 1]` and a value
/// exactly on a threshold belongs to the earlier phase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The Population III star, `[0.00, 0.20]`.
    #[default]
    Ancestral,
    /// Supernova and compression into the helix, `(0.20, 0.40]`.
    Collapse,
    /// Hovering at the event horizon, `(0.40, 0.60]`.
    Horizon,
    /// Wormhole tunneling, `(0.60, 0.75]`.
    Traversal,
    /// Emergence into the child universe, `(0.75, 1.00]`.
    Genesis,
}

impl Phase {
    /// All phases in sequence order.
    pub const ALL: [Phase; 5] = [
        Phase::Ancestral,
        Phase::Collapse,
        Phase::Horizon,
        Phase::Traversal,
        Phase::Genesis,
    ];

    /// Classify a progress value. Out-of-range input is clamped first.
    #[must_use]
    pub fn of(progress: f32) -> Self {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self::ALL
            .into_iter()
            .zip(PHASE_UPPER_BOUNDS)
            .find_map(|(phase, upper)| (p <= upper).then_some(phase))
            .unwrap_or(Phase::Genesis)
    }

    /// Position of this phase in [`Phase::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Progress interval `(start, end]` covered by this phase. The first
    /// phase also includes its start.
    #[must_use]
    pub fn range(self) -> (f32, f32) {
        let i = self.index();
        let start = if i == 0 {
            0.0
        } else {
            PHASE_UPPER_BOUNDS[i - 1]
        };
        (start, PHASE_UPPER_BOUNDS[i])
    }

    /// Short upper-case label used on the timeline scale.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ancestral => "ANCESTRAL",
            Self::Collapse => "COLLAPSE",
            Self::Horizon => "HORIZON",
            Self::Traversal => "TRAVERSAL",
            Self::Genesis => "GENESIS",
        }
    }

    /// Headline shown while the phase is active.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Ancestral => "THE ANCESTRAL STAR",
            Self::Collapse => "DATA COMPRESSION",
            Self::Horizon => "THE HORIZON",
            Self::Traversal => "TRAVERSAL",
            Self::Genesis => "GENESIS",
        }
    }

    /// Sub-headline shown above the title.
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Ancestral => "POPULATION III // 13.6 BYA",
            Self::Collapse => "SUPERNOVA EVENT // ENCODING...",
            Self::Horizon => "SINGULARITY // TRANSMISSION",
            Self::Traversal => "WORMHOLE TUNNELING",
            Self::Genesis => "CHILD UNIVERSE // INHERITANCE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
