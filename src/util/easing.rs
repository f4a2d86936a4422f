//! Windowed interpolation primitives.
//!
//! Every fade, flash, and intensity ramp in the sequence is a composition of
//! [`smoothstep`] calls. [`Window`] packages the common "active between `a`
//! and `b` with soft edges" shape so layers can describe their lifetime
//! declaratively.

/// Cubic Hermite ease over `[lo, hi]`.
///
/// `value` is clamped to the interval, normalised to `t ∈ [0, 1]`, and
/// mapped through `t²(3 − 2t)`. The result has zero slope at both edges.
///
/// A degenerate interval (`hi <= lo`) is a hard step at `lo`.
#[inline]
#[must_use]
pub fn smoothstep(lo: f32, hi: f32, value: f32) -> f32 {
    if hi <= lo {
        return if value < lo { 0.0 } else { 1.0 };
    }
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Rising edge: 0 before `lo`, 1 after `hi`.
#[inline]
#[must_use]
pub fn fade_in(lo: f32, hi: f32, value: f32) -> f32 {
    smoothstep(lo, hi, value)
}

/// Falling edge: 1 before `lo`, 0 after `hi`.
#[inline]
#[must_use]
pub fn fade_out(lo: f32, hi: f32, value: f32) -> f32 {
    1.0 - smoothstep(lo, hi, value)
}

/// Linear interpolation from `a` to `b` by `t` (unclamped).
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-out `1 − (1 − t)³`, input clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let omt = 1.0 - t.clamp(0.0, 1.0);
    1.0 - omt * omt * omt
}

/// A progress interval in which an effect is active, with eased edges.
///
/// `eval` ramps up over `[start, start + fade_in]` and down over
/// `[end - fade_out, end]`. Zero-width fades produce hard edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Progress at which the rising edge begins.
    pub start: f32,
    /// Progress at which the falling edge completes.
    pub end: f32,
    /// Width of the rising edge.
    pub fade_in: f32,
    /// Width of the falling edge.
    pub fade_out: f32,
}

impl Window {
    /// Window with the same fade width on both edges.
    #[must_use]
    pub const fn new(start: f32, end: f32, fade: f32) -> Self {
        Self {
            start,
            end,
            fade_in: fade,
            fade_out: fade,
        }
    }

    /// Window with hard edges: 1 on `[start, end)`, 0 elsewhere.
    #[must_use]
    pub const fn hard(start: f32, end: f32) -> Self {
        Self::new(start, end, 0.0)
    }

    /// Window with independent rising and falling edge widths.
    #[must_use]
    pub const fn with_fades(
        start: f32,
        end: f32,
        fade_in: f32,
        fade_out: f32,
    ) -> Self {
        Self {
            start,
            end,
            fade_in,
            fade_out,
        }
    }

    /// Window weight at `progress`, in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn eval(&self, progress: f32) -> f32 {
        fade_in(self.start, self.start + self.fade_in, progress)
            * fade_out(self.end - self.fade_out, self.end, progress)
    }

    /// Whether `progress` lies strictly inside the window.
    #[inline]
    #[must_use]
    pub fn contains(&self, progress: f32) -> bool {
        progress > self.start && progress < self.end
    }
}
