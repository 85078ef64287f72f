//! One-pole lowpass filtering of interleaved sample buffers.
//!
//! A single-pole IIR lowpass with the difference equation:
//!
//! ```text
//! y[n] = a * x[n] + (1 - a) * y[n-1]
//! ```
//!
//! where `a = cutoff / (cutoff + sample_rate)` and `y[-1] = 0`.
//!
//! The coefficient is the plain smoothing form, not frequency-pre-warped,
//! so the -3 dB point only approximates `cutoff` when `cutoff` is well
//! below the sample rate. One multiply-accumulate per sample, 6 dB/octave
//! rolloff, zero latency.
//!
//! Multi-channel audio is filtered by [`LowPassBank`], which runs one
//! independent [`OnePole`] per channel across an interleaved slice. The
//! filtering is in place: each sample is overwritten with its filtered
//! value, so the previous frame's *filtered* output survives only in the
//! per-channel filter state, never in the buffer itself.

use crate::buffer::SampleBuffer;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Errors from invalid lowpass parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// Cutoff frequency was zero, negative, or non-finite.
    InvalidCutoff(f32),
    /// Coefficient sample rate was zero.
    ZeroSampleRate,
    /// Channel count was zero.
    ZeroChannels,
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCutoff(hz) => {
                write!(f, "cutoff frequency must be positive and finite, got {hz}")
            }
            Self::ZeroSampleRate => write!(f, "coefficient sample rate must be at least 1 Hz"),
            Self::ZeroChannels => write!(f, "channel count must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}

/// One-pole (6 dB/oct) lowpass filter for a single channel.
///
/// Holds the one piece of state the in-place recurrence needs: the previous
/// filtered output.
#[derive(Debug, Clone)]
pub struct OnePole {
    coeff: f32,
    state: f32,
}

impl OnePole {
    /// Create a filter from a cutoff frequency and sample rate, both in Hz.
    ///
    /// The coefficient `cutoff / (cutoff + sample_rate)` lands in `(0, 1)`
    /// for any positive, finite arguments. Validation of the arguments is
    /// the caller's job ([`LowPassBank::new`] does it for buffer-level use).
    pub fn from_cutoff(cutoff_hz: f32, sample_rate: f32) -> Self {
        Self {
            coeff: cutoff_hz / (cutoff_hz + sample_rate),
            state: 0.0,
        }
    }

    /// Process one sample through the filter.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        // y[n] = a * x[n] + (1 - a) * y[n-1]
        self.state = self.coeff * input + (1.0 - self.coeff) * self.state;
        self.state
    }

    /// Reset filter state to zero (cold start).
    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    /// The smoothing coefficient `a`.
    pub fn coeff(&self) -> f32 {
        self.coeff
    }
}

/// Lowpass parameters for a whole-buffer filter pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassConfig {
    /// Cutoff frequency in Hz. Must be positive and finite.
    pub cutoff_hz: f32,
    /// Sample rate used for the coefficient, in Hz.
    ///
    /// `None` derives the coefficient from the buffer's actual sample rate,
    /// which is what you want. `Some(rate)` pins it to a nominal rate
    /// instead; older single-rate tools computed their coefficient from a
    /// configured constant rather than the decoded file, and this
    /// reproduces that behavior for comparison.
    pub coeff_sample_rate: Option<u32>,
}

impl LowPassConfig {
    /// Config with the given cutoff, coefficient derived from the buffer's
    /// sample rate.
    pub fn new(cutoff_hz: f32) -> Self {
        Self {
            cutoff_hz,
            coeff_sample_rate: None,
        }
    }
}

impl Default for LowPassConfig {
    fn default() -> Self {
        Self::new(500.0)
    }
}

/// One independent [`OnePole`] per channel, processing interleaved samples.
///
/// Channels never share state: frame `n` of channel `c` depends only on
/// frame `n-1` of channel `c`. The bank holds its state across calls, so
/// interleaved data can be fed in frame-aligned blocks of any size.
#[derive(Debug, Clone)]
pub struct LowPassBank {
    filters: Vec<OnePole>,
}

impl LowPassBank {
    /// Create a bank of `channels` filters sharing one coefficient.
    pub fn new(channels: u16, cutoff_hz: f32, sample_rate: u32) -> Result<Self, FilterError> {
        if channels == 0 {
            return Err(FilterError::ZeroChannels);
        }
        if !cutoff_hz.is_finite() || cutoff_hz <= 0.0 {
            return Err(FilterError::InvalidCutoff(cutoff_hz));
        }
        if sample_rate == 0 {
            return Err(FilterError::ZeroSampleRate);
        }

        let filter = OnePole::from_cutoff(cutoff_hz, sample_rate as f32);
        Ok(Self {
            filters: vec![filter; channels as usize],
        })
    }

    /// Number of channels the bank filters.
    pub fn channels(&self) -> usize {
        self.filters.len()
    }

    /// The shared smoothing coefficient `a`.
    pub fn coeff(&self) -> f32 {
        self.filters[0].coeff()
    }

    /// Filter an interleaved slice in place, frame by frame.
    ///
    /// Slices must be frame-aligned: `samples.len()` a multiple of the
    /// channel count. Debug builds assert this.
    pub fn process_interleaved(&mut self, samples: &mut [f32]) {
        let channels = self.filters.len();
        debug_assert_eq!(samples.len() % channels, 0, "partial frame in block");

        for frame in samples.chunks_exact_mut(channels) {
            for (filter, sample) in self.filters.iter_mut().zip(frame) {
                *sample = filter.process(*sample);
            }
        }
    }

    /// Reset every channel's state to zero.
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }
}

/// Apply a one-pole lowpass to every channel of a buffer, in place.
///
/// Sample values are overwritten with their filtered values; the buffer's
/// shape and format metadata are untouched. An empty buffer is a no-op.
/// Non-finite input samples propagate through the recurrence unguarded.
pub fn apply_low_pass(
    buffer: &mut SampleBuffer,
    config: &LowPassConfig,
) -> Result<(), FilterError> {
    let sample_rate = config
        .coeff_sample_rate
        .unwrap_or_else(|| buffer.sample_rate());
    let mut bank = LowPassBank::new(buffer.channels(), config.cutoff_hz, sample_rate)?;
    bank.process_interleaved(buffer.samples_mut());
    Ok(())
}
