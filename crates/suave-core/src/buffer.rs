//! Interleaved in-memory sample storage.
//!
//! A [`SampleBuffer`] holds one decoded audio file: every channel, every
//! frame, as normalized `f32` samples in frame-major, channel-minor order
//! (`[frame0_ch0, frame0_ch1, ..., frame1_ch0, ...]`). The buffer also
//! carries the format metadata (sample rate, channel count, bit depth,
//! sample encoding) needed to re-encode the audio in the container format
//! it was decoded from.
//!
//! The buffer is created fully populated by a decoder, mutated in place by
//! DSP code (sample values only, never shape), and consumed read-only by an
//! encoder. There is exactly one owner at any point in the pipeline.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Sample encoding within the container format.
///
/// Together with the bit depth this identifies the subformat the audio was
/// decoded from, so an encoder can write the same subformat back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    Float,
}

/// Errors from [`SampleBuffer`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The channel count was zero.
    ZeroChannels,
    /// The sample rate was zero.
    ZeroSampleRate,
    /// The sample data length is not a multiple of the channel count.
    LengthMismatch {
        /// Length of the interleaved sample data.
        len: usize,
        /// Channel count the data was supposed to interleave.
        channels: u16,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroChannels => write!(f, "channel count must be at least 1"),
            Self::ZeroSampleRate => write!(f, "sample rate must be at least 1 Hz"),
            Self::LengthMismatch { len, channels } => write!(
                f,
                "{len} samples cannot interleave {channels} channel(s) evenly"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

/// Decoded audio: interleaved `f32` samples plus the format metadata needed
/// to re-encode them identically.
///
/// The shape invariant `data.len() == num_frames * channels` holds for the
/// buffer's whole lifetime: the constructor rejects misaligned data, the
/// frame count is derived from the data length rather than stored, and no
/// method changes the data length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    data: Vec<f32>,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    format: SampleFormat,
}

impl SampleBuffer {
    /// Create a buffer from interleaved samples.
    ///
    /// `data.len()` must be a multiple of `channels`; `channels` and
    /// `sample_rate` must be non-zero. `bits_per_sample` and `format` are
    /// carried through untouched for the encoder.
    pub fn new(
        data: Vec<f32>,
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
        format: SampleFormat,
    ) -> Result<Self, BufferError> {
        if channels == 0 {
            return Err(BufferError::ZeroChannels);
        }
        if sample_rate == 0 {
            return Err(BufferError::ZeroSampleRate);
        }
        if data.len() % channels as usize != 0 {
            return Err(BufferError::LengthMismatch {
                len: data.len(),
                channels,
            });
        }
        Ok(Self {
            data,
            channels,
            sample_rate,
            bits_per_sample,
            format,
        })
    }

    /// Channel count (the interleaving factor).
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bit depth of the source subformat. Informational for DSP code, which
    /// always operates on normalized `f32` samples.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Sample encoding of the source subformat.
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// Number of frames (one multi-channel sample instant each).
    pub fn num_frames(&self) -> usize {
        self.data.len() / self.channels as usize
    }

    /// Total sample count across all channels (`num_frames * channels`).
    pub fn total_samples(&self) -> usize {
        self.data.len()
    }

    /// `true` if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.num_frames() as f64 / f64::from(self.sample_rate)
    }

    /// Interleaved sample data.
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    /// Mutable interleaved sample data. Values may change; length may not,
    /// and slices hand out no way to change it.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Iterate over frames (one `channels`-long slice per sample instant).
    pub fn frames(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.channels as usize)
    }

    /// Iterate mutably over frames.
    pub fn frames_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.data.chunks_exact_mut(self.channels as usize)
    }

    /// Iterate over the samples of a single channel, in frame order.
    ///
    /// Returns an empty iterator when `channel >= self.channels()`.
    pub fn channel_samples(&self, channel: u16) -> impl Iterator<Item = f32> + '_ {
        self.data
            .iter()
            .skip(channel as usize)
            .step_by(self.channels as usize)
            .copied()
            .take(if channel < self.channels {
                self.num_frames()
            } else {
                0
            })
    }

    /// Consume the buffer and return its interleaved sample data.
    pub fn into_samples(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_invariant_holds() {
        let buf = SampleBuffer::new(vec![0.0; 6], 2, 48000, 16, SampleFormat::Pcm).unwrap();
        assert_eq!(buf.num_frames(), 3);
        assert_eq!(buf.total_samples(), 6);
        assert_eq!(buf.num_frames() * buf.channels() as usize, buf.total_samples());
    }

    #[test]
    fn rejects_zero_channels() {
        let err = SampleBuffer::new(vec![], 0, 48000, 16, SampleFormat::Pcm).unwrap_err();
        assert_eq!(err, BufferError::ZeroChannels);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let err = SampleBuffer::new(vec![], 1, 0, 16, SampleFormat::Pcm).unwrap_err();
        assert_eq!(err, BufferError::ZeroSampleRate);
    }

    #[test]
    fn rejects_misaligned_data() {
        let err = SampleBuffer::new(vec![0.0; 5], 2, 48000, 16, SampleFormat::Pcm).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthMismatch {
                len: 5,
                channels: 2
            }
        );
    }

    #[test]
    fn empty_buffer_is_valid() {
        let buf = SampleBuffer::new(vec![], 2, 44100, 24, SampleFormat::Pcm).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.num_frames(), 0);
    }

    #[test]
    fn frames_follow_interleaving() {
        let buf = SampleBuffer::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            2,
            48000,
            32,
            SampleFormat::Float,
        )
        .unwrap();

        let frames: Vec<&[f32]> = buf.frames().collect();
        assert_eq!(frames, vec![&[1.0, 2.0][..], &[3.0, 4.0], &[5.0, 6.0]]);
    }

    #[test]
    fn channel_samples_deinterleave() {
        let buf = SampleBuffer::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            2,
            48000,
            32,
            SampleFormat::Float,
        )
        .unwrap();

        let left: Vec<f32> = buf.channel_samples(0).collect();
        let right: Vec<f32> = buf.channel_samples(1).collect();
        assert_eq!(left, vec![1.0, 3.0, 5.0]);
        assert_eq!(right, vec![2.0, 4.0, 6.0]);
        assert_eq!(buf.channel_samples(2).count(), 0);
    }

    #[test]
    fn duration_from_frames() {
        let buf = SampleBuffer::new(vec![0.0; 44100], 1, 44100, 16, SampleFormat::Pcm).unwrap();
        assert!((buf.duration_secs() - 1.0).abs() < 1e-12);
    }
}
