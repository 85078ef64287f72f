//! WAV decode/encode layer for suave.
//!
//! This crate provides the two collaborators around the filter engine:
//!
//! - **Decoding**: [`read_wav`] loads a WAV file into a
//!   [`suave_core::SampleBuffer`], preserving every channel interleaved and
//!   the format metadata needed to re-encode identically
//! - **Encoding**: [`write_wav`] writes a buffer back out in the subformat
//!   it was decoded from
//! - **Inspection**: [`read_wav_info`] reads header metadata without
//!   loading sample data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use suave_core::{LowPassConfig, apply_low_pass};
//! use suave_io::{read_wav, write_wav};
//!
//! let mut buffer = read_wav("input.wav")?;
//! apply_low_pass(&mut buffer, &LowPassConfig::new(500.0))?;
//! write_wav("output.wav", &buffer)?;
//! ```

mod wav;

pub use wav::{WavInfo, read_wav, read_wav_info, write_wav};

/// Error types for WAV decode/encode operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file's subformat is not 8/16/24/32-bit integer PCM or 32-bit
    /// float.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Decoded data did not form a valid sample buffer.
    #[error("Invalid sample buffer: {0}")]
    Buffer(#[from] suave_core::BufferError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for WAV operations.
pub type Result<T> = std::result::Result<T, Error>;
