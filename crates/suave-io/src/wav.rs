//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{WavReader, WavWriter};
use std::path::Path;
use suave_core::{SampleBuffer, SampleFormat};

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Sample encoding.
    pub format: SampleFormat,
}

/// Read WAV metadata without loading sample data.
///
/// Opens the file, reads the header, and returns a [`WavInfo`] with format
/// details and duration. Much faster than [`read_wav`] when only metadata
/// is needed.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / u64::from(spec.channels);
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        hound::SampleFormat::Float => SampleFormat::Float,
        hound::SampleFormat::Int => SampleFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// Validate a file's subformat and map it to a [`SampleFormat`] tag.
///
/// Accepted: 8/16/24/32-bit integer PCM and 32-bit float. Anything else is
/// a fatal [`Error::UnsupportedFormat`].
fn subformat_of(spec: hound::WavSpec) -> Result<SampleFormat> {
    match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 8 | 16 | 24 | 32) => Ok(SampleFormat::Pcm),
        (hound::SampleFormat::Float, 32) => Ok(SampleFormat::Float),
        (format, bits) => Err(Error::UnsupportedFormat(format!("{bits}-bit {format:?}"))),
    }
}

/// Read a WAV file into a [`SampleBuffer`].
///
/// Every channel is preserved, interleaved frame-major. Integer samples are
/// normalized to f32 by `2^(bits - 1)`; float samples pass through. The
/// buffer keeps the file's sample rate, channel count, bit depth, and
/// sample encoding so [`write_wav`] can reproduce the subformat exactly.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let reader = WavReader::open(&path)?;
    let spec = reader.spec();
    let format = subformat_of(spec)?;

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            // Widen before shifting: 1 << 31 wraps in i32.
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    tracing::debug!(
        path = %path.as_ref().display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        samples = samples.len(),
        "decoded WAV file"
    );

    Ok(SampleBuffer::new(
        samples,
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        format,
    )?)
}

/// Write a [`SampleBuffer`] to a WAV file in its original subformat.
///
/// Float buffers write f32 samples directly. Integer buffers scale by
/// `2^(bits - 1)` and clamp to the representable range, so the output
/// container matches the decoded input exactly.
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: buffer.bits_per_sample(),
        sample_format: match buffer.format() {
            SampleFormat::Float => hound::SampleFormat::Float,
            SampleFormat::Pcm => hound::SampleFormat::Int,
        },
    };
    let mut writer = WavWriter::create(&path, spec)?;

    match buffer.format() {
        SampleFormat::Float => {
            for &sample in buffer.samples() {
                writer.write_sample(sample)?;
            }
        }
        SampleFormat::Pcm => {
            // Widen before shifting: 1 << 31 wraps in i32.
            let max_val = (1i64 << (buffer.bits_per_sample() - 1)) as f32;
            for &sample in buffer.samples() {
                let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(int_sample)?;
            }
        }
    }

    writer.finalize()?;

    tracing::debug!(
        path = %path.as_ref().display(),
        frames = buffer.num_frames(),
        "encoded WAV file"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn buffer(data: Vec<f32>, channels: u16, bits: u16, format: SampleFormat) -> SampleBuffer {
        SampleBuffer::new(data, channels, 48000, bits, format).unwrap()
    }

    #[test]
    fn roundtrip_f32_preserves_samples() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin()).collect();
        let original = buffer(samples.clone(), 1, 32, SampleFormat::Float);

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &original).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.sample_rate(), 48000);
        assert_eq!(loaded.format(), SampleFormat::Float);
        assert_eq!(loaded.total_samples(), samples.len());

        for (a, b) in samples.iter().zip(loaded.samples()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn roundtrip_i16_preserves_samples() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin() * 0.9).collect();
        let original = buffer(samples.clone(), 1, 16, SampleFormat::Pcm);

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &original).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.bits_per_sample(), 16);
        assert_eq!(loaded.format(), SampleFormat::Pcm);

        // 16-bit has less precision
        for (a, b) in samples.iter().zip(loaded.samples()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn roundtrip_stereo_preserves_interleaving() {
        // Distinct per-channel ramps so a swapped or mixed channel shows up.
        let mut data = Vec::new();
        for i in 0..200 {
            data.push(i as f32 / 400.0); // left
            data.push(-(i as f32) / 400.0); // right
        }
        let original = buffer(data, 2, 16, SampleFormat::Pcm);

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &original).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.channels(), 2);
        assert_eq!(loaded.num_frames(), 200);

        for (orig, got) in original
            .channel_samples(0)
            .zip(loaded.channel_samples(0))
        {
            assert!((orig - got).abs() < 0.001);
            assert!(got >= -0.001, "left channel should be the positive ramp");
        }
        for (orig, got) in original
            .channel_samples(1)
            .zip(loaded.channel_samples(1))
        {
            assert!((orig - got).abs() < 0.001);
            assert!(got <= 0.001, "right channel should be the negative ramp");
        }
    }

    #[test]
    fn roundtrip_8_and_24_bit_metadata() {
        for bits in [8u16, 24] {
            let original = buffer(vec![0.25, -0.25, 0.5, -0.5], 2, bits, SampleFormat::Pcm);

            let file = NamedTempFile::new().unwrap();
            write_wav(file.path(), &original).unwrap();

            let loaded = read_wav(file.path()).unwrap();
            assert_eq!(loaded.bits_per_sample(), bits);
            assert_eq!(loaded.channels(), 2);
            assert_eq!(loaded.sample_rate(), 48000);
            assert_eq!(loaded.format(), SampleFormat::Pcm);
        }
    }

    #[test]
    fn roundtrip_32bit_int_pcm() {
        // Exactly representable fractions so the 2^31 scaling round-trips
        // bit-for-bit, and a sign check: the scale must stay positive.
        let samples = vec![0.25f32, -0.5, 0.0078125, -0.25];
        let original = buffer(samples.clone(), 1, 32, SampleFormat::Pcm);

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &original).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.bits_per_sample(), 32);
        assert_eq!(loaded.format(), SampleFormat::Pcm);
        assert_eq!(loaded.total_samples(), samples.len());

        for (n, (a, b)) in samples.iter().zip(loaded.samples()).enumerate() {
            assert_eq!(a, b, "sample {n} changed across the round trip");
            assert_eq!(a.signum(), b.signum(), "sample {n} flipped sign");
        }
    }

    #[test]
    fn info_matches_written_file() {
        let original = buffer(vec![0.0; 48000 * 2], 2, 16, SampleFormat::Pcm);

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &original).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.sample_rate, 48000);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_frames, 48000);
        assert!((info.duration_secs - 1.0).abs() < 1e-9);
        assert_eq!(info.format, SampleFormat::Pcm);
    }

    #[test]
    fn rejects_unsupported_subformats() {
        let twelve_bit = hound::WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 12,
            sample_format: hound::SampleFormat::Int,
        };
        assert!(matches!(
            subformat_of(twelve_bit),
            Err(Error::UnsupportedFormat(_))
        ));

        let half_float = hound::WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Float,
        };
        assert!(matches!(
            subformat_of(half_float),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_wav("definitely/not/a/real/file.wav").is_err());
    }
}
