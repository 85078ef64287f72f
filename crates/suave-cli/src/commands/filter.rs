//! File-based lowpass filtering command.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use suave_core::LowPassBank;
use suave_io::{read_wav, write_wav};

/// Apply a one-pole lowpass filter to a WAV file.
#[derive(Args)]
pub struct FilterArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Cutoff frequency in Hz
    #[arg(short, long, default_value_t = 500.0)]
    pub cutoff: f32,

    /// Derive the filter coefficient from this nominal sample rate instead
    /// of the input file's actual rate (legacy single-rate behavior)
    #[arg(long, value_name = "HZ")]
    pub coeff_sample_rate: Option<u32>,

    /// Processing block size in frames
    #[arg(long, default_value_t = 4096)]
    pub block_size: usize,
}

/// Run the filter command.
pub fn run(args: FilterArgs) -> anyhow::Result<()> {
    if args.block_size == 0 {
        anyhow::bail!("block size must be at least 1 frame");
    }

    // Read input file
    println!("Reading {}...", args.input.display());
    let mut buffer = read_wav(&args.input)?;

    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        buffer.num_frames(),
        buffer.channels(),
        buffer.sample_rate(),
        buffer.duration_secs()
    );

    let coeff_rate = args
        .coeff_sample_rate
        .unwrap_or_else(|| buffer.sample_rate());
    let mut bank = LowPassBank::new(buffer.channels(), args.cutoff, coeff_rate)?;

    println!(
        "Filtering at {} Hz cutoff (a = {:.6})...",
        args.cutoff,
        bank.coeff()
    );

    let input_rms = rms(buffer.samples());
    let input_peak = peak(buffer.samples());

    // Filter in place, block by block, with a progress bar
    let pb = ProgressBar::new(buffer.total_samples() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let block_len = args.block_size * buffer.channels() as usize;
    let mut done = 0u64;
    for chunk in buffer.samples_mut().chunks_mut(block_len) {
        bank.process_interleaved(chunk);
        done += chunk.len() as u64;
        pb.set_position(done);
    }

    pb.finish_with_message("done");

    let output_rms = rms(buffer.samples());
    let output_peak = peak(buffer.samples());

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output_rms),
        linear_to_db(output_peak)
    );

    // Write output file with the input's format metadata
    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &buffer)?;
    println!("Done!");

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
