//! Suave Core - sample storage and the one-pole lowpass engine
//!
//! This crate holds the processing heart of suave: an interleaved
//! [`SampleBuffer`] carrying decoded audio plus the format metadata needed
//! to re-encode it, and a one-pole IIR lowpass that filters every channel
//! of a buffer independently, in place.
//!
//! # Core Abstractions
//!
//! - [`SampleBuffer`] - decoded audio with its format metadata
//! - [`OnePole`] - single-channel one-pole lowpass state machine
//! - [`LowPassBank`] - one `OnePole` per channel over interleaved data
//! - [`apply_low_pass`] - whole-buffer in-place filter pass
//! - [`LowPassConfig`] - cutoff and coefficient-rate parameters
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it only does arithmetic over
//! `alloc`-backed buffers). Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! suave-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use suave_core::{LowPassConfig, SampleBuffer, SampleFormat, apply_low_pass};
//!
//! let data = vec![1.0, 0.0, 0.0, 0.0];
//! let mut buffer = SampleBuffer::new(data, 1, 44100, 16, SampleFormat::Pcm).unwrap();
//! apply_low_pass(&mut buffer, &LowPassConfig::new(500.0)).unwrap();
//!
//! let a = 500.0_f32 / (500.0 + 44100.0);
//! assert!((buffer.samples()[0] - a).abs() < 1e-7);
//! ```
//!
//! # Design Principles
//!
//! - **Shape-preserving**: filtering rewrites sample values, never frame or
//!   channel counts or format metadata
//! - **Channel-independent**: each channel's recurrence has disjoint state
//! - **No process exits**: invalid parameters come back as [`FilterError`]

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod one_pole;

pub use buffer::{BufferError, SampleBuffer, SampleFormat};
pub use one_pole::{FilterError, LowPassBank, LowPassConfig, OnePole, apply_low_pass};
