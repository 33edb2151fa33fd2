//! # fftvet - FFT kernel validation for Rust
//!
//! Computes the Discrete Fourier Transform of complex sequences with a
//! hand-written recursive radix-2 Cooley–Tukey kernel and checks it, for
//! both correctness and throughput, against the independently trusted
//! [`rustfft`] engine.
//!
//! ## Components
//!
//! - **[`RecursiveFftImpl`]** — the algorithm under validation: recursive
//!   decimation-in-time Cooley–Tukey for power-of-two lengths, with
//!   incrementally stepped twiddle factors.
//! - **[`RustFftImpl`]** — the oracle/baseline: the same contract delegated
//!   to a `rustfft` plan.
//!
//! Both implement [`FftImpl`], so they are substitutable at the call site:
//!
//! ```
//! use fftvet::{Complex64, FftImpl, RecursiveFftImpl, RustFftImpl};
//!
//! let input: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let implementations: Vec<Box<dyn FftImpl<f64>>> = vec![
//!     Box::new(RustFftImpl::forward()),
//!     Box::new(RecursiveFftImpl::forward()),
//! ];
//! let baseline = implementations[0].calculate(&input).unwrap();
//! for fft in &implementations {
//!     let out = fft.calculate(&input).unwrap();
//!     for (a, b) in out.iter().zip(baseline.iter()) {
//!         assert!((a.re - b.re).abs() < 1e-9, "{} disagrees", fft.name());
//!     }
//! }
//! ```
//!
//! ## Conventions
//!
//! Forward transforms use `exp(-2πi·nk/N)` twiddles and no normalization;
//! inverse transforms use the opposite rotation and scale by `1/N`, so
//! forward followed by inverse reproduces the input.
//!
//! ## Benchmarks
//!
//! ```bash
//! cargo bench                 # criterion comparison across sizes
//! cargo run --example compare # wall-clock table per implementation
//! ```
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at
//! your option.

/// Transform capability, error taxonomy, and the recursive radix-2 kernel.
pub mod fft;

/// Complex number and float primitives shared by the implementations.
pub mod num;

/// Reference transform delegating to the external `rustfft` engine.
pub mod oracle;

pub use fft::{FftDirection, FftError, FftImpl, RecursiveFftImpl};
pub use num::{Complex, Complex32, Complex64, Float};
pub use oracle::RustFftImpl;
