//! Fast Fourier Transform (FFT) capability and the recursive kernel.
//!
//! This module defines the [`FftImpl`] contract shared by every transform in
//! the crate and implements it with a recursive radix-2 decimation-in-time
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm).
//! The matching oracle adapter lives in [`crate::oracle`]; the two are
//! interchangeable behind `dyn FftImpl`.

use core::marker::PhantomData;

use crate::num::{Complex, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Input length is not zero, one, or a power of two.
    InvalidLength,
    /// Scratch memory for the transform could not be acquired.
    AllocationFailure,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidLength => {
                write!(f, "input length must be zero, one, or a power of two")
            }
            FftError::AllocationFailure => {
                write!(f, "failed to allocate transform scratch memory")
            }
        }
    }
}

impl std::error::Error for FftError {}

/// Rotation direction of the twiddle factors.
///
/// `Forward` uses `exp(-2πi·nk/N)` and matches rustfft's forward transform;
/// `Inverse` uses `exp(+2πi·nk/N)` and scales the result by `1/N`, so
/// forward followed by inverse is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftDirection {
    #[default]
    Forward,
    Inverse,
}

/// Common capability implemented by the recursive kernel and the reference
/// oracle, so a harness can drive both through `Box<dyn FftImpl<T>>` with
/// identical inputs.
///
/// `calculate` is a pure function of its input: the caller's slice is never
/// mutated and no reference to it is retained past the call.
pub trait FftImpl<T: Float> {
    fn calculate(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>;
    /// Implementation label used when reporting parity or timing results.
    fn name(&self) -> &'static str;
}

/// Allocate the scratch/output buffer for one recursion level, surfacing
/// allocation failure instead of aborting.
fn alloc_buffer<T: Float>(len: usize) -> Result<Vec<Complex<T>>, FftError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FftError::AllocationFailure)?;
    Ok(buf)
}

/// Recursive radix-2 decimation-in-time Cooley–Tukey FFT.
///
/// Accepts inputs whose length is zero, one, or a power of two; any other
/// length fails fast with [`FftError::InvalidLength`]. Each recursion level
/// allocates fresh half-length buffers, giving the natural O(N log N) time
/// and auxiliary space of the textbook formulation.
pub struct RecursiveFftImpl<T: Float> {
    direction: FftDirection,
    _marker: PhantomData<T>,
}

impl<T: Float> Default for RecursiveFftImpl<T> {
    fn default() -> Self {
        Self::new(FftDirection::Forward)
    }
}

impl<T: Float> RecursiveFftImpl<T> {
    pub fn new(direction: FftDirection) -> Self {
        Self {
            direction,
            _marker: PhantomData,
        }
    }

    pub fn forward() -> Self {
        Self::new(FftDirection::Forward)
    }

    pub fn inverse() -> Self {
        Self::new(FftDirection::Inverse)
    }

    pub fn direction(&self) -> FftDirection {
        self.direction
    }

    /// One level of the recursion: split by index parity, transform both
    /// halves, butterfly-combine the transformed halves.
    fn fft_radix2(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = data.len();
        if n < 2 {
            return Ok(());
        }
        let half = n / 2;
        let mut even = alloc_buffer::<T>(half)?;
        let mut odd = alloc_buffer::<T>(half)?;
        for pair in data.chunks_exact(2) {
            even.push(pair[0]);
            odd.push(pair[1]);
        }
        self.fft_radix2(&mut even)?;
        self.fft_radix2(&mut odd)?;

        // Twiddles are stepped incrementally from w = 1 by exp(±2πi/n)
        // rather than recomputed per index. This trades a little accumulated
        // rounding error for one sin_cos per recursion level.
        let two_pi = T::from_f32(2.0) * T::pi();
        let len = T::from_usize(n).ok_or(FftError::InvalidLength)?;
        let angle = match self.direction {
            FftDirection::Forward => -two_pi / len,
            FftDirection::Inverse => two_pi / len,
        };
        let step = Complex::expi(angle);
        let mut w = Complex::new(T::one(), T::zero());
        for k in 0..half {
            let t = w.mul(odd[k]);
            data[k] = even[k].add(t);
            data[k + half] = even[k].sub(t);
            w = w.mul(step);
        }
        Ok(())
    }
}

impl<T: Float> FftImpl<T> for RecursiveFftImpl<T> {
    fn calculate(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = input.len();
        if n > 1 && !n.is_power_of_two() {
            return Err(FftError::InvalidLength);
        }
        log::trace!("recursive radix-2 {:?} transform, len {}", self.direction, n);
        let mut data = alloc_buffer::<T>(n)?;
        data.extend_from_slice(input);
        self.fft_radix2(&mut data)?;
        if self.direction == FftDirection::Inverse && n > 1 {
            let norm = T::one() / T::from_usize(n).ok_or(FftError::InvalidLength)?;
            for c in &mut data {
                *c = c.scale(norm);
            }
        }
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "recursive radix-2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    // Forward DFT of [1, 2, 3, 4] has the closed form [10, -2+2i, -2, -2-2i].
    #[test]
    fn four_point_closed_form() {
        let input: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        let fft = RecursiveFftImpl::<f64>::forward();
        let out = fft.calculate(&input).unwrap();
        let expected = [
            Complex64::new(10.0, 0.0),
            Complex64::new(-2.0, 2.0),
            Complex64::new(-2.0, 0.0),
            Complex64::new(-2.0, -2.0),
        ];
        for (a, b) in out.iter().zip(expected.iter()) {
            assert!((a.re - b.re).abs() < 1e-12, "re: {} vs {}", a.re, b.re);
            assert!((a.im - b.im).abs() < 1e-12, "im: {} vs {}", a.im, b.im);
        }
    }

    #[test]
    fn empty_input_is_identity() {
        let fft = RecursiveFftImpl::<f64>::forward();
        let out = fft.calculate(&[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn single_sample_is_identity() {
        let z = Complex64::new(42.0, -1.5);
        let fft = RecursiveFftImpl::<f64>::forward();
        let out = fft.calculate(&[z]).unwrap();
        assert_eq!(out, vec![z]);
        let ifft = RecursiveFftImpl::<f64>::inverse();
        assert_eq!(ifft.calculate(&[z]).unwrap(), vec![z]);
    }

    #[test]
    fn non_power_of_two_is_rejected() {
        let fft = RecursiveFftImpl::<f64>::forward();
        for n in [3usize, 5, 6, 7, 12, 1000] {
            let input = vec![Complex64::new(1.0, 0.0); n];
            assert_eq!(fft.calculate(&input), Err(FftError::InvalidLength), "n={}", n);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let input: Vec<Complex64> = (0..16)
            .map(|i| Complex64::new(i as f64, -(i as f64)))
            .collect();
        let snapshot = input.clone();
        let fft = RecursiveFftImpl::<f64>::forward();
        fft.calculate(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn forward_inverse_roundtrip() {
        let input: Vec<Complex64> = (0..8)
            .map(|i| Complex64::new(i as f64 + 0.5, (i as f64) * -0.25))
            .collect();
        let fft = RecursiveFftImpl::<f64>::forward();
        let ifft = RecursiveFftImpl::<f64>::inverse();
        let back = ifft.calculate(&fft.calculate(&input).unwrap()).unwrap();
        for (a, b) in back.iter().zip(input.iter()) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }

    #[test]
    fn error_display_is_descriptive() {
        assert!(FftError::InvalidLength.to_string().contains("power of two"));
        assert!(FftError::AllocationFailure.to_string().contains("allocate"));
    }
}
