//! Reference transform backed by the external `rustfft` engine.
//!
//! The engine is consumed as a trusted oracle: its output is the ground
//! truth the recursive kernel is checked against, and its throughput is the
//! performance baseline. Nothing here is under test itself; the adapter only
//! bridges the crate's [`Complex`] representation to the engine's.

use core::cell::RefCell;

use rustfft::num_complex::Complex as EngineComplex;
use rustfft::{FftNum, FftPlanner};

use crate::fft::{FftDirection, FftError, FftImpl};
use crate::num::{Complex, Float};

/// Adapter delegating [`FftImpl::calculate`] to a `rustfft` plan.
///
/// Plans are cached per size by the engine's own planner, held in a
/// `RefCell` so repeated calls through `&self` reuse them. Accepts any input
/// length; lengths below two are degenerate pass-throughs. The inverse
/// direction applies the same `1/N` normalization as the recursive kernel so
/// the two stay element-wise comparable.
pub struct RustFftImpl<T: Float + FftNum> {
    planner: RefCell<FftPlanner<T>>,
    direction: FftDirection,
}

impl<T: Float + FftNum> Default for RustFftImpl<T> {
    fn default() -> Self {
        Self::new(FftDirection::Forward)
    }
}

impl<T: Float + FftNum> RustFftImpl<T> {
    pub fn new(direction: FftDirection) -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
            direction,
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
}

impl<T: Float + FftNum> FftImpl<T> for RustFftImpl<T> {
    fn calculate(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = input.len();
        if n < 2 {
            return Ok(input.to_vec());
        }
        log::trace!("rustfft {:?} transform, len {}", self.direction, n);
        let plan = {
            let mut planner = self.planner.borrow_mut();
            match self.direction {
                FftDirection::Forward => planner.plan_fft_forward(n),
                FftDirection::Inverse => planner.plan_fft_inverse(n),
            }
        };
        let mut buffer: Vec<EngineComplex<T>> = input
            .iter()
            .map(|c| EngineComplex::new(c.re, c.im))
            .collect();
        plan.process(&mut buffer);
        let mut out: Vec<Complex<T>> =
            buffer.into_iter().map(|c| Complex::new(c.re, c.im)).collect();
        if self.direction == FftDirection::Inverse {
            // `num_traits` (via `FftNum`) also provides `one`/`from_usize`,
            // so the crate's own trait must be named explicitly.
            let norm =
                <T as Float>::one() / <T as Float>::from_usize(n).ok_or(FftError::InvalidLength)?;
            for c in &mut out {
                *c = c.scale(norm);
            }
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "rustfft"
    }
}
