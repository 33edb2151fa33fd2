//! Wall-clock comparison of the recursive kernel against the rustfft
//! baseline on identical inputs at increasing power-of-two sizes.
//!
//! ```bash
//! RUST_LOG=trace cargo run --release --example compare
//! ```

use std::time::Instant;

use fftvet::{Complex64, FftImpl, RecursiveFftImpl, RustFftImpl};

fn main() {
    env_logger::init();

    let implementations: Vec<Box<dyn FftImpl<f64>>> = vec![
        Box::new(RustFftImpl::forward()),
        Box::new(RecursiveFftImpl::forward()),
    ];

    println!("Implementation\t\tSize\t\tTime (ms)");
    println!("--------------\t\t----\t\t---------");

    for pow in 10..=18 {
        let size = 1usize << pow;
        let input: Vec<Complex64> = (0..size)
            .map(|i| Complex64::new((i + 1) as f64, 0.0))
            .collect();

        for fft in &implementations {
            // Warm up so plan construction and allocator behavior do not
            // land in the measured call.
            fft.calculate(&input).expect("transform failed");

            let start = Instant::now();
            let output = fft.calculate(&input).expect("transform failed");
            let elapsed = start.elapsed();

            assert_eq!(output.len(), size);
            println!(
                "{:<20}\t2^{} ({})\t{:.3}",
                fft.name(),
                pow,
                size,
                elapsed.as_secs_f64() * 1e3
            );
        }
    }
}
