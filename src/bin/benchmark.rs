//! Step throughput of the serial and parallel strategies

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{Algorithm, EngineConfig, GameOfLife, LifeEngine, domain::RngSource};

fn benchmark(size: usize, algorithm: Algorithm, iterations: u64) -> f64 {
    let config = EngineConfig::default().with_size(size).with_algorithm(algorithm);
    let mut coins = RngSource(StdRng::seed_from_u64(size as u64));
    let Ok(mut engine) = GameOfLife::with_source(&config, &mut coins) else {
        return f64::NAN;
    };

    let start = Instant::now();
    engine.run(iterations);
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [100, 250, 500, 750, 999];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>14}", "Size", "Serial", "Parallel", "Speedup", "Cells/sec");
    println!("{:-<62}", "");

    for size in sizes {
        let serial_ms = benchmark(size, Algorithm::Serial, iterations);
        let parallel_ms = benchmark(size, Algorithm::Parallel, iterations);
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x {:>13.1}M",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells / (parallel_ms / 1000.0) / 1_000_000.0
        );
    }
}
