//! Benchmark: fast-forwarding a tilting platform vs spinning it directly.
//!
//! Run with: cargo run --example spin_cycle_benchmark --release
//!
//! The fast-forward records spins only until the layout repeats, so the
//! billion-spin answer should cost about the same as the thousand-spin
//! one. The direct loop is capped at a thousand spins to keep the
//! comparison honest about what it can afford.

use std::fmt::Write as _;
use std::time::Instant;

use puzzle_demos::platform::Platform;

fn synthetic_platform(size: usize) -> Platform {
    let mut grid = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            let cell = match (x * 7 + y * 13) % 11 {
                0 => 'O',
                1 => '#',
                _ => '.',
            };
            grid.push(cell);
        }
        let _ = writeln!(grid);
    }
    Platform::parse(&grid).expect("synthetic grid is well-formed")
}

fn main() {
    println!("Spin-Cycle Benchmark: fast-forward vs direct spinning");
    println!("=====================================================\n");

    for size in [10usize, 20, 40] {
        let platform = synthetic_platform(size);

        let direct_start = Instant::now();
        let mut spun = platform.clone();
        for _ in 0..1_000 {
            spun = spun.spin();
        }
        let direct_load = spun.north_load();
        let direct_time = direct_start.elapsed();

        let jump_start = Instant::now();
        let jumped_load = platform
            .load_after_spins(1_000)
            .expect("finite layout cycles");
        let jump_small_time = jump_start.elapsed();

        assert_eq!(direct_load, jumped_load, "fast-forward must agree");

        let big_start = Instant::now();
        let billion_load = platform
            .load_after_spins(1_000_000_000)
            .expect("finite layout cycles");
        let big_time = big_start.elapsed();

        println!(
            "{size:>3} x {size:<3} direct 1k {:>9.2?}   jump 1k {:>9.2?}   jump 1e9 {:>9.2?}   (load {billion_load})",
            direct_time, jump_small_time, big_time
        );
    }
}
