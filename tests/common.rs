//! Shared maze fixtures for the integration tests.

#![allow(dead_code)]

use vastu_topo::harness::GridMaze;
use vastu_topo::Signature;

/// Route library logs to the test harness (`RUST_LOG=debug` to see them).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The 4×4 maze from the reference scenario: a ring corridor around a 2×2
/// wall block at (1..=2, 0..=1).
pub fn reference_maze() -> GridMaze {
    GridMaze::from_rows(&[
        vec![false, true, true, false],
        vec![false, true, true, false],
        vec![false, false, false, false],
        vec![false, false, false, false],
    ])
}

/// A 5×5 ring: outer cells free, 3×3 wall block inside. Every wall-following
/// stop is a corner with a globally unique signature.
pub fn square_ring() -> GridMaze {
    GridMaze::parse(
        ".....\n\
         .###.\n\
         .###.\n\
         .###.\n\
         .....",
    )
}

/// A 7×4 two-tooth comb: wall blocks at x 1..=2 and x 4..=5 in the bottom
/// two rows. The floor cells of all three gaps share signature 1000.
pub fn comb_maze() -> GridMaze {
    GridMaze::parse(
        ".......\n\
         .......\n\
         .##.##.\n\
         .##.##.",
    )
}

/// A single enclosed cell.
pub fn enclosed_cell() -> GridMaze {
    GridMaze::from_rows(&[vec![false]])
}

/// Shorthand for building a signature from 0/1 bits in heading order.
pub fn sig(bits: [u8; 4]) -> Signature {
    Signature::from_bits(bits.map(|b| b != 0))
}
