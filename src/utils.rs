use std::time::{Duration, Instant};

pub mod binary_heap;
pub mod data_structures;
pub mod io;
pub mod sample_graph;

/// runs the given function and returns the elapsed time together with its result
pub fn measure_time<T, F: FnOnce() -> T>(function: F) -> (Duration, T) {
    let start = Instant::now();
    let result = function();

    (start.elapsed(), result)
}
