//! Chunk sizing for statically partitioned parallel loops.

/// Multiplier for number of chunks relative to CPU threads.
/// Using 2x threads provides good load balancing when some chunks finish faster.
const CHUNKS_PER_THREAD: usize = 2;

/// Compute pixels per chunk for parallel image processing.
///
/// Divides the pixel range into roughly `num_cpus * 2` chunks, balancing
/// load without the overhead of many tiny chunks. Minimum of 1 pixel per
/// chunk.
#[inline]
pub fn pixels_per_chunk(total_pixels: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    (total_pixels / num_chunks).max(1)
}
