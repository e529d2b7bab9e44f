use rayon::prelude::*;
use thiserror::Error;

use rasterkit_image::Image;

/// Minimum number of pixels before [`ExecutionStrategy::Auto`] switches to the
/// parallel path.
const PARALLEL_THRESHOLD: usize = 100_000;

/// Errors that can occur while setting up parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how data-parallel operations are executed.
///
/// Every operation in this crate computes each output sample from read-only
/// source data, so the strategy only changes scheduling, never the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Parallel for large images, serial otherwise.
    #[default]
    Auto,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or as the correctness oracle when
    /// validating parallel execution.
    Serial,

    /// Use the global Rayon thread pool.
    Parallel,
}

impl ExecutionStrategy {
    /// Whether the strategy resolves to the parallel path for the given
    /// number of pixels.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            ExecutionStrategy::Auto => num_pixels >= PARALLEL_THRESHOLD,
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel => true,
        }
    }
}

/// Build a local thread pool with `num_threads` threads.
///
/// Operations run inside [`rayon::ThreadPool::install`] use the local pool
/// instead of the global one, isolating this crate's work from the rest of
/// the process. Pool construction failures are surfaced to the caller; no
/// silent fallback to the global pool happens here.
///
/// # Errors
///
/// Returns [`ParallelError::InvalidThreadCount`] for `num_threads == 0` and
/// [`ParallelError::BuildError`] when the underlying pool cannot be created.
pub fn local_pool(num_threads: usize) -> Result<rayon::ThreadPool, ParallelError> {
    if num_threads == 0 {
        return Err(ParallelError::InvalidThreadCount(num_threads));
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| ParallelError::BuildError(e.to_string()))
}

/// Apply a function to each row of the image in parallel.
///
/// The closure receives the row index and the mutable row slice of length
/// `width * C`.
pub fn par_iter_rows_mut<T, const C: usize>(
    image: &mut Image<T, C>,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = image.cols();
    if cols == 0 {
        return;
    }
    image
        .as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(r, row)| f(r, row));
}

/// Apply a function to each pixel of the image in parallel.
///
/// The closure receives the mutable slice of the `C` channel samples of one
/// pixel.
pub fn par_iter_pixels_mut<T, const C: usize>(
    image: &mut Image<T, C>,
    f: impl Fn(&mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    par_iter_rows_mut(image, |_, row| {
        row.chunks_exact_mut(C).for_each(&f);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_image::{ImageError, ImageSize};

    #[test]
    fn strategy_resolution() {
        assert!(!ExecutionStrategy::Serial.is_parallel(usize::MAX));
        assert!(ExecutionStrategy::Parallel.is_parallel(0));
        assert!(!ExecutionStrategy::Auto.is_parallel(100));
        assert!(ExecutionStrategy::Auto.is_parallel(1_000_000));
    }

    #[test]
    fn local_pool_invalid() {
        let res = local_pool(0);
        assert_eq!(res.unwrap_err(), ParallelError::InvalidThreadCount(0));
    }

    #[test]
    fn local_pool_runs_work() -> Result<(), ParallelError> {
        let pool = local_pool(2)?;
        let sum = pool.install(|| (0..100u32).into_par_iter().sum::<u32>());
        assert_eq!(sum, 4950);
        Ok(())
    }

    #[test]
    fn iter_pixels_mut() -> Result<(), ImageError> {
        let mut image = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8, 1, 2, 3, 4, 5, 6, 7],
        )?;

        par_iter_pixels_mut(&mut image, |px| {
            px[1] = px[0];
        });

        assert_eq!(image.as_slice(), &[0, 0, 2, 2, 4, 4, 6, 6]);
        Ok(())
    }
}
