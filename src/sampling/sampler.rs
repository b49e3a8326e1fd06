//! Random selection of input files and the grid ordering applied afterwards

use crate::io::error::{CollageError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Pick `count` distinct items uniformly at random
///
/// Shuffles the full index range and keeps the first `count`, so every subset
/// of that size is equally likely. Selection order follows the shuffle.
///
/// # Errors
///
/// Returns [`CollageError::NotEnoughImages`] if `items` is shorter than `count`
pub fn select_random<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if items.len() < count {
        return Err(CollageError::NotEnoughImages {
            needed: count,
            found: items.len(),
        });
    }

    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.shuffle(rng);

    Ok(indices
        .iter()
        .take(count)
        .filter_map(|&index| items.get(index).cloned())
        .collect())
}

/// Sort paths into grid order: byte-wise on the full path string
///
/// Unlike `PathBuf`'s own ordering this does not compare component by
/// component, so `a-b/x.png` sorts before `a/x.png`.
pub fn sort_by_path(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

/// Seed used when none is supplied: nanoseconds since the Unix epoch
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Random source for one run, reproducible when `seed` is given
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(clock_seed);
    (StdRng::seed_from_u64(seed), seed)
}
