//! Mate selection.
//!
//! Partners are chosen by tournament: `pool_size` candidates are drawn
//! uniformly with replacement and the best-scoring one wins. A pool size of
//! one is a uniform random choice; larger pools make mating increasingly
//! assortative.
//!
//! ## Scores
//!
//! - **Ancestry distance** (continuous model): `|query - candidate|`, where the
//!   query may first be snapped to its nearer extreme. Preference genes are
//!   assumed to travel with trait genes, so an individual seeks partners at
//!   the extreme it is closer to rather than at its own exact value.
//! - **Preference match** (multi-locus model): over aligned loci,
//!   `sum(2 - |count(appearance) - count(preference)|)`.

pub use crate::errors::SelectionError;
use crate::genome::Locus;
use rand::Rng;

/// Run a tournament over `candidates` and return the index of the winner.
///
/// Draws `pool_size` candidates uniformly with replacement and keeps the one
/// with the highest `score`. Ties go to the candidate drawn first.
///
/// # Errors
/// `SelectionError::EmptyPool` if `candidates` is empty and
/// `SelectionError::ZeroPoolSize` if `pool_size` is zero.
pub fn tournament<T, R, F>(
    candidates: &[T],
    pool_size: usize,
    rng: &mut R,
    mut score: F,
) -> Result<usize, SelectionError>
where
    R: Rng + ?Sized,
    F: FnMut(&T) -> f64,
{
    try_tournament(candidates, pool_size, rng, |candidate| Ok(score(candidate)))
}

/// Tournament over a fallible score. The first scoring error aborts the
/// tournament and is returned as is.
pub fn try_tournament<T, R, F, E>(
    candidates: &[T],
    pool_size: usize,
    rng: &mut R,
    mut score: F,
) -> Result<usize, E>
where
    R: Rng + ?Sized,
    F: FnMut(&T) -> Result<f64, E>,
    E: From<SelectionError>,
{
    if candidates.is_empty() {
        return Err(SelectionError::EmptyPool.into());
    }
    if pool_size == 0 {
        return Err(SelectionError::ZeroPoolSize.into());
    }

    let mut best_index = rng.random_range(0..candidates.len());
    let mut best_score = score(&candidates[best_index])?;

    for _ in 1..pool_size {
        let pick = rng.random_range(0..candidates.len());
        let candidate_score = score(&candidates[pick])?;
        if candidate_score > best_score {
            best_score = candidate_score;
            best_index = pick;
        }
    }

    Ok(best_index)
}

/// Snap an ancestry value to the nearer of `0.0` and `1.0`.
///
/// Exactly `0.5` snaps to `1.0`.
#[inline]
pub fn snap_to_extreme(value: f64) -> f64 {
    if value >= 0.5 { 1.0 } else { 0.0 }
}

/// Absolute difference between two ancestry values.
#[inline]
pub fn ancestry_distance(query: f64, candidate: f64) -> f64 {
    (query - candidate).abs()
}

/// How well a male's appearance loci match a female's preference loci.
///
/// Each aligned pair contributes `2 - |count(appearance) - count(preference)|`,
/// so the result lies in `0..=2 * len`. Higher is better.
///
/// # Errors
/// `SelectionError::TraitLengthMismatch` if the blocks differ in length.
pub fn preference_match(
    appearance: &[Locus],
    preference: &[Locus],
) -> Result<usize, SelectionError> {
    if appearance.len() != preference.len() {
        return Err(SelectionError::TraitLengthMismatch {
            appearance: appearance.len(),
            preference: preference.len(),
        });
    }
    Ok(appearance
        .iter()
        .zip(preference)
        .map(|(a, p)| 2 - a.allele_count().abs_diff(p.allele_count()) as usize)
        .sum())
}
