use rand::seq::SliceRandom;
use rand::Rng;

use crate::species::{NonEmptySpecies, Species};

/// Picks one species uniformly at random, skipping the ids in `recent`.
/// When the exclusion would leave nothing to draw from, the whole dataset is used.
pub fn select_species<'a, R: Rng + ?Sized>(
    dataset: &'a NonEmptySpecies,
    recent: &[u32],
    rng: &mut R,
) -> &'a Species {
    let all = dataset.as_slice();
    let pool: Vec<&Species> = all.iter().filter(|s| !recent.contains(&s.id)).collect();

    let picked = if pool.is_empty() {
        log::debug!(
            "Recent window ({} ids) covers all {} species, drawing from the full dataset",
            recent.len(),
            all.len()
        );
        all.choose(rng)
    } else {
        pool.choose(rng).copied()
    };

    // NonEmptySpecies guarantees at least one candidate
    picked.unwrap_or(&all[0])
}

/// Returns `buffer` with `id` in front, keeping at most `max_len` ids.
pub fn record_recent(buffer: &[u32], id: u32, max_len: usize) -> Vec<u32> {
    std::iter::once(id)
        .chain(buffer.iter().copied())
        .take(max_len)
        .collect()
}
