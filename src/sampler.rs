use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Count, DisplayCountry, RawCountry};

/// Draws `min(k, pool.len())` distinct countries uniformly at random.
///
/// Returns an empty list when `k` is unset or the pool is empty. Uses a
/// partial Fisher–Yates shuffle over indices, so the pool itself is never
/// reordered and each call produces an independent sample.
pub fn sample<R>(pool: &[RawCountry], k: Option<Count>, rng: &mut R) -> Vec<DisplayCountry>
where
    R: Rng + ?Sized,
{
    let Some(k) = k else {
        return Vec::new();
    };
    if pool.is_empty() {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..pool.len()).collect();
    let (chosen, _) = indices.partial_shuffle(rng, k.get());
    chosen
        .iter()
        .map(|&index| DisplayCountry::from(&pool[index]))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::sample;
    use crate::{wire::CountryName, Count, RawCountry};

    fn pool(size: usize) -> Vec<RawCountry> {
        (0..size)
            .map(|index| RawCountry {
                name: Some(CountryName {
                    common: Some(format!("Country {index:03}")),
                }),
                capital: Some(vec![format!("Capital {index:03}")]),
                languages: None,
                cca3: None,
            })
            .collect()
    }

    #[test]
    fn returns_min_k_n_distinct_members() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [1usize, 3, 10, 250] {
            let pool = pool(size);
            let names: HashSet<String> = pool
                .iter()
                .filter_map(|c| c.common_name().map(str::to_owned))
                .collect();

            for k in Count::MIN..=Count::MAX {
                let count = Count::new(i64::from(k));
                let drawn = sample(&pool, count, &mut rng);
                assert_eq!(drawn.len(), usize::from(k).min(size));

                let unique: HashSet<&str> = drawn.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(unique.len(), drawn.len(), "sample must not repeat");
                assert!(drawn.iter().all(|c| names.contains(&c.name)));
            }
        }
    }

    #[test]
    fn unset_count_or_empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample(&pool(5), None, &mut rng).is_empty());
        assert!(sample(&[], Count::new(3), &mut rng).is_empty());
    }

    #[test]
    fn every_country_can_be_drawn() {
        let pool = pool(6);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            for country in sample(&pool, Count::new(1), &mut rng) {
                seen.insert(country.name);
            }
        }
        assert_eq!(seen.len(), 6);
    }
}
