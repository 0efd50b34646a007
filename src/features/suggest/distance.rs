//! Bounded Levenshtein distance with per-instance memoization.

use dashmap::DashMap;
use tracing::trace;

use crate::constants::suggest as suggest_constants;

/// Levenshtein distance calculator owning its own memo table.
///
/// Distances are computed on lowercased input. Once every cell of a matrix
/// row exceeds the threshold the computation stops and returns that row's
/// minimum, which is a lower bound of the true distance. Ranking callers can
/// use it as-is; callers that need the exact value pass `Some(usize::MAX)`.
pub struct EditDistance {
    cache: DashMap<(String, String, usize), usize>,
    capacity: usize,
}

impl Default for EditDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl EditDistance {
    pub fn new() -> Self {
        Self::with_capacity(suggest_constants::DISTANCE_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::new(),
            capacity,
        }
    }

    /// Default threshold: `ceil(max(|a|, |b|) / 3)`.
    pub fn default_threshold(a: &str, b: &str) -> usize {
        let longest = a.chars().count().max(b.chars().count());
        longest.div_ceil(suggest_constants::THRESHOLD_DIVISOR)
    }

    pub fn distance(&self, a: &str, b: &str, threshold: Option<usize>) -> usize {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        if a == b {
            return 0;
        }

        let threshold = threshold.unwrap_or_else(|| Self::default_threshold(&a, &b));

        // Order the pair so (a, b) and (b, a) share an entry and a computation.
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let key = (first, second, threshold);

        if let Some(hit) = self.cache.get(&key) {
            return *hit;
        }

        let result = levenshtein_bounded(&key.0, &key.1, threshold);

        if self.capacity > 0 {
            if self.cache.len() >= self.capacity {
                self.cache.clear();
            }
            self.cache.insert(key, result);
        }
        result
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

fn levenshtein_bounded(a: &str, b: &str, threshold: usize) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let cols = a.len() + 1;
    let rows = b.len() + 1;

    let mut matrix = vec![vec![0usize; cols]; rows];
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..rows {
        matrix[i][0] = i;
        let mut row_min = i;
        for j in 1..cols {
            let cost = usize::from(b[i - 1] != a[j - 1]);
            let value = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
            matrix[i][j] = value;
            row_min = row_min.min(value);
        }
        if row_min > threshold {
            trace!(row = i, row_min, threshold, "edit distance early exit");
            return row_min;
        }
    }

    matrix[rows - 1][cols - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(engine: &EditDistance, a: &str, b: &str) -> usize {
        engine.distance(a, b, Some(usize::MAX))
    }

    #[test]
    fn test_known_distances() {
        let engine = EditDistance::new();
        assert_eq!(exact(&engine, "kitten", "sitting"), 3);
        assert_eq!(exact(&engine, "hors", "hours"), 1);
        assert_eq!(exact(&engine, "hors", "hrs"), 1);
        assert_eq!(exact(&engine, "flaw", "lawn"), 2);
        assert_eq!(exact(&engine, "", "abc"), 3);
    }

    #[test]
    fn test_identity_and_empty() {
        let engine = EditDistance::new();
        assert_eq!(engine.distance("", "", None), 0);
        assert_eq!(engine.distance("minutes", "minutes", None), 0);
        assert_eq!(engine.distance("Minutes", "mInUtEs", None), 0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("hors", "milliseconds"), ("wk", "weeks"), ("yaer", "year"), ("", "sec")];
        for (a, b) in pairs {
            let forward = EditDistance::new().distance(a, b, None);
            let backward = EditDistance::new().distance(b, a, None);
            assert_eq!(forward, backward, "{a} vs {b}");
        }
    }

    #[test]
    fn test_symmetric_pairs_share_one_cache_entry() {
        let engine = EditDistance::new();
        engine.distance("days", "dya", None);
        engine.distance("dya", "days", None);
        assert_eq!(engine.cached_entries(), 1);
    }

    #[test]
    fn test_finite_threshold_never_overstates() {
        let engine = EditDistance::new();
        let pairs = [("hors", "milliseconds"), ("qqqqqq", "seconds"), ("abcdef", "mo"), ("wek", "week")];
        for (a, b) in pairs {
            let full = exact(&engine, a, b);
            for threshold in 0..6 {
                assert!(engine.distance(a, b, Some(threshold)) <= full, "{a} vs {b} @ {threshold}");
            }
        }
    }

    #[test]
    fn test_early_exit_returns_lower_bound() {
        let engine = EditDistance::new();
        // Full distance is 12; a zero threshold bails out after the first row.
        assert_eq!(exact(&engine, "zzzzzzzzzzzz", "milliseconds"), 12);
        assert_eq!(engine.distance("zzzzzzzzzzzz", "milliseconds", Some(0)), 1);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(EditDistance::default_threshold("hors", "hours"), 2);
        assert_eq!(EditDistance::default_threshold("abc", ""), 1);
        assert_eq!(EditDistance::default_threshold("", ""), 0);
        assert_eq!(EditDistance::default_threshold("milliseconds", "ms"), 4);
    }

    #[test]
    fn test_cache_is_capped() {
        let engine = EditDistance::with_capacity(2);
        engine.distance("a", "b", None);
        engine.distance("a", "c", None);
        engine.distance("a", "d", None);
        assert!(engine.cached_entries() <= 2);

        let uncached = EditDistance::with_capacity(0);
        assert_eq!(uncached.distance("hors", "hours", None), 1);
        assert_eq!(uncached.cached_entries(), 0);
    }
}
