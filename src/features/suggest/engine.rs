use std::{collections::HashSet, sync::Arc};

use moka::sync::Cache;
use tracing::debug;

use crate::config::SuggestionConfig;
use crate::features::units;

use super::{distance::EditDistance, heap::smallest_k, trie::Trie};

/// "Did you mean" engine over a fixed alias vocabulary.
///
/// Candidates sharing the input as a prefix are ranked first; when there are
/// not enough of them the rest of the vocabulary backfills by edit distance.
/// Results are cached per `(input, max_suggestions)`. The engine is `Sync`
/// and meant to be shared behind an `Arc`.
pub struct SuggestionEngine {
    aliases: Vec<String>,
    trie: Trie,
    distance: EditDistance,
    cache: Cache<(String, usize), Arc<Vec<String>>>,
}

impl SuggestionEngine {
    pub fn new<I, S>(aliases: I, config: &SuggestionConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut aliases: Vec<String> = aliases.into_iter().map(|a| a.into().to_lowercase()).collect();
        let mut seen = HashSet::new();
        aliases.retain(|alias| seen.insert(alias.clone()));

        let trie = Trie::from_words(&aliases);
        debug!(aliases = aliases.len(), "suggestion engine built");

        Self {
            aliases,
            trie,
            distance: EditDistance::with_capacity(config.distance_cache_capacity),
            cache: Cache::builder().max_capacity(config.cache_capacity).build(),
        }
    }

    /// Engine over the built-in alias table, in sorted order.
    pub fn with_builtin_aliases(config: &SuggestionConfig) -> Self {
        Self::new(units::supported_units(), config)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn suggestions(&self, input: &str, max_suggestions: usize) -> Vec<String> {
        let key = (input.to_string(), max_suggestions);
        if let Some(cached) = self.cache.get(&key) {
            debug!(input, "suggestion cache hit");
            return cached.to_vec();
        }
        debug!(input, "suggestion cache miss");

        let ranked = Arc::new(self.rank(input, max_suggestions));
        self.cache.insert(key, ranked.clone());
        ranked.to_vec()
    }

    pub fn distance(&self) -> &EditDistance {
        &self.distance
    }

    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
        self.distance.clear();
    }

    fn rank(&self, input: &str, max_suggestions: usize) -> Vec<String> {
        if max_suggestions == 0 {
            return Vec::new();
        }

        let prefix_matches = self.trie.words_with_prefix(input);

        let mut scored: Vec<(usize, String)> = prefix_matches
            .iter()
            .map(|word| (self.distance.distance(input, word, None), word.clone()))
            .collect();
        // sort_by_key is stable, so equal scores keep trie order.
        scored.sort_by_key(|(score, _)| *score);

        if scored.len() < max_suggestions {
            let needed = max_suggestions - scored.len();
            let in_prefix: HashSet<&str> = prefix_matches.iter().map(String::as_str).collect();

            let backfill = self
                .aliases
                .iter()
                .enumerate()
                .filter(|(_, alias)| !in_prefix.contains(alias.as_str()))
                .map(|(idx, alias)| (self.distance.distance(input, alias, None), idx));

            scored.extend(
                smallest_k(backfill, needed)
                    .into_iter()
                    .map(|(score, idx)| (score, self.aliases[idx].clone())),
            );
        }

        scored.truncate(max_suggestions);
        scored.into_iter().map(|(_, word)| word).collect()
    }
}
