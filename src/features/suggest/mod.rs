pub mod distance;
pub mod engine;
pub mod heap;
pub mod trie;

pub use distance::EditDistance;
pub use engine::SuggestionEngine;
pub use heap::{smallest_k, MaxHeap};
pub use trie::Trie;
