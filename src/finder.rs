//! Unified entry points over the two finder algorithms.

use log::info;

use crate::propagation;
use crate::segmentation;
use crate::top_k::DEFAULT_TOP_K;
use crate::trie::Trie;
use crate::vocab::Vocabulary;

/// Configuration options that govern a finder run.
#[derive(Debug, Clone, Copy)]
pub struct FinderConfig {
    /// Number of longest concatenated words to report.
    pub top_k: usize,
    /// Use trie suffix propagation instead of the per-word DP checker
    /// (default: true).
    pub use_trie: bool,
    /// Enable the threaded DP scan (requires the `parallel` feature).
    pub use_threads: bool,
    /// Desired worker count when threading is enabled.
    pub max_workers: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            use_trie: true,
            use_threads: false,
            max_workers: 1,
        }
    }
}

/// Result summary produced by either algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of distinct vocabulary words that are concatenations of
    /// two or more other vocabulary words.
    pub concatenated: usize,
    /// The longest confirmed words, longest first.
    pub longest: Vec<String>,
}

/// Run the configured algorithm over the vocabulary.
///
/// Both paths take the same read-only vocabulary and produce the same
/// result shape, so callers can swap them freely. Every call starts from
/// fresh tracker and worklist state.
pub fn find_concatenated(vocab: &Vocabulary, config: FinderConfig) -> Report {
    if config.use_trie {
        run_trie_propagation(vocab, config.top_k)
    } else {
        segmentation::run_dp(vocab, config)
    }
}

/// Build the prefix tree and drain the suffix-propagation worklist.
pub fn run_trie_propagation(vocab: &Vocabulary, top_k: usize) -> Report {
    let trie = Trie::build(vocab.iter());
    info!("Trie built with {} nodes", trie.node_count());
    propagation::propagate(vocab, &trie, top_k)
}
