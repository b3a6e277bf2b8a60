//! Concatenated-word discovery over a fixed vocabulary.
//!
//! This crate determines which words in a finite vocabulary are formed by
//! joining two or more other vocabulary words end-to-end, reporting the
//! total count plus the longest finds. Two interchangeable algorithms
//! solve the problem: a per-word dynamic-programming segmentation check
//! ([`segmentation`]) and an incremental prefix-tree suffix-propagation
//! pass that amortizes work across words sharing prefixes
//! ([`propagation`]). Both take the same read-only [`Vocabulary`] and
//! produce the same [`Report`] shape.

pub mod finder;
pub mod propagation;
pub mod segmentation;
pub mod top_k;
pub mod trie;
pub mod vocab;
pub mod word_source;

pub use finder::{FinderConfig, Report, find_concatenated, run_trie_propagation};
pub use segmentation::{is_concatenated, run_dp};
pub use top_k::{DEFAULT_TOP_K, TopKTracker};
pub use trie::Trie;
pub use vocab::Vocabulary;
pub use word_source::{WordSourceError, read_words};
