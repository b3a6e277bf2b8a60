//! Trie-driven suffix propagation.
//!
//! Every word seeds the worklist with the suffixes that start where one of
//! its vocabulary-word prefixes ends; words with no such boundary can
//! never be concatenations and are skipped outright. Each drained task
//! either confirms its word (some suffix is itself a complete word) or
//! fans out into the suffixes' own suffixes, every step strictly
//! shortening the unresolved remainder.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, info};

use crate::finder::Report;
use crate::top_k::TopKTracker;
use crate::trie::Trie;
use crate::vocab::{Vocabulary, char_len};

/// A candidate word paired with its currently unresolved suffixes.
///
/// All strings borrow from the vocabulary; suffixes of suffixes are still
/// slices of the original word, so propagation allocates no new strings.
#[derive(Debug, Clone)]
struct SuffixTask<'a> {
    word: &'a str,
    word_len: usize,
    suffixes: Vec<&'a str>,
    seq: u64,
}

impl PartialEq for SuffixTask<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.word_len == other.word_len && self.seq == other.seq
    }
}

impl Eq for SuffixTask<'_> {}

impl Ord for SuffixTask<'_> {
    // Longest original word first; equal lengths pop in insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.word_len
            .cmp(&other.word_len)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SuffixTask<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Drain the suffix worklist for `vocab` over `trie`, reporting the
/// concatenated-word count and the `top_k` longest finds.
pub fn propagate(vocab: &Vocabulary, trie: &Trie, top_k: usize) -> Report {
    let mut queue: BinaryHeap<SuffixTask<'_>> = BinaryHeap::new();
    let mut seq = 0u64;

    for word in vocab.iter() {
        let suffixes = trie.suffixes_of(word);
        if !suffixes.is_empty() {
            queue.push(SuffixTask {
                word,
                word_len: char_len(word),
                suffixes,
                seq,
            });
            seq += 1;
        }
    }
    info!(
        "Seeded worklist with {} of {} words",
        queue.len(),
        vocab.len()
    );

    let mut confirmed: HashSet<&str> = HashSet::new();
    let mut tracker = TopKTracker::new(top_k);

    while let Some(task) = queue.pop() {
        // Lazy deletion: stale tasks for already-confirmed words drop here.
        if confirmed.contains(task.word) {
            continue;
        }

        if task
            .suffixes
            .iter()
            .any(|suffix| trie.contains_word(suffix))
        {
            confirmed.insert(task.word);
            if tracker.is_eligible(task.word) {
                tracker.offer(task.word);
            }
            continue;
        }

        // No suffix was a whole word; queue the suffixes' own suffixes,
        // still tied to the original word.
        for suffix in &task.suffixes {
            let deeper = trie.suffixes_of(suffix);
            if !deeper.is_empty() {
                queue.push(SuffixTask {
                    word: task.word,
                    word_len: task.word_len,
                    suffixes: deeper,
                    seq,
                });
                seq += 1;
            }
        }
    }

    debug!(
        "Suffix propagation confirmed {} concatenated words",
        confirmed.len()
    );
    Report {
        concatenated: confirmed.len(),
        longest: tracker.into_words(),
    }
}
