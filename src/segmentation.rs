//! Dynamic-programming word-segmentation check.
//!
//! Each candidate word is judged independently against the vocabulary with
//! a square boolean table, allocated per word and discarded afterward. The
//! table fills diagonally, shortest substrings first, so both halves of
//! any split are already decided when a longer span is examined.

use log::debug;

use crate::finder::{FinderConfig, Report};
use crate::top_k::TopKTracker;
use crate::vocab::Vocabulary;

/// Decide whether `word` splits into two or more other vocabulary words.
///
/// `table[i][j]` records whether the character span i..=j can be fully
/// segmented into vocabulary words, with the span equal to the whole word
/// excluded so a word never "segments" into itself. A split point is
/// accepted as soon as both halves hold; later split points for the same
/// span are not examined.
pub fn is_concatenated(word: &str, vocab: &Vocabulary) -> bool {
    // Char-boundary byte offsets; bounds[i]..bounds[j + 1] spans chars i..=j.
    let mut bounds: Vec<usize> = word.char_indices().map(|(offset, _)| offset).collect();
    bounds.push(word.len());
    let n = bounds.len() - 1;
    if n == 0 {
        return false;
    }

    let mut table = vec![vec![false; n]; n];
    for span in 1..=n {
        for start in 0..=n - span {
            let end = start + span - 1;
            let piece = &word[bounds[start]..bounds[end + 1]];
            if vocab.contains(piece) && piece != word {
                table[start][end] = true;
            } else {
                for split in start + 1..=end {
                    if table[start][split - 1] && table[split][end] {
                        table[start][end] = true;
                        break;
                    }
                }
            }
        }
    }
    table[0][n - 1]
}

/// Check every vocabulary word independently, reporting the count of
/// concatenated words and the longest ones found.
///
/// With the `parallel` feature and `config.use_threads`, words are scanned
/// on a rayon pool with per-worker counters and trackers merged at the
/// end; the vocabulary itself is shared read-only.
pub fn run_dp(vocab: &Vocabulary, config: FinderConfig) -> Report {
    let words: Vec<&str> = vocab.iter().collect();

    let (count, tracker) = if config.use_threads {
        #[cfg(feature = "parallel")]
        {
            parallel_scan(&words, vocab, config)
        }
        #[cfg(not(feature = "parallel"))]
        {
            sequential_scan(&words, vocab, config.top_k)
        }
    } else {
        sequential_scan(&words, vocab, config.top_k)
    };

    debug!("DP checker confirmed {count} concatenated words");
    Report {
        concatenated: count,
        longest: tracker.into_words(),
    }
}

fn sequential_scan(words: &[&str], vocab: &Vocabulary, top_k: usize) -> (usize, TopKTracker) {
    let mut count = 0usize;
    let mut tracker = TopKTracker::new(top_k);
    for word in words {
        if is_concatenated(word, vocab) {
            count += 1;
            if tracker.is_eligible(word) {
                tracker.offer(word);
            }
        }
    }
    (count, tracker)
}

#[cfg(feature = "parallel")]
fn parallel_scan(words: &[&str], vocab: &Vocabulary, config: FinderConfig) -> (usize, TopKTracker) {
    use rayon::ThreadPoolBuilder;
    use rayon::prelude::*;

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.max_workers)
        .build()
        .expect("Failed to build rayon thread pool");

    pool.install(|| {
        words
            .par_iter()
            .fold(
                || (0usize, TopKTracker::new(config.top_k)),
                |(mut count, mut tracker), word| {
                    if is_concatenated(word, vocab) {
                        count += 1;
                        if tracker.is_eligible(word) {
                            tracker.offer(word);
                        }
                    }
                    (count, tracker)
                },
            )
            .reduce(
                || (0usize, TopKTracker::new(config.top_k)),
                |(count_a, mut tracker_a), (count_b, tracker_b)| {
                    tracker_a.merge(tracker_b);
                    (count_a + count_b, tracker_a)
                },
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dp_config() -> FinderConfig {
        FinderConfig {
            use_trie: false,
            ..FinderConfig::default()
        }
    }

    #[test]
    fn detects_two_piece_concatenations() {
        let vocab = Vocabulary::build(["cat", "dog", "catdog"]);
        assert!(is_concatenated("catdog", &vocab));
        assert!(!is_concatenated("cat", &vocab));
        assert!(!is_concatenated("dog", &vocab));
    }

    #[test]
    fn word_never_segments_into_itself() {
        let vocab = Vocabulary::build(["cat"]);
        assert!(!is_concatenated("cat", &vocab));
    }

    #[test]
    fn repeated_piece_counts_as_concatenation() {
        let vocab = Vocabulary::build(["a", "aa"]);
        assert!(is_concatenated("aa", &vocab));
    }

    #[test]
    fn partial_overlap_is_not_enough() {
        // "catsdog" splits as cats+dog but "catsdo" has no full segmentation.
        let vocab = Vocabulary::build(["cat", "cats", "dog", "catsdo"]);
        assert!(!is_concatenated("catsdo", &vocab));
    }

    #[test]
    fn empty_word_is_not_concatenated() {
        let vocab = Vocabulary::build(["cat", ""]);
        assert!(!is_concatenated("", &vocab));
    }

    #[test]
    fn reports_count_and_longest_words() {
        let vocab = Vocabulary::build([
            "cat",
            "cats",
            "catsdogcats",
            "dog",
            "dogcatsdog",
            "hippopotamuses",
            "rat",
            "ratcatdogcat",
        ]);
        let report = run_dp(&vocab, dp_config());
        assert_eq!(report.concatenated, 3);
        assert_eq!(report.longest, vec!["ratcatdogcat", "catsdogcats"]);
    }

    #[test]
    fn empty_vocabulary_yields_empty_report() {
        let report = run_dp(&Vocabulary::default(), dp_config());
        assert_eq!(report.concatenated, 0);
        assert!(report.longest.is_empty());
    }

    #[test]
    fn multibyte_words_segment_cleanly() {
        let vocab = Vocabulary::build(["über", "all", "überall"]);
        assert!(is_concatenated("überall", &vocab));
    }
}
