//! Counting adjacent word pairs
//!
//! The count table is the only mutable state in the whole run. It starts empty,
//! one accumulator call per accepted title feeds it, and at the end it freezes
//! into a ranked list of rows. Accumulation is just addition, so the order the
//! titles arrive in never changes the final counts.
use farm::{self, FarmMap};

/// An ordered pair of consecutive normalized words.
///
/// Order matters: (neural, network) and (network, neural) are different keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bigram {
    pub word1: String,
    pub word2: String,
}

impl Bigram {
    pub fn new(word1: &str, word2: &str) -> Self {
        Bigram { word1: word1.to_owned(), word2: word2.to_owned() }
    }
}

/// One output row: a distinct bigram and how often it occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountedBigram {
    pub word1: String,
    pub word2: String,
    pub n: u64,
}

/// Running bigram counts across every accepted title.
pub struct Accumulator {
    counts: FarmMap<Bigram, u64>,
    total: u64,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator { counts: farm::new_farm(), total: 0 }
    }

    /// Fold one title's surviving word sequence into the table.
    ///
    /// A sequence of n words contributes its n-1 adjacent pairs; fewer than two
    /// words contribute nothing.
    pub fn observe(&mut self, words: &[String]) {
        for pair in words.windows(2) {
            *self.counts.entry(Bigram::new(&pair[0], &pair[1])).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// How many distinct bigrams have been seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// How many pairs have been accumulated in total (the sum of all counts).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Freeze the table into ranked rows.
    ///
    /// Hashmap iteration order is nothing anyone should depend on, so the rows
    /// get an explicit order: highest count first, ties broken by (word1, word2)
    /// lexicographically.
    pub fn into_rows(self) -> Vec<CountedBigram> {
        let mut rows: Vec<CountedBigram> = self.counts.into_iter()
            .map(|(bigram, n)| CountedBigram { word1: bigram.word1, word2: bigram.word2, n: n })
            .collect();
        rows.sort_by(|a, b| {
            b.n.cmp(&a.n)
                .then_with(|| a.word1.cmp(&b.word1))
                .then_with(|| a.word2.cmp(&b.word2))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_short_sequences_contribute_nothing() {
        let mut accum = Accumulator::new();
        accum.observe(&[]);
        accum.observe(&seq(&["lonely"]));
        assert_eq!(accum.distinct(), 0);
        assert_eq!(accum.total(), 0);
    }

    #[test]
    fn test_adjacent_pairs_in_order() {
        let mut accum = Accumulator::new();
        accum.observe(&seq(&["a", "b", "c"]));
        let rows = accum.into_rows();
        assert_eq!(rows, vec![
            CountedBigram { word1: "a".into(), word2: "b".into(), n: 1 },
            CountedBigram { word1: "b".into(), word2: "c".into(), n: 1 },
        ]);
    }

    #[test]
    fn test_pair_order_is_significant() {
        let mut accum = Accumulator::new();
        accum.observe(&seq(&["x", "y", "x"]));
        assert_eq!(accum.distinct(), 2); // (x,y) and (y,x) are distinct keys
        assert_eq!(accum.total(), 2);
    }

    #[test]
    fn test_counts_add_up_across_titles() {
        let mut accum = Accumulator::new();
        accum.observe(&seq(&["deep", "learning", "model"]));
        accum.observe(&seq(&["deep", "learning"]));
        accum.observe(&seq(&["deep", "learning", "hype"]));
        assert_eq!(accum.total(), 5);
        let rows = accum.into_rows();
        assert_eq!(rows.len(), 3);
        // Invariant: the sum of n equals the number of pairs accumulated.
        assert_eq!(rows.iter().map(|r| r.n).sum::<u64>(), 5);
        // Ranked: the repeated pair comes first, ties sort lexicographically.
        assert_eq!(rows[0],
            CountedBigram { word1: "deep".into(), word2: "learning".into(), n: 3 });
        assert_eq!(rows[1],
            CountedBigram { word1: "learning".into(), word2: "hype".into(), n: 1 });
        assert_eq!(rows[2],
            CountedBigram { word1: "learning".into(), word2: "model".into(), n: 1 });
    }

    #[test]
    fn test_observation_order_does_not_matter() {
        let titles = [seq(&["a", "b"]), seq(&["b", "c"]), seq(&["a", "b", "c"])];
        let mut forward = Accumulator::new();
        for t in titles.iter() { forward.observe(t); }
        let mut backward = Accumulator::new();
        for t in titles.iter().rev() { backward.observe(t); }
        assert_eq!(forward.into_rows(), backward.into_rows());
    }
}
