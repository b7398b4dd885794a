//! The inverted index over scenario names.

use std::collections::{HashMap, HashSet};

use crate::token::tokenize;

/// A record that can be indexed by its display name.
///
/// The index treats records as otherwise opaque; this is the only thing it
/// reads from them.
pub trait Searchable {
    /// The human-readable name the record is found under.
    fn display_name(&self) -> &str;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// An inverted index from name words to the scenarios containing them.
///
/// Construct one per loaded report, `add` every scenario once, then query
/// freely. There is no removal; the index is dropped and rebuilt when the
/// underlying report changes.
///
/// `add` must not be interleaved with `search` from another thread; wrap the
/// whole index in a mutex if the host cannot guarantee single-threaded use.
#[derive(Debug)]
pub struct ScenarioSearch<T> {
    /// Records in insertion order. The slot doubles as the record's
    /// identity, so two records with identical names stay distinct.
    records: Vec<T>,
    /// Name word -> slots of the records whose name contains it. Slots are
    /// appended in insertion order and at most once per word, so each list
    /// is sorted and duplicate-free.
    postings: HashMap<String, Vec<usize>>,
}

impl<T> Default for ScenarioSearch<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            postings: HashMap::new(),
        }
    }
}

impl<T: Searchable> ScenarioSearch<T> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records added so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds one record to the index.
    ///
    /// Any name is acceptable; a name that yields no tokens (empty or
    /// punctuation-only) is stored but only ever matched by a query that
    /// also yields no tokens.
    pub fn add(&mut self, record: T) {
        let slot = self.records.len();
        let mut seen = HashSet::new();
        for word in tokenize(record.display_name()) {
            if seen.insert(word.clone()) {
                self.postings.entry(word).or_default().push(slot);
            }
        }
        self.records.push(record);
    }

    /// Returns every record matching the query, in unspecified order.
    ///
    /// A record matches when each query word is a substring of at least one
    /// word of its name, case-insensitively. Query words may match different
    /// name words. A query with no words matches every record (vacuous AND);
    /// callers that want a blank filter to show nothing simply skip the
    /// call.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let words = tokenize(query);
        if words.is_empty() {
            return self.records.iter().collect();
        }

        let mut matched: Option<HashSet<usize>> = None;
        for word in &words {
            let hits = self.slots_containing(word);
            let narrowed = match matched {
                Some(prev) => prev.intersection(&hits).copied().collect(),
                None => hits,
            };
            if narrowed.is_empty() {
                return Vec::new();
            }
            matched = Some(narrowed);
        }

        matched
            .unwrap_or_default()
            .into_iter()
            .map(|slot| &self.records[slot])
            .collect()
    }

    /// Slots of every record with a name word containing `word`.
    ///
    /// Substring matching rules out a direct map lookup, so this scans the
    /// distinct word set. Posting lists keep that proportional to the words
    /// seen, not to the full record count.
    fn slots_containing(&self, word: &str) -> HashSet<usize> {
        let mut slots = HashSet::new();
        for (indexed, posting) in &self.postings {
            if indexed.contains(word) {
                slots.extend(posting.iter().copied());
            }
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Minimal record with an identity separate from its name.
    #[derive(Debug, PartialEq, Eq, Hash)]
    struct Scenario {
        id: u32,
        name: &'static str,
    }

    impl Searchable for Scenario {
        fn display_name(&self) -> &str {
            self.name
        }
    }

    fn sample_index() -> ScenarioSearch<Scenario> {
        let mut index = ScenarioSearch::new();
        index.add(Scenario {
            id: 1,
            name: "a passed scenario",
        });
        index.add(Scenario {
            id: 2,
            name: "another passed scenario",
        });
        index.add(Scenario {
            id: 3,
            name: "a failed scenario",
        });
        index
    }

    /// Order is not part of the contract, so assertions compare id sets.
    fn ids(results: &[&Scenario]) -> HashSet<u32> {
        results.iter().map(|s| s.id).collect()
    }

    #[test]
    fn no_hits_returns_empty() {
        let index = sample_index();
        assert!(index.search("no match there").is_empty());
    }

    #[test]
    fn single_word_narrows() {
        let index = sample_index();
        assert_eq!(ids(&index.search("failed")), HashSet::from([3]));
    }

    #[test]
    fn common_word_matches_all() {
        let index = sample_index();
        assert_eq!(ids(&index.search("scenario")), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn multiple_words_are_anded() {
        let index = sample_index();
        assert_eq!(ids(&index.search("passed scenario")), HashSet::from([1, 2]));
    }

    #[test]
    fn query_words_may_match_different_name_words() {
        let index = sample_index();
        assert_eq!(ids(&index.search("failed a")), HashSet::from([3]));
    }

    #[test]
    fn case_insensitive() {
        let index = sample_index();
        assert_eq!(ids(&index.search("PASSED")), ids(&index.search("passed")));
        assert_eq!(ids(&index.search("PASSED")), HashSet::from([1, 2]));
    }

    #[test]
    fn substring_of_a_word_matches() {
        let index = sample_index();
        assert_eq!(ids(&index.search("cen")), HashSet::from([1, 2, 3]));
        assert_eq!(ids(&index.search("ail")), HashSet::from([3]));
    }

    #[test]
    fn word_spanning_two_name_words_does_not_match() {
        let index = sample_index();
        // "passedscenario" is not a substring of any single word.
        assert!(index.search("passedscenario").is_empty());
    }

    #[test]
    fn no_duplicates_when_several_words_match() {
        let mut index = ScenarioSearch::new();
        index.add(Scenario {
            id: 1,
            name: "scenario inside a scenario",
        });
        let results = index.search("scen");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn identical_names_stay_distinct() {
        let mut index = ScenarioSearch::new();
        index.add(Scenario {
            id: 1,
            name: "duplicate",
        });
        index.add(Scenario {
            id: 2,
            name: "duplicate",
        });
        assert_eq!(ids(&index.search("duplicate")), HashSet::from([1, 2]));
    }

    #[test]
    fn empty_query_matches_everything() {
        let index = sample_index();
        assert_eq!(ids(&index.search("")), HashSet::from([1, 2, 3]));
        assert_eq!(ids(&index.search("  ...  ")), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn tokenless_name_only_matched_by_tokenless_query() {
        let mut index = ScenarioSearch::new();
        index.add(Scenario { id: 1, name: "---" });
        index.add(Scenario {
            id: 2,
            name: "real name",
        });
        assert_eq!(ids(&index.search("")), HashSet::from([1, 2]));
        assert_eq!(ids(&index.search("name")), HashSet::from([2]));
    }

    #[test]
    fn repeated_searches_are_stable() {
        let index = sample_index();
        let first = ids(&index.search("passed"));
        for _ in 0..5 {
            assert_eq!(ids(&index.search("passed")), first);
        }
    }

    #[test]
    fn never_returns_unadded_records() {
        let index = sample_index();
        for result in index.search("scenario") {
            assert!(index.records.iter().any(|r| std::ptr::eq(r, result)));
        }
    }

    #[test]
    fn empty_index_searches_cleanly() {
        let index: ScenarioSearch<Scenario> = ScenarioSearch::new();
        assert!(index.is_empty());
        assert!(index.search("anything").is_empty());
        assert!(index.search("").is_empty());
    }
}
