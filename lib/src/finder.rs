use crate::grid::{Grid, ShapeError};
use crate::searchers::{BruteForceSearcher, GridSearcher};
use std::cmp::Reverse;
use std::collections::HashMap;

/// The maximum number of words returned by [`WordFinder::find`].
const MAX_RESULTS: usize = 10;

/// Binds one [`Grid`] to the currently selected [`GridSearcher`] and reports
/// the most frequent query words that appear in the grid.
#[derive(Clone, Debug)]
pub struct WordFinder {
    grid: Grid,
    searcher: Box<dyn GridSearcher>,
}

impl WordFinder {
    /// Constructs a `WordFinder` over the given grid rows, using
    /// [`BruteForceSearcher`] until another searcher is selected.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<WordFinder, ShapeError> {
        Ok(WordFinder {
            grid: Grid::from_rows(rows)?,
            searcher: Box::new(BruteForceSearcher),
        })
    }

    /// Replaces the active searcher. The grid is unaffected.
    pub fn set_searcher(&mut self, searcher: Box<dyn GridSearcher>) {
        self.searcher = searcher;
    }

    /// Returns the grid being searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Finds the words from the given stream in the grid and returns up to
    /// the 10 most frequent ones, in descending frequency order.
    ///
    /// A word's frequency is its multiplicity in the stream, and only words
    /// that appear in the grid are returned at all. Words with equal
    /// frequency are ordered by their first occurrence in the stream.
    pub fn find<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let words: Vec<String> = words
            .iter()
            .map(|word| word.as_ref().to_string())
            .collect();
        let found = self.searcher.find_words(&self.grid, &words);

        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (index, word) in words.iter().enumerate() {
            first_seen.entry(word.as_str()).or_insert(index);
        }

        let mut ranked: Vec<(String, u32)> = found.into_iter().collect();
        ranked.sort_by_key(|(word, count)| (Reverse(*count), first_seen[word.as_str()]));
        ranked.truncate(MAX_RESULTS);
        ranked.into_iter().map(|(word, _)| word).collect()
    }
}
