use crate::grid::Grid;
use crate::trie::{Trie, TrieNode};
use dyn_clone::DynClone;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt::Debug;

/// Counts how often each word in a query stream appears in a grid.
///
/// Each implementation searches differently, but all of them agree on the
/// counting rule. The query stream is scanned in order: a word already
/// counted in this call is incremented, while an unseen word is inserted
/// with count 1 if and only if it can be found in the grid. Words that never
/// appear in the grid are omitted entirely, no matter how often they repeat
/// in the stream. The count is therefore the word's multiplicity in the
/// query stream, not the number of grid placements.
///
/// Generally you want [`TrieSearcher`] when the query stream is large, since
/// it sweeps the grid once regardless of how many words are searched for.
/// [`BruteForceSearcher`] and [`DfsSearcher`] search per word and are a
/// better fit for short streams.
pub trait GridSearcher: DynClone + Debug {
    /// Finds the given words in the grid and returns each found word with
    /// its count per the counting rule above.
    fn find_words(&self, grid: &Grid, words: &[String]) -> HashMap<String, u32>;
}

dyn_clone::clone_trait_object!(GridSearcher);

/// Returns the searcher registered under the given name.
///
/// The recognized names are `"brute-force"`, `"dfs"` and `"trie"`. Any other
/// name falls back to [`TrieSearcher`] rather than failing.
pub fn searcher_for_name(name: &str) -> Box<dyn GridSearcher> {
    match name {
        "brute-force" => Box::new(BruteForceSearcher),
        "dfs" => Box::new(DfsSearcher),
        "trie" => Box::new(TrieSearcher),
        _ => Box::new(TrieSearcher),
    }
}

/// Words are placed left-to-right or top-to-bottom only.
const DIRECTIONS: [(usize, usize); 2] = [(0, 1), (1, 0)];

/// Applies the shared counting rule, using `is_present` to decide whether a
/// not-yet-counted word exists anywhere in the grid.
fn count_stream_with<F>(words: &[String], mut is_present: F) -> HashMap<String, u32>
where
    F: FnMut(&str) -> bool,
{
    let mut found: HashMap<String, u32> = HashMap::new();
    for word in words {
        if let Some(count) = found.get_mut(word) {
            *count += 1;
        } else if is_present(word) {
            found.insert(word.clone(), 1);
        }
    }
    found
}

/// Searches each word by testing a straight horizontal run and a straight
/// vertical run from every starting cell.
///
/// Checking one word costs O(rows * cols * len), so a full call costs
/// O(words * rows * cols * len).
#[derive(Clone, Debug, Default)]
pub struct BruteForceSearcher;

impl BruteForceSearcher {
    fn search_word(grid: &Grid, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        for row in 0..grid.num_rows() {
            for col in 0..grid.num_cols() {
                if Self::matches_right(grid, &letters, row, col)
                    || Self::matches_down(grid, &letters, row, col)
                {
                    return true;
                }
            }
        }
        false
    }

    fn matches_right(grid: &Grid, letters: &[char], row: usize, col: usize) -> bool {
        if col + letters.len() > grid.num_cols() {
            return false;
        }
        letters
            .iter()
            .enumerate()
            .all(|(offset, letter)| grid.get(row, col + offset) == Some(*letter))
    }

    fn matches_down(grid: &Grid, letters: &[char], row: usize, col: usize) -> bool {
        if row + letters.len() > grid.num_rows() {
            return false;
        }
        letters
            .iter()
            .enumerate()
            .all(|(offset, letter)| grid.get(row + offset, col) == Some(*letter))
    }
}

impl GridSearcher for BruteForceSearcher {
    fn find_words(&self, grid: &Grid, words: &[String]) -> HashMap<String, u32> {
        count_stream_with(words, |word| Self::search_word(grid, word))
    }
}

/// Searches each word with a backtracking walk from every starting cell,
/// matching one character per step and moving right or down.
///
/// Unlike [`BruteForceSearcher`], the walk may change direction mid-word, so
/// a word laid out as a staircase of right and down steps is also found.
/// Cells on the current path are excluded through a visited mask that is
/// unmarked when the walk backtracks, on failing branches as well as
/// successful ones, so the mask is clean between starting cells.
#[derive(Clone, Debug, Default)]
pub struct DfsSearcher;

impl DfsSearcher {
    fn search_word(grid: &Grid, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        let mut visited = vec![false; grid.num_rows() * grid.num_cols()];
        for row in 0..grid.num_rows() {
            for col in 0..grid.num_cols() {
                if Self::walk(grid, &letters, row, col, &mut visited) {
                    return true;
                }
            }
        }
        false
    }

    fn walk(grid: &Grid, remaining: &[char], row: usize, col: usize, visited: &mut [bool]) -> bool {
        let Some((expected, rest)) = remaining.split_first() else {
            return true;
        };
        let Some(letter) = grid.get(row, col) else {
            return false;
        };
        let cell = grid.cell_index(row, col);
        if visited[cell] || letter != *expected {
            return false;
        }

        visited[cell] = true;
        let found = DIRECTIONS
            .iter()
            .any(|(down, right)| Self::walk(grid, rest, row + down, col + right, visited));
        visited[cell] = false;
        found
    }
}

impl GridSearcher for DfsSearcher {
    fn find_words(&self, grid: &Grid, words: &[String]) -> HashMap<String, u32> {
        count_stream_with(words, |word| Self::search_word(grid, word))
    }
}

/// Searches for every query word in a single sweep of the grid.
///
/// A [`Trie`] is built from the distinct words in the stream, then a walk
/// from every starting cell follows trie children keyed by the cell
/// characters, using the same directions and visited discipline as
/// [`DfsSearcher`]. Every terminal node reached marks its word as present.
/// The sweep costs O(rows * cols * longestWord) regardless of how many
/// words are in the stream, at the price of O(totalWordChars) trie memory.
/// The trie is rebuilt on every call; nothing is cached across calls.
#[derive(Clone, Debug, Default)]
pub struct TrieSearcher;

impl TrieSearcher {
    fn words_in_grid(grid: &Grid, words: &[String]) -> HashSet<String> {
        let mut trie = Trie::new();
        let distinct: HashSet<&str> = words.iter().map(String::as_str).collect();
        for word in distinct {
            trie.insert(word);
        }

        let mut present = HashSet::new();
        let mut visited = vec![false; grid.num_rows() * grid.num_cols()];
        for row in 0..grid.num_rows() {
            for col in 0..grid.num_cols() {
                Self::walk(grid, trie.root(), row, col, &mut visited, &mut present);
            }
        }
        present
    }

    fn walk(
        grid: &Grid,
        node: &TrieNode,
        row: usize,
        col: usize,
        visited: &mut [bool],
        present: &mut HashSet<String>,
    ) {
        let Some(letter) = grid.get(row, col) else {
            return;
        };
        let cell = grid.cell_index(row, col);
        if visited[cell] {
            return;
        }
        let Some(next) = node.child(letter) else {
            return;
        };
        if let Some(word) = next.word() {
            // Found once is permanent; re-encountering a word is a no-op.
            present.insert(word.to_string());
        }

        visited[cell] = true;
        for (down, right) in DIRECTIONS {
            Self::walk(grid, next, row + down, col + right, visited, present);
        }
        visited[cell] = false;
    }
}

impl GridSearcher for TrieSearcher {
    fn find_words(&self, grid: &Grid, words: &[String]) -> HashMap<String, u32> {
        let present = Self::words_in_grid(grid, words);
        let mut found: HashMap<String, u32> = HashMap::new();
        for word in words {
            if present.contains(word.as_str()) {
                *found.entry(word.clone()).or_insert(0) += 1;
            }
        }
        found
    }
}


#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use crate::sample;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test::Bencher;

    const EMBEDDED: [&str; 6] = ["search", "stack", "queue", "graph", "cache", "trie"];

    fn sample_grid() -> Grid {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = sample::generate_grid(&mut rng, 32, &EMBEDDED);
        Grid::from_rows(&rows).unwrap()
    }

    #[bench]
    fn bench_brute_force_sweep(b: &mut Bencher) {
        let grid = sample_grid();
        let words: Vec<String> = EMBEDDED.iter().map(|word| word.to_string()).collect();

        b.iter(|| BruteForceSearcher.find_words(&grid, &words));
    }

    #[bench]
    fn bench_trie_sweep(b: &mut Bencher) {
        let grid = sample_grid();
        let words: Vec<String> = EMBEDDED.iter().map(|word| word.to_string()).collect();

        b.iter(|| TrieSearcher.find_words(&grid, &words));
    }
}
