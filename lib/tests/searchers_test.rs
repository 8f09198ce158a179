use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_word_finder::sample;
use rs_word_finder::*;
use std::collections::HashSet;

fn to_string_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn found_set(searcher: &dyn GridSearcher, grid: &Grid, words: &[String]) -> HashSet<String> {
    searcher
        .find_words(grid, words)
        .into_keys()
        .collect()
}

#[test]
fn searchers_agree_on_straight_placements() {
    let grid = Grid::from_rows(&[
        "chills", "coldwx", "windyq", "stormz", "rainyj", "qfrost",
    ])
    .unwrap();
    let words = to_string_vec(&[
        "chill", "cold", "wind", "storm", "rain", "frost", "snow", "rain", "sleet", "cold",
    ]);

    let brute_force = found_set(&BruteForceSearcher, &grid, &words);
    let dfs = found_set(&DfsSearcher, &grid, &words);
    let trie = found_set(&TrieSearcher, &grid, &words);

    assert_eq!(brute_force, dfs);
    assert_eq!(brute_force, trie);
    assert!(!brute_force.contains("snow"));
    assert!(!brute_force.contains("sleet"));
}

#[test]
fn searchers_agree_on_a_generated_grid() {
    let mut rng = StdRng::seed_from_u64(11);
    let rows = sample::generate_grid(&mut rng, 32, &["thunderstorm"]);
    let grid = Grid::from_rows(&rows).unwrap();
    // The absent word is long enough that the random fill cannot plausibly
    // contain it.
    let words = to_string_vec(&["thunderstorm", "thunderstorm", "precipitation"]);

    let brute_force = found_set(&BruteForceSearcher, &grid, &words);
    let dfs = found_set(&DfsSearcher, &grid, &words);
    let trie = found_set(&TrieSearcher, &grid, &words);

    let expected: HashSet<String> = ["thunderstorm".to_string()].into_iter().collect();
    assert_eq!(brute_force, expected);
    assert_eq!(dfs, expected);
    assert_eq!(trie, expected);
}

#[test]
fn searchers_agree_on_counts_for_straight_placements() {
    let grid = Grid::from_rows(&["chill", "coldw", "windy", "storm", "rainy"]).unwrap();
    let words = to_string_vec(&["wind", "rain", "wind", "snow", "wind", "snow"]);

    let brute_force = BruteForceSearcher.find_words(&grid, &words);
    let dfs = DfsSearcher.find_words(&grid, &words);
    let trie = TrieSearcher.find_words(&grid, &words);

    assert_eq!(brute_force, dfs);
    assert_eq!(brute_force, trie);
    assert_eq!(brute_force.get("wind"), Some(&3));
    assert_eq!(brute_force.get("rain"), Some(&1));
}

#[test]
fn selected_searcher_changes_reachable_placements() {
    // "maple" is laid out as a staircase, which only the backtracking
    // searchers can follow.
    let rows = vec!["mapxx", "xxlex", "xxxxx", "xxxxx", "xxxxx"];
    let mut finder = WordFinder::new(&rows).unwrap();

    assert!(finder.find(&["maple"]).is_empty());

    finder.set_searcher(searcher_for_name("dfs"));
    assert_eq!(finder.find(&["maple"]), vec!["maple"]);

    finder.set_searcher(searcher_for_name("trie"));
    assert_eq!(finder.find(&["maple"]), vec!["maple"]);

    finder.set_searcher(searcher_for_name("brute-force"));
    assert!(finder.find(&["maple"]).is_empty());
}
