#[cfg(test)]
mod tests {

    use ron;
    use rs_word_finder::*;

    #[test]
    fn grid_serde_round_trip() {
        let grid = Grid::from_rows(&["chill", "coldw", "windy", "storm", "rainy"]).unwrap();

        let ser = ron::to_string(&grid);
        assert!(ser.is_ok());

        let deser = ron::from_str::<Grid>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), grid);
    }

    #[test]
    fn deserialized_grid_searches_the_same() {
        let grid = Grid::from_rows(&["chill", "coldw", "windy", "storm", "rainy"]).unwrap();
        let words: Vec<String> = ["chill", "cold", "wind", "snow"]
            .iter()
            .map(|word| word.to_string())
            .collect();
        let found = TrieSearcher.find_words(&grid, &words);

        let deser =
            ron::from_str::<Grid>(&ron::to_string(&grid).unwrap()).unwrap();
        let deser_found = TrieSearcher.find_words(&deser, &words);

        assert_eq!(deser_found, found);
    }
}
