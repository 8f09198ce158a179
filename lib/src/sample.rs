//! Sample-data generation for demos and benchmarks.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generates a `size`x`size` grid of random lowercase letters with the given
/// words written into it at random positions, each either left-to-right or
/// top-to-bottom. Words longer than `size` are skipped.
///
/// Embedded words may overwrite each other, so with many words or a small
/// grid, some of them can end up unfindable.
pub fn generate_grid<R: Rng>(rng: &mut R, size: usize, embedded_words: &[&str]) -> Vec<String> {
    let mut cells: Vec<Vec<char>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect()
        })
        .collect();

    for word in embedded_words {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() || letters.len() > size {
            continue;
        }
        let span = size - letters.len();
        if rng.gen_bool(0.5) {
            let row = rng.gen_range(0..size);
            let col = rng.gen_range(0..=span);
            for (offset, letter) in letters.iter().enumerate() {
                cells[row][col + offset] = *letter;
            }
        } else {
            let row = rng.gen_range(0..=span);
            let col = rng.gen_range(0..size);
            for (offset, letter) in letters.iter().enumerate() {
                cells[row + offset][col] = *letter;
            }
        }
    }

    cells.into_iter().map(|row| row.into_iter().collect()).collect()
}
