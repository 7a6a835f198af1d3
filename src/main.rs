use rand::{rngs::StdRng, SeedableRng};
use wordseeker::{Difficulty, Puzzle, PuzzleConfig};

fn main() {
    env_logger::init();

    let words = [
        String::from("Swift"),
        String::from("Kotlin"),
        String::from("ObjectiveC"),
        String::from("Variable"),
        String::from("Java"),
        String::from("Mobile"),
    ];

    let puzzle = Puzzle::generate(
        &PuzzleConfig {
            grid_size: 10,
            difficulty: Difficulty::Hard,
            words: &words,
        },
        &mut StdRng::from_entropy(),
    )
    .unwrap();

    println!("{}", puzzle);
}
