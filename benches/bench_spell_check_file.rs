use std::fs;
use std::time::Instant;

use symdelete::SpellingCorrector;

fn main() {
    let dict_file = "words_100k.txt";
    let text_file = "benches/test_text.txt";
    let max_edit_distance = 2;
    let top_k = 5;

    let text_content = fs::read_to_string(text_file).expect("Unable to read text file, please ensure you have a file named test_text.txt in the current directory with any text contents.");

    let corrector = symdelete::build_from_file(dict_file, max_edit_distance, Some(7))
        .expect("failed to build corrector from dictionary file");

    // split the text content into words using white spa
    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    let start_time = Instant::now();

    let _ = corrector.correct_many(&words, max_edit_distance, top_k);

    let elapsed_time = start_time.elapsed();
    println!("Elapsed time for spell checking: {:?}", elapsed_time);
    println!(
        "Words corrected per second: {}",
        words.len() as f64 / elapsed_time.as_secs_f64()
    );
}
