use criterion::{Criterion, criterion_group, criterion_main};
use symdelete::SpellingCorrector;

fn bench_spell_check_string(c: &mut Criterion) {
    let dict_file = "words_100k.txt";
    let max_edit_distance = 2;
    let top_k = 5;

    let text_content = "This is a short sntence with some misspelled wrds. It is used for testing the spell checker functionality.".to_string();

    let corrector = symdelete::build_from_file(dict_file, max_edit_distance, Some(7))
        .expect("failed to build corrector from dictionary file");

    // split the text content into words using white spa
    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    c.bench_function("spell_check_words", |b| {
        b.iter(|| {
            let _ = corrector.correct_many(&words, max_edit_distance, top_k);
        })
    });
}

criterion_group!(benches, bench_spell_check_string);
criterion_main!(benches);
