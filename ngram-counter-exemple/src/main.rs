use log::info;
use ngram_counter_core::{NGramTrie, Observer, TrieConfig, TrieError};

/// Prints insertion progress on the console.
struct ConsoleProgress;

impl Observer for ConsoleProgress {
    fn progress(&self, done: usize, total: usize) {
        if total > 0 {
            println!("insert: {:.1}%", done as f64 * 100.0 / total as f64);
        }
    }

    fn diagnostic(&self, diagnostic: &TrieError) {
        println!("diagnostic: {diagnostic}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows per-insert summaries, RUST_LOG=warn the diagnostics only
    env_logger::init();

    // Character-level model: 3-grams and below
    let mut config = TrieConfig::new(3)?;
    config.set_progress_interval(16)?;
    let mut chars = NGramTrie::from_config(config).with_observer(ConsoleProgress);
    chars.insert_text("abracadabra, the magic word of abracadabra");

    println!("distinct n-grams per length: {:?}", chars.unique_all());
    println!("after 'ab': {:?}", chars.branches(&['a', 'b']));
    println!("P(r | ab) = {:.3}", chars.probability(&['a', 'b', 'r']));
    println!("P(abr)    = {:.3}", chars.unconditional_probability(&['a', 'b', 'r']));

    // Empty queries are not fatal: zero counts and a diagnostic
    let counts = chars.counts(&[]);
    println!("counts([]) = ({}, {})", counts.full, counts.parent);

    // Word-level model: tokens are plain string slices
    let corpus = [
        "the cat sat on the mat",
        "the dog sat on the log",
        "the cat ran to the dog",
    ];
    let mut words: NGramTrie<&str> = NGramTrie::new(2);
    words.insert_all(corpus.map(|line| line.split_whitespace().collect::<Vec<_>>()));
    info!("word model holds {} n-grams", words.len());

    println!("after 'the': {:?}", words.branches(&["the"]));
    println!("most likely after 'sat': {:?}", words.most_likely_next(&["cat", "sat"]));

    // Generate a short continuation by weighted sampling
    let mut rng = rand::rng();
    let mut sentence = vec!["the"];
    while sentence.len() < 8 {
        match words.sample_next(&sentence, &mut rng) {
            Some(word) => sentence.push(word),
            None => break,
        }
    }
    println!("sampled: {}", sentence.join(" "));

    for (path, count) in words.all_branches().iter().take(5) {
        println!("{:>3} {}", count, path.join(" "));
    }

    Ok(())
}
