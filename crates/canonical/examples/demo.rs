use std::env;
use std::fs;

use canonical::{normalize, NormalizeConfig};

fn main() {
    let Some(file_path) = env::args().nth(1) else {
        eprintln!("usage: demo <extracted-text-file>");
        return;
    };
    let content = fs::read_to_string(&file_path).expect("readable text file");

    let cfg = NormalizeConfig::default();
    let out = normalize(&content, &cfg).expect("normalization succeeds");

    println!("normalized: {}", out.as_str());
    println!();
    println!("words: {}", out.word_count());
}
