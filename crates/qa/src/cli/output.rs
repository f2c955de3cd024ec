//! Rendering and JSON serialization for answers.

use std::{collections::HashSet, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use qa_rank::{Answer, Limits};
use serde::Serialize;

/// JSON output for one answered query.
#[derive(Serialize)]
struct JsonAnswer<'a> {
    /// The query as typed.
    query: &'a str,
    /// Normalized query terms, sorted.
    terms: Vec<&'a str>,
    /// Ranked documents.
    files: Vec<JsonFile<'a>>,
    /// Ranked sentences.
    sentences: Vec<JsonSentence<'a>>,
}

/// A ranked document in JSON output.
#[derive(Serialize)]
struct JsonFile<'a> {
    /// Document name.
    name: &'a str,
    /// Summed TF-IDF of query terms.
    score: f64,
}

/// A ranked sentence in JSON output.
#[derive(Serialize)]
struct JsonSentence<'a> {
    /// Sentence text.
    sentence: &'a str,
    /// Summed IDF of matched query terms.
    idf: f64,
    /// Share of sentence tokens that are query terms.
    density: f64,
    /// Combined ranking score.
    score: f64,
}

/// Returns the query terms in a stable order.
fn sorted_terms(terms: &HashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = terms.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Prints the answer sentences, one per line.
pub fn print_answer(answer: &Answer) {
    for sentence in answer.sentence_texts() {
        println!("{sentence}");
    }
}

/// Prints the ranking details behind an answer.
pub fn print_explain(terms: &HashSet<String>, answer: &Answer, limits: Limits) {
    let terms = sorted_terms(terms);
    if terms.is_empty() {
        println!("Query terms: (none)");
    } else {
        println!("Query terms: {}", terms.join(", "));
    }
    println!();

    println!("Top files (limit {}):", limits.files);
    if answer.files.is_empty() {
        println!("  (none)");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["File", "TF-IDF"]);
        for file in &answer.files {
            table.add_row(vec![Cell::new(&file.id), Cell::new(format!("{:.4}", file.score))]);
        }
        println!("{table}");
    }
    println!();

    println!("Top sentences (limit {}):", limits.sentences);
    if answer.sentences.is_empty() {
        println!("  (none)");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Sentence", "IDF", "Density", "Score"]);
        for sentence in &answer.sentences {
            table.add_row(vec![
                Cell::new(&sentence.sentence),
                Cell::new(format!("{:.4}", sentence.idf_sum)),
                Cell::new(format!("{:.4}", sentence.density)),
                Cell::new(format!("{:.4}", sentence.score)),
            ]);
        }
        println!("{table}");
    }
    println!();
}

/// Prints the answer as a single JSON object.
pub fn print_json(query: &str, terms: &HashSet<String>, answer: &Answer) -> ExitCode {
    let output = JsonAnswer {
        query,
        terms: sorted_terms(terms),
        files: answer
            .files
            .iter()
            .map(|f| JsonFile {
                name: &f.id,
                score: f.score,
            })
            .collect(),
        sentences: answer
            .sentences
            .iter()
            .map(|s| JsonSentence {
                sentence: &s.sentence,
                idf: s.idf_sum,
                density: s.density,
                score: s.score,
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize answer: {e}");
            ExitCode::FAILURE
        }
    }
}
