//! qa: question answering over a directory of text documents.
//!
//! qa loads every text file under a directory, ranks the files against a
//! natural-language query with TF-IDF, and prints the best matching sentences
//! from the top files. Ranking lives in `qa-rank`; this crate wires it to the
//! command line, configuration and logging.

#![warn(missing_docs)]

pub mod cli;
