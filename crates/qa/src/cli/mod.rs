//! CLI support for the `qa` binary.

pub mod args;
pub mod context;
pub mod logging;
pub mod output;

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

pub use args::Cli;
pub use context::CommandContext;
use tracing::debug;

/// Loads the corpus and answers one query.
pub fn run(cli: &Cli) -> ExitCode {
    let ctx = match CommandContext::load(cli) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let query = match cli.query {
        Some(ref query) => query.clone(),
        None => match prompt_query() {
            Ok(Some(query)) => query,
            Ok(None) => {
                eprintln!("error: no query given");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("error: failed to read query: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let terms = ctx.pipeline.tokenizer().tokenize_query(&query);
    debug!(terms = terms.len(), "query normalized");

    let answer = match ctx.pipeline.answer(&ctx.corpus, &terms) {
        Ok(answer) => answer,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        return output::print_json(&query, &terms, &answer);
    }
    if cli.explain {
        for source in &ctx.config.sources {
            println!("Config: {}", source.display());
        }
        output::print_explain(&terms, &answer, ctx.pipeline.limits());
    }
    if answer.is_empty() {
        eprintln!("No answer found.");
    }
    output::print_answer(&answer);
    ExitCode::SUCCESS
}

/// Prints `Query: ` and reads one line from stdin.
///
/// Returns `None` at end of input.
fn prompt_query() -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "Query: ")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
