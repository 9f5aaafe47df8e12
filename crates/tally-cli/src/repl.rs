//! Interactive session

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::render;

const PROMPT: &str = "tally> ";

/// What a single input line asks the session to do.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Skip,
    Quit,
    Help,
    Compute(&'a str),
}

fn classify(line: &str) -> Command<'_> {
    match line.trim() {
        "" => Command::Skip,
        "exit" | "quit" | ":q" => Command::Quit,
        "help" | ":help" | "?" => Command::Help,
        expr => Command::Compute(expr),
    }
}

/// Output for one expression line.
fn respond(line: &str, json: bool) -> String {
    if json {
        return tally::api::handle_calculate(&render::request_body(line)).to_json_string();
    }
    match tally::compute(line) {
        Ok(value) => render::value(value),
        Err(err) => render::error(line, &err),
    }
}

const HELP: &str = "\
Enter an arithmetic expression: numbers, + - * /, unary -, parentheses.
  3 + 4 * 2      => 11
  -(1.5 - 4) / 2 => 1.25
Type `exit` or press Ctrl-D to leave; Ctrl-C clears the line.";

/// Run the read-eval-print loop until EOF or `exit`.
pub fn run(json: bool) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("tally {} - type `help` for usage", tally::VERSION);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                match classify(&line) {
                    Command::Skip => continue,
                    Command::Quit => break,
                    Command::Help => println!("{}", HELP),
                    Command::Compute(expr) => println!("{}", respond(expr, json)),
                }
                editor.add_history_entry(line.as_str())?;
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    log::debug!("session ended");
    Ok(())
}
