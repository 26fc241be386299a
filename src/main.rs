use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

use lispy::{run, Builtins, Error, ParseError};

fn main() -> Result<(), String> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => run_repl().map_err(|e| e.to_string())?,
        Some("-e") => {
            let code = args.get(2).ok_or("-e needs an expression")?;
            report(code);
        }
        Some(filename) => run_script(filename)?,
    }
    Ok(())
}

fn run_script(filename: &str) -> Result<(), String> {
    let source = std::fs::read_to_string(filename)
        .map_err(|e| format!("{filename}: {e}"))?;
    for line in source.lines().filter(|l| !l.trim().is_empty()) {
        report(line);
    }
    Ok(())
}

fn report(code: &str) {
    match run(code, Builtins::global()) {
        Ok(outcome) => {
            println!("{}", outcome.generated);
            println!("Matching? {}", outcome.matches(code));
            match outcome.result {
                Ok(value) => println!("Result: {value}"),
                Err(err) => println!("Error: {err}"),
            }
        }
        Err(err) => println!("Error: {err}"),
    }
}

fn needs_continuation(code: &str) -> bool {
    matches!(
        lispy::parse_source(code),
        Err(Error::Parse(ParseError::MissingToken { .. }))
    )
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    let mut pending = String::new();
    #[cfg(feature = "with-file-history")]
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        let prompt = if pending.is_empty() { ">> " } else { ".. " };
        match rl.readline(prompt) {
            Ok(line) => {
                if line.trim().is_empty() && pending.is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                if !pending.is_empty() {
                    pending.push(' ');
                }
                pending.push_str(line.trim_end());
                if needs_continuation(&pending) {
                    continue;
                }
                report(&pending);
                pending.clear();
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history("history.txt")?;
    Ok(())
}
