//! Core REPL state and evaluation.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use numerus_core::{sum, to_roman};
use numerus_parser::parse;

/// REPL state.
pub struct Repl {
    verbose: bool,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Set verbose mode. Verbose output echoes each evaluated line.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Evaluate a single line. Returns the text to print, or `None` for
    /// blank lines and comments.
    pub fn eval(&self, line: &str) -> Result<Option<String>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        if let Some((left, right)) = line.split_once('+') {
            return self.eval_sum(left.trim(), right.trim());
        }

        // Decimal input formats; anything else parses as a numeral.
        if let Ok(value) = line.parse::<i32>() {
            let text = to_roman(value).map_err(|e| e.to_string())?;
            return Ok(Some(text));
        }

        let numeral = parse(line).map_err(|e| e.to_string())?;
        Ok(Some(numeral.value().to_string()))
    }

    fn eval_sum(&self, left: &str, right: &str) -> Result<Option<String>, String> {
        let left = parse(left).map_err(|e| e.to_string())?;
        let right = parse(right).map_err(|e| e.to_string())?;
        let total = sum([left, right]);
        let text = total.to_roman().map_err(|e| e.to_string())?;
        Ok(Some(format!("{} ({})", text, total.value())))
    }

    /// Evaluate a whole script, printing each result.
    pub fn run_script(&self, source: &str) -> Result<(), String> {
        for line in source.lines() {
            if self.verbose {
                println!("> {}", line);
            }
            match self.eval(line)? {
                Some(output) => println!("{}", output),
                None => {}
            }
        }
        Ok(())
    }

    /// Evaluate a file of numeral lines.
    pub fn run_file(&self, path: &Path) -> Result<(), String> {
        let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
        self.run_script(&source)
    }

    /// Interactive prompt loop on stdin/stdout.
    pub fn interactive(&self) {
        println!("numerus - numeral calculator (:help for help, :quit to exit)");
        let stdin = io::stdin();
        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    break;
                }
            }

            let line = line.trim();
            match line {
                ":quit" | ":q" => break,
                ":help" | ":h" => {
                    print_help();
                    continue;
                }
                _ => {}
            }

            match self.eval(line) {
                Ok(Some(output)) => println!("{}", output),
                Ok(None) => {}
                Err(message) => println!("Error: {}", message),
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <numeral>              print its integer value (e.g. MCM -> 1900)");
    println!("  <numeral> + <numeral>  print the canonical sum");
    println!("  <integer>              print its canonical numeral (e.g. 4 -> IV)");
    println!("  :help, :h              show this help");
    println!("  :quit, :q              exit");
}
