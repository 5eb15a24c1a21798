use std::{env, fs::read_to_string, io::{self, BufRead, Write}, process::exit};

use lox::{display_error, lexer::lexer::tokenize};

const EXIT_USAGE: i32 = 64;
const EXIT_DATA_ERROR: i32 = 65;
const EXIT_NO_INPUT: i32 = 66;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => run_prompt(),
        [file_path] => run_file(file_path),
        _ => {
            println!("Usage: lox [script]");
            exit(EXIT_USAGE);
        }
    }
}

fn run_file(file_path: &str) {
    log::info!("Scanning file {:?}", file_path);

    let source = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read file '{}': {}", file_path, err);
            exit(EXIT_NO_INPUT);
        }
    };

    if !run(source, file_path) {
        exit(EXIT_DATA_ERROR);
    }
}

fn run_prompt() {
    log::info!("Starting interactive prompt");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        match lines.next() {
            // Errors on one line never carry over to the next
            Some(Ok(line)) => {
                run(line, "<prompt>");
            }
            Some(Err(err)) => {
                eprintln!("Failed to read input: {}", err);
                break;
            }
            None => {
                println!();
                break;
            }
        }
    }
}

/// Scans `source`, printing tokens and diagnostics. Returns whether the scan was clean.
fn run(source: String, file: &str) -> bool {
    let (tokens, errors) = tokenize(source.clone());

    for token in tokens.iter() {
        println!("{}", token);
    }

    for error in errors.iter() {
        display_error(error, &source, file);
    }

    errors.is_empty()
}
