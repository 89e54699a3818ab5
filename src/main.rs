use std::{fs, io};

use clap::Parser;
use deskcalc::{eval_script, repl};

/// deskcalc is an interactive desk calculator for double precision
/// arithmetic with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells deskcalc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Script to evaluate; the interactive prompt starts when omitted.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();

    let outcome = match args.script {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                })
            } else {
                contents
            };

            eval_script(&script).map(|result| {
                                    if let Some(value) = result {
                                        println!("{value}");
                                    }
                                })
        },
        None => {
            let stdin = io::stdin();
            repl::run(stdin.lock(), io::stdout(), io::stderr())
        },
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
