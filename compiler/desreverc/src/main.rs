//! Desrever CLI

use desreverc::commands::{lex_file, run_file, RunOptions};
use desreverc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut options = RunOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--dump-env" {
                    options.dump_env = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: desrever run <file> [--dump-env]");
                    std::process::exit(1);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: desrever run <file> [--dump-env]");
                std::process::exit(1);
            };

            run_file(path, options);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: desrever lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("desrever {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Desrever - an interpreter for a language with backwards keywords");
    println!();
    println!("Usage: desrever <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Run a program");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --dump-env           Print final variables to stderr");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=desrever_eval=debug");
    println!("  DESREVER_LOG_TREE    Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  desrever run hello.dsv");
    println!("  desrever run loop.dsv --dump-env");
    println!("  desrever lex hello.dsv");
}
