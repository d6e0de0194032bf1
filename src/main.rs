use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use clap::Parser;
use minilex::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    format_token,
    lexer::lexer::Scanner,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEMO_PROGRAM: &str = "123 + 456 - 789\n\
                            if repeat until x = 10;\n\
                            someVariable another_var 123abc\n\
                            \"Hello, world!\" \"Unclosed string\n\
                            // This is a comment\n\
                            /* Multi-line comment\nstill inside */\n\
                            y = \"escaped \\\"quotes\\\" inside\";\n\
                            /* Unterminated comment starts here...";

#[derive(Parser)]
#[command(author, version, about = "Scan a source file and list its tokens", long_about = None)]
struct Cli {
    /// Source file to scan; the built-in demo program is used when omitted
    file: Option<PathBuf>,

    /// Log scanner events at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print each lexical error under its source line
    #[arg(long)]
    caret: bool,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let (source, file_name) = match &cli.file {
        Some(path) => {
            let source = read_to_string(path).map_err(|e| {
                Error::new(
                    ErrorImpl::SourceUnreadable {
                        path: path.to_string_lossy().into_owned(),
                        reason: e.to_string(),
                    },
                    None,
                )
            })?;
            (source, path.to_string_lossy().into_owned())
        }
        None => (DEMO_PROGRAM.to_string(), String::from("<demo>")),
    };

    debug!("scanning {} ({} bytes)", file_name, source.len());

    println!("Analyzing input:\n{}\n", source);

    let mut errors = 0;

    for token in Scanner::new(&source) {
        println!("{}", format_token(&token));

        if let Some(error) = Error::from_token(&token) {
            errors += 1;
            if cli.caret {
                print!("{}", display_error(&error, &token, &source, &file_name));
            }
        }
    }

    info!("scan of {} finished with {} lexical error(s)", file_name, errors);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
