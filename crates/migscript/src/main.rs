use std::io;
use std::process;

use clap::Parser;
use migscript_core::cli::FrontendArgs;
use migscript_core::session;

const BANNER: &[&str] = &[
    "MigScript",
    "Made by drimerdev (2024)",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@     @",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@  @@@@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@   @@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@  @@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@    @@@",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
];

/// MigScript front end.
///
/// Reads MigScript source and prints every token it contains.
#[derive(Parser)]
#[command(
    name = "migscript",
    version,
    about,
    long_about = "MigScript front end.\n\nReads source lines from stdin until an empty line (or a file, when given)\nand prints one line per token.\n\nExamples:\n  migscript                    Type source, finish with an empty line\n  migscript hello.mig          Tokenize a file\n  migscript hello.mig --json   Print tokens as JSON\n  migscript --strict           Fail on unterminated strings"
)]
struct Cli {
    #[command(flatten)]
    args: FrontendArgs,
}

fn main() {
    let cli = Cli::parse();
    let options = cli.args.into_options(BANNER);

    match session::run(&options, io::stdin().lock(), io::stdout().lock()) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
