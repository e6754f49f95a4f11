use std::io;
use std::process;

use clap::Parser;
use migscript_core::cli::FrontendArgs;
use migscript_core::session;

const BANNER: &[&str] = &["MigScript", "Made by drimerdev (2024)"];

/// MigScript terminal.
///
/// Same token echo as `migscript`, with a two-line banner.
#[derive(Parser)]
#[command(name = "migscript-terminal", version, about)]
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
