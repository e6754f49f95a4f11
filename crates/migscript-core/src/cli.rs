use std::path::PathBuf;

use clap::Args;

use crate::session::Options;

/// Flags shared by every MigScript front end.
#[derive(Args, Debug, Clone, Default)]
pub struct FrontendArgs {
    /// Source file to tokenize. Without it, lines are read from stdin up to
    /// the first empty line.
    pub input: Option<PathBuf>,

    /// Report unterminated strings as errors (exit status 1).
    #[arg(long)]
    pub strict: bool,

    /// Print the token stream as JSON.
    #[arg(long)]
    pub json: bool,

    /// Do not print the startup banner.
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Write [DEBUG] progress lines to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl FrontendArgs {
    pub fn into_options(self, banner: &'static [&'static str]) -> Options {
        Options {
            banner,
            input: self.input,
            strict: self.strict,
            json: self.json,
            no_banner: self.no_banner,
            verbose: self.verbose,
            manifest_dir: None,
        }
    }
}
