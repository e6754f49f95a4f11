//! Shared driver for the command-line front ends.
//!
//! Loads `MigScript.toml`, reads the source, tokenizes it, reports any
//! diagnostics and echoes the tokens.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use migscript_common::manifest::{self, ManifestError, MigManifest, OutputFormat};
use thiserror::Error;

use crate::interpreter::{render_json, Interpreter};
use crate::lexer::{Lexer, DEFAULT_FILE};
use crate::log::Logger;
use crate::report;
use crate::source;

/// Errors that stop a session before all tokens are printed.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("could not read '{path}': {source}")]
    ReadSource { path: String, source: io::Error },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a completed session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Strict mode found errors. Tokens were still printed.
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Front-end options, usually straight from the command line.
#[derive(Debug, Clone)]
pub struct Options {
    /// Lines printed before reading input.
    pub banner: &'static [&'static str],
    /// Source file. Console input is read when absent.
    pub input: Option<PathBuf>,
    pub strict: bool,
    pub json: bool,
    pub no_banner: bool,
    pub verbose: bool,
    /// Directory holding MigScript.toml. When unset, a file input searches
    /// its own directory and the ones above it; console input only checks
    /// the working directory.
    pub manifest_dir: Option<PathBuf>,
}

impl Options {
    pub fn new(banner: &'static [&'static str]) -> Self {
        Self {
            banner,
            input: None,
            strict: false,
            json: false,
            no_banner: false,
            verbose: false,
            manifest_dir: None,
        }
    }
}

/// Options after merging the manifest. A flag can add to what the manifest
/// asks for but never undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub strict: bool,
    pub banner: bool,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(options: &Options, log: &Logger) -> Result<Self, SessionError> {
        let mut settings = Settings {
            strict: options.strict,
            banner: !options.no_banner,
            format: if options.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        };

        match load_manifest(options)? {
            Ok(m) => {
                log.debug(format_args!(
                    "loaded {} for '{}' from {}",
                    manifest::MANIFEST_FILE,
                    m.project.name.as_deref().unwrap_or("unnamed"),
                    m.root_dir.display()
                ));
                settings.strict |= m.lexer.strict;
                settings.banner &= m.output.banner;
                if !options.json {
                    settings.format = m.output.output_format();
                }
            }
            Err(ManifestError::NotFound(dir)) => {
                log.debug(format_args!(
                    "no {} found from {}, using defaults",
                    manifest::MANIFEST_FILE,
                    dir
                ));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(settings)
    }
}

fn load_manifest(options: &Options) -> io::Result<Result<MigManifest, ManifestError>> {
    if let Some(ref dir) = options.manifest_dir {
        return Ok(manifest::load_manifest_in(dir));
    }
    match options.input {
        Some(ref path) => {
            let abs = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            let dir = abs.parent().unwrap_or_else(|| Path::new("."));
            Ok(manifest::find_and_load_manifest(dir))
        }
        None => Ok(manifest::load_manifest_in(&std::env::current_dir()?)),
    }
}

/// Run one front-end session: banner, read, tokenize, report, echo.
pub fn run(
    options: &Options,
    stdin: impl BufRead,
    mut out: impl Write,
) -> Result<Outcome, SessionError> {
    let log = Logger::new(options.verbose);
    let settings = Settings::resolve(options, &log)?;

    if settings.banner {
        for line in options.banner {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
    }

    let (source, file_name) = match options.input {
        Some(ref path) => {
            let text = source::read_file(path).map_err(|e| SessionError::ReadSource {
                path: path.display().to_string(),
                source: e,
            })?;
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            (text, name)
        }
        None => (source::read_source(stdin)?, DEFAULT_FILE.to_string()),
    };
    log.debug(format_args!("read {} bytes from {}", source.len(), file_name));

    let (tokens, diags) = Lexer::new(&source, file_name.as_str())
        .strict(settings.strict)
        .tokenize();
    log.debug(format_args!("scanned {} tokens", tokens.len()));

    for diag in diags.diagnostics() {
        report::print_diagnostic(diag, &source, &file_name)?;
    }

    match settings.format {
        OutputFormat::Text => Interpreter::new(&mut out).interpret(&tokens)?,
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(&tokens)?)?;
            out.flush()?;
        }
    }

    if diags.has_errors() {
        log.info(format_args!(
            "{} error(s) in {}",
            diags.diagnostics().len(),
            file_name
        ));
        Ok(Outcome::Failed)
    } else {
        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &[&str] = &["Test", "banner"];

    fn isolated() -> Options {
        let mut options = Options::new(BANNER);
        options.manifest_dir = Some(PathBuf::from("/nonexistent-migscript-dir"));
        options
    }

    #[test]
    fn defaults_without_manifest() {
        let settings = Settings::resolve(&isolated(), &Logger::new(false)).unwrap();
        assert_eq!(
            settings,
            Settings {
                strict: false,
                banner: true,
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn flags_turn_features_on() {
        let mut options = isolated();
        options.strict = true;
        options.json = true;
        options.no_banner = true;
        let settings = Settings::resolve(&options, &Logger::new(false)).unwrap();
        assert!(settings.strict);
        assert!(!settings.banner);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(Outcome::Success.exit_code(), 0);
        assert_eq!(Outcome::Failed.exit_code(), 1);
    }

    #[test]
    fn missing_input_file_is_read_error() {
        let mut options = isolated();
        options.input = Some(PathBuf::from("/nonexistent-migscript-dir/a.mig"));
        let err = run(&options, io::empty(), Vec::new()).unwrap_err();
        assert!(matches!(err, SessionError::ReadSource { .. }));
        assert!(err.to_string().starts_with("could not read '"));
    }
}
