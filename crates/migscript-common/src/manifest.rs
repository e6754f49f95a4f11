use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const MANIFEST_FILE: &str = "MigScript.toml";

/// The parsed MigScript.toml manifest.
#[derive(Debug, Clone)]
pub struct MigManifest {
    pub project: ProjectSection,
    pub lexer: LexerSection,
    pub output: OutputSection,
    /// The directory containing the MigScript.toml file.
    pub root_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexerSection {
    /// Report unterminated strings as errors.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_banner")]
    pub banner: bool,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            format: default_format(),
        }
    }
}

fn default_banner() -> bool {
    true
}
fn default_format() -> String {
    "text".to_string()
}

/// How tokens are written by the echo pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputSection {
    /// Validated output format. `parse_manifest` already rejects unknown names.
    pub fn output_format(&self) -> OutputFormat {
        match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Raw TOML structure for deserialization.
#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    project: ProjectSection,
    #[serde(default)]
    lexer: LexerSection,
    #[serde(default)]
    output: OutputSection,
}

/// Errors that can occur when loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("no MigScript.toml found (searched from {0})")]
    NotFound(String),
    #[error("failed to read MigScript.toml: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid MigScript.toml: {0}")]
    ParseError(String),
    #[error("invalid MigScript.toml: [output] unknown format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
}

/// Walk up from `start_dir` looking for `MigScript.toml`.
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate a MigScript.toml manifest from a file path.
pub fn load_manifest(path: &Path) -> Result<MigManifest, ManifestError> {
    let content = std::fs::read_to_string(path)?;
    let root_dir = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    parse_manifest(&content, root_dir)
}

/// Parse and validate a MigScript.toml manifest from a string.
pub fn parse_manifest(content: &str, root_dir: PathBuf) -> Result<MigManifest, ManifestError> {
    let raw: RawManifest =
        toml::from_str(content).map_err(|e| ManifestError::ParseError(e.to_string()))?;

    match raw.output.format.as_str() {
        "text" | "json" => {}
        other => return Err(ManifestError::UnknownFormat(other.to_string())),
    }

    Ok(MigManifest {
        project: raw.project,
        lexer: raw.lexer,
        output: raw.output,
        root_dir,
    })
}

/// Find and load the manifest, walking up from `start_dir`.
pub fn find_and_load_manifest(start_dir: &Path) -> Result<MigManifest, ManifestError> {
    let manifest_path = find_manifest(start_dir)
        .ok_or_else(|| ManifestError::NotFound(start_dir.display().to_string()))?;
    load_manifest(&manifest_path)
}

/// Load the manifest from `dir` itself, without looking in parent directories.
pub fn load_manifest_in(dir: &Path) -> Result<MigManifest, ManifestError> {
    let candidate = dir.join(MANIFEST_FILE);
    if !candidate.is_file() {
        return Err(ManifestError::NotFound(dir.display().to_string()));
    }
    load_manifest(&candidate)
}
