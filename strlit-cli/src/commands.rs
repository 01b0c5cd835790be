//! Command handlers for the strlit binary
//!
//! Each handler returns the text to print, so the handlers stay testable without capturing
//! stdout.

use std::fmt;
use std::fs;

use strlit::clipboard::{ClipboardPayload, CopyPastePreProcessor, RawText};
use strlit::literals::{classify, SourceSpan, TokenizedSource};
use strlit_config::{LoadError, Loader, StrlitConfig};
use tracing::debug;

/// Errors surfaced to the user by the command-line interface
#[derive(Debug)]
pub enum CliError {
    Io(String),
    Config(LoadError),
    InvalidRange(String),
    Json(serde_json::Error),
    MissingArgument(String),
    UnknownCommand(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(msg) => write!(f, "IO error: {}", msg),
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::InvalidRange(msg) => write!(f, "Invalid range: {}", msg),
            CliError::Json(err) => write!(f, "Error formatting JSON: {}", err),
            CliError::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            CliError::UnknownCommand(name) => write!(f, "Unknown command: '{}'", name),
        }
    }
}

impl std::error::Error for CliError {}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        CliError::Config(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

/// Load the defaults, then the optional config file, then the command-line override
pub fn load_config(
    path: Option<&str>,
    operator_position: Option<&str>,
) -> Result<StrlitConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(position) = operator_position {
        loader = loader.set_override("code_style.binary_operator_position", position)?;
    }
    Ok(loader.build()?)
}

/// Print the clipboard text for the given selections
pub fn handle_copy_command(
    config: &StrlitConfig,
    path: &str,
    ranges: &[&str],
    json: bool,
) -> Result<String, CliError> {
    let source = read_source(path)?;
    let selections = ranges
        .iter()
        .map(|range| parse_span(range, &source))
        .collect::<Result<Vec<_>, _>>()?;
    let text = extract_text(&source, &selections);

    let tree = TokenizedSource::new(&source);
    let processor = config.processor();
    let processors: [&dyn CopyPastePreProcessor; 1] = [&processor];
    let payload = ClipboardPayload::capture(&processors, &tree, &selections, &text);
    debug!(
        path,
        selections = selections.len(),
        rewritten = payload.raw.is_some(),
        "copy"
    );

    if json {
        Ok(serde_json::to_string_pretty(&payload)? + "\n")
    } else {
        Ok(payload.text)
    }
}

/// Print the text that pasting `text` over `at` would insert
pub fn handle_paste_command(
    config: &StrlitConfig,
    path: &str,
    at: &str,
    text: &str,
    raw: Option<&str>,
) -> Result<String, CliError> {
    let source = read_source(path)?;
    let target = parse_span(at, &source)?;
    debug!(path, %target, has_raw = raw.is_some(), "paste");

    let tree = TokenizedSource::new(&source);
    let processor = config.processor();
    let processors: [&dyn CopyPastePreProcessor; 1] = [&processor];
    let payload = ClipboardPayload {
        text: text.to_string(),
        raw: raw.map(RawText::new),
    };
    Ok(payload.paste(&processors, &tree, target))
}

/// Print the literal token covering an offset
pub fn handle_classify_command(path: &str, at: &str, json: bool) -> Result<String, CliError> {
    let source = read_source(path)?;
    let offset = parse_offset(at, &source)?;
    let tree = TokenizedSource::new(&source);
    let token = classify(&tree, offset);

    if json {
        return Ok(serde_json::to_string_pretty(&token)? + "\n");
    }
    Ok(match token {
        Some(token) => format!("{} {} (body {})\n", token.kind, token.span, token.body),
        None => "no literal\n".to_string(),
    })
}

fn read_source(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::Io(format!("{}: {}", path, e)))
}

/// The clipboard text an editor would extract: selection slices joined by line feeds
fn extract_text(source: &str, selections: &[SourceSpan]) -> String {
    selections
        .iter()
        .map(|span| &source[span.start..span.end])
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse `START..END` or a single caret offset
fn parse_span(value: &str, source: &str) -> Result<SourceSpan, CliError> {
    match value.split_once("..") {
        Some((start, end)) => Ok(SourceSpan::new(
            parse_offset(start, source)?,
            parse_offset(end, source)?,
        )),
        None => {
            let offset = parse_offset(value, source)?;
            Ok(SourceSpan::new(offset, offset))
        }
    }
}

fn parse_offset(value: &str, source: &str) -> Result<usize, CliError> {
    let offset: usize = value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidRange(format!("'{}' is not an offset", value)))?;
    if offset > source.len() {
        return Err(CliError::InvalidRange(format!(
            "offset {} is past the end of the file ({} bytes)",
            offset,
            source.len()
        )));
    }
    if !source.is_char_boundary(offset) {
        return Err(CliError::InvalidRange(format!(
            "offset {} is inside a multi-byte character",
            offset
        )));
    }
    Ok(offset)
}
