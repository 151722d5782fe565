mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;

pub use block::{Block, BlockKind};
pub use config::{Config, HtmlConfig};
pub use error::{Error, Result};
pub use inline::{format, format_with_config};

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Parse input lines into a vector of blocks.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    parser::parse(lines)
}

/// Convert input lines to HTML output lines using the default config.
pub fn convert<S: AsRef<str>>(input_lines: &[S]) -> Vec<String> {
    convert_with_config(input_lines, Config::compiled_default())
}

/// Convert input lines to HTML output lines with a custom config.
pub fn convert_with_config<S: AsRef<str>>(input_lines: &[S], config: &Config) -> Vec<String> {
    let blocks = parse(input_lines);
    html::render(&blocks, &config.html)
}

/// Convert a whole document to HTML using the default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, Config::compiled_default())
}

/// Convert a whole document to HTML with a custom config.
///
/// The result always ends with a single newline.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let lines = split_lines(markdown);
    html::join_lines(&convert_with_config(&lines, config))
}

/// Split on `\n`, `\r\n` or a bare `\r`. A terminator at the very end does
/// not start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Convert the file at `input` and write the HTML to `output`.
///
/// Nothing is written unless the input was read in full.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    if !input.exists() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }

    let markdown = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = markdown.len(), "read input");

    let html = markdown_to_html_with_config(&markdown, config);

    fs::write(output, &html).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(path = %output.display(), bytes = html.len(), "wrote output");

    Ok(())
}
