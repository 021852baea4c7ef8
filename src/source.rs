//! Splitting combined shader source into per-stage buffers.
//!
//! A combined file carries both pipeline stages in one stream of text.
//! Any line containing the token `#shader` is a directive that names the
//! stage the following lines belong to:
//!
//! ```text
//! #shader vertex
//! void main() { /* ... */ }
//! #shader fragment
//! void main() { /* ... */ }
//! ```

use std::fmt;

/// One programmable stage of the graphics pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The stage name as it appears in directive lines and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-stage source text produced by [`split`],
/// consumed by [`build`][crate::program::build].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// The buffer holding the given stage's source.
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

/// An error found while splitting a combined source file.
/// Line numbers are 1-based.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: shader content before any `#shader` directive")]
    MissingLeadingDirective { line: usize },
    #[error("line {line}: `#shader` directive with an unknown stage tag")]
    UnknownStageTag { line: usize },
}

/// Token that marks a line as a stage directive.
const DIRECTIVE: &str = "#shader";

/// Partitions combined shader source into its vertex and fragment buffers.
///
/// A single forward pass over the lines of `input`. Directive lines switch
/// the active stage and are not emitted; every other line is appended
/// verbatim, newline re-added, to the buffer of whichever stage was last
/// declared. Directives may re-switch stages any number of times, so the
/// two stages can interleave freely.
///
/// The directive check is a substring test, kept for parity with the file
/// format's lineage: a content line that happens to contain `#shader`
/// mid-source is taken as a directive.
pub fn split(input: &str) -> Result<ShaderSource, ParseError> {
    let mut current: Option<ShaderStage> = None;
    let mut out = ShaderSource::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(pos) = line.find(DIRECTIVE) {
            let rest = &line[pos + DIRECTIVE.len()..];
            match stage_tag(rest) {
                Some(stage) => current = Some(stage),
                None => return Err(ParseError::UnknownStageTag { line: line_no }),
            }
        } else {
            let buf = match current {
                Some(ShaderStage::Vertex) => &mut out.vertex,
                Some(ShaderStage::Fragment) => &mut out.fragment,
                None => return Err(ParseError::MissingLeadingDirective { line: line_no }),
            };
            buf.push_str(line);
            buf.push('\n');
        }
    }

    Ok(out)
}

/// Reads the stage keyword out of a directive line's remainder.
/// Both keywords are substring matches; if both appear, the earlier wins.
fn stage_tag(rest: &str) -> Option<ShaderStage> {
    match (
        rest.find(ShaderStage::Vertex.name()),
        rest.find(ShaderStage::Fragment.name()),
    ) {
        (Some(v), Some(f)) => Some(if f < v {
            ShaderStage::Fragment
        } else {
            ShaderStage::Vertex
        }),
        (Some(_), None) => Some(ShaderStage::Vertex),
        (None, Some(_)) => Some(ShaderStage::Fragment),
        (None, None) => None,
    }
}

//
// tests
//
