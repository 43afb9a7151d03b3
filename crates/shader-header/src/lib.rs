//! shader-header - embeds shader source into C headers.
//!
//! Reads a shader source file and writes a header defining the whole source
//! as a single line-continued string macro, so the shader can be compiled
//! into the binary without any runtime file I/O.
//!
//! For an input named `globe.vert` the generated header defines
//! `GLOBE_VERT_SRC` inside a `GLOBE_VERT_H` include guard.

pub mod cli;

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Derives the macro identifier from the input's base filename.
///
/// Replaces every space and literal `.` with `_`, then upper-cases the
/// result. Deliberately not a general sanitizer: any other punctuation
/// passes through unchanged, matching the names consumers already include.
pub fn macro_identifier(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| if c == ' ' || c == '.' { '_' } else { c })
        .collect::<String>()
        .to_uppercase()
}

/// Renders the full header text for a shader source.
///
/// Each physical source line becomes one two-space-indented double-quoted
/// token followed by a line-continuation backslash. Embedded `"` and `\`
/// characters are emitted verbatim; a warning names the offending line,
/// since the resulting literal will not survive the C preprocessor.
pub fn render_header(identifier: &str, source: &str) -> String {
    let guard = format!("{identifier}_H");
    let constant = format!("{identifier}_SRC");

    let mut out = String::new();
    out.push_str(&format!("#if !defined {guard}\n"));
    out.push_str(&format!("#define {guard}\n\n"));
    out.push_str(&format!("#define {constant} \\\n"));

    // A final line without a trailing newline keeps it that way, like the
    // line-preserving read this replaces.
    let terminated = source.ends_with('\n');
    let mut lines = source.lines().enumerate().peekable();
    while let Some((index, line)) = lines.next() {
        if line.contains('"') || line.contains('\\') {
            log::warn!(
                "line {} contains an unescaped '\"' or '\\'; {} will not be a valid string literal",
                index + 1,
                constant
            );
        }
        out.push_str("  \"");
        out.push_str(line);
        out.push_str("\" \\");
        if lines.peek().is_some() || terminated {
            out.push('\n');
        }
    }

    out.push_str("\n\n#endif\n");
    out
}

/// Reads `input` and writes the rendered header to `output`, creating or
/// truncating it.
///
/// The header is rendered in full before a single write, so a failed run
/// never leaves a half-written header behind.
pub fn generate(input: &Path, output: &Path) -> anyhow::Result<()> {
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            anyhow::anyhow!("input path has no usable file name: {}", input.display())
        })?;
    let identifier = macro_identifier(file_name);

    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read shader source {}", input.display()))?;
    let header = render_header(&identifier, &source);

    fs::write(output, &header)
        .with_context(|| format!("failed to write header {}", output.display()))?;

    log::info!(
        "embedded {} as {}_SRC in {}",
        input.display(),
        identifier,
        output.display()
    );

    Ok(())
}
