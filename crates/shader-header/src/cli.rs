//! Process-free CLI surface.
//!
//! Argument handling lives behind [`run`] so the argument-count contract can
//! be tested without spawning the binary.

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

/// Status returned when the required path arguments are missing or malformed.
pub const EXIT_USAGE: i32 = -1;

#[derive(Parser, Debug)]
#[command(name = "shader-header")]
#[command(about = "Embed a shader source file into a C header as a string macro")]
pub struct Cli {
    /// Shader source file to embed
    pub input: PathBuf,

    /// Header file to write (created or overwritten)
    pub output: PathBuf,
}

/// Parses `args` (including the program name in first position) and runs the
/// generator.
///
/// Returns the process exit status: `0` on success, [`EXIT_USAGE`] when the
/// two path arguments are not supplied. No file is touched on a usage error.
/// I/O failures propagate as errors and are fatal in `main`.
pub fn run<I, T>(args: I) -> anyhow::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(0);
        }
        Err(err) => {
            err.print()?;
            return Ok(EXIT_USAGE);
        }
    };

    crate::generate(&cli.input, &cli.output)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn no_arguments_is_a_usage_error() {
        let status = run(["shader-header"]).unwrap();
        assert_eq!(status, EXIT_USAGE);
    }

    #[test]
    fn missing_output_argument_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("water.frag");
        fs::write(&input, "void main() {}\n").unwrap();

        let status = run(["shader-header", input.to_str().unwrap()]).unwrap();
        assert_eq!(status, EXIT_USAGE);
        // only the input file should exist afterwards
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn both_arguments_generate_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("water.frag");
        fs::write(&input, "void main() {}\n").unwrap();
        let output = dir.path().join("water.frag.h");

        let status = run([
            OsString::from("shader-header"),
            input.clone().into_os_string(),
            output.clone().into_os_string(),
        ])
        .unwrap();
        assert_eq!(status, 0);

        let header = fs::read_to_string(&output).unwrap();
        assert!(header.contains("#define WATER_FRAG_SRC \\"));
        assert!(header.contains("  \"void main() {}\" \\"));
    }

    #[test]
    fn missing_input_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = run([
            OsString::from("shader-header"),
            dir.path().join("missing.vert").into_os_string(),
            dir.path().join("out.h").into_os_string(),
        ]);
        assert!(result.is_err());
    }
}
