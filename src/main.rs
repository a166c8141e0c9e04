//! hdrdoc — generate a Markdown API reference from a documented C header.
//!
//! Two modes:
//!
//! - **stdin mode**: `hdrdoc < w65c02s.h > api.md`
//! - **file mode**: `hdrdoc include/w65c02s.h -o docs/api.md`

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hdrdoc::Options;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "api.md";

#[derive(Parser)]
#[command(
    name = "hdrdoc",
    about = "Generate a Markdown API reference from documented C header comments"
)]
struct Cli {
    /// Header file to document. If omitted, reads from stdin and writes to stdout.
    input: Option<PathBuf>,

    /// Output file, `-` for stdout (default: api.md in file mode, stdout in stdin mode)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Header name for the preamble's #include line (default: input file name)
    #[arg(long)]
    include: Option<String>,

    /// Language tag for code fences
    #[arg(long, default_value = "c")]
    lang: String,

    /// Only format constants named PREFIX_... as code
    #[arg(long, value_name = "PREFIX")]
    constant_prefix: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = read_input(cli.input.as_deref())?;
    let options = Options {
        include: cli
            .include
            .clone()
            .or_else(|| include_name(cli.input.as_deref()))
            .unwrap_or_else(|| Options::default().include),
        lang: cli.lang.clone(),
        constant_prefix: cli.constant_prefix.clone(),
    };

    // Nothing is written unless the whole document rendered.
    let output = hdrdoc::generate(&source, &options).with_context(|| {
        format!(
            "failed to document {}",
            cli.input
                .as_deref()
                .map_or_else(|| "<stdin>".into(), |p| p.display().to_string())
        )
    })?;

    match output_target(&cli) {
        Some(path) => write_atomic(&path, &output),
        None => {
            io::stdout()
                .write_all(output.as_bytes())
                .context("failed to write stdout")?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Destination file, or `None` for stdout.
fn output_target(cli: &Cli) -> Option<PathBuf> {
    match (&cli.output, &cli.input) {
        (Some(path), _) if path.as_os_str() == "-" => None,
        (Some(path), _) => Some(path.clone()),
        (None, Some(_)) => Some(PathBuf::from(DEFAULT_OUTPUT)),
        (None, None) => None,
    }
}

/// "include/w65c02s.h" → "w65c02s.h"
fn include_name(input: Option<&Path>) -> Option<String> {
    input?
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Write through a temporary file in the destination directory so a
/// failed write never leaves a truncated document behind.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = output_builder()
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    // Replacing a file keeps its mode.
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote documentation");
    Ok(())
}

/// New output files get the same umask-filtered mode as `fs::write`.
#[cfg(unix)]
fn output_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn output_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("hdrdoc").chain(args.iter().copied()))
    }

    #[test]
    fn include_name_from_path() {
        assert_eq!(
            include_name(Some(Path::new("include/w65c02s.h"))).as_deref(),
            Some("w65c02s.h")
        );
        assert_eq!(include_name(None), None);
    }

    #[test]
    fn file_mode_defaults_to_api_md() {
        assert_eq!(output_target(&cli(&["x.h"])), Some(PathBuf::from("api.md")));
    }

    #[test]
    fn stdin_mode_defaults_to_stdout() {
        assert_eq!(output_target(&cli(&[])), None);
    }

    #[test]
    fn dash_means_stdout() {
        assert_eq!(output_target(&cli(&["x.h", "-o", "-"])), None);
    }

    #[test]
    fn explicit_output_in_stdin_mode() {
        assert_eq!(
            output_target(&cli(&["-o", "docs/api.md"])),
            Some(PathBuf::from("docs/api.md"))
        );
    }

    #[test]
    fn write_atomic_replaces_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("api.md");
        fs::write(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_new_file_matches_fs_write_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let reference = dir.path().join("reference.md");
        fs::write(&reference, "x").unwrap();
        let path = dir.path().join("api.md");
        write_atomic(&path, "new").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("api.md");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        write_atomic(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
