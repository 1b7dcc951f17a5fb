use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokenshift_codegen::emit::walk_colors;
use tokenshift_codegen::OutputFormat;
use tokenshift_parser::{ColorTree, TokenSet};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokenshift")]
#[command(about = "tokenshift — design token JSON to style-system code converter")]
#[command(version)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a token export into one output format
    Build {
        /// Input token .json file
        path: String,

        /// Output format identifier (see `tokenshift formats`)
        #[arg(short, long)]
        format: OutputFormat,

        /// Directory to write into [default: <stem>-<format> next to the input]
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Print the generated files instead of writing them
        #[arg(long)]
        stdout: bool,
    },

    /// Check a token export and report what it contains
    Check {
        /// Input token .json file
        path: String,
    },

    /// Print every color path and the typography/gradient counts
    Inspect {
        /// Input token .json file
        path: String,
    },

    /// List the supported output formats
    Formats,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build {
            path,
            format,
            out_dir,
            stdout,
        } => cmd_build(&path, format, out_dir, stdout),
        Command::Check { path } => cmd_check(&path),
        Command::Inspect { path } => cmd_inspect(&path),
        Command::Formats => cmd_formats(),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load(path: &str) -> TokenSet {
    let source = read_source(path);
    match tokenshift_parser::parse_str(&source) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

/// `<dir>/<stem>-<format>` for an input at `<dir>/<stem>.json`.
fn default_out_dir(path: &str, format: OutputFormat) -> PathBuf {
    let input = Path::new(path);
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tokens");
    let dir = input.parent().unwrap_or(Path::new("."));
    dir.join(format!("{stem}-{}", format.id()))
}

fn cmd_build(path: &str, format: OutputFormat, out_dir: Option<PathBuf>, stdout: bool) {
    let set = load(path);

    let results = match tokenshift_codegen::generate(&set, format) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if stdout {
        for result in &results {
            println!("// ===== {} ({}) =====", result.filename, result.language);
            println!("{}", result.content);
        }
        return;
    }

    let dir = out_dir.unwrap_or_else(|| default_out_dir(path, format));
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error creating {}: {e}", dir.display());
        std::process::exit(1);
    }

    for result in &results {
        let target = dir.join(&result.filename);
        if let Err(e) = std::fs::write(&target, &result.content) {
            eprintln!("Error writing {}: {e}", target.display());
            std::process::exit(1);
        }
        debug!(file = %target.display(), bytes = result.content.len(), "wrote artifact");
    }

    eprintln!(
        "Built: {} ({} files, {})",
        dir.display(),
        results.len(),
        format.display_name()
    );
}

fn cmd_check(path: &str) {
    let set = load(path);
    eprintln!(
        "OK: {path} ({} colors, {} typography styles, {} gradients)",
        set.color_count(),
        set.typography_count(),
        set.gradient_count()
    );
}

/// Every color leaf as a `dot.path: hex` line, in document order.
fn flatten(colors: &ColorTree) -> Vec<String> {
    let mut lines = Vec::new();
    walk_colors(colors, &mut |path, hex| {
        lines.push(format!("{}: {hex}", path.join(".")));
    });
    lines
}

fn cmd_inspect(path: &str) {
    let set = load(path);

    println!("Colors ({}):", set.color_count());
    for line in flatten(&set.colors) {
        println!("  {line}");
    }
    println!("Typography styles: {}", set.typography_count());
    for (device, locales) in &set.typography {
        for (locale, styles) in locales {
            println!("  {device}/{locale}: {}", styles.len());
        }
    }
    println!("Gradients: {}", set.gradient_count());
}

fn cmd_formats() {
    for format in OutputFormat::ALL {
        println!(
            "{:<18} {:<18} {}",
            format.id(),
            format.display_name(),
            format.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_out_dir() {
        assert_eq!(
            default_out_dir("design/tokens.json", OutputFormat::Scss),
            PathBuf::from("design/tokens-scss")
        );
        assert_eq!(
            default_out_dir("tokens.json", OutputFormat::PandaCss),
            PathBuf::from("tokens-panda-css")
        );
    }

    #[test]
    fn test_flatten() {
        let set = tokenshift_parser::parse_str(
            r##"{"color":{"brand":{"primary":{"type":"color","value":"#3366FFff"}},"white":{"type":"color","value":"#fff"}}}"##,
        )
        .unwrap();
        assert_eq!(
            flatten(&set.colors),
            vec!["brand.primary: #3366FF".to_string(), "white: #fff".to_string()]
        );
    }

    #[test]
    fn test_format_argument() {
        let cli = Cli::try_parse_from(["tokenshift", "build", "t.json", "--format", "vanilla-extract"]).unwrap();
        match cli.command {
            Command::Build { format, stdout, .. } => {
                assert_eq!(format, OutputFormat::VanillaExtract);
                assert!(!stdout);
            }
            _ => panic!("expected build"),
        }

        assert!(Cli::try_parse_from(["tokenshift", "build", "t.json", "--format", "less"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["tokenshift", "check", "t.json", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
