//! texnorm CLI - normalize, render, and check exam question text

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use texnorm::{
    check_text, format_diagnostics, normalize_with_report, render_rich_text, LineContent,
    NormalizeError, NormalizeOptions, NormalizeResult,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texnorm")]
#[command(version)]
#[command(about = "Normalize, render, and check exam question text", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Do not reduce fractions to lowest terms
    #[arg(long)]
    no_simplify: bool,

    /// Do not wrap Bangla runs in \text{}
    #[arg(long)]
    no_bangla_wrap: bool,

    /// Write a normalization report JSON to this path
    #[arg(long)]
    report: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Normalize raw author text (default action)
    Normalize {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Do not reduce fractions to lowest terms
        #[arg(long)]
        no_simplify: bool,

        /// Do not wrap Bangla runs in \text{}
        #[arg(long)]
        no_bangla_wrap: bool,

        /// Write a normalization report JSON to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Render stored text into display lines
    Render {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Emit the line list as JSON instead of plain markup
        #[arg(long)]
        json: bool,
    },

    /// Check stored text for renderability issues
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> NormalizeResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Normalize {
            input,
            output,
            no_simplify,
            no_bangla_wrap,
            report,
        }) => run_normalize(input, output, no_simplify, no_bangla_wrap, report),
        Some(Commands::Render {
            input,
            output,
            json,
        }) => run_render(input, output, json),
        Some(Commands::Check { input, no_color }) => run_check(input, !no_color),
        None => run_normalize(
            cli.input_file,
            cli.output,
            cli.no_simplify,
            cli.no_bangla_wrap,
            cli.report,
        ),
    }
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> NormalizeResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> NormalizeResult<()> {
    match path {
        Some(path) => Ok(fs::write(path, content)?),
        None => {
            io::stdout().write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
fn run_normalize(
    input: Option<String>,
    output: Option<String>,
    no_simplify: bool,
    no_bangla_wrap: bool,
    report_path: Option<String>,
) -> NormalizeResult<()> {
    let text = read_input(input.as_deref())?;
    let options = NormalizeOptions {
        simplify_fractions: !no_simplify,
        wrap_bangla: !no_bangla_wrap,
    };

    let (normalized, report) = normalize_with_report(&text, &options);

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| NormalizeError::internal(e.to_string()))?;
        fs::write(path, json)?;
    }
    for loss in &report.losses {
        eprintln!("warning: {}: {}", loss.kind, loss.message);
    }

    write_output(output.as_deref(), &normalized)
}

#[cfg(feature = "cli")]
fn run_render(input: Option<String>, output: Option<String>, json: bool) -> NormalizeResult<()> {
    let text = read_input(input.as_deref())?;
    let rendered = render_rich_text(&text);

    let content = if json {
        let lines: Vec<serde_json::Value> = rendered
            .lines
            .iter()
            .map(|line| {
                let (kind, error) = match &line.content {
                    LineContent::Plain(_) => ("plain", None),
                    LineContent::Math(_) => ("math", None),
                    LineContent::Placeholder(_) => ("placeholder", None),
                    LineContent::Broken { message, .. } => ("broken", Some(message.clone())),
                };
                serde_json::json!({
                    "source": line.source,
                    "kind": kind,
                    "markup": line.content.markup(),
                    "error": error,
                })
            })
            .collect();
        serde_json::to_string_pretty(&lines)
            .map_err(|e| NormalizeError::internal(e.to_string()))?
    } else {
        rendered
            .lines
            .iter()
            .map(|line| line.content.markup())
            .collect::<Vec<_>>()
            .join("\n")
    };

    write_output(output.as_deref(), &content)
}

#[cfg(feature = "cli")]
fn run_check(input: Option<String>, color: bool) -> NormalizeResult<()> {
    let text = read_input(input.as_deref())?;
    let result = check_text(&text);
    print!("{}", format_diagnostics(&result, color));

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}


#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texnorm --features cli");
    eprintln!("  texnorm [OPTIONS] [INPUT_FILE]");
}
