use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use refmt::{FormatOptions, FormatStyle, IndentWidth, JsonReformatter};

/// Reformatters for structured text.
///
/// refmt reads JSON, XML or SQL from stdin or a file and writes the
/// reformatted text to stdout or a file.
#[derive(Parser, Debug)]
#[command(name = "refmt")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reformat JSON text.
    Json {
        /// Input file. If not specified, reads from stdin.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output file. If not specified, writes to stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output style. `table` prints the tabular projection as JSON;
        /// `tree` is an interactive projection for embedding hosts and
        /// falls back to pretty text here.
        #[arg(short, long, value_enum, default_value = "pretty")]
        style: StyleArg,

        /// Spaces per indentation level.
        #[arg(short, long, default_value = "2", value_parser = parse_indent)]
        indent: IndentWidth,

        /// Sort object keys recursively.
        #[arg(long)]
        sort_keys: bool,

        /// Escape non-ASCII characters as \uXXXX.
        #[arg(long)]
        escape_non_ascii: bool,
    },

    /// Validate XML and recompute its indentation.
    Xml {
        /// Input file. If not specified, reads from stdin.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output file. If not specified, writes to stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Format SQL, then merge short fragments back onto single lines.
    Sql {
        /// Input file. If not specified, reads from stdin.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output file. If not specified, writes to stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip the structural formatter; the input is already formatted.
        #[arg(long)]
        compact_only: bool,

        /// Keep keyword casing instead of uppercasing.
        #[arg(long)]
        no_uppercase: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Pretty,
    Compact,
    Sorted,
    Minified,
    Table,
    Tree,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("refmt: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Json { file, output, style, indent, sort_keys, escape_non_ascii } => {
            let input = read_input(file.as_deref())?;

            let mut reformatter = JsonReformatter::new();
            reformatter.options = FormatOptions {
                style: format_style(style),
                indent_width: indent,
                sort_keys,
                escape_non_ascii,
            };

            let rendered = if reformatter.options.style == FormatStyle::Table {
                match reformatter.parse(&input)? {
                    Some(value) => serde_json::to_string_pretty(&refmt::table::project(&value))?,
                    None => String::new(),
                }
            } else {
                reformatter.reformat(&input)?
            };

            write_output(output.as_deref(), &rendered)
        }

        Command::Xml { file, output } => {
            let input = read_input(file.as_deref())?;
            let rendered = refmt::xml::reindent(&input)?;
            write_output(output.as_deref(), &rendered)
        }

        Command::Sql { file, output, compact_only, no_uppercase } => {
            let input = read_input(file.as_deref())?;

            // The structural pass (clause indentation, keyword casing) is
            // delegated to sqlformat; the compactor only consumes its output.
            let formatted = if compact_only {
                input
            } else {
                let mut options = sqlformat::FormatOptions::default();
                options.indent = sqlformat::Indent::Spaces(2);
                options.uppercase = !no_uppercase;
                options.lines_between_queries = 1;
                sqlformat::format(&input, &sqlformat::QueryParams::None, options)
            };

            write_output(output.as_deref(), &refmt::sql::compact(&formatted))
        }
    }
}

fn format_style(arg: StyleArg) -> FormatStyle {
    match arg {
        StyleArg::Pretty => FormatStyle::Pretty,
        StyleArg::Compact => FormatStyle::Compact,
        StyleArg::Sorted => FormatStyle::Sorted,
        StyleArg::Minified => FormatStyle::Minified,
        StyleArg::Table => FormatStyle::Table,
        StyleArg::Tree => FormatStyle::Tree,
    }
}

fn parse_indent(s: &str) -> Result<IndentWidth, String> {
    match s {
        "2" => Ok(IndentWidth::Two),
        "4" => Ok(IndentWidth::Four),
        "8" => Ok(IndentWidth::Eight),
        _ => Err(format!("invalid indent '{}': expected 2, 4 or 8", s)),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e).into()),
        None => {
            if io::stdin().is_terminal() {
                return Err("no input: pipe text to stdin or pass a file".into());
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(path) => fs::write(path, content)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e).into()),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(content.as_bytes())?;
            if !content.is_empty() && !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}
