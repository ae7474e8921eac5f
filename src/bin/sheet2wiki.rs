//! sheet2wiki CLI - Spreadsheet copy & paste to MediaWiki table converter

use std::fs::{self, File};
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sheet2wiki::{Converter, ConverterBuilder, StyleConfig, WikiTableError};

#[derive(Parser)]
#[command(name = "sheet2wiki")]
#[command(version)]
#[command(about = "Convert spreadsheet copy & paste (TSV) into MediaWiki table markup", long_about = None)]
struct Cli {
    /// Input files (reads from stdin if none are given, or for "-")
    inputs: Vec<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// JSON style configuration file (explicit flags override its values)
    #[arg(short, long)]
    config: Option<String>,

    /// Do not treat the first row as a column header
    #[arg(long)]
    no_column_header: bool,

    /// Treat the first cell of each body row as a row header
    #[arg(long)]
    row_header: bool,

    /// Table caption
    #[arg(long)]
    caption: Option<String>,

    /// Attributes for the table itself (default: class='wikitable')
    #[arg(long)]
    table_style: Option<String>,

    /// Attributes for each column header cell
    #[arg(long)]
    column_header_style: Option<String>,

    /// Attributes for each row header cell
    #[arg(long)]
    row_header_style: Option<String>,

    /// Attributes for body rows
    #[arg(long)]
    row_style: Option<String>,

    /// Attributes for body cells
    #[arg(long)]
    cell_style: Option<String>,

    /// Attributes for every other body row (even-odd patterns)
    #[arg(long)]
    other_row_style: Option<String>,

    /// Attributes for every other body cell (even-odd patterns)
    #[arg(long)]
    other_cell_style: Option<String>,

    /// Print the effective style configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WikiTableError> {
    let config = load_config(cli.config.as_deref())?;

    let mut builder = ConverterBuilder::new().with_style_config(config);
    if cli.no_column_header {
        builder = builder.with_column_header(false);
    }
    if cli.row_header {
        builder = builder.with_row_header(true);
    }
    if let Some(caption) = cli.caption {
        builder = builder.with_caption(caption);
    }
    if let Some(style) = cli.table_style {
        builder = builder.with_table_style(style);
    }
    if let Some(style) = cli.column_header_style {
        builder = builder.with_column_header_style(style);
    }
    if let Some(style) = cli.row_header_style {
        builder = builder.with_row_header_style(style);
    }
    if let Some(style) = cli.row_style {
        builder = builder.with_row_style(style);
    }
    if let Some(style) = cli.cell_style {
        builder = builder.with_cell_style(style);
    }
    if let Some(style) = cli.other_row_style {
        builder = builder.with_other_row_style(style);
    }
    if let Some(style) = cli.other_cell_style {
        builder = builder.with_other_cell_style(style);
    }
    let converter = builder.build()?;

    if cli.print_config {
        println!("{}", converter.config().to_json_pretty()?);
        return Ok(());
    }

    let inputs = read_inputs(&converter, &cli.inputs)?;
    let tables = converter.convert_batch(&inputs);
    let result = tables.join("\n\n");

    match cli.output {
        Some(path) => {
            let mut file = File::create(&path)?;
            writeln!(file, "{}", result)?;
            tracing::debug!(path = %path, tables = tables.len(), "output written");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", result)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<StyleConfig, WikiTableError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            tracing::debug!(path, "loaded style configuration");
            StyleConfig::from_json(&json)
        }
        None => Ok(StyleConfig::default()),
    }
}

fn read_inputs(converter: &Converter, paths: &[String]) -> Result<Vec<String>, WikiTableError> {
    if paths.is_empty() {
        return Ok(vec![converter.read_input(io::stdin().lock())?]);
    }

    paths
        .iter()
        .map(|path| {
            if path == "-" {
                converter.read_input(io::stdin().lock())
            } else {
                converter.read_input(File::open(path)?)
            }
        })
        .collect()
}

fn handle_error(error: WikiTableError) {
    match error {
        WikiTableError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        WikiTableError::Utf8(utf8_err) => {
            eprintln!("UTF-8 Conversion Error: {}", utf8_err);
            eprintln!("The input must be UTF-8 encoded text.");
        }
        WikiTableError::Json(json_err) => {
            eprintln!("Configuration File Error: {}", json_err);
            eprintln!("Please check the JSON syntax and option names.");
        }
        WikiTableError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
        WikiTableError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
        }
    }
}
