//! gsheets CLI - inspect A1 notation and Sheets API payloads

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gsheets::prelude::*;
use gsheets::DEFAULT_BASE_URL;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gsheets")]
#[command(author, version, about = "A1 notation and Google Sheets payload tool")]
struct Cli {
    /// Log more (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse A1 notation and show its parts
    Parse {
        /// Notation such as "Sheet1!A1:B2"
        notation: String,
    },

    /// Decode a Sheets API JSON response
    Decode {
        /// Expected response shape
        #[arg(value_enum)]
        kind: ResponseKind,

        /// JSON file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Print the request URL for a values call
    Url {
        /// Spreadsheet ID
        spreadsheet_id: String,

        /// Range to read or write
        notation: String,

        /// Build an update (PUT) request instead of a read
        #[arg(short, long)]
        write: bool,

        /// API root
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// How written values are interpreted
        #[arg(long, value_enum, default_value = "raw")]
        input_option: InputOption,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ResponseKind {
    /// Values read response, or an error
    ValueRange,
    /// Values update response, or an error
    Update,
    /// Error envelope only
    Error,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputOption {
    Raw,
    UserEntered,
}

impl From<InputOption> for ValueInputOption {
    fn from(option: InputOption) -> Self {
        match option {
            InputOption::Raw => ValueInputOption::Raw,
            InputOption::UserEntered => ValueInputOption::UserEntered,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { notation } => show_notation(&notation),
        Commands::Decode { kind, input } => decode_response(kind, input.as_deref()),
        Commands::Url {
            spreadsheet_id,
            notation,
            write,
            base_url,
            input_option,
        } => {
            let config = ClientConfig::default()
                .with_base_url(base_url)
                .with_value_input_option(input_option.into());
            show_url(&config, &spreadsheet_id, &notation, write)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_notation(notation: &str) -> Result<A1Notation> {
    A1Notation::parse(notation).with_context(|| format!("Invalid A1 notation '{notation}'"))
}

fn show_notation(notation: &str) -> Result<()> {
    let a1 = parse_notation(notation)?;

    println!("Notation: {a1}");
    match a1.sheet_name() {
        Some(name) => println!("Sheet: {name}"),
        None => println!("Sheet: (default)"),
    }

    if let Some(range) = a1.range() {
        println!("Range: {range}");
        println!("  Start: {}", describe_position(&range.start));
        println!("  End: {}", describe_position(&range.end));
    } else {
        println!("Range: (whole sheet)");
    }

    Ok(())
}

fn describe_position(position: &Position) -> String {
    let column = |c: &Column| match c.index() {
        Some(index) => format!("column {c} (index {index})"),
        None => format!("column {c}"),
    };
    match position {
        Position::ColumnOnly(c) => column(c),
        Position::RowOnly(r) => format!("row {r}"),
        Position::ColumnAndRow(c, r) => format!("cell {position}: {}, row {r}", column(c)),
    }
}

fn read_json(input: Option<&Path>) -> Result<serde_json::Value> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("Input is not valid JSON")
}

fn decode_response(kind: ResponseKind, input: Option<&Path>) -> Result<()> {
    let json = read_json(input)?;

    match kind {
        ResponseKind::ValueRange => {
            let values = decode::<ApiResult<ValueRange>>(&json)
                .context("Failed to decode response")?
                .into_result()?;
            println!("Range: {}", values.range);
            for row in values.rows() {
                println!("{}", row.join("\t"));
            }
        }
        ResponseKind::Update => {
            let response = decode::<ApiResult<UpdateValuesResponse>>(&json)
                .context("Failed to decode response")?
                .into_result()?;
            println!("Spreadsheet: {}", response.spreadsheet_id);
            println!("Updated range: {}", response.updated_range);
            println!(
                "Updated: {} rows, {} columns, {} cells",
                response.updated_rows, response.updated_columns, response.updated_cells
            );
        }
        ResponseKind::Error => {
            let err = GsheetsError::from_json(&json);
            println!("Code: {}", err.code);
            println!("Status: {}", err.status);
            println!("Message: {}", err.message);
        }
    }

    Ok(())
}

fn show_url(config: &ClientConfig, spreadsheet_id: &str, notation: &str, write: bool) -> Result<()> {
    let a1 = parse_notation(notation)?;

    let request = if write {
        ApiRequest::update_values(config, spreadsheet_id, &ValueRange::new(a1, Vec::new()))
            .context("Failed to build update request")?
    } else {
        ApiRequest::get_values(config, spreadsheet_id, &a1)
    };

    println!("{} {}", request.method, request.url);
    Ok(())
}
