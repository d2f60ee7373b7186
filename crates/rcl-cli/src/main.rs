//! `rcl` CLI — render JSON documents as RCL, YAML-flavored, or JSON text.
//!
//! ## Usage
//!
//! ```sh
//! # JSON on stdin, native RCL on stdout (the default format)
//! echo '{"listen":"0.0.0.0","port":8080}' | rcl emit
//!
//! # Emit from file to file
//! rcl emit -i config.json -o config.rcl
//!
//! # Pick another output format
//! rcl emit -i config.json -f json
//! rcl emit -i config.json -f json-compact
//! rcl emit -i config.json -f yaml
//!
//! # List the supported formats
//! rcl formats
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rcl_core::{Format, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "rcl", version, about = "Multi-format configuration emitter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a JSON document and emit it in the selected format
    Emit {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "rcl")]
        format: OutputFormat,
    },
    /// List the supported output formats
    Formats,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// JSON without whitespace
    JsonCompact,
    /// Flow-style YAML-flavored output
    Yaml,
    /// Native `key = value;` syntax
    Rcl,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Format {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::JsonCompact => Format::JsonCompact,
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Rcl => Format::Rcl,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emit {
            input,
            output,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let value = Value::from_json_str(&json).context("Failed to parse input as JSON")?;
            let rendered = rcl_core::emit(&value, format.into());
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Formats => {
            println!("json          pretty-printed JSON");
            println!("json-compact  JSON without whitespace");
            println!("yaml          flow-style YAML-flavored output");
            println!("rcl           native key = value; syntax (default)");
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
