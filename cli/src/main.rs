use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pipe_xml::{
    convert, load_schema_file, people, schema_to_json, validate_str, BuildOptions, Schema,
};
use pipe_xml_compiler::{builder::DEFAULT_INDENT, error::ConvertError};

#[derive(Parser)]
#[command(name = "pxml", version)]
#[command(about = "Convert pipe-delimited row files into nested XML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a row file to XML
    Convert {
        /// Input row file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// JSON schema file (defaults to the built-in people schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output XML file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces per nesting level
        #[arg(long, default_value_t = DEFAULT_INDENT)]
        indent: usize,
    },

    /// Check a row file against a schema without converting it
    Validate {
        /// Input row file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// JSON schema file (defaults to the built-in people schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// Print the built-in people schema as JSON
    Schema {
        /// Output `.json` file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    match &cli.command {
        Commands::Convert { input, schema, output, indent } => {
            let text = read_input(input.as_deref())?;
            let schema = resolve_schema(schema.as_deref())?;
            let xml = convert(&text, &schema, &BuildOptions { indent: *indent })?;
            write_output(output.as_deref(), &xml)
        }

        Commands::Validate { input, schema } => {
            let text = read_input(input.as_deref())?;
            let schema = resolve_schema(schema.as_deref())?;
            validate_str(&text, &schema)?;
            println!("valid");
            Ok(())
        }

        Commands::Schema { output } => {
            let json = schema_to_json(&people())?;
            write_output(output.as_deref(), &json)
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, ConvertError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading input");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn resolve_schema(path: Option<&Path>) -> Result<Schema, ConvertError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading schema");
            load_schema_file(path)
        }
        None => Ok(people()),
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), ConvertError> {
    match path {
        Some(path) => {
            fs::write(path, text)?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{}", text),
    }
    Ok(())
}
