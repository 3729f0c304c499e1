//! `jot` CLI: parse, validate, and summarize lenient JSON from the command
//! line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse stdin and pretty-print the value tree
//! echo '{"name":"Alice","scores":[95,87]}' | jot print
//!
//! # Compact one-line form, file to file
//! jot print --compact -i data.json -o data.min.json
//!
//! # Validate that a buffer is one complete document
//! jot check -i data.json
//!
//! # Per-variant node counts and nesting depth
//! jot stats -i data.json
//! ```
//!
//! `print` and `stats` trim trailing whitespace before parsing so shell
//! pipelines with a final newline behave as expected; `check` deliberately
//! looks at the raw buffer because its whole job is byte-accurate consumed
//! length reporting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use jot_core::{parse, parse_document, render, render_pretty, Value};

#[derive(Parser)]
#[command(name = "jot", version, about = "Lenient JSON parser CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print the value tree
    Print {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Single-line output instead of indented
        #[arg(long)]
        compact: bool,
    },
    /// Report how much of the buffer parses as one document
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Per-variant node counts and maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(text.trim_end()).context("failed to parse input")?;
            let rendered = if compact {
                render(&value)
            } else {
                render_pretty(&value)
            };
            write_output(output.as_deref(), &format!("{rendered}\n"))?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let (_, consumed) = parse(&text);
            println!("consumed {consumed} of {} bytes", text.len());
            if consumed != text.len() {
                anyhow::bail!("input is not a single complete document");
            }
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(text.trim_end()).context("failed to parse input")?;
            let mut tally = Tally::default();
            tally.visit(&value, 1);
            tally.report();
        }
    }

    Ok(())
}

/// Per-variant node counts plus the deepest nesting level seen.
#[derive(Default)]
struct Tally {
    nulls: usize,
    bools: usize,
    integers: usize,
    floats: usize,
    texts: usize,
    lists: usize,
    objects: usize,
    max_depth: usize,
}

impl Tally {
    /// Walk the tree, dispatching once per variant. The root is depth 1.
    fn visit(&mut self, value: &Value, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match value {
            Value::Null => self.nulls += 1,
            Value::Bool(_) => self.bools += 1,
            Value::Integer(_) => self.integers += 1,
            Value::Float(_) => self.floats += 1,
            Value::Text(_) => self.texts += 1,
            Value::List(items) => {
                self.lists += 1;
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object(entries) => {
                self.objects += 1;
                for child in entries.values() {
                    self.visit(child, depth + 1);
                }
            }
        }
    }

    fn report(&self) {
        let nodes = self.nulls
            + self.bools
            + self.integers
            + self.floats
            + self.texts
            + self.lists
            + self.objects;
        println!("nodes:     {nodes}");
        println!("null:      {}", self.nulls);
        println!("boolean:   {}", self.bools);
        println!("integer:   {}", self.integers);
        println!("float:     {}", self.floats);
        println!("text:      {}", self.texts);
        println!("list:      {}", self.lists);
        println!("object:    {}", self.objects);
        println!("max depth: {}", self.max_depth);
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
