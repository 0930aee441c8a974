use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use lipi_engine::translit::{parse_lexicon_toml, segment};
use lipi_engine::{transliterate_with, OutputMode, RuleSet};

#[derive(Parser)]
#[command(name = "lipitool", about = "Nepali transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate one string and print the result
    Convert {
        /// Romanized input text
        text: String,
        /// Output mode: unicode, html, or smart
        #[arg(short, long, default_value = "unicode")]
        mode: String,
        /// Path to a TOML file with extra [lexicon] entries (optional)
        #[arg(long)]
        lexicon: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Transliterate a file line by line
    Batch {
        /// Path to the input file (one romanized line per line)
        input_file: String,
        /// Path to the output file
        output_file: String,
        /// Output mode: unicode, html, or smart
        #[arg(short, long, default_value = "unicode")]
        mode: String,
        /// Path to a TOML file with extra [lexicon] entries (optional)
        #[arg(long)]
        lexicon: Option<String>,
    },

    /// Show how the input splits into literal and transliterable spans
    Segments {
        /// Raw input text
        text: String,
    },
}

/// One converted line of JSON output.
#[derive(Debug, Serialize)]
struct ConvertEntry {
    input: String,
    output: String,
    mode: String,
}

fn parse_mode(mode: &str) -> OutputMode {
    match mode {
        "unicode" => OutputMode::Unicode,
        "html" => OutputMode::Html,
        "smart" => OutputMode::Smart,
        other => {
            eprintln!("Unknown output mode '{}' (expected unicode, html, or smart)", other);
            process::exit(1);
        }
    }
}

fn load_rules(lexicon: &Option<String>) -> Option<RuleSet> {
    lexicon.as_ref().map(|path| {
        let toml_str = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read lexicon file {}: {}", path, e);
            process::exit(1);
        });
        let overrides = parse_lexicon_toml(&toml_str).unwrap_or_else(|e| {
            eprintln!("Invalid lexicon file {}: {}", path, e);
            process::exit(1);
        });
        RuleSet::with_lexicon_overrides(overrides)
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            mode,
            lexicon,
            json,
        } => {
            let out_mode = parse_mode(&mode);
            let custom = load_rules(&lexicon);
            let rules = custom.as_ref().unwrap_or_else(|| RuleSet::global());
            let output = transliterate_with(rules, &text, out_mode);

            if json {
                let entry = ConvertEntry {
                    input: text,
                    output,
                    mode,
                };
                println!("{}", serde_json::to_string_pretty(&entry).unwrap());
            } else {
                println!("{}", output);
            }
        }

        Command::Batch {
            input_file,
            output_file,
            mode,
            lexicon,
        } => {
            let out_mode = parse_mode(&mode);
            let custom = load_rules(&lexicon);
            let rules = custom.as_ref().unwrap_or_else(|| RuleSet::global());

            let input = fs::File::open(&input_file).unwrap_or_else(|e| {
                eprintln!("Failed to open input file {}: {}", input_file, e);
                process::exit(1);
            });
            let output = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(output);

            let mut count = 0usize;
            for line in BufReader::new(input).lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read {}: {}", input_file, e);
                    process::exit(1);
                });
                let converted = transliterate_with(rules, &line, out_mode);
                writeln!(writer, "{}", converted).unwrap_or_else(|e| {
                    eprintln!("Failed to write {}: {}", output_file, e);
                    process::exit(1);
                });
                count += 1;
            }
            writer.flush().unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", output_file, e);
                process::exit(1);
            });
            eprintln!("Converted {} lines to {}", count, output_file);
        }

        Command::Segments { text } => {
            let spans = segment(&text);
            println!("{}", serde_json::to_string_pretty(&spans).unwrap());
        }
    }
}
