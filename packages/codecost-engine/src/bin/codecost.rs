//! codecost CLI
//!
//! Thin I/O shell over the analysis engine: reads a file (or stdin), picks a
//! language, and prints a report.
//!
//! # Usage
//!
//! ```bash
//! # Human-readable report, language detected from the extension
//! cargo run --bin codecost -- analyze src/hot_path.js
//!
//! # JSON for another tool, language forced
//! cat snippet.txt | cargo run --bin codecost -- analyze - --language python --json
//!
//! # Supported languages
//! cargo run --bin codecost -- languages
//! ```

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use codecost_engine::errors::Result;
use codecost_engine::{analyze, detect_language, AnalysisResult, SUPPORTED_LANGUAGES};

#[derive(Parser)]
#[command(name = "codecost")]
#[command(about = "Heuristic source-code complexity estimation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a source file ("-" reads stdin)
    Analyze {
        /// Input file path
        file: PathBuf,

        /// Language tag (detected from the file when omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported languages
    Languages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            language,
            json,
        } => {
            let (code, filename) = read_input(&file)?;
            let language = language.unwrap_or_else(|| {
                detect_language(&code, filename.as_deref()).as_str().to_string()
            });
            let result = analyze(&code, &language);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&language, &result);
            }
        }
        Commands::Languages => {
            for spec in SUPPORTED_LANGUAGES {
                println!(
                    "{:<12} {:<12} .{}",
                    spec.id.as_str(),
                    spec.display_name,
                    spec.file_extensions.join(" .")
                );
            }
        }
    }

    Ok(())
}

/// Read the input file, or stdin when the path is "-". Returns the code and
/// the filename usable for extension-based detection.
fn read_input(path: &PathBuf) -> Result<(String, Option<String>)> {
    if path.as_os_str() == "-" {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code)?;
        Ok((code, None))
    } else {
        let code = std::fs::read_to_string(path)?;
        let filename = path.file_name().map(|n| n.to_string_lossy().into_owned());
        Ok((code, filename))
    }
}

fn print_report(language: &str, result: &AnalysisResult) {
    println!("language  : {}", language);
    println!(
        "time      : {}   space: {}   score: {}/100",
        result.overall.time, result.overall.space, result.overall.score
    );

    if !result.patterns.is_empty() {
        println!("\npatterns:");
        for p in &result.patterns {
            println!(
                "  [{:>4}-{:<4}] {:<10} {:<10} {}",
                p.start_line,
                p.end_line,
                p.kind.as_str(),
                p.complexity.label(),
                p.description
            );
        }
    }

    if !result.suggestions.is_empty() {
        println!("\nsuggestions:");
        for s in &result.suggestions {
            println!(
                "  line {:>4} [{}] {}",
                s.line,
                s.priority.as_str(),
                s.title
            );
            println!("            {}", s.description);
        }
    }

    if !result.educational.is_empty() {
        println!("\nconcepts:");
        for entry in &result.educational {
            println!("  - {}", entry.concept);
        }
    }
}
