use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;

use skelgen_core::cxx::Severity;
use skelgen_core::{CxxGenerator, Generator, Problem};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// skelgen — contest input-format to C++ skeleton generator
///
/// Reads a problem (id, constraint text, input definitions) as JSON and
/// emits a program that declares and reads every input value.
#[derive(Parser)]
#[command(name = "skelgen", version, about, long_about = None)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C++ skeleton for a problem
    Generate {
        /// Path to problem .json file
        file: PathBuf,
        /// Write the source here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the constants extracted from the problem description
    Consts {
        /// Path to problem .json file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check input definitions against the description without generating
    Check {
        /// Path to problem .json file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let exit_code = match cli.command {
        Commands::Generate { file, output } => cmd_generate(&file, output.as_deref(), cli.quiet),
        Commands::Consts { file, json } => cmd_consts(&file, json),
        Commands::Check { file, json } => cmd_check(&file, json, cli.quiet),
        Commands::Version => {
            println!(
                "skelgen {} (skelgen-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            EXIT_OK
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load a problem file; errors are reported and mapped to exit code 2
fn load_problem(file: &Path) -> Result<Problem, i32> {
    let text = std::fs::read_to_string(file).map_err(|e| {
        eprintln!("{} cannot read {}: {}", "error:".red().bold(), file.display(), e);
        EXIT_ERROR
    })?;
    let pbm = Problem::from_json(&text).map_err(|e| {
        eprintln!("{} {}: {}", "error:".red().bold(), file.display(), e);
        EXIT_ERROR
    })?;
    tracing::debug!(q = %pbm.q, defs = pbm.defs.len(), "loaded problem");
    Ok(pbm)
}

fn cmd_generate(file: &Path, output: Option<&Path>, quiet: bool) -> i32 {
    let mut pbm = match load_problem(file) {
        Ok(pbm) => pbm,
        Err(code) => return code,
    };

    let generator = CxxGenerator::new();
    if let Err(e) = generator.process(&mut pbm) {
        eprintln!("{} {}: {}", "error:".red().bold(), pbm.q, e);
        return EXIT_INVALID;
    }

    // sources already present in the problem file are not ours to emit
    let Some(src) = pbm.srcs.last() else {
        return EXIT_ERROR;
    };
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &src.txt) {
                eprintln!("{} cannot write {}: {}", "error:".red().bold(), path.display(), e);
                return EXIT_ERROR;
            }
            tracing::info!(path = %path.display(), ext = %src.ext, "wrote source");
            if !quiet {
                eprintln!("{} {} → {}", "generated".green().bold(), pbm.q, path.display());
            }
        }
        None => print!("{}", src.txt),
    }
    EXIT_OK
}

fn cmd_consts(file: &Path, json: bool) -> i32 {
    let pbm = match load_problem(file) {
        Ok(pbm) => pbm,
        Err(code) => return code,
    };

    let consts = match CxxGenerator::new().constants(&pbm.desc) {
        Ok(consts) => consts,
        Err(e) => {
            eprintln!("{} {}: {}", "error:".red().bold(), pbm.q, e);
            return EXIT_INVALID;
        }
    };

    if json {
        match serde_json::to_string_pretty(&consts) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                return EXIT_ERROR;
            }
        }
    } else {
        for c in &consts {
            println!("{}", c);
        }
    }
    EXIT_OK
}

fn cmd_check(file: &Path, json: bool, quiet: bool) -> i32 {
    let pbm = match load_problem(file) {
        Ok(pbm) => pbm,
        Err(code) => return code,
    };

    let result = CxxGenerator::new().check(&pbm.defs, &pbm.desc);

    if json {
        let diagnostics: Vec<serde_json::Value> = result
            .diagnostics
            .iter()
            .map(|d| {
                serde_json::json!({
                    "severity": severity_label(d.severity),
                    "index": d.index,
                    "message": d.error.to_string(),
                })
            })
            .collect();
        let report = serde_json::json!({
            "q": pbm.q,
            "valid": result.is_valid(),
            "errors": result.errors().len(),
            "warnings": result.warnings().len(),
            "diagnostics": diagnostics,
        });
        println!("{}", report);
    } else {
        for d in &result.diagnostics {
            match d.severity {
                Severity::Error => eprintln!("{} {}", "error:".red().bold(), d),
                Severity::Warning => eprintln!("{} {}", "warning:".yellow().bold(), d),
            }
        }
        if result.is_valid() && !quiet {
            println!("{} {} is valid", "✓".green().bold(), pbm.q);
        }
    }

    if result.is_valid() {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}
