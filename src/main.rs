//! # Matriz CLI
//!
//! Command-line interface for printing text on ESC/P dot-matrix printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print a text file on the default device
//! matriz print invoice.txt
//!
//! # Print from stdin to a network share, letter quality, 15 cpi
//! cat report.txt | matriz print --device '\\server\epson' --lq --cpi 15
//!
//! # 9-pin printer with margins and the Portuguese character table
//! matriz print --pins 9 --charset portugal --left-margin 5 --right-margin 75 letter.txt
//!
//! # List the registered character tables
//! matriz charsets
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use matriz::{CharacterSet, EscPrinter, MatrizError, PinClass};

/// Matriz - ESC/P dot-matrix printer utility
#[derive(Parser, Debug)]
#[command(name = "matriz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a text file as one job
    Print {
        /// Text file to print (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Printer device path or network share
        #[arg(long, default_value = "/dev/lp0")]
        device: String,

        /// Print head pin class (9 or 24)
        #[arg(long, default_value = "24", value_parser = PinClass::parse)]
        pins: PinClass,

        /// Character pitch in characters per inch (10 or 15)
        #[arg(long, default_value_t = 10)]
        cpi: u8,

        /// Letter-quality printing instead of draft
        #[arg(long)]
        lq: bool,

        /// Character table to select (see `matriz charsets`)
        #[arg(long, value_parser = CharacterSet::parse)]
        charset: Option<CharacterSet>,

        /// Proportional character spacing
        #[arg(long)]
        proportional: bool,

        /// Emphasized (bold) printing for the whole job
        #[arg(long)]
        bold: bool,

        /// Left margin in columns (1-255)
        #[arg(long)]
        left_margin: Option<u8>,

        /// Right margin in columns (1-255)
        #[arg(long)]
        right_margin: Option<u8>,
    },
    /// List the registered character tables
    Charsets,
}

/// Job settings applied after the driver's own setup sequence.
struct JobOptions {
    cpi: u8,
    lq: bool,
    charset: Option<CharacterSet>,
    proportional: bool,
    bold: bool,
    margins: Option<(u8, u8)>,
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MatrizError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            file,
            device,
            pins,
            cpi,
            lq,
            charset,
            proportional,
            bold,
            left_margin,
            right_margin,
        } => {
            let margins = match (left_margin, right_margin) {
                (Some(l), Some(r)) => Some((l, r)),
                (None, None) => None,
                _ => {
                    return Err(MatrizError::InvalidCommand(
                        "--left-margin and --right-margin must be given together".to_string(),
                    ));
                }
            };

            let options = JobOptions {
                cpi,
                lq,
                charset,
                proportional,
                bold,
                margins,
            };

            let text = match file {
                Some(path) => fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let mut printer = EscPrinter::new(device.clone(), pins);
            if !printer.initialize() {
                return Err(MatrizError::Transport(format!(
                    "Could not open printer at {}",
                    device
                )));
            }

            // Release the printer on every exit path, success or not.
            let result = print_job(&mut printer, &options, &text);
            printer.close();
            result?;

            println!("Printed to {}", device);
        }
        Commands::Charsets => {
            println!("Registered character tables:");
            for set in CharacterSet::ALL {
                println!("  {:>3}  {}", set.code(), set.name());
            }
        }
    }

    Ok(())
}

/// Apply the job settings, then send the text line by line and eject.
fn print_job(
    printer: &mut EscPrinter,
    options: &JobOptions,
    text: &str,
) -> Result<(), MatrizError> {
    match options.cpi {
        10 => printer.select_10_cpi()?,
        15 => printer.select_15_cpi()?,
        other => {
            return Err(MatrizError::InvalidCommand(format!(
                "Unsupported pitch {} cpi. Use 10 or 15",
                other
            )));
        }
    }

    if options.lq {
        printer.select_letter_quality()?;
    }

    if let Some(set) = options.charset {
        printer.set_character_set(set)?;
    }

    if options.proportional {
        printer.proportional_mode(true)?;
    }

    if options.bold {
        printer.bold(true)?;
    }

    if let Some((left, right)) = options.margins {
        printer.set_margins(left, right)?;
    }

    for line in text.lines() {
        printer.print(line)?;
        printer.line_feed()?;
    }

    printer.form_feed()
}
