mod report;

use std::io::{self, IsTerminal};

use welldeck::{Options, UnrecognizedLinePolicy, parse_with, query};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let text = match std::fs::read_to_string(&config.file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: failed to read '{}': {err}", config.file);
            std::process::exit(1);
        }
    };

    let options = Options { unrecognized_lines: config.unrecognized_lines };
    let schedule = parse_with(&text, &options);

    match &config.query {
        Some((date, well, status)) => match query(&schedule, date, well, status) {
            Ok(Some(record)) => report::print_query_hit(record, config.color),
            Ok(None) => report::print_query_miss(date, well, status, config.color),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        },
        None => report::print_schedule(&config.file, &schedule, config.color),
    }
}

struct CliConfig {
    file: String,
    query: Option<(String, String, String)>,
    unrecognized_lines: UnrecognizedLinePolicy,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut file: Option<String> = None;
    let mut date: Option<String> = None;
    let mut well: Option<String> = None;
    let mut status: Option<String> = None;
    let mut unrecognized_lines = UnrecognizedLinePolicy::Ignore;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("welldeck {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--report-unrecognized" => unrecognized_lines = UnrecognizedLinePolicy::Report,
            "--file" | "-f" => {
                let value = args.next().ok_or_else(|| "error: --file expects a value".to_string())?;
                if file.is_some() {
                    return Err("error: deck file provided multiple times".to_string());
                }
                file = Some(value);
            }
            "--date" => {
                date = Some(args.next().ok_or_else(|| "error: --date expects a value".to_string())?);
            }
            "--well" => {
                well = Some(args.next().ok_or_else(|| "error: --well expects a value".to_string())?);
            }
            "--status" => {
                status = Some(args.next().ok_or_else(|| "error: --status expects a value".to_string())?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if file.is_some() {
                    return Err("error: deck file provided multiple times".to_string());
                }
                file = Some(arg);
            }
        }
    }

    let file = file.ok_or_else(|| format!("error: no deck file provided\n\n{}", help_text()))?;

    let query = match (date, well, status) {
        (Some(date), Some(well), Some(status)) => Some((date, well, status)),
        (None, None, None) => None,
        _ => return Err("error: --date, --well and --status must be given together".to_string()),
    };

    Ok(CliConfig { file, query, unrecognized_lines, color })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "welldeck {version}

Schedule-deck completion parser CLI.

Usage:
  welldeck [OPTIONS] <deck-file>
  welldeck [OPTIONS] <deck-file> --date <date> --well <name> --status <flag>

Options:
  -f, --file <path>          Schedule deck to parse (positional also accepted).
  --date <date>              Effective date to query, any separator style
                             (01/10.2018, 01-10-2018, ...).
  --well <name>              Well name to query, any casing.
  --status <flag>            Status flag to query (open, shut, auto, stop).
  --report-unrecognized      Record unmatched lines inside keyword blocks as
                             issues instead of dropping them silently.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Without a query the parsed schedule is summarized; with one, the first
matching completion under that date is printed.

Exit codes:
  0  Success (including a query miss).
  1  Deck file could not be read.
  2  Invalid arguments or an unparseable query date.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
