//! Command-line front-end: parse ClickHouse SQL from an argument or a file
//! and print either the formatted SQL or the AST as JSON.

use clickhouse_sql::Parser;
use std::process::ExitCode;

const HELP: &str = "\
Usage: clickhouse-sql [YOUR SQL STRING] -f [YOUR SQL FILE] --format

  -f <path>   Parse SQL from a file
  --format    Beautify print the ClickHouse SQL instead of the JSON AST
  -h          Print this help message
";

struct Options {
    file: Option<String>,
    format: bool,
    sql: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        file: None,
        format: false,
        sql: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(HELP.to_string()),
            "-f" => {
                options.file = Some(args.next().ok_or("-f requires a path")?);
            }
            "-format" | "--format" => options.format = true,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown flag: {arg}\n{HELP}"));
            }
            _ => options.sql = Some(arg),
        }
    }
    Ok(options)
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            print!("{message}");
            return ExitCode::SUCCESS;
        }
    };

    let source = match (&options.file, &options.sql) {
        (Some(path), _) => match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("read file error: {err}");
                return ExitCode::FAILURE;
            }
        },
        (None, Some(sql)) => sql.clone(),
        (None, None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
    };

    let statements = match Parser::new(&source).parse_statements() {
        Ok(statements) => statements,
        Err(err) => {
            eprintln!("parse statements error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if options.format {
        for statement in &statements {
            println!("{};", statement.sql(0));
        }
    } else {
        match serde_json::to_string_pretty(&statements) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("serialize error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
