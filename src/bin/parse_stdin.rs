//! Simple CLI that reads HTML from stdin or a file and prints the
//! classified elements as JSON, or as a plain-text digest with `--text`.

use htmlstr::{parse_bytes_with_options, render_text, Options};
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};

fn print_usage() {
    eprintln!("Usage: parse_stdin [--text] [--base-url URL] [FILE]");
    eprintln!();
    eprintln!("Reads an HTML document from FILE (or stdin when no FILE is");
    eprintln!("given) and prints the classified elements as JSON.");
    eprintln!();
    eprintln!("  --text          print a plain-text digest instead of JSON");
    eprintln!("  --base-url URL  resolve relative links against URL");
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut text_output = false;
    let mut base_url: Option<String> = None;
    let mut input_path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => text_output = true,
            "--base-url" => {
                base_url = Some(args.next().ok_or("--base-url requires a value")?);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            path if !path.starts_with('-') => input_path = Some(path.to_string()),
            other => return Err(format!("Unknown flag: {other}").into()),
        }
    }

    // Raw bytes in: encoding detection happens inside the library.
    let html = match &input_path {
        Some(path) => fs::read(path).map_err(|e| format!("Failed to read {path}: {e}"))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            buf
        }
    };

    let options = Options {
        base_url,
        ..Options::default()
    };
    let elements = parse_bytes_with_options(&html, &options);

    if text_output {
        println!("{}", render_text(&elements));
    } else {
        println!("{}", serde_json::to_string_pretty(&elements)?);
    }

    Ok(())
}
