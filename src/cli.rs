use std::io::{self, BufRead, Write};
use clap::Parser;
use loglens::model::SearchResponse;
use loglens::parser::{self, Command};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Interactive client for a running loglens server", long_about = None)]
struct Args {
    /// Base URL of the search server
    #[clap(long, env = "LOGLENS_HOST", default_value = "http://127.0.0.1:8080")]
    host: String,
}

fn main() {
    let args = Args::parse();
    print_banner();

    let client = reqwest::blocking::Client::new();
    println!("Type 'HELP' for supported commands or 'EXIT' to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let mut buffer = String::new();

    loop {
        print!("loglens> ");
        if io::stdout().flush().is_err() { break; }
        buffer.clear();

        match lines.read_line(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if buffer.trim().is_empty() { continue; }

        match parser::parse_command(&buffer) {
            Ok(Command::Exit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Search { terms }) => {
                if let Err(e) = perform_search(&client, &args.host, &terms) {
                    println!("[\u{26a0}\u{fe0f} Error] {}", e);
                }
            }
            Err(e) => {
                println!("[\u{2717} Syntax Error] {}", e);
                println!("    \u{2139}\u{fe0f}  Hint: Try 'SEARCH disk failure'");
            }
        }
    }
}

fn print_banner() {
    println!("\n==================================================");
    println!("   loglens CLI - Full-text Log Search");
    println!("==================================================\n");
}

fn print_help() {
    println!("\n--- Available Commands ---");
    println!("1. SEARCH:  SEARCH disk failure   (all terms must match)");
    println!("            FIND \"disk failure\"");
    println!("2. HELP:    Show this list");
    println!("3. EXIT:    Quit\n");
}

fn perform_search(client: &reqwest::blocking::Client, host: &str, terms: &str) -> Result<(), String> {
    let url = format!("{}/search", host.trim_end_matches('/'));
    let resp = client
    .get(&url)
    .query(&[("q", terms)])
    .send()
    .map_err(|e| format!("Could not reach server at {}: {}", host, e))?;

    if !resp.status().is_success() {
        return Err(format!("Server Rejected Request ({})", resp.status()));
    }

    let body: SearchResponse = resp.json().map_err(|e| e.to_string())?;
    println!("\nFound {} results in {}ms:", body.count, body.time_ms);
    for record in body.results {
        println!("  \u{2022} {} | {} | {}", record.event_id, record.nano_timestamp, record.message);
    }
    println!();
    Ok(())
}
