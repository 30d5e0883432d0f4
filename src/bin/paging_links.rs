//! CLI that reads HTML from stdin and prints the paging links as JSON.
//!
//! Usage: `paging_links <page-url> [--prev] [--debug] < page.html`
//!
//! `--prev` also looks for the previous page. `--debug` includes the per-link
//! trace in the output and logs it to stderr; `RUST_LOG` overrides the filter.

use rs_paging_links::dom::Document;
use rs_paging_links::url_utils::fix_missing_scheme;
use rs_paging_links::{find_paging_link, Direction, Options, PagingTrace};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    next_page: Option<String>,
    previous_page: Option<String>,
    trace: Vec<PagingTrace>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug = args.iter().any(|a| a == "--debug");
    let want_prev = args.iter().any(|a| a == "--prev");
    let Some(url) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("Usage: paging_links <page-url> [--prev] [--debug] < page.html");
        std::process::exit(1);
    };
    let url = fix_missing_scheme(url);

    let default_filter = if debug { "rs_paging_links=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let doc = Document::from(html.as_str());
    let root = doc.select("html");
    let options = Options {
        collect_trace: debug,
        ..Options::default()
    };

    let mut directions = vec![Direction::Next];
    if want_prev {
        directions.push(Direction::Prev);
    }

    let mut output = Output {
        next_page: None,
        previous_page: None,
        trace: Vec::new(),
    };
    for direction in directions {
        let result = match find_paging_link(&root, &url, direction, &options) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        match direction {
            Direction::Next => output.next_page = result.href,
            Direction::Prev => output.previous_page = result.href,
        }
        output.trace.extend(result.trace);
    }

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
