// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! browser-headers CLI
//!
//! Inspect browser header profiles and fetch URLs as a given browser.

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use browser_headers::{Browser, BrowserExt, HttpClient, SendOptions};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("browser_headers=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "browsers" => {
            for browser in Browser::ALL {
                println!("{}", browser);
            }
            ExitCode::SUCCESS
        }
        "headers" => {
            if args.len() < 3 {
                eprintln!("Usage: browser-headers headers <browser>");
                return ExitCode::from(1);
            }
            print_profile(Browser::from_name(&args[2]))
        }
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: browser-headers fetch <url> [browser]");
                return ExitCode::from(1);
            }
            let browser = args
                .get(3)
                .map(|name| Browser::from_name(name))
                .unwrap_or(Browser::Chrome);

            match fetch_url(&args[2], browser).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Failed to fetch URL: {:#}", e);
                    ExitCode::from(1)
                }
            }
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("browser-headers {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"browser-headers - Browser Header Fingerprints

USAGE:
    browser-headers <COMMAND> [OPTIONS]

COMMANDS:
    browsers                List known browsers
    headers <browser>       Show the headers a browser sends
    fetch <url> [browser]   Fetch a URL as a browser (default: chrome)
    help                    Show this help message
    version                 Show version information

EXAMPLES:
    browser-headers headers ie9
    browser-headers fetch https://example.com firefox
"#
    );
}

fn print_profile(browser: Browser) -> ExitCode {
    match browser.profile() {
        Some(profile) => {
            for (name, value) in profile.entries() {
                println!("{}: {}", name, value);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Unknown browser. Run `browser-headers browsers` for the list.");
            ExitCode::from(1)
        }
    }
}

async fn fetch_url(url: &str, browser: Browser) -> anyhow::Result<()> {
    println!("Fetching {} as {}", url, browser);

    let client = HttpClient::new().context("creating HTTP client")?;
    let response = client
        .get_as(url, SendOptions::new(), browser)
        .await
        .with_context(|| format!("GET {}", url))?;

    println!("\n=== Request headers ===");
    for (name, value) in client.default_headers().iter() {
        println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }

    println!("\n=== Response ===");
    println!("Status: {}", response.status);
    println!("URL: {}", response.url);
    println!("Content-Type: {:?}", response.content_type());
    println!("Size: {} bytes", response.body().map_or(0, |b| b.len()));
    println!("Time: {}ms", response.response_time_ms);

    Ok(())
}
