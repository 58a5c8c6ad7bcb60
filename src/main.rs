use std::io::{self, BufRead, Write};
use std::panic::AssertUnwindSafe;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod model;
mod parsers;
mod protocol;
mod services;

#[cfg(test)]
mod testing;

// stdout carries protocol responses, so logs go to stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let config = config::EditorConfig::from_env();
    info!(export_dir = ?config.export_dir, "messages-core started");

    let mut session = protocol::Session::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            protocol::handle(&mut session, &line)
        }));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                error!("request handler panicked");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}
