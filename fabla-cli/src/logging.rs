//! Log output for the CLI.
//!
//! Info-level messages are the command's normal output and print bare.
//! Warnings and errors carry a level tag. `RUST_LOG` overrides everything.

use std::io::Write;

const CRATES: &[&str] = &["fabla_cli", "fabla_core", "fabla_scraper", "fabla_frontend"];

pub(crate) fn init(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let filter = default_filter(level);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format(|buf, record| {
            if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .init();
}

/// Third-party crates stay at `warn`; ours log at `level`.
fn default_filter(level: &str) -> String {
    let mut filter = String::from("warn");
    for name in CRATES {
        filter.push_str(&format!(",{}={}", name, level));
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_scopes_our_crates() {
        let filter = default_filter("debug");
        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("fabla_scraper=debug"));
        assert!(filter.contains("fabla_cli=debug"));
        assert!(!filter.contains("reqwest"));
    }
}
