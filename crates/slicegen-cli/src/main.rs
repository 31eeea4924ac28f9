// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! slicegen command-line interface.
//!
//! This is the main entry point for the `slicegen` command.

use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;

/// slicegen: type-specialized collection helpers for Rust
#[derive(Debug, Parser)]
#[command(name = "slicegen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// `primitives`, or the source file declaring a named type
    target: Option<String>,

    /// Package identifier (primitives) or type name (named type)
    argument: Option<String>,

    /// Directory for primitive artifacts (default: from slicegen.toml, else `.`)
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// File whose `// package` line names the package when none is given
    #[arg(long)]
    origin: Option<Utf8PathBuf>,

    /// Configuration file (default: ./slicegen.toml when present)
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for commands::Invocation {
    fn from(cli: Cli) -> Self {
        Self {
            target: cli.target,
            argument: cli.argument,
            out_dir: cli.out_dir,
            origin: cli.origin,
            config: cli.config,
        }
    }
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors share the exit status of every other failure.
            let _ = err.print();
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let result = commands::run(&cli.into());

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // The binary's module path is `slicegen`; the engine logs under `slicegen_core`.
    match v {
        0 => "slicegen=info,slicegen_core=info",
        1 => "slicegen=debug,slicegen_core=debug",
        _ => "slicegen=trace,slicegen_core=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "slicegen=info,slicegen_core=info");
        assert_eq!(directive_for_verbosity(1), "slicegen=debug,slicegen_core=debug");
        assert_eq!(directive_for_verbosity(2), "slicegen=trace,slicegen_core=trace");
        assert_eq!(directive_for_verbosity(9), "slicegen=trace,slicegen_core=trace");
    }

    #[test]
    fn parses_primitives_invocation() {
        let cli = Cli::try_parse_from(["slicegen", "primitives", "shapes", "--out-dir", "gen", "-vv"])
            .unwrap();
        assert_eq!(cli.target.as_deref(), Some("primitives"));
        assert_eq!(cli.argument.as_deref(), Some("shapes"));
        assert_eq!(cli.out_dir, Some(Utf8PathBuf::from("gen")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parses_named_invocation() {
        let cli = Cli::try_parse_from(["slicegen", "src/point.rs", "Point"]).unwrap();
        assert_eq!(cli.target.as_deref(), Some("src/point.rs"));
        assert_eq!(cli.argument.as_deref(), Some("Point"));
        assert!(cli.origin.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn positionals_are_optional_for_the_parser() {
        let cli = Cli::try_parse_from(["slicegen"]).unwrap();
        assert!(cli.target.is_none());
        assert!(cli.argument.is_none());
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["slicegen", "a", "b", "c"]).is_err());
    }
}
