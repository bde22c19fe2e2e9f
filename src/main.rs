//! `mars-rover [--json] [PATH]`
//!
//! Reads a mission from PATH (or stdin when absent or `-`) and prints the final rover
//! positions. Logs go to stderr, filtered by `RUST_LOG`.

use anyhow::{Context, bail};
use mars_rover::{Mission, RoverInterpreter};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Args {
    json: bool,
    path: Option<String>,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut args = Args {
            json: false,
            path: None,
        };
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--json" => args.json = true,
                "-" => args.path = None,
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path => {
                    if args.path.replace(path.to_string()).is_some() {
                        bail!("expected at most one input path");
                    }
                }
            }
        }
        Ok(args)
    }
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading stdin")?;
            Ok(input)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mars_rover=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse()?;
    let input = read_input(args.path.as_deref())?;

    let mission = Mission::parse(&input)?;
    tracing::info!(rovers = mission.plans.len(), "mission loaded");
    let report = mission.run(&RoverInterpreter::standard())?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
