//! Command-line front end.
//!
//! ```text
//! timetable [--report] [--compact] [SECTION ...]
//! ```
//!
//! Sections come from the arguments, else `TIMETABLE_SECTIONS`
//! (comma-separated), else `A B C D`. The timetable document (or, with
//! `--report`, the analysis) is written to stdout as JSON; logs go to
//! stderr and are filtered by `RUST_LOG`.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_timetable::analysis::ScheduleAnalysis;
use u_timetable::scheduler::{TimetableGenerator, TimetableRequest};

const SECTIONS_ENV: &str = "TIMETABLE_SECTIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    sections: Vec<String>,
    report: bool,
    compact: bool,
}

fn parse_args<I>(args: I, env_sections: Option<&str>) -> anyhow::Result<CliOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions {
        sections: Vec::new(),
        report: false,
        compact: false,
    };

    for arg in args {
        match arg.as_str() {
            "--report" => options.report = true,
            "--compact" => options.compact = true,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag: {flag}"),
            _ => options.sections.push(arg),
        }
    }

    if options.sections.is_empty() {
        options.sections = match env_sections {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => TimetableRequest::default().sections,
        };
    }

    Ok(options)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let env_sections = std::env::var(SECTIONS_ENV).ok();
    let options = parse_args(std::env::args().skip(1), env_sections.as_deref())?;

    let request = TimetableRequest::new(options.sections);
    let set = TimetableGenerator::new()
        .generate(&request)
        .context("failed to generate timetables")?;

    let output = if options.report {
        let analysis = ScheduleAnalysis::analyze(&set);
        if options.compact {
            serde_json::to_string(&analysis)?
        } else {
            serde_json::to_string_pretty(&analysis)?
        }
    } else if options.compact {
        set.to_json()?
    } else {
        set.to_json_pretty()?
    };

    println!("{output}");
    Ok(())
}
