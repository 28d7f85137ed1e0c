//! Ticket Revenue Example
//!
//! Solves one ticket revenue problem and prints a report.
//!
//! Use `-p` to set the prices, `-t` the number of tickets and `-s` the strategy
//! Use `-c` to run every strategy on the same input
//! Use `-e` to write the session history as YAML

use std::io;

use anyhow::Result;
use jiff::Timestamp;
use tracing_subscriber::EnvFilter;

use marquee::{
    calculation::{Calculation, compare_strategies},
    history::{DEFAULT_HISTORY_LIMIT, HistoryStore, MemoryHistory, export_yaml_file},
    notify::{NotificationSink, Signal, TracingSink},
    report::Report,
    settings::{MemorySettings, Settings},
    utils::RevenueArgs,
};

/// Ticket Revenue Example
pub fn main() -> Result<()> {
    let args = RevenueArgs::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::load(&MemorySettings::new());
    let mut sink = TracingSink::from_settings(&settings);

    let request = match args.request() {
        Ok(request) => request,
        Err(err) => {
            sink.notify(Signal::Error);
            return Err(err.into());
        }
    };

    let calculations: Vec<Calculation> = if args.compare {
        compare_strategies(&request.prices, request.quota)
    } else {
        vec![request.run()]
    };

    let mut history = MemoryHistory::new();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for calculation in &calculations {
        Report::new(calculation).write_to(&mut handle)?;
        history.save(calculation.to_record(Timestamp::now()));
    }

    if let Some(path) = args.export.as_deref() {
        export_yaml_file(&history.recent(DEFAULT_HISTORY_LIMIT), path)?;
    }

    sink.notify(Signal::Success);

    Ok(())
}
