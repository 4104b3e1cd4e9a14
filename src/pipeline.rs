//! One activation of the fetch, analyze, notify cycle.

use log::{error, info};
use std::fmt;

use crate::analysis;
use crate::api::MarketDataSource;
use crate::error::Result;
use crate::models::AnalyzedRecord;
use crate::telegram::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Fetching,
    Analyzing,
    Sending,
    Done,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Ready => "Ready",
            Status::Fetching => "Fetching token data...",
            Status::Analyzing => "Analyzing token data...",
            Status::Sending => "Sending Telegram messages...",
            Status::Done => "Done",
            Status::Error => "Error occurred",
        };
        f.write_str(text)
    }
}

/// Status line plus read-only output area.
pub trait View {
    fn set_status(&mut self, status: Status);
    fn set_output(&mut self, text: &str);
}

pub fn render_records(records: &[AnalyzedRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| format!("{:?}", records))
}

pub struct Pipeline<S, N> {
    source: S,
    notifier: N,
}

impl<S: MarketDataSource, N: Notifier> Pipeline<S, N> {
    pub fn new(source: S, notifier: N) -> Self {
        Self { source, notifier }
    }

    /// Runs every step in order, stopping at the first failure. Records sent
    /// before a failure stay sent.
    pub async fn run(&self, view: &mut dyn View) -> Result<Vec<AnalyzedRecord>> {
        view.set_status(Status::Fetching);
        let raw = self.source.fetch_pairs().await?;

        view.set_status(Status::Analyzing);
        let records = analysis::analyze(&raw)?;
        view.set_output(&render_records(&records));

        view.set_status(Status::Sending);
        for record in &records {
            self.notifier.notify(record).await?;
        }

        view.set_status(Status::Done);
        info!("Cycle complete: {} notifications sent", records.len());
        Ok(records)
    }

    /// Handler for one trigger of the action: never fails, reports errors to
    /// the view instead. Returns the final status.
    pub async fn activate(&self, view: &mut dyn View) -> Status {
        match self.run(view).await {
            Ok(_) => Status::Done,
            Err(e) => {
                error!("Cycle failed: {}", e);
                view.set_status(Status::Error);
                view.set_output(&format!("Error: {}", e));
                Status::Error
            }
        }
    }
}
