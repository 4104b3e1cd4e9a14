//! Terminal rendition of the "Dexscreener Analyzer" window: an output area,
//! a status line and a single action triggered from stdin.

use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::MarketDataSource;
use crate::error::Result;
use crate::pipeline::{Pipeline, Status, View};
use crate::telegram::Notifier;

pub const TITLE: &str = "Dexscreener Analyzer";
pub const ACTION_LABEL: &str = "Fetch and Analyze";

pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self) {
        let _ = writeln!(self.out, "{}", TITLE.bold());
        let _ = writeln!(self.out, "{}", "=".repeat(TITLE.len()));
    }

    fn prompt(&mut self) {
        let _ = write!(
            self.out,
            "[Enter] {}   [q] Quit > ",
            ACTION_LABEL
        );
        let _ = self.out.flush();
    }
}

impl<W: Write> View for TerminalView<W> {
    fn set_status(&mut self, status: Status) {
        let text = status.to_string();
        let text = text.as_str();
        let styled = match status {
            Status::Done => text.green(),
            Status::Error => text.red().bold(),
            Status::Ready => text.normal(),
            _ => text.yellow(),
        };
        let _ = writeln!(self.out, "Status: {}", styled);
        let _ = self.out.flush();
    }

    fn set_output(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Activate,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "" | "f" | "fetch" => Command::Activate,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Reads actions from stdin until quit or EOF. Each activation is independent.
pub async fn run_interactive<S, N, W>(pipeline: &Pipeline<S, N>, view: &mut TerminalView<W>) -> Result<()>
where
    S: MarketDataSource,
    N: Notifier,
    W: Write,
{
    view.header();
    view.set_status(Status::Ready);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        view.prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line) {
            Command::Activate => {
                pipeline.activate(&mut *view).await;
            }
            Command::Quit => break,
            Command::Unknown => {
                view.set_output(&format!("Unknown command: {}", line.trim()));
            }
        }
    }
    Ok(())
}

/// Single headless activation.
pub async fn run_once<S, N, W>(pipeline: &Pipeline<S, N>, view: &mut TerminalView<W>) -> Status
where
    S: MarketDataSource,
    N: Notifier,
    W: Write,
{
    view.header();
    pipeline.activate(&mut *view).await
}
