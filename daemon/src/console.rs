//! Line-oriented gate console: parses operator commands and renders the
//! session's responses as text.

use crate::camera::SimulatedCamera;
use society_types::Timestamp;
use society_verification::{
    CodeSource, DecisionOutcome, GateEvent, GatePhase, GateSession, VisitorQuery, VisitorRecord,
};

pub const HELP: &str = "\
commands:
  scan              activate the camera and verify the detected pass
  enter <code>      verify a QR code ID or vehicle number typed by hand
  approve | deny    decide on the verified visitor
  dismiss           return to the scan screen without deciding
  clear             dismiss the current notification and message
  status            show the gate screen
  visitors [text]   search the visitor log
  stats             show gate counters
  help              show this help
  quit              leave the console";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Scan,
    Enter(String),
    Decide(DecisionOutcome),
    Dismiss,
    Clear,
    Status,
    Visitors(Option<String>),
    Stats,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "scan" => ConsoleCommand::Scan,
        // Blank codes go through to the verifier, which reports them.
        "enter" | "verify" => ConsoleCommand::Enter(rest.to_string()),
        "approve" => ConsoleCommand::Decide(DecisionOutcome::Approved),
        "deny" | "reject" => ConsoleCommand::Decide(DecisionOutcome::Denied),
        "dismiss" | "cancel" => ConsoleCommand::Dismiss,
        "clear" => ConsoleCommand::Clear,
        "status" | "" => ConsoleCommand::Status,
        "visitors" => ConsoleCommand::Visitors((!rest.is_empty()).then(|| rest.to_string())),
        "stats" => ConsoleCommand::Stats,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(command)
}

/// One operator's gate screen.
pub struct Console {
    session: GateSession,
    camera: SimulatedCamera,
}

impl Console {
    pub fn new(session: GateSession, camera: SimulatedCamera) -> Self {
        Self { session, camera }
    }

    /// Run a command. Returns the lines to print; `None` means quit.
    pub fn handle(&mut self, command: ConsoleCommand, now: Timestamp) -> Option<Vec<String>> {
        let mut out = Vec::new();
        match command {
            ConsoleCommand::Quit => return None,
            ConsoleCommand::Help => out.push(HELP.to_string()),
            ConsoleCommand::Scan => match self.session.scan(&mut self.camera, now) {
                Ok(Some(record)) => out.extend(verified_card(record)),
                Ok(None) => out.push("camera closed: nothing detected".to_string()),
                Err(e) => out.push(format!("! {e}")),
            },
            ConsoleCommand::Enter(code) => {
                match self.session.submit_code(&code, CodeSource::Manual, now) {
                    Ok(record) => out.extend(verified_card(record)),
                    Err(e) => out.push(format!("! {e}")),
                }
            }
            ConsoleCommand::Decide(outcome) => match self.session.decide(outcome, now) {
                Ok(n) => out.push(format!(
                    "** {} (dismisses in {}s)",
                    n.message,
                    n.remaining_secs(now)
                )),
                Err(e) => out.push(format!("! {e}")),
            },
            ConsoleCommand::Dismiss => {
                if !self.session.dismiss_verification() {
                    out.push("no visitor scanned".to_string());
                }
            }
            ConsoleCommand::Clear => {
                self.session.dismiss_notification();
                self.session.dismiss_alert();
            }
            ConsoleCommand::Status => out.extend(self.status(now)),
            ConsoleCommand::Visitors(text) => {
                let query = text.map(VisitorQuery::text).unwrap_or_default();
                let rows = self.session.directory().search(&query);
                if rows.is_empty() {
                    out.push("no visitors found".to_string());
                }
                out.extend(rows.into_iter().map(visitor_row));
            }
            ConsoleCommand::Stats => {
                let stats = self.session.stats();
                out.extend(stats.snapshot().map(|(c, v)| format!("{:<20} {v}", c.as_str())));
                out.push(format!("{:<20} {}", "failed_lookups", stats.failed_lookups()));
            }
        }
        out.extend(self.drain_event_lines());
        Some(out)
    }

    /// Expire timed messages and report what disappeared.
    pub fn tick(&mut self, now: Timestamp) -> Vec<String> {
        self.session.tick(now);
        self.drain_event_lines()
    }

    fn drain_event_lines(&mut self) -> Vec<String> {
        self.session
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                GateEvent::NotificationExpired => Some("(notification dismissed)".to_string()),
                GateEvent::AlertExpired => Some("(message cleared)".to_string()),
                GateEvent::EntryRecorded { visitor } => {
                    Some(format!("visitor {visitor} marked inside"))
                }
                other => {
                    tracing::debug!(?other, "gate event");
                    None
                }
            })
            .collect()
    }

    fn status(&self, now: Timestamp) -> Vec<String> {
        let mut out = Vec::new();
        match (self.session.phase(), self.session.active_visitor()) {
            (GatePhase::Verified, Some(record)) => out.extend(verified_card(record)),
            _ => out.push("No visitor scanned".to_string()),
        }
        if let Some(alert) = self.session.alert(now) {
            out.push(format!("! {}", alert.message));
        }
        if let Some(n) = self.session.notification(now) {
            out.push(format!("** {}", n.message));
        }
        out
    }
}

fn verified_card(record: &VisitorRecord) -> Vec<String> {
    vec![
        format!(
            "Verified visitor: {} (pass {})",
            record.name,
            record.access_code.as_deref().unwrap_or("-")
        ),
        format!(
            "  {} | {} | visiting {} | {}",
            record.purpose,
            record.vehicle_number.as_deref().unwrap_or("No Vehicle"),
            record.flat_no,
            record.status
        ),
        "  approve or deny?".to_string(),
    ]
}

fn clock_time(at: Option<Timestamp>) -> String {
    at.map_or_else(|| "-".to_string(), |t| t.as_secs().to_string())
}

pub(crate) fn visitor_row(record: &VisitorRecord) -> String {
    format!(
        "{:<4} {:<16} {:<6} {:<13} {:<14} {:<10} {:<10} {}",
        record.id.as_str(),
        record.name,
        record.flat_no,
        record.purpose.label(),
        record.vehicle_number.as_deref().unwrap_or("-"),
        clock_time(record.expected_at),
        clock_time(record.exit_at),
        record.status
    )
}
