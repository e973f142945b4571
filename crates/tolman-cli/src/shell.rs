//! Interactive edit shell.
//!
//! Each input line parses into one [`ShellCommand`] and is dispatched
//! against the [`Workbench`], run to completion before the next line is
//! read. The core is IO-free: callers feed lines in and print the reply
//! text, so tests drive it without a terminal.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use tolman_model::{Item, ItemId, ToleranceId};
use tolman_persistence::{StoreFile, save_store};
use tolman_state::{EditSession, SessionError, Workbench};

const SET_USAGE: &str = "set <tolerance> <value>";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    List,
    Open { item_id: ItemId },
    Set { tolerance: String, value: f64 },
    Errors,
    Status,
    Apply,
    Cancel,
    Submit,
    Help,
    Quit,
}

/// A line that could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellParseError {
    #[error("unknown command `{0}`; try `help`")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{value}` is not a number")]
    NotANumber { value: String },

    #[error("`{value}` is not a finite number")]
    NotFinite { value: f64 },
}

impl ShellCommand {
    /// Parse one input line. Blank lines parse to `None`.
    ///
    /// `set` takes the last token as the value and joins the rest into
    /// the tolerance token, so names containing spaces need no quoting.
    pub fn parse(line: &str) -> Result<Option<ShellCommand>, ShellParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = tokens.split_first() else {
            return Ok(None);
        };
        let command = match command {
            "list" => ShellCommand::List,
            "open" => match rest {
                [item_id] => ShellCommand::Open {
                    item_id: ItemId::new(*item_id),
                },
                _ => return Err(ShellParseError::Usage("open <item-id>")),
            },
            "set" => {
                let Some((value_token, tolerance_tokens)) = rest.split_last() else {
                    return Err(ShellParseError::Usage(SET_USAGE));
                };
                if tolerance_tokens.is_empty() {
                    return Err(ShellParseError::Usage(SET_USAGE));
                }
                let value: f64 =
                    value_token
                        .parse()
                        .map_err(|_| ShellParseError::NotANumber {
                            value: (*value_token).to_string(),
                        })?;
                if !value.is_finite() {
                    return Err(ShellParseError::NotFinite { value });
                }
                ShellCommand::Set {
                    tolerance: tolerance_tokens.join(" "),
                    value,
                }
            }
            "errors" => ShellCommand::Errors,
            "status" => ShellCommand::Status,
            "apply" => ShellCommand::Apply,
            "cancel" => ShellCommand::Cancel,
            "submit" => ShellCommand::Submit,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ShellParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Outcome of one handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellReply {
    /// Print the text (if any) and read the next line.
    Continue(String),
    /// Print the text (if any) and leave the shell.
    Quit(String),
}

impl ShellReply {
    /// The reply text regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            ShellReply::Continue(text) | ShellReply::Quit(text) => text,
        }
    }
}

/// Shell state: a workbench over the loaded store, plus the file the store
/// is written back to when a session is applied.
#[derive(Debug)]
pub struct EditShell {
    workbench: Workbench,
    store_file: StoreFile,
    store_path: PathBuf,
}

impl EditShell {
    pub fn new(store_file: StoreFile, store_path: impl Into<PathBuf>) -> Self {
        let workbench = Workbench::new(store_file.items.clone());
        Self {
            workbench,
            store_file,
            store_path: store_path.into(),
        }
    }

    /// The workbench being driven, for read access.
    pub fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str) -> ShellReply {
        let command = match ShellCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return ShellReply::Continue(String::new()),
            Err(error) => return ShellReply::Continue(format!("error: {error}")),
        };
        debug!(?command, "shell command");
        self.handle_command(command)
    }

    fn handle_command(&mut self, command: ShellCommand) -> ShellReply {
        match command {
            ShellCommand::List => ShellReply::Continue(self.render_items()),
            ShellCommand::Open { item_id } => self.open(&item_id),
            ShellCommand::Set { tolerance, value } => self.set(&tolerance, value),
            ShellCommand::Errors => ShellReply::Continue(self.render_errors()),
            ShellCommand::Status => ShellReply::Continue(self.render_status()),
            ShellCommand::Apply => self.apply(),
            ShellCommand::Cancel => ShellReply::Continue(self.cancel()),
            ShellCommand::Submit => ShellReply::Continue(self.submit()),
            ShellCommand::Help => ShellReply::Continue(help_text()),
            ShellCommand::Quit => ShellReply::Quit(self.quit_text()),
        }
    }

    fn render_items(&self) -> String {
        let mut lines = Vec::new();
        for item in self.workbench.store().items() {
            lines.push(format!("{}  {}", item.id, item.label));
            for tolerance in &item.tolerances {
                lines.push(format!(
                    "  {}  {}  {} ({} - {})",
                    tolerance.id,
                    tolerance.name,
                    tolerance.value,
                    tolerance.floor,
                    tolerance.ceiling
                ));
            }
        }
        lines.join("\n")
    }

    fn open(&mut self, item_id: &ItemId) -> ShellReply {
        if let Err(error) = self.workbench.open_session(item_id) {
            return ShellReply::Continue(format!("error: {error}"));
        }
        match self.workbench.session() {
            Some(session) => ShellReply::Continue(render_session(session)),
            None => ShellReply::Continue(String::new()),
        }
    }

    fn set(&mut self, token: &str, value: f64) -> ShellReply {
        let tolerance_id = match self.workbench.session() {
            Some(session) => match resolve_tolerance(session.item(), token) {
                Some(id) => id,
                None => {
                    return ShellReply::Continue(format!(
                        "error: no tolerance `{token}` on item {}",
                        session.item_id()
                    ));
                }
            },
            None => {
                return ShellReply::Continue(format!("error: {}", SessionError::NoActiveSession));
            }
        };
        match self.workbench.set_value(&tolerance_id, value) {
            Ok(errors) if errors.is_empty() => {
                ShellReply::Continue(format!("{tolerance_id} = {value}"))
            }
            Ok(errors) => {
                let mut lines = vec![format!("{tolerance_id} = {value}")];
                for error in errors {
                    lines.push(format!("  ! {}  {}", error.tolerance_id(), error.message()));
                }
                ShellReply::Continue(lines.join("\n"))
            }
            Err(error) => ShellReply::Continue(format!("error: {error}")),
        }
    }

    fn render_errors(&self) -> String {
        let Some(session) = self.workbench.session() else {
            return "No session open.".to_string();
        };
        if session.errors().is_empty() {
            return "No validation errors.".to_string();
        }
        session
            .errors()
            .iter()
            .map(|error| format!("{}  {}", error.tolerance_id(), error.message()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_status(&self) -> String {
        let mut lines = Vec::new();
        match self.workbench.session() {
            Some(session) => {
                lines.push(render_session(session));
                if !session.can_apply() {
                    lines.push(format!(
                        "{} validation error(s); `errors` lists them.",
                        session.errors().len()
                    ));
                } else if session.is_dirty() {
                    lines.push("Ready to apply.".to_string());
                }
            }
            None => lines.push("No session open.".to_string()),
        }
        lines.push(format!(
            "Pending changes: {} item(s).",
            self.workbench.pending_changes()
        ));
        lines.join("\n")
    }

    fn apply(&mut self) -> ShellReply {
        let applied = match self.workbench.apply_session() {
            Ok(applied) => applied,
            Err(error) => return ShellReply::Continue(format!("error: {error}")),
        };
        if applied.changed.is_empty() {
            return ShellReply::Continue("No values changed; session closed.".to_string());
        }
        self.store_file.items = self.workbench.store().items().to_vec();
        if let Err(error) = save_store(&mut self.store_file, &self.store_path) {
            return ShellReply::Continue(format!(
                "error: changes applied in memory, saving the store failed: {error}"
            ));
        }
        let mut lines = vec![format!(
            "Applied {} change(s) to item {}.",
            applied.changed.len(),
            applied.item_id
        )];
        for (tolerance_id, value) in &applied.changed {
            lines.push(format!("  {tolerance_id} = {value}"));
        }
        ShellReply::Continue(lines.join("\n"))
    }

    fn cancel(&mut self) -> String {
        if self.workbench.cancel_session() {
            "Session cancelled; candidates discarded.".to_string()
        } else {
            "No session open.".to_string()
        }
    }

    fn submit(&mut self) -> String {
        let Some(payload) = self.workbench.submit() else {
            return "No changes to submit.".to_string();
        };
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => format!("Submitting {} item(s):\n{json}", payload.len()),
            Err(error) => format!("error: could not encode the payload: {error}"),
        }
    }

    fn quit_text(&self) -> String {
        let mut notes = Vec::new();
        if self.workbench.session().is_some_and(EditSession::is_dirty) {
            notes.push("Discarding the open session.".to_string());
        }
        let pending = self.workbench.pending_changes();
        if pending > 0 {
            notes.push(format!(
                "{pending} item(s) had unsubmitted changes; applied values are saved, the submit list is not."
            ));
        }
        notes.join("\n")
    }
}

/// Session view: every tolerance with its candidate value, range, and the
/// first error attached to it, the way the original editor rendered fields.
fn render_session(session: &EditSession) -> String {
    let item = session.item();
    let mut lines = vec![format!("Editing {}  {}", item.id, item.label)];
    for tolerance in &item.tolerances {
        let value = session
            .candidate_value(&tolerance.id)
            .unwrap_or(tolerance.value);
        lines.push(format!(
            "  {}  {}  {} ({} - {})",
            tolerance.id, tolerance.name, value, tolerance.floor, tolerance.ceiling
        ));
        if let Some(error) = session.error_for(&tolerance.id) {
            lines.push(format!("    ! {}", error.message()));
        }
    }
    lines.join("\n")
}

/// A tolerance may be addressed by id or by exact name.
fn resolve_tolerance(item: &Item, token: &str) -> Option<ToleranceId> {
    item.tolerance(&ToleranceId::new(token))
        .or_else(|| item.tolerance_named(token))
        .map(|tolerance| tolerance.id.clone())
}

fn help_text() -> String {
    [
        "Commands:",
        "  list                     Show every item and its committed tolerances",
        "  open <item-id>           Start editing an item (an open session is discarded)",
        "  set <tolerance> <value>  Stage a candidate value; tolerance by id or exact name",
        "  errors                   List validation errors for the open session",
        "  status                   Session view plus the pending change count",
        "  apply                    Commit the session to the store and save it",
        "  cancel                   Discard the open session",
        "  submit                   Send all pending changes and clear the list",
        "  help                     Show this text",
        "  quit                     Leave the shell",
    ]
    .join("\n")
}
