//! Replaying user intents against a [`ZoneEditor`].
//!
//! The zone screen talks to the editor through a small set of intents. A
//! session applies them one at a time and records what happened to each, so
//! a whole interaction can be scripted as JSON and checked afterwards.
//!
//! ```json
//! [
//!   {"op": "begin_add", "tab": "safe"},
//!   {"op": "update_draft_field", "update": {"field": "name", "value": "놀이터"}},
//!   {"op": "toggle_day", "day": "월"},
//!   {"op": "commit"}
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::editor::{DeleteOutcome, DraftField, ZoneEditor, ZoneSink};
use crate::error::{Error, Result};
use crate::zone::{Weekday, ZoneType};

/// A user action on the zone screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    /// Click on a tab.
    SwitchTab {
        /// Tab to show.
        tab: ZoneType,
    },
    /// Click on "add zone".
    BeginAdd {
        /// Type of zone to add.
        tab: ZoneType,
    },
    /// Click on a zone's edit button.
    SelectForEdit {
        /// List the zone is in.
        tab: ZoneType,
        /// Zone id.
        id: String,
    },
    /// A form input changed.
    UpdateDraftField {
        /// The new field value.
        update: DraftField,
    },
    /// A day button was clicked.
    ToggleDay {
        /// The day.
        day: Weekday,
    },
    /// Click on "cancel".
    Cancel,
    /// Click on "save".
    Commit,
    /// Click on a zone's delete button.
    DeleteZone {
        /// Zone id in the active tab.
        id: String,
    },
    /// Confirm a staged delete.
    ConfirmDelete,
    /// Dismiss a staged delete.
    DismissDelete,
}

/// What an intent did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// State changed, nothing was emitted.
    Applied,
    /// A day is now selected or not.
    DayToggled {
        /// The day.
        day: Weekday,
        /// Whether it is selected afterwards.
        selected: bool,
    },
    /// A zone was saved.
    Saved {
        /// Id of the saved zone.
        id: String,
    },
    /// A zone was deleted.
    Deleted,
    /// A delete is waiting for confirmation.
    DeletePending,
    /// The editor refused the intent; state is unchanged.
    Rejected {
        /// Error message.
        reason: String,
        /// Whether it was a form validation block.
        validation: bool,
        /// Whether a well-behaved form would never have sent it.
        guarded: bool,
    },
}

impl Outcome {
    /// Whether the intent was refused.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    fn rejected(err: &Error) -> Self {
        Self::Rejected {
            reason: err.to_string(),
            validation: err.is_validation(),
            guarded: err.is_guarded_precondition(),
        }
    }
}

/// An applied intent and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Position in the script, from zero.
    pub index: usize,
    /// The intent.
    pub intent: Intent,
    /// What happened.
    pub outcome: Outcome,
}

/// Read a JSON array of intents from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid script.
pub fn load_intents(path: impl AsRef<Path>) -> Result<Vec<Intent>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// An editor driven by intents.
#[derive(Debug)]
pub struct Session<S: ZoneSink> {
    editor: ZoneEditor<S>,
    steps: Vec<Step>,
}

impl<S: ZoneSink> Session<S> {
    /// Start a session over `editor`.
    #[must_use]
    pub fn new(editor: ZoneEditor<S>) -> Self {
        Self {
            editor,
            steps: Vec::new(),
        }
    }

    /// The editor as it stands.
    #[must_use]
    pub fn editor(&self) -> &ZoneEditor<S> {
        &self.editor
    }

    /// Steps applied so far.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Apply one intent.
    ///
    /// A refused intent is recorded as [`Outcome::Rejected`]; it never stops
    /// the session.
    pub fn apply(&mut self, intent: Intent) -> &Step {
        let outcome = match self.dispatch(&intent) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(?intent, error = %err, "intent rejected");
                Outcome::rejected(&err)
            }
        };
        debug!(index = self.steps.len(), ?outcome, "step applied");

        let index = self.steps.len();
        self.steps.push(Step {
            index,
            intent,
            outcome,
        });
        &self.steps[index]
    }

    /// Apply every intent in order and return the recorded steps.
    pub fn replay(&mut self, intents: impl IntoIterator<Item = Intent>) -> &[Step] {
        for intent in intents {
            self.apply(intent);
        }
        &self.steps
    }

    /// End the session, returning the editor and the recorded steps.
    pub fn finish(self) -> (ZoneEditor<S>, Vec<Step>) {
        (self.editor, self.steps)
    }

    fn dispatch(&mut self, intent: &Intent) -> Result<Outcome> {
        let editor = &mut self.editor;
        match intent {
            Intent::SwitchTab { tab } => editor.switch_tab(*tab),
            Intent::BeginAdd { tab } => editor.begin_add(*tab)?,
            Intent::SelectForEdit { tab, id } => editor.select_for_edit(*tab, id)?,
            Intent::UpdateDraftField { update } => editor.update_draft_field(update.clone())?,
            Intent::ToggleDay { day } => {
                let selected = editor.toggle_day(*day)?;
                return Ok(Outcome::DayToggled {
                    day: *day,
                    selected,
                });
            }
            Intent::Cancel => editor.cancel(),
            Intent::Commit => {
                let zone = editor.commit()?;
                return Ok(Outcome::Saved { id: zone.id });
            }
            Intent::DeleteZone { id } => {
                return Ok(match editor.delete_zone(id)? {
                    DeleteOutcome::Deleted => Outcome::Deleted,
                    DeleteOutcome::Pending => Outcome::DeletePending,
                });
            }
            Intent::ConfirmDelete => {
                editor.confirm_delete()?;
                return Ok(Outcome::Deleted);
            }
            Intent::DismissDelete => editor.dismiss_delete()?,
        }
        Ok(Outcome::Applied)
    }
}
