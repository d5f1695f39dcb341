//! `lookout` - safe-zone and risk-zone editor for a child-safety dashboard
//!
//! This library holds the editable state behind the zone screen: which tab is
//! shown, whether a zone is being added or edited, the per-tab drafts and the
//! zone lists. Saves and deletes are reported to a [`ZoneSink`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod session;
pub mod zone;

pub use config::{Config, RadiusPolicy};
pub use editor::{Draft, DraftField, EditorMode, EventLog, ZoneEditor, ZoneEvent, ZoneSink};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::{Intent, Outcome, Session};
pub use zone::{RiskLevel, SafeZoneType, Schedule, Weekday, Zone, ZoneKind, ZoneType};
