//! Where saved and deleted zones go.
//!
//! The editor does not persist anything itself. It reports each committed
//! change to a [`ZoneSink`], which in the dashboard shows a short notice.

use serde::Serialize;
use tracing::info;

use crate::zone::{Zone, ZoneType};

/// Receiver for committed editor changes.
pub trait ZoneSink {
    /// A zone was added or updated.
    fn zone_saved(&mut self, zone: &Zone);

    /// A zone was removed.
    fn zone_deleted(&mut self, zone_type: ZoneType, id: &str);
}

/// A committed change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ZoneEvent {
    /// A zone was added or updated.
    Saved {
        /// The zone as saved.
        zone: Zone,
    },
    /// A zone was removed.
    Deleted {
        /// List the zone was removed from.
        zone_type: ZoneType,
        /// Id of the removed zone.
        id: String,
    },
}

/// Sink that keeps every event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<ZoneEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[ZoneEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ZoneSink for EventLog {
    fn zone_saved(&mut self, zone: &Zone) {
        self.events.push(ZoneEvent::Saved { zone: zone.clone() });
    }

    fn zone_deleted(&mut self, zone_type: ZoneType, id: &str) {
        self.events.push(ZoneEvent::Deleted {
            zone_type,
            id: id.to_string(),
        });
    }
}

/// A short user-facing confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Heading.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
    /// Shown in the destructive style.
    pub destructive: bool,
}

impl Notice {
    /// Notice shown after a save.
    pub const SAVED: Notice = Notice {
        title: "저장 완료",
        description: "구역 정보가 저장되었습니다.",
        destructive: false,
    };

    /// Notice shown after a delete.
    pub const DELETED: Notice = Notice {
        title: "삭제 완료",
        description: "구역이 삭제되었습니다.",
        destructive: true,
    };
}

/// Sink that turns events into notices and logs them.
#[derive(Debug, Clone, Default)]
pub struct NoticeSink {
    notices: Vec<Notice>,
}

impl NoticeSink {
    /// Create a sink with no notices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices raised so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn raise(&mut self, notice: Notice) {
        info!(
            title = notice.title,
            destructive = notice.destructive,
            "{}",
            notice.description
        );
        self.notices.push(notice);
    }
}

impl ZoneSink for NoticeSink {
    fn zone_saved(&mut self, zone: &Zone) {
        info!(zone_type = %zone.zone_type(), id = %zone.id, name = %zone.name, "zone saved");
        self.raise(Notice::SAVED);
    }

    fn zone_deleted(&mut self, zone_type: ZoneType, id: &str) {
        info!(%zone_type, id, "zone deleted");
        self.raise(Notice::DELETED);
    }
}

impl<S: ZoneSink + ?Sized> ZoneSink for &mut S {
    fn zone_saved(&mut self, zone: &Zone) {
        (**self).zone_saved(zone);
    }

    fn zone_deleted(&mut self, zone_type: ZoneType, id: &str) {
        (**self).zone_deleted(zone_type, id);
    }
}
