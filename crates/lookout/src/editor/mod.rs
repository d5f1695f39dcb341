//! Zone editor state controller.
//!
//! [`ZoneEditor`] owns everything the zone screen can change: the active tab,
//! the add/edit mode, one draft per tab and the zone lists. The rendering
//! layer reads from it and forwards user intents to its methods.
//!
//! Every method either applies fully or returns an [`Error`] and leaves the
//! editor exactly as it was.
//!
//! # Example
//!
//! ```
//! use lookout::editor::{DraftField, EditorMode, EventLog, ZoneEditor};
//! use lookout::{Config, ZoneType};
//!
//! let mut editor = ZoneEditor::new(Config::default(), EventLog::new());
//! editor.begin_add(ZoneType::Safe)?;
//! editor.update_draft_field(DraftField::Name("놀이터".into()))?;
//! editor.update_draft_field(DraftField::Radius(35))?;
//! let saved = editor.commit()?;
//!
//! assert_eq!(saved.radius, 35);
//! assert_eq!(*editor.mode(), EditorMode::Idle);
//! assert_eq!(editor.sink().len(), 1);
//! # Ok::<(), lookout::Error>(())
//! ```

mod draft;
mod sink;

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, warn};

pub use draft::{Draft, DraftField, DraftSlots};
pub use sink::{EventLog, Notice, NoticeSink, ZoneEvent, ZoneSink};

use crate::config::{Config, RadiusPolicy};
use crate::error::{Error, Result};
use crate::fixtures;
use crate::zone::{Weekday, Zone, ZoneKind, ZoneType};

/// What the editor is doing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    /// Nothing open.
    #[default]
    Idle,
    /// A new zone of this type is being drafted.
    Adding(ZoneType),
    /// An existing zone is being edited.
    Editing {
        /// Id of the zone.
        id: String,
        /// List the zone lives in.
        zone_type: ZoneType,
    },
}

impl EditorMode {
    /// The tab whose draft is open, if any.
    #[must_use]
    pub fn zone_type(&self) -> Option<ZoneType> {
        match self {
            Self::Idle => None,
            Self::Adding(zone_type) | Self::Editing { zone_type, .. } => Some(*zone_type),
        }
    }

    /// Id of the zone being edited.
    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Self::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Whether nothing is open.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The zone is gone.
    Deleted,
    /// Waiting for [`ZoneEditor::confirm_delete`].
    Pending,
}

/// A deletion waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDelete {
    /// List the zone lives in.
    pub zone_type: ZoneType,
    /// Id of the zone.
    pub id: String,
}

/// Controller for the safe/risk zone screen.
#[derive(Debug)]
pub struct ZoneEditor<S = EventLog> {
    config: Config,
    active_tab: ZoneType,
    mode: EditorMode,
    drafts: DraftSlots,
    safe_zones: Vec<Zone>,
    risk_zones: Vec<Zone>,
    pending_delete: Option<PendingDelete>,
    sink: S,
}

impl<S: ZoneSink> ZoneEditor<S> {
    /// Create an editor seeded with the sample zones.
    #[must_use]
    pub fn new(config: Config, sink: S) -> Self {
        let zones = fixtures::safe_zones()
            .into_iter()
            .chain(fixtures::risk_zones());
        Self::with_zones(config, zones, sink)
    }

    /// Create an editor over the given zones.
    ///
    /// Zones are sorted into their lists by type, keeping their order. A radius
    /// outside the configured bounds is clamped.
    #[must_use]
    pub fn with_zones(config: Config, zones: impl IntoIterator<Item = Zone>, sink: S) -> Self {
        let bounds = &config.radius;
        let (safe_zones, risk_zones) = zones
            .into_iter()
            .map(|mut zone| {
                let radius = bounds.clamp(i64::from(zone.radius));
                if radius != zone.radius {
                    warn!(id = %zone.id, from = zone.radius, to = radius, "seeded radius clamped");
                    zone.radius = radius;
                }
                zone
            })
            .partition(|z: &Zone| z.zone_type() == ZoneType::Safe);

        Self {
            config,
            active_tab: ZoneType::Safe,
            mode: EditorMode::Idle,
            drafts: DraftSlots::default(),
            safe_zones,
            risk_zones,
            pending_delete: None,
            sink,
        }
    }

    /// The tab being shown.
    #[must_use]
    pub fn active_tab(&self) -> ZoneType {
        self.active_tab
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// The draft held for `tab`.
    #[must_use]
    pub fn draft(&self, tab: ZoneType) -> Option<&Draft> {
        self.drafts.get(tab)
    }

    /// The draft of the zone being added or edited.
    #[must_use]
    pub fn active_draft(&self) -> Option<&Draft> {
        self.mode.zone_type().and_then(|t| self.drafts.get(t))
    }

    /// Zones in the `tab` list.
    #[must_use]
    pub fn zones(&self, tab: ZoneType) -> &[Zone] {
        match tab {
            ZoneType::Safe => &self.safe_zones,
            ZoneType::Risk => &self.risk_zones,
        }
    }

    /// Look up a zone by id.
    #[must_use]
    pub fn zone(&self, tab: ZoneType, id: &str) -> Option<&Zone> {
        self.zones(tab).iter().find(|z| z.id == id)
    }

    /// Radius to draw on the map preview.
    #[must_use]
    pub fn preview_radius(&self) -> u32 {
        self.active_draft()
            .map_or(self.config.editor.preview_fallback_radius, |d| d.radius)
    }

    /// Deletion awaiting confirmation.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// The outbound sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the editor and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Show another tab. Open drafts are left alone.
    pub fn switch_tab(&mut self, tab: ZoneType) {
        if self.active_tab != tab {
            debug!(from = %self.active_tab, to = %tab, "switching tab");
            self.active_tab = tab;
        }
    }

    /// Start drafting a new zone of type `tab`.
    ///
    /// An open edit is cancelled first.
    ///
    /// # Errors
    ///
    /// [`Error::DraftInProgress`] if a new zone is already being drafted.
    pub fn begin_add(&mut self, tab: ZoneType) -> Result<()> {
        if let EditorMode::Adding(open) = self.mode {
            return Err(Error::DraftInProgress(open));
        }

        self.close_draft();
        let radius = self.config.radius.default_for(tab);
        self.drafts.put(Draft::new(tab, radius));
        self.mode = EditorMode::Adding(tab);
        self.active_tab = tab;
        debug!(zone_type = %tab, radius, "adding zone");
        Ok(())
    }

    /// Open an existing zone for editing.
    ///
    /// The zone is copied into the draft, so later field updates start from
    /// its saved values. An open add or edit is cancelled first.
    ///
    /// # Errors
    ///
    /// [`Error::ZoneNotFound`] if there is no such zone.
    pub fn select_for_edit(&mut self, tab: ZoneType, id: &str) -> Result<()> {
        let draft = self
            .zone(tab, id)
            .map(Draft::from_zone)
            .ok_or_else(|| Error::zone_not_found(tab, id))?;

        self.close_draft();
        self.drafts.put(draft);
        self.mode = EditorMode::Editing {
            id: id.to_string(),
            zone_type: tab,
        };
        self.active_tab = tab;
        debug!(zone_type = %tab, id, "editing zone");
        Ok(())
    }

    /// Set one field on the open draft.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveDraft`] when idle.
    /// - [`Error::OutOfRangeRadius`] under [`RadiusPolicy::Reject`].
    /// - [`Error::KindMismatch`] for a field of the other zone type.
    /// - [`Error::ImmutableKind`] when changing the type of an existing zone.
    pub fn update_draft_field(&mut self, field: DraftField) -> Result<()> {
        let editing = matches!(self.mode, EditorMode::Editing { .. });
        let radius_config = &self.config.radius;
        let policy = self.config.editor.radius_policy;
        let draft = self
            .mode
            .zone_type()
            .and_then(|t| self.drafts.get_mut(t))
            .ok_or(Error::NoActiveDraft)?;

        match field {
            DraftField::Name(name) => draft.name = name,
            DraftField::Address(address) => draft.address = address,
            DraftField::Radius(value) => {
                if !radius_config.contains(value) && policy == RadiusPolicy::Reject {
                    return Err(Error::OutOfRangeRadius {
                        value,
                        min: radius_config.min,
                        max: radius_config.max,
                    });
                }
                draft.radius = radius_config.clamp(value);
            }
            DraftField::SafeZoneType(kind) => {
                set_kind(draft, ZoneKind::Safe(kind), editing)?;
            }
            DraftField::RiskLevel(level) => {
                set_kind(draft, ZoneKind::Risk(level), editing)?;
            }
            DraftField::StartTime(time) => draft.start_time = time,
            DraftField::EndTime(time) => draft.end_time = time,
        }
        Ok(())
    }

    /// Toggle `day` in the open draft's schedule.
    ///
    /// Returns whether the day is selected afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::NoActiveDraft`] when idle.
    pub fn toggle_day(&mut self, day: Weekday) -> Result<bool> {
        let draft = self
            .mode
            .zone_type()
            .and_then(|t| self.drafts.get_mut(t))
            .ok_or(Error::NoActiveDraft)?;
        Ok(draft.toggle_day(day))
    }

    /// Drop the open draft without saving.
    pub fn cancel(&mut self) {
        if !self.mode.is_idle() {
            debug!(mode = ?self.mode, "cancelled");
        }
        self.close_draft();
    }

    /// Save the open draft into its zone list and report it to the sink.
    ///
    /// New zones get the next free numeric id; edited zones keep their id and
    /// position.
    ///
    /// # Errors
    ///
    /// [`Error::NoActiveDraft`] when idle, or a validation error from
    /// [`Draft::to_zone`]. The draft stays open on error.
    pub fn commit(&mut self) -> Result<Zone> {
        let zone_type = self.mode.zone_type().ok_or(Error::NoActiveDraft)?;
        let editing_id = self.mode.editing_id().map(str::to_owned);
        let draft = self.drafts.get(zone_type).ok_or(Error::NoActiveDraft)?;

        let id = editing_id
            .clone()
            .unwrap_or_else(|| next_id(self.zones(zone_type)));
        let zone = draft.to_zone(id)?;

        if editing_id.is_some() {
            let slot = self
                .zones_mut(zone_type)
                .iter_mut()
                .find(|z| z.id == zone.id)
                .ok_or_else(|| Error::zone_not_found(zone_type, zone.id.as_str()))?;
            *slot = zone.clone();
        } else {
            self.zones_mut(zone_type).push(zone.clone());
        }

        self.close_draft();
        info!(%zone_type, id = %zone.id, name = %zone.name, radius = zone.radius, "zone committed");
        self.sink.zone_saved(&zone);
        Ok(zone)
    }

    /// Delete zone `id` from the active tab's list.
    ///
    /// With `confirm_deletes` enabled this only stages the deletion. Deleting
    /// the zone that is open for editing cancels the edit.
    ///
    /// # Errors
    ///
    /// [`Error::ZoneNotFound`] if there is no such zone.
    pub fn delete_zone(&mut self, id: &str) -> Result<DeleteOutcome> {
        let zone_type = self.active_tab;
        if self.zone(zone_type, id).is_none() {
            return Err(Error::zone_not_found(zone_type, id));
        }

        if self.config.editor.confirm_deletes {
            debug!(%zone_type, id, "delete awaiting confirmation");
            self.pending_delete = Some(PendingDelete {
                zone_type,
                id: id.to_string(),
            });
            return Ok(DeleteOutcome::Pending);
        }

        self.remove_zone(zone_type, id);
        Ok(DeleteOutcome::Deleted)
    }

    /// Carry out the staged deletion.
    ///
    /// # Errors
    ///
    /// [`Error::NoPendingDelete`] if nothing is staged, or
    /// [`Error::ZoneNotFound`] if the zone vanished meanwhile.
    pub fn confirm_delete(&mut self) -> Result<()> {
        let pending = self.pending_delete.as_ref().ok_or(Error::NoPendingDelete)?;
        if self.zone(pending.zone_type, &pending.id).is_none() {
            return Err(Error::zone_not_found(pending.zone_type, pending.id.as_str()));
        }
        if let Some(pending) = self.pending_delete.take() {
            self.remove_zone(pending.zone_type, &pending.id);
        }
        Ok(())
    }

    /// Drop the staged deletion.
    ///
    /// # Errors
    ///
    /// [`Error::NoPendingDelete`] if nothing is staged.
    pub fn dismiss_delete(&mut self) -> Result<()> {
        let pending = self.pending_delete.take().ok_or(Error::NoPendingDelete)?;
        debug!(zone_type = %pending.zone_type, id = %pending.id, "delete dismissed");
        Ok(())
    }

    fn remove_zone(&mut self, zone_type: ZoneType, id: &str) {
        if self.mode.editing_id() == Some(id) && self.mode.zone_type() == Some(zone_type) {
            self.close_draft();
        }
        self.zones_mut(zone_type).retain(|z| z.id != id);
        info!(%zone_type, id, "zone deleted");
        self.sink.zone_deleted(zone_type, id);
    }

    fn close_draft(&mut self) {
        if let Some(zone_type) = self.mode.zone_type() {
            self.drafts.take(zone_type);
        }
        self.mode = EditorMode::Idle;
    }

    fn zones_mut(&mut self, tab: ZoneType) -> &mut Vec<Zone> {
        match tab {
            ZoneType::Safe => &mut self.safe_zones,
            ZoneType::Risk => &mut self.risk_zones,
        }
    }
}

fn set_kind(draft: &mut Draft, kind: ZoneKind, editing: bool) -> Result<()> {
    if kind.zone_type() != draft.zone_type() {
        return Err(Error::KindMismatch {
            zone_type: draft.zone_type(),
        });
    }
    if editing && kind != draft.kind {
        return Err(Error::ImmutableKind);
    }
    draft.kind = kind;
    Ok(())
}

/// One more than the largest numeric id in `zones`.
///
/// When that would overflow, the smallest unused positive id is taken instead.
fn next_id(zones: &[Zone]) -> String {
    let taken: BTreeSet<u64> = zones.iter().filter_map(|z| z.id.parse().ok()).collect();
    let max = taken.last().copied().unwrap_or(0);
    let next = max
        .checked_add(1)
        .or_else(|| (1..).find(|n| !taken.contains(n)))
        .unwrap_or(max);
    next.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::zone::{RiskLevel, SafeZoneType};

    fn editor() -> ZoneEditor {
        ZoneEditor::new(Config::default(), EventLog::new())
    }

    fn confirming_editor() -> ZoneEditor {
        let mut config = Config::default();
        config.editor.confirm_deletes = true;
        ZoneEditor::new(config, EventLog::new())
    }

    #[test]
    fn test_new_editor_is_idle() {
        let editor = editor();
        assert_eq!(editor.active_tab(), ZoneType::Safe);
        assert!(editor.mode().is_idle());
        assert!(editor.active_draft().is_none());
        assert_eq!(editor.zones(ZoneType::Safe).len(), 2);
        assert_eq!(editor.zones(ZoneType::Risk).len(), 2);
        assert_eq!(editor.preview_radius(), 15);
    }

    #[test]
    fn test_begin_add_defaults() {
        let mut editor = editor();

        editor.begin_add(ZoneType::Safe).unwrap();
        assert_eq!(*editor.mode(), EditorMode::Adding(ZoneType::Safe));
        assert_eq!(editor.active_draft(), Some(&Draft::new(ZoneType::Safe, 20)));
        editor.cancel();

        editor.begin_add(ZoneType::Risk).unwrap();
        let draft = editor.active_draft().unwrap();
        assert_eq!(draft.radius, 50);
        assert_eq!(draft.kind, ZoneKind::Risk(RiskLevel::Normal));
        assert_eq!(editor.active_tab(), ZoneType::Risk);
    }

    #[test]
    fn test_begin_add_twice_is_rejected() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();
        editor
            .update_draft_field(DraftField::Name("공원".into()))
            .unwrap();

        let err = editor.begin_add(ZoneType::Safe).unwrap_err();
        assert!(matches!(err, Error::DraftInProgress(ZoneType::Safe)));
        assert!(err.is_guarded_precondition());
        assert_eq!(editor.active_draft().unwrap().name, "공원");
    }

    #[test]
    fn test_begin_add_cancels_edit() {
        let mut editor = editor();
        editor.select_for_edit(ZoneType::Safe, "1").unwrap();
        editor.begin_add(ZoneType::Safe).unwrap();

        assert_eq!(*editor.mode(), EditorMode::Adding(ZoneType::Safe));
        assert!(editor.active_draft().unwrap().name.is_empty());
    }

    #[test]
    fn test_select_for_edit_copies_zone() {
        let mut editor = editor();
        editor.select_for_edit(ZoneType::Risk, "1").unwrap();

        assert_eq!(editor.mode().editing_id(), Some("1"));
        assert_eq!(editor.mode().zone_type(), Some(ZoneType::Risk));
        let draft = editor.active_draft().unwrap();
        assert_eq!(draft.name, "사거리 공사장");
        assert_eq!(draft.radius, 100);
        assert_eq!(draft.start_time, "18:00");
        assert_eq!(editor.preview_radius(), 100);
    }

    #[test]
    fn test_select_for_edit_cancels_add() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Risk).unwrap();
        editor.select_for_edit(ZoneType::Safe, "2").unwrap();

        assert!(editor.draft(ZoneType::Risk).is_none());
        assert_eq!(editor.draft(ZoneType::Safe).unwrap().name, "유정유치원");
    }

    #[test]
    fn test_select_unknown_zone() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();

        let err = editor.select_for_edit(ZoneType::Safe, "42").unwrap_err();
        assert!(matches!(err, Error::ZoneNotFound { .. }));
        assert_eq!(*editor.mode(), EditorMode::Adding(ZoneType::Safe));
    }

    #[test]
    fn test_switch_tab_keeps_draft() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();
        editor.switch_tab(ZoneType::Risk);

        assert_eq!(editor.active_tab(), ZoneType::Risk);
        assert_eq!(*editor.mode(), EditorMode::Adding(ZoneType::Safe));
        assert!(editor.draft(ZoneType::Safe).is_some());

        editor.update_draft_field(DraftField::Radius(60)).unwrap();
        assert_eq!(editor.draft(ZoneType::Safe).unwrap().radius, 60);
    }

    #[test]
    fn test_update_requires_draft() {
        let mut editor = editor();
        let err = editor
            .update_draft_field(DraftField::Name("x".into()))
            .unwrap_err();
        assert!(matches!(err, Error::NoActiveDraft));
        assert!(matches!(
            editor.toggle_day(Weekday::Mon),
            Err(Error::NoActiveDraft)
        ));
    }

    #[test]
    fn test_radius_clamped() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();

        editor.update_draft_field(DraftField::Radius(5)).unwrap();
        assert_eq!(editor.active_draft().unwrap().radius, 10);
        editor.update_draft_field(DraftField::Radius(900)).unwrap();
        assert_eq!(editor.active_draft().unwrap().radius, 500);
    }

    #[test]
    fn test_radius_rejected_under_reject_policy() {
        let mut config = Config::default();
        config.editor.radius_policy = RadiusPolicy::Reject;
        let mut editor = ZoneEditor::new(config, EventLog::new());
        editor.begin_add(ZoneType::Risk).unwrap();

        let err = editor
            .update_draft_field(DraftField::Radius(501))
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRangeRadius { value: 501, .. }));
        assert_eq!(editor.active_draft().unwrap().radius, 50);
    }

    #[test]
    fn test_kind_rules() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();
        editor
            .update_draft_field(DraftField::SafeZoneType(SafeZoneType::Playground))
            .unwrap();
        assert_eq!(
            editor.active_draft().unwrap().kind,
            ZoneKind::Safe(SafeZoneType::Playground)
        );

        let err = editor
            .update_draft_field(DraftField::RiskLevel(RiskLevel::High))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::KindMismatch {
                zone_type: ZoneType::Safe
            }
        ));

        editor.select_for_edit(ZoneType::Risk, "2").unwrap();
        let err = editor
            .update_draft_field(DraftField::RiskLevel(RiskLevel::High))
            .unwrap_err();
        assert!(matches!(err, Error::ImmutableKind));
        editor
            .update_draft_field(DraftField::RiskLevel(RiskLevel::Normal))
            .unwrap();
    }

    #[test]
    fn test_commit_new_zone_appends() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Risk).unwrap();
        editor
            .update_draft_field(DraftField::Name("공사장".into()))
            .unwrap();
        editor.toggle_day(Weekday::Sat).unwrap();
        editor
            .update_draft_field(DraftField::StartTime("20:00".into()))
            .unwrap();
        editor
            .update_draft_field(DraftField::EndTime("06:00".into()))
            .unwrap();

        let zone = editor.commit().unwrap();
        assert_eq!(zone.id, "3");
        assert!(editor.mode().is_idle());
        assert!(editor.draft(ZoneType::Risk).is_none());
        assert_eq!(editor.zones(ZoneType::Risk).len(), 3);
        assert_eq!(editor.zone(ZoneType::Risk, "3"), Some(&zone));
        assert_eq!(editor.sink().events(), [ZoneEvent::Saved { zone }]);
    }

    #[test]
    fn test_commit_edit_replaces_in_place() {
        let mut editor = editor();
        editor.select_for_edit(ZoneType::Safe, "1").unwrap();
        editor.update_draft_field(DraftField::Radius(80)).unwrap();
        editor.commit().unwrap();

        let zones = editor.zones(ZoneType::Safe);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, "1");
        assert_eq!(zones[0].radius, 80);
        assert_eq!(zones[0].name, "우리집");
    }

    #[test]
    fn test_commit_rejects_empty_name() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();

        assert!(matches!(editor.commit(), Err(Error::EmptyName)));
        assert_eq!(*editor.mode(), EditorMode::Adding(ZoneType::Safe));
        assert!(editor.sink().is_empty());
        assert_eq!(editor.zones(ZoneType::Safe).len(), 2);
    }

    #[test]
    fn test_commit_rejects_bad_schedule() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();
        editor
            .update_draft_field(DraftField::Name("학원".into()))
            .unwrap();
        editor.toggle_day(Weekday::Mon).unwrap();

        assert!(matches!(editor.commit(), Err(Error::InvalidTime { .. })));
        assert!(!editor.mode().is_idle());
    }

    #[test]
    fn test_commit_when_idle() {
        let mut editor = editor();
        assert!(matches!(editor.commit(), Err(Error::NoActiveDraft)));
    }

    #[test]
    fn test_delete_zone() {
        let mut editor = editor();
        let untouched = editor.zone(ZoneType::Safe, "1").cloned();

        assert_eq!(editor.delete_zone("2").unwrap(), DeleteOutcome::Deleted);
        assert_eq!(editor.zones(ZoneType::Safe).len(), 1);
        assert_eq!(editor.zone(ZoneType::Safe, "1").cloned(), untouched);
        assert_eq!(editor.zones(ZoneType::Risk).len(), 2);
        assert_eq!(
            editor.sink().events(),
            [ZoneEvent::Deleted {
                zone_type: ZoneType::Safe,
                id: "2".to_string()
            }]
        );
    }

    #[test]
    fn test_delete_unknown_zone() {
        let mut editor = editor();
        assert!(matches!(
            editor.delete_zone("9"),
            Err(Error::ZoneNotFound { .. })
        ));
        assert!(editor.sink().is_empty());
    }

    #[test]
    fn test_delete_edited_zone_cancels_edit() {
        let mut editor = editor();
        editor.select_for_edit(ZoneType::Safe, "2").unwrap();
        editor.delete_zone("2").unwrap();

        assert!(editor.mode().is_idle());
        assert!(editor.draft(ZoneType::Safe).is_none());
    }

    #[test]
    fn test_delete_other_zone_keeps_edit() {
        let mut editor = editor();
        editor.select_for_edit(ZoneType::Safe, "1").unwrap();
        editor.delete_zone("2").unwrap();

        assert_eq!(editor.mode().editing_id(), Some("1"));
    }

    #[test]
    fn test_confirmed_delete() {
        let mut editor = confirming_editor();
        editor.switch_tab(ZoneType::Risk);

        assert_eq!(editor.delete_zone("1").unwrap(), DeleteOutcome::Pending);
        assert_eq!(editor.zones(ZoneType::Risk).len(), 2);
        assert!(editor.sink().is_empty());
        assert_eq!(editor.pending_delete().unwrap().id, "1");

        editor.confirm_delete().unwrap();
        assert_eq!(editor.zones(ZoneType::Risk).len(), 1);
        assert_eq!(editor.sink().len(), 1);
        assert!(editor.pending_delete().is_none());
    }

    #[test]
    fn test_dismissed_delete() {
        let mut editor = confirming_editor();
        editor.delete_zone("1").unwrap();
        editor.dismiss_delete().unwrap();

        assert_eq!(editor.zones(ZoneType::Safe).len(), 2);
        assert!(editor.sink().is_empty());
        assert!(matches!(
            editor.confirm_delete(),
            Err(Error::NoPendingDelete)
        ));
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), "1");
        let mut zones = fixtures::safe_zones();
        assert_eq!(next_id(&zones), "3");
        zones[0].id = "home".to_string();
        assert_eq!(next_id(&zones), "3");
    }

    #[test]
    fn test_next_id_at_numeric_limit() {
        let mut zones = fixtures::safe_zones();
        zones[1].id = u64::MAX.to_string();
        assert_eq!(next_id(&zones), "2");

        zones[0].id = "2".to_string();
        zones.push(zones[0].clone());
        zones[2].id = "1".to_string();
        assert_eq!(next_id(&zones), "3");
    }

    #[test]
    fn test_commit_after_max_id() {
        let mut zones = fixtures::safe_zones();
        zones[0].id = u64::MAX.to_string();
        let mut editor = ZoneEditor::with_zones(Config::default(), zones, EventLog::new());

        editor.begin_add(ZoneType::Safe).unwrap();
        editor
            .update_draft_field(DraftField::Name("도서관".into()))
            .unwrap();
        let zone = editor.commit().unwrap();

        assert_eq!(zone.id, "1");
        assert_eq!(editor.zones(ZoneType::Safe).len(), 3);
    }

    #[test]
    fn test_begin_add_other_tab_while_adding() {
        let mut editor = editor();
        editor.begin_add(ZoneType::Safe).unwrap();

        let err = editor.begin_add(ZoneType::Risk).unwrap_err();
        assert!(matches!(err, Error::DraftInProgress(ZoneType::Safe)));
        assert_eq!(*editor.mode(), EditorMode::Adding(ZoneType::Safe));
        assert_eq!(editor.active_tab(), ZoneType::Safe);
        assert!(editor.draft(ZoneType::Risk).is_none());
    }

    #[test]
    fn test_seeded_radius_clamped() {
        let mut zones = fixtures::safe_zones();
        zones[0].radius = 5000;
        zones[1].radius = 1;
        let mut editor = ZoneEditor::with_zones(Config::default(), zones, EventLog::new());

        assert_eq!(editor.zone(ZoneType::Safe, "1").unwrap().radius, 500);
        assert_eq!(editor.zone(ZoneType::Safe, "2").unwrap().radius, 10);

        editor.select_for_edit(ZoneType::Safe, "1").unwrap();
        assert_eq!(editor.active_draft().unwrap().radius, 500);
        assert_eq!(editor.commit().unwrap().radius, 500);
    }

    #[test]
    fn test_with_zones_partitions_by_type() {
        let zones = fixtures::risk_zones()
            .into_iter()
            .chain(fixtures::safe_zones());
        let editor = ZoneEditor::with_zones(Config::default(), zones, EventLog::new());

        assert_eq!(editor.zones(ZoneType::Safe)[0].name, "우리집");
        assert_eq!(editor.zones(ZoneType::Risk)[0].name, "사거리 공사장");
    }

    #[test]
    fn test_notice_sink_editor() {
        let mut editor = ZoneEditor::new(Config::default(), NoticeSink::new());
        editor.delete_zone("1").unwrap();
        assert_eq!(editor.into_sink().notices(), [Notice::DELETED]);
    }
}
