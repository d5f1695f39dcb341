//! In-progress zone edits.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::zone::{RiskLevel, SafeZoneType, Schedule, Weekday, Zone, ZoneKind, ZoneType, TIME_FORMAT};

/// Editable copy of a zone's fields.
///
/// Times are kept as the raw text the user typed and are only parsed when the
/// draft is turned into a [`Zone`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    /// Zone name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Radius in meters, always within the configured bounds.
    pub radius: u32,
    /// Type tag; fixed while editing an existing zone.
    pub kind: ZoneKind,
    /// Selected schedule days.
    pub days: BTreeSet<Weekday>,
    /// Schedule start, `HH:MM` or empty.
    pub start_time: String,
    /// Schedule end, `HH:MM` or empty.
    pub end_time: String,
}

impl Draft {
    /// Empty draft for a new zone.
    #[must_use]
    pub fn new(zone_type: ZoneType, radius: u32) -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            radius,
            kind: ZoneKind::default_for(zone_type),
            days: BTreeSet::new(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    /// Deep copy of an existing zone.
    #[must_use]
    pub fn from_zone(zone: &Zone) -> Self {
        let (days, start_time, end_time) = match &zone.schedule {
            Some(s) => (
                s.days.clone(),
                s.start_time.format(TIME_FORMAT).to_string(),
                s.end_time.format(TIME_FORMAT).to_string(),
            ),
            None => (BTreeSet::new(), String::new(), String::new()),
        };

        Self {
            name: zone.name.clone(),
            address: zone.address.clone(),
            radius: zone.radius,
            kind: zone.kind,
            days,
            start_time,
            end_time,
        }
    }

    /// The tab this draft belongs to.
    #[must_use]
    pub fn zone_type(&self) -> ZoneType {
        self.kind.zone_type()
    }

    /// Add `day` if absent, remove it if present.
    ///
    /// Returns whether the day is selected afterwards.
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day);
            true
        }
    }

    /// Whether any schedule input has been given.
    #[must_use]
    pub fn has_schedule_input(&self) -> bool {
        !self.days.is_empty()
            || !self.start_time.trim().is_empty()
            || !self.end_time.trim().is_empty()
    }

    /// Parse the schedule fields.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTime`] for a malformed time, [`Error::IncompleteSchedule`]
    /// when times are given without any day.
    pub fn schedule(&self) -> Result<Option<Schedule>> {
        if !self.has_schedule_input() {
            return Ok(None);
        }

        let schedule = Schedule::new(
            self.days.iter().copied(),
            &self.start_time,
            &self.end_time,
        )?;
        if schedule.days.is_empty() {
            return Err(Error::IncompleteSchedule);
        }
        Ok(Some(schedule))
    }

    /// Build the zone this draft describes.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyName`] for a blank name, or any error from
    /// [`Draft::schedule`].
    pub fn to_zone(&self, id: impl Into<String>) -> Result<Zone> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        Ok(Zone {
            id: id.into(),
            name: name.to_string(),
            address: self.address.trim().to_string(),
            radius: self.radius,
            schedule: self.schedule()?,
            kind: self.kind,
        })
    }
}

/// A single-field update sent by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftField {
    /// Zone name.
    Name(String),
    /// Street address.
    Address(String),
    /// Radius in meters. Out-of-range values are clamped or rejected.
    Radius(i64),
    /// Place type of a safe zone.
    SafeZoneType(SafeZoneType),
    /// Severity of a risk zone.
    RiskLevel(RiskLevel),
    /// Schedule start.
    StartTime(String),
    /// Schedule end.
    EndTime(String),
}

/// One optional draft per tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSlots {
    safe: Option<Draft>,
    risk: Option<Draft>,
}

impl DraftSlots {
    /// The draft for `tab`, if any.
    #[must_use]
    pub fn get(&self, tab: ZoneType) -> Option<&Draft> {
        match tab {
            ZoneType::Safe => self.safe.as_ref(),
            ZoneType::Risk => self.risk.as_ref(),
        }
    }

    /// Mutable access to the draft for `tab`.
    pub fn get_mut(&mut self, tab: ZoneType) -> Option<&mut Draft> {
        self.slot(tab).as_mut()
    }

    /// Put `draft` in its tab's slot, replacing what was there.
    pub fn put(&mut self, draft: Draft) {
        let tab = draft.zone_type();
        *self.slot(tab) = Some(draft);
    }

    /// Remove and return the draft for `tab`.
    pub fn take(&mut self, tab: ZoneType) -> Option<Draft> {
        self.slot(tab).take()
    }

    /// Whether no tab has a draft.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.safe.is_none() && self.risk.is_none()
    }

    fn slot(&mut self, tab: ZoneType) -> &mut Option<Draft> {
        match tab {
            ZoneType::Safe => &mut self.safe,
            ZoneType::Risk => &mut self.risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_new_safe_draft() {
        let draft = Draft::new(ZoneType::Safe, 20);
        assert_eq!(draft.kind, ZoneKind::Safe(SafeZoneType::Custom));
        assert_eq!(draft.radius, 20);
        assert!(draft.name.is_empty());
        assert!(draft.days.is_empty());
        assert!(!draft.has_schedule_input());
    }

    #[test]
    fn test_new_risk_draft() {
        let draft = Draft::new(ZoneType::Risk, 50);
        assert_eq!(draft.kind, ZoneKind::Risk(RiskLevel::Normal));
        assert_eq!(draft.zone_type(), ZoneType::Risk);
    }

    #[test]
    fn test_from_zone_copies_schedule() {
        let zone = &fixtures::safe_zones()[1];
        let draft = Draft::from_zone(zone);

        assert_eq!(draft.name, "유정유치원");
        assert_eq!(draft.radius, 50);
        assert_eq!(draft.start_time, "09:00");
        assert_eq!(draft.end_time, "17:00");
        assert_eq!(draft.days.len(), 5);
        assert_eq!(draft.to_zone("2").unwrap(), *zone);
    }

    #[test]
    fn test_toggle_day() {
        let mut draft = Draft::new(ZoneType::Safe, 20);
        assert!(draft.toggle_day(Weekday::Mon));
        assert!(draft.toggle_day(Weekday::Tue));
        assert!(!draft.toggle_day(Weekday::Mon));
        assert_eq!(draft.days.iter().copied().collect::<Vec<_>>(), [Weekday::Tue]);
    }

    #[test]
    fn test_schedule_absent_when_untouched() {
        let draft = Draft::new(ZoneType::Safe, 20);
        assert_eq!(draft.schedule().unwrap(), None);
    }

    #[test]
    fn test_schedule_needs_days() {
        let mut draft = Draft::new(ZoneType::Risk, 50);
        draft.start_time = "18:00".to_string();
        draft.end_time = "08:00".to_string();
        assert!(matches!(draft.schedule(), Err(Error::IncompleteSchedule)));

        draft.toggle_day(Weekday::Sat);
        let schedule = draft.schedule().unwrap().unwrap();
        assert!(schedule.crosses_midnight());
    }

    #[test]
    fn test_schedule_needs_times() {
        let mut draft = Draft::new(ZoneType::Safe, 20);
        draft.toggle_day(Weekday::Mon);
        assert!(matches!(draft.schedule(), Err(Error::InvalidTime { .. })));

        draft.start_time = "9시".to_string();
        draft.end_time = "17:00".to_string();
        assert!(matches!(draft.schedule(), Err(Error::InvalidTime { .. })));
    }

    #[test]
    fn test_to_zone_trims_and_requires_name() {
        let mut draft = Draft::new(ZoneType::Safe, 20);
        draft.name = "   ".to_string();
        assert!(matches!(draft.to_zone("3"), Err(Error::EmptyName)));

        draft.name = " 놀이터 ".to_string();
        draft.address = " 파주 ".to_string();
        let zone = draft.to_zone("3").unwrap();
        assert_eq!(zone.name, "놀이터");
        assert_eq!(zone.address, "파주");
        assert_eq!(zone.id, "3");
    }

    #[test]
    fn test_draft_field_deserialize() {
        let field: DraftField = serde_json::from_str(r#"{"field":"radius","value":35}"#).unwrap();
        assert_eq!(field, DraftField::Radius(35));

        let field: DraftField =
            serde_json::from_str(r#"{"field":"risk_level","value":"high"}"#).unwrap();
        assert_eq!(field, DraftField::RiskLevel(RiskLevel::High));
    }

    #[test]
    fn test_draft_slots() {
        let mut slots = DraftSlots::default();
        assert!(slots.is_empty());

        slots.put(Draft::new(ZoneType::Risk, 50));
        assert!(slots.get(ZoneType::Risk).is_some());
        assert!(slots.get(ZoneType::Safe).is_none());

        slots.get_mut(ZoneType::Risk).unwrap().radius = 70;
        assert_eq!(slots.take(ZoneType::Risk).unwrap().radius, 70);
        assert!(slots.is_empty());
    }
}
