//! Core zone types for lookout.
//!
//! A zone is either a safe zone (where the child is expected to stay) or a
//! risk zone (a hazardous area with a severity). Both share a name, address,
//! radius and an optional weekly schedule.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Format used for schedule times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Which list a zone belongs to. Also the editor tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    /// Safe zones.
    Safe,
    /// Risk zones.
    Risk,
}

impl ZoneType {
    /// Tab title shown to the user.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Safe => "안전 구역",
            Self::Risk => "위험 구역",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Risk => write!(f, "risk"),
        }
    }
}

/// What kind of place a safe zone is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeZoneType {
    /// The child's home.
    Home,
    /// School or kindergarten.
    School,
    /// A playground.
    Playground,
    /// Anything else.
    #[default]
    Custom,
}

impl SafeZoneType {
    /// Label shown on the type picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "집",
            Self::School => "학교",
            Self::Playground => "놀이터",
            Self::Custom => "기타",
        }
    }
}

/// Severity of a risk zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Ordinary risk.
    #[default]
    Normal,
    /// High risk.
    High,
}

impl RiskLevel {
    /// Label shown on risk zone cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "일반 위험",
            Self::High => "고위험",
        }
    }
}

/// The type-specific part of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// A safe zone and its place type.
    Safe(SafeZoneType),
    /// A risk zone and its severity.
    Risk(RiskLevel),
}

impl ZoneKind {
    /// The list this kind belongs to.
    #[must_use]
    pub fn zone_type(self) -> ZoneType {
        match self {
            Self::Safe(_) => ZoneType::Safe,
            Self::Risk(_) => ZoneType::Risk,
        }
    }

    /// Default kind for a freshly added zone of the given type.
    #[must_use]
    pub fn default_for(zone_type: ZoneType) -> Self {
        match zone_type {
            ZoneType::Safe => Self::Safe(SafeZoneType::default()),
            ZoneType::Risk => Self::Risk(RiskLevel::default()),
        }
    }

    /// Card label for this kind.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Safe(t) => t.label(),
            Self::Risk(l) => l.label(),
        }
    }
}

/// Day of the week, labelled in Korean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    #[serde(rename = "월")]
    Mon,
    /// Tuesday.
    #[serde(rename = "화")]
    Tue,
    /// Wednesday.
    #[serde(rename = "수")]
    Wed,
    /// Thursday.
    #[serde(rename = "목")]
    Thu,
    /// Friday.
    #[serde(rename = "금")]
    Fri,
    /// Saturday.
    #[serde(rename = "토")]
    Sat,
    /// Sunday.
    #[serde(rename = "일")]
    Sun,
}

impl Weekday {
    /// All days in calendar order.
    pub const ALL: [Weekday; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Monday through Friday.
    pub const WEEKDAYS: [Weekday; 5] = [Self::Mon, Self::Tue, Self::Wed, Self::Thu, Self::Fri];

    /// The single-character label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mon => "월",
            Self::Tue => "화",
            Self::Wed => "수",
            Self::Thu => "목",
            Self::Fri => "금",
            Self::Sat => "토",
            Self::Sun => "일",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse an `HH:MM` time.
///
/// # Errors
///
/// Returns [`Error::InvalidTime`] if the text is not a valid time.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| Error::invalid_time(value))
}

/// Weekly window during which a zone applies.
///
/// The window may cross midnight, e.g. 18:00-08:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Days the window opens on.
    pub days: BTreeSet<Weekday>,
    /// Window start.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Window end.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl Schedule {
    /// Build a schedule from `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTime`] if either time fails to parse.
    pub fn new(
        days: impl IntoIterator<Item = Weekday>,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self> {
        Ok(Self {
            days: days.into_iter().collect(),
            start_time: parse_time(start_time)?,
            end_time: parse_time(end_time)?,
        })
    }

    /// The time window, e.g. `09:00-17:00`.
    #[must_use]
    pub fn window(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format(TIME_FORMAT),
            self.end_time.format(TIME_FORMAT)
        )
    }

    /// Whether the window wraps past midnight.
    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<&str> = self.days.iter().map(|d| d.label()).collect();
        write!(f, "{} {}", days.join(", "), self.window())
    }
}

/// A named area with a radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Identifier, unique within its zone type.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Radius in meters.
    pub radius: u32,
    /// When the zone applies. `None` means always.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    /// Safe or risk specific data.
    pub kind: ZoneKind,
}

impl Zone {
    /// Which list this zone belongs to.
    #[must_use]
    pub fn zone_type(&self) -> ZoneType {
        self.kind.zone_type()
    }

    /// Radius caption shown on cards.
    #[must_use]
    pub fn radius_caption(&self) -> String {
        format!("반경 {}m", self.radius)
    }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
