//! Sample zones the dashboard starts with.

use chrono::NaiveTime;

use crate::zone::{RiskLevel, SafeZoneType, Schedule, Weekday, Zone, ZoneKind};

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("fixture hours are below 24")
}

fn zone(id: &str, name: &str, address: &str, radius: u32, kind: ZoneKind) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        radius,
        schedule: None,
        kind,
    }
}

/// Seeded safe zones: home and kindergarten.
#[must_use]
pub fn safe_zones() -> Vec<Zone> {
    let mut kindergarten = zone(
        "2",
        "유정유치원",
        "경기 파주시 금바위로 35",
        50,
        ZoneKind::Safe(SafeZoneType::School),
    );
    kindergarten.schedule = Some(Schedule {
        days: Weekday::WEEKDAYS.into_iter().collect(),
        start_time: at(9),
        end_time: at(17),
    });

    vec![
        zone(
            "1",
            "우리집",
            "경기도 파주시 가온로 256",
            20,
            ZoneKind::Safe(SafeZoneType::Home),
        ),
        kindergarten,
    ]
}

/// Seeded risk zones: a night-time construction site and a shopping street.
#[must_use]
pub fn risk_zones() -> Vec<Zone> {
    let mut construction = zone(
        "1",
        "사거리 공사장",
        "서울특별시 강남구 역삼동 대로변",
        100,
        ZoneKind::Risk(RiskLevel::High),
    );
    construction.schedule = Some(Schedule {
        days: Weekday::ALL.into_iter().collect(),
        start_time: at(18),
        end_time: at(8),
    });

    vec![
        construction,
        zone(
            "2",
            "상가 밀집 지역",
            "서울특별시 강남구 테헤란로",
            70,
            ZoneKind::Risk(RiskLevel::Normal),
        ),
    ]
}
