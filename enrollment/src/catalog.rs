//! Session catalog: the read-only list of offered class sessions.
//!
//! DESIGN
//! ======
//! Catalog data is created once at startup and never mutated by the
//! enrollment flow. Selecting or submitting does not decrement
//! `spots_left` — the field is display-only demo data.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog session.
pub type SessionId = String;

/// Age bracket a session (or learner) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Children and youth, ages 6–17.
    Child,
    /// Adults, ages 18+.
    Adult,
}

/// Learning track offered by the academy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningLevel {
    /// Starting out with Quran basics.
    Beginner,
    /// Recitation and tajweed for learners past the basics.
    Advanced,
    /// Memorization program.
    Hifz,
}

/// Day of the week a session runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Human-readable day name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// A class session offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier.
    pub id: SessionId,
    /// Display name.
    pub name: String,
    /// Day of the week the session runs on.
    pub day: Day,
    /// Start time (GMT).
    pub start: NaiveTime,
    /// End time (GMT).
    pub end: NaiveTime,
    /// Learning track the session teaches.
    pub level: LearningLevel,
    /// Age bracket the session is aimed at.
    pub age_group: AgeGroup,
    /// Remaining seats. Display-only; never decremented by enrollment.
    pub spots_left: u32,
    /// Short marketing description.
    pub description: String,
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// The built-in sample catalog used by both the client and the server.
#[must_use]
pub fn sample_catalog() -> Vec<Session> {
    vec![
        Session {
            id: "1".to_owned(),
            name: "Beginner Quran — Children".to_owned(),
            day: Day::Monday,
            start: at(14, 0),
            end: at(15, 0),
            level: LearningLevel::Beginner,
            age_group: AgeGroup::Child,
            spots_left: 3,
            description: "First letters, short surahs, and joyful recitation.".to_owned(),
        },
        Session {
            id: "2".to_owned(),
            name: "Advanced Quran Class — Adults".to_owned(),
            day: Day::Wednesday,
            start: at(19, 0),
            end: at(20, 30),
            level: LearningLevel::Advanced,
            age_group: AgeGroup::Adult,
            spots_left: 2,
            description: "Fluency and tajweed refinement with live feedback.".to_owned(),
        },
        Session {
            id: "3".to_owned(),
            name: "Hifz Memorization — Youth".to_owned(),
            day: Day::Friday,
            start: at(16, 0),
            end: at(18, 0),
            level: LearningLevel::Hifz,
            age_group: AgeGroup::Child,
            spots_left: 1,
            description: "Structured memorization with weekly revision circles.".to_owned(),
        },
        Session {
            id: "4".to_owned(),
            name: "Beginner Quran — Adults".to_owned(),
            day: Day::Saturday,
            start: at(10, 0),
            end: at(11, 0),
            level: LearningLevel::Beginner,
            age_group: AgeGroup::Adult,
            spots_left: 5,
            description: "A calm start for adult learners, from the alphabet up.".to_owned(),
        },
    ]
}

/// Strict catalog filter preserving catalog order. `None` matches everything.
#[must_use]
pub fn filter_sessions<'a>(
    catalog: &'a [Session],
    age_group: Option<AgeGroup>,
    level: Option<LearningLevel>,
) -> Vec<&'a Session> {
    catalog
        .iter()
        .filter(|s| age_group.is_none_or(|a| s.age_group == a))
        .filter(|s| level.is_none_or(|l| s.level == l))
        .collect()
}

/// Sessions shown during the signup flow for a given age group and level.
///
/// Falls back to the full catalog when the strict filter matches nothing,
/// so the session step never presents an empty list.
#[must_use]
pub fn visible_sessions<'a>(
    catalog: &'a [Session],
    age_group: AgeGroup,
    level: LearningLevel,
) -> Vec<&'a Session> {
    let filtered = filter_sessions(catalog, Some(age_group), Some(level));
    if filtered.is_empty() {
        catalog.iter().collect()
    } else {
        filtered
    }
}
