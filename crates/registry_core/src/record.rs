//! Procedure record model.
//!
//! This module defines the central [`Procedure`] record (one patient and one
//! valve-implantation procedure) together with the pure derived values
//! hosts render next to it (age, BMI, BSA, procedure duration).
//!
//! Records are deliberately permissive at the type level: every field has a
//! default so that drafts and partially-filled input deserialize cleanly.
//! Enforcement of requiredness, ranges, and cross-field consistency happens
//! in the validation crate, which reports problems as data rather than
//! rejecting the record shape.

use std::sync::OnceLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::value::Numeric;

/// Implanted valve type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValveType {
    /// Balloon-expandable prosthesis
    #[serde(rename = "Balloon Expandable")]
    BalloonExpandable,
    /// Self-expandable prosthesis
    #[serde(rename = "Self Expandable")]
    SelfExpandable,
}

impl ValveType {
    /// Canonical spelling, as persisted and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValveType::BalloonExpandable => "Balloon Expandable",
            ValveType::SelfExpandable => "Self Expandable",
        }
    }
}

impl std::fmt::Display for ValveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ValveType {
    type Err = RegistryError;

    /// Parses the canonical spelling, case-insensitively; the shorthands
    /// `balloon` and `self` are accepted for command-line use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balloon expandable" | "balloon" => Ok(ValveType::BalloonExpandable),
            "self expandable" | "self" => Ok(ValveType::SelfExpandable),
            _ => Err(RegistryError::UnknownValveType(s.to_string())),
        }
    }
}

/// A procedure record: one patient, one implantation.
///
/// Field names match the persisted row layout of the registry. Dates are
/// `YYYY-MM-DD` strings and times `HH:MM` strings; both are validated, not
/// assumed. Numeric measurements use [`Numeric`] so that string-typed input
/// survives deserialization and is judged during validation instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Procedure {
    /// Assigned by the store on first save; absent on drafts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    // Patient
    /// First name
    pub nome: String,
    /// Last name
    pub cognome: String,
    /// Birth date, `YYYY-MM-DD`
    pub data_nascita: String,
    /// Height, cm
    pub altezza: Numeric,
    /// Weight, kg
    pub peso: Numeric,

    // Pre-procedural measurements
    /// Ejection fraction, %
    pub fe: Numeric,
    /// Peak aortic jet velocity, m/s
    pub vmax: Numeric,
    /// Peak gradient, mmHg
    pub gmax: Numeric,
    /// Mean gradient, mmHg
    pub gmed: Numeric,
    /// Aortic valve area, cm²
    pub ava: Numeric,
    /// Aortic annulus diameter, mm
    pub anulus_aortico: Numeric,
    /// Whether a prosthetic valve was already in place
    pub valvola_protesica: bool,
    /// Model of the pre-existing prosthesis; required when `valvola_protesica`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protesica_modello: Option<String>,
    /// Size of the pre-existing prosthesis; required when `valvola_protesica`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protesica_dimensione: Option<String>,
    /// Free-form cardiovascular risk factors, newline-separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fattori_rischio: Option<String>,

    // Procedure
    /// Procedure date, `YYYY-MM-DD`
    pub data_procedura: String,
    /// Start time, `HH:MM`
    pub ora_inizio: String,
    /// End time, `HH:MM`
    pub ora_fine: String,
    /// Implanted valve type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_valvola: Option<ValveType>,
    /// Implanted valve model
    pub modello_valvola: String,
    /// Implanted valve size, mm
    pub dimensione_valvola: Numeric,
    /// Balloon pre-dilatation performed
    pub pre_dilatazione: bool,
    /// Balloon post-dilatation performed
    pub post_dilatazione: bool,

    // Audit trail, owned by the persistence collaborator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Procedure {
    /// Full patient name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nome, self.cognome)
    }

    /// Returns true for records not yet persisted.
    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    /// Patient age in whole years as of today.
    pub fn age(&self) -> Option<i32> {
        self.age_on(Local::now().date_naive())
    }

    /// Patient age in whole years as of a given date.
    ///
    /// Subtracts one year when the birthday has not yet occurred.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        let birth = parse_date(&self.data_nascita)?;

        let mut age = today.year() - birth.year();
        if today.month() < birth.month()
            || (today.month() == birth.month() && today.day() < birth.day())
        {
            age -= 1;
        }

        Some(age)
    }

    /// Body Mass Index, kg/m², rounded to one decimal.
    pub fn bmi(&self) -> Option<f64> {
        let peso = self.peso.as_finite()?;
        let altezza = self.altezza.as_finite()?;
        if altezza <= 0.0 {
            return None;
        }

        let altezza_m = altezza / 100.0;
        Some((peso / (altezza_m * altezza_m) * 10.0).round() / 10.0)
    }

    /// Body Surface Area by the Mosteller formula, m², rounded to two
    /// decimals.
    pub fn bsa(&self) -> Option<f64> {
        let peso = self.peso.as_finite()?;
        let altezza = self.altezza.as_finite()?;
        if altezza <= 0.0 {
            return None;
        }

        Some(((altezza * peso / 3600.0).sqrt() * 100.0).round() / 100.0)
    }

    /// Procedure duration in minutes, when both times parse.
    ///
    /// May be negative on inconsistent persisted data; the write path rejects
    /// such records before they are stored.
    pub fn duration_minutes(&self) -> Option<i64> {
        let start = time_to_minutes(&self.ora_inizio)? as i64;
        let end = time_to_minutes(&self.ora_fine)? as i64;
        Some(end - start)
    }

    /// Looks up a range-constrained numeric field by name.
    ///
    /// Returns `None` for field names without a numeric measurement, which
    /// callers treat as unconstrained.
    pub fn numeric_field(&self, field: &str) -> Option<&Numeric> {
        match field {
            "altezza" => Some(&self.altezza),
            "peso" => Some(&self.peso),
            "fe" => Some(&self.fe),
            "vmax" => Some(&self.vmax),
            "gmax" => Some(&self.gmax),
            "gmed" => Some(&self.gmed),
            "ava" => Some(&self.ava),
            "anulus_aortico" => Some(&self.anulus_aortico),
            "dimensione_valvola" => Some(&self.dimensione_valvola),
            _ => None,
        }
    }

    /// Mutable counterpart of [`numeric_field`](Self::numeric_field), for
    /// hosts that bind form inputs by field name.
    pub fn numeric_field_mut(&mut self, field: &str) -> Option<&mut Numeric> {
        match field {
            "altezza" => Some(&mut self.altezza),
            "peso" => Some(&mut self.peso),
            "fe" => Some(&mut self.fe),
            "vmax" => Some(&mut self.vmax),
            "gmax" => Some(&mut self.gmax),
            "gmed" => Some(&mut self.gmed),
            "ava" => Some(&mut self.ava),
            "anulus_aortico" => Some(&mut self.anulus_aortico),
            "dimensione_valvola" => Some(&mut self.dimensione_valvola),
            _ => None,
        }
    }
}

/// Parses a `YYYY-MM-DD` date, trimming surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Converts an `HH:MM` time to minutes since midnight.
///
/// Accepts a single-digit hour (`9:30`), rejects anything outside
/// 24-hour range. Returns `None` for malformed input, which time-range
/// checks treat as a no-op.
pub fn time_to_minutes(value: &str) -> Option<u32> {
    static TIME_RE: OnceLock<Regex> = OnceLock::new();
    let re = TIME_RE
        .get_or_init(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid time pattern"));

    let caps = re.captures(value.trim())?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Formats a duration in minutes for display: `45 min`, `2h`, `1h 30min`.
pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}min")
    }
}

/// Classifies a BMI value into the WHO weight categories, Italian labels.
///
/// Non-finite input yields the display placeholder `-`.
pub fn bmi_category(bmi: f64) -> &'static str {
    if !bmi.is_finite() {
        return "-";
    }

    if bmi < 18.5 {
        "Sottopeso"
    } else if bmi < 25.0 {
        "Normopeso"
    } else if bmi < 30.0 {
        "Sovrappeso"
    } else if bmi < 35.0 {
        "Obeso classe I"
    } else if bmi < 40.0 {
        "Obeso classe II"
    } else {
        "Obeso classe III"
    }
}
