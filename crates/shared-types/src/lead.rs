use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Field keys
// ---------------------------------------------------------------------------

/// The closed set of fields a signup draft carries.
///
/// Each variant maps to the `name` attribute of its form control and to the
/// key used in the outbound JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Company,
    Email,
    Phone,
    Package,
    Comments,
}

/// All fields in form order.
pub const ALL_FIELDS: &[LeadField] = &[
    LeadField::Name,
    LeadField::Company,
    LeadField::Email,
    LeadField::Phone,
    LeadField::Package,
    LeadField::Comments,
];

impl LeadField {
    /// Wire key shared by the form control and the JSON payload.
    pub fn key(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Company => "company",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Package => "package",
            LeadField::Comments => "comments",
        }
    }

    /// Parse a form control name. Unknown names are rejected.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "name" => Some(LeadField::Name),
            "company" => Some(LeadField::Company),
            "email" => Some(LeadField::Email),
            "phone" => Some(LeadField::Phone),
            "package" => Some(LeadField::Package),
            "comments" => Some(LeadField::Comments),
            _ => None,
        }
    }

    /// Whether the field participates in the validity predicate.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            LeadField::Name | LeadField::Company | LeadField::Email | LeadField::Package
        )
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Package
// ---------------------------------------------------------------------------

/// The plan a lead is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    Trial,
    Basic,
    Medium,
    Large,
}

impl Package {
    pub fn as_str(&self) -> &'static str {
        match self {
            Package::Trial => "trial",
            Package::Basic => "basic",
            Package::Medium => "medium",
            Package::Large => "large",
        }
    }

    /// Parse a select value. Empty or unknown values mean "no plan chosen".
    pub fn from_value(s: &str) -> Option<Self> {
        match s {
            "trial" => Some(Package::Trial),
            "basic" => Some(Package::Basic),
            "medium" => Some(Package::Medium),
            "large" => Some(Package::Large),
            _ => None,
        }
    }
}

/// Options rendered in the plan select, as `(value, label)`.
///
/// The trial entry submits `basic`, same as the start-up plan.
pub const PACKAGE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a Plan... *"),
    ("basic", "Trial Package"),
    ("basic", "Start up (Basic)"),
    ("medium", "Scale up (Medium)"),
    ("large", "Enterprise (large)"),
];

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The in-progress, client-held copy of the signup form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub package: Option<Package>,
    pub comments: String,
}

impl LeadDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a single field. The package field is parsed; anything that is
    /// not a known plan clears it.
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::Company => self.company = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::Package => self.package = Package::from_value(&value),
            LeadField::Comments => self.comments = value,
        }
    }

    /// Read a field back as the string a form control displays.
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Company => &self.company,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Package => self.package.as_ref().map(Package::as_str).unwrap_or(""),
            LeadField::Comments => &self.comments,
        }
    }

    /// Presence check over the four required fields.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.company.is_empty()
            && !self.email.is_empty()
            && self.package.is_some()
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<LeadField> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    /// Stamp the draft with `at` and produce the outbound payload.
    ///
    /// Returns `None` when the draft is not submittable.
    pub fn seal(&self, at: DateTime<Utc>) -> Option<LeadPayload> {
        let package = self.package.filter(|_| self.is_valid())?;
        Some(LeadPayload {
            name: self.name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            package: package.as_str().to_string(),
            comments: self.comments.clone(),
            date_time: iso_timestamp(at),
        })
    }
}

/// Format a timestamp the way browsers render `Date.toISOString()`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// JSON body posted to the form-ingestion endpoint. Every value is a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadPayload {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub package: String,
    pub comments: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
}
