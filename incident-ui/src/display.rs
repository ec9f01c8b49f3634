use chrono::{DateTime, NaiveDateTime, Utc};
use incident_client::Incident;

pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCategory {
    Alert,
    Success,
    Info,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityCategory {
    Elevated,
    Caution,
    Mild,
    Neutral,
}

impl StatusCategory {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusCategory::Alert => "badge alert",
            StatusCategory::Success => "badge success",
            StatusCategory::Info => "badge info",
            StatusCategory::Neutral => "badge neutral",
        }
    }
}

impl SeverityCategory {
    pub fn css_class(self) -> &'static str {
        match self {
            SeverityCategory::Elevated => "badge elevated",
            SeverityCategory::Caution => "badge caution",
            SeverityCategory::Mild => "badge mild",
            SeverityCategory::Neutral => "badge neutral",
        }
    }
}

pub fn status_category(status: &str) -> StatusCategory {
    match status.trim().to_lowercase().as_str() {
        "open" => StatusCategory::Alert,
        "resolved" => StatusCategory::Success,
        "in progress" => StatusCategory::Info,
        _ => StatusCategory::Neutral,
    }
}

pub fn severity_category(severity: &str) -> SeverityCategory {
    match severity.trim().to_lowercase().as_str() {
        "critical" | "high" => SeverityCategory::Elevated,
        "medium" => SeverityCategory::Caution,
        "low" => SeverityCategory::Mild,
        _ => SeverityCategory::Neutral,
    }
}

/// Renders a backend timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
/// Timestamps without an offset are read as UTC.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|at| at.and_utc()))
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| INVALID_DATE.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSlot<'a> {
    Attached(&'a str),
    Placeholder,
}

pub fn image_slot(incident: &Incident) -> ImageSlot<'_> {
    incident
        .image_url()
        .map_or(ImageSlot::Placeholder, ImageSlot::Attached)
}
