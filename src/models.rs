//! Frontend Models
//!
//! Data structures matching the complaint API.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Authenticated user as returned by login/register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Complaint lifecycle status
///
/// Unrecognized values are kept so they can render as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
    Unknown(String),
}

impl ComplaintStatus {
    /// The four statuses an admin can pick
    pub const ALL: [ComplaintStatus; 4] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Rejected,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Rejected => "rejected",
            ComplaintStatus::Unknown(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => ComplaintStatus::Pending,
            "in_progress" => ComplaintStatus::InProgress,
            "resolved" => ComplaintStatus::Resolved,
            "rejected" => ComplaintStatus::Rejected,
            other => ComplaintStatus::Unknown(other.to_string()),
        }
    }

    /// Parse a filter select value; empty means "all"
    pub fn from_filter(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self::from_str(value))
        }
    }
}

/// Complaint category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Technical,
    Billing,
    Service,
    Product,
    Other,
    Unknown(String),
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technical,
        Category::Billing,
        Category::Service,
        Category::Product,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Technical => "technical",
            Category::Billing => "billing",
            Category::Service => "service",
            Category::Product => "product",
            Category::Other => "other",
            Category::Unknown(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "technical" => Category::Technical,
            "billing" => Category::Billing,
            "service" => Category::Service,
            "product" => Category::Product,
            "other" => Category::Other,
            other => Category::Unknown(other.to_string()),
        }
    }
}

macro_rules! string_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        // Null or non-string values decode as Unknown("") instead of failing
        // the whole list
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
                    Some(serde_json::Value::String(raw)) => $ty::from_str(&raw),
                    _ => $ty::Unknown(String::new()),
                })
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                $ty::Unknown(String::new())
            }
        }
    };
}

string_serde!(ComplaintStatus);
string_serde!(Category);

/// Server timestamp. The API emits naive UTC (`2024-03-01T10:00:00.123456`);
/// RFC 3339 values with an offset are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| Self(naive.and_utc()))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// Complaint record (matches backend). `user_name`/`user_email` are only
/// present in the admin listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(default)]
    pub screenshot_path: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

/// Admin's edited record for one complaint; status and notes travel together
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComplaintEdit {
    pub status: ComplaintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl ComplaintEdit {
    pub fn from_complaint(complaint: &Complaint) -> Self {
        Self {
            status: complaint.status.clone(),
            admin_notes: complaint.admin_notes.clone(),
        }
    }

    /// Notes exactly as typed in the textarea, blank included
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.admin_notes = Some(notes.to_string());
        self
    }

    pub fn with_status(mut self, status: ComplaintStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_strings() {
        for status in ComplaintStatus::ALL {
            assert_eq!(ComplaintStatus::from_str(status.as_str()), status);
        }
        assert_eq!(
            ComplaintStatus::from_str("escalated"),
            ComplaintStatus::Unknown("escalated".to_string())
        );
        assert_eq!(ComplaintStatus::from_filter(""), None);
        assert_eq!(
            ComplaintStatus::from_filter("resolved"),
            Some(ComplaintStatus::Resolved)
        );
    }

    #[test]
    fn test_complaint_deserializes_server_payload() {
        let raw = r#"{
            "id": 7,
            "title": "Login broken",
            "description": "Cannot log in",
            "category": "technical",
            "status": "weird",
            "screenshot_path": "static/uploads/a.png",
            "created_at": "2024-03-01T10:00:00.123456",
            "updated_at": "2024-03-02T11:30:00",
            "user_name": "Ann",
            "user_email": "ann@example.com"
        }"#;
        let complaint: Complaint = serde_json::from_str(raw).unwrap();
        assert_eq!(complaint.category, Category::Technical);
        assert_eq!(complaint.status, ComplaintStatus::Unknown("weird".to_string()));
        assert_eq!(complaint.admin_notes, None);
        assert_eq!(
            complaint.created_at.0.format("%Y-%m-%d %H:%M").to_string(),
            "2024-03-01 10:00"
        );
        assert_eq!(complaint.user_name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_timestamp_accepts_offsets() {
        let ts = Timestamp::parse("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(ts.0.format("%H:%M").to_string(), "10:00");
        assert!(Timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_edit_serialization() {
        let edit = ComplaintEdit {
            status: ComplaintStatus::InProgress,
            admin_notes: None,
        };
        assert_eq!(serde_json::to_string(&edit).unwrap(), r#"{"status":"in_progress"}"#);

        let edit = edit.with_notes("Looking into it");
        assert_eq!(
            serde_json::to_string(&edit).unwrap(),
            r#"{"status":"in_progress","admin_notes":"Looking into it"}"#
        );
        assert_eq!(
            serde_json::to_string(&edit.with_notes("")).unwrap(),
            r#"{"status":"in_progress","admin_notes":""}"#
        );
    }

    #[test]
    fn test_null_status_does_not_sink_the_list() {
        let raw = r#"[
            {"id":1,"title":"a","description":"d","category":"billing","status":"pending",
             "created_at":"2024-03-01T10:00:00","updated_at":"2024-03-01T10:00:00"},
            {"id":2,"title":"b","description":"d","category":null,"status":null,
             "created_at":"2024-03-01T10:00:00","updated_at":"2024-03-01T10:00:00"},
            {"id":3,"title":"c","description":"d","category":4,"status":{"x":1},
             "created_at":"2024-03-01T10:00:00","updated_at":"2024-03-01T10:00:00"}
        ]"#;
        let complaints: Vec<Complaint> = serde_json::from_str(raw).unwrap();
        assert_eq!(complaints.len(), 3);
        assert_eq!(complaints[0].status, ComplaintStatus::Pending);
        assert_eq!(complaints[1].status, ComplaintStatus::Unknown(String::new()));
        assert_eq!(complaints[1].category, Category::Unknown(String::new()));
        assert_eq!(complaints[2].status, ComplaintStatus::Unknown(String::new()));
        assert_eq!(complaints[2].category, Category::Unknown(String::new()));
    }

    #[test]
    fn test_missing_status_defaults_to_unknown() {
        let raw = r#"{"id":4,"title":"t","description":"d",
            "created_at":"2024-03-01T10:00:00","updated_at":"2024-03-01T10:00:00"}"#;
        let complaint: Complaint = serde_json::from_str(raw).unwrap();
        assert_eq!(complaint.status, ComplaintStatus::Unknown(String::new()));
    }
}
