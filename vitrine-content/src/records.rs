use crate::assets::{EngagementKind, Gradient, IconKey, PublicationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope shared by every stored record: server-assigned identity and
/// timestamps plus the explicit display position (`order`). The entity's
/// freeform fields are flattened alongside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record<T> {
    pub id: i64,
    #[serde(rename = "order", default)]
    pub order: i64,
    #[serde(flatten)]
    pub fields: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named value shown in the About section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ValueItem {
    pub title: String,
    pub description: String,
}

/// A short label/value pair shown in the About section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct QuickFact {
    pub label: String,
    pub value: String,
}

/// A footer social link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SocialLink {
    pub icon: IconKey,
    pub href: String,
    pub label: String,
}

/// A navbar entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub focus_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct About {
    pub title: String,
    pub description: String,
    pub values: Vec<ValueItem>,
    pub quick_facts: Vec<QuickFact>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub institution: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    pub period: String,
    pub highlights: Vec<String>,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub status: PublicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct WorkExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKey>,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    pub gradient: Gradient,
    #[serde(rename = "type")]
    pub kind: EngagementKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKey>,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub category: String,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ResearchArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKey>,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Course {
    pub title: String,
    pub desc: String,
    #[serde(rename = "verifyLink", skip_serializing_if = "Option::is_none")]
    pub verify_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ContactInfo {
    pub icon: IconKey,
    pub text: String,
    pub href: String,
    pub gradient: Gradient,
    pub is_external: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Footer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quick_links: Vec<String>,
    pub social_links: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Navbar {
    pub name: String,
    pub nav_items: Vec<NavItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_envelope_flattens_fields() {
        let value = json!({
            "id": 3,
            "order": 1,
            "title": "Crop disease detection",
            "description": "CNN-based leaf disease classifier",
            "technologies": ["PyTorch", "ONNX"],
            "category": "Machine Learning",
            "gradient": "from-green-500 to-emerald-500",
            "created_at": "2026-01-10T08:30:00Z",
            "updated_at": "2026-01-11T09:00:00Z"
        });

        let record: Record<Project> = serde_json::from_value(value).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.order, 1);
        assert_eq!(record.fields.title, "Crop disease detection");
        assert_eq!(record.fields.gradient, Gradient::GreenEmerald);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["title"], "Crop disease detection");
        assert_eq!(back["order"], 1);
    }

    #[test]
    fn sparse_rows_deserialize_with_defaults() {
        let value = json!({
            "id": 1,
            "institution": "Somewhere",
            "created_at": "2026-01-10T08:30:00Z",
            "updated_at": "2026-01-10T08:30:00Z"
        });

        let record: Record<Education> = serde_json::from_value(value).unwrap();
        assert_eq!(record.order, 0);
        assert_eq!(record.fields.institution, "Somewhere");
        assert!(record.fields.highlights.is_empty());
        assert_eq!(record.fields.gradient, Gradient::Unknown(String::new()));
    }

    #[test]
    fn renamed_wire_fields() {
        let course = Course {
            title: "Databases".to_string(),
            desc: "Storage systems".to_string(),
            verify_link: Some("https://example.org/cert".to_string()),
        };
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["verifyLink"], "https://example.org/cert");

        let work: WorkExperience =
            serde_json::from_value(json!({ "title": "TA", "type": "Volunteering" })).unwrap();
        assert_eq!(work.kind, EngagementKind::Volunteering);
    }
}
