//! Closed enumerations of presentation asset identifiers.
//!
//! Content rows reference icons and gradient classes by string. Instead of
//! matching free text against a lookup table at render time, the strings are
//! resolved into these enums at the data-access boundary; anything outside
//! the known set lands in an explicit `Unknown`/`Other` variant that carries
//! the original string.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $other:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
            /// Identifier outside the known set; the original string is kept.
            $other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::$other(raw) => raw.as_str(),
                }
            }

            pub fn from_name(name: &str) -> Self {
                match name {
                    $($text => $name::$variant,)+
                    other => $name::$other(other.to_string()),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::$other(_))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                Ok($name::from_name(&name))
            }
        }
    };
}

string_enum! {
    /// Icon identifiers recognized by the public site.
    IconKey, Unknown {
        GraduationCap => "GraduationCap",
        Globe => "Globe",
        Award => "Award",
        BookOpen => "BookOpen",
        School => "School",
        Briefcase => "Briefcase",
        Heart => "Heart",
        Users => "Users",
        Code => "Code",
        Brain => "Brain",
        Database => "Database",
        Eye => "Eye",
        Leaf => "Leaf",
        Mail => "Mail",
        Phone => "Phone",
        MapPin => "MapPin",
        Github => "Github",
        Linkedin => "Linkedin",
        FileText => "FileText",
        ExternalLink => "ExternalLink",
    }
}

string_enum! {
    /// Gradient classes recognized by the public site.
    Gradient, Unknown {
        BlueCyan => "from-blue-500 to-cyan-500",
        PurplePink => "from-purple-500 to-pink-500",
        GreenEmerald => "from-green-500 to-emerald-500",
        OrangeRed => "from-orange-500 to-red-500",
        IndigoViolet => "from-indigo-500 to-violet-500",
        TealCyan => "from-teal-500 to-cyan-500",
        AmberOrange => "from-amber-500 to-orange-500",
        RosePink => "from-rose-500 to-pink-500",
    }
}

string_enum! {
    /// Review pipeline states of a publication.
    PublicationStatus, Other {
        Published => "Published",
        MajorRevision => "Major Revision",
        PublishedAbstract => "Published (Abstract)",
        UnderReview => "Under Review",
        Draft => "Draft",
    }
}

string_enum! {
    /// Kind of a work-experience entry.
    EngagementKind, Other {
        Work => "Work",
        Volunteering => "Volunteering",
        Internship => "Internship",
    }
}

impl Default for IconKey {
    fn default() -> Self {
        IconKey::Unknown(String::new())
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient::Unknown(String::new())
    }
}

impl Default for PublicationStatus {
    fn default() -> Self {
        PublicationStatus::Draft
    }
}

impl Default for EngagementKind {
    fn default() -> Self {
        EngagementKind::Work
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(IconKey::from_name("GraduationCap"), IconKey::GraduationCap);
        assert_eq!(
            Gradient::from_name("from-blue-500 to-cyan-500"),
            Gradient::BlueCyan
        );
        assert_eq!(
            PublicationStatus::from_name("Major Revision"),
            PublicationStatus::MajorRevision
        );
    }

    #[test]
    fn unknown_names_keep_the_original_string() {
        let icon: IconKey = serde_json::from_str("\"Sparkles\"").unwrap();
        assert_eq!(icon, IconKey::Unknown("Sparkles".to_string()));
        assert!(!icon.is_known());
        assert_eq!(serde_json::to_string(&icon).unwrap(), "\"Sparkles\"");
    }

    #[test]
    fn serde_round_trip() {
        let gradient = Gradient::PurplePink;
        let json = serde_json::to_string(&gradient).unwrap();
        assert_eq!(json, "\"from-purple-500 to-pink-500\"");
        assert_eq!(serde_json::from_str::<Gradient>(&json).unwrap(), gradient);
    }
}
