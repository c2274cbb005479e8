use std::fmt;
use std::str::FromStr;

/// One content type with its own table and REST routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Hero,
    About,
    Education,
    Publications,
    WorkExperience,
    Projects,
    ResearchAreas,
    Courses,
    ContactInfo,
    Footer,
    Navbar,
}

/// Storage shape of an entity: zero-or-one row, or many ordered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Singleton,
    List,
}

impl Entity {
    pub const ALL: [Entity; 11] = [
        Entity::Hero,
        Entity::About,
        Entity::Education,
        Entity::Publications,
        Entity::WorkExperience,
        Entity::Projects,
        Entity::ResearchAreas,
        Entity::Courses,
        Entity::ContactInfo,
        Entity::Footer,
        Entity::Navbar,
    ];

    /// URL path segment under `/api/`.
    pub fn slug(self) -> &'static str {
        match self {
            Entity::Hero => "hero",
            Entity::About => "about",
            Entity::Education => "education",
            Entity::Publications => "publications",
            Entity::WorkExperience => "work-experience",
            Entity::Projects => "projects",
            Entity::ResearchAreas => "research-areas",
            Entity::Courses => "courses",
            Entity::ContactInfo => "contact-info",
            Entity::Footer => "footer",
            Entity::Navbar => "navbar",
        }
    }

    /// SQLite table name. Always a compile-time constant, never request input.
    pub fn table(self) -> &'static str {
        match self {
            Entity::Hero => "hero",
            Entity::About => "about",
            Entity::Education => "education",
            Entity::Publications => "publications",
            Entity::WorkExperience => "work_experience",
            Entity::Projects => "projects",
            Entity::ResearchAreas => "research_areas",
            Entity::Courses => "courses",
            Entity::ContactInfo => "contact_info",
            Entity::Footer => "footer",
            Entity::Navbar => "navbar",
        }
    }

    pub fn kind(self) -> EntityKind {
        match self {
            Entity::Hero | Entity::About | Entity::Footer | Entity::Navbar => EntityKind::Singleton,
            _ => EntityKind::List,
        }
    }

    pub fn is_singleton(self) -> bool {
        self.kind() == EntityKind::Singleton
    }

    pub fn from_slug(slug: &str) -> Option<Entity> {
        Entity::ALL.into_iter().find(|e| e.slug() == slug)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Entity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Entity::from_slug(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for entity in Entity::ALL {
            assert_eq!(Entity::from_slug(entity.slug()), Some(entity));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(Entity::from_slug("gallery"), None);
        assert!("".parse::<Entity>().is_err());
    }

    #[test]
    fn singleton_split() {
        assert!(Entity::Hero.is_singleton());
        assert!(Entity::Navbar.is_singleton());
        assert_eq!(Entity::Projects.kind(), EntityKind::List);
        assert_eq!(Entity::Courses.kind(), EntityKind::List);
    }
}
