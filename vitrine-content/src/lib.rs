//! Shared content vocabulary for the portfolio service.
//!
//! Layout:
//! - `entity.rs`: the closed set of content types and their routing/storage names
//! - `records.rs`: typed record envelopes and per-entity field structs
//! - `assets.rs`: closed enumerations of presentation asset identifiers
//! - `fallback.rs`: statically embedded default content per public section

pub mod assets;
pub mod entity;
pub mod fallback;
pub mod records;

pub use assets::{EngagementKind, Gradient, IconKey, PublicationStatus};
pub use entity::{Entity, EntityKind};
pub use records::{
    About, ContactInfo, Course, Education, Footer, Hero, NavItem, Navbar, Project, Publication,
    QuickFact, Record, ResearchArea, SocialLink, ValueItem, WorkExperience,
};
