use crate::db::DbActorHandle;
use crate::error::VitrineError;
use crate::sections::binding::{SectionBinding, SectionData};
use crate::sections::bus::ContentUpdates;
use crate::sections::source::{ListSource, SingletonSource};
use serde::Serialize;
use serde_json::Value;
use vitrine_content::{
    About, ContactInfo, Course, Education, Entity, Footer, Hero, Navbar, Project, Publication,
    ResearchArea, WorkExperience, fallback,
};

/// A section resolved for the public site.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSection {
    pub source: &'static str,
    pub data: Value,
}

impl ResolvedSection {
    fn from_data<T: Serialize>(data: SectionData<T>) -> Result<Self, VitrineError> {
        let (source, data) = match data {
            SectionData::Live(value) => ("live", serde_json::to_value(value)?),
            SectionData::Fallback(value) => ("fallback", serde_json::to_value(value)?),
            // Only reachable when a refresh task died mid-fetch.
            SectionData::Loading => ("loading", Value::Null),
        };
        Ok(Self { source, data })
    }
}

/// One binding per public section, all subscribed to the same update bus.
pub struct Sections {
    hero: SectionBinding<Hero>,
    about: SectionBinding<About>,
    education: SectionBinding<Vec<Education>>,
    publications: SectionBinding<Vec<Publication>>,
    work_experience: SectionBinding<Vec<WorkExperience>>,
    projects: SectionBinding<Vec<Project>>,
    research_areas: SectionBinding<Vec<ResearchArea>>,
    courses: SectionBinding<Vec<Course>>,
    contact_info: SectionBinding<Vec<ContactInfo>>,
    footer: SectionBinding<Footer>,
    navbar: SectionBinding<Navbar>,
}

impl Sections {
    pub fn spawn(db: Option<DbActorHandle>, updates: &ContentUpdates) -> Self {
        Self {
            hero: SectionBinding::spawn(
                SingletonSource::new(db.clone(), Entity::Hero),
                fallback::hero(),
                updates.subscribe(),
            ),
            about: SectionBinding::spawn(
                SingletonSource::new(db.clone(), Entity::About),
                fallback::about(),
                updates.subscribe(),
            ),
            education: SectionBinding::spawn(
                ListSource::new(db.clone(), Entity::Education),
                fallback::education(),
                updates.subscribe(),
            ),
            publications: SectionBinding::spawn(
                ListSource::new(db.clone(), Entity::Publications),
                fallback::publications(),
                updates.subscribe(),
            ),
            work_experience: SectionBinding::spawn(
                ListSource::new(db.clone(), Entity::WorkExperience),
                fallback::work_experience(),
                updates.subscribe(),
            ),
            projects: SectionBinding::spawn(
                ListSource::new(db.clone(), Entity::Projects),
                fallback::projects(),
                updates.subscribe(),
            ),
            research_areas: SectionBinding::spawn(
                ListSource::new(db.clone(), Entity::ResearchAreas),
                fallback::research_areas(),
                updates.subscribe(),
            ),
            courses: SectionBinding::spawn(
                ListSource::new(db.clone(), Entity::Courses),
                fallback::courses(),
                updates.subscribe(),
            ),
            contact_info: SectionBinding::spawn(
                ListSource::new(db.clone(), Entity::ContactInfo),
                fallback::contact_info(),
                updates.subscribe(),
            ),
            footer: SectionBinding::spawn(
                SingletonSource::new(db.clone(), Entity::Footer),
                fallback::footer(),
                updates.subscribe(),
            ),
            navbar: SectionBinding::spawn(
                SingletonSource::new(db, Entity::Navbar),
                fallback::navbar(),
                updates.subscribe(),
            ),
        }
    }

    /// Resolves one section, waiting out any in-flight refresh.
    pub async fn resolve(&self, entity: Entity) -> Result<ResolvedSection, VitrineError> {
        match entity {
            Entity::Hero => ResolvedSection::from_data(self.hero.current().await),
            Entity::About => ResolvedSection::from_data(self.about.current().await),
            Entity::Education => ResolvedSection::from_data(self.education.current().await),
            Entity::Publications => ResolvedSection::from_data(self.publications.current().await),
            Entity::WorkExperience => {
                ResolvedSection::from_data(self.work_experience.current().await)
            }
            Entity::Projects => ResolvedSection::from_data(self.projects.current().await),
            Entity::ResearchAreas => {
                ResolvedSection::from_data(self.research_areas.current().await)
            }
            Entity::Courses => ResolvedSection::from_data(self.courses.current().await),
            Entity::ContactInfo => ResolvedSection::from_data(self.contact_info.current().await),
            Entity::Footer => ResolvedSection::from_data(self.footer.current().await),
            Entity::Navbar => ResolvedSection::from_data(self.navbar.current().await),
        }
    }
}
