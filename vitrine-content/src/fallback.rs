//! Statically embedded default content per public section.
//!
//! A section falls back to these values whenever its read resolves empty or
//! fails; fallback content is never persisted. Note the consequence: a list
//! section whose rows are all deleted shows its fallback again, because an
//! empty result is indistinguishable from an unconfigured backend.

use crate::assets::{EngagementKind, Gradient, IconKey, PublicationStatus};
use crate::records::{
    About, ContactInfo, Course, Education, Footer, Hero, NavItem, Navbar, Project, Publication,
    QuickFact, ResearchArea, SocialLink, ValueItem, WorkExperience,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn hero() -> Hero {
    Hero {
        name: "Rafael Moreno".to_string(),
        title: "Final-Year Computer Science Student".to_string(),
        subtitle: Some("Machine learning researcher".to_string()),
        description: Some(
            "Passionate about deep learning, computer vision, and explainable AI \
             with applications in healthcare and agriculture."
                .to_string(),
        ),
        email: Some("rafael.moreno@example.edu".to_string()),
        phone: Some("+1 555 010 7733".to_string()),
        cv_url: Some("/cv.pdf".to_string()),
        github_url: Some("https://github.com/rmoreno-cs".to_string()),
        linkedin_url: Some("https://linkedin.com/in/rmoreno-cs".to_string()),
        profile_image_url: None,
        focus_tags: strings(&["Deep Learning", "Computer Vision", "Explainable AI"]),
    }
}

pub fn about() -> About {
    About {
        title: "About Me".to_string(),
        description: "Researcher and engineer focused on applied machine learning. \
                      I build models that are accurate, interpretable, and deployable."
            .to_string(),
        values: vec![
            ValueItem {
                title: "Rigor".to_string(),
                description: "Careful experiments, honest baselines.".to_string(),
            },
            ValueItem {
                title: "Openness".to_string(),
                description: "Code and data released with every paper.".to_string(),
            },
        ],
        quick_facts: vec![
            QuickFact {
                label: "Location".to_string(),
                value: "Valencia, Spain".to_string(),
            },
            QuickFact {
                label: "Focus".to_string(),
                value: "Vision models for agriculture".to_string(),
            },
        ],
    }
}

pub fn education() -> Vec<Education> {
    vec![
        Education {
            icon: Some(IconKey::Globe),
            degree: None,
            program: Some("Erasmus+ Exchange Semester".to_string()),
            institution: "KTH Royal Institute of Technology".to_string(),
            location: "Stockholm, Sweden".to_string(),
            gpa: None,
            period: "Jan 2025 – Jun 2025".to_string(),
            highlights: strings(&[
                "International academic exchange",
                "Cross-cultural research collaboration",
            ]),
            gradient: Gradient::BlueCyan,
        },
        Education {
            icon: Some(IconKey::GraduationCap),
            degree: Some("BSc in Computer Science and Engineering".to_string()),
            program: None,
            institution: "Universitat Politècnica de València".to_string(),
            location: "Valencia, Spain".to_string(),
            gpa: Some("GPA: 9.2/10".to_string()),
            period: "Sep 2021 – Present".to_string(),
            highlights: strings(&[
                "Research-focused curriculum",
                "Teaching assistant for algorithms",
            ]),
            gradient: Gradient::PurplePink,
        },
    ]
}

pub fn publications() -> Vec<Publication> {
    vec![
        Publication {
            title: "Lightweight Attention for Leaf Disease Classification".to_string(),
            authors: "R. Moreno, L. Ferrer".to_string(),
            status: PublicationStatus::Published,
            journal: Some("Computers and Electronics in Agriculture".to_string()),
            year: "2025".to_string(),
            doi: Some("10.1000/leafnet.2025".to_string()),
            kind: "Journal Article".to_string(),
            link: None,
            volume: Some("214".to_string()),
            gradient: Gradient::GreenEmerald,
        },
        Publication {
            title: "Saliency Maps Under Distribution Shift".to_string(),
            authors: "R. Moreno".to_string(),
            status: PublicationStatus::UnderReview,
            journal: None,
            year: "2026".to_string(),
            doi: None,
            kind: "Conference Paper".to_string(),
            link: None,
            volume: None,
            gradient: Gradient::IndigoViolet,
        },
    ]
}

pub fn work_experience() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            icon: Some(IconKey::Briefcase),
            title: "Research Intern".to_string(),
            organization: "AgroVision Labs".to_string(),
            period: "Jun 2024 – Sep 2024".to_string(),
            description: "Trained and deployed crop-monitoring vision models on edge devices."
                .to_string(),
            gradient: Gradient::AmberOrange,
            kind: EngagementKind::Internship,
        },
        WorkExperience {
            icon: Some(IconKey::Heart),
            title: "Mentor".to_string(),
            organization: "Local Code Club".to_string(),
            period: "2023 – Present".to_string(),
            description: "Weekly programming mentorship for secondary-school students."
                .to_string(),
            gradient: Gradient::RosePink,
            kind: EngagementKind::Volunteering,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            icon: Some(IconKey::Leaf),
            title: "LeafNet".to_string(),
            description: "Real-time leaf disease detection with a quantized CNN.".to_string(),
            technologies: strings(&["PyTorch", "ONNX", "Rust"]),
            github: Some("https://github.com/rmoreno-cs/leafnet".to_string()),
            category: "Machine Learning".to_string(),
            gradient: Gradient::GreenEmerald,
        },
        Project {
            icon: Some(IconKey::Eye),
            title: "XrayExplain".to_string(),
            description: "Counterfactual explanations for chest X-ray classifiers.".to_string(),
            technologies: strings(&["Python", "Captum"]),
            github: Some("https://github.com/rmoreno-cs/xrayexplain".to_string()),
            category: "Explainable AI".to_string(),
            gradient: Gradient::BlueCyan,
        },
    ]
}

pub fn research_areas() -> Vec<ResearchArea> {
    vec![
        ResearchArea {
            icon: Some(IconKey::Brain),
            title: "Explainable AI".to_string(),
            description: "Attribution methods that survive distribution shift.".to_string(),
            technologies: strings(&["Saliency", "Counterfactuals"]),
            gradient: Gradient::IndigoViolet,
        },
        ResearchArea {
            icon: Some(IconKey::Eye),
            title: "Computer Vision".to_string(),
            description: "Compact vision models for resource-constrained deployment.".to_string(),
            technologies: strings(&["CNNs", "Quantization"]),
            gradient: Gradient::TealCyan,
        },
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            title: "Supervised Machine Learning".to_string(),
            desc: "Regression and classification fundamentals (online specialization)."
                .to_string(),
            verify_link: None,
        },
        Course {
            title: "Systems Programming".to_string(),
            desc: "Memory models, concurrency, and operating system interfaces.".to_string(),
            verify_link: None,
        },
    ]
}

pub fn contact_info() -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            icon: IconKey::Mail,
            text: "rafael.moreno@example.edu".to_string(),
            href: "mailto:rafael.moreno@example.edu".to_string(),
            gradient: Gradient::BlueCyan,
            is_external: false,
        },
        ContactInfo {
            icon: IconKey::Github,
            text: "github.com/rmoreno-cs".to_string(),
            href: "https://github.com/rmoreno-cs".to_string(),
            gradient: Gradient::PurplePink,
            is_external: true,
        },
    ]
}

pub fn footer() -> Footer {
    Footer {
        name: "Rafael Moreno".to_string(),
        description: Some("Machine learning researcher and engineer.".to_string()),
        quick_links: strings(&["About", "Projects", "Publications", "Contact"]),
        social_links: vec![
            SocialLink {
                icon: IconKey::Github,
                href: "https://github.com/rmoreno-cs".to_string(),
                label: "GitHub".to_string(),
            },
            SocialLink {
                icon: IconKey::Linkedin,
                href: "https://linkedin.com/in/rmoreno-cs".to_string(),
                label: "LinkedIn".to_string(),
            },
        ],
        copyright_text: Some("© Rafael Moreno. All rights reserved.".to_string()),
    }
}

pub fn navbar() -> Navbar {
    Navbar {
        name: "Rafael Moreno".to_string(),
        nav_items: vec![
            NavItem {
                name: "Home".to_string(),
                href: "#home".to_string(),
            },
            NavItem {
                name: "About".to_string(),
                href: "#about".to_string(),
            },
            NavItem {
                name: "Projects".to_string(),
                href: "#projects".to_string(),
            },
            NavItem {
                name: "Contact".to_string(),
                href: "#contact".to_string(),
            },
        ],
    }
}
