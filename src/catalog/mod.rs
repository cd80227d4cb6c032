// SPDX-License-Identifier: MPL-2.0
//! Static content catalog: profile, social links, projects and documents.
//!
//! All tables are fixed at build time and exposed through accessors that
//! return `'static` slices. Nothing here can fail, and nothing mutates.

pub mod types;

pub use types::{
    AssetRef, Document, EmailContact, Profile, Project, Rgb, SkillGroup, SkillTier, SocialLink,
    Status,
};

static PROFILE: Profile = Profile {
    name: "Muriel Angelo M. Yaco",
    title: "UI/UX Designer & Project Manager",
    subtitle: "4th Year • BSIT • Creative Problem Solver",
    about: "I'm a passionate 4th year Information Technology student with a strong focus on \
            UI/UX design, project management, and technical writing. I love creating beautiful, \
            user-friendly interfaces and managing projects from conception to completion. \
            My strength lies in translating complex ideas into clear documentation and \
            intuitive designs that users love.",
    picture: AssetRef("images/profile_portolio.jpg"),
    github_url: "https://github.com/geloyaco",
    personal_email: EmailContact {
        address: "yacomurielangelo@gmail.com",
    },
    university_email: EmailContact {
        address: "myaco_220000000228@uic.edu.ph",
    },
    skills: &[
        SkillGroup {
            tier: SkillTier::Primary,
            skills: &["Figma", "Canva", "UI/UX Design"],
        },
        SkillGroup {
            tier: SkillTier::Secondary,
            skills: &["Project Management", "Technical Writing"],
        },
        SkillGroup {
            tier: SkillTier::Tertiary,
            skills: &["Monday", "ClickUp", "Notion", "Google Docs"],
        },
    ],
};

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        id: "facebook",
        name: "Facebook",
        url: "https://www.facebook.com/angelo.yacoii",
        icon: "facebook",
        color: Rgb::hex(0x1877f2),
        description: "Connect with me on Facebook",
    },
    SocialLink {
        id: "instagram",
        name: "Instagram",
        url: "https://www.instagram.com/a.xgelo/",
        icon: "instagram",
        color: Rgb::hex(0xe4405f),
        description: "Follow me on Instagram",
    },
    SocialLink {
        id: "email",
        name: "Email",
        url: "mailto:yacomurielangelo@gmail.com",
        icon: "email",
        color: Rgb::hex(0x8b5cf6),
        description: "Send me an email",
    },
    SocialLink {
        id: "github",
        name: "GitHub",
        url: "https://github.com/geloyaco",
        icon: "github",
        color: Rgb::hex(0x333333),
        description: "View my code repositories",
    },
];

static PROJECTS: [Project; 5] = [
    Project {
        id: 1,
        title: "JRU LMS Platform",
        category: "Full-Stack Development",
        description: "Learning Management System for Jose Rizal University with user-friendly \
                      interface design and comprehensive project management.",
        technologies: &["Python", "Django", "Figma", "UI/UX Design"],
        image: "📚",
        github: "https://github.com/geloyaco/JRU-Backend",
        status: Status::Completed,
    },
    Project {
        id: 2,
        title: "Financial Tracker App",
        category: "Mobile Development",
        description: "Personal finance management application with intuitive design and \
                      comprehensive tracking features.",
        technologies: &["CSS", "JavaScript", "Figma", "Canva"],
        image: "💰",
        github: "https://github.com/geloyaco/FinancialTracker",
        status: Status::Archived,
    },
    Project {
        id: 3,
        title: "KaffeHaus Coffee Shop",
        category: "Mobile Development",
        description: "Coffee shop management system with modern interface design and efficient \
                      project workflow management.",
        technologies: &["C++", "Mobile Dev", "Figma"],
        image: "☕",
        github: "https://github.com/geloyaco/KaffeHaus",
        status: Status::Completed,
    },
    Project {
        id: 4,
        title: "LabClass Backend",
        category: "Backend Development",
        description: "Laboratory class management system with clean API design and \
                      comprehensive documentation.",
        technologies: &["Python", "API Design"],
        image: "🔬",
        github: "https://github.com/geloyaco/LabClass_BackEnd",
        status: Status::Completed,
    },
    Project {
        id: 5,
        title: "Dart Coffee Shop",
        category: "Mobile Development",
        description: "Preliminary mobile development project showcasing UI/UX design principles \
                      and project management skills.",
        technologies: &["Dart", "Flutter", "Figma"],
        image: "📱",
        github: "https://github.com/geloyaco/prelim_project_dart-coffee-shop",
        status: Status::Completed,
    },
];

static DOCUMENTS: [Document; 3] = [
    Document {
        id: 1,
        title: "Software Engineering Document",
        subject: "Software Engineering",
        description: "Comprehensive software engineering documentation covering both \
                      implementation and documentation aspects, including system design, \
                      requirements analysis, and project management methodologies.",
        image: AssetRef("images/softwareengineering_document.png"),
        kind: "Academic Document",
        semester: "3rd Year",
        status: Status::Completed,
    },
    Document {
        id: 2,
        title: "Technical Writing Document",
        subject: "Technical Writing",
        description: "Research document showcasing technical writing skills, documentation \
                      methodologies, and technical communication expertise in academic \
                      research context.",
        image: AssetRef("images/technicalwriting_document.png"),
        kind: "Research Document",
        semester: "3rd Year",
        status: Status::Completed,
    },
    Document {
        id: 3,
        title: "Capstone Project Document",
        subject: "Capstone Project",
        description: "Final capstone project documentation demonstrating comprehensive \
                      research, development, and implementation of a complete system for \
                      graduation requirements.",
        image: AssetRef("images/capstone_document.png"),
        kind: "Capstone Document",
        semester: "4th Year",
        status: Status::InProgress,
    },
];

#[must_use]
pub fn profile() -> &'static Profile {
    &PROFILE
}

#[must_use]
pub fn social_links() -> &'static [SocialLink] {
    &SOCIAL_LINKS
}

#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

#[must_use]
pub fn documents() -> &'static [Document] {
    &DOCUMENTS
}

#[must_use]
pub fn social_link_by_id(id: &str) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|link| link.id == id)
}

#[must_use]
pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}
