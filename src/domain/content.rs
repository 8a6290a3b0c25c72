use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{experience::ExperienceView, project::ProjectView};

/// Hero section content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection {
    pub tagline: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub stats: Vec<StatCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSection {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

/// Everything the home page renders, assembled server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePayload {
    pub profile: Profile,
    pub about: AboutSection,
    pub skills: Vec<SkillGroup>,
    pub contact: ContactSection,
    pub technology_options: Vec<&'static str>,
    pub experience: Vec<ExperienceView>,
    pub projects: Vec<ProjectView>,
    pub generated_at: DateTime<Utc>,
}

pub fn profile() -> Profile {
    Profile {
        name: "Jordan Mercer",
        headline: "Senior Full Stack Developer",
        summary: "Software engineer with 8+ years of experience building scalable \
                  web and mobile applications. Specialized in React, Node.js, Rust, \
                  and cloud infrastructure, with a focus on shipping efficient, \
                  user-centric products.",
        email: "hello@jordanmercer.dev",
        phone: "+1 (503) 555-0164",
        location: "Portland, OR",
        github_url: "https://github.com/jmercer-dev",
        linkedin_url: "https://www.linkedin.com/in/jordan-mercer-dev",
    }
}

pub fn about() -> AboutSection {
    AboutSection {
        tagline: "A dedicated professional, committed to delivering exceptional software solutions",
        paragraphs: vec![
            "I am a seasoned Full Stack Developer with over 8 years of experience \
             designing and building robust web and mobile applications. My expertise \
             spans modern JavaScript frameworks, backend services, and cloud \
             infrastructure.",
            "Throughout my career I have led development teams, architected scalable \
             systems, and delivered projects that measurably improved business \
             operations and user experience. I care about clean, maintainable code \
             and staying current with the ecosystem.",
            "My approach combines technical depth with clear communication, bridging \
             the gap between complex technical concepts and business goals.",
        ],
        stats: vec![
            StatCard { value: "8+", label: "Years Experience" },
            StatCard { value: "20+", label: "Projects Completed" },
            StatCard { value: "10+", label: "Team Collaborations" },
            StatCard { value: "5+", label: "Certifications" },
        ],
    }
}

pub fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            title: "Frontend Development",
            skills: vec![
                Skill { name: "React", level: "Expert" },
                Skill { name: "Next.js", level: "Advanced" },
                Skill { name: "React Native", level: "Expert" },
                Skill { name: "TypeScript", level: "Expert" },
                Skill { name: "Redux", level: "Advanced" },
                Skill { name: "Tailwind CSS", level: "Expert" },
            ],
        },
        SkillGroup {
            title: "Backend Development",
            skills: vec![
                Skill { name: "Node.js", level: "Expert" },
                Skill { name: "Express", level: "Expert" },
                Skill { name: "Rust", level: "Advanced" },
                Skill { name: "Python", level: "Advanced" },
                Skill { name: "RESTful APIs", level: "Expert" },
                Skill { name: "GraphQL", level: "Intermediate" },
            ],
        },
        SkillGroup {
            title: "Cloud & DevOps",
            skills: vec![
                Skill { name: "AWS", level: "Advanced" },
                Skill { name: "Docker", level: "Advanced" },
                Skill { name: "Kubernetes", level: "Intermediate" },
                Skill { name: "CI/CD", level: "Advanced" },
                Skill { name: "Linux", level: "Advanced" },
            ],
        },
        SkillGroup {
            title: "Tools & Databases",
            skills: vec![
                Skill { name: "PostgreSQL", level: "Advanced" },
                Skill { name: "MongoDB", level: "Advanced" },
                Skill { name: "Redis", level: "Intermediate" },
                Skill { name: "Git", level: "Expert" },
                Skill { name: "Jest", level: "Advanced" },
            ],
        },
    ]
}

pub fn contact() -> ContactSection {
    ContactSection {
        email: "hello@jordanmercer.dev",
        phone: "+1 (503) 555-0164",
        location: "Portland, OR",
    }
}

/// The vocabulary offered by the technology multi-select. Served with the
/// home payload so the form and the server share one list.
pub fn technology_options() -> Vec<&'static str> {
    vec![
        "React",
        "Next.js",
        "React Native",
        "TypeScript",
        "JavaScript",
        "Redux",
        "Tailwind CSS",
        "Node.js",
        "Express",
        "NestJS",
        "Rust",
        "Python",
        "Django",
        "GraphQL",
        "RESTful APIs",
        "PostgreSQL",
        "MongoDB",
        "Redis",
        "Docker",
        "Kubernetes",
        "AWS",
        "CI/CD",
        "Linux",
        "Git",
        "Jest",
        "Webpack",
    ]
}
