//! Static portfolio content served by the `/api/portfolio` family of routes
//! and spliced into the assistant's system prompt.

use serde::Serialize;

pub const FULL_NAME: &str = "Vaibhav Sanap";
pub const TITLE: &str = "Aspiring Developer";
pub const EMAIL: &str = "sanapvaibhav8767@gmail.com";

pub const PORTFOLIO_DATA: &str = "
FULL NAME: Vaibhav Sanap
TITLE: Aspiring Developer
EMAIL: sanapvaibhav8767@gmail.com

PROFESSIONAL SUMMARY:
Aspiring developer building web applications and exploring AI/ML.
Focused on modern web stacks and real-world projects.

PROJECTS:
- Tiffin Service Management Website (MERN)
- Crime Prediction and Analysis System (ML + React)
- Movie Ticket Booking Platform (MERN)
";

/// Builds the system prompt that grounds the model in the portfolio text.
pub fn system_prompt(portfolio: &str) -> String {
    format!(
        "\nYou are an AI assistant representing this portfolio:\n\n{}\n\nAnswer professionally based only on the provided information.\n",
        portfolio
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub full_name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub summary: &'static str,
    pub resume_content: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
    pub github: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skills {
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub databases: &'static [&'static str],
    pub devops: &'static [&'static str],
    pub ai_ml: &'static [&'static str],
    pub tools: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub fn portfolio() -> Portfolio {
    Portfolio {
        full_name: FULL_NAME,
        title: TITLE,
        email: EMAIL,
        phone: "",
        summary: "Aspiring developer building web and AI projects.",
        resume_content: PORTFOLIO_DATA,
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Tiffin Service Management Website",
            description: "Full-stack MERN application for mess management.",
            technologies: &["React", "Node.js", "MongoDB"],
            image: "",
            link: "#",
            github: "#",
        },
        Project {
            id: 2,
            title: "Crime Prediction and Analysis System",
            description: "Machine learning based crime hotspot prediction platform.",
            technologies: &["Python", "React", "MongoDB"],
            image: "",
            link: "#",
            github: "#",
        },
        Project {
            id: 3,
            title: "Movie Ticket Booking Platform (MERN)",
            description: "Online movie booking system with seat reservation.",
            technologies: &["MongoDB", "Express", "React", "Node.js"],
            image: "",
            link: "#",
            github: "#",
        },
    ]
}

pub fn skills() -> Skills {
    Skills {
        frontend: &["React", "TypeScript", "Tailwind CSS"],
        backend: &["Python", "Flask", "Node.js"],
        databases: &["MongoDB", "SQL"],
        devops: &[],
        ai_ml: &["OpenAI API", "NLP"],
        tools: &["Git", "VS Code"],
    }
}

pub fn experience() -> Vec<Experience> {
    vec![Experience {
        id: 1,
        title: "Aspiring Developer",
        company: "Self Projects",
        duration: "Present",
        description: "Building full stack and AI projects.",
        technologies: &["React", "Python"],
    }]
}
