/// Canned answers used when the AI gateway is not configured or fails.
///
/// Keywords are matched as lower-case substrings in table order and the first
/// hit wins. `availability` sits before `ai` because it contains `ai`.
const RESPONSES: &[(&str, &str)] = &[
    (
        "experience",
        "I'm an aspiring developer building full-stack and AI projects on my own, mostly with React on the frontend and Python on the backend.",
    ),
    (
        "skills",
        "My skills include React, TypeScript and Tailwind CSS on the frontend, Python, Flask and Node.js on the backend, MongoDB and SQL for data, and the OpenAI API and NLP for AI work.",
    ),
    (
        "projects",
        "My projects include a Tiffin Service Management Website (MERN), a Crime Prediction and Analysis System (ML + React), and a Movie Ticket Booking Platform (MERN).",
    ),
    (
        "education",
        "I'm continuing to build my foundation in computer science through coursework and hands-on projects in web development and machine learning.",
    ),
    (
        "contact",
        "You can reach me by email at sanapvaibhav8767@gmail.com.",
    ),
    (
        "availability",
        "I'm currently open to internships, freelance work and entry-level developer roles.",
    ),
    (
        "ai",
        "I work with AI through the OpenAI API and NLP, and my Crime Prediction and Analysis System uses machine learning to predict crime hotspots.",
    ),
];

const DEFAULT_RESPONSE: &str = "I'm the portfolio assistant. I can tell you about experience, skills, projects, education, contact details, AI work and availability. What would you like to know?";

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResponder;

impl FallbackResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn respond(&self, user_message: &str) -> &'static str {
        let lowered = user_message.to_lowercase();
        RESPONSES
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, response)| *response)
            .unwrap_or(DEFAULT_RESPONSE)
    }

    pub fn default_response(&self) -> &'static str {
        DEFAULT_RESPONSE
    }

    /// Canned answer for `keyword`, if the table has one.
    pub fn response_for(&self, keyword: &str) -> Option<&'static str> {
        RESPONSES
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, response)| *response)
    }
}
