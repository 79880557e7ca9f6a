//! The fixed student table served by the directory.

use crate::models::{Availability, ExperienceLevel, Profile, Project};

/// Institutions shown in the onboarding picker.
pub const UNIVERSITY_LIST: &[&str] = &[
    "IIT Delhi",
    "IIT Bombay",
    "IIT Madras",
    "BITS Pilani",
    "IIIT Hyderabad",
    "VIT Vellore",
    "MIT Manipal",
    "SRM University",
    "Delhi Technological University",
];

/// Quick-search suggestions offered under the search box.
pub const TOP_SKILL_QUERIES: &[&str] = &["Cybersecurity", "Solidity", "PyTorch", "System Design"];

fn project(title: &str, description: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        link: None,
    }
}

fn skills(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

fn avatar(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/200")
}

/// Builds the mock student table. Called once at startup.
pub fn mock_students() -> Vec<Profile> {
    vec![
        Profile {
            id: "1".to_string(),
            name: "Arjun Sharma".to_string(),
            email: "arjun.s@iitb.ac.in".to_string(),
            university: "IIT Bombay".to_string(),
            headline: "Full Stack Developer | Competitive Programmer".to_string(),
            skills: skills(&["React", "Node.js", "MongoDB", "Docker", "Python"]),
            experience_level: ExperienceLevel::Advanced,
            projects: vec![
                project("DeFi Wallet", "A secure crypto wallet with swap features."),
                project(
                    "Campus Social",
                    "Internal networking app for B-school students.",
                ),
            ],
            availability: Availability::LookingForTeammates,
            avatar: avatar("arjun"),
        },
        Profile {
            id: "2".to_string(),
            name: "Priya Iyer".to_string(),
            email: "priya.iyer@bits-pilani.ac.in".to_string(),
            university: "BITS Pilani".to_string(),
            headline: "ML Engineer | Open Source Contributor".to_string(),
            skills: skills(&["PyTorch", "TensorFlow", "Scikit-learn", "NLP", "FastAPI"]),
            experience_level: ExperienceLevel::Advanced,
            projects: vec![
                project(
                    "Hate Speech Detection",
                    "Real-time multi-lingual classifier.",
                ),
                project("HealthAI", "Diagnostic assistant for rural clinics."),
            ],
            availability: Availability::Available,
            avatar: avatar("priya"),
        },
        Profile {
            id: "3".to_string(),
            name: "Rohan Mehta".to_string(),
            email: "rohan.mehta@mitmanipal.edu".to_string(),
            university: "MIT Manipal".to_string(),
            headline: "UI/UX Designer | Frontend Enthusiast".to_string(),
            skills: skills(&["Figma", "Adobe XD", "Tailwind CSS", "Framer Motion"]),
            experience_level: ExperienceLevel::Intermediate,
            projects: vec![project(
                "E-Learning Platform",
                "Minimalist LMS design system.",
            )],
            availability: Availability::Busy,
            avatar: avatar("rohan"),
        },
        Profile {
            id: "4".to_string(),
            name: "Ananya Gupta".to_string(),
            email: "ananya.g@vit.ac.in".to_string(),
            university: "VIT Vellore".to_string(),
            headline: "Backend Architect | Cloud Computing".to_string(),
            skills: skills(&["Java", "Spring Boot", "AWS", "PostgreSQL", "Redis"]),
            experience_level: ExperienceLevel::Advanced,
            projects: vec![project(
                "ScaleHub",
                "Auto-scaling load balancer for microservices.",
            )],
            availability: Availability::LookingForTeammates,
            avatar: avatar("ananya"),
        },
        Profile {
            id: "5".to_string(),
            name: "Vikram Singh".to_string(),
            email: "vikram.s@iiit.ac.in".to_string(),
            university: "IIIT Hyderabad".to_string(),
            headline: "Mobile Dev | Flutter & React Native".to_string(),
            skills: skills(&["Dart", "Flutter", "Firebase", "GraphQL"]),
            experience_level: ExperienceLevel::Intermediate,
            projects: vec![project(
                "FitTrack",
                "Fitness monitoring app with gamification.",
            )],
            availability: Availability::Available,
            avatar: avatar("vikram"),
        },
    ]
}
