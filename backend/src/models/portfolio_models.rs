use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub level: u8, // 0-100
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub github: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub about: &'static str,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

pub static PORTFOLIO: Lazy<Portfolio> = Lazy::new(|| Portfolio {
    name: "May Sigrid Dimaano",
    title: "Aspiring Full Stack Developer",
    email: "sigriddimaano@gmail.com",
    github: "https://github.com/mayciii",
    linkedin: "https://www.linkedin.com/in/may-sigrid-dimaano-4052a43aa",
    about: "Passionate developer with experience in frontend and backend development. \
            I enjoy building modern, scalable, and user-friendly applications.",
    skills: vec![
        Skill { name: "HTML", category: "Web Development", level: 90 },
        Skill { name: "CSS", category: "Web Development", level: 85 },
        Skill { name: "JavaScript", category: "Web Development", level: 80 },
        Skill { name: "Python", category: "Programming Languages", level: 75 },
        Skill { name: "Java", category: "Programming Languages", level: 70 },
    ],
    projects: vec![
        Project {
            title: "Smart Blood Donor Eligibility Screening System",
            description: "Implements AI logic to check and analyze the health assessment of potential \
                          blood donors, ensuring only qualified individuals proceed to donation.",
            technologies: vec!["Python", "TKinter"],
            github: "https://github.com/mayciii/Smart-Blood-Donor-Eligibilty-Screening-System",
        },
        Project {
            title: "Console-Based Barangay Equipment Borrowing and Return Tracking System",
            description: "Centralizes equipment tracking and borrower records to provide real-time updates \
                          on item availability and automated transaction logging.",
            technologies: vec!["Java", "OOP"],
            github: "https://github.com/mayciii/Console-Based-barangay-Equipment-Borrowing-and-Return-Tracking-System",
        },
        Project {
            title: "SABTRACK: Web-based Waste Tracking & Reporting System for Barangay Sabang",
            description: "A web-based waste management system for Barangay Sabang that lets residents and \
                          officials view collection schedules, report issues, receive announcements, and \
                          learn proper waste disposal, all in one user-friendly platform.",
            technologies: vec!["HTML", "CSS", "Python", "Flask", "SQLite"],
            github: "https://github.com/mayciii/project3",
        },
    ],
});
