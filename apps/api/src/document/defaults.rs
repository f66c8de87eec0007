//! Placeholder content shown when upstream data is missing.

use crate::document::model::{EducationItem, ExperienceItem};

pub const NAME: &str = "Your Name";
pub const TITLE: &str = "Professional Title";
pub const EMAIL: &str = "email@example.com";
pub const PHONE: &str = "(555) 123-4567";
pub const LOCATION: &str = "City, Country";
pub const SUMMARY: &str = "Motivated professional with a track record of delivering results. \
     Upload your resume to replace this placeholder with your own summary.";

pub const SKILLS: [&str; 4] = ["Communication", "Problem Solving", "Teamwork", "Leadership"];

pub fn skills() -> Vec<String> {
    SKILLS.iter().map(|s| s.to_string()).collect()
}

pub fn experience() -> Vec<ExperienceItem> {
    vec![ExperienceItem {
        title: "Job Title".to_string(),
        company: "Company Name".to_string(),
        location: Some(LOCATION.to_string()),
        period: Some("2020 - Present".to_string()),
        highlights: vec![
            "Describe a key achievement, ideally with a measurable outcome".to_string(),
            "Describe a responsibility that is relevant to the role you want".to_string(),
        ],
    }]
}

pub fn education() -> Vec<EducationItem> {
    vec![EducationItem {
        degree: "Degree Name".to_string(),
        school: Some("University Name".to_string()),
        period: Some("2016 - 2020".to_string()),
    }]
}

pub const COMPANY: &str = "Company Name";
pub const ROLE: &str = "Role";
pub const DEGREE: &str = "Degree";
