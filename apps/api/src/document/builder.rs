//! Document Model Builder.
//!
//! Title precedence: `personal_details` → `resume_data` → job title → placeholder.
//! Summary precedence: job `customized_summary` → `personal_details` → `resume_data`.
//! Contact fields come from `personal_details` only. Blank strings count as missing.
//! Skills put the job's highlighted skills first, then the resume's own,
//! de-duplicated case-insensitively with first occurrence kept.

use std::collections::HashSet;

use crate::document::defaults;
use crate::document::model::{EducationItem, ExperienceItem, PersonalInfo, ResumeDocument};
use crate::models::upstream::{
    JobOpportunity, PersonalDetails, ResumeData, ResumeSource, UpstreamEducation,
    UpstreamExperience,
};

/// Builds a `ResumeDocument` from upstream data. Pure: identical input gives an
/// identical document.
pub fn build_document(source: &ResumeSource) -> ResumeDocument {
    let personal = source.personal_details.as_ref();
    let resume = source.resume_data.as_ref();
    let job = source.job.as_ref();

    ResumeDocument {
        personal_info: build_personal_info(personal, resume, job),
        skills: build_skills(resume, job),
        experience: build_experience(resume),
        education: build_education(resume),
    }
}

fn build_personal_info(
    personal: Option<&PersonalDetails>,
    resume: Option<&ResumeData>,
    job: Option<&JobOpportunity>,
) -> PersonalInfo {
    let details = personal.cloned().unwrap_or_default();

    let title = present(&details.title)
        .or_else(|| resume.and_then(|r| present(&r.title)))
        .or_else(|| job.and_then(|j| present(&j.job_title)))
        .unwrap_or_else(|| defaults::TITLE.to_string());

    // A job-specific summary wins over the generic one the user uploaded.
    let summary = job
        .and_then(|j| present(&j.customized_summary))
        .or_else(|| present(&details.summary))
        .or_else(|| resume.and_then(|r| present(&r.summary)))
        .unwrap_or_else(|| defaults::SUMMARY.to_string());

    PersonalInfo {
        name: present(&details.name).unwrap_or_else(|| defaults::NAME.to_string()),
        title,
        email: present(&details.email).unwrap_or_else(|| defaults::EMAIL.to_string()),
        phone: present(&details.phone).unwrap_or_else(|| defaults::PHONE.to_string()),
        github: present(&details.github),
        linkedin: present(&details.linkedin),
        location: present(&details.location).unwrap_or_else(|| defaults::LOCATION.to_string()),
        summary,
    }
}

fn build_skills(resume: Option<&ResumeData>, job: Option<&JobOpportunity>) -> Vec<String> {
    let highlighted = job.map(|j| j.highlighted_skills.as_slice()).unwrap_or_default();
    let own = resume.map(|r| r.skills.as_slice()).unwrap_or_default();

    let mut seen = HashSet::new();
    let skills: Vec<String> = highlighted
        .iter()
        .chain(own.iter())
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() || !seen.insert(trimmed.to_lowercase()) {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    if skills.is_empty() {
        defaults::skills()
    } else {
        skills
    }
}

fn build_experience(resume: Option<&ResumeData>) -> Vec<ExperienceItem> {
    let items: Vec<ExperienceItem> = resume
        .map(|r| r.experience.iter().filter_map(normalize_experience).collect())
        .unwrap_or_default();

    if items.is_empty() {
        defaults::experience()
    } else {
        items
    }
}

/// Entries with neither a title nor a company carry nothing worth rendering.
fn normalize_experience(raw: &UpstreamExperience) -> Option<ExperienceItem> {
    let title = present(&raw.title);
    let company = present(&raw.company);
    if title.is_none() && company.is_none() {
        return None;
    }

    Some(ExperienceItem {
        title: title.unwrap_or_else(|| defaults::ROLE.to_string()),
        company: company.unwrap_or_else(|| defaults::COMPANY.to_string()),
        location: present(&raw.location),
        period: present(&raw.period),
        highlights: raw.description.lines(),
    })
}

fn build_education(resume: Option<&ResumeData>) -> Vec<EducationItem> {
    let items: Vec<EducationItem> = resume
        .map(|r| r.education.iter().filter_map(normalize_education).collect())
        .unwrap_or_default();

    if items.is_empty() {
        defaults::education()
    } else {
        items
    }
}

fn normalize_education(raw: &UpstreamEducation) -> Option<EducationItem> {
    let degree = present(&raw.degree);
    let school = present(&raw.school);
    if degree.is_none() && school.is_none() {
        return None;
    }

    Some(EducationItem {
        degree: degree.unwrap_or_else(|| defaults::DEGREE.to_string()),
        school,
        period: present(&raw.period),
    })
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
