use serde::{Deserialize, Serialize};

/// Normalized resume used for both preview rendering and export.
///
/// Built fresh from upstream data on every render and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub location: String,
    pub summary: String,
}

impl PersonalInfo {
    /// Contact fields in display order, optional links included only when present.
    pub fn contact_items(&self) -> Vec<&str> {
        let mut items = vec![self.email.as_str(), self.phone.as_str(), self.location.as_str()];
        if let Some(linkedin) = &self.linkedin {
            items.push(linkedin);
        }
        if let Some(github) = &self.github {
            items.push(github);
        }
        items
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub period: Option<String>,
    pub highlights: Vec<String>,
}

impl ExperienceItem {
    /// "Location | Period" line, or `None` when neither is known.
    pub fn meta_line(&self) -> Option<String> {
        join_present(&[self.location.as_deref(), self.period.as_deref()])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub school: Option<String>,
    pub period: Option<String>,
}

impl EducationItem {
    pub fn meta_line(&self) -> Option<String> {
        join_present(&[self.school.as_deref(), self.period.as_deref()])
    }
}

fn join_present(parts: &[Option<&str>]) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(" | "))
    }
}
