//! JSON shapes returned by the remote resume-analysis API.
//!
//! Only `personal_details`, `resume_data` and `job_opportunities` are consumed.
//! Every field is optional: the remote service omits fields freely and the
//! document builder supplies placeholders for anything missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<UpstreamExperience>,
    pub education: Vec<UpstreamEducation>,
}

/// Experience descriptions arrive either as one newline-separated string or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::List(Vec::new())
    }
}

impl TextOrList {
    /// Flattens into individual lines with leading bullet glyphs stripped.
    pub fn lines(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            TextOrList::Text(text) => text.lines().collect(),
            TextOrList::List(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(|line| strip_bullet(line).to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Removes a leading list marker. `•` and `·` are always markers; `-` and `*`
/// only when whitespace follows, so `-40% cost` keeps its sign.
fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(['•', '·']) {
        return rest.trim_start();
    }
    match line.strip_prefix(['-', '*']) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamExperience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "duration")]
    pub period: Option<String>,
    #[serde(alias = "highlights", alias = "responsibilities")]
    pub description: TextOrList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamEducation {
    pub degree: Option<String>,
    #[serde(alias = "institution")]
    pub school: Option<String>,
    #[serde(alias = "year")]
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobOpportunity {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub match_score: Option<f64>,
    pub customized_summary: Option<String>,
    pub highlighted_skills: Vec<String>,
}

/// Everything the document builder reads, decoded leniently from a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeSource {
    pub personal_details: Option<PersonalDetails>,
    pub resume_data: Option<ResumeData>,
    pub job: Option<JobOpportunity>,
}

impl ResumeSource {
    /// Decodes each part independently. A part that fails to decode is logged and
    /// dropped; the builder then falls back to placeholders for it.
    ///
    /// The job customisation comes from `job`, or from `job_opportunities[job_index]`
    /// (index 0 when `job_index` is absent).
    pub fn from_value(body: &Value) -> Self {
        let personal_details = decode_part::<PersonalDetails>(body, "personal_details");
        let resume_data = decode_part::<ResumeData>(body, "resume_data");

        let job = match body.get("job") {
            Some(_) => decode_part::<JobOpportunity>(body, "job"),
            None => select_job_opportunity(body),
        };

        ResumeSource {
            personal_details,
            resume_data,
            job,
        }
    }
}

fn decode_part<T: serde::de::DeserializeOwned>(body: &Value, key: &str) -> Option<T> {
    let value = body.get(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value::<T>(value.clone()) {
        Ok(part) => Some(part),
        Err(e) => {
            warn!(part = key, error = %e, "Malformed upstream section, using placeholders");
            None
        }
    }
}

fn select_job_opportunity(body: &Value) -> Option<JobOpportunity> {
    let jobs = body.get("job_opportunities")?.as_array()?;
    let index = body
        .get("job_index")
        .and_then(Value::as_u64)
        .unwrap_or(0) as usize;

    let Some(raw) = jobs.get(index) else {
        warn!(
            index,
            available = jobs.len(),
            "job_index out of range, ignoring job customisation"
        );
        return None;
    };

    match serde_json::from_value::<JobOpportunity>(raw.clone()) {
        Ok(job) => Some(job),
        Err(e) => {
            warn!(index, error = %e, "Malformed job opportunity, ignoring customisation");
            None
        }
    }
}
