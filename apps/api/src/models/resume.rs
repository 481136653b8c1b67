use serde::Serialize;

/// Structured résumé input consumed by the renderer.
///
/// Scalars are `Option` so the renderer can tell "absent" (which may take an
/// `N/A` fallback) from "present but empty" (which renders as-is). List fields
/// hold only the valid items; malformed ones are dropped during conversion in
/// `render::record`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub address: Option<String>,
    pub summary: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub languages: Vec<String>,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub graduation_date: Option<String>,
    /// Renders as `N/A` when absent.
    pub honors: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub role: Option<String>,
}

/// A non-fatal problem found while reading a résumé payload.
/// `field` is a path such as `experiences[2].achievements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldWarning {
    pub field: String,
    pub message: String,
}

impl FieldWarning {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
