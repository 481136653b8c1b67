//! Lenient conversion of an untyped JSON payload into a [`ResumeRecord`].
//!
//! Nothing here fails. Every field access is optional; values of the wrong
//! shape degrade to "absent" and are reported as [`FieldWarning`]s, and
//! non-object items inside record lists are skipped without touching their
//! siblings.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::resume::{
    EducationEntry, ExperienceEntry, FieldWarning, ProjectEntry, ResumeRecord,
};

/// Reads `value` as a résumé. A non-object payload yields the empty record.
pub fn record_from_value(value: &Value) -> (ResumeRecord, Vec<FieldWarning>) {
    let mut reader = Reader::default();

    let Some(obj) = value.as_object() else {
        reader.warn("$", format!("expected an object, got {}", kind(value)));
        return (ResumeRecord::default(), reader.warnings);
    };

    let record = ResumeRecord {
        name: reader.scalar(obj, "name", ""),
        phone: reader.scalar(obj, "phone", ""),
        email: reader.scalar(obj, "email", ""),
        linkedin: reader.scalar(obj, "linkedin", ""),
        portfolio: reader.scalar(obj, "portfolio", ""),
        address: reader.scalar(obj, "address", ""),
        summary: reader.scalar(obj, "summary", ""),
        experiences: reader.records(obj, "experiences", experience_entry),
        education: reader.records(obj, "education", education_entry),
        skills: reader.text_list(obj, "skills", ""),
        certifications: reader.text_list(obj, "certifications", ""),
        projects: reader.records(obj, "projects", project_entry),
        languages: reader.text_list(obj, "languages", ""),
        hobbies: reader.text_list(obj, "hobbies", ""),
    };

    if !reader.warnings.is_empty() {
        debug!("Resume payload produced {} field warnings", reader.warnings.len());
    }

    (record, reader.warnings)
}

fn experience_entry(r: &mut Reader, obj: &Map<String, Value>, path: &str) -> ExperienceEntry {
    ExperienceEntry {
        job_title: r.scalar(obj, "job_title", path),
        company: r.scalar(obj, "company", path),
        location: r.scalar(obj, "location", path),
        start_date: r.scalar(obj, "start_date", path),
        end_date: r.scalar(obj, "end_date", path),
        achievements: r.text_list(obj, "achievements", path),
    }
}

fn education_entry(r: &mut Reader, obj: &Map<String, Value>, path: &str) -> EducationEntry {
    EducationEntry {
        degree: r.scalar(obj, "degree", path),
        institution: r.scalar(obj, "institution", path),
        location: r.scalar(obj, "location", path),
        graduation_date: r.scalar(obj, "graduation_date", path),
        honors: r.scalar(obj, "honors", path),
    }
}

fn project_entry(r: &mut Reader, obj: &Map<String, Value>, path: &str) -> ProjectEntry {
    ProjectEntry {
        title: r.scalar(obj, "title", path),
        description: r.scalar(obj, "description", path),
        technologies: r.scalar(obj, "technologies", path),
        role: r.scalar(obj, "role", path),
    }
}

#[derive(Default)]
struct Reader {
    warnings: Vec<FieldWarning>,
}

impl Reader {
    fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(FieldWarning::new(field, message));
    }

    /// Strings pass through; numbers and booleans are stringified; `null`
    /// counts as absent. Lists and objects are absent with a warning.
    fn scalar(&mut self, obj: &Map<String, Value>, key: &str, parent: &str) -> Option<String> {
        match obj.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => {
                self.warn(
                    join_path(parent, key),
                    format!("expected text, got {}", kind(other)),
                );
                None
            }
        }
    }

    /// A list of text items. Anything that is not a list reads as empty.
    fn text_list(&mut self, obj: &Map<String, Value>, key: &str, parent: &str) -> Vec<String> {
        let path = join_path(parent, key);
        let items = match obj.get(key) {
            None | Some(Value::Null) => return Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.warn(path, format!("expected a list, got {}", kind(other)));
                return Vec::new();
            }
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                Value::Number(n) => out.push(n.to_string()),
                Value::Bool(b) => out.push(b.to_string()),
                other => self.warn(
                    format!("{path}[{i}]"),
                    format!("skipped {} in text list", kind(other)),
                ),
            }
        }
        out
    }

    /// A list of records; items that are not objects are skipped.
    fn records<T>(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        read: fn(&mut Reader, &Map<String, Value>, &str) -> T,
    ) -> Vec<T> {
        let items = match obj.get(key) {
            None | Some(Value::Null) => return Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.warn(key, format!("expected a list, got {}", kind(other)));
                return Vec::new();
            }
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let path = format!("{key}[{i}]");
            match item.as_object() {
                Some(entry) => out.push(read(self, entry, &path)),
                None => self.warn(path, format!("skipped {}, expected an object", kind(item))),
            }
        }
        out
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
