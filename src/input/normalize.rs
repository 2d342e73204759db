//! Normalization of job fixtures that use differing key names

use crate::models::lenient::scalar_text;
use crate::models::Job;
use serde::Deserialize;
use serde_json::Value;

/// Job record as found in fixture files, before normalization
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJob {
    #[serde(default)]
    pub id: Value,
    pub title: Option<Value>,
    pub name: Option<Value>,
    pub location: Option<Value>,
    pub skills_required: Option<Value>,
    pub required_skills: Option<Value>,
    pub experience_required: Option<Value>,
    pub experience_level: Option<Value>,
}

impl RawJob {
    pub fn normalize(&self) -> Job {
        let skills_required = string_array(self.skills_required.as_ref())
            .or_else(|| string_array(self.required_skills.as_ref()))
            .unwrap_or_default();

        let experience_required = self
            .experience_required
            .as_ref()
            .and_then(Value::as_f64)
            .or_else(|| self.experience_level.as_ref().and_then(Value::as_f64))
            .unwrap_or(0.0);

        let title = self
            .title
            .as_ref()
            .and_then(scalar_text)
            .or_else(|| self.name.as_ref().and_then(scalar_text))
            .unwrap_or_else(|| "Untitled".to_string());

        Job {
            id: id_to_string(&self.id),
            title,
            location: self.location.as_ref().and_then(scalar_text).unwrap_or_default(),
            skills_required,
            experience_required,
            avg_match_score: None,
            match_count: None,
        }
    }
}

pub fn normalize_jobs(raw: &[RawJob]) -> Vec<Job> {
    raw.iter().map(RawJob::normalize).collect()
}

fn string_array(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    )
}

/// Ids print the way they read: `4`, `4.0` and `"4"` all become "4"
fn id_to_string(id: &Value) -> String {
    scalar_text(id).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Job {
        let raw: RawJob = serde_json::from_str(json).unwrap();
        raw.normalize()
    }

    #[test]
    fn test_primary_keys() {
        let job = parse(
            r#"{"id": "j1", "title": "Frontend Developer", "location": "Remote",
                "skillsRequired": ["React", "TypeScript"], "experienceRequired": 2}"#,
        );
        assert_eq!(job.id, "j1");
        assert_eq!(job.title, "Frontend Developer");
        assert_eq!(job.skills_required, vec!["React", "TypeScript"]);
        assert_eq!(job.experience_required, 2.0);
        assert!(!job.has_metrics());
    }

    #[test]
    fn test_alternate_keys() {
        let job = parse(
            r#"{"id": 4, "name": "Data Engineer", "requiredSkills": ["Python", 3, "Spark"],
                "experienceLevel": 5}"#,
        );
        assert_eq!(job.id, "4");
        assert_eq!(job.title, "Data Engineer");
        assert_eq!(job.skills_required, vec!["Python", "Spark"]);
        assert_eq!(job.experience_required, 5.0);
        assert_eq!(job.location, "");
    }

    #[test]
    fn test_float_id_and_scalar_title() {
        let job = parse(r#"{"id": 4.0, "title": 2024, "location": null, "name": "Ignored"}"#);
        assert_eq!(job.id, "4");
        assert_eq!(job.title, "2024");
        assert_eq!(job.location, "");

        let job = parse(r#"{"id": 4.5, "title": null, "name": "Data Engineer"}"#);
        assert_eq!(job.id, "4.5");
        assert_eq!(job.title, "Data Engineer");

        // non-scalar titles fall back instead of failing the file
        let job = parse(r#"{"id": "j1", "title": ["Frontend"]}"#);
        assert_eq!(job.title, "Untitled");
    }

    #[test]
    fn test_invalid_shapes_fall_back() {
        let job = parse(
            r#"{"id": 9, "skillsRequired": "React", "requiredSkills": ["Go"],
                "experienceRequired": "three"}"#,
        );
        assert_eq!(job.title, "Untitled");
        assert_eq!(job.skills_required, vec!["Go"]);
        assert_eq!(job.experience_required, 0.0);
    }
}
