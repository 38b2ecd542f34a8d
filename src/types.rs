use serde::Deserialize;

/// One employee record, exactly as the API returns it. Read-only on the
/// client; never mutated after decoding.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub position: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    // An absent skills array decodes as empty, which renders as an empty
    // chart and list rather than an error.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub level: i64, // 0-100, used as a chart axis value as-is
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let body = r#"{
            "id": 42,
            "full_name": "Felipe Arango Mejía",
            "position": "Data Engineer",
            "avatar_url": "https://robohash.org/felipe.png",
            "skills": [
                {"id": 1, "name": "Python", "level": 80},
                {"id": 2, "name": "Spark", "level": 90}
            ]
        }"#;
        let emp: Employee = serde_json::from_str(body).unwrap();
        assert_eq!(emp.id, 42);
        assert_eq!(emp.full_name, "Felipe Arango Mejía");
        assert_eq!(emp.skills.len(), 2);
        assert_eq!(emp.skills[1].name, "Spark");
        assert_eq!(emp.skills[1].level, 90);
    }

    #[test]
    fn missing_skills_decodes_empty() {
        let body = r#"{"id": 1, "full_name": "A", "position": "B"}"#;
        let emp: Employee = serde_json::from_str(body).unwrap();
        assert!(emp.skills.is_empty());
        assert!(emp.avatar_url.is_none());
    }

    #[test]
    fn empty_skills_array_decodes_empty() {
        let body = r#"{"id": 1, "full_name": "A", "position": "B", "skills": []}"#;
        let emp: Employee = serde_json::from_str(body).unwrap();
        assert!(emp.skills.is_empty());
    }

    #[test]
    fn truncated_body_is_an_error() {
        let body = r#"{"id": 1, "full_name": "A""#;
        assert!(serde_json::from_str::<Employee>(body).is_err());
    }
}
