use crate::domain::common::{RecordId, SchoolEntity};
use crate::shared::{ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// Course (subject offering) taught to one or more classes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: Option<f64>,
    pub teacher_name: Option<String>,
}

/// Course codes are short upper-case identifiers such as `MATH101`
pub fn is_valid_course_code(code: &str) -> bool {
    let code = code.trim();
    !code.is_empty()
        && code.len() <= 12
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
}

impl SchoolEntity for Course {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.code.trim().is_empty() {
            errors.push("code", "Course code is required");
        } else if !is_valid_course_code(&self.code) {
            errors.push(
                "code",
                "Course code may contain upper-case letters, digits and '-' (max 12)",
            );
        }
        ValidationRules::required()
            .with_max_length(120)
            .check_string(&mut errors, "name", "Course name", &self.name);
        ValidationRules::none().with_max_length(1000).check_string(
            &mut errors,
            "description",
            "Description",
            self.description.as_deref().unwrap_or_default(),
        );
        ValidationRules::none()
            .with_range(0.0, 30.0)
            .check_number(&mut errors, "credits", "Credits", self.credits);

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_code_shape() {
        assert!(is_valid_course_code("MATH101"));
        assert!(is_valid_course_code("CS-2"));
        assert!(!is_valid_course_code("math101"));
        assert!(!is_valid_course_code("PHYSICS-ADVANCED-1"));
    }

    #[test]
    fn test_course_validation() {
        let course = Course {
            code: "bio".into(),
            name: String::new(),
            credits: Some(45.0),
            ..Default::default()
        };
        let errors = course.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
