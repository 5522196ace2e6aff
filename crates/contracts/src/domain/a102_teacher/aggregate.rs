use crate::domain::common::{RecordId, SchoolEntity};
use crate::shared::validation::{check_date, check_email};
use crate::shared::{ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// Teaching staff member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teacher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub qualification: Option<String>,
    pub hire_date: Option<String>,
}

impl SchoolEntity for Teacher {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = ValidationRules::required().with_max_length(100);

        name.check_string(&mut errors, "first_name", "First name", &self.first_name);
        name.check_string(&mut errors, "last_name", "Last name", &self.last_name);
        check_email(&mut errors, "email", &self.email, true);
        ValidationRules::none().with_length(5, 20).check_string(
            &mut errors,
            "phone",
            "Phone",
            self.phone.as_deref().unwrap_or_default(),
        );
        ValidationRules::none().with_max_length(100).check_string(
            &mut errors,
            "subject",
            "Subject",
            self.subject.as_deref().unwrap_or_default(),
        );
        check_date(&mut errors, "hire_date", "Hire date", self.hire_date.as_deref(), false);

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_requires_email() {
        let teacher = Teacher {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            ..Default::default()
        };
        let errors = teacher.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("email"), Some("Email is required"));
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let teacher = Teacher {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: "alan@school.test".into(),
            phone: Some("12".into()),
            ..Default::default()
        };
        assert!(teacher.validate().unwrap_err().for_field("phone").is_some());
    }
}
