use crate::domain::common::{RecordId, SchoolEntity};
use crate::shared::validation::check_email;
use crate::shared::{ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// Parent or guardian of one or more students
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub occupation: Option<String>,
    pub address: Option<String>,
}

impl SchoolEntity for Parent {
    /// Parents are reached by phone first; e-mail is optional.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = ValidationRules::required().with_max_length(100);

        name.check_string(&mut errors, "first_name", "First name", &self.first_name);
        name.check_string(&mut errors, "last_name", "Last name", &self.last_name);
        ValidationRules::required()
            .with_length(5, 20)
            .check_string(&mut errors, "phone", "Phone", &self.phone);
        check_email(
            &mut errors,
            "email",
            self.email.as_deref().unwrap_or_default(),
            false,
        );
        ValidationRules::none().with_max_length(255).check_string(
            &mut errors,
            "address",
            "Address",
            self.address.as_deref().unwrap_or_default(),
        );

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_without_email_is_valid() {
        let parent = Parent {
            first_name: "Mary".into(),
            last_name: "Shelley".into(),
            phone: "+44 20 7946 0000".into(),
            ..Default::default()
        };
        assert!(parent.validate().is_ok());
    }

    #[test]
    fn test_parent_requires_phone() {
        let parent = Parent {
            first_name: "Mary".into(),
            last_name: "Shelley".into(),
            email: Some("mary@home.test".into()),
            ..Default::default()
        };
        assert_eq!(
            parent.validate().unwrap_err().for_field("phone"),
            Some("Phone is required")
        );
    }
}
