use crate::domain::common::{RecordId, SchoolEntity};
use crate::shared::validation::{check_date, check_email, check_one_of};
use crate::shared::{ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};

pub const GENDERS: [&str; 3] = ["male", "female", "other"];

/// Enrolled student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub admission_no: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub class_name: Option<String>,
    pub address: Option<String>,
}

impl SchoolEntity for Student {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = ValidationRules::required().with_max_length(100);

        name.check_string(&mut errors, "first_name", "First name", &self.first_name);
        name.check_string(&mut errors, "last_name", "Last name", &self.last_name);
        check_email(&mut errors, "email", &self.email, true);
        ValidationRules::none().with_max_length(30).check_string(
            &mut errors,
            "admission_no",
            "Admission number",
            self.admission_no.as_deref().unwrap_or_default(),
        );
        ValidationRules::none().with_length(5, 20).check_string(
            &mut errors,
            "phone",
            "Phone",
            self.phone.as_deref().unwrap_or_default(),
        );
        check_one_of(&mut errors, "gender", "Gender", self.gender.as_deref(), &GENDERS);
        check_date(
            &mut errors,
            "date_of_birth",
            "Date of birth",
            self.date_of_birth.as_deref(),
            false,
        );

        errors.into_result()
    }
}
