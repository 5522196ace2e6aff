use crate::domain::common::{RecordId, SchoolEntity};
use crate::shared::{ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// A class (grade + section) students are enrolled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolClass {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub section: Option<String>,
    pub capacity: Option<f64>,
    pub class_teacher: Option<String>,
    pub room: Option<String>,
}

impl SchoolEntity for SchoolClass {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        ValidationRules::required()
            .with_max_length(50)
            .check_string(&mut errors, "name", "Class name", &self.name);
        ValidationRules::none().with_max_length(10).check_string(
            &mut errors,
            "section",
            "Section",
            self.section.as_deref().unwrap_or_default(),
        );
        ValidationRules::none()
            .with_range(1.0, 200.0)
            .check_number(&mut errors, "capacity", "Capacity", self.capacity);
        if self.capacity.is_some_and(|c| c.fract() != 0.0) {
            errors.push("capacity", "Capacity must be a whole number");
        }

        errors.into_result()
    }
}
