use crate::domain::common::{RecordId, SchoolEntity};
use crate::shared::validation::{check_date, check_one_of};
use crate::shared::{ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};

pub const EXAM_STATUSES: [&str; 3] = ["scheduled", "completed", "cancelled"];

/// Scheduled exam of a course for a class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub course_name: Option<String>,
    pub class_name: Option<String>,
    pub exam_date: Option<String>,
    pub total_marks: Option<f64>,
    pub passing_marks: Option<f64>,
    pub status: Option<String>,
}

impl SchoolEntity for Exam {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        ValidationRules::required()
            .with_max_length(150)
            .check_string(&mut errors, "title", "Title", &self.title);
        check_date(&mut errors, "exam_date", "Exam date", self.exam_date.as_deref(), true);
        ValidationRules::required()
            .with_range(1.0, 1000.0)
            .check_number(&mut errors, "total_marks", "Total marks", self.total_marks);
        ValidationRules::none().with_range(0.0, 1000.0).check_number(
            &mut errors,
            "passing_marks",
            "Passing marks",
            self.passing_marks,
        );
        if let (Some(total), Some(passing)) = (self.total_marks, self.passing_marks) {
            if passing > total {
                errors.push("passing_marks", "Passing marks cannot exceed total marks");
            }
        }
        check_one_of(&mut errors, "status", "Status", self.status.as_deref(), &EXAM_STATUSES);

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam() -> Exam {
        Exam {
            title: "Algebra midterm".into(),
            exam_date: Some("2025-03-14".into()),
            total_marks: Some(100.0),
            passing_marks: Some(40.0),
            status: Some("scheduled".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_exam() {
        assert!(exam().validate().is_ok());
    }

    #[test]
    fn test_passing_marks_cannot_exceed_total() {
        let exam = Exam {
            passing_marks: Some(120.0),
            ..exam()
        };
        assert_eq!(
            exam.validate().unwrap_err().for_field("passing_marks"),
            Some("Passing marks cannot exceed total marks")
        );
    }

    #[test]
    fn test_exam_date_is_required() {
        let exam = Exam {
            exam_date: None,
            ..exam()
        };
        assert!(exam.validate().unwrap_err().for_field("exam_date").is_some());
    }
}
