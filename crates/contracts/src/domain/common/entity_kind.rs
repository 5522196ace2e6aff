use serde::{Deserialize, Serialize};

/// Entity lists the administration screens can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Student,
    Teacher,
    Parent,
    SchoolClass,
    Course,
    Exam,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Student,
        EntityKind::Teacher,
        EntityKind::Parent,
        EntityKind::SchoolClass,
        EntityKind::Course,
        EntityKind::Exam,
    ];

    /// REST collection segment, `/api/{segment}`
    pub fn api_segment(&self) -> &'static str {
        match self {
            Self::Student => "students",
            Self::Teacher => "teachers",
            Self::Parent => "parents",
            Self::SchoolClass => "classes",
            Self::Course => "courses",
            Self::Exam => "exams",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Student => "Students",
            Self::Teacher => "Teachers",
            Self::Parent => "Parents",
            Self::SchoolClass => "Classes",
            Self::Course => "Courses",
            Self::Exam => "Exams",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Parent => "Parent",
            Self::SchoolClass => "Class",
            Self::Course => "Course",
            Self::Exam => "Exam",
        }
    }

    /// Key used for per-list browser storage (column visibility etc.)
    pub fn storage_key(&self) -> String {
        format!("school_admin_{}_columns", self.api_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_segments_are_unique() {
        let segments: HashSet<_> = EntityKind::ALL.iter().map(|k| k.api_segment()).collect();
        assert_eq!(segments.len(), EntityKind::ALL.len());
    }
}
