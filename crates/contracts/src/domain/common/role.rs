use super::EntityKind;
use serde::{Deserialize, Serialize};

/// Dashboard role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Teacher,
    Student,
    Parent,
}

/// Mutation a role may perform on an entity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    Create,
    Edit,
    Delete,
}

impl Role {
    pub fn allows(&self, kind: EntityKind, action: RowAction) -> bool {
        match self {
            Role::Admin => true,
            Role::Teacher => {
                matches!(kind, EntityKind::Exam | EntityKind::Course)
                    && matches!(action, RowAction::Create | RowAction::Edit)
            }
            Role::Student | Role::Parent => false,
        }
    }

    /// Row-level actions (edit/delete) available for the entity, in display order.
    /// Empty means the list renders without an actions column.
    pub fn row_actions(&self, kind: EntityKind) -> Vec<RowAction> {
        [RowAction::Edit, RowAction::Delete]
            .into_iter()
            .filter(|action| self.allows(kind, *action))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_every_action() {
        for kind in EntityKind::ALL {
            assert_eq!(
                Role::Admin.row_actions(kind),
                vec![RowAction::Edit, RowAction::Delete]
            );
            assert!(Role::Admin.allows(kind, RowAction::Create));
        }
    }

    #[test]
    fn test_teacher_edits_exams_but_never_deletes() {
        assert_eq!(Role::Teacher.row_actions(EntityKind::Exam), vec![RowAction::Edit]);
        assert!(Role::Teacher.row_actions(EntityKind::Student).is_empty());
        assert!(!Role::Teacher.allows(EntityKind::Course, RowAction::Delete));
    }

    #[test]
    fn test_students_and_parents_are_read_only() {
        for kind in EntityKind::ALL {
            assert!(Role::Student.row_actions(kind).is_empty());
            assert!(!Role::Parent.allows(kind, RowAction::Create));
        }
    }
}
