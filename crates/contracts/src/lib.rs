//! Types shared between the school administration frontend and its REST API.
//!
//! - `domain`: entity aggregates (students, teachers, parents, classes, courses, exams),
//!   identifiers, roles and row action permissions
//! - `shared`: the opaque `Record`, pagination envelope, normalized API outcome and
//!   field validation helpers

pub mod domain;
pub mod shared;
