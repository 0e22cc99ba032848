//! Assignment collection policies: sort order, id allocation, partial patch.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::models::assignment::{Assignment, Priority};
use crate::models::document::Document;

/// Input for a new assignment after required-field validation.
/// Optional fields fall back to the collection defaults here.
pub struct NewAssignment {
    pub title: String,
    pub deadline: NaiveDate,
    pub subject: Option<String>,
    pub priority: Option<Priority>,
    pub estimated_hours: Option<f64>,
}

/// Partial update: only supplied fields are written, the rest keep their
/// prior values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPatch {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub progress: Option<u32>,
    pub estimated_hours: Option<f64>,
}

/// All assignments, incomplete before completed, then ascending deadline.
pub fn sorted(doc: &Document) -> Vec<Assignment> {
    let mut assignments = doc.assignments.clone();
    assignments.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(a.deadline.cmp(&b.deadline))
    });
    assignments
}

/// Allocates the next id, appends the record, and bumps the counter.
pub fn create(doc: &mut Document, new: NewAssignment) -> Assignment {
    let id = doc.next_assignment_id;
    let assignment = Assignment {
        id,
        title: new.title,
        subject: new.subject.unwrap_or_else(|| "Other".to_string()),
        deadline: new.deadline,
        priority: new.priority.unwrap_or(Priority::Medium),
        completed: false,
        progress: 0,
        estimated_hours: new.estimated_hours.unwrap_or(2.0),
        created_at: Utc::now(),
    };
    doc.assignments.push(assignment.clone());
    doc.next_assignment_id = id + 1;
    assignment
}

/// Applies the patch to the assignment with `id`, returning the updated
/// record, or `None` if the id is unknown.
pub fn apply_patch(doc: &mut Document, id: u64, patch: AssignmentPatch) -> Option<Assignment> {
    let assignment = doc.assignments.iter_mut().find(|a| a.id == id)?;
    if let Some(title) = patch.title {
        assignment.title = title;
    }
    if let Some(subject) = patch.subject {
        assignment.subject = subject;
    }
    if let Some(deadline) = patch.deadline {
        assignment.deadline = deadline;
    }
    if let Some(priority) = patch.priority {
        assignment.priority = priority;
    }
    if let Some(completed) = patch.completed {
        assignment.completed = completed;
    }
    if let Some(progress) = patch.progress {
        assignment.progress = progress;
    }
    if let Some(estimated_hours) = patch.estimated_hours {
        assignment.estimated_hours = estimated_hours;
    }
    Some(assignment.clone())
}

/// Removes the assignment with `id`. Returns false if the id is unknown.
/// The id counter is never decremented, so deleted ids are never reused.
pub fn remove(doc: &mut Document, id: u64) -> bool {
    let before = doc.assignments.len();
    doc.assignments.retain(|a| a.id != id);
    doc.assignments.len() < before
}
