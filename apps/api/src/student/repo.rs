use serde::Deserialize;

use crate::models::document::Document;
use crate::models::student::Student;

/// Only the four dashboard counters are patchable; identity fields
/// (name, major, ...) are fixed at seed time.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub productivity_score: Option<u32>,
    pub streak_days: Option<u32>,
    pub focus_hours_today: Option<f64>,
    pub total_tasks_done: Option<u32>,
}

pub fn apply_patch(doc: &mut Document, patch: StudentPatch) -> Student {
    let student = &mut doc.student;
    if let Some(v) = patch.productivity_score {
        student.productivity_score = v;
    }
    if let Some(v) = patch.streak_days {
        student.streak_days = v;
    }
    if let Some(v) = patch.focus_hours_today {
        student.focus_hours_today = v;
    }
    if let Some(v) = patch.total_tasks_done {
        student.total_tasks_done = v;
    }
    student.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_changes_only_supplied_counters() {
        let mut doc = Document::seed();
        let updated = apply_patch(
            &mut doc,
            StudentPatch {
                streak_days: Some(13),
                ..Default::default()
            },
        );
        assert_eq!(updated.streak_days, 13);
        assert_eq!(updated.productivity_score, 78);
        assert_eq!(updated.focus_hours_today, 4.5);
        assert_eq!(updated.total_tasks_done, 127);
        assert_eq!(updated.name, "Soham Rathi");
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut doc = Document::seed();
        let before = doc.student.clone();
        let updated = apply_patch(&mut doc, StudentPatch::default());
        assert_eq!(
            serde_json::to_value(&updated).unwrap(),
            serde_json::to_value(&before).unwrap()
        );
    }
}
