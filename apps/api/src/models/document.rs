//! The single persistent document: every collection, each paired with its
//! next-id counter, plus the two singletons.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::assignment::{Assignment, Priority};
use crate::models::chat::ChatMessage;
use crate::models::habit::{Habit, HabitLog};
use crate::models::mood::MoodLog;
use crate::models::plan::WeeklyPlan;
use crate::models::student::Student;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub student: Student,
    pub assignments: Vec<Assignment>,
    pub next_assignment_id: u64,
    pub mood_logs: Vec<MoodLog>,
    pub next_mood_id: u64,
    pub habits: Vec<Habit>,
    pub chat_messages: Vec<ChatMessage>,
    pub next_chat_id: u64,
    pub weekly_plan: Option<WeeklyPlan>,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

impl Document {
    /// Fixed first-run dataset. Counters start one past the seed's max id.
    pub fn seed() -> Self {
        let now = chrono::Utc::now();

        let assignment = |id, title: &str, subject: &str, deadline, priority, completed, progress, estimated_hours| Assignment {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            deadline,
            priority,
            completed,
            progress,
            estimated_hours,
            created_at: now,
        };

        let mood = |id, date, mood: &str, mood_score, energy, note: &str, stress| MoodLog {
            id,
            date,
            mood: mood.to_string(),
            mood_score,
            energy,
            note: note.to_string(),
            stress,
            created_at: now,
        };

        let habit = |id, name: &str, icon: &str, unit: &str, target, color: &str, values: [f64; 7]| Habit {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            unit: unit.to_string(),
            target,
            color: color.to_string(),
            logs: values
                .iter()
                .enumerate()
                .map(|(i, &value)| HabitLog {
                    date: day(2026, 2, 16 + i as u32),
                    value,
                })
                .collect(),
        };

        Self {
            student: Student {
                name: "Soham Rathi".to_string(),
                avatar: "SR".to_string(),
                major: "Computer Science".to_string(),
                year: "Sophomore".to_string(),
                university: "MIT".to_string(),
                productivity_score: 78,
                streak_days: 12,
                focus_hours_today: 4.5,
                total_tasks_done: 127,
            },

            assignments: vec![
                assignment(1, "Data Structures Assignment #4", "CS301", day(2026, 2, 24), Priority::High, false, 35, 5.0),
                assignment(2, "Linear Algebra Problem Set", "MATH201", day(2026, 2, 25), Priority::High, false, 60, 3.0),
                assignment(3, "Operating Systems Lab Report", "CS401", day(2026, 2, 28), Priority::Medium, false, 15, 4.0),
                assignment(4, "English Essay – AI Ethics", "ENG102", day(2026, 3, 1), Priority::Medium, false, 80, 2.0),
                assignment(5, "Physics Experiment Write-up", "PHY201", day(2026, 3, 3), Priority::Low, false, 0, 2.0),
                assignment(6, "Database Design Project", "CS302", day(2026, 2, 20), Priority::High, true, 100, 8.0),
                assignment(7, "Calculus Quiz Prep", "MATH101", day(2026, 2, 19), Priority::Medium, true, 100, 2.0),
            ],
            next_assignment_id: 8,

            mood_logs: vec![
                mood(1, day(2026, 2, 16), "😊", 8, 7, "Great day! Finished DS assignment and felt motivated.", 3),
                mood(2, day(2026, 2, 17), "😐", 5, 5, "Feeling a bit overwhelmed with multiple deadlines.", 7),
                mood(3, day(2026, 2, 18), "😔", 3, 4, "Didn't sleep well. Struggling to focus.", 8),
                mood(4, day(2026, 2, 19), "😊", 7, 8, "Finished the Calculus quiz prep. Feeling better!", 4),
                mood(5, day(2026, 2, 20), "🤩", 9, 9, "Submitted DB project. Relief! Had a productive gym session.", 2),
                mood(6, day(2026, 2, 21), "😌", 6, 6, "Weekend. Rested and reviewed notes lightly.", 3),
                mood(7, day(2026, 2, 22), "😊", 7, 7, "New week starts. Feeling motivated and ready.", 4),
            ],
            next_mood_id: 8,

            habits: vec![
                habit(1, "Study", "📚", "hours", 6.0, "#3b82f6", [4.0, 6.0, 3.0, 7.0, 5.0, 2.0, 4.5]),
                habit(2, "Exercise", "🏃", "hours", 1.0, "#10b981", [1.0, 0.5, 1.5, 1.0, 0.0, 2.0, 1.0]),
                habit(3, "Sleep", "😴", "hours", 8.0, "#8b5cf6", [7.0, 6.5, 6.0, 7.5, 7.0, 8.5, 7.5]),
                habit(4, "Breaks", "☕", "taken", 4.0, "#f59e0b", [3.0, 5.0, 2.0, 4.0, 4.0, 6.0, 3.0]),
            ],

            chat_messages: vec![ChatMessage::welcome()],
            next_chat_id: 2,

            weekly_plan: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counters_start_past_max_seed_id() {
        let doc = Document::seed();
        let max_assignment = doc.assignments.iter().map(|a| a.id).max().unwrap();
        let max_mood = doc.mood_logs.iter().map(|l| l.id).max().unwrap();
        let max_chat = doc.chat_messages.iter().map(|m| m.id).max().unwrap();
        assert!(doc.next_assignment_id > max_assignment);
        assert!(doc.next_mood_id > max_mood);
        assert!(doc.next_chat_id > max_chat);
    }

    #[test]
    fn test_seed_has_one_mood_log_per_date() {
        let doc = Document::seed();
        let mut dates: Vec<_> = doc.mood_logs.iter().map(|l| l.date).collect();
        dates.sort();
        dates.dedup();
        assert_eq!(dates.len(), doc.mood_logs.len());
    }

    #[test]
    fn test_seed_habits_each_carry_a_week_of_logs() {
        let doc = Document::seed();
        assert_eq!(doc.habits.len(), 4);
        for habit in &doc.habits {
            assert_eq!(habit.logs.len(), 7);
        }
    }

    #[test]
    fn test_seed_round_trips_through_json() {
        let doc = Document::seed();
        let raw = serde_json::to_string(&doc).unwrap();
        let parsed: Document = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.assignments.len(), doc.assignments.len());
        assert_eq!(parsed.next_assignment_id, doc.next_assignment_id);
        assert!(parsed.weekly_plan.is_none());
    }

    #[test]
    fn test_document_uses_camel_case_keys_on_the_wire() {
        let value = serde_json::to_value(Document::seed()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("nextAssignmentId"));
        assert!(obj.contains_key("moodLogs"));
        assert!(obj.contains_key("chatMessages"));
        assert!(obj.contains_key("weeklyPlan"));
        assert!(obj["student"].as_object().unwrap().contains_key("focusHoursToday"));
    }
}
