//! Mood log collection: date-ascending reads and the one-log-per-date
//! upsert.

use chrono::{NaiveDate, Utc};

use crate::models::document::Document;
use crate::models::mood::MoodLog;

pub struct NewMoodLog {
    pub date: NaiveDate,
    pub mood: String,
    pub mood_score: i32,
    pub energy: i32,
    pub note: Option<String>,
    pub stress: Option<i32>,
}

/// All logs, ascending by date.
pub fn sorted(doc: &Document) -> Vec<MoodLog> {
    let mut logs = doc.mood_logs.clone();
    logs.sort_by_key(|l| l.date);
    logs
}

/// Upsert keyed on `date`: any existing log for that date is dropped before
/// the new one is appended under a freshly allocated id. Logging twice for
/// one date therefore never grows the collection and never reuses the old id.
pub fn upsert(doc: &mut Document, new: NewMoodLog) -> MoodLog {
    doc.mood_logs.retain(|l| l.date != new.date);

    let id = doc.next_mood_id;
    let stress = new.stress.unwrap_or(10 - new.energy);
    let log = MoodLog {
        id,
        date: new.date,
        mood: new.mood,
        mood_score: new.mood_score,
        energy: new.energy,
        note: new.note.unwrap_or_default(),
        stress,
        created_at: Utc::now(),
    };
    doc.mood_logs.push(log.clone());
    doc.next_mood_id = id + 1;
    log
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, mood: &str, energy: i32) -> NewMoodLog {
        NewMoodLog {
            date,
            mood: mood.to_string(),
            mood_score: 6,
            energy,
            note: None,
            stress: None,
        }
    }

    #[test]
    fn test_upsert_replaces_existing_date_with_fresh_id() {
        let mut doc = Document::seed();
        let date = day(2026, 2, 22); // already present in the seed
        let seeded_count = doc.mood_logs.len();

        let first = upsert(&mut doc, entry(date, "😐", 5));
        assert_eq!(doc.mood_logs.len(), seeded_count);
        assert_eq!(first.id, 8);

        let second = upsert(&mut doc, entry(date, "😊", 7));
        assert_eq!(doc.mood_logs.len(), seeded_count);
        assert_eq!(second.id, 9, "replacement allocates a new id");

        let kept: Vec<_> = doc.mood_logs.iter().filter(|l| l.date == date).collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].mood, "😊");
    }

    #[test]
    fn test_upsert_on_new_date_appends() {
        let mut doc = Document::seed();
        let seeded_count = doc.mood_logs.len();
        upsert(&mut doc, entry(day(2026, 2, 23), "😊", 7));
        assert_eq!(doc.mood_logs.len(), seeded_count + 1);
    }

    #[test]
    fn test_stress_defaults_to_ten_minus_energy() {
        let mut doc = Document::seed();
        let log = upsert(&mut doc, entry(day(2026, 2, 23), "😊", 7));
        assert_eq!(log.stress, 3);

        let log = upsert(
            &mut doc,
            NewMoodLog {
                stress: Some(9),
                ..entry(day(2026, 2, 24), "😔", 2)
            },
        );
        assert_eq!(log.stress, 9, "an explicit stress value wins");
    }

    #[test]
    fn test_note_defaults_to_empty() {
        let mut doc = Document::seed();
        let log = upsert(&mut doc, entry(day(2026, 2, 23), "😊", 7));
        assert_eq!(log.note, "");
    }

    #[test]
    fn test_sorted_returns_date_ascending() {
        let mut doc = Document::seed();
        upsert(&mut doc, entry(day(2026, 2, 14), "😌", 6));
        let dates: Vec<_> = sorted(&doc).iter().map(|l| l.date).collect();
        let mut expected = dates.clone();
        expected.sort();
        assert_eq!(dates, expected);
        assert_eq!(dates[0], day(2026, 2, 14));
    }
}
