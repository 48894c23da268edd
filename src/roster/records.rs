use tracing::{debug, info, warn};

use super::Roster;
use crate::error::{RecordError, RecordResult};
use crate::models::{Record, RecordUpdate};

impl Roster {
    /// Append a record. A duplicate id is rejected and the roster is left as it
    /// was.
    pub fn add(&mut self, record: Record) -> RecordResult<()> {
        if self.find(record.id()).is_some() {
            warn!(id = record.id(), "rejected duplicate student id");
            return Err(RecordError::DuplicateId(record.id().to_string()));
        }
        info!(id = record.id(), name = record.name(), "added student");
        self.records.push(record);
        Ok(())
    }

    /// Index of the record with this id. Lookup ids are trimmed the same way
    /// `Record::new` trims them.
    pub fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        let index = self.records.iter().position(|record| record.id() == id);
        debug!(id, found = index.is_some(), "student lookup");
        index
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.position(id).map(|index| &self.records[index])
    }

    /// Mutable lookup. Changes made through the returned reference land on the
    /// roster's own copy.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Record> {
        let index = self.position(id)?;
        self.records.get_mut(index)
    }

    /// Take the record out of the roster and hand it back to the caller.
    pub fn remove(&mut self, id: &str) -> RecordResult<Record> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        let record = self.records.remove(index);
        info!(id = record.id(), "removed student");
        Ok(record)
    }

    /// Apply the supplied fields. Succeeds whenever the record exists, even if
    /// nothing actually changed.
    pub fn update(&mut self, id: &str, update: &RecordUpdate) -> RecordResult<()> {
        let record = self.find_mut(id).ok_or_else(|| not_found(id))?;
        update.apply_to(record);
        info!(
            id = record.id(),
            name = record.name(),
            class = record.class_name(),
            "updated student"
        );
        Ok(())
    }

    pub fn add_grade(&mut self, id: &str, subject: &str, score: f64) -> RecordResult<()> {
        let record = self.find_mut(id).ok_or_else(|| not_found(id))?;
        if let Err(err) = record.add_or_update_grade(subject, score) {
            warn!(id = record.id(), subject, score, "rejected grade");
            return Err(err);
        }
        info!(id = record.id(), subject = subject.trim(), score, "recorded grade");
        Ok(())
    }
}

fn not_found(id: &str) -> RecordError {
    let id = id.trim();
    warn!(id, "student not found");
    RecordError::NotFound(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(ids: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for id in ids {
            let record = Record::new(id, &format!("Student {id}"), "10A").expect("record");
            roster.add(record).expect("add");
        }
        roster
    }

    #[test]
    fn add_keeps_insertion_order() {
        let roster = roster_with(&["S3", "S1", "S2"]);
        let ids: Vec<&str> = roster.all().iter().map(Record::id).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn duplicate_add_is_rejected_without_mutation() {
        let mut roster = roster_with(&["S1"]);
        let clash = Record::new("S1", "Someone Else", "12Z").expect("record");

        let err = roster.add(clash).unwrap_err();
        assert_eq!(err, RecordError::DuplicateId("S1".to_string()));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.all()[0].name(), "Student S1");
    }

    #[test]
    fn find_matches_exact_id_only() {
        let roster = roster_with(&["S1", "S10"]);
        assert_eq!(roster.find("S10").map(Record::id), Some("S10"));
        assert!(roster.find("s1").is_none());
        assert!(roster.find("S").is_none());
    }

    #[test]
    fn remove_hands_back_the_record() {
        let mut roster = roster_with(&["S1", "S2", "S3"]);
        let removed = roster.remove("S2").expect("remove");
        assert_eq!(removed.id(), "S2");
        assert_eq!(roster.len(), 2);
        assert!(roster.find("S2").is_none());
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut roster = roster_with(&["S1"]);
        assert_eq!(
            roster.remove("nope").unwrap_err(),
            RecordError::NotFound("nope".to_string())
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let mut roster = roster_with(&["S1"]);
        let update = RecordUpdate {
            name: Some("Ann".to_string()),
            class_name: Some(String::new()),
        };
        roster.update("S1", &update).expect("update");

        let record = roster.find("S1").expect("present");
        assert_eq!(record.name(), "Ann");
        assert_eq!(record.class_name(), "10A");
    }

    #[test]
    fn update_with_no_changes_still_succeeds() {
        let mut roster = roster_with(&["S1"]);
        assert!(roster.update("S1", &RecordUpdate::default()).is_ok());
        assert_eq!(
            roster.update("S9", &RecordUpdate::default()).unwrap_err(),
            RecordError::NotFound("S9".to_string())
        );
    }

    #[test]
    fn add_grade_reports_missing_student_and_bad_score() {
        let mut roster = roster_with(&["S1"]);
        roster.add_grade("S1", "Math", 80.0).expect("grade");

        assert!(matches!(
            roster.add_grade("S2", "Math", 80.0),
            Err(RecordError::NotFound(_))
        ));
        assert!(matches!(
            roster.add_grade("S1", "Math", 150.0),
            Err(RecordError::InvalidScore(_))
        ));
        assert_eq!(roster.find("S1").expect("present").grades().get("Math"), Some(&80.0));
    }

    #[test]
    fn padded_ids_resolve_like_the_stored_id() {
        let mut roster = Roster::new();
        roster
            .add(Record::new("S1 ", "Ann", "10A").expect("record"))
            .expect("add");

        assert_eq!(
            roster.add(Record::new(" S1", "Budi", "10B").expect("record")),
            Err(RecordError::DuplicateId("S1".to_string()))
        );
        assert_eq!(roster.position(" S1 "), Some(0));
        assert_eq!(roster.find("S1 ").map(Record::id), Some("S1"));
        roster.add_grade(" S1", "Math", 90.0).expect("grade");
        let rename = RecordUpdate {
            name: Some("Annisa".to_string()),
            class_name: None,
        };
        roster.update("S1\t", &rename).expect("update");
        assert_eq!(roster.find("S1").expect("present").name(), "Annisa");

        let removed = roster.remove("  S1 ").expect("remove");
        assert_eq!(removed.average(), 90.0);
        assert!(roster.is_empty());
        assert_eq!(
            roster.remove(" S1 ").unwrap_err(),
            RecordError::NotFound("S1".to_string())
        );
    }

    #[test]
    fn find_mut_changes_the_roster_copy() {
        let mut roster = roster_with(&["S1"]);
        roster
            .find_mut("S1")
            .expect("present")
            .add_or_update_grade("Art", 95.0)
            .expect("grade");
        assert_eq!(roster.find("S1").expect("present").average(), 95.0);
    }
}
