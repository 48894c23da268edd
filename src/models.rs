//! Domain models passed between the roster and the TUI. A `Record` owns its
//! grades and derives the average and pass status from them on demand, so
//! nothing computed is ever stored next to the scores it came from.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{RecordError, RecordResult};

/// Average at or above which a student passes.
pub const PASS_THRESHOLD: f64 = 75.0;
/// Inclusive bounds for a single subject score.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Outcome of comparing a student's average against [`PASS_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeStatus {
    Pass,
    Fail,
}

impl GradeStatus {
    /// Classify an average. The threshold itself counts as a pass.
    pub fn from_average(average: f64) -> Self {
        if average >= PASS_THRESHOLD {
            GradeStatus::Pass
        } else {
            GradeStatus::Fail
        }
    }
}

impl fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeStatus::Pass => write!(f, "Pass"),
            GradeStatus::Fail => write!(f, "Fail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One student and the scores recorded for them.
pub struct Record {
    /// Externally supplied identifier. Private so it cannot change once the
    /// record sits on a roster that relies on it being unique.
    id: String,
    /// Never blank once set; changed only through the validating setters.
    name: String,
    class_name: String,
    /// Subject → score. Keyed by subject so re-grading overwrites, and ordered
    /// so summaries list subjects alphabetically.
    grades: BTreeMap<String, f64>,
}

impl Record {
    /// Build a record with no grades. Every field is trimmed and must be
    /// non-empty afterwards.
    pub fn new(id: &str, name: &str, class_name: &str) -> RecordResult<Self> {
        Ok(Self {
            id: required(id, "Student ID")?,
            name: required(name, "Name")?,
            class_name: required(class_name, "Class")?,
            grades: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Replace the name. Blank input is rejected and the old name stays.
    pub fn set_name(&mut self, name: &str) -> RecordResult<()> {
        self.name = required(name, "Name")?;
        Ok(())
    }

    pub fn set_class_name(&mut self, class_name: &str) -> RecordResult<()> {
        self.class_name = required(class_name, "Class")?;
        Ok(())
    }

    pub fn grades(&self) -> &BTreeMap<String, f64> {
        &self.grades
    }

    /// Insert or overwrite the score for `subject`. Nothing is written when the
    /// subject is blank or the score falls outside `[0, 100]`.
    pub fn add_or_update_grade(&mut self, subject: &str, score: f64) -> RecordResult<()> {
        let subject = required(subject, "Subject")?;
        if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(RecordError::InvalidScore(score.to_string()));
        }
        self.grades.insert(subject, score);
        Ok(())
    }

    /// Mean of all recorded scores, `0.0` when nothing has been graded yet.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().sum();
        total / self.grades.len() as f64
    }

    pub fn status(&self) -> GradeStatus {
        GradeStatus::from_average(self.average())
    }

    /// Multi-line summary used by the detail pane and the ranking views.
    pub fn describe(&self) -> String {
        let mut lines = vec![
            format!("ID: {}", self.id),
            format!("Name: {}", self.name),
            format!("Class: {}", self.class_name),
            "Subjects:".to_string(),
        ];
        if self.grades.is_empty() {
            lines.push("  (no grades recorded)".to_string());
        } else {
            for (subject, score) in &self.grades {
                lines.push(format!("  - {subject}: {score}"));
            }
        }
        lines.push(format!("Average: {:.2}", self.average()));
        lines.push(format!("Status: {}", self.status()));
        lines.join("\n")
    }
}

impl fmt::Display for Record {
    /// `Name (ID)`, the short form used in list rows and status messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Partial edit for [`Record::name`] and [`Record::class_name`]. A field that is
/// `None` or blank after trimming leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub class_name: Option<String>,
}

impl RecordUpdate {
    /// Apply the present, non-blank fields to `record`.
    pub(crate) fn apply_to(&self, record: &mut Record) {
        if let Some(name) = non_blank(self.name.as_deref()) {
            record.name = name;
        }
        if let Some(class_name) = non_blank(self.class_name.as_deref()) {
            record.class_name = class_name;
        }
    }
}

/// Summary of one class, produced by the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStatistics {
    pub class_name: String,
    pub student_count: usize,
    pub class_average: f64,
    pub pass_count: usize,
    pub fail_count: usize,
}

/// Turn user-typed text into a score. Anything that does not parse as a finite
/// number in range is an [`RecordError::InvalidScore`] carrying the raw text.
pub fn parse_score(raw: &str) -> RecordResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(score) if score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score) => Ok(score),
        _ => Err(RecordError::InvalidScore(trimmed.to_string())),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required(value: &str, field: &'static str) -> RecordResult<String> {
    non_blank(Some(value)).ok_or(RecordError::InvalidInput(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Record {
        Record::new("S1", "Ann", "10A").expect("valid record")
    }

    #[test]
    fn average_of_no_grades_is_zero() {
        let record = ann();
        assert_eq!(record.average(), 0.0);
        assert_eq!(record.status(), GradeStatus::Fail);
    }

    #[test]
    fn average_is_mean_and_regrading_overwrites() {
        let mut record = ann();
        record.add_or_update_grade("Math", 90.0).expect("grade");
        record.add_or_update_grade("Science", 60.0).expect("grade");
        record.add_or_update_grade("Math", 100.0).expect("regrade");

        assert_eq!(record.grades().len(), 2);
        assert_eq!(record.average(), 80.0);
    }

    #[test]
    fn status_boundary_is_inclusive() {
        assert_eq!(GradeStatus::from_average(75.0), GradeStatus::Pass);
        assert_eq!(GradeStatus::from_average(74.999), GradeStatus::Fail);
    }

    #[test]
    fn mixed_scores_reaching_threshold_pass() {
        let mut record = ann();
        record.add_or_update_grade("Math", 80.0).expect("grade");
        record.add_or_update_grade("Sci", 70.0).expect("grade");
        assert_eq!(record.average(), 75.0);
        assert_eq!(record.status(), GradeStatus::Pass);
    }

    #[test]
    fn out_of_range_score_leaves_grades_untouched() {
        let mut record = ann();
        record.add_or_update_grade("Math", 80.0).expect("grade");

        let err = record.add_or_update_grade("Math", 150.0).unwrap_err();
        assert_eq!(err, RecordError::InvalidScore("150".to_string()));
        assert!(record.add_or_update_grade("Art", -1.0).is_err());
        assert!(record.add_or_update_grade("Art", f64::NAN).is_err());

        assert_eq!(record.grades().len(), 1);
        assert_eq!(record.grades().get("Math"), Some(&80.0));
    }

    #[test]
    fn bounds_are_accepted() {
        let mut record = ann();
        record.add_or_update_grade("Low", 0.0).expect("zero");
        record.add_or_update_grade("High", 100.0).expect("hundred");
        assert_eq!(record.average(), 50.0);
    }

    #[test]
    fn blank_subject_is_invalid_input() {
        let mut record = ann();
        let err = record.add_or_update_grade("   ", 80.0).unwrap_err();
        assert_eq!(err, RecordError::InvalidInput("Subject"));
        assert!(record.grades().is_empty());
    }

    #[test]
    fn new_trims_and_rejects_blank_fields() {
        let record = Record::new(" S2 ", "  Budi ", "10B ").expect("valid record");
        assert_eq!(record.id(), "S2");
        assert_eq!(record.name(), "Budi");
        assert_eq!(record.class_name(), "10B");

        assert_eq!(
            Record::new("", "Ann", "10A").unwrap_err(),
            RecordError::InvalidInput("Student ID")
        );
        assert_eq!(
            Record::new("S1", "  ", "10A").unwrap_err(),
            RecordError::InvalidInput("Name")
        );
        assert_eq!(
            Record::new("S1", "Ann", "\t").unwrap_err(),
            RecordError::InvalidInput("Class")
        );
    }

    #[test]
    fn update_ignores_missing_and_blank_fields() {
        let mut record = ann();
        RecordUpdate {
            name: Some("   ".to_string()),
            class_name: None,
        }
        .apply_to(&mut record);
        assert_eq!(record.name(), "Ann");
        assert_eq!(record.class_name(), "10A");

        RecordUpdate {
            name: None,
            class_name: Some(" 11C ".to_string()),
        }
        .apply_to(&mut record);
        assert_eq!(record.name(), "Ann");
        assert_eq!(record.class_name(), "11C");
    }

    #[test]
    fn setters_refuse_blank_values() {
        let mut record = ann();
        assert_eq!(
            record.set_name("").unwrap_err(),
            RecordError::InvalidInput("Name")
        );
        assert_eq!(
            record.set_class_name("   ").unwrap_err(),
            RecordError::InvalidInput("Class")
        );
        assert_eq!(record.name(), "Ann");
        assert_eq!(record.class_name(), "10A");

        record.set_name(" Annisa ").expect("rename");
        record.set_class_name("11A").expect("move");
        assert_eq!(record.name(), "Annisa");
        assert_eq!(record.class_name(), "11A");
    }

    #[test]
    fn describe_lists_everything() {
        let mut record = ann();
        record.add_or_update_grade("Sci", 70.0).expect("grade");
        record.add_or_update_grade("Math", 80.5).expect("grade");

        let summary = record.describe();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID: S1",
                "Name: Ann",
                "Class: 10A",
                "Subjects:",
                "  - Math: 80.5",
                "  - Sci: 70",
                "Average: 75.25",
                "Status: Pass",
            ]
        );
    }

    #[test]
    fn parse_score_rejects_text_and_out_of_range() {
        assert_eq!(parse_score(" 88.5 "), Ok(88.5));
        assert_eq!(parse_score("100"), Ok(100.0));
        assert_eq!(
            parse_score("abc"),
            Err(RecordError::InvalidScore("abc".to_string()))
        );
        assert!(parse_score("100.1").is_err());
        assert!(parse_score("-3").is_err());
        assert!(parse_score("inf").is_err());
        assert!(parse_score("").is_err());
    }
}
