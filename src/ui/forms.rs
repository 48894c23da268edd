use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::error::{RecordError, RecordResult};
use crate::models::{parse_score, Record, RecordUpdate};

/// Form state for adding a student or editing an existing one.
#[derive(Default, Clone)]
pub(crate) struct RecordForm {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) class_name: String,
    pub(crate) active: RecordField,
    pub(crate) error: Option<String>,
    /// Set when editing: the id is shown but cannot be focused or changed.
    pub(crate) id_locked: bool,
}

/// Fields available within the record form.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum RecordField {
    #[default]
    Id,
    Name,
    Class,
}

impl RecordForm {
    /// Seed an edit form with the record's current values.
    pub(crate) fn from_record(record: &Record) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            class_name: record.class_name().to_string(),
            active: RecordField::Name,
            error: None,
            id_locked: true,
        }
    }

    /// Cycle focus forward, skipping the id while it is locked.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            RecordField::Id => RecordField::Name,
            RecordField::Name => RecordField::Class,
            RecordField::Class if self.id_locked => RecordField::Name,
            RecordField::Class => RecordField::Id,
        };
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            RecordField::Id => self.id.push(ch),
            RecordField::Name => self.name.push(ch),
            RecordField::Class => self.class_name.push(ch),
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            RecordField::Id => {
                self.id.pop();
            }
            RecordField::Name => {
                self.name.pop();
            }
            RecordField::Class => {
                self.class_name.pop();
            }
        }
    }

    /// Build a new record from the inputs. Blank fields are rejected here so the
    /// user sees the problem before anything reaches the roster.
    pub(crate) fn to_record(&self) -> RecordResult<Record> {
        Record::new(&self.id, &self.name, &self.class_name)
    }

    /// Partial update for edit mode. Blank fields come through as `Some("")`,
    /// which the roster treats the same as "leave unchanged".
    pub(crate) fn to_update(&self) -> RecordUpdate {
        RecordUpdate {
            name: Some(self.name.clone()),
            class_name: Some(self.class_name.clone()),
        }
    }

    pub(crate) fn build_line(&self, field_name: &str, field: RecordField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let placeholder = if self.id_locked {
            "<keep current>"
        } else {
            "<required>"
        };
        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() || (field == RecordField::Id && self.id_locked) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, field: RecordField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: RecordField) -> &str {
        match field {
            RecordField::Id => &self.id,
            RecordField::Name => &self.name,
            RecordField::Class => &self.class_name,
        }
    }
}

/// Form state for recording a subject score.
#[derive(Default, Clone)]
pub(crate) struct GradeForm {
    pub(crate) subject: String,
    pub(crate) score: String,
    pub(crate) active: GradeField,
    pub(crate) error: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum GradeField {
    #[default]
    Subject,
    Score,
}

impl GradeForm {
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            GradeField::Subject => GradeField::Score,
            GradeField::Score => GradeField::Subject,
        };
    }

    /// Append a character to the active field. The score only takes characters
    /// that can appear in a decimal number.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            GradeField::Subject => {
                if !ch.is_control() {
                    self.subject.push(ch);
                    true
                } else {
                    false
                }
            }
            GradeField::Score => {
                if ch.is_ascii_digit() || ch == '.' || ch == '-' {
                    self.score.push(ch);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            GradeField::Subject => {
                self.subject.pop();
            }
            GradeField::Score => {
                self.score.pop();
            }
        }
    }

    /// Validate the inputs and return the trimmed subject with its score.
    pub(crate) fn parse_inputs(&self) -> RecordResult<(String, f64)> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(RecordError::InvalidInput("Subject"));
        }
        let score = parse_score(&self.score)?;
        Ok((subject.to_string(), score))
    }

    pub(crate) fn build_line(&self, field_name: &str, field: GradeField) -> Line<'static> {
        let (value, placeholder) = match field {
            GradeField::Subject => (&self.subject, "<required>"),
            GradeField::Score => (&self.score, "<0-100>"),
        };
        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };
        let style = if self.active == field {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, field: GradeField) -> usize {
        match field {
            GradeField::Subject => self.subject.chars().count(),
            GradeField::Score => self.score.chars().count(),
        }
    }
}

/// State for the remove-student confirmation dialog.
#[derive(Clone)]
pub(crate) struct ConfirmRemove {
    pub(crate) id: String,
    pub(crate) label: String,
}

impl ConfirmRemove {
    pub(crate) fn for_record(record: &Record) -> Self {
        Self {
            id: record.id().to_string(),
            label: record.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut RecordForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn record_form_builds_trimmed_record() {
        let mut form = RecordForm::default();
        type_text(&mut form, "S1");
        form.toggle_field();
        type_text(&mut form, " Ann ");
        form.toggle_field();
        type_text(&mut form, "10A");

        let record = form.to_record().expect("valid");
        assert_eq!(record.id(), "S1");
        assert_eq!(record.name(), "Ann");
        assert_eq!(record.class_name(), "10A");
    }

    #[test]
    fn record_form_reports_first_blank_field() {
        let mut form = RecordForm::default();
        type_text(&mut form, "S1");
        assert!(matches!(
            form.to_record(),
            Err(RecordError::InvalidInput("Name"))
        ));
    }

    #[test]
    fn edit_form_never_focuses_the_id() {
        let record = Record::new("S1", "Ann", "10A").expect("record");
        let mut form = RecordForm::from_record(&record);
        for _ in 0..5 {
            assert!(form.active != RecordField::Id);
            form.toggle_field();
        }
    }

    #[test]
    fn backspace_edits_the_active_field() {
        let record = Record::new("S1", "Ann", "10A").expect("record");
        let mut form = RecordForm::from_record(&record);
        form.backspace();
        form.backspace();
        form.backspace();
        assert_eq!(form.to_update().name.as_deref(), Some(""));
        assert_eq!(form.to_update().class_name.as_deref(), Some("10A"));
    }

    #[test]
    fn confirm_remove_labels_the_student() {
        let record = Record::new("S1", "Ann", "10A").expect("record");
        let confirm = ConfirmRemove::for_record(&record);
        assert_eq!(confirm.id, "S1");
        assert_eq!(confirm.label, "Ann (S1)");
    }

    #[test]
    fn grade_form_filters_score_characters() {
        let mut form = GradeForm::default();
        form.toggle_field();
        for ch in "8x5.5".chars() {
            form.push_char(ch);
        }
        assert_eq!(form.score, "85.5");
    }

    #[test]
    fn grade_form_validates_subject_then_score() {
        let mut form = GradeForm {
            score: "80".to_string(),
            ..GradeForm::default()
        };
        assert_eq!(
            form.parse_inputs().unwrap_err(),
            RecordError::InvalidInput("Subject")
        );

        form.subject = " Math ".to_string();
        assert_eq!(form.parse_inputs(), Ok(("Math".to_string(), 80.0)));

        form.score = "150".to_string();
        assert_eq!(
            form.parse_inputs().unwrap_err(),
            RecordError::InvalidScore("150".to_string())
        );
    }
}
