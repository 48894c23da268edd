use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::AppConfig;
use crate::error::RecordResult;
use crate::models::Record;
use crate::roster::Roster;

use super::forms::{ConfirmRemove, GradeField, GradeForm, RecordField, RecordForm};
use super::helpers::{centered_rect, describe_lines, record_row, status_style};
use super::screens::{ClassScreen, RankingScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Share of the width given to list panes; the rest shows details.
const LIST_PERCENT: u16 = 55;

/// High-level navigation states.
enum Screen {
    Records,
    Ranking(RankingScreen),
    Classes(ClassScreen),
}

/// Modal states layered on top of the current screen.
enum Mode {
    Normal,
    AddingRecord(RecordForm),
    EditingRecord { id: String, form: RecordForm },
    AddingGrade { id: String, form: GradeForm },
    ConfirmRemove(ConfirmRemove),
    Finding(FindState),
}

/// Inline "find by id" prompt.
struct FindState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. The roster lives here and nowhere else.
pub struct App {
    roster: Roster,
    config: AppConfig,
    selected: usize,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(roster: Roster, config: AppConfig) -> Self {
        Self {
            roster,
            config,
            selected: 0,
            screen: Screen::Records,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Record under the cursor on the main list.
    pub fn selected_record(&self) -> Option<&Record> {
        self.roster.all().get(self.selected)
    }

    /// Latest footer message, if any.
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Route a key press to the active mode. Returns `true` when the user asked
    /// to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::AddingRecord(form) => self.handle_add_record(code, form),
            Mode::EditingRecord { id, form } => self.handle_edit_record(code, id, form),
            Mode::AddingGrade { id, form } => self.handle_add_grade(code, id, form),
            Mode::ConfirmRemove(confirm) => self.handle_confirm_remove(code, confirm),
            Mode::Finding(state) => self.handle_find(code, state),
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match self.screen {
            Screen::Records => match code {
                KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                KeyCode::PageUp => self.move_selection(-5),
                KeyCode::PageDown => self.move_selection(5),
                KeyCode::Home => self.selected = 0,
                KeyCode::End => self.selected = self.roster.len().saturating_sub(1),
                KeyCode::Char('+') | KeyCode::Char('a') => {
                    self.clear_status();
                    return Mode::AddingRecord(RecordForm::default());
                }
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    if let Some(record) = self.selected_record() {
                        let mode = Mode::EditingRecord {
                            id: record.id().to_string(),
                            form: RecordForm::from_record(record),
                        };
                        self.clear_status();
                        return mode;
                    }
                    self.set_status("No student selected to edit.", StatusKind::Error);
                }
                KeyCode::Char('g') | KeyCode::Char('G') => {
                    if let Some(record) = self.selected_record() {
                        let mode = Mode::AddingGrade {
                            id: record.id().to_string(),
                            form: GradeForm::default(),
                        };
                        self.clear_status();
                        return mode;
                    }
                    self.set_status("No student selected to grade.", StatusKind::Error);
                }
                KeyCode::Char('-') | KeyCode::Delete => {
                    if let Some(record) = self.selected_record() {
                        let confirm = ConfirmRemove::for_record(record);
                        self.clear_status();
                        return Mode::ConfirmRemove(confirm);
                    }
                    self.set_status("No student selected to remove.", StatusKind::Error);
                }
                KeyCode::Char('f') | KeyCode::Char('/') => {
                    return Mode::Finding(FindState {
                        query: String::new(),
                    });
                }
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    self.clear_status();
                    self.screen = Screen::Ranking(RankingScreen::new(self.config.top_n));
                }
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    self.clear_status();
                    self.screen = Screen::Classes(ClassScreen::new(&self.roster));
                }
                _ => {}
            },
            Screen::Ranking(ref mut ranking) => match code {
                KeyCode::Char('q') => *exit = true,
                KeyCode::Esc | KeyCode::Char('t') | KeyCode::Char('T') => {
                    self.screen = Screen::Records;
                }
                KeyCode::Up => ranking.move_selection(-1, &self.roster),
                KeyCode::Down => ranking.move_selection(1, &self.roster),
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    self.screen = Screen::Classes(ClassScreen::new(&self.roster));
                }
                _ => {}
            },
            Screen::Classes(ref mut classes) => match code {
                KeyCode::Char('q') => *exit = true,
                KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => {
                    self.screen = Screen::Records;
                }
                KeyCode::Up => classes.move_selection(-1),
                KeyCode::Down => classes.move_selection(1),
                KeyCode::PageUp => classes.move_selection(-5),
                KeyCode::PageDown => classes.move_selection(5),
                KeyCode::Home => classes.select_first(),
                KeyCode::End => classes.select_last(),
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    self.screen = Screen::Ranking(RankingScreen::new(self.config.top_n));
                }
                _ => {}
            },
        }
        Mode::Normal
    }

    fn handle_add_record(&mut self, code: KeyCode, mut form: RecordForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add student cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_record(&form) {
                Ok(()) => return Mode::Normal,
                Err(message) => form.error = Some(message),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::AddingRecord(form)
    }

    fn handle_edit_record(&mut self, code: KeyCode, id: String, mut form: RecordForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let result = self.roster.update(&id, &form.to_update());
                match self.report(result) {
                    Ok(()) => {
                        let label = self
                            .roster
                            .find(&id)
                            .map(Record::to_string)
                            .unwrap_or_else(|| id.clone());
                        self.set_status(format!("Updated {label}."), StatusKind::Info);
                        return Mode::Normal;
                    }
                    Err(message) => form.error = Some(message),
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::EditingRecord { id, form }
    }

    fn handle_add_grade(&mut self, code: KeyCode, id: String, mut form: GradeForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Grade entry cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let result = form
                    .parse_inputs()
                    .and_then(|(subject, score)| {
                        self.roster.add_grade(&id, &subject, score)?;
                        Ok((subject, score))
                    });
                match self.report(result) {
                    Ok((subject, score)) => {
                        self.set_status(
                            format!("Recorded {subject}: {score} for {id}."),
                            StatusKind::Info,
                        );
                        return Mode::Normal;
                    }
                    Err(message) => form.error = Some(message),
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::AddingGrade { id, form }
    }

    fn handle_confirm_remove(&mut self, code: KeyCode, confirm: ConfirmRemove) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                let result = self.roster.remove(&confirm.id);
                match self.report(result) {
                    Ok(record) => {
                        self.clamp_selection();
                        self.set_status(format!("Removed {record}."), StatusKind::Info);
                        Mode::Normal
                    }
                    Err(_) => Mode::Normal,
                }
            }
            _ => Mode::ConfirmRemove(confirm),
        }
    }

    fn handle_find(&mut self, code: KeyCode, mut state: FindState) -> Mode {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                return Mode::Normal;
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Enter => {
                let query = state.query.trim();
                if query.is_empty() {
                    return Mode::Normal;
                }
                match self.roster.position(query) {
                    Some(index) => {
                        self.selected = index;
                        self.screen = Screen::Records;
                        let label = self.roster.all()[index].to_string();
                        self.set_status(format!("Found {label}."), StatusKind::Info);
                    }
                    None => {
                        self.set_status(format!("Student {query} not found."), StatusKind::Error);
                    }
                }
                return Mode::Normal;
            }
            KeyCode::Char(ch) if !ch.is_control() => state.query.push(ch),
            _ => {}
        }
        Mode::Finding(state)
    }

    fn save_new_record(&mut self, form: &RecordForm) -> Result<(), String> {
        let result = form.to_record().and_then(|record| {
            let label = record.to_string();
            self.roster.add(record)?;
            Ok(label)
        });
        let label = self.report(result)?;
        self.selected = self.roster.len().saturating_sub(1);
        self.set_status(format!("Added {label}."), StatusKind::Info);
        Ok(())
    }

    /// Mirror a core error into the footer and hand its message back so the
    /// open form can show it too.
    fn report<T>(&mut self, result: RecordResult<T>) -> Result<T, String> {
        result.map_err(|err| {
            let message = err.to_string();
            self.set_status(message.clone(), StatusKind::Error);
            message
        })
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Records => self.draw_records(frame, content_area),
            Screen::Ranking(ranking) => self.draw_ranking(frame, content_area, ranking),
            Screen::Classes(classes) => self.draw_classes(frame, content_area, classes),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingRecord(form) => self.draw_record_form(frame, area, "Add Student", form),
            Mode::EditingRecord { form, .. } => {
                self.draw_record_form(frame, area, "Edit Student", form)
            }
            Mode::AddingGrade { id, form } => self.draw_grade_form(frame, area, id, form),
            Mode::ConfirmRemove(confirm) => self.draw_confirm_remove(frame, area, confirm),
            Mode::Finding(state) => self.draw_find_bar(frame, area, state),
            Mode::Normal => {}
        }
    }

    fn draw_records(&self, frame: &mut Frame, area: Rect) {
        if self.roster.is_empty() {
            let message = Paragraph::new("No students yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Students"));
            frame.render_widget(message, area);
            return;
        }

        let (list_area, detail_area) = split_panes(area);
        let items: Vec<ListItem> = self
            .roster
            .all()
            .iter()
            .map(|record| ListItem::new(record_row(record)))
            .collect();
        let title = format!("Students ({})", self.roster.len());
        self.render_list(frame, list_area, items, &title, self.selected);
        self.draw_detail(frame, detail_area, self.selected_record());
    }

    fn draw_ranking(&self, frame: &mut Frame, area: Rect, ranking: &RankingScreen) {
        let ranked = self.roster.top_n(ranking.limit);
        let title = format!("Top {} Students", ranking.limit);
        if ranked.is_empty() {
            let message = Paragraph::new("No students to rank yet.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(message, area);
            return;
        }

        let (list_area, detail_area) = split_panes(area);
        let items: Vec<ListItem> = ranked
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let mut row = record_row(record);
                row.spans.insert(0, Span::raw(format!("#{:<3}", idx + 1)));
                ListItem::new(row)
            })
            .collect();
        self.render_list(frame, list_area, items, &title, ranking.selected);
        self.draw_detail(frame, detail_area, ranked.get(ranking.selected).copied());
    }

    fn draw_classes(&self, frame: &mut Frame, area: Rect, classes: &ClassScreen) {
        if classes.classes.is_empty() {
            let message = Paragraph::new("No classes yet. Add a student first.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Classes"));
            frame.render_widget(message, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(area);

        let items: Vec<ListItem> = classes
            .classes
            .iter()
            .map(|class_name| ListItem::new(class_name.clone()))
            .collect();
        self.render_list(frame, chunks[0], items, "Classes", classes.selected);

        let Some(class_name) = classes.current_class() else {
            return;
        };
        let stats = self.roster.class_statistics(class_name);
        let mut lines = vec![
            Line::from(vec![
                Span::raw("Students: "),
                Span::styled(
                    stats.student_count.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Class average: {:.2}", stats.class_average)),
            Line::from(vec![
                Span::raw("Passed: "),
                Span::styled(stats.pass_count.to_string(), Style::default().fg(Color::Green)),
                Span::raw("   Failed: "),
                Span::styled(stats.fail_count.to_string(), Style::default().fg(Color::Red)),
            ]),
            Line::from(""),
        ];
        lines.extend(self.roster.by_class(class_name).into_iter().map(record_row));

        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Class {}", stats.class_name)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(panel, chunks[1]);
    }

    fn render_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        items: Vec<ListItem<'static>>,
        title: &str,
        selected: usize,
    ) {
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, record: Option<&Record>) {
        let lines = record.map(describe_lines).unwrap_or_default();
        let detail = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Details"))
            .wrap(Wrap { trim: false });
        frame.render_widget(detail, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::AddingRecord(_))
            | (_, Mode::EditingRecord { .. })
            | (_, Mode::AddingGrade { .. }) => {
                &[("[Enter]", "Save"), ("[Tab]", "Next Field"), ("[Esc]", "Cancel")]
            }
            (_, Mode::ConfirmRemove(_)) => &[("[Y]", "Remove"), ("[N/Esc]", "Keep")],
            (_, Mode::Finding(_)) => &[("[Enter]", "Find"), ("[Esc]", "Cancel")],
            (Screen::Records, Mode::Normal) => &[
                ("[↑↓]", "Navigate"),
                ("[+]", "Add"),
                ("[E]", "Edit"),
                ("[G]", "Grade"),
                ("[-]", "Remove"),
                ("[F]", "Find"),
                ("[T]", "Top"),
                ("[C]", "Classes"),
                ("[Q]", "Quit"),
            ],
            (Screen::Ranking(_), Mode::Normal) => &[
                ("[↑↓]", "Navigate"),
                ("[C]", "Classes"),
                ("[Esc]", "Back"),
                ("[Q]", "Quit"),
            ],
            (Screen::Classes(_), Mode::Normal) => &[
                ("[↑↓]", "Navigate"),
                ("[T]", "Top"),
                ("[Esc]", "Back"),
                ("[Q]", "Quit"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (idx, (key, label)) in hints.iter().enumerate() {
            spans.push(Span::styled(key.to_string(), key_style));
            let separator = if idx + 1 < hints.len() { "   " } else { "" };
            spans.push(Span::raw(format!(" {label}{separator}")));
        }
        Line::from(spans)
    }

    fn draw_record_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &RecordForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line("ID", RecordField::Id),
            form.build_line("Name", RecordField::Name),
            form.build_line("Class", RecordField::Class),
            Line::from(""),
        ];
        lines.push(form_hint(form.error.as_deref()));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            RecordField::Id => ("ID: ", 0),
            RecordField::Name => ("Name: ", 1),
            RecordField::Class => ("Class: ", 2),
        };
        frame.set_cursor_position((
            inner.x + prefix.len() as u16 + form.value_len(form.active) as u16,
            inner.y + row,
        ));
    }

    fn draw_grade_form(&self, frame: &mut Frame, area: Rect, id: &str, form: &GradeForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let label = self
            .roster
            .find(id)
            .map(Record::to_string)
            .unwrap_or_else(|| id.to_string());
        let block = Block::default()
            .title(format!("Grade {label}"))
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line("Subject", GradeField::Subject),
            form.build_line("Score", GradeField::Score),
            Line::from(""),
        ];
        lines.push(form_hint(form.error.as_deref()));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            GradeField::Subject => ("Subject: ", 0),
            GradeField::Score => ("Score: ", 1),
        };
        frame.set_cursor_position((
            inner.x + prefix.len() as u16 + form.value_len(form.active) as u16,
            inner.y + row,
        ));
    }

    fn draw_confirm_remove(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmRemove) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Removal")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![Line::from(format!("Remove {}?", confirm.label))];
        if let Some(record) = self.roster.find(&confirm.id) {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} grade(s) recorded, average {:.2} ({}).",
                    record.grades().len(),
                    record.average(),
                    record.status()
                ),
                status_style(record.status()),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Y to confirm or N / Esc to cancel.",
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_find_bar(&self, frame: &mut Frame, area: Rect, state: &FindState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Find Student");
        let paragraph = Paragraph::new(Span::raw(format!("ID: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "ID: ".len() as u16 + state.query.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn move_selection(&mut self, offset: isize) {
        if self.roster.is_empty() {
            return;
        }
        let max = self.roster.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, max) as usize;
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.roster.len() {
            self.selected = self.roster.len().saturating_sub(1);
        }
    }
}

/// Split a content area into a list pane and a detail pane.
fn split_panes(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_PERCENT),
            Constraint::Percentage(100 - LIST_PERCENT),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Error text when the form has one, otherwise the key reminder.
fn form_hint(error: Option<&str>) -> Line<'static> {
    match error {
        Some(error) => Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "Enter to save • Tab to switch • Esc to cancel",
            Style::default().fg(Color::Gray),
        )),
    }
}
