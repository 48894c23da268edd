use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{GradeStatus, Record};

/// Colour used wherever a pass/fail status is shown.
pub(crate) fn status_style(status: GradeStatus) -> Style {
    match status {
        GradeStatus::Pass => Style::default().fg(Color::Green),
        GradeStatus::Fail => Style::default().fg(Color::Red),
    }
}

/// One list row: id, name, class, average and a coloured status.
pub(crate) fn record_row(record: &Record) -> Line<'static> {
    let status = record.status();
    Line::from(vec![
        Span::styled(
            format!("{:<8}", record.id()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{:<20} ", record.name())),
        Span::styled(
            format!("{:<6} ", record.class_name()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(format!("{:>6.2} ", record.average())),
        Span::styled(status.to_string(), status_style(status)),
    ])
}

/// Split a summary produced by [`Record::describe`] into lines, colouring the
/// status line.
pub(crate) fn describe_lines(record: &Record) -> Vec<Line<'static>> {
    let status = record.status();
    record
        .describe()
        .lines()
        .map(|line| {
            if line.starts_with("Status: ") {
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled(status.to_string(), status_style(status)),
                ])
            } else {
                Line::from(line.to_string())
            }
        })
        .collect()
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn describe_lines_follow_the_summary() {
        let mut record = Record::new("S1", "Ann", "10A").expect("record");
        record.add_or_update_grade("Math", 90.0).expect("grade");

        let lines = describe_lines(&record);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts.first().map(String::as_str), Some("ID: S1"));
        assert_eq!(texts.last().map(String::as_str), Some("Status: Pass"));
        assert_eq!(lines.last().expect("status").spans[1].style, status_style(GradeStatus::Pass));
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert!(popup.x >= 19 && popup.y >= 14);
    }
}
