use crate::roster::Roster;

/// Clamp `selected + offset` into `0..len`.
fn step_selection(selected: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len as isize - 1;
    (selected as isize + offset).clamp(0, max) as usize
}

/// State for the "Top students" ranking. The ranking itself is recomputed from
/// the roster on every draw, so only the cursor lives here.
pub(crate) struct RankingScreen {
    pub(crate) limit: usize,
    pub(crate) selected: usize,
}

impl RankingScreen {
    pub(crate) fn new(limit: usize) -> Self {
        Self { limit, selected: 0 }
    }

    pub(crate) fn move_selection(&mut self, offset: isize, roster: &Roster) {
        let len = roster.len().min(self.limit);
        self.selected = step_selection(self.selected, offset, len);
    }
}

/// State for the class statistics screen: the known classes and which one is
/// highlighted.
pub(crate) struct ClassScreen {
    pub(crate) classes: Vec<String>,
    pub(crate) selected: usize,
}

impl ClassScreen {
    pub(crate) fn new(roster: &Roster) -> Self {
        Self {
            classes: roster.class_names(),
            selected: 0,
        }
    }

    pub(crate) fn current_class(&self) -> Option<&str> {
        self.classes.get(self.selected).map(String::as_str)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        self.selected = step_selection(self.selected, offset, self.classes.len());
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.classes.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn roster(classes: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for (idx, class_name) in classes.iter().enumerate() {
            let id = format!("S{idx}");
            roster
                .add(Record::new(&id, "Student", class_name).expect("record"))
                .expect("add");
        }
        roster
    }

    #[test]
    fn selection_is_clamped() {
        assert_eq!(step_selection(0, -1, 3), 0);
        assert_eq!(step_selection(1, 5, 3), 2);
        assert_eq!(step_selection(4, 1, 0), 0);
    }

    #[test]
    fn ranking_cursor_stays_within_limit() {
        let roster = roster(&["10A", "10A", "10A", "10A", "10A"]);
        let mut screen = RankingScreen::new(3);
        screen.move_selection(10, &roster);
        assert_eq!(screen.selected, 2);
    }

    #[test]
    fn class_screen_lists_distinct_classes() {
        let roster = roster(&["10A", "11B", "10A"]);
        let mut screen = ClassScreen::new(&roster);
        assert_eq!(screen.classes, vec!["10A", "11B"]);
        assert_eq!(screen.current_class(), Some("10A"));
        screen.select_last();
        assert_eq!(screen.current_class(), Some("11B"));
        screen.select_first();
        assert_eq!(screen.current_class(), Some("10A"));
        assert_eq!(ClassScreen::new(&Roster::new()).current_class(), None);
    }
}
