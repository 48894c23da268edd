use std::cmp::Ordering;

use super::Roster;
use crate::models::{ClassStatistics, GradeStatus, Record};

impl Roster {
    /// Up to `n` records, best average first. `sort_by` is stable, so students
    /// with equal averages keep their roster order.
    pub fn top_n(&self, n: usize) -> Vec<&Record> {
        let mut ranked: Vec<&Record> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            b.average()
                .partial_cmp(&a.average())
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Records whose class matches exactly (case-sensitive), in roster order.
    pub fn by_class(&self, class_name: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.class_name() == class_name)
            .collect()
    }

    /// Distinct class names in order of first appearance.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            if !names.iter().any(|name| name == record.class_name()) {
                names.push(record.class_name().to_string());
            }
        }
        names
    }

    /// Headcount, mean of member averages, and pass/fail split. A class with no
    /// members reports zeros across the board.
    pub fn class_statistics(&self, class_name: &str) -> ClassStatistics {
        let members = self.by_class(class_name);
        let student_count = members.len();
        let class_average = if student_count == 0 {
            0.0
        } else {
            members.iter().map(|record| record.average()).sum::<f64>() / student_count as f64
        };
        let pass_count = members
            .iter()
            .filter(|record| record.status() == GradeStatus::Pass)
            .count();

        ClassStatistics {
            class_name: class_name.to_string(),
            student_count,
            class_average,
            pass_count,
            fail_count: student_count - pass_count,
        }
    }
}
