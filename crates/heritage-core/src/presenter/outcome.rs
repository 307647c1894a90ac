use super::PresentError;
use std::fmt;
use std::path::PathBuf;

/// What happened to one record's image.
#[derive(Debug)]
pub enum RecordOutcome {
    Displayed(PathBuf),
    NoImagePath,
    NotFound(PathBuf),
    Failed(PresentError),
}

impl RecordOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, RecordOutcome::Displayed(_))
    }
}

/// Outcomes of a whole run, in catalog order.
#[derive(Debug, Default)]
pub struct PresentSummary {
    pub outcomes: Vec<RecordOutcome>,
}

impl PresentSummary {
    pub fn displayed(&self) -> usize {
        self.count(|o| o.is_displayed())
    }

    pub fn without_image(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::NoImagePath))
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::NotFound(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&RecordOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

impl fmt::Display for PresentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Displayed {} of {} images ({} without image, {} not found, {} failed)",
            self.displayed(),
            self.outcomes.len(),
            self.without_image(),
            self.not_found(),
            self.failed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts() {
        let summary = PresentSummary {
            outcomes: vec![
                RecordOutcome::Displayed(PathBuf::from("a.png")),
                RecordOutcome::NoImagePath,
                RecordOutcome::NotFound(PathBuf::from("b.png")),
                RecordOutcome::NoImagePath,
                RecordOutcome::Failed(PresentError::Display {
                    path: PathBuf::from("c.png"),
                    reason: "viewer missing".into(),
                }),
            ],
        };
        assert_eq!(
            summary.to_string(),
            "Displayed 1 of 5 images (2 without image, 1 not found, 1 failed)"
        );
    }
}
