//! In-place editing of the sales pipeline counters.
//!
//! Edits only ever live in memory: the committed values start from the demo
//! metrics and go back to them when the dashboard is rebuilt.

use crate::dataset::PipelineStatus;
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PipelineField {
    Leads,
    Opportunities,
    #[strum(to_string = "Closed Deals")]
    ClosedDeals,
}

impl PipelineField {
    pub fn next(self) -> Self {
        let fields: Vec<Self> = Self::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + 1) % fields.len()]
    }

    pub fn previous(self) -> Self {
        let fields: Vec<Self> = Self::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + fields.len() - 1) % fields.len()]
    }
}

impl PipelineStatus {
    pub fn get(&self, field: PipelineField) -> u64 {
        match field {
            PipelineField::Leads => self.leads,
            PipelineField::Opportunities => self.opportunities,
            PipelineField::ClosedDeals => self.closed_deals,
        }
    }

    pub fn set(&mut self, field: PipelineField, value: u64) {
        match field {
            PipelineField::Leads => self.leads = value,
            PipelineField::Opportunities => self.opportunities = value,
            PipelineField::ClosedDeals => self.closed_deals = value,
        }
    }
}

/// Coerce form input to a count. Never fails: blank or non-numeric text is
/// 0, fractions are truncated and negative numbers clamp to 0.
pub fn coerce_count(input: &str) -> u64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.trunc() as u64,
        _ => 0,
    }
}

#[derive(Debug, Clone)]
pub struct PipelineEditor {
    committed: PipelineStatus,
    draft: Option<PipelineStatus>,
}

impl PipelineEditor {
    pub fn new(initial: PipelineStatus) -> Self {
        Self {
            committed: initial,
            draft: None,
        }
    }

    /// Values shown in the pipeline table.
    pub fn committed(&self) -> &PipelineStatus {
        &self.committed
    }

    /// The form's working copy, while editing.
    pub fn draft(&self) -> Option<&PipelineStatus> {
        self.draft.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Open the form with a copy of the committed values.
    pub fn begin_edit(&mut self) {
        self.draft = Some(self.committed);
    }

    /// Store a coerced value in the draft. Ignored when no edit is open.
    pub fn update_field(&mut self, field: PipelineField, input: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.set(field, coerce_count(input));
        }
    }

    /// Commit the draft and close the form. Returns the committed values when
    /// an edit was open.
    pub fn save(&mut self) -> Option<PipelineStatus> {
        let draft = self.draft.take()?;
        self.committed = draft;
        Some(draft)
    }

    /// Drop the draft and close the form.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SALES;

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("42"), 42);
        assert_eq!(coerce_count(" 7 "), 7);
        assert_eq!(coerce_count("3.9"), 3);
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count("-5"), 0);
        assert_eq!(coerce_count("1e3"), 1000);
        assert_eq!(coerce_count("NaN"), 0);
    }

    #[test]
    fn test_cancel_restores_committed_values() {
        let mut editor = PipelineEditor::new(SALES.pipeline);
        editor.begin_edit();
        editor.update_field(PipelineField::Leads, "999");
        editor.update_field(PipelineField::Opportunities, "-1");
        editor.update_field(PipelineField::ClosedDeals, "junk");
        editor.cancel();

        assert!(!editor.is_editing());
        assert_eq!(editor.committed(), &SALES.pipeline);

        // A new edit starts from the committed values, not the discarded draft.
        editor.begin_edit();
        assert_eq!(editor.draft(), Some(&SALES.pipeline));
    }

    #[test]
    fn test_save_commits_exact_draft() {
        let mut editor = PipelineEditor::new(SALES.pipeline);
        editor.begin_edit();
        editor.update_field(PipelineField::Leads, "120");
        editor.update_field(PipelineField::ClosedDeals, "30");
        let draft = *editor.draft().unwrap();

        assert_eq!(editor.save(), Some(draft));
        assert_eq!(editor.committed(), &draft);
        assert_eq!(
            editor.committed(),
            &PipelineStatus {
                leads: 120,
                opportunities: 50,
                closed_deals: 30,
            }
        );
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_updates_without_open_edit_are_ignored() {
        let mut editor = PipelineEditor::new(SALES.pipeline);
        editor.update_field(PipelineField::Leads, "1");
        assert_eq!(editor.save(), None);
        assert_eq!(editor.committed(), &SALES.pipeline);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(PipelineField::Leads.next(), PipelineField::Opportunities);
        assert_eq!(PipelineField::ClosedDeals.next(), PipelineField::Leads);
        assert_eq!(PipelineField::Leads.previous(), PipelineField::ClosedDeals);
        assert_eq!(PipelineField::ClosedDeals.to_string(), "Closed Deals");
    }
}
