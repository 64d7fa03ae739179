//! FAQ accordion content and expansion state.
//!
//! The accordion keeps at most one entry open. Indices always come from the
//! rendered list, so `toggle` does no range checking.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// A single question/answer pair shown on the FAQ page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const APP_PURPOSE: FaqEntry = FaqEntry {
    question: "How will this app help us?",
    answer: "This app helps you to connect with people who wish to go to the same place as you by taking a auto or car.",
};

/// Published FAQ copy. Every slot currently carries the same entry until
/// product supplies the remaining questions.
pub const FAQ_ENTRIES: &[FaqEntry] = &[APP_PURPOSE, APP_PURPOSE, APP_PURPOSE, APP_PURPOSE, APP_PURPOSE];

/// Which accordion entry is expanded, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    active: Option<usize>,
}

impl FaqState {
    /// Expand `index`, or collapse it if it is already the open entry.
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.active == Some(index) { None } else { Some(index) };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

/// Marker shown next to a question.
pub fn expansion_marker(expanded: bool) -> &'static str {
    if expanded { "-" } else { "+" }
}
