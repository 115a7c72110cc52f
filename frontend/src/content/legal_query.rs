use crate::config::{BONUS_QUERY_GRANT, FREE_QUERY_ALLOWANCE, QUERY_CHAR_LIMIT};

pub const QUICK_QUESTIONS: [&str; 4] = [
    "My landlord is not returning my deposit.",
    "How to file a complaint against a noisy neighbor?",
    "What are my rights if a product is defective?",
    "Check Guideline Value of a Property",
];

const RELEVANT_SECTIONS: [&str; 3] = [
    "IPC Section 420",
    "Consumer Protection Act 2019",
    "Transfer of Property Act",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "Tamil",
        }
    }

    pub fn placeholder(self) -> String {
        format!("Describe your legal issue in {}...", self.label())
    }

    /// BCP 47 tag handed to the browser's speech recognizer.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Tamil => "ta-IN",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub paragraphs: Vec<String>,
    pub relevant_sections: Vec<&'static str>,
    pub answered_at: String,
}

/// Canned analysis; nothing is sent anywhere.
pub fn mock_analysis(query: &str, answered_at: String) -> Analysis {
    Analysis {
        paragraphs: vec![
            format!("Based on your query about \"{}\", here is our analysis:", query),
            String::new(),
            "In Indian law, the specific provisions that would apply are... [AI-generated legal analysis would appear here]. This response has been cross-verified by our legal AI agents for accuracy.".to_string(),
        ],
        relevant_sections: RELEVANT_SECTIONS.to_vec(),
        answered_at,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuerySession {
    pub draft: String,
    pub language: Language,
    pub remaining: u32,
    pub pending: Option<String>,
    pub bonus_claimed: bool,
}

impl Default for QuerySession {
    fn default() -> Self {
        Self {
            draft: String::new(),
            language: Language::default(),
            remaining: FREE_QUERY_ALLOWANCE,
            pending: None,
            bonus_claimed: false,
        }
    }
}

impl QuerySession {
    pub fn exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty() && !self.exhausted() && !self.is_pending()
    }

    /// Share of the allowance left, as a CSS width percentage.
    pub fn remaining_percent(&self) -> f64 {
        f64::from(self.remaining) * 100.0 / f64::from(FREE_QUERY_ALLOWANCE)
    }

    /// Keeps at most the character limit.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.chars().take(QUERY_CHAR_LIMIT).collect();
    }

    /// Adds dictated text after whatever is already typed.
    pub fn append_transcript(&mut self, transcript: &str) {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return;
        }
        let joined = if self.draft.is_empty() {
            transcript.to_string()
        } else {
            format!("{} {}", self.draft, transcript)
        };
        self.set_draft(&joined);
    }

    pub fn draft_len(&self) -> usize {
        self.draft.chars().count()
    }

    /// Marks the draft as in flight. Returns the query text to answer, or
    /// `None` if submitting is not allowed right now.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let query = self.draft.clone();
        self.pending = Some(query.clone());
        Some(query)
    }

    /// The answer for the pending query arrived.
    pub fn complete(&mut self) -> Option<String> {
        let query = self.pending.take()?;
        self.remaining = self.remaining.saturating_sub(1);
        self.draft.clear();
        Some(query)
    }

    /// One-time top up offered once the allowance is used.
    pub fn claim_bonus(&mut self) -> bool {
        if self.bonus_claimed || !self.exhausted() {
            return false;
        }
        self.bonus_claimed = true;
        self.remaining += BONUS_QUERY_GRANT;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(session: &mut QuerySession, text: &str) {
        session.set_draft(text);
        assert!(session.submit().is_some());
        session.complete();
    }

    #[test]
    fn blank_draft_is_not_submitted() {
        let mut session = QuerySession::default();
        session.set_draft("   ");
        assert_eq!(session.submit(), None);
        assert_eq!(session.remaining, FREE_QUERY_ALLOWANCE);
    }

    #[test]
    fn completing_uses_one_query_and_clears_draft() {
        let mut session = QuerySession::default();
        session.set_draft(QUICK_QUESTIONS[0]);
        assert_eq!(session.submit().as_deref(), Some(QUICK_QUESTIONS[0]));
        assert!(session.is_pending());
        assert_eq!(session.remaining, 5);

        assert_eq!(session.complete().as_deref(), Some(QUICK_QUESTIONS[0]));
        assert_eq!(session.remaining, 4);
        assert!(session.draft.is_empty());
        assert!(!session.is_pending());
    }

    #[test]
    fn no_double_submit_while_pending() {
        let mut session = QuerySession::default();
        session.set_draft("deposit");
        assert!(session.submit().is_some());
        assert_eq!(session.submit(), None);
        assert_eq!(session.complete().as_deref(), Some("deposit"));
        assert_eq!(session.complete(), None);
        assert_eq!(session.remaining, 4);
    }

    #[test]
    fn allowance_runs_out_and_bonus_is_single_use() {
        let mut session = QuerySession::default();
        for _ in 0..FREE_QUERY_ALLOWANCE {
            ask(&mut session, "question");
        }
        assert!(session.exhausted());
        session.set_draft("one more");
        assert_eq!(session.submit(), None);

        assert!(session.claim_bonus());
        assert_eq!(session.remaining, BONUS_QUERY_GRANT);
        assert!(!session.claim_bonus());
    }

    #[test]
    fn bonus_needs_an_empty_allowance() {
        let mut session = QuerySession::default();
        assert!(!session.claim_bonus());
        assert_eq!(session.remaining, FREE_QUERY_ALLOWANCE);
    }

    #[test]
    fn draft_is_capped() {
        let mut session = QuerySession::default();
        session.set_draft(&"a".repeat(QUERY_CHAR_LIMIT + 40));
        assert_eq!(session.draft_len(), QUERY_CHAR_LIMIT);
    }

    #[test]
    fn dictation_appends_with_a_space() {
        let mut session = QuerySession::default();
        session.append_transcript("my landlord");
        assert_eq!(session.draft, "my landlord");
        session.append_transcript(" kept my deposit ");
        assert_eq!(session.draft, "my landlord kept my deposit");
        session.append_transcript("   ");
        assert_eq!(session.draft, "my landlord kept my deposit");
    }

    #[test]
    fn dictation_respects_the_character_limit() {
        let mut session = QuerySession::default();
        session.set_draft(&"a".repeat(QUERY_CHAR_LIMIT - 3));
        session.append_transcript("deposit");
        assert_eq!(session.draft_len(), QUERY_CHAR_LIMIT);
        assert!(session.draft.ends_with(" de"));
    }

    #[test]
    fn speech_locales() {
        assert_eq!(Language::English.speech_locale(), "en-IN");
        assert_eq!(Language::Tamil.speech_locale(), "ta-IN");
    }

    #[test]
    fn progress_width() {
        let mut session = QuerySession::default();
        assert_eq!(session.remaining_percent(), 100.0);
        ask(&mut session, "x");
        assert_eq!(session.remaining_percent(), 80.0);
    }

    #[test]
    fn analysis_quotes_the_query() {
        let analysis = mock_analysis("noisy neighbor", "just now".into());
        assert!(analysis.paragraphs[0].contains("\"noisy neighbor\""));
        assert_eq!(analysis.relevant_sections.len(), 3);
        assert_eq!(Language::Tamil.placeholder(), "Describe your legal issue in Tamil...");
    }
}
