//! Keyword rules engine for guest messages.
//!
//! Rules are checked in order and the first match wins:
//! - wifi / password / internet / connection → auto-reply
//! - check in / key / access / lockbox → auto-reply
//! - amenities / kitchen / towels / parking / gym → auto-reply
//! - problem / issue / broken / dirty / complaint → escalate (high)
//! - emergency / urgent / help / stuck / locked out → escalate (critical)
//!
//! Anything else escalates as unclear (medium). Matching is a
//! case-insensitive substring test, so "key" also matches "monkey".

use regex::Regex;
use tracing::{debug, warn};

use super::model::{MessageCategory, MessageClassification, Priority};

/// One category rule: any keyword present selects the outcome.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// Keywords as configured, for display.
    pub keywords: Vec<String>,
    /// Compiled case-insensitive alternation of the escaped keywords.
    pub regex: Regex,
    /// Classification returned when the rule matches.
    pub outcome: MessageClassification,
}

impl CategoryRule {
    /// Build a rule from plain keywords.
    pub fn new(keywords: &[&str], outcome: MessageClassification) -> Result<Self, regex::Error> {
        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            regex: Regex::new(&format!("(?i)(?:{alternation})"))?,
            outcome,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        !self.keywords.is_empty() && self.regex.is_match(text)
    }
}

/// Ordered, first-match-wins guest message classifier.
#[derive(Debug, Clone)]
pub struct MessageClassifier {
    rules: Vec<CategoryRule>,
    fallback: MessageClassification,
}

impl MessageClassifier {
    /// Create a classifier with the standard guest-message rules.
    pub fn default_rules() -> Self {
        let rules = [
            (
                &["wifi", "password", "internet", "connection"][..],
                MessageClassification::auto(MessageCategory::WifiQuestion, 0.95),
            ),
            (
                &["check in", "checkin", "key", "access", "lockbox"][..],
                MessageClassification::auto(MessageCategory::CheckinQuestion, 0.92),
            ),
            (
                &["amenities", "kitchen", "towels", "parking", "gym"][..],
                MessageClassification::auto(MessageCategory::AmenitiesQuestion, 0.88),
            ),
            (
                &["problem", "issue", "broken", "dirty", "complaint"][..],
                MessageClassification::escalate(
                    MessageCategory::Complaint,
                    "Guest complaint detected",
                    Priority::High,
                )
                .with_suggested_response(
                    "I apologize for the inconvenience. Let me personally look into this right away.",
                ),
            ),
            (
                &["emergency", "urgent", "help", "stuck", "locked out"][..],
                MessageClassification::escalate(
                    MessageCategory::Emergency,
                    "Emergency situation detected",
                    Priority::Critical,
                ),
            ),
        ];

        let expected = rules.len();
        let mut classifier = Self::empty();
        for (keywords, outcome) in rules {
            match CategoryRule::new(keywords, outcome) {
                Ok(rule) => classifier.rules.push(rule),
                Err(e) => warn!(error = %e, ?keywords, "Built-in message rule failed to compile"),
            }
        }
        debug_assert_eq!(classifier.rules.len(), expected, "built-in rule dropped");
        classifier
    }

    /// Create a classifier with no rules: everything is unclear.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            fallback: MessageClassification::escalate(
                MessageCategory::Unclear,
                "Message unclear - human review needed",
                Priority::Medium,
            ),
        }
    }

    /// Append a rule after the existing ones.
    pub fn add_rule(
        &mut self,
        keywords: &[&str],
        outcome: MessageClassification,
    ) -> Result<(), regex::Error> {
        self.rules.push(CategoryRule::new(keywords, outcome)?);
        Ok(())
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Classify a guest message.
    pub fn classify(&self, text: &str) -> MessageClassification {
        for rule in &self.rules {
            if rule.matches(text) {
                debug!(
                    category = %rule.outcome.category,
                    auto = rule.outcome.is_auto_respondable(),
                    "Message matched category rule"
                );
                return rule.outcome.clone();
            }
        }

        debug!("No category rule matched, falling back to unclear");
        self.fallback.clone()
    }
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::default_rules()
    }
}
