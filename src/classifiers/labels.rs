//! Fixed label sets for the two classification layers
//!
//! Both classifiers are trained on closed label sets. The enums here are the
//! typed form of those sets; the string form (used in `id2label` and on the
//! wire) is the snake_case serde name.

use serde::{Deserialize, Serialize};

/// Layer 1 label: is the message finance-related?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainLabel {
    Finance,
    NonFinance,
}

impl DomainLabel {
    pub const ALL: [DomainLabel; 2] = [DomainLabel::Finance, DomainLabel::NonFinance];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainLabel::Finance => "finance",
            DomainLabel::NonFinance => "non_finance",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == label)
    }

    /// Label strings in declaration order, for validating a model's `id2label`
    pub fn label_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.as_str()).collect()
    }
}

/// Layer 2 label: intent category of a finance-related message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    AnswerSubmission,
    ClarificationRequest,
    ProcessInquiry,
    ChallengeAssessment,
    OffTopic,
    SmallTalk,
}

impl IntentLabel {
    pub const ALL: [IntentLabel; 6] = [
        IntentLabel::AnswerSubmission,
        IntentLabel::ClarificationRequest,
        IntentLabel::ProcessInquiry,
        IntentLabel::ChallengeAssessment,
        IntentLabel::OffTopic,
        IntentLabel::SmallTalk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::AnswerSubmission => "answer_submission",
            IntentLabel::ClarificationRequest => "clarification_request",
            IntentLabel::ProcessInquiry => "process_inquiry",
            IntentLabel::ChallengeAssessment => "challenge_assessment",
            IntentLabel::OffTopic => "off_topic",
            IntentLabel::SmallTalk => "small_talk",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == label)
    }

    /// Label strings in declaration order, for validating a model's `id2label`
    pub fn label_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.as_str()).collect()
    }
}

impl std::fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
