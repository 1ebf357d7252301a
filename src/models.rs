use serde::Deserialize;
use std::collections::BTreeSet;

/// A single multiple-choice question as it appears in the question bank.
///
/// `correct_answers` holds option indices; `unit` is not part of the wire
/// format and is derived once at load time from the `module` topic tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answers: Vec<usize>,
    pub explanation: String,
    pub module: String,
    #[serde(skip)]
    pub unit: String,
}

impl Question {
    /// Questions with more than one correct answer render as checkboxes,
    /// single-answer questions as radio buttons.
    pub fn is_multi(&self) -> bool {
        self.correct_answers.len() > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Study,
    Exam,
}

/// One captured exam answer. Created once when the user leaves a question
/// and never mutated afterward. An empty `selected` set is a valid capture.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question: Question,
    pub selected: BTreeSet<usize>,
}

/// A quiz run. Created fresh when the user starts a unit quiz or an exam,
/// dropped when they return to the main menu.
#[derive(Debug)]
pub struct Session {
    pub mode: Mode,
    pub unit: Option<String>,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub answers: Vec<AnswerRecord>,
    pub ended_early: bool,
    /// Study mode only: the one-shot submission per question, kept so a
    /// revisited question renders read-only with its original selection.
    pub study_submissions: Vec<Option<BTreeSet<usize>>>,
}

impl Session {
    pub fn study(unit: &str, questions: Vec<Question>) -> Self {
        let submissions = vec![None; questions.len()];
        Session {
            mode: Mode::Study,
            unit: Some(unit.to_string()),
            questions,
            current_index: 0,
            answers: Vec::new(),
            ended_early: false,
            study_submissions: submissions,
        }
    }

    pub fn exam(questions: Vec<Question>) -> Self {
        Session {
            mode: Mode::Exam,
            unit: None,
            questions,
            current_index: 0,
            answers: Vec::new(),
            ended_early: false,
            study_submissions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
