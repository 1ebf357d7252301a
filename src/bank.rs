use crate::models::Question;
use crate::taxonomy::UnitTable;
use rand::seq::SliceRandom;
use std::fmt;
use std::fs;
use std::path::Path;

/// Failure to read or parse a data file at startup. Terminal for the run:
/// the caller logs it and continues with an empty bank.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "read failed: {}", err),
            LoadError::Parse(err) => write!(f, "parse failed: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// The full question collection, loaded once at startup. Each question gets
/// its `unit` label here, via the topic-tag lookup; records are otherwise
/// taken as-is.
#[derive(Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn empty() -> Self {
        QuestionBank::default()
    }

    pub fn load(path: impl AsRef<Path>, table: &UnitTable) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        let records: Vec<Question> = serde_json::from_str(&content)?;
        Ok(Self::from_records(records, table))
    }

    pub fn from_records(mut records: Vec<Question>, table: &UnitTable) -> Self {
        for question in &mut records {
            question.unit = table.unit_for(&question.module);
        }
        QuestionBank { questions: records }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Distinct unit labels, in order of first appearance in the bank.
    pub fn all_units(&self) -> Vec<String> {
        let mut units: Vec<String> = Vec::new();
        for question in &self.questions {
            if !units.contains(&question.unit) {
                units.push(question.unit.clone());
            }
        }
        units
    }

    /// Questions whose derived unit matches `unit`, in store order.
    pub fn questions_in_unit(&self, unit: &str) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.unit == unit)
            .cloned()
            .collect()
    }

    /// Uniform sample of `min(n, len)` questions without replacement.
    pub fn sample_random(&self, n: usize) -> Vec<Question> {
        self.questions
            .choose_multiple(&mut rand::thread_rng(), n)
            .cloned()
            .collect()
    }
}
