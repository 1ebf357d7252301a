use crate::models::{AnswerRecord, Question};
use std::collections::BTreeSet;

/// Fraction of answered questions that must be correct to pass an exam.
pub const PASS_THRESHOLD: f64 = 0.65;

/// Exact set equality between the selection and the question's correct
/// answers. No partial credit; an extra wrong pick fails the whole question.
pub fn is_correct(question: &Question, selected: &BTreeSet<usize>) -> bool {
    selected.len() == question.correct_answers.len()
        && selected.iter().all(|i| question.correct_answers.contains(i))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub total: usize,
    pub correct_count: usize,
    pub min_to_pass: usize,
    pub passed: bool,
}

/// Aggregate exam score over the captured answers. `total` counts questions
/// actually answered, not the sampled list length, so an exam finished early
/// is graded on the visited questions alone.
pub fn score(answers: &[AnswerRecord]) -> ScoreReport {
    let total = answers.len();
    let correct_count = answers
        .iter()
        .filter(|record| is_correct(&record.question, &record.selected))
        .count();
    let min_to_pass = (total as f64 * PASS_THRESHOLD).ceil() as usize;
    ScoreReport {
        total,
        correct_count,
        min_to_pass,
        passed: correct_count >= min_to_pass,
    }
}

/// One missed question, ready for display on the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub question: String,
    pub selected: String,
    pub correct: String,
    pub explanation: String,
}

/// Review entries for every incorrect answer, in capture order.
pub fn review(answers: &[AnswerRecord]) -> Vec<ReviewEntry> {
    answers
        .iter()
        .filter(|record| !is_correct(&record.question, &record.selected))
        .map(|record| ReviewEntry {
            question: record.question.question.clone(),
            selected: option_texts(&record.question, record.selected.iter().copied()),
            correct: option_texts(
                &record.question,
                record.question.correct_answers.iter().copied(),
            ),
            explanation: record.question.explanation.clone(),
        })
        .collect()
}

fn option_texts(question: &Question, indices: impl Iterator<Item = usize>) -> String {
    let texts: Vec<&str> = indices
        .filter_map(|i| question.options.get(i).map(String::as_str))
        .collect();
    if texts.is_empty() {
        "None".to_string()
    } else {
        texts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], correct: &[usize]) -> Question {
        Question {
            question: "Q?".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answers: correct.to_vec(),
            explanation: "Because.".to_string(),
            module: "Topic".to_string(),
            unit: "Topic".to_string(),
        }
    }

    fn selection(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    fn record(q: Question, selected: &[usize]) -> AnswerRecord {
        AnswerRecord {
            question: q,
            selected: selection(selected),
        }
    }

    #[test]
    fn test_exact_selection_is_correct() {
        let q = question(&["A", "B", "C"], &[0, 2]);
        assert!(is_correct(&q, &selection(&[0, 2])));
        assert!(is_correct(&q, &selection(&[2, 0])));
    }

    #[test]
    fn test_partial_selection_is_incorrect() {
        let q = question(&["A", "B", "C"], &[0, 2]);
        assert!(!is_correct(&q, &selection(&[0])));
    }

    #[test]
    fn test_extra_selection_is_incorrect() {
        let q = question(&["A", "B", "C"], &[0, 2]);
        assert!(!is_correct(&q, &selection(&[0, 1, 2])));
    }

    #[test]
    fn test_empty_selection_is_incorrect() {
        let q = question(&["A", "B", "C"], &[0, 2]);
        assert!(!is_correct(&q, &selection(&[])));
    }

    #[test]
    fn test_correct_answers_always_pass_their_own_question() {
        let q = question(&["A", "B", "C", "D"], &[1, 3]);
        let own: BTreeSet<usize> = q.correct_answers.iter().copied().collect();
        assert!(is_correct(&q, &own));
    }

    #[test]
    fn test_score_seven_of_ten_passes() {
        let mut answers = Vec::new();
        for _ in 0..7 {
            answers.push(record(question(&["A", "B"], &[0]), &[0]));
        }
        for _ in 0..3 {
            answers.push(record(question(&["A", "B"], &[0]), &[1]));
        }
        let report = score(&answers);
        assert_eq!(
            report,
            ScoreReport {
                total: 10,
                correct_count: 7,
                min_to_pass: 7,
                passed: true,
            }
        );
    }

    #[test]
    fn test_score_six_of_ten_fails() {
        let mut answers = Vec::new();
        for _ in 0..6 {
            answers.push(record(question(&["A", "B"], &[0]), &[0]));
        }
        for _ in 0..4 {
            answers.push(record(question(&["A", "B"], &[0]), &[1]));
        }
        let report = score(&answers);
        assert_eq!(report.min_to_pass, 7);
        assert!(!report.passed);
    }

    #[test]
    fn test_score_denominator_is_answered_count() {
        // 3 answered out of a 60-question exam list: graded on the 3 alone.
        let answers = vec![
            record(question(&["A", "B"], &[0]), &[0]),
            record(question(&["A", "B"], &[0]), &[0]),
            record(question(&["A", "B"], &[0]), &[1]),
        ];
        let report = score(&answers);
        assert_eq!(report.total, 3);
        assert_eq!(report.min_to_pass, 2);
        assert!(report.passed);
    }

    #[test]
    fn test_score_empty() {
        let report = score(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.min_to_pass, 0);
        assert!(report.passed);
    }

    #[test]
    fn test_review_contains_only_incorrect_in_capture_order() {
        let answers = vec![
            record(question(&["A", "B"], &[0]), &[1]),
            record(question(&["A", "B"], &[0]), &[0]),
            record(question(&["A", "B", "C"], &[0, 2]), &[0]),
        ];
        let entries = review(&answers);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].selected, "B");
        assert_eq!(entries[1].selected, "A");
        assert_eq!(entries[1].correct, "A, C");
    }

    #[test]
    fn test_review_marks_empty_selection_as_none() {
        let answers = vec![record(question(&["A", "B"], &[0]), &[])];
        let entries = review(&answers);
        assert_eq!(entries[0].selected, "None");
        assert_eq!(entries[0].correct, "A");
        assert_eq!(entries[0].explanation, "Because.");
    }
}
