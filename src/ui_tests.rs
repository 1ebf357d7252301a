#[cfg(test)]
mod ui_integration_tests {
    use crate::bank::QuestionBank;
    use crate::models::{AnswerRecord, Question, Session};
    use crate::navigator::{Action, App, Screen};
    use crate::taxonomy::UnitTable;
    use crate::ui;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::collections::BTreeSet;

    fn question(text: &str, module: &str, correct: &[usize]) -> Question {
        Question {
            question: text.to_string(),
            options: vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()],
            correct_answers: correct.to_vec(),
            explanation: "Explained here.".to_string(),
            module: module.to_string(),
            unit: String::new(),
        }
    }

    fn bank() -> QuestionBank {
        QuestionBank::from_records(
            vec![
                question("First question?", "Networking", &[0]),
                question("Second question?", "Networking", &[0, 2]),
                question("Third question?", "Storage", &[1]),
            ],
            &UnitTable::identity(),
        )
    }

    fn render(app: &App, bank: &QuestionBank) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui::draw(f, app, bank)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        let mut out = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            out.push_str(cell.symbol());
            if (i + 1) % width == 0 {
                out.push('\n');
            }
        }
        out
    }

    fn exam_result_app() -> App {
        let questions = vec![
            question("First question?", "Networking", &[0]),
            question("Second question?", "Networking", &[0, 2]),
        ];
        let mut session = Session::exam(questions.clone());
        session.answers.push(AnswerRecord {
            question: questions[0].clone(),
            selected: BTreeSet::from([0]),
        });
        session.answers.push(AnswerRecord {
            question: questions[1].clone(),
            selected: BTreeSet::new(),
        });
        session.current_index = 2;
        session.ended_early = true;
        App {
            screen: Screen::ExamResult { scroll: 0 },
            session: Some(session),
        }
    }

    #[test]
    fn test_rendering_is_idempotent_for_every_screen() {
        let bank = bank();

        let mut apps = vec![App::new()];
        apps.push(App::new().apply(Action::Confirm, &bank)); // unit menu
        apps.push(
            App::new()
                .apply(Action::Confirm, &bank)
                .apply(Action::Confirm, &bank), // study question
        );
        apps.push(
            App::new()
                .apply(Action::Confirm, &bank)
                .apply(Action::Confirm, &bank)
                .apply(Action::ToggleOption, &bank)
                .apply(Action::Confirm, &bank), // feedback
        );
        apps.push(
            App::new()
                .apply(Action::CursorDown, &bank)
                .apply(Action::Confirm, &bank), // exam question
        );
        apps.push(exam_result_app());

        for app in &apps {
            let first = render(app, &bank);
            let second = render(app, &bank);
            assert_eq!(first, second, "re-render differed for {:?}", app.screen);
        }
    }

    #[test]
    fn test_main_menu_lists_both_modes() {
        let bank = bank();
        let text = buffer_text(&render(&App::new(), &bank));
        assert!(text.contains("Exam Practice"));
        assert!(text.contains("Study by Units"));
        assert!(text.contains("Exam Mode"));
        assert!(text.contains("3 questions loaded"));
    }

    #[test]
    fn test_main_menu_empty_state() {
        let bank = QuestionBank::empty();
        let text = buffer_text(&render(&App::new(), &bank));
        assert!(text.contains("No questions available"));
        assert!(!text.contains("Study by Units"));
    }

    #[test]
    fn test_unit_menu_shows_question_counts() {
        let bank = bank();
        let app = App::new().apply(Action::Confirm, &bank);
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("Choose a Unit"));
        assert!(text.contains("Networking (2 questions)"));
        assert!(text.contains("Storage (1 questions)"));
    }

    #[test]
    fn test_study_question_screen() {
        let bank = bank();
        let app = App::new()
            .apply(Action::Confirm, &bank)
            .apply(Action::Confirm, &bank);
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("Unit: Networking (Question 1 of 2)"));
        assert!(text.contains("First question?"));
        assert!(text.contains("( ) Alpha"));
        assert!(text.contains("Submit"));
    }

    #[test]
    fn test_multi_answer_question_shows_hint_and_checkboxes() {
        let bank = bank();
        // Second Networking question has two correct answers.
        let app = App::new()
            .apply(Action::Confirm, &bank)
            .apply(Action::Confirm, &bank)
            .apply(Action::ToggleOption, &bank)
            .apply(Action::Confirm, &bank)
            .apply(Action::Confirm, &bank);
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("Select ALL that apply."));
        assert!(text.contains("[ ] Alpha"));
    }

    #[test]
    fn test_feedback_screen_shows_verdict_and_explanation() {
        let bank = bank();
        let app = App::new()
            .apply(Action::Confirm, &bank)
            .apply(Action::Confirm, &bank)
            .apply(Action::ToggleOption, &bank)
            .apply(Action::Confirm, &bank);
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("Correct!"));
        assert!(text.contains("Your Answer: Alpha"));
        assert!(text.contains("Explanation: Explained here."));
    }

    #[test]
    fn test_submitted_question_renders_read_only() {
        let bank = bank();
        let app = App::new()
            .apply(Action::Confirm, &bank)
            .apply(Action::Confirm, &bank)
            .apply(Action::ToggleOption, &bank)
            .apply(Action::Confirm, &bank)
            .apply(Action::Confirm, &bank)
            .apply(Action::Prev, &bank);
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("Options (submitted)"));
        assert!(text.contains("(x) Alpha"));
    }

    #[test]
    fn test_exam_question_screen() {
        let bank = bank();
        let app = App::new()
            .apply(Action::CursorDown, &bank)
            .apply(Action::Confirm, &bank);
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("(Exam Mode) Question 1 of 3"));
        assert!(text.contains("Finish Early"));
    }

    #[test]
    fn test_exam_result_screen_shows_score_and_review() {
        let bank = bank();
        let app = exam_result_app();
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("Exam Ended Early"));
        assert!(text.contains("Answered: 2 / 2 | Correct: 1 | Needed to Pass: 2"));
        assert!(text.contains("FAIL"));
        assert!(text.contains("Incorrect Answers Review"));
        assert!(text.contains("Your Answer: None"));
        assert!(text.contains("Correct Answers: Alpha, Gamma"));
    }

    #[test]
    fn test_unit_result_screen() {
        let bank = bank();
        let mut app = App::new()
            .apply(Action::Confirm, &bank)
            .apply(Action::Confirm, &bank);
        // Walk both Networking questions to the unit result.
        for _ in 0..2 {
            app = app
                .apply(Action::ToggleOption, &bank)
                .apply(Action::Confirm, &bank)
                .apply(Action::Confirm, &bank);
        }
        assert_eq!(app.screen, Screen::UnitResult);
        let text = buffer_text(&render(&app, &bank));
        assert!(text.contains("Unit \"Networking\" Completed!"));
        assert!(text.contains("Questions: 2"));
    }
}
