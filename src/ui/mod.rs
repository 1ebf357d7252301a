pub mod layout;
mod exam;
mod menu;
mod question;
mod results;
mod units;

pub use exam::draw_exam_question;
pub use layout::{calculate_menu_chunks, calculate_question_chunks, calculate_result_chunks};
pub use menu::draw_main_menu;
pub use question::{draw_feedback, draw_question};
pub use results::{draw_exam_result, draw_unit_result};
pub use units::draw_unit_menu;

use crate::bank::QuestionBank;
use crate::navigator::{App, Screen};
use ratatui::Frame;

/// Render the current screen. A pure function of the app state: drawing the
/// same state twice produces identical buffers.
pub fn draw(f: &mut Frame, app: &App, bank: &QuestionBank) {
    match &app.screen {
        Screen::MainMenu { cursor } => menu::draw_main_menu(f, *cursor, bank),
        Screen::UnitMenu { cursor } => units::draw_unit_menu(f, *cursor, bank),
        Screen::Question {
            index,
            cursor,
            selected,
        } => {
            if let Some(session) = &app.session {
                question::draw_question(f, session, *index, *cursor, selected);
            }
        }
        Screen::QuestionFeedback {
            index,
            correct,
            selected,
        } => {
            if let Some(session) = &app.session {
                question::draw_feedback(f, session, *index, *correct, selected);
            }
        }
        Screen::ExamQuestion {
            index,
            cursor,
            selected,
        } => {
            if let Some(session) = &app.session {
                exam::draw_exam_question(f, session, *index, *cursor, selected);
            }
        }
        Screen::UnitResult => {
            if let Some(session) = &app.session {
                results::draw_unit_result(f, session);
            }
        }
        Screen::ExamResult { scroll } => {
            if let Some(session) = &app.session {
                results::draw_exam_result(f, session, *scroll);
            }
        }
    }
}
