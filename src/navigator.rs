use crate::bank::QuestionBank;
use crate::grader;
use crate::models::{AnswerRecord, Question, Session};
use crossterm::event::KeyCode;
use std::collections::BTreeSet;

/// Number of questions sampled for an exam (fewer if the bank is smaller).
pub const EXAM_SIZE: usize = 60;

const MAIN_MENU_ENTRIES: usize = 2;

/// The screen currently shown. Question screens carry the transient view
/// state (option cursor, in-progress selection) so that rendering is a pure
/// function of the app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu {
        cursor: usize,
    },
    UnitMenu {
        cursor: usize,
    },
    Question {
        index: usize,
        cursor: usize,
        selected: BTreeSet<usize>,
    },
    QuestionFeedback {
        index: usize,
        correct: bool,
        selected: BTreeSet<usize>,
    },
    ExamQuestion {
        index: usize,
        cursor: usize,
        selected: BTreeSet<usize>,
    },
    UnitResult,
    ExamResult {
        scroll: u16,
    },
}

/// A user action, decoded from a key event by the view layer and dispatched
/// to `App::apply`. State evolution never touches the event source directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    ToggleOption,
    Confirm,
    Prev,
    FinishEarly,
    Back,
}

impl Action {
    /// Per-screen key binding. Keys with no meaning on the current screen
    /// decode to `None` and are dropped by the event loop.
    pub fn from_key(screen: &Screen, key: KeyCode) -> Option<Action> {
        match screen {
            Screen::MainMenu { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
                KeyCode::Enter => Some(Action::Confirm),
                _ => None,
            },
            Screen::UnitMenu { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
                KeyCode::Enter => Some(Action::Confirm),
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            Screen::Question { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
                KeyCode::Char(' ') => Some(Action::ToggleOption),
                KeyCode::Enter => Some(Action::Confirm),
                KeyCode::Left => Some(Action::Prev),
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            Screen::QuestionFeedback { .. } => match key {
                KeyCode::Enter => Some(Action::Confirm),
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            Screen::ExamQuestion { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
                KeyCode::Char(' ') => Some(Action::ToggleOption),
                KeyCode::Enter => Some(Action::Confirm),
                KeyCode::Char('f') => Some(Action::FinishEarly),
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            Screen::UnitResult => match key {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => Some(Action::Back),
                _ => None,
            },
            Screen::ExamResult { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => Some(Action::Back),
                _ => None,
            },
        }
    }
}

/// The whole application state: current screen plus the session being worked
/// through, if any. Transitions consume the value and return the next one.
#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub session: Option<Session>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            screen: Screen::MainMenu { cursor: 0 },
            session: None,
        }
    }

    /// The state machine. Total over valid states: actions without meaning on
    /// the current screen leave the state unchanged.
    pub fn apply(self, action: Action, bank: &QuestionBank) -> App {
        let App { screen, session } = self;
        match screen {
            Screen::MainMenu { cursor } => main_menu(cursor, action, bank),
            Screen::UnitMenu { cursor } => unit_menu(cursor, action, bank),
            Screen::Question {
                index,
                cursor,
                selected,
            } => match session {
                Some(session) => study_question(session, index, cursor, selected, action),
                None => App::new(),
            },
            Screen::QuestionFeedback {
                index,
                correct,
                selected,
            } => match session {
                Some(session) => study_feedback(session, index, correct, selected, action),
                None => App::new(),
            },
            Screen::ExamQuestion {
                index,
                cursor,
                selected,
            } => match session {
                Some(session) => exam_question(session, index, cursor, selected, action),
                None => App::new(),
            },
            Screen::UnitResult => result_screen(Screen::UnitResult, session, action),
            Screen::ExamResult { scroll } => exam_result(session, scroll, action),
        }
    }
}

fn main_menu(cursor: usize, action: Action, bank: &QuestionBank) -> App {
    match action {
        Action::CursorUp => App {
            screen: Screen::MainMenu {
                cursor: cursor.saturating_sub(1),
            },
            session: None,
        },
        Action::CursorDown => App {
            screen: Screen::MainMenu {
                cursor: (cursor + 1).min(MAIN_MENU_ENTRIES - 1),
            },
            session: None,
        },
        Action::Confirm if bank.is_empty() => App {
            screen: Screen::MainMenu { cursor },
            session: None,
        },
        Action::Confirm if cursor == 0 => App {
            screen: Screen::UnitMenu { cursor: 0 },
            session: None,
        },
        Action::Confirm => start_exam(bank),
        _ => App {
            screen: Screen::MainMenu { cursor },
            session: None,
        },
    }
}

fn unit_menu(cursor: usize, action: Action, bank: &QuestionBank) -> App {
    let units = bank.all_units();
    match action {
        Action::CursorUp => App {
            screen: Screen::UnitMenu {
                cursor: cursor.saturating_sub(1),
            },
            session: None,
        },
        Action::CursorDown => App {
            screen: Screen::UnitMenu {
                cursor: (cursor + 1).min(units.len().saturating_sub(1)),
            },
            session: None,
        },
        Action::Confirm => match units.get(cursor) {
            Some(unit) => start_study(unit, bank),
            None => App {
                screen: Screen::UnitMenu { cursor },
                session: None,
            },
        },
        Action::Back => App::new(),
        _ => App {
            screen: Screen::UnitMenu { cursor },
            session: None,
        },
    }
}

fn start_exam(bank: &QuestionBank) -> App {
    let session = Session::exam(bank.sample_random(EXAM_SIZE));
    App {
        screen: Screen::ExamQuestion {
            index: 0,
            cursor: 0,
            selected: BTreeSet::new(),
        },
        session: Some(session),
    }
}

fn start_study(unit: &str, bank: &QuestionBank) -> App {
    let session = Session::study(unit, bank.questions_in_unit(unit));
    let screen = enter_study_question(&session, 0);
    App {
        screen,
        session: Some(session),
    }
}

/// A previously submitted question re-enters with its recorded selection,
/// rendered read-only; an unvisited one starts blank.
fn enter_study_question(session: &Session, index: usize) -> Screen {
    let selected = session
        .study_submissions
        .get(index)
        .and_then(|s| s.clone())
        .unwrap_or_default();
    Screen::Question {
        index,
        cursor: 0,
        selected,
    }
}

fn study_question(
    mut session: Session,
    index: usize,
    cursor: usize,
    selected: BTreeSet<usize>,
    action: Action,
) -> App {
    let total = session.len();
    let submitted = session
        .study_submissions
        .get(index)
        .is_some_and(|s| s.is_some());
    let option_count = session.questions[index].options.len();

    match action {
        Action::CursorUp => App {
            screen: Screen::Question {
                index,
                cursor: cursor.saturating_sub(1),
                selected,
            },
            session: Some(session),
        },
        Action::CursorDown => App {
            screen: Screen::Question {
                index,
                cursor: (cursor + 1).min(option_count.saturating_sub(1)),
                selected,
            },
            session: Some(session),
        },
        Action::ToggleOption if !submitted => {
            let selected = toggle(&session.questions[index], cursor, selected);
            App {
                screen: Screen::Question {
                    index,
                    cursor,
                    selected,
                },
                session: Some(session),
            }
        }
        Action::Confirm if submitted => {
            // One-shot submission: revisits advance without re-grading.
            if index + 1 < total {
                session.current_index = index + 1;
                let screen = enter_study_question(&session, index + 1);
                App {
                    screen,
                    session: Some(session),
                }
            } else {
                session.current_index = total;
                App {
                    screen: Screen::UnitResult,
                    session: Some(session),
                }
            }
        }
        Action::Confirm => {
            let correct = grader::is_correct(&session.questions[index], &selected);
            session.study_submissions[index] = Some(selected.clone());
            App {
                screen: Screen::QuestionFeedback {
                    index,
                    correct,
                    selected,
                },
                session: Some(session),
            }
        }
        Action::Prev if index > 0 => {
            session.current_index = index - 1;
            let screen = enter_study_question(&session, index - 1);
            App {
                screen,
                session: Some(session),
            }
        }
        Action::Back => App::new(),
        _ => App {
            screen: Screen::Question {
                index,
                cursor,
                selected,
            },
            session: Some(session),
        },
    }
}

fn study_feedback(
    mut session: Session,
    index: usize,
    correct: bool,
    selected: BTreeSet<usize>,
    action: Action,
) -> App {
    match action {
        Action::Confirm => {
            if index + 1 < session.len() {
                session.current_index = index + 1;
                let screen = enter_study_question(&session, index + 1);
                App {
                    screen,
                    session: Some(session),
                }
            } else {
                session.current_index = session.len();
                App {
                    screen: Screen::UnitResult,
                    session: Some(session),
                }
            }
        }
        Action::Back => App::new(),
        _ => App {
            screen: Screen::QuestionFeedback {
                index,
                correct,
                selected,
            },
            session: Some(session),
        },
    }
}

fn exam_question(
    mut session: Session,
    index: usize,
    cursor: usize,
    selected: BTreeSet<usize>,
    action: Action,
) -> App {
    let option_count = session.questions[index].options.len();
    match action {
        Action::CursorUp => App {
            screen: Screen::ExamQuestion {
                index,
                cursor: cursor.saturating_sub(1),
                selected,
            },
            session: Some(session),
        },
        Action::CursorDown => App {
            screen: Screen::ExamQuestion {
                index,
                cursor: (cursor + 1).min(option_count.saturating_sub(1)),
                selected,
            },
            session: Some(session),
        },
        Action::ToggleOption => {
            let selected = toggle(&session.questions[index], cursor, selected);
            App {
                screen: Screen::ExamQuestion {
                    index,
                    cursor,
                    selected,
                },
                session: Some(session),
            }
        }
        Action::Confirm => {
            capture_answer(&mut session, index, selected);
            if index + 1 < session.len() {
                App {
                    screen: Screen::ExamQuestion {
                        index: index + 1,
                        cursor: 0,
                        selected: BTreeSet::new(),
                    },
                    session: Some(session),
                }
            } else {
                App {
                    screen: Screen::ExamResult { scroll: 0 },
                    session: Some(session),
                }
            }
        }
        Action::FinishEarly => {
            capture_answer(&mut session, index, selected);
            session.ended_early = true;
            App {
                screen: Screen::ExamResult { scroll: 0 },
                session: Some(session),
            }
        }
        Action::Back => App::new(),
        _ => App {
            screen: Screen::ExamQuestion {
                index,
                cursor,
                selected,
            },
            session: Some(session),
        },
    }
}

/// Exactly one record per visited exam question, empty selection included.
fn capture_answer(session: &mut Session, index: usize, selected: BTreeSet<usize>) {
    session.answers.push(AnswerRecord {
        question: session.questions[index].clone(),
        selected,
    });
    session.current_index = index + 1;
}

fn result_screen(screen: Screen, session: Option<Session>, action: Action) -> App {
    match action {
        Action::Back | Action::Confirm => App::new(),
        _ => App { screen, session },
    }
}

fn exam_result(session: Option<Session>, scroll: u16, action: Action) -> App {
    match action {
        Action::CursorUp => App {
            screen: Screen::ExamResult {
                scroll: scroll.saturating_sub(1),
            },
            session,
        },
        Action::CursorDown => App {
            screen: Screen::ExamResult {
                scroll: scroll.saturating_add(1),
            },
            session,
        },
        Action::Back | Action::Confirm => App::new(),
        _ => App {
            screen: Screen::ExamResult { scroll },
            session,
        },
    }
}

/// Checkbox toggle for multi-answer questions, radio select otherwise.
fn toggle(question: &Question, cursor: usize, mut selected: BTreeSet<usize>) -> BTreeSet<usize> {
    if question.is_multi() {
        if !selected.remove(&cursor) {
            selected.insert(cursor);
        }
    } else {
        selected.clear();
        selected.insert(cursor);
    }
    selected
}
