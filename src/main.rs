use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::env;
use std::io;
use std::path::Path;

use exam_trainer::{Action, App, QuestionBank, Screen, UnitTable, logger, ui};

const DEFAULT_BANK_PATH: &str = "questions.json";
const UNIT_TABLE_PATH: &str = "units.json";

fn main() -> io::Result<()> {
    logger::init();

    // The bank and unit table are read once, before the UI becomes
    // interactive. A failed load is terminal for this run: the menu shows an
    // empty state and the user has to restart after fixing the data.
    let bank_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BANK_PATH.to_string());
    let table = load_unit_table(UNIT_TABLE_PATH);
    let bank = match QuestionBank::load(&bank_path, &table) {
        Ok(bank) => {
            logger::log(&format!(
                "Loaded {} questions from {}.",
                bank.len(),
                bank_path
            ));
            bank
        }
        Err(err) => {
            logger::log(&format!(
                "Failed to load questions from {}: {}",
                bank_path, err
            ));
            QuestionBank::empty()
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui::draw(f, &app, &bank))?;

        if let Event::Key(key) = event::read()? {
            if matches!(app.screen, Screen::MainMenu { .. })
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                break;
            }
            if let Some(action) = Action::from_key(&app.screen, key.code) {
                app = app.apply(action, &bank);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn load_unit_table(path: &str) -> UnitTable {
    if !Path::new(path).exists() {
        return UnitTable::identity();
    }
    match UnitTable::from_file(path) {
        Ok(table) => table,
        Err(err) => {
            logger::log(&format!("Failed to load unit table from {}: {}", path, err));
            UnitTable::identity()
        }
    }
}
