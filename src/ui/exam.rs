use crate::models::Session;
use crate::ui::layout::calculate_question_chunks;
use crate::ui::question::{option_items, question_text};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, Paragraph, Wrap},
};
use std::collections::BTreeSet;

pub fn draw_exam_question(
    f: &mut Frame,
    session: &Session,
    index: usize,
    cursor: usize,
    selected: &BTreeSet<usize>,
) {
    let layout = calculate_question_chunks(f.area());
    let question = &session.questions[index];

    let progress = format!("(Exam Mode) Question {} of {}", index + 1, session.len());
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let body = Paragraph::new(question_text(question))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(body, layout.question_area);

    let options = List::new(option_items(question, selected, cursor, false))
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let next_label = if index + 1 < session.len() {
        " Next  "
    } else {
        " Finish Exam  "
    };
    let help_text = vec![Line::from(vec![
        Span::styled(
            "Space",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Select  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(next_label),
        Span::styled(
            "f",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Finish Early  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit Exam"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
