use crate::models::{Question, Session};
use crate::ui::layout::calculate_question_chunks;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::collections::BTreeSet;

/// Option rows with checkbox markers for multi-answer questions and radio
/// markers for single-answer ones. Locked rows render dimmed.
pub(super) fn option_items(
    question: &Question,
    selected: &BTreeSet<usize>,
    cursor: usize,
    locked: bool,
) -> Vec<ListItem<'static>> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if question.is_multi() {
                if selected.contains(&i) { "[x]" } else { "[ ]" }
            } else if selected.contains(&i) {
                "(x)"
            } else {
                "( )"
            };
            let style = if locked {
                Style::default().fg(Color::DarkGray)
            } else if i == cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", marker, option)).style(style)
        })
        .collect()
}

pub(super) fn question_text(question: &Question) -> Text<'_> {
    let mut text = Text::from(question.question.as_str());
    if question.is_multi() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Select ALL that apply.",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    text
}

fn selection_texts(question: &Question, indices: impl Iterator<Item = usize>) -> String {
    let texts: Vec<&str> = indices
        .filter_map(|i| question.options.get(i).map(String::as_str))
        .collect();
    if texts.is_empty() {
        "None".to_string()
    } else {
        texts.join(", ")
    }
}

fn draw_study_header(f: &mut Frame, session: &Session, index: usize, area: ratatui::layout::Rect) {
    let unit = session.unit.as_deref().unwrap_or("");
    let progress = format!(
        "Unit: {} (Question {} of {})",
        unit,
        index + 1,
        session.len()
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn draw_question(
    f: &mut Frame,
    session: &Session,
    index: usize,
    cursor: usize,
    selected: &BTreeSet<usize>,
) {
    let layout = calculate_question_chunks(f.area());
    let question = &session.questions[index];
    let locked = session
        .study_submissions
        .get(index)
        .is_some_and(|s| s.is_some());

    draw_study_header(f, session, index, layout.header_area);

    let body = Paragraph::new(question_text(question))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(body, layout.question_area);

    let options_title = if locked { "Options (submitted)" } else { "Options" };
    let options = List::new(option_items(question, selected, cursor, locked))
        .block(Block::default().borders(Borders::ALL).title(options_title));
    f.render_widget(options, layout.options_area);

    let mut spans = Vec::new();
    if !locked {
        spans.extend([
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
            Span::from(" Submit  "),
        ]);
    } else {
        spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Next  "),
        ]);
    }
    spans.extend([
        Span::styled(
            "←",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Previous  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Menu"),
    ]);
    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_feedback(
    f: &mut Frame,
    session: &Session,
    index: usize,
    correct: bool,
    selected: &BTreeSet<usize>,
) {
    let layout = calculate_question_chunks(f.area());
    let question = &session.questions[index];

    draw_study_header(f, session, index, layout.header_area);

    let body = Paragraph::new(question_text(question))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(body, layout.question_area);

    let verdict = if correct {
        Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Incorrect!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };

    let mut text = Text::default();
    text.push_line(Line::from(verdict));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!(
        "Your Answer: {}",
        selection_texts(question, selected.iter().copied())
    )));
    text.push_line(Line::from(format!(
        "Correct Answer: {}",
        selection_texts(question, question.correct_answers.iter().copied())
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("Explanation: {}", question.explanation)));

    let result = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(result, layout.options_area);

    let next_label = if index + 1 < session.len() {
        " Next Question  "
    } else {
        " Finish  "
    };
    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(next_label),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
