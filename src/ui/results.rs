use crate::grader;
use crate::models::Session;
use crate::ui::layout::calculate_result_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_unit_result(f: &mut Frame, session: &Session) {
    let layout = calculate_result_chunks(f.area());

    let title = Paragraph::new("Unit Complete")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let unit = session.unit.as_deref().unwrap_or("");
    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("Unit \"{}\" Completed!", unit),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("Questions: {}", session.len())));

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    draw_result_help(f, layout.help_area, false);
}

pub fn draw_exam_result(f: &mut Frame, session: &Session, scroll: u16) {
    let layout = calculate_result_chunks(f.area());

    let title_text = if session.ended_early {
        "Exam Ended Early"
    } else {
        "Exam Finished!"
    };
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let report = grader::score(&session.answers);
    let missed = grader::review(&session.answers);

    let mut text = Text::default();
    text.push_line(Line::from(format!(
        "Answered: {} / {} | Correct: {} | Needed to Pass: {}",
        report.total,
        session.len(),
        report.correct_count,
        report.min_to_pass
    )));
    text.push_line(Line::from(""));
    let verdict = if report.passed {
        Span::styled(
            "PASS",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "FAIL",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    text.push_line(Line::from(verdict));

    if !missed.is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Incorrect Answers Review",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for entry in &missed {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                format!("QUESTION: {}", truncate_string(&entry.question, 200)),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(Span::styled(
                format!("Your Answer: {}", entry.selected),
                Style::default().fg(Color::Red),
            )));
            text.push_line(Line::from(Span::styled(
                format!("Correct Answers: {}", entry.correct),
                Style::default().fg(Color::Green),
            )));
            text.push_line(Line::from(format!("Explanation: {}", entry.explanation)));
        }
    }

    let body = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    draw_result_help(f, layout.help_area, true);
}

fn draw_result_help(f: &mut Frame, area: ratatui::layout::Rect, scrollable: bool) {
    let mut spans = Vec::new();
    if scrollable {
        spans.extend([
            Span::styled(
                "↑/↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Scroll  "),
        ]);
    }
    spans.extend([
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu"),
    ]);

    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
