use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::markup::plain_text;
use crate::app::App;
use crate::models::Question;
use crate::runtime::{ControlKind, Mark, QuestionState};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(question), Some(state)) = (app.current_question(), app.current_state()) else {
        return;
    };

    let prompt = prompt_text(question);
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(prompt_height(&prompt, area.height)),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app, state);
    render_prompt(frame, chunks[1], prompt, app.prompt_scroll());
    render_options(frame, chunks[2], question, state, app.cursor());
    render_outcome(frame, chunks[3], state);
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, state: &QuestionState) {
    let hint = match state.kind() {
        ControlKind::Single => "choose one",
        ControlKind::Multi => "choose all that apply",
    };
    let progress = format!(
        "{}  ·  {}/{}",
        hint,
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn prompt_text(question: &Question) -> String {
    let mut text = plain_text(&question.prompt);
    if let Some(image) = &question.image {
        text.push_str(&format!("\n[image: {}]", image));
    }
    text
}

/// Rows for the prompt pane: the prompt plus its bottom border, capped at
/// half the screen. Longer prompts scroll.
fn prompt_height(prompt: &str, screen_height: u16) -> u16 {
    let wanted = prompt.lines().count().saturating_add(1);
    let cap = (screen_height / 2).max(2);
    u16::try_from(wanted).unwrap_or(u16::MAX).clamp(2, cap)
}

fn render_prompt(frame: &mut Frame, area: Rect, text: String, scroll: usize) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn control_glyph(kind: ControlKind, selected: bool) -> &'static str {
    match (kind, selected) {
        (ControlKind::Single, false) => "( )",
        (ControlKind::Single, true) => "(•)",
        (ControlKind::Multi, false) => "[ ]",
        (ControlKind::Multi, true) => "[x]",
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    state: &QuestionState,
    cursor: usize,
) {
    if question.options.is_empty() {
        let widget = Paragraph::new("No options for this question.").fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let at_cursor = index == cursor && !state.is_disabled();
        let style = match state.mark(index) {
            Some(Mark::Correct) => Style::default().fg(Color::Green).bold(),
            Some(Mark::Incorrect) => Style::default().fg(Color::Red),
            None if at_cursor => Style::default().fg(Color::Cyan).bold(),
            None if state.is_disabled() => Style::default().fg(Color::DarkGray),
            None => Style::default().fg(Color::Gray),
        };
        let marker = if at_cursor { ">" } else { " " };

        let mut text = plain_text(&option.text);
        if let Some(image) = &option.image {
            text.push_str(&format!(" [image: {}]", image));
        }

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(
                format!("{} ", control_glyph(state.kind(), state.is_selected(index))),
                style,
            ),
            Span::styled(text, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_outcome(frame: &mut Frame, area: Rect, state: &QuestionState) {
    let Some(outcome) = state.outcome() else {
        return;
    };
    let color = if outcome.is_correct() {
        Color::Green
    } else {
        Color::Red
    };
    let widget = Paragraph::new(outcome.message())
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k move  ·  space select  ·  c check  ·  r reveal  ·  d/u scroll  ·  n/p question  ·  f finish  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
