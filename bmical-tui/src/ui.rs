use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

use bmical_engine::command::Field;
use bmical_model::category::Category;

use crate::view::ViewState;

pub fn render(frame: &mut Frame, state: &ViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, rows[0]);
    render_input(frame, rows[1], state, Field::Height);
    render_input(frame, rows[2], state, Field::Weight);
    render_result(frame, rows[3], state);
    render_chart(frame, rows[4], state);
    render_footer(frame, rows[5], state);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("BMI Calculator")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &ViewState, field: Field) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let focused = state.focused == field;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = if focused { "\u{2588}" } else { "" };
    let input = Paragraph::new(format!("{}{}", state.input(field), cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ({}) ", field.label(), field.unit())),
    );
    frame.render_widget(input, parts[0]);

    if let Some(message) = state.error(field) {
        let error = Paragraph::new(message.to_owned()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, parts[1]);
    }
}

fn render_result(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(outcome) = &state.outcome else {
        return;
    };

    let value = state.displayed_bmi.unwrap_or(outcome.bmi);
    let color = category_color(outcome.category);
    let lines = vec![
        Line::from(Span::styled(
            format!("{:.1}", value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            outcome.category.to_string(),
            Style::default().fg(color),
        )),
        Line::from(outcome.category.description()),
    ];
    let result = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Your BMI "));
    frame.render_widget(result, area);
}

fn render_chart(frame: &mut Frame, area: Rect, state: &ViewState) {
    let active = state.outcome.as_ref().map(|outcome| outcome.category);

    let bars: Vec<Span> = Category::iter()
        .map(|category| {
            let mut style = Style::default()
                .fg(Color::Black)
                .bg(category_color(category));
            if active == Some(category) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            Span::styled(format!(" {:^14} ", category.to_string()), style)
        })
        .collect();
    let labels = Category::iter()
        .map(|category| format!(" {:^14} ", range_label(category)))
        .collect::<String>();

    let chart = Paragraph::new(vec![Line::from(bars), Line::from(labels)])
        .alignment(Alignment::Center);
    frame.render_widget(chart, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut hints = vec!["Enter calculate", "Tab switch field", "q quit"];
    if state.result_visible() {
        hints.insert(1, "Esc reset");
    }
    let footer = Paragraph::new(hints.join(" \u{00b7} "))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Underweight => Color::Blue,
        Category::NormalWeight => Color::Green,
        Category::Overweight => Color::Yellow,
        Category::Obese => Color::Red,
    }
}

fn range_label(category: Category) -> &'static str {
    match category {
        Category::Underweight => "< 18.5",
        Category::NormalWeight => "18.5 - 24.9",
        Category::Overweight => "25.0 - 29.9",
        Category::Obese => "\u{2265} 30.0",
    }
}
