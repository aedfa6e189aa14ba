use crate::creature::status::{Mood, StatusSnapshot};
use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Gauge colour for a stat where high is good.
fn stat_color(value: f64) -> Color {
    if value < 30.0 {
        Color::Red
    } else if value < 70.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Hunger runs the other way: 0 is full.
fn hunger_color(value: f64) -> Color {
    if value < 40.0 {
        Color::Green
    } else if value < 80.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Dead => Color::DarkGray,
        Mood::Sick => Color::Red,
        Mood::Sleeping => Color::Magenta,
        Mood::Happy => Color::Green,
        Mood::Sad => Color::Blue,
        Mood::Neutral => Color::White,
    }
}

/// Draws the creature panel: header, mood art, stat gauges and alerts.
pub fn draw_status_panel(frame: &mut Frame, area: Rect, snapshot: &StatusSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(
            " {} the {} · {} days ",
            snapshot.name,
            snapshot.life_stage.name(),
            snapshot.age_days
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mood art
            Constraint::Length(1), // Condition
            Constraint::Length(6), // Gauges
            Constraint::Length(2), // Weight and waste
            Constraint::Min(0),    // Alerts and tricks
        ])
        .split(inner);

    let art = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            snapshot.mood.art(),
            Style::default()
                .fg(mood_color(snapshot.mood))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(art, chunks[0]);

    let condition = Paragraph::new(snapshot.condition())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(condition, chunks[1]);

    draw_gauges(frame, chunks[2], snapshot);

    let waste = if snapshot.waste_count == 0 {
        Span::styled("Spotless!", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "[poop] ".repeat(snapshot.waste_count as usize),
            Style::default().fg(Color::Yellow),
        )
    };
    let extras = Paragraph::new(vec![
        Line::from(format!("Weight: {:.1}", snapshot.weight)),
        Line::from(vec![Span::raw("Cleanliness: "), waste]),
    ]);
    frame.render_widget(extras, chunks[3]);

    draw_alerts(frame, chunks[4], snapshot);
}

fn draw_gauges(frame: &mut Frame, area: Rect, snapshot: &StatusSnapshot) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); 5])
        .split(area);

    let stats = [
        ("Hunger", snapshot.hunger, hunger_color(snapshot.hunger)),
        ("Happiness", snapshot.happiness, stat_color(snapshot.happiness)),
        ("Energy", snapshot.energy, stat_color(snapshot.energy)),
        ("Health", snapshot.health, stat_color(snapshot.health)),
        ("Discipline", snapshot.discipline, stat_color(snapshot.discipline)),
    ];
    for (row, (label, value, color)) in rows.iter().zip(stats) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(10)])
            .split(*row);
        frame.render_widget(Paragraph::new(label), cols[0]);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .label(format!("{:.0}%", value))
            .ratio((value / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, cols[1]);
    }
}

fn draw_alerts(frame: &mut Frame, area: Rect, snapshot: &StatusSnapshot) {
    let mut lines = Vec::new();
    for alert in &snapshot.alerts {
        let style = if alert.is_urgent() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        lines.push(Line::from(Span::styled(format!("! {}", alert.message()), style)));
    }
    if !snapshot.tricks_known.is_empty() {
        let tricks: Vec<&str> = snapshot.tricks_known.iter().map(|t| t.name()).collect();
        lines.push(Line::from(Span::styled(
            format!("Tricks: {}", tricks.join(", ")),
            Style::default().fg(Color::Cyan),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// Draws the most recent log entries, newest at the bottom.
pub fn draw_event_log(frame: &mut Frame, area: Rect, snapshot: &StatusSnapshot) {
    let block = Block::default().borders(Borders::ALL).title(" Recent ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let skip = snapshot.recent_events.len().saturating_sub(visible);
    let lines: Vec<Line> = snapshot
        .recent_events
        .iter()
        .skip(skip)
        .map(|entry| {
            let when = Local
                .timestamp_opt(entry.at, 0)
                .single()
                .map(|t| t.format("%m-%d %H:%M").to_string())
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(format!("{} ", when), Style::default().fg(Color::DarkGray)),
                Span::raw(entry.text.clone()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
