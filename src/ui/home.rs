use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::home::HomeView;

pub fn render(frame: &mut Frame, area: Rect, home: &HomeView) {
    let Some(hero) = home.hero() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Fill(1),
    ])
    .margin(2)
    .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            hero.title.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(hero.subtitle.as_str().fg(Color::Gray)),
    ];
    if let Some(description) = &hero.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.as_str().fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}
