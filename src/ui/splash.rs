use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::splash::SplashView;

const CURSOR: &str = "▌";
const LOADING_DOTS: &str = "● ● ●";

pub fn render(frame: &mut Frame, area: Rect, view: &SplashView<'_>) {
    frame.render_widget(Clear, area);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let palette = Palette::for_view(view);
    let cursor = if view.cursor_visible { CURSOR } else { " " };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(view.typed_title, palette.title),
            Span::styled(cursor, palette.accent),
        ]),
        Line::from(""),
        Line::from(Span::styled(view.tagline, palette.body)),
    ];
    if let Some(description) = view.description {
        content.push(Line::from(Span::styled(description, palette.muted)));
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(LOADING_DOTS, palette.accent)));
    content.push(Line::from(Span::styled(view.loading_text, palette.muted)));
    if let Some(subtext) = view.loading_subtext {
        content.push(Line::from(Span::styled(subtext, palette.muted)));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border),
        );

    frame.render_widget(widget, chunks[1]);
}

/// Styles for one frame. A fading splash is drawn dimmed.
struct Palette {
    title: Style,
    accent: Style,
    body: Style,
    muted: Style,
    border: Style,
}

impl Palette {
    fn for_view(view: &SplashView<'_>) -> Self {
        if view.visible {
            Self {
                title: Style::default().fg(Color::Cyan).bold(),
                accent: Style::default().fg(Color::Blue),
                body: Style::default().fg(Color::Gray),
                muted: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::DarkGray),
            }
        } else {
            let faded = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
            Self {
                title: faded,
                accent: faded,
                body: faded,
                muted: faded,
                border: faded,
            }
        }
    }
}
