use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::shell::PageShell;

use super::splash;

/// Header, body and footer, with the splash drawn over everything while it runs.
pub fn render<F>(frame: &mut Frame, area: Rect, shell: &PageShell, body: F)
where
    F: FnOnce(&mut Frame, Rect),
{
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], shell);
    body(frame, chunks[1]);
    render_footer(frame, chunks[2], shell);

    if let Some(view) = shell.gate().controller().and_then(|controller| controller.view()) {
        splash::render(frame, area, &view);
    }
}

fn render_header(frame: &mut Frame, area: Rect, shell: &PageShell) {
    let widget = Paragraph::new(Span::styled(
        shell.metadata().title.as_str(),
        Style::default().fg(Color::Cyan).bold(),
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, shell: &PageShell) {
    let line = Line::from(vec![
        Span::styled(
            shell.metadata().description.as_str(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("  ·  q quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
