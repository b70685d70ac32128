mod home;
mod shell;
mod splash;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    shell::render(frame, area, app.shell(), |frame, body| {
        home::render(frame, body, app.home())
    });
}
