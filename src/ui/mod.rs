pub mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::Phase;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" Alien Invasion ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(100, 255, 100))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scoreboard
            Constraint::Min(8),    // Field
            Constraint::Length(1), // Help
        ])
        .split(inner);

    render_scoreboard(frame, app, chunks[0]);

    let w = chunks[1].width as usize;
    let h = chunks[1].height as usize;
    if w > 0 && h > 0 {
        let lines = field::render_field(&app.game, w, h);
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    render_help(frame, app, chunks[2]);

    // Play overlay while no round is running; its drawn area doubles as the
    // mouse hit box.
    if !app.game.is_active() {
        app.play_button = Some(render_play_button(frame, frame.area()));
    } else {
        app.play_button = None;
    }
}

fn render_scoreboard(frame: &mut Frame, app: &App, area: Rect) {
    let stats = &app.game.stats;
    let ships = "\u{25b2} ".repeat(stats.ships_left as usize);
    let dim = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(
            format!(" Score: {} ", stats.score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", dim),
        Span::styled(
            format!("High: {} ", stats.high_score),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" | ", dim),
        Span::styled(
            format!("Level: {} ", stats.level),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" | ", dim),
        Span::styled(
            format!("Ships: {}", ships),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let line = match app.game.phase {
        Phase::Inactive => Line::from(vec![
            Span::styled(" Click ", dim),
            Span::styled(
                "\u{25b6} Play",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start | Q quit", dim),
        ]),
        Phase::Stunned { .. } => Line::from(Span::styled(
            " Ship down! ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Phase::Active => Line::from(vec![
            Span::styled(" \u{2190}\u{2192} Move ", dim),
            Span::styled("| ", dim),
            Span::styled(
                "Space Fire ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", dim),
            Span::styled("Q Quit", dim),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the centered Play button and return the cell rect it occupies.
fn render_play_button(frame: &mut Frame, area: Rect) -> Rect {
    let w = 24u16.min(area.width.saturating_sub(4));
    let h = 5u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let button = Rect::new(x, y, w, h);

    frame.render_widget(Clear, button);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(button);
    frame.render_widget(block, button);

    let lines = vec![
        Line::from(Span::styled(
            "\u{25b6}  P L A Y",
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "click to begin",
            Style::default().fg(Color::Rgb(150, 150, 170)),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    button
}
