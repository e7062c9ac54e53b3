//! The forge confirmation dialog
//!
//! A blocking modal: renders the warning and usage hint for the chosen
//! focus and waits for Enter (invoke) or Escape (cancel). Nothing in the
//! game state is touched from this layer.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use rf_core::action::ForgeTarget;

use crate::theme::Theme;

/// Renderable confirmation dialog for one forge focus
pub struct ForgePrompt<'a> {
    target: ForgeTarget,
    theme: &'a Theme,
}

impl<'a> ForgePrompt<'a> {
    pub fn new(target: ForgeTarget, theme: &'a Theme) -> Self {
        Self { target, theme }
    }
}

impl Widget for ForgePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(area, 60, 50);

        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!("Resonance Forge — {} focus", self.target.noun()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Channeling the forge retunes that equipped item, but each use \
                 summons additional guardians.",
                Style::default().fg(self.theme.bad),
            )),
            Line::from(Span::styled(
                "Repeated use risks rupturing the forge entirely.",
                Style::default().fg(self.theme.bad),
            )),
            Line::default(),
            Line::from(Span::styled(
                self.target.usage_hint(),
                Style::default().fg(self.theme.text),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    ": Invoke the forge.  ",
                    Style::default().fg(self.theme.text_dim),
                ),
                Span::styled(
                    "[Esc]",
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": Cancel.", Style::default().fg(self.theme.text_dim)),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Show the dialog and block until the player confirms or cancels.
///
/// Returns true on Enter, false on Escape.
pub fn show_forge_prompt<B: Backend>(
    terminal: &mut Terminal<B>,
    target: ForgeTarget,
    theme: &Theme,
) -> io::Result<bool> {
    loop {
        terminal.draw(|frame| {
            frame.render_widget(ForgePrompt::new(target, theme), frame.area());
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Enter => return Ok(true),
                KeyCode::Esc => return Ok(false),
                _ => {}
            }
        }
    }
}

/// Center a percentage-sized rect inside `area`
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (area.width * percent_x / 100).max(1);
    let height = (area.height * percent_y / 100).max(1);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
