//! Read-only terminal viewer: paragraph list on the left, rendered blocks on
//! the right.

use anyhow::Result;
use broadsheet_engine::{Block, Document, InlineSpan, render_blocks};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{io::stdout, path::PathBuf};

struct App {
    path: PathBuf,
    document: Document,
    list_state: ListState,
}

impl App {
    fn new(path: PathBuf, document: Document) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            path,
            document,
            list_state,
        }
    }

    fn next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.document.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(0) | None => self.document.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected_blocks(&self) -> Vec<Block> {
        self.list_state
            .selected()
            .and_then(|i| self.document.get(i))
            .map(render_blocks)
            .unwrap_or_default()
    }
}

pub fn run(path: PathBuf, document: Document) -> Result<()> {
    let mut app = App::new(path, document);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Paragraph list panel
    let items: Vec<ListItem> = app
        .document
        .paragraphs()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let first_line = p.lines().next().unwrap_or("");
            ListItem::new(Line::from(format!("{:>2} {first_line}", i + 1)))
        })
        .collect();

    let title = app
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Article".to_string());
    let list = List::new(items)
        .block(Panel::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    // Rendered paragraph panel, with the pull quote underneath when present
    let mut lines = blocks_to_lines(&app.selected_blocks());
    if lines.is_empty() {
        lines.push(Line::styled(
            "(empty paragraph)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let content_area = match app.document.pull_quote.as_deref() {
        Some(quote) => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(4)])
                .split(chunks[1]);
            let pull_quote = Paragraph::new(Line::styled(
                quote.to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .block(Panel::default().borders(Borders::ALL).title("Pull quote"))
            .wrap(Wrap { trim: true });
            f.render_widget(pull_quote, split[1]);
            split[0]
        }
        None => chunks[1],
    };

    let content = Paragraph::new(lines)
        .block(Panel::default().borders(Borders::ALL).title("Rendered"))
        .wrap(Wrap { trim: false });
    f.render_widget(content, content_area);

    let help = Line::from("q: Quit | ↑/k: Previous | ↓/j: Next");
    f.render_widget(Paragraph::new(help), rows[1]);
}

/// Turns rendered blocks into styled terminal lines, one blank line between
/// blocks.
fn blocks_to_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        match block {
            Block::Paragraph(spans) => lines.push(Line::from(styled(spans))),
            Block::BlockQuote(spans) => {
                let mut out = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];
                out.extend(
                    styled(spans)
                        .into_iter()
                        .map(|s| s.patch_style(Style::default().add_modifier(Modifier::ITALIC))),
                );
                lines.push(Line::from(out));
            }
            Block::List { kind, items } => {
                for (n, item) in items.iter().enumerate() {
                    let marker = if kind.is_ordered() {
                        format!("  {}. ", n + 1)
                    } else {
                        "  • ".to_string()
                    };
                    let mut out = vec![Span::raw(marker)];
                    out.extend(styled(item));
                    lines.push(Line::from(out));
                }
            }
        }
    }
    lines
}

fn styled(spans: &[InlineSpan]) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|s| {
            let mut style = Style::default();
            if s.emphasis.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if s.emphasis.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            Span::styled(s.text.clone(), style)
        })
        .collect()
}
