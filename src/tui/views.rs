//! TUI Views
//!
//! Renders the directory as a table with a header, a detail pane for the
//! selected row, a status line and a key-binding footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use super::app::{App, StatusKind};
use super::colors;
use crate::domain::{Description, ToolEntry};

/// Render the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_table(app, frame, chunks[1]);
    render_detail(app, frame, chunks[2]);
    render_status(app, frame, chunks[3]);
    render_footer(app, frame, chunks[4]);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let directory = app.directory();
    let progress_style = if directory.is_loading() {
        Style::default().fg(colors::LOADING)
    } else {
        Style::default().fg(colors::READY)
    };

    let line = Line::from(vec![
        Span::styled("AI Tool ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Directory", Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
        Span::raw("  │  "),
        Span::styled(directory.progress_string(), progress_style),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Description cell: spinner while pending, sentinel in red on failure
fn description_cell<'a>(entry: &'a ToolEntry, spinner: &'static str) -> Cell<'a> {
    match &entry.description {
        Description::Pending => Cell::from(Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(colors::LOADING)),
            Span::styled("Generating...", Style::default().fg(colors::DIM)),
        ])),
        Description::Ready(text) => Cell::from(text.as_str()),
        Description::Failed => {
            Cell::from(Span::styled(entry.description.text(), Style::default().fg(colors::FAILED)))
        }
    }
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let spinner = app.spinner();
    let rows: Vec<Row> = app
        .directory()
        .entries()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(Span::styled(entry.name.as_str(), Style::default().add_modifier(Modifier::BOLD))),
                description_cell(entry, spinner),
                Cell::from(Span::styled(entry.link.as_str(), Style::default().fg(colors::LINK))),
            ])
        })
        .collect();

    let header = Row::new(vec!["Tool Name", "Description", "Link"])
        .style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD));

    let widths = [Constraint::Length(18), Constraint::Min(30), Constraint::Length(34)];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Tools "))
        .row_highlight_style(Style::default().bg(colors::SELECTED).add_modifier(Modifier::BOLD))
        .column_spacing(2);

    let mut state = TableState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let Some(entry) = app.selected_entry() else {
        return;
    };

    let description = if entry.description.is_pending() {
        Span::styled("Generating...", Style::default().fg(colors::DIM))
    } else {
        Span::raw(entry.description.text())
    };

    let text = vec![
        Line::from(description),
        Line::from(vec![
            Span::styled("Visit: ", Style::default().fg(colors::DIM)),
            Span::styled(entry.link.as_str(), Style::default().fg(colors::LINK)),
        ]),
    ];

    let detail = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", entry.name)));
    frame.render_widget(detail, area);
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let Some(status) = app.status() else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => colors::DIM,
        StatusKind::Success => colors::READY,
        StatusKind::Error => colors::FAILED,
    };
    frame.render_widget(Paragraph::new(status.text.as_str()).style(Style::default().fg(color)), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let export_style = if app.can_export() {
        Style::default().fg(colors::KEYBIND)
    } else {
        Style::default().fg(colors::DIM).add_modifier(Modifier::CROSSED_OUT)
    };

    let line = Line::from(vec![
        Span::styled("<d>", export_style),
        Span::raw(" Download CSV  "),
        Span::styled("<j/k>", Style::default().fg(colors::KEYBIND)),
        Span::raw(" Move  "),
        Span::styled("<q>", Style::default().fg(colors::KEYBIND)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
