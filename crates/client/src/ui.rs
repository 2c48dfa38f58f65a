use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Mode};
use crate::form::{Field, FormState};
use crate::notice::NoticeKind;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Employee table
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_table(f, app, chunks[1]);
    draw_notice(f, app, chunks[2]);
    draw_help(f, app, chunks[3]);

    match &app.mode {
        Mode::Browse => {}
        Mode::Form(form) => draw_form(f, form),
        Mode::ConfirmDelete(id) => {
            let name = app.employee(*id).map(|e| e.name.as_str()).unwrap_or("this employee");
            draw_confirm(f, name);
        }
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.loading {
        Span::styled(
            " Loading... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" {} employees ", app.employees.len()),
            Style::default().fg(Color::Green),
        )
    };

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Roster "),
        Span::styled(" Employee Records ", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        status,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn draw_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(["Name", "Email", "Role", "Department", "Salary", "Joined", "Active"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = app.employees.iter().map(|e| {
        let active = if e.is_active {
            Cell::from("yes").style(Style::default().fg(Color::Green))
        } else {
            Cell::from("no").style(Style::default().fg(Color::Red))
        };
        Row::new(vec![
            Cell::from(e.name.as_str()),
            Cell::from(e.email.as_str()),
            Cell::from(e.role.as_str()),
            Cell::from(e.department.as_str()),
            Cell::from(format!("{:.2}", e.salary)),
            Cell::from(e.join_date.format("%Y-%m-%d").to_string()),
            active,
        ])
    });

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(24),
        Constraint::Percentage(14),
        Constraint::Percentage(14),
        Constraint::Percentage(10),
        Constraint::Percentage(11),
        Constraint::Percentage(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Employees ")
                .borders(Borders::ALL),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.employees.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_notice(f: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Failure => Color::Red,
    };
    let line = Paragraph::new(format!(" {} ", notice.text))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(line, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        Mode::Browse => "Up/Down select | a add | e edit | d delete | r refresh | q quit",
        Mode::Form(_) => "Tab/Shift-Tab move | Space toggle active | Enter save | Esc cancel",
        Mode::ConfirmDelete(_) => "y confirm | n cancel",
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn draw_form(f: &mut Frame, form: &FormState) {
    let area = popup_area(f.area(), 60, 3 * Field::ALL.len() as u16 + 2);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(form.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical(Field::ALL.map(|_| Constraint::Length(3))).split(inner);

    for (field, row) in Field::ALL.into_iter().zip(rows.iter().copied()) {
        let focused = form.focus == field;
        let border = if focused { Color::Yellow } else { Color::Gray };

        let mut block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        if let Some(error) = form.error_for(field) {
            block = block.title_bottom(Line::from(format!(" {error} ")).fg(Color::Red));
        }

        match form.input(field) {
            Some(input) => {
                let width = row.width.max(3) - 3;
                let scroll = input.visual_scroll(width as usize);
                let paragraph = Paragraph::new(input.value())
                    .scroll((0, scroll as u16))
                    .block(block);
                f.render_widget(paragraph, row);

                if focused {
                    f.set_cursor_position((
                        row.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                        row.y + 1,
                    ));
                }
            }
            None => {
                let (mark, color) = if form.is_active() {
                    ("[x] active", Color::Green)
                } else {
                    ("[ ] inactive", Color::Red)
                };
                let paragraph = Paragraph::new(mark)
                    .style(Style::default().fg(color))
                    .block(block);
                f.render_widget(paragraph, row);
            }
        }
    }
}

fn draw_confirm(f: &mut Frame, name: &str) {
    let area = popup_area(f.area(), 50, 5);
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(format!("Delete {name}?")),
        Line::from(Span::styled(
            "y: delete   n: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}
