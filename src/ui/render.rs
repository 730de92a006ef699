use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus, Screen};

use super::styles;

/// Width of the centered dialogs on both screens
const DIALOG_WIDTH: u16 = 46;

/// Visible width of the input fields inside the login dialog
const FIELD_WIDTH: usize = 24;

pub fn render<S>(frame: &mut Frame, app: &App<S>) {
    render_title_bar(frame, app, Rect::new(0, 0, frame.area().width, 2));
    match app.screen {
        Screen::Login => render_login(frame, app),
        Screen::Welcome => render_welcome(frame, app),
    }
}

fn render_title_bar<S>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let title = "  formlogin";
    let hint = match app.screen {
        Screen::Login => "[Esc] Quit",
        Screen::Welcome => "[Enter] Log out  [Q] Quit",
    };

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_login<S>(frame: &mut Frame, app: &App<S>) {
    let mut lines = vec![
        Line::from(Span::styled("        Sign in to continue", styles::title_style())),
        Line::from(""),
    ];

    lines.push(field_line(
        "Email:    ",
        &app.email,
        app.focus == LoginFocus::Email,
    ));
    if let Some(ref error) = app.email_error {
        lines.push(error_line(error));
    }

    let masked: String = "*".repeat(app.password.len().min(FIELD_WIDTH));
    lines.push(field_line(
        "Password: ",
        &masked,
        app.focus == LoginFocus::Password,
    ));
    if let Some(ref error) = app.password_error {
        lines.push(error_line(error));
    }

    lines.push(Line::from(""));
    let button_focused = app.focus == LoginFocus::Button;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::field_style()
    };
    let button_label = if button_focused {
        " ▶ Sign in ◀ "
    } else {
        "   Sign in   "
    };
    lines.push(Line::from(vec![
        Span::raw("            ["),
        Span::styled(button_label, button_style),
        Span::raw("]"),
    ]));

    if let Some(ref error) = app.storage_error {
        lines.push(Line::from(""));
        lines.push(error_line(error));
    }

    render_dialog(frame, lines);
}

fn render_welcome<S>(frame: &mut Frame, app: &App<S>) {
    let token = app.token.as_deref().unwrap_or("(no session)");

    let mut lines = vec![
        Line::from(Span::styled("              Welcome!", styles::success_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Your token is: ", styles::field_style()),
            Span::styled(token, styles::highlight_style()),
        ]),
    ];

    if let Some(ref error) = app.storage_error {
        lines.push(Line::from(""));
        lines.push(error_line(error));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  Press "),
        Span::styled("[Enter]", styles::help_key_style()),
        Span::styled(" to log out, ", styles::muted_style()),
        Span::styled("[Q]", styles::help_key_style()),
        Span::styled(" to quit", styles::muted_style()),
    ]));

    render_dialog(frame, lines);
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        styles::selected_style()
    } else {
        styles::field_style()
    };
    let display = format!("{:<width$}", value, width = FIELD_WIDTH);
    let cursor = if focused { "▌" } else { "" };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(label, styles::muted_style()),
        Span::raw("["),
        Span::styled(format!("{}{}", display, cursor), value_style),
        Span::raw("]"),
    ])
}

fn error_line(message: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {}", message),
        styles::error_style(),
    ))
}

/// Size the dialog to its contents and center it on screen
fn render_dialog(frame: &mut Frame, lines: Vec<Line>) {
    let height = lines.len() as u16 + 2;
    let area = centered_rect_fixed(DIALOG_WIDTH, height, frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
