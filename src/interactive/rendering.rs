//! TUI rendering with ratatui

use super::app::{Alert, App, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::length_badge;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word title
            Constraint::Length(3), // Input area
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word list
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let root = app.session.root().text().to_uppercase();
    let header = Paragraph::new(Line::from(vec![
        Span::raw("🔤 "),
        Span::styled(
            root,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Word Scramble ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_input<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter the word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_words<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    length_badge(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let title = format!(" Your Words ({}) ", app.session.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_messages<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", app.rounds_played)).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let letters =
        Paragraph::new(format!("Letters: {}", app.session.letter_count())).alignment(Alignment::Center);
    f.render_widget(letters, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Ctrl+N: New Root | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(Span::styled(
            alert.title.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().add_modifier(Modifier::REVERSED),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A `percent_x` wide, `height` tall rectangle in the middle of `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::dictionary::WordSet;
    use crate::game::{GameConfig, GameSession};
    use crate::wordlists::RootPicker;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_root_and_words() {
        let dictionary = WordSet::from_words(["silk"]);
        let root = RootWord::new("silkworm").unwrap();
        let session = GameSession::new(root, &dictionary, GameConfig::default());
        let mut app = App::new(session, RootPicker::new(["silkworm"], Some(1)));
        app.input_buffer = "silk".to_string();
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("SILKWORM"));
        assert!(text.contains("silk"));
        assert!(text.contains("Your Words (1)"));
    }

    #[test]
    fn renders_alert() {
        let dictionary = WordSet::default();
        let root = RootWord::new("silkworm").unwrap();
        let session = GameSession::new(root, &dictionary, GameConfig::default());
        let mut app = App::new(session, RootPicker::new(["silkworm"], Some(1)));
        app.input_buffer = "zzz".to_string();
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Word not possible"));
    }

    #[test]
    fn centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = centered_rect(50, 7, area);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.width, 50);
    }
}
