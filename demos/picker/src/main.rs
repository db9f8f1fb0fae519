//! Picker - pick one option from a list by typing part of its label
//!
//! Demonstrates the search-select control owned by a store-driven app:
//! - Options and field names come from JSON files or flags
//! - Selection and search notifications are dispatched as actions
//! - The chosen value is bound in app state and shown beside the control
//!
//! Keys: Tab = focus the control, Esc (outside the control) or Ctrl+C = quit

mod action;
mod reducer;
mod state;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use search_select::{
    format_key_for_display, load_options, parse_options, spawn_event_poller, Component, EventKind,
    LoadError, SearchSelect, SearchSelectProps, SelectConfig, Store, DEFAULT_MAX_ROWS,
};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::action::PickerAction;
use crate::reducer::reducer;
use crate::state::PickerState;

const FRUITS: &str = r#"[
    {"id": 1, "name": "Apple"},
    {"id": 2, "name": "Banana"},
    {"id": 3, "name": "Cherry"},
    {"id": 4, "name": "Damson"},
    {"id": 5, "name": "Elderberry"},
    {"id": 6, "name": "Fig"},
    {"id": 7, "name": "Grape"},
    {"id": 8, "name": "Mandarin"},
    {"id": 9, "name": "Pineapple"},
    {"id": 10, "name": "Rambutan"}
]"#;

const HELP: &[(&str, &str)] = &[
    ("tab", "focus"),
    ("down", "results"),
    ("enter", "select"),
    ("backspace", "clear"),
    ("esc", "leave"),
    ("ctrl+c", "quit"),
];

/// Picker - searchable select in the terminal
#[derive(Parser, Debug)]
#[command(name = "picker")]
#[command(about = "Pick an option from a JSON list by typing part of its label")]
struct Args {
    /// JSON array of option records (built-in fruit list when omitted)
    #[arg(long)]
    options: Option<PathBuf>,

    /// JSON file with placeholder/optionValue/optionText settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text shown while nothing is selected
    #[arg(long)]
    placeholder: Option<String>,

    /// Field holding each option's identifier
    #[arg(long)]
    value_field: Option<String>,

    /// Field holding each option's label
    #[arg(long)]
    text_field: Option<String>,

    /// Identifier of the initially selected option (JSON, or a plain string)
    #[arg(long)]
    value: Option<String>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Everything loaded before the terminal is taken over
struct Setup {
    options: Vec<Value>,
    config: SelectConfig,
    value: Option<Value>,
}

impl Setup {
    fn from_args(args: &Args) -> Result<Self, LoadError> {
        let options = match &args.options {
            Some(path) => load_options(path)?,
            None => parse_options(FRUITS)?,
        };

        let mut config = match &args.config {
            Some(path) => SelectConfig::from_path(path)?,
            None => SelectConfig::default(),
        };
        if let Some(placeholder) = &args.placeholder {
            config = config.with_placeholder(placeholder.as_str());
        }
        if let Some(field) = &args.value_field {
            config = config.with_option_value(field.as_str());
        }
        if let Some(field) = &args.text_field {
            config = config.with_option_text(field.as_str());
        }

        let value = args.value.as_deref().map(|raw| {
            let id = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            let mut record = serde_json::Map::new();
            record.insert(config.option_value.clone(), id);
            Value::Object(record)
        });

        Ok(Self {
            options,
            config,
            value,
        })
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(true)
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let setup = match Setup::from_args(&args) {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, setup).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn select_props<'a>(
    options: &'a [Value],
    config: &'a SelectConfig,
) -> SearchSelectProps<'a, PickerAction> {
    SearchSelectProps {
        options,
        config,
        max_rows: DEFAULT_MAX_ROWS,
        on_change: PickerAction::SelectionChanged,
        on_search: PickerAction::SearchChanged,
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    setup: Setup,
) -> io::Result<()> {
    let Setup {
        options,
        config,
        value,
    } = setup;

    let mut select = SearchSelect::mount(&options, value.as_ref(), &config);
    let mut store = Store::new(PickerState::default(), reducer);
    // The resolved initial record arrives like any other selection
    for action in select.take_notifications(select_props(&options, &config)) {
        store.dispatch(action);
    }

    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<PickerAction>();

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(event_tx, Duration::from_millis(16), cancel_token.clone());

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                draw(frame, &mut select, &store, &options, &config);
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                let quit = event.is_global() && matches!(event, EventKind::Key(_));
                let leave = matches!(&event, EventKind::Key(key) if key.code == KeyCode::Esc)
                    && !select.state().has_focus();
                if quit || leave {
                    let _ = action_tx.send(PickerAction::Quit);
                    continue;
                }

                // Tab moves keyboard focus into the control from outside
                let event = match &event {
                    EventKind::Key(key)
                        if key.code == KeyCode::Tab && !select.state().has_focus() =>
                    {
                        EventKind::FocusIn
                    }
                    _ => event,
                };

                for action in select.handle_event(&event, select_props(&options, &config)) {
                    let _ = action_tx.send(action);
                }

                // Cursor, focus and highlight change without any action
                should_render = true;
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, PickerAction::Quit) {
                    break;
                }
                should_render |= store.dispatch(action);
            }
        }
    }

    cancel_token.cancel();
    let log = store.log();
    tracing::info!(
        dispatched = log.total(),
        changed = log.changed(),
        "Picker closed"
    );
    Ok(())
}

fn draw(
    frame: &mut Frame,
    select: &mut SearchSelect,
    store: &Store<PickerState, PickerAction>,
    options: &[Value],
    config: &SelectConfig,
) {
    let area = frame.area();
    let [title_area, body, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(" Picker ")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        title_area,
    );

    let [select_area, status_area] =
        Layout::horizontal([Constraint::Length(36), Constraint::Fill(1)]).areas(body);

    draw_status(frame, status_area, store, config);
    // Drawn last so the result panel covers anything beneath it
    select.render(frame, select_area, select_props(options, config));

    let mut spans = Vec::new();
    for (key, label) in HELP {
        spans.push(Span::styled(
            format!(" {} ", format_key_for_display(key)),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_status(
    frame: &mut Frame,
    area: Rect,
    store: &Store<PickerState, PickerAction>,
    config: &SelectConfig,
) {
    let state = store.state();
    let search = match &state.last_search {
        Some(text) => format!("{text:?}"),
        None => "(none)".to_string(),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Chosen: ", Style::default().fg(Color::DarkGray)),
            Span::raw(state.chosen_label(&config.option_text)),
        ]),
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
            Span::raw(search),
        ]),
        Line::from(vec![
            Span::styled("Selections: ", Style::default().fg(Color::DarkGray)),
            Span::raw(store.log().category_count("selection").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Search events: ", Style::default().fg(Color::DarkGray)),
            Span::raw(store.log().category_count("search").to_string()),
        ]),
    ];

    let block = Block::default()
        .title(" Bound value ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
