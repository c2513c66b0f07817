use anyhow::Result;
use copydeck_config::{Config, DEFAULT_FLOW_KIND};
use copydeck_engine::{DraftFile, DraftView, io};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

mod render;

struct App {
    drafts_path: PathBuf,
    flow_kind: String,
    drafts: Vec<DraftFile>,
    list_state: ListState,
    view_title: String,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(drafts_path: PathBuf, flow_kind: String) -> Result<Self> {
        let drafts = io::scan_draft_files(&drafts_path)?;

        let mut app = Self {
            drafts_path,
            flow_kind,
            drafts,
            list_state: ListState::default(),
            view_title: "Preview".to_string(),
            current_content: Vec::new(),
        };

        // Select first draft if available
        if !app.drafts.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_draft(&mut self) {
        if self.drafts.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.drafts.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_draft(&mut self) {
        if self.drafts.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.drafts.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(draft) = self
            .list_state
            .selected()
            .and_then(|index| self.drafts.get(index))
        else {
            return;
        };

        match io::read_draft(draft.relative_path(), &self.drafts_path) {
            Ok(content) => {
                let view = DraftView::from_text(&content, &self.flow_kind);
                self.view_title = match &view {
                    DraftView::Outline(outline) => {
                        format!("Outline · {} steps", outline.steps.len())
                    }
                    DraftView::Email(doc) => format!("Email · {} sections", doc.sections.len()),
                    DraftView::Plain(_) => "Plain text".to_string(),
                };
                self.current_content = render::render_view(&view);
            }
            Err(e) => {
                log::warn!("Failed to read {}: {e}", draft.relative_path());
                self.view_title = "Error".to_string();
                self.current_content = vec![Line::from(format!("Error reading draft: {e}"))];
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .parse_default_env()
        .init();

    // Determine drafts path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <drafts-folder-path>", args[0]);
            process::exit(1);
        }
    };
    let flow_kind = config
        .as_ref()
        .map_or_else(|| DEFAULT_FLOW_KIND.to_string(), |c| c.flow_kind.clone());

    let has_config = config.is_some();
    let (drafts_path, from_config) = match (args.len(), config) {
        (2, _) => (PathBuf::from(&args[1]), false),
        (1, Some(config)) => (config.drafts_path, true),
        (1, None) => {
            eprintln!("Error: No drafts path provided and no config file found");
            eprintln!("Usage: {} <drafts-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [drafts-folder-path]", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_drafts_dir(&drafts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Drafts path '{}'{} is invalid: {e}",
            drafts_path.display(),
            source
        );
        process::exit(1);
    }

    // First run with a folder argument: remember it for next time
    if !has_config {
        let remembered = std::fs::canonicalize(&drafts_path).unwrap_or_else(|_| drafts_path.clone());
        match Config::new(remembered).save() {
            Ok(()) => log::info!("Saved drafts folder to {}", config_path.display()),
            Err(e) => log::warn!("Could not save config: {e}"),
        }
    }

    let mut app = App::new(drafts_path, flow_kind)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_draft(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_draft(),
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

    // Draft list panel
    let items: Vec<ListItem> = app
        .drafts
        .iter()
        .map(|draft| ListItem::new(Line::from(draft.relative_path().as_str().to_string())))
        .collect();

    let drafts_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Drafts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(drafts_list, chunks[0], &mut app.list_state);

    // Preview panel
    let content = if app.current_content.is_empty() {
        vec![Line::from("Select a draft to preview it")]
    } else {
        app.current_content.clone()
    };

    let preview = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.view_title.clone()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(preview, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));
    f.render_widget(help, rows[1]);
}
