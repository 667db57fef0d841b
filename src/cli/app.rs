use super::autocomplete::GenreCompleter;
use super::ui;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use moviedesk::{DraftField, Movie, MovieApi, MovieController};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, ListState},
};
use std::io;
use tui_textarea::{CursorMove, TextArea};

const SEARCH_TITLE: &str = "Search title, genre, year";

/// Which widget receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(DraftField),
    Search,
    List,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Field(DraftField::Title),
        Focus::Field(DraftField::Year),
        Focus::Field(DraftField::Genre),
        Focus::Field(DraftField::Rating),
        Focus::Search,
        Focus::List,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App<A: MovieApi> {
    pub controller: MovieController<A>,
    /// Form inputs, in `DraftField::ALL` order
    pub inputs: Vec<TextArea<'static>>,
    pub search: TextArea<'static>,
    pub focus: Focus,
    pub list_state: ListState,
    pub exit: bool,

    // Genre autocomplete state
    pub completer: GenreCompleter,
    pub suggestions: Vec<String>,
    pub suggestion_index: usize,
    pub popup_open: bool,
}

impl<A: MovieApi> App<A> {
    pub fn new(controller: MovieController<A>) -> Self {
        let mut app = Self {
            controller,
            inputs: Vec::new(),
            search: new_input(SEARCH_TITLE, ""),
            focus: Focus::Field(DraftField::Title),
            list_state: ListState::default(),
            exit: false,
            completer: GenreCompleter::new(),
            suggestions: Vec::new(),
            suggestion_index: 0,
            popup_open: false,
        };
        app.sync_inputs();
        app
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res.map_err(Into::into)
    }

    async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        // The status line reports an unreachable backend; the UI stays usable.
        let _ = self.controller.load().await;
        self.clamp_selection();

        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key).await;
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        // Delete confirmation swallows every other key
        if self.controller.pending_delete().is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    let _ = self.controller.confirm_delete().await;
                    self.after_reload();
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.controller.cancel_delete();
                }
                _ => {}
            }
            return;
        }

        // Navigation inside Popup
        if self.popup_open {
            match key.code {
                KeyCode::Down => {
                    if !self.suggestions.is_empty() {
                        self.suggestion_index = (self.suggestion_index + 1) % self.suggestions.len();
                    }
                    return;
                }
                KeyCode::Up => {
                    if !self.suggestions.is_empty() {
                        self.suggestion_index = (self.suggestion_index + self.suggestions.len() - 1)
                            % self.suggestions.len();
                    }
                    return;
                }
                KeyCode::Enter => {
                    self.accept_suggestion();
                    return;
                }
                KeyCode::Esc => {
                    self.popup_open = false;
                    return;
                }
                _ => {
                    self.popup_open = false;
                }
            }
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.exit = true,
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.prev()),
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('r') if ctrl => {
                self.controller.reset_form();
                self.sync_inputs();
            }
            KeyCode::F(5) => self.refresh().await,
            _ => match self.focus {
                Focus::Field(field) => self.edit_field(field, key).await,
                Focus::Search => self.edit_search(key),
                Focus::List => self.list_key(key).await,
            },
        }
    }

    async fn edit_field(&mut self, field: DraftField, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit().await;
            return;
        }

        let idx = field_index(field);
        self.inputs[idx].input(key);
        let typed = first_line(&self.inputs[idx]);
        self.controller.set_field(field, &typed);

        // Clamping may have rewritten the rating
        if self.controller.draft().get(field) != typed {
            let value = self.controller.draft().get(field).to_string();
            self.inputs[idx] = new_input(field.label(), &value);
            self.apply_focus_styles();
        }

        if field == DraftField::Genre {
            self.update_suggestions();
        }
    }

    fn edit_search(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            return;
        }
        self.search.input(key);
        let query = first_line(&self.search);
        self.controller.set_query(&query);
        self.clamp_selection();
    }

    async fn list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('e') => {
                if let Some(movie) = self.selected_movie() {
                    self.controller.start_edit(&movie);
                    self.sync_inputs();
                    self.set_focus(Focus::Field(DraftField::Title));
                }
            }
            KeyCode::Char('d') => {
                if let Some(movie) = self.selected_movie() {
                    self.controller.request_delete(movie.id);
                }
            }
            KeyCode::Char('g') => {
                self.controller.cycle_genre_filter();
                self.clamp_selection();
            }
            KeyCode::Char('s') => self.controller.cycle_sort(),
            KeyCode::Char('r') => self.refresh().await,
            _ => {}
        }
    }

    async fn submit(&mut self) {
        self.popup_open = false;
        // Failures end up in the status line
        let _ = self.controller.submit().await;
        self.after_reload();
    }

    async fn refresh(&mut self) {
        let _ = self.controller.load().await;
        self.after_reload();
    }

    /// A reload may have reset the form or shrunk the list
    fn after_reload(&mut self) {
        self.sync_inputs();
        self.clamp_selection();
    }

    pub fn selected_movie(&self) -> Option<Movie> {
        let idx = self.list_state.selected()?;
        self.controller.visible().get(idx).map(|movie| (*movie).clone())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.controller.visible().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.list_state.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.visible().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let idx = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(idx));
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.popup_open = false;
        self.apply_focus_styles();
    }

    /// Rebuild the form inputs from the controller's draft
    fn sync_inputs(&mut self) {
        let draft = self.controller.draft();
        self.inputs = DraftField::ALL
            .iter()
            .map(|field| new_input(field.label(), draft.get(*field)))
            .collect();
        self.apply_focus_styles();
    }

    fn apply_focus_styles(&mut self) {
        let focus = self.focus;
        for (field, input) in DraftField::ALL.iter().zip(self.inputs.iter_mut()) {
            style_input(input, field.label(), focus == Focus::Field(*field));
        }
        style_input(&mut self.search, SEARCH_TITLE, focus == Focus::Search);
    }

    fn update_suggestions(&mut self) {
        let typed = self.controller.draft().genre.clone();
        let options = self.controller.genre_options();
        self.suggestions = self.completer.get_suggestions(&typed, &options);
        self.suggestion_index = 0;
        self.popup_open = !self.suggestions.is_empty();
    }

    fn accept_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let suggestion = self.suggestions[self.suggestion_index].clone();
        self.controller.set_field(DraftField::Genre, &suggestion);
        self.inputs[field_index(DraftField::Genre)] =
            new_input(DraftField::Genre.label(), &suggestion);
        self.apply_focus_styles();
        self.popup_open = false;
    }
}

fn field_index(field: DraftField) -> usize {
    DraftField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}

fn first_line(textarea: &TextArea<'_>) -> String {
    textarea.lines().first().cloned().unwrap_or_default()
}

fn new_input(title: &str, value: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    style_input(&mut textarea, title, false);
    textarea
}

fn style_input(textarea: &mut TextArea<'static>, title: &str, focused: bool) {
    let (border, cursor) = if focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", title)),
    );
    textarea.set_cursor_style(cursor);
}
