//! Main application state.
//!
//! The Elm Architecture: [`App::update`] is the only place state changes,
//! and [`App::view`] draws the current state.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::config::{Settings, MAX_PAGE_SIZE};
use crate::data::format::status_label;
use crate::data::{summary_for, Dataset, OfficeData, Stat};
use crate::error::AppError;
use crate::events::{Event, KeyContext};
use crate::session::{SessionStore, User};
use crate::table::{CellValue, DataTable};
use crate::ui::{
    render_context_help, render_data_table, render_summary, HelpAction, HelpView,
    NotificationManager, TableFocus, Theme,
};

/// Rows added or removed by `+` and `-`.
const PAGE_SIZE_STEP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Table has focus.
    #[default]
    Browsing,
    /// Keys go to the search input.
    Searching,
    /// Help overlay is open.
    Help,
    Exiting,
}

impl AppState {
    fn key_context(self) -> KeyContext {
        match self {
            AppState::Searching => KeyContext::Search,
            AppState::Help => KeyContext::Help,
            AppState::Browsing | AppState::Exiting => KeyContext::Browse,
        }
    }
}

pub struct App {
    state: AppState,
    should_quit: bool,
    /// Message of the critical error that stopped the app, if any.
    fatal: Option<String>,
    user: User,
    /// Persists role switches. `None` for an unsaved demo session.
    store: Option<SessionStore>,
    data: OfficeData,
    datasets: Vec<Dataset>,
    active: usize,
    table: DataTable,
    /// Header column under the keyboard cursor.
    cursor: usize,
    /// Selected row on the current page. Clamped when read.
    selected: usize,
    settings: Settings,
    notifications: NotificationManager,
    help: HelpView,
    theme: Theme,
}

impl App {
    /// Start browsing `dataset` as `user`.
    ///
    /// If the user's role may not open `dataset`, the first allowed one is
    /// shown instead.
    pub fn new(
        user: User,
        store: Option<SessionStore>,
        settings: Settings,
        dataset: Dataset,
    ) -> Self {
        let datasets = Dataset::visible_to(user.role);
        let active = datasets.iter().position(|d| *d == dataset).unwrap_or(0);
        let mut notifications = NotificationManager::new();
        if !dataset.is_allowed_for(user.role) {
            warn!(dataset = dataset.name(), role = %user.role, "Dataset not allowed for role");
            notifications.error(AppError::Unauthorized { role: user.role, dataset }.user_message());
        }

        let data = OfficeData::demo();
        let table = data.table(datasets[active], &user, &settings);
        debug!(email = %user.email, dataset = datasets[active].name(), "Creating application");

        Self {
            state: AppState::Browsing,
            should_quit: false,
            fatal: None,
            user,
            store,
            data,
            datasets,
            active,
            table,
            cursor: 0,
            selected: 0,
            settings,
            notifications,
            help: HelpView::new(),
            theme: Theme::default(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The message of a critical error that ended the session.
    pub fn fatal_error(&self) -> Option<&str> {
        self.fatal.as_deref()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn active_dataset(&self) -> Dataset {
        self.datasets[self.active]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected row of the current page, or `None` when the page is empty.
    pub fn selected_row(&self) -> Option<usize> {
        let rows = self.table.page().rows.len();
        (rows > 0).then(|| self.selected.min(rows - 1))
    }

    /// Headline figures for the current user.
    pub fn summary(&self) -> Vec<Stat> {
        summary_for(&self.data, &self.user)
    }

    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// Show a recoverable error as a toast; stop on a critical one.
    pub fn handle_error(&mut self, error: AppError) {
        if error.is_critical() {
            warn!(error = %error, "Critical error");
            self.fatal = Some(match error.suggested_action() {
                Some(hint) => format!("{} {}", error.user_message(), hint),
                None => error.user_message(),
            });
            self.quit();
        } else {
            debug!(error = %error, "Recoverable error");
            self.notifications.error(error.user_message());
        }
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => self.quit(),
            Event::Key(key) => {
                trace!(key = ?key.code, modifiers = ?key.modifiers, "Key event");
                self.handle_key(key);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resized");
            }
            Event::Tick => self.notifications.expire(Instant::now()),
        }
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.state {
            AppState::Browsing => self.handle_browse_key(key),
            AppState::Searching => self.handle_search_key(key),
            AppState::Help => {
                if self.help.handle_input(key) == Some(HelpAction::Close) {
                    self.state = AppState::Browsing;
                }
            }
            AppState::Exiting => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state = AppState::Browsing,
            KeyCode::Esc => {
                self.table.clear_search();
                self.state = AppState::Browsing;
            }
            KeyCode::Backspace => {
                self.table.pop_search_char();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.table.push_search_char(c);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let last_column = self.table.columns().len().saturating_sub(1);
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => {
                self.help.reset_scroll();
                self.state = AppState::Help;
            }
            KeyCode::Char('/') if self.table.is_searchable() => self.state = AppState::Searching,

            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected_row().unwrap_or(0).saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last_row = self.table.page().rows.len().saturating_sub(1);
                self.selected = self.selected_row().map_or(0, |row| (row + 1).min(last_row));
            }
            KeyCode::Char('m') => self.advance_selected_task(),

            KeyCode::Left | KeyCode::Char('h') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = (self.cursor + 1).min(last_column),
            KeyCode::Char('s') | KeyCode::Enter => self.sort_column(self.cursor),
            KeyCode::Char('x') => self.table.clear_sort(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index <= last_column {
                    self.cursor = index;
                    self.sort_column(index);
                }
            }

            KeyCode::Char('n') | KeyCode::PageDown => self.table.next_page(),
            KeyCode::Char('p') | KeyCode::PageUp => self.table.prev_page(),
            KeyCode::Char('g') | KeyCode::Home => self.table.first_page(),
            KeyCode::Char('G') | KeyCode::End => self.table.last_page(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let size = (self.table.page_size() + PAGE_SIZE_STEP).min(MAX_PAGE_SIZE);
                self.table.set_page_size(size);
            }
            KeyCode::Char('-') => {
                let size = self.table.page_size().saturating_sub(PAGE_SIZE_STEP).max(1);
                self.table.set_page_size(size);
            }

            KeyCode::Tab => self.select_dataset((self.active + 1) % self.datasets.len()),
            KeyCode::BackTab => {
                let count = self.datasets.len();
                self.select_dataset((self.active + count - 1) % count);
            }
            KeyCode::Char('r') => self.toggle_role(),
            _ => {}
        }
    }

    fn sort_column(&mut self, index: usize) {
        if !self.table.toggle_sort_at(index) {
            if let Some(column) = self.table.columns().get(index) {
                self.notifications
                    .info(format!("'{}' cannot be sorted", column.title));
            }
        }
    }

    /// Id of the record in the selected row.
    fn selected_id(&self) -> Option<String> {
        let row = self.selected_row()?;
        match self.table.page().rows.get(row)?.value("id") {
            CellValue::Text(id) => Some(id.clone()),
            _ => None,
        }
    }

    /// Move the selected task to its next board column.
    ///
    /// The table keeps its search, sort and page; the selection follows the
    /// task if it is still on the page.
    fn advance_selected_task(&mut self) {
        if self.active_dataset() != Dataset::Tasks {
            self.notifications.info("Only tasks can be moved");
            return;
        }
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(status) = self.data.advance_task(&id) else {
            return;
        };

        self.table
            .set_records(self.data.records(Dataset::Tasks, &self.user));
        let target = CellValue::from(id.as_str());
        if let Some(row) = self
            .table
            .page()
            .rows
            .iter()
            .position(|r| r.value("id") == &target)
        {
            self.selected = row;
        }
        self.notifications
            .success(format!("Task moved to {}", status_label(status.as_str())));
    }

    fn select_dataset(&mut self, index: usize) {
        if index == self.active {
            return;
        }
        self.active = index;
        self.cursor = 0;
        self.selected = 0;
        self.table = self
            .data
            .table(self.datasets[index], &self.user, &self.settings);
        info!(dataset = self.datasets[index].name(), "Dataset switched");
    }

    /// Switch between office and client, persisting through the store if any.
    fn toggle_role(&mut self) {
        let role = self.user.role.toggled();
        let switched = match self.store.as_mut() {
            Some(store) => store.switch_role(role).cloned(),
            None => Ok(self.user.with_role(role)),
        };
        let user = match switched {
            Ok(user) => user,
            Err(e) => {
                self.handle_error(e.into());
                return;
            }
        };
        info!(role = %role, persisted = self.store.is_some(), "Role toggled");

        let current = self.active_dataset();
        self.user = user;
        self.datasets = Dataset::visible_to(role);
        self.active = self.datasets.iter().position(|d| *d == current).unwrap_or(0);
        self.cursor = 0;
        self.selected = 0;
        self.table = self
            .data
            .table(self.datasets[self.active], &self.user, &self.settings);
        self.notifications
            .success(format!("Switched to {} view", role.label()));
    }

    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        render_summary(frame, chunks[1], &self.summary(), &self.theme);
        let focus = TableFocus {
            column: self.cursor(),
            row: self.selected_row(),
            searching: self.state() == AppState::Searching,
        };
        render_data_table(
            frame,
            chunks[2],
            self.active_dataset().title(),
            &self.table,
            focus,
            &self.theme,
        );
        render_context_help(frame, chunks[3], self.state.key_context(), &self.theme);

        if self.state() == AppState::Help {
            self.help.render(frame, area, &self.theme);
        }
        self.notifications().render(frame, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let user = self.user();
        let identity = Line::from(vec![
            Span::styled(user.name.clone(), Style::default().fg(self.theme.fg)),
            Span::raw(" · "),
            Span::styled(
                user.role.label(),
                Style::default()
                    .fg(self.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(identity.width() as u16)])
            .split(area);

        let tabs = Tabs::new(self.datasets().iter().map(|d| d.title()))
            .select(self.active)
            .style(self.theme.muted_style())
            .highlight_style(
                Style::default()
                    .fg(self.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        frame.render_widget(tabs, parts[0]);
        frame.render_widget(Paragraph::new(identity), parts[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserRole;
    use crate::table::SortDirection;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::tempdir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    fn office_app(dataset: Dataset) -> App {
        App::new(User::demo_office(), None, Settings::default(), dataset)
    }

    #[test]
    fn test_new_app() {
        let app = office_app(Dataset::Tasks);
        assert_eq!(app.state(), AppState::Browsing);
        assert!(!app.should_quit());
        assert_eq!(app.datasets().len(), 5);
        assert_eq!(app.active_dataset(), Dataset::Tasks);
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn test_disallowed_dataset_falls_back() {
        let app = App::new(User::demo_client(), None, Settings::default(), Dataset::Payments);
        assert_eq!(app.datasets(), &[Dataset::Tasks, Dataset::Documents]);
        assert_eq!(app.active_dataset(), Dataset::Tasks);
        assert_eq!(app.notifications().len(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = office_app(Dataset::Tasks);
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());
        assert_eq!(app.state(), AppState::Exiting);

        let mut app = office_app(Dataset::Tasks);
        app.update(key(KeyCode::Char('/')));
        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_event() {
        let mut app = office_app(Dataset::Tasks);
        app.update(Event::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_resize_keeps_state() {
        let mut app = office_app(Dataset::Tasks);
        app.update(Event::Resize(100, 40));
        assert_eq!(app.state(), AppState::Browsing);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_help_open_close() {
        let mut app = office_app(Dataset::Tasks);
        app.update(key(KeyCode::Char('?')));
        assert_eq!(app.state(), AppState::Help);
        // 'q' closes help instead of quitting
        app.update(key(KeyCode::Char('q')));
        assert_eq!(app.state(), AppState::Browsing);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_search_typing_filters() {
        let mut app = office_app(Dataset::Clients);
        assert_eq!(app.table().filtered_count(), 5);

        app.update(key(KeyCode::Char('/')));
        assert_eq!(app.state(), AppState::Searching);
        // 'q' is text while searching
        type_text(&mut app, "tech");
        assert!(!app.should_quit());
        assert_eq!(app.table().search(), "tech");
        assert_eq!(app.table().filtered_count(), 1);

        app.update(key(KeyCode::Backspace));
        assert_eq!(app.table().search(), "tec");

        app.update(key(KeyCode::Enter));
        assert_eq!(app.state(), AppState::Browsing);
        assert_eq!(app.table().search(), "tec");
    }

    #[test]
    fn test_search_escape_clears() {
        let mut app = office_app(Dataset::Clients);
        app.update(key(KeyCode::Char('/')));
        type_text(&mut app, "zzz");
        assert_eq!(app.table().filtered_count(), 0);
        app.update(key(KeyCode::Esc));
        assert_eq!(app.state(), AppState::Browsing);
        assert_eq!(app.table().search(), "");
        assert_eq!(app.table().filtered_count(), 5);
    }

    #[test]
    fn test_search_disabled() {
        let settings = Settings {
            searchable: false,
            ..Settings::default()
        };
        let mut app = App::new(User::demo_office(), None, settings, Dataset::Tasks);
        app.update(key(KeyCode::Char('/')));
        assert_eq!(app.state(), AppState::Browsing);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut app = office_app(Dataset::Tasks);
        app.update(key(KeyCode::Left));
        assert_eq!(app.cursor(), 0);
        app.update(key(KeyCode::Right));
        app.update(key(KeyCode::Char('l')));
        assert_eq!(app.cursor(), 2);
        for _ in 0..20 {
            app.update(key(KeyCode::Right));
        }
        assert_eq!(app.cursor(), app.table().columns().len() - 1);
        app.update(key(KeyCode::Char('h')));
        assert_eq!(app.cursor(), app.table().columns().len() - 2);
    }

    #[test]
    fn test_sort_at_cursor_toggles() {
        let mut app = office_app(Dataset::Tasks);
        app.update(key(KeyCode::Char('s')));
        let sort = app.table().sort().unwrap();
        assert_eq!(sort.key, "title");
        assert_eq!(sort.direction, SortDirection::Ascending);

        app.update(key(KeyCode::Enter));
        assert_eq!(app.table().sort().unwrap().direction, SortDirection::Descending);
    }

    #[test]
    fn test_clear_sort_key() {
        let mut app = office_app(Dataset::Payments);
        app.update(key(KeyCode::Char('3')));
        assert!(app.table().sort().is_some());
        app.update(key(KeyCode::Char('x')));
        assert!(app.table().sort().is_none());
    }

    #[test]
    fn test_sort_by_number_key() {
        let mut app = office_app(Dataset::Payments);
        app.update(key(KeyCode::Char('3')));
        assert_eq!(app.cursor(), 2);
        assert_eq!(app.table().sort().unwrap().key, "amount");

        // Column 9 does not exist
        app.update(key(KeyCode::Char('9')));
        assert_eq!(app.cursor(), 2);
    }

    #[test]
    fn test_unsortable_column_notifies() {
        let mut app = office_app(Dataset::Clients);
        app.update(key(KeyCode::Char('2')));
        assert!(app.table().sort().is_none());
        assert_eq!(app.notifications().len(), 1);
    }

    #[test]
    fn test_paging_keys() {
        let mut app = office_app(Dataset::Payments);
        assert_eq!(app.table().total_pages(), 2);
        app.update(key(KeyCode::Char('n')));
        assert_eq!(app.table().current_page(), 2);
        app.update(key(KeyCode::PageDown));
        assert_eq!(app.table().current_page(), 2);
        app.update(key(KeyCode::Char('p')));
        assert_eq!(app.table().current_page(), 1);
        app.update(key(KeyCode::Char('G')));
        assert_eq!(app.table().current_page(), 2);
        app.update(key(KeyCode::Home));
        assert_eq!(app.table().current_page(), 1);
    }

    #[test]
    fn test_page_size_keys() {
        let mut app = office_app(Dataset::Payments);
        app.update(key(KeyCode::Char('+')));
        assert_eq!(app.table().page_size(), 15);
        assert_eq!(app.table().total_pages(), 1);

        for _ in 0..5 {
            app.update(key(KeyCode::Char('-')));
        }
        assert_eq!(app.table().page_size(), 1);
        assert_eq!(app.table().total_pages(), 13);
    }

    #[test]
    fn test_tab_cycles_datasets() {
        let mut app = office_app(Dataset::Clients);
        app.update(key(KeyCode::Right));
        app.update(key(KeyCode::Char('/')));
        type_text(&mut app, "abc");
        app.update(key(KeyCode::Enter));

        app.update(key(KeyCode::Tab));
        assert_eq!(app.active_dataset(), Dataset::Payments);
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.table().search(), "");

        app.update(key(KeyCode::BackTab));
        app.update(key(KeyCode::BackTab));
        assert_eq!(app.active_dataset(), Dataset::Documents);
    }

    #[test]
    fn test_role_toggle_without_store() {
        let mut app = office_app(Dataset::Documents);
        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.user().role, UserRole::Client);
        assert_eq!(app.datasets().len(), 2);
        assert_eq!(app.active_dataset(), Dataset::Documents);

        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.user().role, UserRole::Office);
        assert_eq!(app.datasets().len(), 5);
    }

    #[test]
    fn test_role_toggle_leaves_hidden_dataset() {
        let mut app = office_app(Dataset::Payments);
        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.active_dataset(), Dataset::Tasks);
    }

    #[test]
    fn test_role_toggle_persists_through_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = SessionStore::at(&path);
        let user = store.login("client@demo.com", "demo123").unwrap().clone();

        let mut app = App::new(user, Some(store), Settings::default(), Dataset::Tasks);
        let client_rows = app.table().filtered_count();
        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.user().role, UserRole::Office);
        assert!(app.table().filtered_count() > client_rows);

        let mut reloaded = SessionStore::at(&path);
        assert_eq!(reloaded.load().unwrap().unwrap().role, UserRole::Office);
    }

    #[test]
    fn test_role_toggle_signed_out_store_shows_error() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        let mut app = App::new(User::demo_office(), Some(store), Settings::default(), Dataset::Tasks);
        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.user().role, UserRole::Office);
        assert_eq!(app.notifications().len(), 1);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_critical_error_stops_app() {
        let mut app = office_app(Dataset::Tasks);
        app.handle_error(AppError::terminal("lost tty"));
        assert!(app.should_quit());
        assert_eq!(app.fatal_error(), Some("Terminal error: lost tty"));
    }

    #[test]
    fn test_view_renders_tabs_and_table() {
        let mut app = office_app(Dataset::Tasks);
        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("Clients"));
        assert!(screen.contains("Payroll"));
        assert!(screen.contains("Office"));
        assert!(screen.contains("Title ↕"));
        assert!(screen.contains("[/] search"));
    }

    fn status_of(app: &App, id: &str) -> CellValue {
        app.table()
            .page()
            .rows
            .into_iter()
            .find(|r| r.value("id") == &CellValue::from(id))
            .map(|r| r.value("status").clone())
            .unwrap()
    }

    fn open_tasks(app: &App) -> String {
        app.summary()
            .into_iter()
            .find(|s| s.title == "Open tasks")
            .map(|s| s.value)
            .unwrap()
    }

    #[test]
    fn test_row_selection_clamps() {
        let mut app = office_app(Dataset::Tasks);
        assert_eq!(app.selected_row(), Some(0));
        app.update(key(KeyCode::Up));
        assert_eq!(app.selected_row(), Some(0));
        app.update(key(KeyCode::Down));
        app.update(key(KeyCode::Char('j')));
        assert_eq!(app.selected_row(), Some(2));
        for _ in 0..10 {
            app.update(key(KeyCode::Down));
        }
        assert_eq!(app.selected_row(), Some(4));
        app.update(key(KeyCode::Char('k')));
        assert_eq!(app.selected_row(), Some(3));

        // A narrower result set pulls the selection back onto the page
        app.update(key(KeyCode::Char('/')));
        type_text(&mut app, "sefaz");
        assert_eq!(app.selected_row(), Some(0));
    }

    #[test]
    fn test_move_task_cycles_status() {
        let mut app = office_app(Dataset::Tasks);
        assert_eq!(status_of(&app, "task-1"), CellValue::from("todo"));
        assert_eq!(open_tasks(&app), "4");

        app.update(key(KeyCode::Char('m')));
        assert_eq!(status_of(&app, "task-1"), CellValue::from("inprogress"));
        app.update(key(KeyCode::Char('m')));
        assert_eq!(status_of(&app, "task-1"), CellValue::from("done"));
        assert_eq!(open_tasks(&app), "3");
        app.update(key(KeyCode::Char('m')));
        assert_eq!(status_of(&app, "task-1"), CellValue::from("todo"));
        assert_eq!(app.notifications().len(), 3);
    }

    #[test]
    fn test_move_task_keeps_view_state() {
        let mut app = office_app(Dataset::Tasks);
        app.update(key(KeyCode::Char('/')));
        type_text(&mut app, "inprogress");
        app.update(key(KeyCode::Enter));
        app.update(key(KeyCode::Char('2')));
        assert_eq!(app.table().filtered_count(), 2);

        // Both in-progress tasks move to done and drop out of the search
        app.update(key(KeyCode::Char('m')));
        assert_eq!(app.table().filtered_count(), 1);
        assert_eq!(app.selected_row(), Some(0));
        app.update(key(KeyCode::Char('m')));
        assert_eq!(app.table().filtered_count(), 0);
        assert_eq!(app.selected_row(), None);

        assert_eq!(app.table().search(), "inprogress");
        assert_eq!(app.table().sort().unwrap().key, "status");
        assert_eq!(app.table().current_page(), 1);

        // Nothing selected: the key is a no-op
        app.update(key(KeyCode::Char('m')));
        assert_eq!(open_tasks(&app), "2");
    }

    #[test]
    fn test_move_task_survives_dataset_switch() {
        let mut app = office_app(Dataset::Tasks);
        app.update(key(KeyCode::Char('m')));
        app.update(key(KeyCode::Tab));
        app.update(key(KeyCode::BackTab));
        assert_eq!(app.active_dataset(), Dataset::Tasks);
        assert_eq!(status_of(&app, "task-1"), CellValue::from("inprogress"));
    }

    #[test]
    fn test_move_only_applies_to_tasks() {
        let mut app = office_app(Dataset::Payments);
        app.update(key(KeyCode::Char('m')));
        assert_eq!(app.notifications().len(), 1);
        assert_eq!(status_of(&app, "pay-3"), CellValue::from("pending"));
    }

    #[test]
    fn test_summary_follows_role() {
        let mut app = office_app(Dataset::Tasks);
        assert_eq!(app.summary().len(), 3);
        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.summary().len(), 4);
    }

    #[test]
    fn test_view_renders_summary() {
        let mut app = App::new(User::demo_client(), None, Settings::default(), Dataset::Tasks);
        let mut terminal = Terminal::new(TestBackend::new(160, 24)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("Next payment"));
        assert!(screen.contains("R$ 1.200,00"));
        assert!(screen.contains("Pro plan"));
    }
}
