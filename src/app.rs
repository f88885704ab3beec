// Application state and orchestration logic.
//
// `App` owns the repository, the session, and all per-screen UI state. The
// TUI loop translates key presses into `Action`s and hands them here; every
// state change flows through `handle_action`. Mutations are awaited inline,
// so the interface blocks for the duration of the artificial latency just
// like it would against a slow remote backend.

use tracing::{error, info};

use crate::auth::{Authenticator, SessionManager};
use crate::forms::{FormError, LoginForm, PlayerField, PlayerForm};
use crate::model::{Player, Position};
use crate::query::{self, PlayerFilter, PlayerSort, PlayerSortKey};
use crate::repository::LeagueRepository;

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// The navigable screens. Detail routes carry the id of the record shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Teams,
    TeamDetail(String),
    Players,
    PlayerDetail(String),
    Fixtures,
    Results,
    GameDetail(String),
    Login,
    Admin,
    NotFound(String),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Teams => "Teams",
            Route::TeamDetail(_) => "Team",
            Route::Players => "Players",
            Route::PlayerDetail(_) => "Player",
            Route::Fixtures => "Fixtures",
            Route::Results => "Results",
            Route::GameDetail(_) => "Game",
            Route::Login => "Sign in",
            Route::Admin => "Admin",
            Route::NotFound(_) => "Not found",
        }
    }
}

// ---------------------------------------------------------------------------
// Input modes and actions
// ---------------------------------------------------------------------------

/// What keyboard input currently means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing into the player search box.
    Search,
    /// Typing into the login form.
    Login,
    /// Typing into the admin player editor.
    Form,
    /// Waiting for a yes/no on deleting the player with this id.
    ConfirmDelete(String),
}

/// High-level commands produced by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Go(Route),
    Back,
    Up,
    Down,
    Select,
    StartSearch,
    InputChar(char),
    Backspace,
    ConfirmInput,
    CancelInput,
    NextField,
    PrevField,
    CycleLeft,
    CycleRight,
    CycleTeamFilter,
    CyclePositionFilter,
    CycleSortKey,
    ToggleSortDir,
    ClearFilters,
    NewPlayer,
    EditPlayer,
    DeletePlayer,
    Logout,
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One-line toast shown under the header until the next navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub repo: LeagueRepository,
    pub session: SessionManager,
    authenticator: Box<dyn Authenticator>,

    pub route: Route,
    route_stack: Vec<Route>,
    pub mode: Mode,
    pub notice: Option<Notice>,
    pub should_quit: bool,

    // Per-screen list cursors.
    pub teams_selected: usize,
    pub roster_selected: usize,
    pub players_selected: usize,
    pub fixtures_selected: usize,
    pub results_selected: usize,
    pub admin_selected: usize,

    // Players screen filters.
    pub player_filter: PlayerFilter,
    pub player_sort: PlayerSort,

    // Login screen.
    pub login_form: LoginForm,
    pub login_on_password: bool,

    // Admin editor. `Some` while the form overlay is open.
    pub player_form: Option<PlayerForm>,
    pub form_focus: usize,
}

impl App {
    pub fn new(
        repo: LeagueRepository,
        session: SessionManager,
        authenticator: Box<dyn Authenticator>,
    ) -> Self {
        App {
            repo,
            session,
            authenticator,
            route: Route::Home,
            route_stack: Vec::new(),
            mode: Mode::Normal,
            notice: None,
            should_quit: false,
            teams_selected: 0,
            roster_selected: 0,
            players_selected: 0,
            fixtures_selected: 0,
            results_selected: 0,
            admin_selected: 0,
            player_filter: PlayerFilter::default(),
            player_sort: PlayerSort::default(),
            login_form: LoginForm::default(),
            login_on_password: false,
            player_form: None,
            form_focus: 0,
        }
    }

    /// The players screen's list in display order.
    pub fn visible_players(&self) -> Vec<&Player> {
        query::filter_and_sort_players(self.repo.players(), &self.player_filter, self.player_sort)
    }

    // -- action dispatch ----------------------------------------------------

    pub async fn handle_action(&mut self, action: Action) {
        match self.mode.clone() {
            Mode::Normal => self.handle_normal(action).await,
            Mode::Search => self.handle_search(action),
            Mode::Login => self.handle_login(action).await,
            Mode::Form => self.handle_form(action).await,
            Mode::ConfirmDelete(id) => self.handle_confirm_delete(action, id).await,
        }
    }

    async fn handle_normal(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Go(route) => self.navigate(route),
            Action::Back => self.back(),
            Action::Up => self.move_selection(-1),
            Action::Down => self.move_selection(1),
            Action::Select => self.activate(),
            Action::StartSearch if self.route == Route::Players => {
                self.mode = Mode::Search;
            }
            Action::CycleTeamFilter if self.route == Route::Players => {
                self.cycle_team_filter();
            }
            Action::CyclePositionFilter if self.route == Route::Players => {
                self.cycle_position_filter();
            }
            Action::CycleSortKey if self.route == Route::Players => {
                let keys = PlayerSortKey::ALL;
                let at = keys
                    .iter()
                    .position(|k| *k == self.player_sort.key)
                    .unwrap_or(0);
                let key = keys[(at + 1) % keys.len()];
                self.player_sort = PlayerSort {
                    key,
                    ascending: key.default_ascending(),
                };
            }
            Action::ToggleSortDir if self.route == Route::Players => {
                self.player_sort.ascending = !self.player_sort.ascending;
            }
            Action::ClearFilters if self.route == Route::Players => {
                self.player_filter = PlayerFilter::default();
                self.players_selected = 0;
            }
            Action::NewPlayer if self.route == Route::Admin && self.session.is_admin() => {
                let team_id = self
                    .repo
                    .teams()
                    .first()
                    .map(|t| t.id.clone())
                    .unwrap_or_default();
                self.player_form = Some(PlayerForm::blank(&team_id));
                self.form_focus = 0;
                self.mode = Mode::Form;
            }
            Action::EditPlayer if self.route == Route::Admin && self.session.is_admin() => {
                if let Some(player) = self.repo.players().get(self.admin_selected) {
                    self.player_form = Some(PlayerForm::from_player(player));
                    self.form_focus = 0;
                    self.mode = Mode::Form;
                }
            }
            Action::DeletePlayer if self.route == Route::Admin && self.session.is_admin() => {
                if let Some(player) = self.repo.players().get(self.admin_selected) {
                    self.mode = Mode::ConfirmDelete(player.id.clone());
                }
            }
            Action::Logout => {
                if self.session.is_authenticated() {
                    if let Err(e) = self.session.logout() {
                        error!("logout failed: {e}");
                        self.notice = Some(Notice::error(format!("Logout failed: {e}")));
                        return;
                    }
                    self.notice = Some(Notice::info("Signed out"));
                    if self.route == Route::Admin {
                        self.route = Route::Home;
                        self.route_stack.clear();
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_search(&mut self, action: Action) {
        match action {
            Action::InputChar(c) => {
                self.player_filter.search.push(c);
                self.players_selected = 0;
            }
            Action::Backspace => {
                self.player_filter.search.pop();
                self.players_selected = 0;
            }
            Action::ConfirmInput => self.mode = Mode::Normal,
            Action::CancelInput => {
                self.player_filter.search.clear();
                self.players_selected = 0;
                self.mode = Mode::Normal;
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    async fn handle_login(&mut self, action: Action) {
        match action {
            Action::InputChar(c) => {
                if self.login_on_password {
                    self.login_form.password.push(c);
                } else {
                    self.login_form.username.push(c);
                }
            }
            Action::Backspace => {
                if self.login_on_password {
                    self.login_form.password.pop();
                } else {
                    self.login_form.username.pop();
                }
            }
            Action::NextField | Action::PrevField => {
                self.login_on_password = !self.login_on_password;
            }
            Action::ConfirmInput => self.submit_login().await,
            Action::CancelInput => {
                self.login_form.clear();
                self.login_on_password = false;
                self.back();
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    async fn handle_form(&mut self, action: Action) {
        match action {
            Action::InputChar(c) => {
                if let Some(form) = &mut self.player_form {
                    let field = PlayerField::ALL[self.form_focus];
                    if let Some(text) = form.text_mut(field) {
                        text.push(c);
                    }
                }
            }
            Action::Backspace => {
                if let Some(form) = &mut self.player_form {
                    let field = PlayerField::ALL[self.form_focus];
                    if let Some(text) = form.text_mut(field) {
                        text.pop();
                    }
                }
            }
            Action::NextField | Action::Down => {
                self.form_focus = (self.form_focus + 1) % PlayerField::ALL.len();
            }
            Action::PrevField | Action::Up => {
                let n = PlayerField::ALL.len();
                self.form_focus = (self.form_focus + n - 1) % n;
            }
            Action::CycleLeft => self.cycle_form_option(-1),
            Action::CycleRight => self.cycle_form_option(1),
            Action::ConfirmInput => self.submit_player_form().await,
            Action::CancelInput => {
                self.player_form = None;
                self.mode = Mode::Normal;
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    async fn handle_confirm_delete(&mut self, action: Action, id: String) {
        match action {
            Action::ConfirmInput => {
                self.mode = Mode::Normal;
                match self.repo.delete_player(&id).await {
                    Ok(()) => {
                        self.notice = Some(Notice::success("Player deleted"));
                        self.clamp_admin_selection();
                    }
                    Err(e) => {
                        error!("delete failed: {e}");
                        self.notice = Some(Notice::error(format!("Delete failed: {e}")));
                    }
                }
            }
            Action::CancelInput => self.mode = Mode::Normal,
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    // -- navigation ---------------------------------------------------------

    /// Move to `route`, gating the admin screen behind the session.
    pub fn navigate(&mut self, route: Route) {
        self.notice = None;

        if route == Route::Admin && !self.session.is_admin() {
            info!("admin screen requested without a session, redirecting to login");
            self.notice = Some(Notice::info("Sign in to manage players"));
            self.push_route(Route::Login);
            self.mode = Mode::Login;
            return;
        }

        self.mode = if route == Route::Login {
            Mode::Login
        } else {
            Mode::Normal
        };
        self.push_route(route);
    }

    fn push_route(&mut self, route: Route) {
        if route != self.route {
            let prev = std::mem::replace(&mut self.route, route);
            self.route_stack.push(prev);
        }
    }

    pub fn back(&mut self) {
        self.notice = None;
        let target = self.route_stack.pop().unwrap_or(Route::Home);

        // The stack may still hold the admin screen after a logout; the
        // session gate applies on the way back too.
        if target == Route::Admin && !self.session.is_admin() {
            info!("admin screen reached via back without a session, redirecting to login");
            self.notice = Some(Notice::info("Sign in to manage players"));
            self.route = Route::Login;
            self.mode = Mode::Login;
            return;
        }

        self.route = target;
        self.mode = if self.route == Route::Login {
            Mode::Login
        } else {
            Mode::Normal
        };
    }

    // -- selection ----------------------------------------------------------

    fn current_list_len(&self) -> usize {
        match &self.route {
            Route::Teams => self.repo.teams().len(),
            Route::TeamDetail(id) => self.repo.players_by_team(id).len(),
            Route::Players => self.visible_players().len(),
            Route::Fixtures => query::fixtures(self.repo.games()).len(),
            Route::Results => query::results(self.repo.games()).len(),
            Route::Admin => self.repo.players().len(),
            _ => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.route {
            Route::Teams => Some(&mut self.teams_selected),
            Route::TeamDetail(_) => Some(&mut self.roster_selected),
            Route::Players => Some(&mut self.players_selected),
            Route::Fixtures => Some(&mut self.fixtures_selected),
            Route::Results => Some(&mut self.results_selected),
            Route::Admin => Some(&mut self.admin_selected),
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        if let Some(sel) = self.selection_mut() {
            let cur = *sel as i64;
            *sel = (cur + delta).clamp(0, len as i64 - 1) as usize;
        }
    }

    fn clamp_admin_selection(&mut self) {
        let len = self.repo.players().len();
        if self.admin_selected >= len {
            self.admin_selected = len.saturating_sub(1);
        }
    }

    /// Enter on the selected row.
    fn activate(&mut self) {
        match self.route.clone() {
            Route::Teams => {
                if let Some(team) = self.repo.teams().get(self.teams_selected) {
                    let id = team.id.clone();
                    self.roster_selected = 0;
                    self.navigate(Route::TeamDetail(id));
                }
            }
            Route::TeamDetail(team_id) => {
                let roster = self.repo.players_by_team(&team_id);
                if let Some(player) = roster.get(self.roster_selected) {
                    let id = player.id.clone();
                    self.navigate(Route::PlayerDetail(id));
                }
            }
            Route::Players => {
                if let Some(player) = self.visible_players().get(self.players_selected) {
                    let id = player.id.clone();
                    self.navigate(Route::PlayerDetail(id));
                }
            }
            Route::PlayerDetail(player_id) => {
                // Jump to the player's team, when the reference resolves.
                let team_id = self
                    .repo
                    .player_by_id(&player_id)
                    .map(|p| p.team_id.clone());
                if let Some(team_id) = team_id {
                    if self.repo.team_by_id(&team_id).is_some() {
                        self.roster_selected = 0;
                        self.navigate(Route::TeamDetail(team_id));
                    } else {
                        self.navigate(Route::NotFound(team_id));
                    }
                }
            }
            Route::Fixtures => {
                if let Some(game) = query::fixtures(self.repo.games())
                    .get(self.fixtures_selected)
                    .copied()
                {
                    let id = game.id.clone();
                    self.navigate(Route::GameDetail(id));
                }
            }
            Route::Results => {
                if let Some(game) = query::results(self.repo.games())
                    .get(self.results_selected)
                    .copied()
                {
                    let id = game.id.clone();
                    self.navigate(Route::GameDetail(id));
                }
            }
            Route::Admin => {
                if let Some(player) = self.repo.players().get(self.admin_selected) {
                    self.player_form = Some(PlayerForm::from_player(player));
                    self.form_focus = 0;
                    self.mode = Mode::Form;
                }
            }
            Route::NotFound(_) => self.back(),
            _ => {}
        }
    }

    // -- filters ------------------------------------------------------------

    fn cycle_team_filter(&mut self) {
        let teams = self.repo.teams();
        let next = match &self.player_filter.team_id {
            None => teams.first().map(|t| t.id.clone()),
            Some(current) => match teams.iter().position(|t| &t.id == current) {
                Some(i) if i + 1 < teams.len() => Some(teams[i + 1].id.clone()),
                _ => None,
            },
        };
        self.player_filter.team_id = next;
        self.players_selected = 0;
    }

    fn cycle_position_filter(&mut self) {
        let next = match self.player_filter.position {
            None => Some(Position::ALL[0]),
            Some(current) => match Position::ALL.iter().position(|p| *p == current) {
                Some(i) if i + 1 < Position::ALL.len() => Some(Position::ALL[i + 1]),
                _ => None,
            },
        };
        self.player_filter.position = next;
        self.players_selected = 0;
    }

    fn cycle_form_option(&mut self, delta: i64) {
        let teams: Vec<String> = self.repo.teams().iter().map(|t| t.id.clone()).collect();
        let Some(form) = &mut self.player_form else {
            return;
        };
        match PlayerField::ALL[self.form_focus] {
            PlayerField::Team => {
                if teams.is_empty() {
                    return;
                }
                let at = teams.iter().position(|id| *id == form.team_id).unwrap_or(0) as i64;
                let n = teams.len() as i64;
                form.team_id = teams[((at + delta).rem_euclid(n)) as usize].clone();
            }
            PlayerField::Position => {
                let at = Position::ALL
                    .iter()
                    .position(|p| *p == form.position)
                    .unwrap_or(0) as i64;
                let n = Position::ALL.len() as i64;
                form.position = Position::ALL[((at + delta).rem_euclid(n)) as usize];
            }
            _ => {}
        }
    }

    // -- submits ------------------------------------------------------------

    async fn submit_login(&mut self) {
        if let Err(e) = self.login_form.validate() {
            self.notice = Some(Notice::error(e.to_string()));
            return;
        }

        let username = self.login_form.username.clone();
        let password = self.login_form.password.clone();
        let outcome = self
            .session
            .login(self.authenticator.as_ref(), &username, &password)
            .await;

        match outcome {
            Ok(true) => {
                self.login_form.clear();
                self.login_on_password = false;
                self.mode = Mode::Normal;
                self.notice = Some(Notice::success(format!("Welcome, {username}")));
                self.route_stack.clear();
                self.route = Route::Admin;
            }
            Ok(false) => {
                self.notice = Some(Notice::error("Invalid username or password"));
            }
            Err(e) => {
                error!("login failed: {e}");
                self.notice = Some(Notice::error(format!("Login failed: {e}")));
            }
        }
    }

    async fn submit_player_form(&mut self) {
        let Some(form) = self.player_form.clone() else {
            return;
        };
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e @ FormError::Required { .. }) => {
                self.notice = Some(Notice::error(e.to_string()));
                return;
            }
        };

        let outcome = match &form.editing_id {
            Some(id) => self.repo.update_player(id, draft).await.map(|()| None),
            None => self.repo.add_player(draft).await.map(Some),
        };

        match outcome {
            Ok(added) => {
                self.player_form = None;
                self.mode = Mode::Normal;
                self.notice = Some(Notice::success(match added {
                    Some(player) => format!("Added {}", player.full_name()),
                    None => "Player updated".to_string(),
                }));
            }
            Err(e) => {
                error!("player save failed: {e}");
                self.notice = Some(Notice::error(format!("Save failed: {e}")));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
