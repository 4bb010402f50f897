// src/app.rs
//! Application shell: owns the session, the API client and the current screen.

use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::core::session_store::session_ttl;
use crate::core::{JobsApi, SessionStore};
use crate::filters::{EmploymentType, FilterSelection, SalaryTier};
use crate::router::{Navigation, Route, RouteGuard, LOGIN_PATH};
use crate::screens::{
    Fetch, HomeScreen, JobDetailsScreen, JobsScreen, LoginScreen, NotFoundScreen, Screen,
};

/// One user interaction, as typed in the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Go(String),
    Home,
    Jobs,
    Logout,
    Username(String),
    Password(String),
    Submit,
    ToggleType(EmploymentType),
    Salary(SalaryTier),
    Search(String),
    Retry,
    RetryProfile,
    Open(usize),
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        // `raw` keeps everything after the single separator; only search uses it
        let (command, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw.trim();

        let action = match command.to_lowercase().as_str() {
            "go" | "goto" => {
                if rest.is_empty() {
                    anyhow::bail!("Usage: go <path>");
                }
                Action::Go(rest.to_string())
            }
            "home" => Action::Home,
            "jobs" | "find" => Action::Jobs,
            "logout" => Action::Logout,
            "user" | "username" => Action::Username(rest.to_string()),
            "pass" | "password" => Action::Password(rest.to_string()),
            "submit" | "login" => Action::Submit,
            "type" => Action::ToggleType(rest.parse()?),
            "salary" => Action::Salary(rest.parse()?),
            "search" => Action::Search(raw.to_string()),
            "retry" => Action::Retry,
            "retry-profile" => Action::RetryProfile,
            "open" => Action::Open(
                rest.parse()
                    .with_context(|| format!("Not a card number: {:?}", rest))?,
            ),
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            "" => anyhow::bail!("Empty command"),
            other => anyhow::bail!("Unknown command: {}. Type 'help' for a list", other),
        };
        Ok(action)
    }
}

pub const HELP: &str = "\
Commands:
  go <path>          navigate to /, /jobs, /jobs/<id>, /login ...
  home | jobs        shortcuts for / and /jobs
  user <name>        set the login username
  pass <password>    set the login password
  submit             log in
  type <TYPE>        toggle FULLTIME, PARTTIME, FREELANCE or INTERNSHIP
  salary <TIER>      10LPA, 20LPA, 30LPA or 40LPA
  search [text]      set (or clear) the search text
  retry              retry the failed jobs or job details request
  retry-profile      retry the failed profile request
  open <n>           open job card number n
  logout             clear the session
  help | quit";

/// What is left of an action once its synchronous part has run
#[derive(Debug)]
pub enum Step {
    Done,
    /// The screen shows its loading state until [`App::finish`] completes the fetch
    Fetch(Fetch),
    SubmitLogin,
}

impl Step {
    pub fn is_fetching(&self) -> bool {
        matches!(self, Step::Fetch(_))
    }
}

pub struct App<A: JobsApi> {
    api: A,
    session: SessionStore,
    screen: Screen,
}

impl<A: JobsApi> App<A> {
    /// The shell starts on the login form until the first navigation
    pub fn new(api: A, session: SessionStore) -> Self {
        Self {
            api,
            session,
            screen: Screen::Login(LoginScreen::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn render(&self) -> String {
        self.screen.render()
    }

    pub async fn navigate(&mut self, path: &str) -> Result<()> {
        self.open(Route::resolve(path)).await
    }

    pub async fn open(&mut self, route: Route) -> Result<()> {
        let step = self.go(route);
        self.finish(step).await
    }

    /// Open the jobs list with filters already applied
    pub async fn open_jobs(&mut self, filters: FilterSelection) -> Result<()> {
        let step = self.go_jobs(filters);
        self.finish(step).await
    }

    /// Run the guard, build the screen for the resulting route and start its fetches
    pub fn go(&mut self, route: Route) -> Step {
        self.go_with_filters(route, FilterSelection::new())
    }

    pub fn go_jobs(&mut self, filters: FilterSelection) -> Step {
        self.go_with_filters(Route::Jobs, filters)
    }

    fn go_with_filters(&mut self, route: Route, filters: FilterSelection) -> Step {
        // the only redirect target is /login, which is never guarded
        let route = match RouteGuard::check(route, &self.session) {
            Navigation::Render(route) => route,
            Navigation::Redirect(target) => target,
        };
        info!("Rendering {}", route);

        self.screen = match route {
            Route::Login => Screen::Login(LoginScreen::new()),
            Route::Home => Screen::Home(HomeScreen),
            Route::Jobs => Screen::Jobs(JobsScreen::new(filters)),
            Route::JobDetails(id) => Screen::JobDetails(JobDetailsScreen::new(id)),
            Route::NotFound => Screen::NotFound(NotFoundScreen),
        };

        match &mut self.screen {
            Screen::Jobs(screen) => Step::Fetch(Fetch::Jobs(screen.begin_mount())),
            Screen::JobDetails(screen) => Step::Fetch(Fetch::Details(screen.begin_mount())),
            Screen::Login(_) | Screen::Home(_) | Screen::NotFound(_) => Step::Done,
        }
    }

    /// Await whatever `step` left outstanding
    pub async fn finish(&mut self, step: Step) -> Result<()> {
        match step {
            Step::Done => Ok(()),
            Step::Fetch(fetch) => self.complete(fetch).await,
            Step::SubmitLogin => self.submit_login().await,
        }
    }

    async fn complete(&mut self, fetch: Fetch) -> Result<()> {
        let token = self.token()?;
        match (&mut self.screen, fetch) {
            (Screen::Jobs(screen), Fetch::Jobs(fetch)) => {
                screen.complete(fetch, &self.api, &token).await
            }
            (Screen::JobDetails(screen), Fetch::Details(fetch)) => {
                screen.complete(fetch, &self.api, &token).await
            }
            (_, fetch) => debug!("Screen changed, dropping {:?}", fetch),
        }
        Ok(())
    }

    fn token(&self) -> Result<String> {
        self.session
            .get()
            .map(str::to_owned)
            .context("Not logged in")
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.dispatch(Action::Logout).await
    }

    async fn submit_login(&mut self) -> Result<()> {
        let Screen::Login(login) = &mut self.screen else {
            anyhow::bail!("Login is only available on {}", LOGIN_PATH);
        };
        if let Some(token) = login.submit(&self.api).await {
            self.session.set(&token, session_ttl())?;
            if let Step::Fetch(fetch) = self.go(Route::Home) {
                self.complete(fetch).await?;
            }
        }
        Ok(())
    }

    fn login_screen(&mut self) -> Result<&mut LoginScreen> {
        match &mut self.screen {
            Screen::Login(screen) => Ok(screen),
            _ => anyhow::bail!("Credentials can only be entered on {}", LOGIN_PATH),
        }
    }

    fn jobs_screen(&mut self, what: &str) -> Result<&mut JobsScreen> {
        match &mut self.screen {
            Screen::Jobs(screen) => Ok(screen),
            _ => anyhow::bail!("{} only available on /jobs", what),
        }
    }

    /// Apply the synchronous part of `action`: screen changes, filter edits and
    /// request starts. Anything still to await is returned as a [`Step`].
    pub fn start(&mut self, action: Action) -> Result<Step> {
        let step = match action {
            Action::Go(path) => self.go(Route::resolve(&path)),
            Action::Home => self.go(Route::Home),
            Action::Jobs => self.go(Route::Jobs),
            Action::Logout => {
                self.session.clear()?;
                info!("Logged out");
                self.go(Route::Login)
            }
            Action::Username(username) => {
                self.login_screen()?.set_username(username);
                Step::Done
            }
            Action::Password(password) => {
                self.login_screen()?.set_password(password);
                Step::Done
            }
            Action::Submit => {
                self.login_screen()?;
                Step::SubmitLogin
            }
            Action::ToggleType(employment_type) => {
                let screen = self.jobs_screen("Filters are")?;
                Step::Fetch(Fetch::Jobs(screen.toggle_employment_type(employment_type)))
            }
            Action::Salary(tier) => {
                let screen = self.jobs_screen("Filters are")?;
                Step::Fetch(Fetch::Jobs(screen.set_salary_tier(tier)))
            }
            Action::Search(text) => {
                let screen = self.jobs_screen("Search is")?;
                Step::Fetch(Fetch::Jobs(screen.set_search(&text)))
            }
            Action::Retry => match &mut self.screen {
                Screen::Jobs(screen) => Step::Fetch(Fetch::Jobs(screen.begin_retry()?)),
                Screen::JobDetails(screen) => {
                    Step::Fetch(Fetch::Details(screen.begin_retry()?))
                }
                _ => anyhow::bail!("Nothing to retry here"),
            },
            Action::RetryProfile => {
                let screen = self.jobs_screen("The profile is")?;
                Step::Fetch(Fetch::Jobs(screen.begin_retry_profile()?))
            }
            Action::Open(index) => {
                let id = match &self.screen {
                    Screen::Jobs(screen) => screen.job_id_at(index),
                    Screen::JobDetails(screen) => screen.similar_job_id_at(index),
                    _ => None,
                };

                match id.and_then(Route::job_details) {
                    Some(route) => self.go(route),
                    None => {
                        warn!("No job card numbered {} on {}", index, self.route());
                        anyhow::bail!("No job card numbered {}", index)
                    }
                }
            }
            Action::Help | Action::Quit => Step::Done,
        };
        Ok(step)
    }

    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        let step = self.start(action)?;
        self.finish(step).await
    }
}
