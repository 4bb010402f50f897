// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::app::{Action, App, Step, HELP};
use crate::core::{ConfigManager, JobsApi, ServiceClient, SessionStore};
use crate::filters::{EmploymentType, FilterSelection, SalaryTier};
use crate::router::{Route, HOME_PATH, LOGIN_PATH};
use crate::view;

#[derive(Parser)]
#[command(name = "jobby")]
#[command(about = "Browse job postings from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the jobs API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Where the session token is kept
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and keep the session token for 30 days
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the home page
    Home,
    /// List jobs matching the given filters
    Jobs {
        /// Employment type to include; repeat for several
        #[arg(short = 't', long = "type")]
        types: Vec<EmploymentType>,
        /// Minimum salary range: 10LPA, 20LPA, 30LPA or 40LPA
        #[arg(short, long)]
        salary: Option<SalaryTier>,
        /// Free-text search
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },
    /// Show one job and its similar jobs
    Job { id: String },
    /// Render any path, e.g. /jobs/<id>
    Open { path: String },
    /// Interactive shell (default)
    Shell,
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    let config = config
        .with_api_url(cli.api_url)
        .with_session_path(cli.session_file)?;
    info!("Jobs API: {}", config.api.base_url);
    info!("Session file: {}", config.session.path.display());

    let client = ServiceClient::new(&config.api.base_url, config.api.timeout_seconds)?;
    let session = SessionStore::open(&config.session.path)?;
    let mut app = App::new(client, session);

    match cli.command.unwrap_or(Command::Shell) {
        Command::Login { username, password } => {
            app.navigate(LOGIN_PATH).await?;
            app.dispatch(Action::Username(username)).await?;
            app.dispatch(Action::Password(password)).await?;
            app.dispatch(Action::Submit).await?;
            print_screen(&app, &mut io::stdout())?;
            if !app.session().is_authenticated() {
                anyhow::bail!("Login failed");
            }
        }
        Command::Logout => {
            app.logout().await?;
            println!("Logged out");
        }
        Command::Home => show(&mut app, Route::Home).await?,
        Command::Jobs {
            types,
            salary,
            search,
        } => {
            let filters = FilterSelection::new()
                .with_employment_types(types)
                .with_salary_tier(salary.unwrap_or_default())
                .with_search(search);
            let step = app.go_jobs(filters);
            show_step(&mut app, step).await?;
        }
        Command::Job { id } => {
            let Some(route) = Route::job_details(&id) else {
                anyhow::bail!("Not a valid job id: {:?}", id);
            };
            show(&mut app, route).await?
        }
        Command::Open { path } => show(&mut app, Route::resolve(&path)).await?,
        Command::Shell => run_shell(&mut app).await?,
    }

    Ok(())
}

async fn show<A: JobsApi>(app: &mut App<A>, route: Route) -> Result<()> {
    let step = app.go(route);
    show_step(app, step).await
}

async fn show_step<A: JobsApi>(app: &mut App<A>, step: Step) -> Result<()> {
    if step.is_fetching() {
        eprintln!("{}", view::loader());
    }
    app.finish(step).await?;
    print_screen(app, &mut io::stdout())?;
    hint_login(app);
    Ok(())
}

fn print_screen<A: JobsApi>(app: &App<A>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}\n", app.render())?;
    Ok(())
}

fn hint_login<A: JobsApi>(app: &App<A>) {
    if app.route() == Route::Login {
        eprintln!("Not logged in. Run `jobby login -u <username> -p <password>` first.");
    }
}

/// Run one shell action. A screen with requests in flight is printed once in
/// its loading state, then again when they resolve.
async fn run_action<A: JobsApi>(
    app: &mut App<A>,
    action: Action,
    out: &mut impl Write,
) -> Result<()> {
    let step = app.start(action)?;
    if step.is_fetching() {
        print_screen(app, out)?;
        out.flush()?;
    }
    app.finish(step).await?;
    print_screen(app, out)
}

pub async fn run_shell<A: JobsApi>(app: &mut App<A>) -> Result<()> {
    let start = if app.session().is_authenticated() {
        HOME_PATH
    } else {
        LOGIN_PATH
    };
    let mut stdout = io::stdout();
    run_action(app, Action::Go(start.to_string()), &mut stdout).await?;
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", app.route());
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Action>() {
            Ok(Action::Quit) => break,
            Ok(Action::Help) => println!("{}", HELP),
            Ok(action) => {
                if let Err(e) = run_action(app, action, &mut stdout).await {
                    warn!("Action failed: {}", e);
                    println!("! {}", e);
                }
            }
            Err(e) => println!("! {}", e),
        }
    }

    info!("Shell closed");
    Ok(())
}
