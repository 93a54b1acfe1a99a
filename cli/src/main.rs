use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use client::net::api::DEFAULT_SERVER_URL;
use client::state::shell::{AuthPage, Shell, View};
use client::{AuthApi, AuthController, ClientError, FileSessionStore, HttpAuthApi, LoginForm, RegisterForm, SessionStore};
use models::{ErrorDetails, Field, FieldErrors, Session};
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tone", about = "TONE mock auth CLI")]
struct Cli {
    #[arg(long, env = "TONE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    #[arg(long, env = "TONE_SESSION_FILE", default_value = ".tone-session.json")]
    session_file: PathBuf,

    #[arg(short, long, default_value_t = false, help = "Log requests to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login(LoginArgs),
    Register(RegisterArgs),
    /// Forget the stored session.
    Logout,
    /// Print the stored session.
    Whoami,
    /// Fetch the current user from the service.
    Me,
    Health,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    password: String,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long, default_value = "")]
    username: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    password: String,

    #[arg(long, help = "Defaults to --password")]
    confirm_password: Option<String>,
}

type Controller = AuthController<HttpAuthApi, FileSessionStore>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut auth = AuthController::new(HttpAuthApi::new(&cli.server_url), FileSessionStore::new(&cli.session_file));
    let mut shell = Shell::new();
    shell.restored(auth.restore());

    match cli.command {
        Command::Login(args) => run_login(&mut shell, &mut auth, args).await,
        Command::Register(args) => run_register(&mut shell, &mut auth, args).await,
        Command::Logout => {
            auth.logout()?;
            shell.on_logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&shell, &auth),
        Command::Me => print_json(&serde_json::to_value(auth.api().me().await?)?),
        Command::Health => print_json(&serde_json::to_value(auth.api().health().await?)?),
    }
}

async fn run_login(shell: &mut Shell, auth: &mut Controller, args: LoginArgs) -> Result<(), CliError> {
    let mut form = LoginForm::new();
    form.input(Field::Email, args.email);
    form.input(Field::Password, args.password);

    if !form.submit(auth).await {
        return Err(CliError::Rejected(failure_report(auth, form.field_errors())));
    }
    shell.on_auth_success();
    run_whoami(&*shell, &*auth)
}

async fn run_register(shell: &mut Shell, auth: &mut Controller, args: RegisterArgs) -> Result<(), CliError> {
    shell.switch_to(AuthPage::Register, auth.is_loading());
    let confirm = args.confirm_password.unwrap_or_else(|| args.password.clone());
    let mut form = RegisterForm::new();
    form.input(Field::Username, args.username);
    form.input(Field::Email, args.email);
    form.input(Field::Password, args.password);
    form.input(Field::ConfirmPassword, confirm);

    if !form.submit(auth).await {
        return Err(CliError::Rejected(failure_report(auth, form.field_errors())));
    }
    shell.on_auth_success();
    run_whoami(&*shell, &*auth)
}

fn run_whoami<A: AuthApi, S: SessionStore>(shell: &Shell, auth: &AuthController<A, S>) -> Result<(), CliError> {
    print_json(&serde_json::to_value(current_session(shell, auth)?)?)
}

/// The signed-in session, if the shell is showing the home view.
fn current_session<A: AuthApi, S: SessionStore>(shell: &Shell, auth: &AuthController<A, S>) -> Result<Session, CliError> {
    match (shell.view(), auth.state().get().session) {
        (View::Home, Some(session)) => Ok(session),
        (View::Restoring, _) => Err(CliError::Rejected("session not restored yet".to_owned())),
        _ => Err(CliError::Rejected("not logged in".to_owned())),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Human-readable account of a failed attempt: form field errors when local
/// validation stopped it, else the controller's message and any hints.
fn failure_report(auth: &Controller, form_errors: &FieldErrors) -> String {
    let state = auth.state().get();
    if !form_errors.is_empty() {
        return render_failure(models::messages::INPUT_HAS_ERRORS, form_errors, None);
    }
    let message = state.error.as_deref().unwrap_or("request failed");
    render_failure(message, &state.field_errors, state.failure.as_ref())
}

fn render_failure(message: &str, fields: &FieldErrors, details: Option<&ErrorDetails>) -> String {
    let mut out = message.to_owned();
    for (field, text) in fields.entries() {
        let _ = write!(out, "\n  {}: {text}", field.as_str());
    }
    match details {
        Some(ErrorDetails::ValidationError(server_fields)) => {
            for (field, text) in server_fields.entries() {
                let _ = write!(out, "\n  {}: {text}", field.as_str());
            }
        }
        Some(ErrorDetails::InvalidCredentials(hint)) => {
            let _ = write!(out, "\n{}", hint.suggestion);
            out.push_str("\ntest accounts:");
            for account in &hint.test_accounts {
                let _ = write!(out, "\n  {} / {} ({})", account.email, account.password, account.username);
            }
        }
        _ => {}
    }
    out
}
