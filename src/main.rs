use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use hospital_client::{
    AppState,
    api::models::{AppointmentFilter, DEFAULT_ROLE, DoctorFilter, PatientFilter},
    api::operations::{
        AppointmentOperations, AuthOperations, DashboardOperations, DoctorOperations,
        PatientOperations,
    },
    cache::RedisSnapshotStore,
    config::Config,
    error::ApiError,
    navigation::{LogNavigator, require_auth},
    session::{
        SessionStore,
        cookie::TokenCookie,
        snapshot::{FileSnapshotStore, SnapshotStore},
    },
};
use reqwest::cookie::Jar;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hospital-client", about = "Hospital management API client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session
    Login { email: String, password: String },
    /// Create an account (does not log in)
    Register {
        email: String,
        password: String,
        #[arg(long, default_value = DEFAULT_ROLE)]
        role: String,
    },
    /// Clear the local session
    Logout,
    /// Show whether the stored session is still valid
    Status,
    /// Totals and 30-day trends
    Dashboard,
    Patients {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Doctors {
        #[arg(long)]
        specialty: Option<String>,
    },
    Appointments {
        /// ISO date, e.g. 2025-04-12
        #[arg(long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = match build_state(config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialise client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&state, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message("Request failed"));
            ExitCode::FAILURE
        }
    }
}

async fn build_state(config: Config) -> Result<AppState, ApiError> {
    // 配置了 Redis 时会话快照写入 Redis，否则写本地文件
    let snapshots: Arc<dyn SnapshotStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisSnapshotStore::open(url)?),
        None => Arc::new(FileSnapshotStore::new(&config.session_store_dir)),
    };
    let cookie = TokenCookie::new(Arc::new(Jar::default()), config.base_url()?);
    let session = Arc::new(
        SessionStore::hydrate(config.session_store_name.clone(), snapshots, Some(cookie)).await,
    );

    AppState::new(config, session, Arc::new(LogNavigator))
}

async fn run(state: &AppState, command: Command) -> Result<(), ApiError> {
    let client = &state.client;

    match command {
        Command::Login { email, password } => {
            let user = AuthOperations::login(client, &email, &password).await?;
            println!("Logged in as {} ({})", user.email, user.role);
        }
        Command::Register {
            email,
            password,
            role,
        } => {
            AuthOperations::register(client, &email, &password, &role).await?;
            println!("Registration successful. Please log in.");
        }
        Command::Logout => {
            AuthOperations::logout(client).await?;
            println!("Logged out");
        }
        Command::Status => match state.session.user() {
            Some(user) if state.session.is_authenticated() => {
                println!("Authenticated as {} ({})", user.email, user.role)
            }
            _ if state.session.is_authenticated() => println!("Authenticated"),
            _ => println!("Not authenticated"),
        },
        Command::Dashboard => {
            if !require_auth(&state.session, &LogNavigator, &state.config.login_route) {
                return Ok(());
            }
            let summary = DashboardOperations::load(client, Utc::now()).await?;
            for stat in &summary.stats {
                println!("{:<20} {:>6}  {}", stat.name, stat.current_value, stat.change_percent);
            }
            println!();
            if summary.recent_appointments.is_empty() {
                println!("No recent appointments");
            }
            for appointment in &summary.recent_appointments {
                println!(
                    "{:<24} {:<24} {}",
                    appointment.patient_name(),
                    appointment.doctor_name(),
                    appointment.date_time.format("%b %-d, %Y %-I:%M %p")
                );
            }
        }
        Command::Patients { name, email } => {
            if !require_auth(&state.session, &LogNavigator, &state.config.login_route) {
                return Ok(());
            }
            let filter = PatientFilter {
                name,
                email,
                ..Default::default()
            };
            for patient in PatientOperations::list(client, &filter).await? {
                println!(
                    "{:>4}  {:<24} {:<28} {}",
                    patient.id,
                    patient.name,
                    patient.email,
                    patient.phone.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Doctors { specialty } => {
            if !require_auth(&state.session, &LogNavigator, &state.config.login_route) {
                return Ok(());
            }
            let filter = DoctorFilter {
                specialty,
                ..Default::default()
            };
            for doctor in DoctorOperations::list(client, &filter).await? {
                println!("{:>4}  {:<24} {}", doctor.id, doctor.name, doctor.specialty);
            }
        }
        Command::Appointments { date } => {
            if !require_auth(&state.session, &LogNavigator, &state.config.login_route) {
                return Ok(());
            }
            let filter = AppointmentFilter {
                date,
                ..Default::default()
            };
            for appointment in AppointmentOperations::list(client, &filter).await? {
                println!(
                    "{:>4}  {:<24} {:<24} {}  {}",
                    appointment.id,
                    appointment.patient_name(),
                    appointment.doctor_name(),
                    appointment.date_time.format("%Y-%m-%d %H:%M"),
                    appointment.status
                );
            }
        }
    }

    Ok(())
}
