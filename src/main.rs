use anyhow::Context;
use chrono::Local;
use clap::Parser;
use hotel_admin::app_service::{join_worker, AdminService};
use hotel_admin::app_state::{App, AppEvent};
use hotel_admin::commands::{AppCommand, Cli};
use hotel_admin::config::AppConfig;
use hotel_admin::storage;
use hotel_admin::ui::render;
use log::info;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

fn init_logging(log_dir: &Path) -> anyhow::Result<()> {
    let ts = Local::now().format("%Y%m%d-%H%M%S").to_string();
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("cannot create log dir {}", log_dir.display()))?;
    let log_path = log_dir.join(format!("hotel-admin-{}.log", ts));
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("cannot create log file {}", log_path.display()))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter_level(log::LevelFilter::Warn)
        .filter_module("hotel_admin", log::LevelFilter::Info)
        .filter_module("sqlx", log::LevelFilter::Error)
        .filter_module("sea_orm", log::LevelFilter::Error)
        .init();
    Ok(())
}

fn prompt() {
    print!("hotel> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    init_logging(&config.log_dir)?;

    let db = Arc::new(
        storage::establish_connection(&config)
            .await
            .with_context(|| format!("database connection failed: {}", config.database_url))?,
    );

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<AppCommand>();
    let (evt_tx, mut evt_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Single background task owns the service; commands run one after another.
    let worker = AdminService::new(Arc::clone(&db)).spawn(cmd_rx, evt_tx);

    let mut app = App::new();
    app.json_output = cli.json;
    let mut failed = false;

    if cli.is_one_shot() {
        // One-shot mode: `hotel-admin reservations Leroy`
        let cmd = AppCommand::from_args(&cli.command);
        info!("One-shot command: {:?}", cmd);
        cmd_tx.send(cmd).context("command worker stopped")?;
        if let Some(event) = evt_rx.recv().await {
            failed = event.is_failure();
            println!("{}", render(&event, app.json_output));
        }
    } else {
        println!(
            "Administration hôtelière ({}). Tapez `help` pour l'aide.",
            config.database_url
        );
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt();
        while let Some(line) = lines.next_line().await? {
            match app.handle_line(&line) {
                None => {}
                Some(Err(event)) => println!("{}", render(&event, app.json_output)),
                Some(Ok(cmd)) => {
                    cmd_tx.send(cmd).context("command worker stopped")?;
                    if let Some(event) = evt_rx.recv().await {
                        println!("{}", render(&event, app.json_output));
                    }
                }
            }
            if app.should_quit {
                break;
            }
            prompt();
        }
    }

    drop(cmd_tx);
    if !join_worker(worker).await {
        failed = true;
    }
    info!("Session finished after {} commands.", app.command_history.len());

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
