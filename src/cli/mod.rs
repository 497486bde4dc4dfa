pub mod commands;

use anyhow::{bail, Context};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::chat::{ChatError, ChatRequest, ChatService};
use crate::cli::commands::{Commands, HistoryAction};
use crate::config::AppConfig;
use crate::db::{DuckDbStore, StorageError};
use crate::llm::GatewayFactory;

/// Opens the store and wires the chat service around it.
pub fn build_service(config: &AppConfig) -> Result<(Arc<DuckDbStore>, ChatService), StorageError> {
    let store = Arc::new(DuckDbStore::open(&config.database)?);
    let gateway = GatewayFactory::create_default(config);
    let service = ChatService::new(store.clone(), gateway, &config.chat);
    Ok((store, service))
}

pub async fn run_cli(command: Commands, config_path: &str) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path).context("Failed to load config")?;
    let (store, service) = build_service(&config).context("Failed to open chat store")?;

    let result = match command {
        Commands::Serve => bail!("serve is handled by the server entrypoint"),
        Commands::History { action } => match action {
            HistoryAction::Show { session } => show_history(&service, &session),
            HistoryAction::Clear { session } => {
                let deleted = service.clear_history(Some(&session))?;
                println!("Cleared {} turns from session {}", deleted, session);
                Ok(())
            }
        },
        Commands::Chat { session } => run_repl(&service, &session).await,
    };

    store.teardown()?;
    result
}

fn show_history(service: &ChatService, session: &str) -> anyhow::Result<()> {
    let turns = service.history(Some(session))?;
    if turns.is_empty() {
        println!("No chat history for session {}.", session);
        return Ok(());
    }

    for turn in turns {
        println!("[{}] #{}", turn.created_at.format("%Y-%m-%d %H:%M:%S"), turn.id);
        println!("USER: {}", turn.user_message);
        println!("AI:   {}", turn.ai_response);
        println!("---");
    }
    Ok(())
}

async fn run_repl(service: &ChatService, session: &str) -> anyhow::Result<()> {
    println!("--- Portfolio Assistant ---");
    println!("Session: {}", session);
    println!("Type /exit to quit.");
    println!("---------------------------");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nYou> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let text = line.trim();

        if text.is_empty() {
            continue;
        }
        if text == "/exit" || text == "/quit" {
            break;
        }

        let request = ChatRequest {
            message: text.to_string(),
            session_id: Some(session.to_string()),
        };
        match service.chat(request).await {
            Ok(turn) => println!("Assistant> {}", turn.ai_response),
            Err(ChatError::Validation(msg)) => eprintln!("{}", msg),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
