use clap::Parser;
use std::process::ExitCode;

use helpdesk::api::ApiClient;
use helpdesk::cli::{Cli, Commands, ConfigAction, generate_completions};
use helpdesk::commands::{
    CreateOptions, cmd_classify, cmd_config_path, cmd_config_set, cmd_config_show, cmd_create,
    cmd_desk, cmd_ls, cmd_stats, cmd_status,
};
use helpdesk::config::Config;
use helpdesk::error::Result;
use helpdesk::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Desk);
    if !matches!(command, Commands::Desk) {
        logging::init_stderr();
    }

    match command {
        Commands::Desk => {
            let config = Config::load()?.with_api_url_override(cli.api_url);
            cmd_desk(&config).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                let config = Config::load()?.with_api_url_override(cli.api_url);
                cmd_config_show(&config, json)
            }
            ConfigAction::Path { json } => cmd_config_path(json),
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
        },
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
        command => {
            let config = Config::load()?.with_api_url_override(cli.api_url);
            let api = ApiClient::from_config(&config)?;
            run_service_command(&api, command).await
        }
    }
}

/// Commands that make one round of requests to the ticket service
async fn run_service_command(api: &ApiClient, command: Commands) -> Result<()> {
    match command {
        Commands::Ls { filters, json } => cmd_ls(api, filters.into_query(), json).await,
        Commands::Create {
            title,
            description,
            category,
            priority,
            classify,
            json,
        } => {
            cmd_create(
                api,
                CreateOptions {
                    title,
                    description,
                    category,
                    priority,
                    classify,
                    output_json: json,
                },
            )
            .await
        }
        Commands::Status { id, status, json } => cmd_status(api, &id, status, json).await,
        Commands::Classify { description, json } => {
            cmd_classify(api, &description.join(" "), json).await
        }
        Commands::Stats { json } => cmd_stats(api, json).await,
        Commands::Desk | Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
