use clap::Parser;
use dialoguer::Confirm;
use hoteldo_core::db;
use hoteldo_core::error::CoreError;
use hoteldo_core::repository::{SqliteRepository, TaskRepository};
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool);

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command).await,
        cli::Commands::List(command) => commands::list::list_tasks(&repository, command).await,
        cli::Commands::Weekend(command) => {
            commands::weekend::show_weekend(&repository, command).await
        }
        cli::Commands::All => commands::overview::show_all(&repository).await,
        cli::Commands::Completed => {
            commands::completed::show_completed(&repository, &config).await
        }
        cli::Commands::Done(command) => commands::done::toggle_task(&repository, command).await,
        cli::Commands::Edit(command) => commands::edit::edit_task(&repository, command).await,
        cli::Commands::Delete(command) => {
            let task = match repository.find_task_by_id(command.id).await {
                Ok(Some(t)) => t,
                Ok(None) => {
                    let error_style = Style::new().red().bold();
                    eprintln!(
                        "{} Task with ID '{}' not found.",
                        "Error:".style(error_style),
                        command.id
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    handle_error(e.into());
                    return;
                }
            };

            if !command.force {
                let confirmation = Confirm::new()
                    .with_prompt(format!(
                        "Are you sure you want to delete task '{}'?",
                        task.title
                    ))
                    .default(false)
                    .interact()
                    .unwrap_or(false);

                if !confirmation {
                    println!("Deletion cancelled.");
                    return;
                }
            }
            commands::delete::delete_task(&repository, command.id).await
        }
        cli::Commands::Health => commands::health::health_check(&repository).await,
    };

    if let Err(e) = result {
        handle_error(e);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(id) => {
                eprintln!(
                    "{} Task with ID '{}' not found.",
                    "Error:".style(error_style),
                    id
                );
            }
            CoreError::InvalidInput(msg) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), msg);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
    std::process::exit(1);
}
