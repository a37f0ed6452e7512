use anyhow::Result;
use hoteldo_core::repository::TaskRepository;
use owo_colors::{OwoColorize, Style};

pub async fn health_check(repo: &impl TaskRepository) -> Result<()> {
    match repo.health_check().await {
        Ok(()) => {
            println!(
                "{} database: connected",
                "✓".style(Style::new().green().bold())
            );
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{} database: disconnected",
                "✗".style(Style::new().red().bold())
            );
            Err(e.into())
        }
    }
}
