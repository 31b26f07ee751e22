use crate::catalog::MenuDocument;
use crate::cli::GlobalArgs;
use crate::cli::ui::{display_warning, menu_table};
use crate::core::aggregator::{CategoryFilter, filter_by_category, flatten_all};
use crate::error::MenuError;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "list", about = "List every drink on the menu")]
pub struct ListCommand {
    /// Only drinks of this category id
    #[arg(short, long)]
    pub category: Option<String>,

    /// Print flattened drinks as JSON
    #[arg(short, long)]
    pub json: bool,
}

pub async fn execute(command: ListCommand, global: &GlobalArgs) -> anyhow::Result<()> {
    let document = super::load_menu(&global.menu).await?;

    if command.json {
        let filter = command
            .category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_default();
        let drinks = filter_by_category(&flatten_all(&document), &filter);
        println!("{}", serde_json::to_string_pretty(&drinks)?);
        return Ok(());
    }

    if document.is_empty() {
        display_warning("The menu has no categories");
        return Ok(());
    }

    match command.category.as_deref() {
        Some(id) => {
            let category = document
                .category(id)
                .ok_or_else(|| MenuError::UnknownCategory { id: id.to_string() })?;
            println!("{}", category.label());
            let single = MenuDocument {
                categories: vec![category.clone()],
            };
            println!("{}", menu_table(&single));
        }
        None => println!("{}", menu_table(&document)),
    }

    Ok(())
}
