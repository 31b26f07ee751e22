use crate::catalog::MenuDocument;
use crate::core::aggregator::{FlattenedDrink, flatten_all};
use crate::core::presenter::DrinkSummary;
use crate::core::wheel::{Rgb, WedgeSet};
use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

pub fn display_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "Info:".cyan(), message);
}

fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.0, color.1, color.2)
}

/// Every drink, grouped by category, as a table
pub fn menu_table(document: &MenuDocument) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Subcategory", "Drink", "Description", "Tags"]);

    for drink in flatten_all(document) {
        table.add_row(drink_row(&drink));
    }
    table
}

fn drink_row(drink: &FlattenedDrink) -> Vec<Cell> {
    vec![
        Cell::new(&drink.category_name),
        Cell::new(drink.subcategory_name.as_deref().unwrap_or("-")),
        Cell::new(drink.name()).fg(Color::Cyan),
        Cell::new(&drink.item.description),
        Cell::new(drink.item.tags().join(", ")),
    ]
}

/// Wedges of a wheel, one line each, in their wedge colors
pub fn display_wheel(wheel: &WedgeSet) {
    println!(
        "Wheel: {} drinks, {:.1}° each",
        wheel.len(),
        wheel.angle_per_wedge()
    );
    for (index, drink) in wheel.items().iter().enumerate() {
        let color = crate::core::wheel::wedge_color(index);
        println!("  {} {}", paint("●", color), drink.name());
    }
}

pub fn display_result(summary: &DrinkSummary) {
    println!();
    println!("{}", summary.headline.bold());
    println!("  {}", summary.name.bright_yellow().bold());
    if !summary.description.is_empty() {
        println!("  {}", summary.description);
    }
    if !summary.tags.is_empty() {
        let tags: Vec<String> = summary
            .tags
            .iter()
            .map(|tag| format!("[{tag}]").magenta().to_string())
            .collect();
        println!("  {}", tags.join(" "));
    }
    println!("  {}", summary.breadcrumb.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builders::{CategoryBuilder, MenuDocumentBuilder};

    #[test]
    fn test_menu_table_rows() {
        let document = MenuDocumentBuilder::new()
            .category(CategoryBuilder::new("coffee", "Coffee").item("Latte"))
            .category(CategoryBuilder::new("tea", "Tea").subcategory("green", "Green", &["Sencha"]))
            .build();

        let table = menu_table(&document);
        assert_eq!(table.row_iter().count(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Latte"));
        assert!(rendered.contains("Green"));
    }
}
