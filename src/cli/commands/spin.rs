use crate::cli::GlobalArgs;
use crate::cli::ui::{display_result, display_warning, display_wheel};
use crate::core::aggregator::{CategoryFilter, FilterOption};
use crate::core::session::RouletteSession;
use crate::core::spin::SpinAnimation;
use crate::core::wheel::WedgeSet;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Select;
use std::fmt;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "spin", about = "Let the roulette pick a drink")]
pub struct SpinCommand {
    /// Category id to spin over ("all" for every drink)
    #[arg(short, long, conflicts_with = "pick")]
    pub category: Option<String>,

    /// Choose the category interactively
    #[arg(short, long)]
    pub pick: bool,

    /// Print the result as JSON instead of animating
    #[arg(short, long)]
    pub json: bool,
}

struct FilterChoice(FilterOption);

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.label)
    }
}

pub async fn execute(command: SpinCommand, global: &GlobalArgs) -> anyhow::Result<()> {
    let document = super::load_menu(&global.menu).await?;
    let mut session = RouletteSession::open(document, global.roulette_config());

    let filter = if command.pick {
        prompt_filter(session.filter_options())?
    } else {
        command
            .category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_default()
    };
    session.set_filter(filter)?;

    let Some(wheel) = session.wheel().cloned() else {
        display_warning(&format!("No drinks match '{}'", session.filter()));
        return Ok(());
    };

    let Some(animation) = session.spin()? else {
        return Ok(());
    };

    if command.json {
        let result = session
            .wait_outcome()
            .await
            .ok_or_else(|| anyhow::anyhow!("Spin was cancelled"))?;
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
        return Ok(());
    }

    display_wheel(&wheel);
    let progress = spin_progress(&animation);
    let ticker = tokio::spawn(tick(progress.clone(), animation, wheel));

    let result = session.wait_outcome().await.cloned();
    ticker.abort();
    progress.finish_and_clear();

    match result {
        Some(result) => display_result(&result.summary),
        None => display_warning("Spin was cancelled"),
    }

    Ok(())
}

fn prompt_filter(options: &[FilterOption]) -> anyhow::Result<CategoryFilter> {
    let choices = options.iter().cloned().map(FilterChoice).collect();
    let choice = Select::new("Spin over which drinks?", choices).prompt()?;
    Ok(choice.0.filter)
}

fn spin_progress(animation: &SpinAnimation) -> ProgressBar {
    let progress = ProgressBar::new(animation.duration.as_millis() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    progress
}

/// Redraw the bar with the drink passing the pointer
async fn tick(progress: ProgressBar, animation: SpinAnimation, wheel: WedgeSet) {
    let mut interval = tokio::time::interval(Duration::from_millis(50));
    loop {
        interval.tick().await;
        let elapsed = animation.started_at.elapsed();
        let angle = animation.angle_after(elapsed);
        let passing = wheel
            .get(wheel.wedge_at_pointer(angle))
            .map(|drink| drink.name().to_string())
            .unwrap_or_default();

        progress.set_position(elapsed.as_millis().min(animation.duration.as_millis()) as u64);
        progress.set_message(passing);
    }
}
