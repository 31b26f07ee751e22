#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use drinkmenu_rs::cli::{Cli, Commands};
    use drinkmenu_rs::cli::{run_list, run_spin};

    let cli = Cli::parse();

    // The TUI owns the terminal, so only plain commands log to stderr
    #[cfg(feature = "tui")]
    let logs = !matches!(cli.command, Commands::Tui(_));
    #[cfg(not(feature = "tui"))]
    let logs = true;

    if logs {
        tracing_subscriber::fmt()
            .with_max_level(cli.global.log_level())
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::List(cmd) => {
            run_list(cmd, &cli.global).await?;
        }
        Commands::Spin(cmd) => {
            run_spin(cmd, &cli.global).await?;
        }
        #[cfg(feature = "tui")]
        Commands::Tui(cmd) => {
            drinkmenu_rs::cli::run_tui(cmd, &cli.global).await?;
        }
    }

    Ok(())
}
