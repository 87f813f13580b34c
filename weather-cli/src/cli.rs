use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use weather_core::{ClientConfig, HttpHandlerClient, Palette, ViewState, render::render_card};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the weather service endpoint and display palette.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,

        /// Weather handler URL; overrides the configured endpoint.
        #[arg(long)]
        endpoint: Option<String>,

        /// Display palette: "classic" or "glass".
        #[arg(long)]
        palette: Option<Palette>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, endpoint, palette } => {
                let config = ClientConfig::load()?;
                let client = HttpHandlerClient::new(endpoint.unwrap_or(config.endpoint));

                let mut state = ViewState::new(city);
                state.submit(&client).await;

                match (state.payload, state.error) {
                    (Some(payload), _) => {
                        println!("{}", render_card(&payload, palette.unwrap_or(config.palette)));
                        Ok(())
                    }
                    (None, Some(message)) => bail!(message),
                    (None, None) => bail!("No weather data received."),
                }
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = ClientConfig::load()?;

    config.endpoint = Text::new("Weather service endpoint:")
        .with_default(&config.endpoint)
        .prompt()
        .context("Failed to read endpoint")?;

    let current = Palette::all().iter().position(|p| *p == config.palette).unwrap_or(0);
    config.palette = Select::new("Display palette:", Palette::all().to_vec())
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read palette")?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
