use anyhow::Result;
use clap::{Parser, Subcommand};
use openrouter_imagegen::app::{self, App};
use openrouter_imagegen::catalog::{self, AspectRatio};
use openrouter_imagegen::models::{parse_timeout_secs, Config};
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "openrouter-imagegen")]
#[command(about = "Generate images through OpenRouter multimodal models")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate one image from a prompt.
    Generate(GenerateArgs),
    /// List suggested models and supported aspect ratios.
    Models,
    /// Show the price/context note for a model id.
    Info {
        #[arg(value_name = "MODEL")]
        model: String,
    },
    /// Print example prompts.
    Examples,
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Prompt describing the image.
    #[arg(value_name = "PROMPT")]
    prompt: String,

    /// API key (defaults to OPENROUTER_API_KEY).
    #[arg(long)]
    api_key: Option<String>,

    /// Chat-completions endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Model id; unlisted ids are passed through.
    #[arg(long)]
    model: Option<String>,

    /// One of 1:1, 2:3, 3:2, 3:4, 4:3, 4:5, 5:4, 9:16, 16:9, 21:9.
    #[arg(long, value_parser = parse_aspect_ratio_arg)]
    aspect_ratio: Option<AspectRatio>,

    /// Request timeout in seconds; unset waits indefinitely.
    #[arg(long, value_parser = parse_timeout_arg)]
    timeout_secs: Option<Duration>,

    /// Print the full JSON response.
    #[arg(long)]
    raw: bool,
}

impl GenerateArgs {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            config.aspect_ratio = aspect_ratio;
        }
        if self.timeout_secs.is_some() {
            config.timeout = self.timeout_secs;
        }
        config
    }
}

fn parse_aspect_ratio_arg(input: &str) -> std::result::Result<AspectRatio, String> {
    input.parse().map_err(|e: openrouter_imagegen::Error| e.to_string())
}

fn parse_timeout_arg(input: &str) -> std::result::Result<Duration, String> {
    parse_timeout_secs(input).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openrouter_imagegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match args.command {
        Command::Models => print!("{}", app::render_models()),
        Command::Info { model } => println!("{}", catalog::model_info(&model)),
        Command::Examples => print!("{}", app::render_examples()),
        Command::Generate(generate) => {
            let config = match Config::from_env() {
                Ok(config) => generate.apply_to(config),
                Err(e) => {
                    error!("Failed to load configuration: {}", e);
                    std::process::exit(1);
                }
            };

            if let Some(ratio) = app::effective_aspect_ratio(&config) {
                info!("Requesting aspect ratio {}", ratio);
            }

            let model = config.model.clone();
            let app = App::new(config);
            let result = app.generate(&generate.prompt).await;
            print!("{}", app::render_result(&result, &model, generate.raw));

            if !result.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
