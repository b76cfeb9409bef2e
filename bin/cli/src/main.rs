//! Drive the color sync loop from the command line.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colorsync::{
    form::{PICKER_ID, SWATCH_ID},
    ClientConfig, ColorState, ConvertRequest, FieldBag, HttpTransport, LocalTransport,
    MemoryForm, Model, Outcome, Rgb, Session, Transport,
};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(name = "colorsync", about = "Keep RGB, CMYK and HLS views of a color in sync")]
struct Cli {
    /// Post conversions to the endpoint instead of converting in process.
    #[arg(long, global = true)]
    remote: bool,

    /// URL of the conversion endpoint.
    #[arg(long, env = "COLORSYNC_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// JSON configuration file.
    #[arg(long, env = "COLORSYNC_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// How long edits are ignored after a state is applied, in milliseconds.
    #[arg(long, env = "COLORSYNC_GUARD_WINDOW_MS", global = true)]
    guard_window_ms: Option<u64>,

    /// How long to wait for the endpoint to answer, in milliseconds.
    #[arg(long, env = "COLORSYNC_TIMEOUT_MS", global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the fields of one model to every model.
    Convert {
        /// The model the values belong to.
        model: Model,
        /// Field values as `field=value`.
        #[arg(value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },
    /// Decode a hex color and convert it to every model.
    Hex {
        /// A `#RGB` or `#RRGGBB` color.
        value: String,
    },
    /// Start from the initial color, edit one field and print the form.
    Edit {
        /// The model of the edited field.
        model: Model,
        /// Name of the field.
        field: String,
        /// The new value.
        value: String,
        /// Edit the slider instead of the numeric input.
        #[arg(long)]
        slider: bool,
    },
}

impl Cli {
    /// The configuration file, or the defaults, with the command line
    /// settings applied over it.
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("could not read config {}", path.display()))?,
            None => ClientConfig::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(guard_window_ms) = self.guard_window_ms {
            config.guard_window_ms = guard_window_ms;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        Ok(config)
    }
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(field, value)| (field.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| format!("expected `field=value`, got `{s}`"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.client_config()?;

    if cli.remote {
        let transport = HttpTransport::from_config(&config).context("could not create client")?;
        tracing::info!(endpoint = transport.endpoint(), "using remote endpoint");
        run(cli.command, transport, &config).await
    } else {
        run(cli.command, LocalTransport, &config).await
    }
}

async fn run<T: Transport>(command: Command, transport: T, config: &ClientConfig) -> Result<()> {
    match command {
        Command::Convert { model, values } => {
            let request = ConvertRequest::new(model, values.into_iter().collect());
            let state = transport
                .convert(request)
                .await
                .context("conversion failed")?;
            print_state(&state)
        }
        Command::Hex { value } => {
            let rgb = Rgb::from_hex(&value);
            let request = ConvertRequest::from_state(Model::Rgb, &ColorState::from_rgb(rgb));
            let state = transport
                .convert(request)
                .await
                .context("conversion failed")?;
            print_state(&state)
        }
        Command::Edit {
            model,
            field,
            value,
            slider,
        } => {
            if !model.fields().contains(&field.as_str()) {
                bail!("{model} has no field `{field}`, expected one of {:?}", model.fields());
            }

            let mut session = Session::new(MemoryForm::new(), transport, config);
            session.start(&ColorState::initial());

            // Edits right after a programmatic update are ignored.
            tokio::time::sleep(session.guard().window()).await;

            let outcome = if slider {
                session.slider_moved(model, &field, &value).await
            } else {
                session.input_changed(model, &field, &value).await
            };

            match outcome {
                Outcome::Failed(err) => return Err(err).context("conversion failed"),
                outcome => tracing::info!(?outcome, "edit finished"),
            }

            print_form(session.form());
            Ok(())
        }
    }
}

fn print_state(state: &ColorState) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}

fn print_form(form: &MemoryForm) {
    for (id, value) in form.controls() {
        println!("{:<16} {}", id.to_string(), value.unwrap_or("-"));
    }
    for id in [SWATCH_ID, PICKER_ID] {
        println!("{:<16} {}", id, form.get(id).unwrap_or_default());
    }
}
