//! Reading input, rendering and writing output for the CLI.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::Context;
use hal_render::{Renderer, Resource, Value};
use tracing::{debug, info};

use crate::config::CliConfig;

/// Parses a HAL+JSON document into a resource.
pub fn parse_resource(input: &str) -> anyhow::Result<Resource> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;
    Resource::try_from(value).context("Input must be a JSON object")
}

/// Renders HAL+JSON text in the configured format.
pub fn render_input(config: &CliConfig, input: &str) -> anyhow::Result<String> {
    let resource = parse_resource(input)?;
    let renderer = config.format.renderer(config.render_options());
    debug!(media_type = renderer.media_type(), "Rendering resource");
    Ok(renderer.render(&resource)?)
}

/// Reads the configured input, renders it and writes the configured output.
pub fn run(config: &CliConfig) -> anyhow::Result<()> {
    let input = match config.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let output = render_input(config, &input)?;

    match &config.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = output.len(), "Wrote rendered document");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output)?;
        }
    }

    Ok(())
}
