//! Models command implementation.

use crate::cli::ModelsArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factgen_llm::OllamaCli;

/// Execute the models command.
pub async fn execute_models(args: ModelsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let model = args.model.unwrap_or_else(|| config.settings.model.clone());
    let source = OllamaCli::new(model.as_str())
        .with_binary(&config.settings.ollama_binary)
        .with_timeout(config.generation.call_timeout());

    let models = source
        .list_models()
        .await
        .map_err(|e| CliError::Unavailable(e.to_string()))?;

    println!("{}", formatter.models(&models, &model)?);
    Ok(())
}
