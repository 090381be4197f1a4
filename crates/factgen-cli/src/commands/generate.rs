//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{Formatter, RunSettings};
use crate::prompt::{resolve_input, Prompter};
use factgen_collector::{CollectionRequest, Collector, RunLimits};
use factgen_domain::{FactSet, PromptStyle};
use factgen_export::{default_file_name, export_statements, ExportSummary};
use factgen_llm::OllamaCli;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

/// Execute the generate command.
pub async fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let mut prompter = if args.topic.is_none() || args.model.is_none() {
        Some(Prompter::new()?)
    } else {
        None
    };

    let topic = value_or_ask(
        &mut prompter,
        args.topic.as_deref(),
        "Enter topic for facts",
        &config.settings.topic,
    )?;
    let model = value_or_ask(
        &mut prompter,
        args.model.as_deref(),
        "Enter Ollama model name",
        &config.settings.model,
    )?;

    let mut generation = config.generation.clone();
    if let Some(target) = args.target {
        generation.target_count = target;
    }
    generation.validate()?;

    let source = OllamaCli::new(model.as_str())
        .with_binary(&config.settings.ollama_binary)
        .with_timeout(generation.call_timeout());
    ensure_available(&source, formatter).await?;

    let style = args.style.map(PromptStyle::from).unwrap_or_default();
    let output = output_path(args.output.as_deref(), &topic);
    let request = CollectionRequest::new(topic.as_str(), generation.target_count)
        .with_style(style)
        .with_limits(run_limits(&args));

    let shown = formatter.run_settings(&RunSettings {
        topic: topic.clone(),
        model,
        style,
        target: generation.target_count,
        batch_size: generation.batch_size,
        output: output.clone(),
    });
    if !shown.is_empty() {
        println!("{}", shown);
    }

    let collector = Collector::new(source, generation);
    let mut facts = FactSet::new();

    let report = tokio::select! {
        result = collector.collect(&request, &mut facts) => Some(result?),
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, stopping generation");
            None
        }
    };

    let save = match report {
        Some(_) => true,
        None => {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "Generation interrupted with {} unique statements",
                    facts.len()
                ))
            );
            Prompter::new()?.confirm("Save collected facts?")?
        }
    };

    let summary = if save {
        Some(save_statements(facts, &request, &output)?)
    } else {
        None
    };

    println!("{}", formatter.run_result(report.as_ref(), summary.as_ref())?);
    Ok(())
}

/// Take a value from the command line or ask for it.
fn value_or_ask(
    prompter: &mut Option<Prompter>,
    given: Option<&str>,
    question: &str,
    default: &str,
) -> Result<String> {
    match (given, prompter) {
        (Some(value), _) => Ok(resolve_input(value, default)),
        (None, Some(prompter)) => prompter.ask(question, default),
        (None, None) => Ok(default.to_string()),
    }
}

/// Abort unless the backend answers; warn when the model is not installed.
async fn ensure_available(source: &OllamaCli, formatter: &Formatter) -> Result<()> {
    match source.check_available().await {
        Ok(true) => {
            info!("Model '{}' is available", source.model());
            Ok(())
        }
        Ok(false) => {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "Model '{}' is not installed locally; ollama will try to pull it",
                    source.model()
                ))
            );
            Ok(())
        }
        Err(e) => {
            error!("Availability check failed: {}", e);
            Err(CliError::Unavailable(format!(
                "{}. Install and start Ollama first",
                e
            )))
        }
    }
}

fn run_limits(args: &GenerateArgs) -> RunLimits {
    let mut limits = RunLimits::unbounded();
    if let Some(max) = args.max_iterations {
        limits = limits.with_max_iterations(max);
    }
    if let Some(secs) = args.max_duration_secs {
        limits = limits.with_max_duration(Duration::from_secs(secs));
    }
    limits
}

fn output_path(given: Option<&Path>, topic: &str) -> PathBuf {
    given
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_file_name(topic)))
}

/// Cut the set to the target and write it out.
fn save_statements(
    facts: FactSet,
    request: &CollectionRequest,
    output: &Path,
) -> Result<ExportSummary> {
    let statements = facts.finalize(request.target_count);
    export_statements(&statements, &request.topic, output).map_err(|e| {
        error!("Error saving to Excel: {}", e);
        CliError::from(e)
    })
}
