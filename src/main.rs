use anyhow::Context;
use clap::Parser;
use meeting_cost::core::ParameterSource;
use meeting_cost::utils::error::ErrorSeverity;
use meeting_cost::utils::{logger, validation::Validate};
use meeting_cost::{resolve_parameters, CliConfig, MeetingCostEngine, SharedLink, TomlConfig};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting meeting-cost CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write report")?;
            if !output.ends_with('\n') {
                writeln!(stdout).context("failed to write report")?;
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> meeting_cost::Result<String> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            file_config
        }
        None => TomlConfig::default(),
    };

    let link = config.from_url.as_deref().map(SharedLink::parse).transpose()?;

    // Later sources win: config file, then shared link, then explicit flags.
    let mut sources: Vec<&dyn ParameterSource> = vec![&file_config];
    if let Some(link) = &link {
        sources.push(link);
    }
    sources.push(config);
    let params = resolve_parameters(&sources)?;

    let share_base = config
        .base_url
        .as_deref()
        .unwrap_or_else(|| file_config.share_base_url());
    let engine = MeetingCostEngine::new(file_config.catalog()?, share_base)?;
    let report = engine.run(&params)?;

    let format = config
        .format
        .or_else(|| file_config.output_format())
        .unwrap_or_default();
    report.render(format)
}
