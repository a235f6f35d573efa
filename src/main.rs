//! Resume analyzer: ATS scoring for resumes against job descriptions

use anyhow::Result;
use clap::Parser;
use log::error;
use resume_analyzer::cli::{self, Cli, Commands};
use resume_analyzer::config::Config;
use resume_analyzer::error::ResumeAnalyzerError;
use resume_analyzer::output::formatter::{self, ConsoleFormatter};
use resume_analyzer::processing::analyzer::AnalysisEngine;
use resume_analyzer::{input, server};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(&config).await?;
            Ok(())
        }

        Commands::Analyze {
            resume,
            job,
            output,
            no_color,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            let resume_bytes = tokio::fs::read(&resume).await?;
            let resume_name = resume
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let resume_text = input::extract_text(&resume_bytes, &resume_name)?;

            let job_text = tokio::fs::read_to_string(&job).await?;

            let engine = AnalysisEngine::from_config(&config)?;
            let report = engine.analyze(&resume_text, &job_text)?;

            match output.to_lowercase().as_str() {
                "console" => {
                    print!("{}", ConsoleFormatter::new(!no_color).format(&report));
                }
                "json" => {
                    println!("{}", formatter::to_pretty_json(&report)?);
                }
                other => {
                    return Err(ResumeAnalyzerError::InvalidInput(format!(
                        "Invalid output format: {}. Supported: console, json",
                        other
                    ))
                    .into());
                }
            }
            Ok(())
        }
    }
}
