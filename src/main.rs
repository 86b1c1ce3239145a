//! Resume matcher: score a resume against a job description and get AI suggestions

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_matcher::cli::{self, AnalyzeArgs, Cli, Commands, ConfigAction};
use resume_matcher::config::{ApiCredential, Config};
use resume_matcher::input::{InputManager, JobSource};
use resume_matcher::llm::{SuggestionClient, SuggestionProvider};
use resume_matcher::output::{save_report_to_file, AnalysisReport, ReportGenerator};
use resume_matcher::processing::{AnalysisEngine, AnalysisInput, SkillVocabulary};
use resume_matcher::{Result, ResumeMatcherError};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        match &e {
            ResumeMatcherError::MissingInput(prompt) => eprintln!("❗ {}", prompt),
            ResumeMatcherError::MissingCredential(_) => eprintln!("❌ {}", e),
            other => error!("Command failed: {}", other),
        }
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze(args) => run_analysis(args, config).await,

        Commands::Skills => {
            let vocabulary = SkillVocabulary::with_additional(&config.matching.additional_skills);
            println!("🧠 Technical skills vocabulary ({} entries)\n", vocabulary.len());
            for skill in vocabulary.sorted() {
                println!("  • {}", skill);
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("API URL: {}", config.suggestions.api_url);
                println!("Model: {}", config.suggestions.model);
                println!("API key variable: {}", config.suggestions.api_key_env);
                println!("System prompt: {}", config.suggestions.system_prompt);
                println!("Additional skills: {}", config.matching.additional_skills.join(", "));
                println!("Output format: {:?}", config.output.format);
                println!("Loading delay: {}ms", config.output.loading_delay_ms);
                Ok(())
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
                Ok(())
            }
            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
        },
    }
}

async fn run_analysis(args: AnalyzeArgs, config: Config) -> Result<()> {
    // The credential is the one startup invariant: check it before any work.
    let credential = ApiCredential::from_env(&config.suggestions.api_key_env)?;

    let output_format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeMatcherError::InvalidInput)?,
        None => config.output.format,
    };

    if let JobSource::File(path) = args.job_source() {
        cli::validate_file_extension(&path, &["txt", "md", "markdown"])
            .map_err(|e| ResumeMatcherError::InvalidInput(format!("Job description file: {}", e)))?;
    }

    let vocabulary = SkillVocabulary::with_additional(&config.matching.additional_skills);
    let client = SuggestionClient::new(&config.suggestions, credential)?;
    let engine = AnalysisEngine::new(vocabulary, client)?;

    let start = Instant::now();
    let input_manager = InputManager::new();
    let resume = input_manager
        .load_resume(&args.resume, args.resume_type)
        .await?;
    let job_description = input_manager.read_job_description(&args.job_source()).await?;

    info!("Starting resume analysis");
    let evaluation = engine.evaluate(&AnalysisInput::new(Some(resume), job_description))?;

    if !args.no_delay && config.output.loading_delay_ms > 0 {
        show_loading_bar(Duration::from_millis(config.output.loading_delay_ms)).await;
    }

    let suggestions = engine.suggest(&evaluation).await?;
    let outcome = evaluation.into_outcome(suggestions, start);
    let report = AnalysisReport::new(outcome, engine.provider().model_name(), &args.job_label());

    let generator = ReportGenerator::with_options(config.output.color_output, true, true, true);
    let rendered = generator.generate_report(&report, output_format)?;

    match &args.save {
        Some(path) => {
            save_report_to_file(&rendered, path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("✅ Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Purely cosmetic: fills a progress bar before the score is revealed.
async fn show_loading_bar(duration: Duration) {
    const STEPS: u64 = 50;

    let bar = ProgressBar::new(STEPS);
    if let Ok(style) = ProgressStyle::with_template("🎯 Scoring {bar:40.cyan/blue}") {
        bar.set_style(style.progress_chars("█▉▊▋▌▍▎▏ "));
    }

    let step = duration / STEPS as u32;
    for _ in 0..STEPS {
        tokio::time::sleep(step).await;
        bar.inc(1);
    }
    bar.finish_and_clear();
}
