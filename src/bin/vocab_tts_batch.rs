use std::process::ExitCode;
use std::sync::Arc;
use vocab_tts::controllers::batch::BatchController;
use vocab_tts::domain::tts::{BatchService, SpeechSynthesizer};
use vocab_tts::error::AppResult;
use vocab_tts::infrastructure::config::Config;
use vocab_tts::infrastructure::logging::init_logging;
use vocab_tts::infrastructure::picker::{DialogSourcePicker, FixedSourcePicker, SourcePicker};
use vocab_tts::infrastructure::repositories::{create_tts_repository, ExcelVocabularyRepository};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = BatchController::check_args(std::env::args().skip(1)) {
        eprintln!("{}", e);
        return ExitCode::from(e.exit_code());
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    init_logging(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config: Config) -> AppResult<()> {
    tracing::info!(
        output_dir = %config.batch.output_dir.display(),
        voice = %config.batch.voice,
        provider = ?config.tts_provider,
        "Starting vocab-tts-batch"
    );

    let picker: Arc<dyn SourcePicker> = match &config.batch_source_path {
        Some(path) => Arc::new(FixedSourcePicker::new(path.clone())),
        None => Arc::new(DialogSourcePicker),
    };

    let tts_repo = create_tts_repository(&config).await;
    let synthesizer = SpeechSynthesizer::new(tts_repo, config.synthesis_timeout);
    let batch_service = Arc::new(BatchService::new(
        Arc::new(ExcelVocabularyRepository::new(config.batch_skip_header)),
        synthesizer,
        config.batch.clone(),
    ));
    let batch_controller = BatchController::new(picker, batch_service);

    if let Some(report) = batch_controller.run().await? {
        tracing::info!(
            synthesized = report.synthesized.len(),
            failed = report.failures.len(),
            "All words processed"
        );
    }

    Ok(())
}
