use std::process::ExitCode;
use std::sync::Arc;
use vocab_tts::controllers::speak::{SpeakArgs, SpeakController};
use vocab_tts::domain::tts::{SpeakService, SpeechSynthesizer};
use vocab_tts::error::AppResult;
use vocab_tts::infrastructure::audio::RodioAudioPlayer;
use vocab_tts::infrastructure::config::Config;
use vocab_tts::infrastructure::logging::init_logging;
use vocab_tts::infrastructure::repositories::create_tts_repository;

#[tokio::main]
async fn main() -> ExitCode {
    // Wrong arity exits quietly, before anything is set up
    let args = match SpeakArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => return ExitCode::from(e.exit_code()),
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    init_logging(&config);

    match run(config, args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config: Config, args: SpeakArgs) -> AppResult<()> {
    tracing::debug!(
        output_dir = %config.speak.output_dir.display(),
        voice = %config.speak.voice,
        provider = ?config.tts_provider,
        "Starting vocab-tts"
    );

    let tts_repo = create_tts_repository(&config).await;
    let synthesizer = SpeechSynthesizer::new(tts_repo, config.synthesis_timeout);
    let speak_service = Arc::new(SpeakService::new(
        synthesizer,
        Arc::new(RodioAudioPlayer::new()),
        config.speak.clone(),
    ));
    let speak_controller = SpeakController::new(speak_service);

    speak_controller.speak(args).await?;

    Ok(())
}
