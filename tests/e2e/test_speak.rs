use crate::helpers::{assert_synthesized_before_played, list_files, TestContext};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use vocab_tts::controllers::speak::{SpeakArgs, SpeakController};
use vocab_tts::domain::tts::{SpeakServiceApi, TtsError};
use vocab_tts::error::AppError;

fn args(text: &str, filename: &str) -> SpeakArgs {
    SpeakArgs::parse(vec![text.to_string(), filename.to_string()]).unwrap()
}

#[tokio::test]
async fn it_should_synthesize_then_replay_from_cache() {
    let ctx = TestContext::new();
    let controller = SpeakController::new(Arc::new(ctx.speak_service()));

    let first = controller.speak(args("bonjour", "greeting")).await.unwrap();

    assert_eq!(first.path, ctx.audio_file("greeting"));
    assert!(first.synthesized);
    assert!(first.played);
    assert_synthesized_before_played(&ctx.events.all(), "greeting");

    let second = controller.speak(args("bonjour", "greeting")).await.unwrap();

    assert!(!second.synthesized);
    assert!(second.played);
    assert_eq!(ctx.events.synthesized(), vec!["bonjour".to_string()]);
    assert_eq!(
        ctx.events.played(),
        vec!["greeting.mp3".to_string(), "greeting.mp3".to_string()]
    );
    assert_eq!(list_files(&ctx.output_dir), vec!["greeting.mp3".to_string()]);
}

#[tokio::test]
async fn it_should_hash_when_filename_is_too_long() {
    let ctx = TestContext::new();
    let service = ctx.speak_service();
    let text = "é".repeat(5000);
    let filename = "n".repeat(5000);

    let outcome = service.speak(&text, Some(&filename)).await.unwrap();

    let key = outcome.key.as_str();
    assert_eq!(key.len(), 64);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(list_files(&ctx.output_dir), vec![format!("{}.mp3", key)]);
}

#[tokio::test]
async fn it_should_hash_when_filename_is_blank() {
    let ctx = TestContext::new();
    let service = ctx.speak_service();

    let outcome = service.speak("au revoir", Some("")).await.unwrap();

    assert_eq!(outcome.key.as_str().len(), 64);
    assert!(outcome.synthesized);
}

#[tokio::test]
async fn it_should_strip_unsafe_characters_from_filename() {
    let ctx = TestContext::new();
    let service = ctx.speak_service();

    let outcome = service.speak("à bientôt", Some("../à bientôt?")).await.unwrap();

    assert_eq!(outcome.key.as_str(), "à bientôt");
    assert_eq!(outcome.path, ctx.audio_file("à bientôt"));
}

#[tokio::test]
async fn it_should_fail_on_synthesis_error_without_playing() {
    let ctx = TestContext::new();
    ctx.tts_repo.fail_on("bonjour");
    let controller = SpeakController::new(Arc::new(ctx.speak_service()));

    let err = controller.speak(args("bonjour", "greeting")).await.unwrap_err();

    assert!(matches!(err, AppError::Synthesis(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(ctx.events.played().is_empty());
}

#[tokio::test]
async fn it_should_report_empty_cached_file() {
    let ctx = TestContext::new();
    ctx.seed_audio("greeting", b"");
    let service = ctx.speak_service();

    let err = service.speak("bonjour", Some("greeting")).await.unwrap_err();

    assert!(matches!(err, TtsError::CacheState(ref path) if *path == ctx.audio_file("greeting")));
    assert!(ctx.events.all().is_empty());
    assert_eq!(std::fs::read(ctx.audio_file("greeting")).unwrap(), b"");
}

#[tokio::test]
async fn it_should_finish_when_playback_fails() {
    let ctx = TestContext::new();
    ctx.player.break_device();
    let controller = SpeakController::new(Arc::new(ctx.speak_service()));

    let outcome = controller.speak(args("bonjour", "greeting")).await.unwrap();

    assert!(outcome.synthesized);
    assert!(!outcome.played);
    assert!(ctx.audio_file("greeting").exists());
}
