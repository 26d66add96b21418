use crate::helpers::{list_files, TestContext};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::Arc;
use vocab_tts::controllers::batch::BatchController;
use vocab_tts::domain::tts::BatchServiceApi;
use vocab_tts::infrastructure::picker::FixedSourcePicker;

#[tokio::test]
async fn it_should_generate_one_file_per_word() {
    let ctx = TestContext::new();
    let service = ctx.batch_service(&[Some("chat"), Some(""), Some("chien!!!")]);

    let report = service.process(Path::new("vocabulaire.xlsx")).await.unwrap();

    assert_eq!(
        list_files(&ctx.output_dir),
        vec!["chat.mp3".to_string(), "chien.mp3".to_string()]
    );
    assert_eq!(report.skipped_empty, 1);
    assert_eq!(
        ctx.events.synthesized(),
        vec!["chat".to_string(), "chien!!!".to_string()]
    );
    assert!(ctx.events.played().is_empty());
}

#[tokio::test]
async fn it_should_not_regenerate_existing_files() {
    let ctx = TestContext::new();
    ctx.seed_audio("chat", b"old");
    let service = ctx.batch_service(&[Some("chat"), Some("chien")]);

    let report = service.process(Path::new("vocabulaire.xlsx")).await.unwrap();

    assert_eq!(report.skipped_existing, 1);
    assert_eq!(ctx.events.synthesized(), vec!["chien".to_string()]);
    assert_eq!(std::fs::read(ctx.audio_file("chat")).unwrap(), b"old");
}

#[tokio::test]
async fn it_should_continue_after_a_failed_word() {
    let ctx = TestContext::new();
    ctx.tts_repo.fail_on("grenouille");
    let service = ctx.batch_service(&[Some("grenouille"), Some("lapin"), None, Some("renard")]);

    let report = service.process(Path::new("vocabulaire.xlsx")).await.unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].word, "grenouille");
    assert_eq!(
        list_files(&ctx.output_dir),
        vec!["lapin.mp3".to_string(), "renard.mp3".to_string()]
    );
}

#[tokio::test]
async fn it_should_run_through_the_controller() {
    let ctx = TestContext::new();
    let service = Arc::new(ctx.batch_service(&[Some("pomme de terre"), Some("   ")]));
    let controller = BatchController::new(
        Arc::new(FixedSourcePicker::new("vocabulaire.xlsx")),
        service,
    );

    let report = controller.run().await.unwrap().expect("source was provided");

    assert_eq!(report.synthesized, vec![ctx.audio_file("pomme_de_terre"), ctx.audio_file("unnamed")]);
    assert!(report.is_clean());
}
