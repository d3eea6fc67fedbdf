use AdvocateChatAgent::services::speech_service::{transcribe, SpeechError, SpeechRecognizer};
use mockall::mock;

mock! {
    Recognizer {}

    #[async_trait::async_trait]
    impl SpeechRecognizer for Recognizer {
        async fn recognize(&self, audio: &[u8]) -> Result<Option<String>, SpeechError>;
    }
}

#[tokio::test]
async fn test_recognized_speech_yields_transcript_and_success_status() {
    let mut recognizer = MockRecognizer::new();
    recognizer
        .expect_recognize()
        .times(1)
        .returning(|_| Ok(Some("what is the refund policy".to_string())));

    let outcome = transcribe(b"opus bytes", &recognizer).await;
    assert!(outcome.recognized);
    assert_eq!(outcome.text, "what is the refund policy");
    assert_eq!(outcome.status, "You said: what is the refund policy");
}

#[tokio::test]
async fn test_unintelligible_audio_recovers_to_empty_input() {
    let mut recognizer = MockRecognizer::new();
    recognizer.expect_recognize().times(1).returning(|_| Ok(None));

    // Never an unhandled fault; the user just records again.
    let outcome = transcribe(b"mumbling", &recognizer).await;
    assert!(!outcome.recognized);
    assert!(outcome.text.is_empty(), "Empty text means the caller skips the model call");
    assert_eq!(outcome.status, "Could not understand audio");
}

#[tokio::test]
async fn test_service_failure_recovers_with_detail_in_status() {
    let mut recognizer = MockRecognizer::new();
    recognizer.expect_recognize().times(1).returning(|_| {
        Err(SpeechError::Api {
            status: 500,
            detail: "backend unavailable".to_string(),
        })
    });

    let outcome = transcribe(b"opus bytes", &recognizer).await;
    assert!(!outcome.recognized);
    assert!(outcome.text.is_empty());
    assert!(
        outcome.status.starts_with("Could not request results;"),
        "Status should carry the request-error prefix, got: {}",
        outcome.status
    );
    assert!(outcome.status.contains("backend unavailable"));
}

#[tokio::test]
async fn test_recognizer_receives_raw_audio_bytes() {
    let mut recognizer = MockRecognizer::new();
    recognizer
        .expect_recognize()
        .withf(|audio: &[u8]| audio == b"exact payload")
        .times(1)
        .returning(|_| Ok(Some("ok".to_string())));

    let outcome = transcribe(b"exact payload", &recognizer).await;
    assert!(outcome.recognized);
}
