use whisper_batch::cli::{Args, dispatch};

// Kept in its own test binary: it mutates process-wide environment state.
#[test]
fn missing_credential_fails_before_discovery() {
    unsafe { std::env::remove_var("LLMWHISPERER_API_KEY") };

    // The input path is bogus on purpose: the credential check must fire
    // first, so the error talks about the key, not the path.
    let err = dispatch(Args {
        input: "definitely-not-a-real-input".into(),
        config: None,
        log_level: None,
    })
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("LLMWHISPERER_API_KEY"), "got: {msg}");
    assert!(!msg.contains("does not exist"), "got: {msg}");
}
