use whisper_batch::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../whisper-batch.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.api.mode, "high_quality");
    assert_eq!(cfg.api.output_mode, "layout_preserving");
    assert!(cfg.api.wait_timeout_seconds > 0);
    assert!(!cfg.output.dir_name.is_empty());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: Config = toml::from_str("[api]\nmode = \"low_cost\"\n").expect("parse TOML");
    assert_eq!(cfg.api.mode, "low_cost");
    assert_eq!(cfg.api.key_env, "LLMWHISPERER_API_KEY");
    assert_eq!(cfg.output.dir_name, "extracted_text");
    assert_eq!(cfg.output.suffix, ".txt");
}
