use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<LlmConfig, LlmError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    LlmConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_to_openai_chat_completions() {
    let cfg = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::OpenAi);
    assert_eq!(cfg.model, "gpt-4o-mini");
    assert_eq!(cfg.max_tokens, DEFAULT_LLM_MAX_TOKENS);
    assert_eq!(cfg.openai_mode, OpenAiApiMode::ChatCompletions);
    assert_eq!(cfg.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.api_key, "sk-test");
}

#[test]
fn missing_key_names_the_expected_variable() {
    let err = config_from(&[]).unwrap_err();
    assert!(matches!(&err, LlmError::MissingApiKey { var } if var == "OPENAI_API_KEY"));
    assert!(err.is_configuration());
}

#[test]
fn blank_key_counts_as_missing() {
    let err = config_from(&[("OPENAI_API_KEY", "   ")]).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[test]
fn key_var_indirection_is_honored() {
    let cfg = config_from(&[("LLM_API_KEY_ENV", "TEAM_KEY"), ("TEAM_KEY", "secret")]).unwrap();
    assert_eq!(cfg.api_key, "secret");

    let err = config_from(&[("LLM_API_KEY_ENV", "TEAM_KEY"), ("OPENAI_API_KEY", "sk-test")]).unwrap_err();
    assert!(matches!(&err, LlmError::MissingApiKey { var } if var == "TEAM_KEY"));
}

#[test]
fn anthropic_provider_uses_its_own_defaults() {
    let cfg = config_from(&[("LLM_PROVIDER", "anthropic"), ("ANTHROPIC_API_KEY", "ak")]).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
    assert_eq!(cfg.api_key, "ak");
}

#[test]
fn parses_openai_overrides() {
    let cfg = config_from(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_MODEL", "gpt-4o"),
        ("LLM_MAX_TOKENS", "2048"),
        ("LLM_OPENAI_MODE", "responses"),
        ("LLM_OPENAI_BASE_URL", "https://example.test/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ])
    .unwrap();
    assert_eq!(cfg.model, "gpt-4o");
    assert_eq!(cfg.max_tokens, 2048);
    assert_eq!(cfg.openai_mode, OpenAiApiMode::Responses);
    assert_eq!(cfg.openai_base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn unparsable_numbers_fall_back_to_defaults() {
    let cfg = config_from(&[("OPENAI_API_KEY", "sk-test"), ("LLM_MAX_TOKENS", "lots")]).unwrap();
    assert_eq!(cfg.max_tokens, DEFAULT_LLM_MAX_TOKENS);
}

#[test]
fn unknown_provider_errors() {
    let err = config_from(&[("LLM_PROVIDER", "bad"), ("OPENAI_API_KEY", "sk-test")])
        .unwrap_err()
        .to_string();
    assert!(err.contains("unknown LLM_PROVIDER"));
}

#[test]
fn unknown_openai_mode_errors() {
    let err = config_from(&[("OPENAI_API_KEY", "sk-test"), ("LLM_OPENAI_MODE", "bad_mode")])
        .unwrap_err()
        .to_string();
    assert!(err.contains("unsupported openai_api mode"));
}
