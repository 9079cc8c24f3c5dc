use super::*;
use crate::sanitize::sanitize;

#[test]
fn default_header_uses_double_quotes_and_graph() {
    let options = DocumentOptions::default();
    assert_eq!(options.directive_line(), r#"%%{init:{"theme":"default"}}%%"#);
    assert_eq!(options.opener_line(), "graph TB");
}

#[test]
fn single_quote_flowchart_style() {
    let options = DocumentOptions {
        theme: "forest".into(),
        orientation: Orientation::Lr,
        style: HeaderStyle { keyword: DiagramKeyword::Flowchart, quote: ThemeQuote::Single },
    };
    assert_eq!(options.directive_line(), "%%{init:{'theme':'forest'}}%%");
    assert_eq!(options.opener_line(), "flowchart LR");
}

#[test]
fn theme_is_forwarded_verbatim() {
    let options = DocumentOptions { theme: "my custom theme".into(), ..DocumentOptions::default() };
    assert_eq!(options.directive_line(), r#"%%{init:{"theme":"my custom theme"}}%%"#);
}

#[test]
fn assembles_header_and_body() {
    let body = sanitize("```mermaid\ngraph LR\nA[Submit]-->B[Approve]\nB-->C[Notify]\n```");
    let doc = DiagramDocument::assemble(&DocumentOptions::default(), &body);
    assert_eq!(
        doc.as_str(),
        "%%{init:{\"theme\":\"default\"}}%%\ngraph TB\nA[Submit]-->B[Approve]\nB-->C[Notify]"
    );
}

#[test]
fn empty_body_keeps_header_lines() {
    let doc = DiagramDocument::assemble(&DocumentOptions::default(), &sanitize("no diagram here"));
    assert_eq!(doc.to_string(), "%%{init:{\"theme\":\"default\"}}%%\ngraph TB\n");
}

#[test]
fn orientation_parses_case_insensitively() {
    assert_eq!("lr".parse::<Orientation>(), Ok(Orientation::Lr));
    assert_eq!(" TD ".parse::<Orientation>(), Ok(Orientation::Td));
    assert_eq!("bt".parse::<Orientation>().map(|o| o.to_string()), Ok("BT".to_string()));
}

#[test]
fn orientation_rejects_unknown_tokens() {
    let err = "diagonal".parse::<Orientation>().unwrap_err();
    assert!(err.to_string().contains("unknown orientation 'diagonal'"));
}

#[test]
fn known_themes_include_default() {
    assert!(KNOWN_THEMES.contains(&DEFAULT_THEME));
}
