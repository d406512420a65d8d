use chrono::Datelike;
use stamp::{CustomData, Engine, MarkerError};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_copyright_line_gets_host_year() {
    init_logs();
    let engine = Engine::new();
    let expected = format!("Copyright {}", chrono::Local::now().format("%Y"));
    assert_eq!(engine.process_text("Copyright {{current_year}}"), expected);
}

#[test]
fn test_greeting_with_custom_data() {
    init_logs();
    let engine = Engine::new();
    let mut data = CustomData::new();
    data.insert("name", "Bob");
    assert_eq!(engine.process("Hi {{name}}!", &data), "Hi Bob!");
}

#[test]
fn test_add_marker() {
    init_logs();
    let engine = Engine::new();
    assert_eq!(engine.process_text("{{add:5,3,2}}"), "10");
}

#[test]
fn test_years_since_marker() {
    init_logs();
    let engine = Engine::new();
    let expected = (chrono::Local::now().year() - 2020).to_string();
    assert_eq!(engine.process_text("{{years_since:2020}}"), expected);
}

#[test]
fn test_capitalize_marker() {
    init_logs();
    let engine = Engine::new();
    assert_eq!(engine.process_text("{{capitalize:hello world}}"), "Hello world");
}

#[test]
fn test_unknown_marker_is_invariant() {
    init_logs();
    let engine = Engine::new();
    assert_eq!(engine.process_text("{{unknown}}"), "{{unknown}}");
}

#[test]
fn test_registered_double_marker() {
    init_logs();
    let mut engine = Engine::new();
    engine.register_marker("double", |params: &[String]| {
        let n: i64 = params
            .first()
            .and_then(|p| p.trim().parse().ok())
            .ok_or_else(|| MarkerError::invocation("double", "not an integer"))?;
        Ok((n * 2).to_string())
    });
    assert_eq!(engine.process_text("{{double:5}}"), "10");
}

#[test]
fn test_identity_for_marker_free_text() {
    init_logs();
    let engine = Engine::new();
    for text in [
        "",
        "plain",
        "lonely { brace } pair",
        "{not{{a marker because } closes early",
    ] {
        assert_eq!(engine.process_text(text), text);
    }
}

#[test]
fn test_reprocessing_unresolvable_text_is_idempotent() {
    init_logs();
    let engine = Engine::new();
    let text = "a {{nope}} b {{also:no,pe}} c";
    let once = engine.process_text(text);
    assert_eq!(once, text);
    assert_eq!(engine.process_text(&once), once);
}

#[test]
fn test_custom_data_shadows_builtin_name() {
    init_logs();
    let engine = Engine::new();
    let mut data = CustomData::new();
    data.insert("current_year", "A");
    assert_eq!(engine.process("{{current_year}}", &data), "A");
}

#[test]
fn test_custom_data_shadows_later_registration_too() {
    init_logs();
    let mut engine = Engine::new();
    engine.register_marker("x", |_: &[String]| Ok("from registry".to_string()));
    let mut data = CustomData::new();
    data.insert("x", "A");
    assert_eq!(engine.process("{{x}}", &data), "A");
    // Without the shadowing data, the registered marker answers.
    assert_eq!(engine.process_text("{{x}}"), "from registry");
}

#[test]
fn test_mixed_passes_in_one_text() {
    init_logs();
    let engine = Engine::new();
    let mut data = CustomData::new();
    data.insert("user", "ada");
    let output = engine.process("{{capitalize:welcome}} {{user}}: {{add:1,2}}", &data);
    assert_eq!(output, "Welcome ada: 3");
}

#[test]
fn test_independent_engines_do_not_share_registrations() {
    init_logs();
    let mut first = Engine::new();
    first.register_marker("only_here", |_: &[String]| Ok("yes".to_string()));
    let second = Engine::new();
    assert_eq!(first.process_text("{{only_here}}"), "yes");
    assert_eq!(second.process_text("{{only_here}}"), "{{only_here}}");
}

#[test]
fn test_failure_reported_not_raised() {
    init_logs();
    let mut engine = Engine::new();
    engine.register_marker("flaky", |_: &[String]| {
        Err(MarkerError::invocation("flaky", "backend unavailable"))
    });
    // The failing occurrence stays verbatim; everything around it resolves.
    let output = engine.process_text("[{{flaky}}] [{{lower:KEEP GOING}}]");
    assert_eq!(output, "[{{flaky}}] [keep going]");
}
