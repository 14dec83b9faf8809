use crate::validation::{Config, DiagnosticKind, Severity, validate};
use crate::{Build, PullSpecContext, kw};

#[test]
fn clean_spec_has_no_diagnostics() {
    let spec = PullSpecContext::build(|p| {
        p.field(kw("name"));
        p.with(kw("friends"), |a| {
            a.limit(5);
        });
        p.join(kw("address"), |p| {
            p.field(kw("city"));
        });
    });

    let diag = validate(&spec, &Config::default());
    assert!(diag.is_empty());
}

#[test]
fn wildcard_with_siblings_is_a_warning() {
    let spec = PullSpecContext::build(|p| {
        p.all().field(kw("name"));
    });

    let diag = validate(&spec, &Config::default());
    assert_eq!(diag.len(), 1);
    assert!(diag.has_warnings());
    assert!(!diag.has_errors());

    let d = &diag.as_slice()[0];
    assert_eq!(d.kind, DiagnosticKind::WildcardWithSiblings);
    assert_eq!(d.severity, Severity::Warning);
    assert_eq!(d.key, None);
}

#[test]
fn lone_wildcard_is_fine() {
    let spec = PullSpecContext::build(|p| {
        p.all();
        p.join_all(kw("friends"));
    });

    // the outer `*` has a sibling; the joined `[*]` does not
    let diag = validate(&spec, &Config::default());
    assert_eq!(diag.len(), 1);
    assert!(diag.as_slice()[0].path.is_empty());
}

#[test]
fn duplicates_reported_once_per_key_in_first_seen_order() {
    let spec = PullSpecContext::build(|p| {
        p.field(kw("b"));
        p.field(kw("a"));
        p.join_all(kw("a"));
        p.field(kw("b"));
        p.field(kw("b"));
    });

    let diag = validate(&spec, &Config::default());
    let keys: Vec<_> = diag.iter().map(|d| d.key).collect();
    assert_eq!(keys, vec![Some(kw("b")), Some(kw("a"))]);
    assert!(diag.iter().all(|d| d.kind == DiagnosticKind::DuplicateKey));
}

#[test]
fn nested_findings_carry_join_path() {
    let spec = PullSpecContext::build(|p| {
        p.join(kw("address"), |p| {
            p.join(kw("country"), |_| {});
            p.with(kw("lines"), |a| {
                a.limit(0);
            });
        });
    });

    let diag = validate(&spec, &Config::default());
    insta::assert_snapshot!(diag.render(), @r"
    warning: join on `:country` pulls nothing in [:address]
    warning: `:lines` has `:limit 0` in [:address]
    ");
}

#[test]
fn strict_reports_errors() {
    let spec = PullSpecContext::build(|p| {
        p.field(kw("x")).field(kw("x"));
    });

    let diag = validate(&spec, &Config::new().strict(true));
    assert_eq!(diag.error_count(), 1);
    assert_eq!(diag.warning_count(), 0);
    assert_eq!(diag.render(), "error: `:x` is selected more than once");
}

#[test]
fn allowed_kinds_are_silenced() {
    let spec = PullSpecContext::build(|p| {
        p.all().field(kw("x")).field(kw("x"));
    });

    let config = Config::new()
        .strict(true)
        .allow(DiagnosticKind::DuplicateKey)
        .allow(DiagnosticKind::DuplicateKey);
    let diag = validate(&spec, &config);

    assert_eq!(diag.len(), 1);
    assert_eq!(
        diag.as_slice()[0].kind,
        DiagnosticKind::WildcardWithSiblings
    );
    assert_eq!(config.severity(DiagnosticKind::DuplicateKey), None);
    assert_eq!(
        config.severity(DiagnosticKind::EmptyJoin),
        Some(Severity::Error)
    );
}

#[test]
fn config_deserializes_with_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());

    let json = r#"{ "strict": true, "allowed": ["empty_join"] }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(
        config,
        Config::new().strict(true).allow(DiagnosticKind::EmptyJoin)
    );

    let unknown = serde_json::from_str::<Config>(r#"{ "pedantic": true }"#);
    assert!(unknown.is_err());
}
