use serde_json::json;

use crate::{Build, Config, Error, Item, PullSpec, PullSpecContext, kw};

#[test]
fn depth_counts_join_levels() {
    assert_eq!(PullSpec::default().depth(), 0);
    assert_eq!(PullSpec::all().depth(), 1);

    let spec = PullSpecContext::build(|p| {
        p.field(kw("name"));
        p.join_all(kw("owner"));
        p.join(kw("address"), |p| {
            p.join(kw("country"), |p| {
                p.field(kw("code"));
            });
        });
    });
    assert_eq!(spec.depth(), 3);
}

#[test]
fn empty_join_counts_one_level() {
    let spec = PullSpecContext::build(|p| {
        p.join(kw("empty"), |_| {});
    });
    assert_eq!(spec.depth(), 1);
}

#[test]
fn item_key() {
    assert_eq!(Item::field(kw("a")).key(), Some(kw("a")));
    assert_eq!(Item::join(kw("b"), PullSpec::all()).key(), Some(kw("b")));
    assert_eq!(Item::All.key(), None);
}

#[test]
fn collects_from_iterator() {
    let items = ["a", "b"].map(|k| Item::field(kw(k)));
    let spec: PullSpec = items.into_iter().collect();
    assert_eq!(
        spec,
        PullSpec::from(vec![Item::field(kw("a")), Item::field(kw("b"))])
    );

    let keys: Vec<_> = spec.into_iter().filter_map(|item| item.key()).collect();
    assert_eq!(keys, vec![kw("a"), kw("b")]);
}

#[test]
fn finished_specs_are_independent_values() {
    let original = PullSpecContext::build(|p| {
        p.field(kw("name"));
    });
    let mut items = original.clone().into_items();
    items.push(Item::All);
    let extended = PullSpec::new(items);

    assert_eq!(original.len(), 1);
    assert_eq!(extended.len(), 2);
}

#[test]
fn serializes_for_engines() {
    let spec = PullSpecContext::build(|p| {
        p.field(kw("name"));
        p.with(kw("friends"), |a| {
            a.limit(5);
        });
        p.join_all(kw("address"));
    });

    let value = serde_json::to_value(&spec).unwrap();
    assert_eq!(
        value,
        json!([
            { "kind": "field", "key": ":name", "attributes": {} },
            { "kind": "field", "key": ":friends", "attributes": { "limit": 5 } },
            { "kind": "join", "key": ":address", "spec": [{ "kind": "all" }] },
        ])
    );
}

#[test]
fn check_is_lenient_by_default() {
    let spec = PullSpecContext::build(|p| {
        p.all().field(kw("name"));
    });
    assert!(spec.check(&Config::default()).is_ok());
}

#[test]
fn strict_check_rejects_lints() {
    let spec = PullSpecContext::build(|p| {
        p.all().field(kw("name"));
    });

    let err = spec.check(&Config::new().strict(true)).unwrap_err();
    let Error::InvalidPullSpec(diagnostics) = &err else {
        panic!("expected InvalidPullSpec, got {err:?}");
    };
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(err.to_string(), "pull spec check failed with 1 error");
}

#[test]
fn strict_check_counts_every_error() {
    let spec = PullSpecContext::build(|p| {
        p.all().field(kw("name")).field(kw("name"));
    });

    let err = spec.check(&Config::new().strict(true)).unwrap_err();
    assert_eq!(err.to_string(), "pull spec check failed with 2 errors");
}
