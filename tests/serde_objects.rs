#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use sightline::{Rect, RootMargin, Thresholds, WatcherOptions};

#[allow(dead_code)]
fn needs_serde<S: Serialize + Deserialize<'static>>() {}

#[test]
fn options_serde() {
    needs_serde::<RootMargin>();
    needs_serde::<Thresholds>();
    needs_serde::<WatcherOptions<String>>();
}

#[test]
fn geometry_serde() {
    needs_serde::<Rect>();
}

#[test]
fn options_from_json() {
    let options: WatcherOptions<String> = serde_json::from_str(
        r#"{ "root": "main", "root_margin": "0px 0px 0px 0px", "thresholds": [0.5] }"#,
    )
    .unwrap();

    assert_eq!(options.root.as_deref(), Some("main"));
    assert_eq!(options.root_margin, RootMargin::default());
    assert_eq!(options.thresholds.as_slice(), &[0.5]);

    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(json["root_margin"], "0px 0px 0px 0px");
}

#[test]
fn invalid_options_are_rejected() {
    assert!(serde_json::from_str::<WatcherOptions<String>>(r#"{ "root_margin": "1em" }"#).is_err());
    assert!(serde_json::from_str::<WatcherOptions<String>>(r#"{ "thresholds": [-1.0] }"#).is_err());
}
