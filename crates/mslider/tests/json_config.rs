//! Loading slider groups from JSON through the facade.

use mslider::prelude::*;

#[test]
fn json_group_starts_spread_and_pending_render() {
    let mut group = mslider::group_from_json(
        r#"{
            "min": -50,
            "max": 50,
            "step": 5,
            "valueDiffMin": 10,
            "alwaysShowPin": true,
            "transDurationMs": 100,
            "values": [{ "value": 0, "color": "teal" }, { "value": 0 }]
        }"#,
    )
    .expect("valid json config");
    let mut view = RecordingView::new(100.0);

    assert_eq!(group.values(), vec![0.0, 10.0]);
    assert!(group.pin());
    assert_eq!(group.trans_duration(), mslider::Duration::from_millis(100));
    assert!(group.on_frame(&mut view));
    assert_eq!(view.colors[0], (0, "teal".to_owned()));
}

#[test]
fn invalid_json_and_invalid_config_are_distinguished() {
    assert!(matches!(
        mslider::group_from_json("{ not json"),
        Err(Error::Parse(_))
    ));
    assert!(matches!(
        mslider::group_from_json(r#"{ "min": 10, "max": 10, "values": [{ "value": 10 }] }"#),
        Err(Error::Config(ConfigError::EmptyRange { .. }))
    ));
    assert!(matches!(
        mslider::group_from_json(r#"{ "values": [] }"#),
        Err(Error::Config(ConfigError::NoKnobs))
    ));
}

#[test]
fn config_from_json_defaults_missing_fields() {
    let config = mslider::config_from_json("{}").expect("empty object is a config");
    assert_eq!(config, SliderConfig::default());
}
