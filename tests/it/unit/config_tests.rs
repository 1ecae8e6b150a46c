//! Editor configuration tests.

use flowcanvas::config::EditorConfig;

#[test]
fn overlay_keeps_unset_fields_at_defaults() {
    let config = EditorConfig::from_json(r#"{"grid_size": 32.0}"#).unwrap();
    assert_eq!(config.grid_size, 32.0);
    assert_eq!(config.zoom_step, EditorConfig::default().zoom_step);
    assert!(config.show_grid);
}

#[test]
fn empty_overlay_equals_defaults() {
    let config = EditorConfig::from_json("{}").unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn non_positive_zoom_bounds_fall_back() {
    let config = EditorConfig::from_json(r#"{"zoom_min": -1.0, "zoom_max": 0.0}"#).unwrap();
    assert!(config.zoom_min > 0.0);
    assert!(config.zoom_max > config.zoom_min);
}

#[test]
fn negative_drag_threshold_is_normalized() {
    let config = EditorConfig::from_json(r#"{"drag_threshold": -5.0}"#).unwrap();
    assert_eq!(config.drag_threshold, 0.0);
}

#[test]
fn self_loop_policy_round_trips() {
    let config = EditorConfig::from_json(r#"{"allow_self_loops": false}"#).unwrap();
    assert!(!config.allow_self_loops);
    let json = serde_json::to_string(&config).unwrap();
    let back: EditorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
