//! Environment overrides for layer configuration.
//!
//! Kept in its own test binary with a single test so the process environment
//! is not shared with other tests.

use tilemap_shapes::engine::{ConfigError, LayerConfig};

#[test]
fn test_env_overrides() {
    std::env::set_var("TILEMAP_WINDOW_WIDTH", "6");
    std::env::set_var("TILEMAP_WINDOW_HEIGHT", "3");
    std::env::set_var("TILEMAP_WINDOW_DISABLED", "true");
    std::env::set_var("TILEMAP_MAX_SHAPES", "12");

    let config = LayerConfig::from_env().unwrap();
    assert_eq!(config.window.half_width, 6);
    assert_eq!(config.window.half_height, 3);
    assert!(!config.window.enabled);
    assert_eq!(config.max_shapes, 12);

    // Overrides also apply on top of file settings
    let mut config = LayerConfig::from_json_str(r#"{"name":"ground","max_shapes":99}"#).unwrap();
    config.apply_env();
    assert_eq!(config.name, "ground");
    assert_eq!(config.max_shapes, 12);

    // Unparseable values are ignored
    std::env::set_var("TILEMAP_MAX_SHAPES", "lots");
    assert_eq!(LayerConfig::from_env().unwrap().max_shapes, 256);

    // Parseable but invalid values are rejected by validation
    std::env::set_var("TILEMAP_WINDOW_WIDTH", "500");
    assert!(matches!(
        LayerConfig::from_env(),
        Err(ConfigError::ExtentOutOfRange { axis: "half_width", value: 500 })
    ));

    for name in [
        "TILEMAP_WINDOW_WIDTH",
        "TILEMAP_WINDOW_HEIGHT",
        "TILEMAP_WINDOW_DISABLED",
        "TILEMAP_MAX_SHAPES",
    ] {
        std::env::remove_var(name);
    }
    assert_eq!(LayerConfig::from_env().unwrap(), LayerConfig::default());
}
