// Host-side tests for environment detection and slider configuration.

use folio_web::core::{
    Axis, ConfigError, DeviceClass, Environment, SliderConfig, Viewport, OVERRIDE_KEYS,
};
use glam::Vec2;

#[test]
fn device_detection() {
    let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";
    let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile";
    assert_eq!(DeviceClass::detect(desktop, false), DeviceClass::Desktop);
    assert_eq!(DeviceClass::detect(iphone, false), DeviceClass::Mobile);
    assert_eq!(DeviceClass::detect(android, false), DeviceClass::Mobile);
    assert_eq!(DeviceClass::detect("Windows Phone 10.0", false), DeviceClass::Mobile);
    // a coarse pointer wins regardless of user agent
    assert_eq!(DeviceClass::detect(desktop, true), DeviceClass::Mobile);
    assert!(DeviceClass::Mobile.is_mobile());
}

#[test]
fn viewport_clamps_pixel_ratio() {
    assert_eq!(Viewport::new(800.0, 600.0, 3.0).pixel_ratio, 2.0);
    assert_eq!(Viewport::new(800.0, 600.0, 0.5).pixel_ratio, 1.0);
    assert_eq!(Viewport::new(800.0, 600.0, f32::NAN).pixel_ratio, 1.0);
    assert_eq!(Viewport::new(800.0, 600.0, 1.5).physical_size(), (1200, 900));
    assert_eq!(Viewport::new(0.0, 0.0, 1.0).physical_size(), (1, 1));
    assert_eq!(Viewport::new(800.0, 600.0, 1.0).center(), Vec2::new(400.0, 300.0));
}

#[test]
fn environment_replaces_viewport_keeps_device() {
    let env = Environment::new(Viewport::new(1920.0, 1080.0, 1.0), DeviceClass::Mobile);
    let next = env.with_viewport(Viewport::new(390.0, 844.0, 3.0));
    assert_eq!(next.device, DeviceClass::Mobile);
    assert_eq!(next.viewport.width, 390.0);
    // the original snapshot is untouched
    assert_eq!(env.viewport.width, 1920.0);
}

#[test]
fn axis_helpers() {
    let v = Vec2::new(3.0, -7.0);
    assert_eq!(Axis::Horizontal.along(v), 3.0);
    assert_eq!(Axis::Horizontal.across(v), -7.0);
    assert_eq!(Axis::Vertical.along(v), -7.0);
    assert_eq!(Axis::Vertical.compose(1.0, 2.0), Vec2::new(2.0, 1.0));
    assert_eq!("y".parse::<Axis>(), Ok(Axis::Vertical));
    assert_eq!(" Horizontal ".parse::<Axis>(), Ok(Axis::Horizontal));
    assert!("z".parse::<Axis>().is_err());
}

#[test]
fn presets_differ_only_in_values() {
    let d = SliderConfig::for_device(DeviceClass::Desktop);
    let m = SliderConfig::for_device(DeviceClass::Mobile);
    assert!(d.validate().is_ok());
    assert!(m.validate().is_ok());
    assert_eq!(d.ease, 0.06);
    assert_eq!(m.ease, 0.08);
    assert!(m.tile_size_vw > d.tile_size_vw);
    assert_eq!(d.axis, m.axis);
    assert_eq!(SliderConfig::default(), d);
}

#[test]
fn tile_size_is_viewport_relative() {
    let mut c = SliderConfig::default();
    c.tile_size_vw = 15.625;
    assert_eq!(c.tile_size(&Viewport::new(1920.0, 1080.0, 1.0)), 300.0);
}

#[test]
fn overrides_apply_known_keys() {
    let mut c = SliderConfig::default();
    c.apply_override("ease", "0.1").unwrap();
    c.apply_override("axis", "vertical").unwrap();
    c.apply_override("tileSize", "25").unwrap();
    c.apply_override("wheelStep", "60").unwrap();
    c.apply_override("spacing", "0").unwrap();
    c.apply_override("speed", " 2 ").unwrap();
    assert_eq!(c.ease, 0.1);
    assert_eq!(c.axis, Axis::Vertical);
    assert_eq!(c.tile_size_vw, 25.0);
    assert_eq!(c.wheel_step, 60.0);
    assert_eq!(c.spacing, 0.0);
    assert_eq!(c.speed, 2.0);
    assert!(OVERRIDE_KEYS.contains(&"tileSize"));
}

#[test]
fn bad_overrides_leave_config_untouched() {
    let mut c = SliderConfig::default();
    let before = c.clone();
    assert_eq!(c.apply_override("ease", "1.5"), Err(ConfigError::EaseOutOfRange(1.5)));
    assert_eq!(
        c.apply_override("speed", "fast"),
        Err(ConfigError::InvalidValue {
            key: "speed".into(),
            value: "fast".into()
        })
    );
    assert_eq!(
        c.apply_override("speed", "-1"),
        Err(ConfigError::NotPositive {
            key: "speed",
            value: -1.0
        })
    );
    assert!(matches!(c.apply_override("colour", "red"), Err(ConfigError::UnknownKey(_))));
    assert!(c.apply_override("spacing", "inf").is_err());
    assert_eq!(c, before);
}
