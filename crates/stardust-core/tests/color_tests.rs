use stardust_core::*;

fn close(a: Rgb, b: Rgb) -> bool {
    (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
}

#[test]
fn parses_hex_forms_and_names() {
    assert_eq!("#ffff00".parse::<Rgb>().unwrap(), Rgb::new(1.0, 1.0, 0.0));
    assert_eq!("0x0000ff".parse::<Rgb>().unwrap(), Rgb::new(0.0, 0.0, 1.0));
    assert_eq!("#f00".parse::<Rgb>().unwrap(), Rgb::new(1.0, 0.0, 0.0));
    assert_eq!("Yellow".parse::<Rgb>().unwrap(), Rgb::from_hex(0xffff00));
    assert_eq!(" blue ".parse::<Rgb>().unwrap(), Rgb::from_hex(0x0000ff));
}

#[test]
fn rejects_bad_colors() {
    assert_eq!("".parse::<Rgb>(), Err(ColorParseError::Empty));
    assert!(matches!(
        "#12345".parse::<Rgb>(),
        Err(ColorParseError::InvalidHex(_))
    ));
    assert!(matches!(
        "#gggggg".parse::<Rgb>(),
        Err(ColorParseError::InvalidHex(_))
    ));
    assert!(matches!(
        "chartreuse-ish".parse::<Rgb>(),
        Err(ColorParseError::UnknownName(_))
    ));
}

#[test]
fn hex_survives_a_trip_through_rgb() {
    for hex in [0x000000, 0xffd500, 0x86cdff, 0x4e00ff] {
        assert_eq!(Rgb::from_hex(hex).to_hex(), hex);
    }
}

#[test]
fn lerp_hits_endpoints_and_clamps() {
    let a = Rgb::from_hex(0xffff00);
    let b = Rgb::from_hex(0x0000ff);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 2.0), b);
    assert_eq!(a.lerp(b, -1.0), a);
    assert!(close(a.lerp(b, 0.5), Rgb::new(0.5, 0.5, 0.5)));
}

#[test]
fn hsl_conversion_matches_known_colors() {
    let hsl = Rgb::from_hex(0xff0000).to_hsl();
    assert!(hsl.h.abs() < 1e-5);
    assert!((hsl.s - 1.0).abs() < 1e-5);
    assert!((hsl.l - 0.5).abs() < 1e-5);

    let blue = Rgb::from_hex(0x0000ff).to_hsl();
    assert!((blue.h - 2.0 / 3.0).abs() < 1e-5);

    let grey = Rgb::new(0.3, 0.3, 0.3).to_hsl();
    assert_eq!(grey.s, 0.0);
    assert!(close(Rgb::from_hsl(grey), Rgb::new(0.3, 0.3, 0.3)));
}

#[test]
fn shifting_hue_by_a_third_rotates_primaries() {
    let red = Rgb::from_hex(0xff0000);
    assert!(close(red.shift_hue(1.0 / 3.0), Rgb::from_hex(0x00ff00)));
    assert!(close(red.shift_hue(2.0 / 3.0), Rgb::from_hex(0x0000ff)));
    assert!(close(red.shift_hue(1.0), red));
}

#[test]
fn with_alpha_appends_the_alpha_channel() {
    assert_eq!(Rgb::new(0.1, 0.2, 0.3).with_alpha(0.5), [0.1, 0.2, 0.3, 0.5]);
}
