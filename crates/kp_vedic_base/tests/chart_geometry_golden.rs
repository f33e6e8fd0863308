//! Golden values for ayanamsa, angles and cusps.

use kp_time::instant_to_julian_day;
use kp_vedic_base::{
    AyanamshaMode, AyanamshaSettings, VedicError, arc_forward, ascendant_deg, ayanamsha,
    chart_angles, house_of, house_spans, midheaven_deg, placidus_cusps, to_sidereal,
};

#[test]
fn ayanamsa_at_1900() {
    let jd = instant_to_julian_day(1900, 1, 1, 0, 0, 0.0, 0.0);
    let new = ayanamsha(jd, AyanamshaMode::New, None).unwrap();
    let old = ayanamsha(jd, AyanamshaMode::Old, None).unwrap();
    assert!((new.value_deg - 22.37103).abs() < 1e-5, "new {}", new.value_deg);
    assert!((old.value_deg - 22.36667).abs() < 1e-5, "old {}", old.value_deg);
    assert_eq!(new.label, "KP New (Balachandran)");
    assert_eq!(old.label, "KP Old (KSK)");
}

#[test]
fn ayanamsa_grows_about_50_arcsec_per_year() {
    let jd1 = instant_to_julian_day(2000, 1, 1, 0, 0, 0.0, 0.0);
    let jd2 = instant_to_julian_day(2001, 1, 1, 0, 0, 0.0, 0.0);
    let a1 = ayanamsha(jd1, AyanamshaMode::New, None).unwrap().value_deg;
    let a2 = ayanamsha(jd2, AyanamshaMode::New, None).unwrap().value_deg;
    let arcsec = (a2 - a1) * 3600.0;
    assert!((arcsec - 50.26).abs() < 0.05, "{arcsec}");
}

#[test]
fn manual_mode_needs_value() {
    assert!(matches!(
        ayanamsha(2_451_545.0, AyanamshaMode::Manual, None),
        Err(VedicError::InvalidInput(_))
    ));
    let s = AyanamshaSettings::new(AyanamshaMode::Manual, Some(23.5));
    assert_eq!(s.evaluate(2_451_545.0).unwrap().value_deg, 23.5);
}

#[test]
fn cusps_have_angles_and_opposites() {
    let jd = instant_to_julian_day(2024, 3, 15, 10, 30, 0.0, 5.5);
    let (lat, lon) = (6.9271, 79.8612);
    let cusps = placidus_cusps(jd, lat, lon).unwrap();
    let angles = chart_angles(jd, lat, lon).unwrap();
    assert!((cusps[0] - ascendant_deg(jd, lat, lon).unwrap()).abs() < 1e-12);
    assert!((cusps[9] - midheaven_deg(jd, lon)).abs() < 1e-12);
    assert!((cusps[0] - angles.ascendant_deg).abs() < 1e-12);
    for i in 0..6 {
        assert!((arc_forward(cusps[i], cusps[i + 6]) - 180.0).abs() < 1e-9);
    }
    let total: f64 = (0..12).map(|i| arc_forward(cusps[i], cusps[(i + 1) % 12])).sum();
    assert!((total - 360.0).abs() < 1e-9);
}

#[test]
fn every_longitude_has_one_house() {
    let jd = instant_to_julian_day(1990, 7, 4, 6, 0, 0.0, 0.0);
    let cusps = to_sidereal(&placidus_cusps(jd, 51.5, -0.12).unwrap(), 23.7);
    let spans = house_spans(&cusps);
    for step in 0..720 {
        let lon = step as f64 * 0.5;
        let owners = spans.iter().filter(|s| s.contains(lon)).count();
        assert_eq!(owners, 1, "longitude {lon}");
        assert!((1..=12).contains(&house_of(lon, &spans)));
    }
    assert_eq!(house_of(cusps[0], &spans), 1);
}

#[test]
fn poles_are_degenerate() {
    assert!(matches!(
        ascendant_deg(2_451_545.0, -90.0, 0.0),
        Err(VedicError::ComputationDegenerate(_))
    ));
    assert!(matches!(
        ascendant_deg(2_451_545.0, 91.0, 0.0),
        Err(VedicError::InvalidInput(_))
    ));
}
