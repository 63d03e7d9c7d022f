#![cfg(test)]

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use std::sync::Arc;

use glam::DVec3;

use crate::{
    body_presets, get_mean_elements,
    solvers::{
        eccentric_anomaly_elliptic, eccentric_anomaly_hyperbolic, parabolic_anomaly,
        true_anomaly_elliptic,
    },
    time_range, Color, Cylindrical, Ephemeris, Epoch, MeanElementsEphemeris, Orbit, Plane, PlotError,
    PlotOrbit, Spherical, ToCartesian,
};

const RANDOM_ORBITS: usize = 256;

mod recording;

use assertions::*;
use seeders::*;

/// Routes `tracing` output through the test harness. Filter with `RUST_LOG`.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn kepler_elliptic_residual() {
    for _ in 0..RANDOM_ORBITS {
        let e = rand::random_range(0.0..0.99);
        let mean_anomaly = rand::random_range(-4.0 * TAU..4.0 * TAU);

        let eccentric_anomaly = eccentric_anomaly_elliptic(mean_anomaly, e);
        let residual = eccentric_anomaly - e * eccentric_anomaly.sin() - mean_anomaly;

        assert_almost_eq(residual, 0.0, &format!("Kepler residual for M={mean_anomaly}, e={e}"));
    }
}

#[test]
fn kepler_hyperbolic_residual() {
    for _ in 0..RANDOM_ORBITS {
        let e = rand::random_range(1.001..10.0);
        let mean_anomaly = rand::random_range(-50.0..50.0);

        let h = eccentric_anomaly_hyperbolic(mean_anomaly, e);
        let residual = e * h.sinh() - h - mean_anomaly;

        assert_almost_eq(residual, 0.0, &format!("hyperbolic residual for M={mean_anomaly}, e={e}"));
    }
}

#[test]
fn barker_residual() {
    for mean_anomaly in [-20.0, -1.0, -0.1, 0.0, 0.3, 2.0, 15.0] {
        let d: f64 = parabolic_anomaly(mean_anomaly);
        assert_almost_eq(d + d.powi(3) / 3.0, mean_anomaly, &format!("Barker for M={mean_anomaly}"));
    }
}

#[test]
fn circular_true_anomaly_is_eccentric_anomaly() {
    for angle in [-PI, -1.0, 0.0, 0.5, FRAC_PI_2, 3.0] {
        assert_almost_eq(true_anomaly_elliptic(angle, 0.0), angle, "circular true anomaly");
    }
}

#[test]
fn circular_orbit_samples() {
    let orbit = Orbit::circular(earthlike(), 7_000.0, 0.0, Epoch::J2000, Plane::EarthEquator);
    let points = orbit.sample(5);

    assert_eq!(points.len(), 5);

    let expected = [
        DVec3::new(7_000.0, 0.0, 0.0),
        DVec3::new(0.0, 7_000.0, 0.0),
        DVec3::new(-7_000.0, 0.0, 0.0),
        DVec3::new(0.0, -7_000.0, 0.0),
        DVec3::new(7_000.0, 0.0, 0.0),
    ];
    for (i, (&point, &expected)) in points.iter().zip(expected.iter()).enumerate() {
        assert_almost_eq_vec3(point, expected, &format!("circular sample {i}"));
    }
}

#[test]
fn closed_orbit_samples_start_at_position() {
    for _ in 0..RANDOM_ORBITS {
        let orbit = random_elliptic(earthlike());
        let points = orbit.sample(64);

        assert_eq!(points.len(), 64);
        assert_almost_eq_vec3(points[0] / 1e4, orbit.position() / 1e4, "first sample");
        assert_almost_eq_vec3(points[63] / 1e4, points[0] / 1e4, "closed path");

        let apoapsis = orbit.semi_major_axis() * (1.0 + orbit.eccentricity());
        for point in points {
            assert!(point.length() >= orbit.periapsis() * (1.0 - 1e-9));
            assert!(point.length() <= apoapsis * (1.0 + 1e-9));
        }
    }
}

#[test]
fn open_orbit_samples_stay_near_attractor() {
    for _ in 0..RANDOM_ORBITS {
        let orbit = random_hyperbolic(earthlike());
        let points = orbit.sample(32);

        assert_eq!(points.len(), 32);
        for point in &points {
            assert!(point.length() >= orbit.periapsis() * (1.0 - 1e-9));
            assert!(point.length() <= 3.0 * orbit.periapsis() * (1.0 + 1e-9));
        }
        assert_almost_eq_relative(
            points[0].length(),
            3.0 * orbit.periapsis(),
            "open path starts three periapses out",
        );
    }
}

#[test]
fn parabolic_orbit() {
    let orbit = Orbit::new(
        1.0,
        10_000.0,
        0.2,
        0.0,
        0.0,
        0.0,
        earthlike(),
        Epoch::J2000,
        Plane::EarthEquator,
    );

    assert!(orbit.period().is_infinite());
    assert_almost_eq_relative(orbit.position().length(), 10_000.0, "parabola at periapsis");

    let points = orbit.sample(9);
    assert_almost_eq_relative(points[4].length(), 10_000.0, "middle sample at periapsis");
    for point in points {
        assert!(point.is_finite());
        assert!(point.length() <= 30_000.0 * (1.0 + 1e-9));
    }
}

#[test]
fn propagating_one_period_returns_to_start() {
    for _ in 0..RANDOM_ORBITS {
        let orbit = random_elliptic(earthlike());
        let later = orbit.propagate(orbit.period());

        assert_almost_eq_relative(
            later.epoch() - orbit.epoch(),
            orbit.period(),
            "propagated epoch",
        );
        assert_almost_eq_vec3(
            later.position() / 1e4,
            orbit.position() / 1e4,
            "position after one period",
        );
    }
}

#[test]
fn change_plane_round_trip() {
    for _ in 0..RANDOM_ORBITS {
        let orbit = random_elliptic(earthlike());
        let ecliptic = orbit.change_plane(Plane::EarthEcliptic);

        assert_eq!(ecliptic.plane(), Plane::EarthEcliptic);
        assert_almost_eq_relative(
            ecliptic.position().length(),
            orbit.position().length(),
            "rotation keeps distances",
        );
        assert_orthonormal(ecliptic.pqw(), "rotated perifocal basis");

        let back = ecliptic.change_plane(Plane::EarthEquator);
        assert_almost_eq_vec3(back.position() / 1e4, orbit.position() / 1e4, "round trip");
    }
}

#[test]
fn same_plane_is_identity() {
    let orbit = random_elliptic(earthlike());
    assert_eq!(orbit.change_plane(Plane::EarthEquator), orbit);
}

#[test]
fn ecliptic_pole_tilt() {
    let pole = Plane::EarthEcliptic.rotation_to(Plane::EarthEquator) * DVec3::Z;
    assert_almost_eq(pole.angle_between(DVec3::Z), crate::J2000_OBLIQUITY, "obliquity");
    assert_almost_eq(crate::J2000_OBLIQUITY.to_degrees(), 23.439_291_1, "obliquity in degrees");
}

#[test]
fn epoch_formatting() {
    assert_eq!(Epoch::J2000.to_string(), "TDB 2000-01-01 12:00");
    assert_eq!(
        Epoch::from_calendar(2024, 2, 29, 23, 59, 0.0).to_string(),
        "TDB 2024-02-29 23:59"
    );
    assert_eq!(
        Epoch::from_calendar(2024, 2, 29, 23, 59, 59.9).to_string(),
        "TDB 2024-03-01 00:00"
    );
    assert_eq!(
        Epoch::from_calendar(1969, 7, 20, 20, 17, 0.0).to_string(),
        "TDB 1969-07-20 20:17"
    );
}

#[test]
fn epoch_julian_dates() {
    assert_eq!(Epoch::J2000.julian_date(), crate::time::J2000_JD);
    assert_eq!(Epoch::from_calendar(2000, 1, 1, 12, 0, 0.0), Epoch::J2000);
    assert_almost_eq(
        Epoch::from_julian_date(2_451_545.0 + 36_525.0).julian_centuries(),
        1.0,
        "one century",
    );
    assert_eq!(Epoch::J2000 + 60.0 - Epoch::J2000, 60.0);
}

#[test]
fn time_range_endpoints() {
    let start = Epoch::from_calendar(2020, 1, 1, 0, 0, 0.0);
    let end = start + 365.256_363 * 86_400.0;

    let epochs = time_range(start, end, 150);
    assert_eq!(epochs.len(), 150);
    assert_eq!(epochs[0], start);
    assert_eq!(epochs[149], end);
    assert!(epochs.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(time_range(start, end, 0).is_empty());
    assert_eq!(time_range(start, end, 1), vec![start]);
    assert_eq!(time_range(start, end, 2), vec![start, end]);
}

#[test]
fn color_parsing() {
    assert_eq!("#2a7bde".parse::<Color>(), Ok(Color::rgb(0x2a, 0x7b, 0xde)));
    assert_eq!(
        "#2a7bde80".parse::<Color>(),
        Ok(Color::rgb(0x2a, 0x7b, 0xde).with_alpha(0x80))
    );
    assert_eq!(Color::rgb(1, 2, 3).with_alpha(0).to_string(), "#01020300");

    for invalid in ["2a7bde", "#2a7bd", "#zzzzzz", "#2a7bde8", "#ñ7bde"] {
        assert_eq!(
            invalid.parse::<Color>(),
            Err(PlotError::InvalidColor(invalid.to_string()))
        );
    }
}

#[test]
fn color_trails() {
    let color = Color::rgb(10, 20, 30);
    assert_eq!(color.trail(false), vec![color]);
    assert_eq!(color.trail(true), vec![color, color.with_alpha(0)]);
    assert_eq!(color.lerp(color.with_alpha(0), 0.5).a, 128);
}

#[test]
fn representations() {
    let spherical = Spherical {
        distance: 2.0,
        lat: FRAC_PI_2,
        lon: 1.0,
    };
    assert_almost_eq_vec3(spherical.to_cartesian(), DVec3::new(0.0, 0.0, 2.0), "pole");

    let spherical = Spherical {
        distance: 3.0,
        lat: 0.0,
        lon: FRAC_PI_2,
    };
    assert_almost_eq_vec3(spherical.to_cartesian(), DVec3::new(0.0, 3.0, 0.0), "equator");

    let cylindrical = Cylindrical {
        rho: 4.0,
        phi: PI,
        z: -1.0,
    };
    assert_almost_eq_vec3(cylindrical.to_cartesian(), DVec3::new(-4.0, 0.0, -1.0), "cylinder");

    assert_eq!([1.0, 2.0, 3.0].to_cartesian(), DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn planet_distances() {
    let epoch = Epoch::from_calendar(2021, 6, 1, 0, 0, 0.0);
    let au = body_presets::AU;

    for (planet, a) in [
        (body_presets::planets::mercury(), 0.387),
        (body_presets::planets::earth(), 1.0),
        (body_presets::planets::jupiter(), 5.20),
        (body_presets::planets::neptune(), 30.07),
    ] {
        let orbit = get_mean_elements(&planet, epoch).unwrap();
        let distance = orbit.position().length() / au;
        let e = orbit.eccentricity();

        assert_eq!(orbit.attractor().name, "Sun");
        assert_eq!(orbit.plane(), Plane::EarthEcliptic);
        assert!(
            distance > a * (1.0 - e) * 0.99 && distance < a * (1.0 + e) * 1.01,
            "{} at {distance} AU",
            planet.name
        );
    }
}

#[test]
fn earth_stays_near_the_ecliptic() {
    let earth = body_presets::planets::earth();
    let epochs = time_range(Epoch::J2000, Epoch::J2000 + 365.0 * 86_400.0, 12);

    let ecliptic = MeanElementsEphemeris
        .sample(&earth, &epochs, Plane::EarthEcliptic)
        .unwrap();
    let equator = MeanElementsEphemeris
        .sample(&earth, &epochs, Plane::EarthEquator)
        .unwrap();

    for (ecliptic, equator) in ecliptic.iter().zip(&equator) {
        assert!(ecliptic.z.abs() / ecliptic.length() < 1e-3);
        assert_almost_eq_relative(equator.length(), ecliptic.length(), "rotated distance");
    }
    // Around the solstices the equatorial frame sees the tilt.
    assert!(equator.iter().any(|point| point.z.abs() / point.length() > 0.3));
}

#[test]
fn moon_distance() {
    let moon = body_presets::moons::the_moon();
    let orbit = get_mean_elements(&moon, Epoch::from_calendar(2022, 3, 14, 0, 0, 0.0)).unwrap();
    let distance = orbit.position().length();

    assert_eq!(orbit.attractor().name, "Earth");
    assert!((363_000.0..406_000.0).contains(&distance), "{distance}");
    assert!((orbit.period() / 86_400.0 - 27.4).abs() < 0.5);
}

#[test]
fn mean_elements_errors() {
    let sun = body_presets::stars::the_sun();
    assert_eq!(
        get_mean_elements(&sun, Epoch::J2000),
        Err(PlotError::NoParent { body: "Sun".into() })
    );

    let rogue = crate::Body::new("Rogue", 1.0, 1.0, Some(Arc::new(sun)));
    assert_eq!(
        get_mean_elements(&rogue, Epoch::J2000),
        Err(PlotError::NoMeanElements {
            body: "Rogue".into()
        })
    );
}

#[test]
fn body_colors() {
    assert_eq!(
        body_presets::planets::earth().color(),
        Some(Color::rgb(0x2a, 0x7b, 0xde))
    );
    assert_eq!(marslike().color(), Some(Color::rgb(0xcc, 0x65, 0x3f)));
    assert_eq!(crate::Body::new("Vulcan", 1.0, 1.0, None).color(), None);
}
