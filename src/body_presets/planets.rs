//! This module contains presets for the planets of the Solar System.
//!
//! Each planet orbits [the Sun][super::stars::the_sun].

use std::sync::Arc;

use super::{stars::the_sun, AU};
use crate::{Body, MeanElements};

/// Standish's table row: for each of a (AU), e, I, L, ϖ and Ω (degrees), the
/// J2000 value followed by its rate per century.
type ElementsRow = [f64; 12];

fn planet(name: &str, mu: f64, radius: f64, row: ElementsRow) -> Body {
    let [a, a_rate, e, e_rate, i, i_rate, l, l_rate, varpi, varpi_rate, node, node_rate] = row;

    Body::new(name, mu, radius, Some(Arc::new(the_sun()))).with_mean_elements(MeanElements {
        semi_major_axis: a * AU,
        semi_major_axis_rate: a_rate * AU,
        eccentricity: e,
        eccentricity_rate: e_rate,
        inclination_deg: i,
        inclination_rate_deg: i_rate,
        mean_longitude_deg: l,
        mean_longitude_rate_deg: l_rate,
        long_periapsis_deg: varpi,
        long_periapsis_rate_deg: varpi_rate,
        long_asc_node_deg: node,
        long_asc_node_rate_deg: node_rate,
    })
}

/// Returns Mercury.
pub fn mercury() -> Body {
    planet(
        "Mercury",
        22_031.868_551,
        2_439.4,
        [
            0.387_099_27, 0.000_000_37,
            0.205_635_93, 0.000_019_06,
            7.004_979_02, -0.005_947_49,
            252.250_323_50, 149_472.674_111_75,
            77.457_796_28, 0.160_476_89,
            48.330_765_93, -0.125_340_81,
        ],
    )
}

/// Returns Venus.
pub fn venus() -> Body {
    planet(
        "Venus",
        324_858.592,
        6_051.8,
        [
            0.723_335_66, 0.000_003_90,
            0.006_776_72, -0.000_041_07,
            3.394_676_05, -0.000_788_90,
            181.979_099_50, 58_517.815_387_29,
            131.602_467_18, 0.002_683_29,
            76.679_842_55, -0.277_694_18,
        ],
    )
}

/// Returns the Earth.
///
/// The mean elements are those of the Earth-Moon barycenter.
pub fn earth() -> Body {
    planet(
        "Earth",
        398_600.435_436,
        6_378.1366,
        [
            1.000_002_61, 0.000_005_62,
            0.016_711_23, -0.000_043_92,
            -0.000_015_31, -0.012_946_68,
            100.464_571_66, 35_999.372_449_81,
            102.937_681_93, 0.323_273_64,
            0.0, 0.0,
        ],
    )
}

/// Returns Mars.
pub fn mars() -> Body {
    planet(
        "Mars",
        42_828.375_214,
        3_389.5,
        [
            1.523_710_34, 0.000_018_47,
            0.093_394_10, 0.000_078_82,
            1.849_691_42, -0.008_131_31,
            -4.553_432_05, 19_140.302_684_99,
            -23.943_629_59, 0.444_410_88,
            49.559_538_91, -0.292_573_43,
        ],
    )
}

/// Returns Jupiter.
pub fn jupiter() -> Body {
    planet(
        "Jupiter",
        126_712_764.1,
        69_911.0,
        [
            5.202_887_00, -0.000_116_07,
            0.048_386_24, -0.000_132_53,
            1.304_396_95, -0.001_837_14,
            34.396_440_51, 3_034.746_127_75,
            14.728_479_83, 0.212_526_68,
            100.473_909_09, 0.204_691_06,
        ],
    )
}

/// Returns Saturn.
pub fn saturn() -> Body {
    planet(
        "Saturn",
        37_940_584.841_8,
        58_232.0,
        [
            9.536_675_94, -0.001_250_60,
            0.053_861_79, -0.000_509_91,
            2.485_991_87, 0.001_936_09,
            49.954_244_23, 1_222.493_622_01,
            92.598_878_31, -0.418_972_16,
            113.662_424_48, -0.288_677_94,
        ],
    )
}

/// Returns Uranus.
pub fn uranus() -> Body {
    planet(
        "Uranus",
        5_794_556.4,
        25_362.0,
        [
            19.189_164_64, -0.001_961_76,
            0.047_257_44, -0.000_043_97,
            0.772_637_83, -0.002_429_39,
            313.238_104_51, 428.482_027_85,
            170.954_276_30, 0.408_052_81,
            74.016_925_03, 0.042_405_89,
        ],
    )
}

/// Returns Neptune.
pub fn neptune() -> Body {
    planet(
        "Neptune",
        6_836_527.100_58,
        24_622.0,
        [
            30.069_922_76, 0.000_262_91,
            0.008_590_48, 0.000_051_05,
            1.770_043_47, 0.000_353_72,
            -55.120_029_69, 218.459_453_25,
            44.964_762_27, -0.322_414_64,
            131.784_225_74, -0.005_086_64,
        ],
    )
}
