use crate::profile::HostProfile;

/// A published host profile with its expected rank and index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCase {
    pub hosts: HostProfile,
    pub rank: i64,
    pub index: f64,
}

const fn case(hosts: (i64, i64, i64, i64, i64), rank: i64, index: f64) -> ReferenceCase {
    ReferenceCase {
        hosts: HostProfile::new(hosts.0, hosts.1, hosts.2, hosts.3, hosts.4),
        rank,
        index,
    }
}

pub const REFERENCE_CASES: &[ReferenceCase] = &[
    // Table 1: one profile per decade of rank
    case((1, 1, 1, 1, 1), 1, 0.0),
    case((10, 1, 1, 1, 1), 10, 1.0),
    case((100, 1, 1, 1, 1), 100, 2.0),
    case((1000, 1, 1, 1, 1), 1000, 3.0),
    case((55, 11, 1, 1, 1), 10_000, 4.0),
    case((565, 106, 1, 1, 1), 100_000, 5.0),
    case((455, 297, 3, 1, 1), 1_000_000, 6.0),
    case((877, 283, 28, 1, 1), 10_000_000, 7.0),
    case((778, 114, 97, 1, 1), 31_622_777, 7.5),
    case((944, 41, 28, 3, 1), 100_000_000, 8.0),
    case((906, 96, 20, 8, 1), 316_227_766, 8.5),
    case((325, 171, 41, 25, 1), 1_000_000_000, 9.0),
    case((633, 178, 122, 18, 2), 3_162_277_660, 9.5),
    case((573, 120, 38, 16, 5), 10_000_000_000, 10.0),
    case((1000, 500, 150, 75, 5), 11_795_988_501, 10.071_734_34),
    // Table 2: Allocreadiidae
    case((39, 28, 12, 9, 1), 355_973_905, 8.5514),
    case((100, 41, 20, 15, 2), 3_011_437_755, 9.4787),
    // Table 2: Hemiuridae
    case((4, 4, 4, 3, 1), 90_953_349, 7.9588),
    case((20, 16, 11, 8, 1), 312_908_085, 8.4954),
    case((50, 28, 16, 10, 2), 2_803_855_722, 9.4477),
    case((5, 4, 4, 2, 1), 45_665_799, 7.6595),
    case((7, 7, 4, 1, 1), 1_125_740, 6.0514),
    case((4, 4, 3, 1, 1), 750_499, 5.8753),
    case((29, 24, 13, 6, 1), 227_158_274, 8.3563),
    case((4, 3, 2, 2, 1), 45_664_801, 7.6595),
    case((2, 2, 2, 2, 1), 45_663_801, 7.6595),
    case((20, 15, 8, 6, 2), 2_629_434_956, 9.4198),
];
