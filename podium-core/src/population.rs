//! Country short-code to population lookups.
//!
//! A missing entry is a legitimate outcome, not an error; callers receive
//! `None` and must handle the absence explicitly.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Resolve a national population from a country short code.
///
/// Implementations must be thread-safe so lookups can be shared freely.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use podium_core::PopulationLookup;
///
/// let table = HashMap::from([("NOR".to_owned(), 5_519_594_u64)]);
/// assert_eq!(table.population("NOR"), Some(5_519_594));
/// assert_eq!(table.population("XYZ"), None);
/// ```
pub trait PopulationLookup: Send + Sync {
    /// Return the population recorded for `short_code`, if any.
    fn population(&self, short_code: &str) -> Option<u64>;
}

impl<S: BuildHasher + Send + Sync> PopulationLookup for HashMap<String, u64, S> {
    fn population(&self, short_code: &str) -> Option<u64> {
        self.get(short_code).copied()
    }
}

impl PopulationLookup for BTreeMap<String, u64> {
    fn population(&self, short_code: &str) -> Option<u64> {
        self.get(short_code).copied()
    }
}

impl<T: PopulationLookup + ?Sized> PopulationLookup for &T {
    fn population(&self, short_code: &str) -> Option<u64> {
        (**self).population(short_code)
    }
}

/// Lookup with no entries; every country is a miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPopulation;

impl PopulationLookup for NoPopulation {
    fn population(&self, _short_code: &str) -> Option<u64> {
        None
    }
}

/// Built-in population table keyed by IOC country code.
///
/// Figures are mid-2023 estimates for the national committees that
/// routinely appear in Summer and Winter Games medal tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPopulationTable;

impl StaticPopulationTable {
    /// Number of countries in the table.
    #[must_use]
    pub const fn len(self) -> usize {
        POPULATIONS.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        POPULATIONS.is_empty()
    }

    /// Iterate over `(code, population)` pairs in code order.
    pub fn iter(self) -> impl Iterator<Item = (&'static str, u64)> {
        POPULATIONS.iter().copied()
    }
}

impl PopulationLookup for StaticPopulationTable {
    fn population(&self, short_code: &str) -> Option<u64> {
        POPULATIONS
            .binary_search_by(|(code, _)| (*code).cmp(short_code))
            .ok()
            .and_then(|position| POPULATIONS.get(position))
            .map(|(_, population)| *population)
    }
}

// Sorted by code; lookups binary-search this slice.
const POPULATIONS: &[(&str, u64)] = &[
    ("AIN", 0),
    ("ALB", 2_745_972),
    ("ALG", 45_606_480),
    ("ARG", 45_773_884),
    ("ARM", 2_777_970),
    ("AUS", 26_638_544),
    ("AUT", 9_131_761),
    ("AZE", 10_412_651),
    ("BAH", 412_623),
    ("BEL", 11_822_592),
    ("BER", 64_069),
    ("BLR", 9_498_238),
    ("BOT", 2_675_352),
    ("BRA", 216_422_446),
    ("BUL", 6_687_717),
    ("BUR", 23_251_485),
    ("CAN", 40_097_761),
    ("CHI", 19_629_590),
    ("CHN", 1_410_710_000),
    ("CIV", 28_873_034),
    ("CMR", 28_647_293),
    ("COL", 52_085_168),
    ("CPV", 598_682),
    ("CRO", 3_855_641),
    ("CUB", 11_194_449),
    ("CYP", 1_260_138),
    ("CZE", 10_873_689),
    ("DEN", 5_946_952),
    ("DMA", 73_040),
    ("DOM", 11_332_972),
    ("ECU", 18_190_484),
    ("EGY", 112_716_598),
    ("ESP", 48_373_336),
    ("EST", 1_366_491),
    ("ETH", 126_527_060),
    ("FIJ", 936_375),
    ("FIN", 5_584_264),
    ("FRA", 68_170_228),
    ("GBR", 68_350_000),
    ("GEO", 3_760_365),
    ("GER", 84_482_267),
    ("GHA", 34_121_985),
    ("GRE", 10_361_295),
    ("GRN", 126_183),
    ("GUA", 18_092_026),
    ("HKG", 7_536_100),
    ("HUN", 9_589_872),
    ("INA", 277_534_122),
    ("IND", 1_428_627_663),
    ("IRI", 89_172_767),
    ("IRL", 5_262_382),
    ("ISR", 9_756_700),
    ("ITA", 58_761_146),
    ("JAM", 2_825_544),
    ("JOR", 11_337_052),
    ("JPN", 124_516_650),
    ("KAZ", 20_330_104),
    ("KEN", 55_100_586),
    ("KGZ", 7_100_000),
    ("KOR", 51_712_619),
    ("KOS", 1_756_374),
    ("KSA", 36_947_025),
    ("LAT", 1_883_162),
    ("LCA", 180_251),
    ("LTU", 2_871_897),
    ("MAR", 37_840_044),
    ("MAS", 34_308_525),
    ("MDA", 2_486_891),
    ("MEX", 128_455_567),
    ("MGL", 3_447_157),
    ("NED", 17_879_488),
    ("NOR", 5_519_594),
    ("NZL", 5_223_100),
    ("PAK", 240_485_658),
    ("PAN", 4_468_087),
    ("PER", 34_352_719),
    ("PHI", 117_337_368),
    ("POL", 36_685_849),
    ("POR", 10_525_347),
    ("PUR", 3_205_691),
    ("QAT", 2_716_391),
    ("ROU", 19_056_116),
    ("RSA", 60_414_495),
    ("SGP", 5_917_648),
    ("SLO", 2_119_675),
    ("SRB", 6_623_183),
    ("SUI", 8_849_852),
    ("SVK", 5_428_792),
    ("SWE", 10_536_632),
    ("THA", 71_801_279),
    ("TJK", 10_143_543),
    ("TPE", 23_923_276),
    ("TUN", 12_458_223),
    ("TUR", 85_326_000),
    ("UGA", 48_582_334),
    ("UKR", 37_000_000),
    ("USA", 334_914_895),
    ("UZB", 36_412_350),
    ("ZAM", 20_569_737),
];
