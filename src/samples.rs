//! Synthetic record source: California neighborhoods with seeded data.
//!
//! Stands in for the census/school/transit integrations a real deployment
//! would have. Names and coordinates are real; every demographic and
//! component score is drawn from a seeded RNG, so the same seed always
//! produces the same record set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{county_from_name, NeighborhoodRecord};

/// Seed of the canonical demo data set.
pub const DEFAULT_SEED: u64 = 42;

const LOS_ANGELES: &[(&str, f64, f64)] = &[
    ("Hollywood", 34.0928, -118.3287),
    ("Beverly Hills", 34.0736, -118.4004),
    ("Santa Monica", 34.0195, -118.4912),
    ("Downtown LA", 34.0522, -118.2437),
    ("Venice", 33.9850, -118.4695),
    ("Silver Lake", 34.0870, -118.2704),
    ("Echo Park", 34.0780, -118.2607),
    ("Pasadena", 34.1478, -118.1445),
    ("West Hollywood", 34.0900, -118.3617),
    ("Koreatown", 34.0579, -118.3009),
    ("Los Feliz", 34.1071, -118.2828),
    ("Culver City", 34.0211, -118.3965),
    ("Manhattan Beach", 33.8847, -118.4109),
    ("Long Beach", 33.7701, -118.1937),
    ("Burbank", 34.1808, -118.3090),
    ("Glendale", 34.1425, -118.2551),
    ("Sherman Oaks", 34.1508, -118.4490),
    ("Studio City", 34.1486, -118.3965),
    ("Westwood", 34.0633, -118.4456),
    ("Brentwood", 34.0536, -118.4772),
];

const SAN_FRANCISCO: &[(&str, f64, f64)] = &[
    ("Mission District", 37.7599, -122.4148),
    ("SoMa", 37.7749, -122.4194),
    ("Castro", 37.7609, -122.4350),
    ("Pacific Heights", 37.7931, -122.4358),
    ("Marina District", 37.8024, -122.4381),
    ("Nob Hill", 37.7919, -122.4155),
    ("Chinatown", 37.7941, -122.4078),
    ("North Beach", 37.8006, -122.4104),
    ("Haight-Ashbury", 37.7692, -122.4481),
    ("Russian Hill", 37.8003, -122.4200),
    ("Richmond District", 37.7787, -122.4645),
    ("Sunset District", 37.7479, -122.4822),
    ("Potrero Hill", 37.7578, -122.3979),
    ("Bernal Heights", 37.7418, -122.4157),
    ("Glen Park", 37.7326, -122.4339),
];

const SAN_DIEGO: &[(&str, f64, f64)] = &[
    ("Gaslamp Quarter", 32.7115, -117.1597),
    ("La Jolla", 32.8328, -117.2713),
    ("Pacific Beach", 32.7967, -117.2357),
    ("Mission Bay", 32.7642, -117.2267),
    ("Hillcrest", 32.7486, -117.1664),
    ("North Park", 32.7411, -117.1297),
    ("Little Italy", 32.7209, -117.1698),
    ("Ocean Beach", 32.7475, -117.2489),
    ("Point Loma", 32.7341, -117.2407),
    ("Del Mar", 32.9595, -117.2653),
];

const SAN_JOSE: &[(&str, f64, f64)] = &[
    ("Downtown San Jose", 37.3382, -121.8863),
    ("Willow Glen", 37.3044, -121.8896),
    ("Almaden Valley", 37.2091, -121.8355),
    ("Rose Garden", 37.3399, -121.9190),
    ("Santana Row", 37.3207, -121.9483),
    ("Japantown", 37.3469, -121.8950),
    ("Cambrian Park", 37.2527, -121.9297),
    ("Evergreen", 37.3155, -121.7906),
];

const OAKLAND: &[(&str, f64, f64)] = &[
    ("Lake Merritt", 37.8044, -122.2712),
    ("Rockridge", 37.8444, -122.2514),
    ("Temescal", 37.8347, -122.2632),
    ("Jack London Square", 37.7955, -122.2772),
    ("Montclair", 37.8322, -122.2097),
    ("Piedmont Avenue", 37.8197, -122.2458),
];

/// Which slice of the sample tables to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CitySelection {
    All,
    LosAngeles,
    SanFrancisco,
    SanDiego,
    SanJose,
    Oakland,
}

impl CitySelection {
    pub fn label(&self) -> &'static str {
        match self {
            CitySelection::All => "All California",
            CitySelection::LosAngeles => "Los Angeles",
            CitySelection::SanFrancisco => "San Francisco",
            CitySelection::SanDiego => "San Diego",
            CitySelection::SanJose => "San Jose",
            CitySelection::Oakland => "Oakland",
        }
    }

    fn tables(&self) -> Vec<(&'static str, &'static [(&'static str, f64, f64)])> {
        let all = [
            ("Los Angeles", LOS_ANGELES),
            ("San Francisco", SAN_FRANCISCO),
            ("San Diego", SAN_DIEGO),
            ("San Jose", SAN_JOSE),
            ("Oakland", OAKLAND),
        ];
        match self {
            CitySelection::All => all.to_vec(),
            CitySelection::LosAngeles => vec![all[0]],
            CitySelection::SanFrancisco => vec![all[1]],
            CitySelection::SanDiego => vec![all[2]],
            CitySelection::SanJose => vec![all[3]],
            CitySelection::Oakland => vec![all[4]],
        }
    }
}

/// Generate the sample record set for a selection.
///
/// Display names carry the city in parentheses and the county is derived
/// from them, the same way an external source with composite names would
/// be ingested. School scores are always present in the sample data; the
/// defaulting path exists for sources that omit them.
pub fn sample_neighborhoods(selection: CitySelection, seed: u64) -> Vec<NeighborhoodRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();

    for (city, areas) in selection.tables() {
        for (name, latitude, longitude) in areas {
            let display_name = format!("{name} ({city})");
            let county = county_from_name(&display_name).unwrap_or(city).to_string();
            records.push(NeighborhoodRecord {
                name: display_name,
                county,
                latitude: *latitude,
                longitude: *longitude,
                total_population: rng.random_range(5_000u32..50_000),
                median_income: rng.random_range(40_000u32..150_000) as f64,
                median_rent: rng.random_range(1_000u32..4_000) as f64,
                median_age: rng.random_range(25u32..45) as f64,
                college_educated_pct: rng.random_range(20.0f64..80.0),
                renter_pct: rng.random_range(30.0f64..90.0),
                unemployment_rate: rng.random_range(2.0f64..10.0),
                amenity_score: rng.random_range(40.0f64..95.0),
                transit_score: rng.random_range(30.0f64..95.0),
                safety_score: rng.random_range(50.0f64..95.0),
                school_score: Some(rng.random_range(50.0f64..95.0)),
                growth_potential: rng.random_range(40.0f64..85.0),
            });
        }
    }

    records
}
