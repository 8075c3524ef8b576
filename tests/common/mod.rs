use rentmap::NeighborhoodRecord;

/// Build a record with the component scores used across the scenario
/// tests; school_score is left unset so the defaulting path is exercised.
pub fn record(name: &str, county: &str, rent: f64, income: f64) -> NeighborhoodRecord {
    let mut r = NeighborhoodRecord::new(name, county);
    r.median_rent = rent;
    r.median_income = income;
    r.amenity_score = 80.0;
    r.transit_score = 70.0;
    r.safety_score = 90.0;
    r.school_score = None;
    r.growth_potential = 60.0;
    r
}
