//! Builders for medal-table fixtures shared by unit and behaviour tests.

use serde_json::{Value, json};

use crate::CountryStanding;

/// Build a standing with the given medal counts and a consistent total.
///
/// Upstream rank fields are filled with the country id; the engine ignores
/// them.
#[must_use]
pub fn standing(country_id: u64, short_code: &str, medals: [u32; 3]) -> CountryStanding {
    let [gold, silver, bronze] = medals;
    let rank = u32::try_from(country_id).unwrap_or(u32::MAX);
    CountryStanding {
        country_id,
        geo_id: country_id,
        name: format!("Country {short_code}"),
        short_code: short_code.to_owned(),
        gold,
        silver,
        bronze,
        total: gold.saturating_add(silver).saturating_add(bronze),
        gold_rank: rank,
        gold_sort_rank: rank,
        total_rank: rank,
        total_sort_rank: rank,
    }
}

/// Render standings as a feed payload in the upstream wire shape.
#[must_use]
pub fn feed_json(countries: &[CountryStanding]) -> Value {
    let sum = |pick: fn(&CountryStanding) -> u32| -> u32 {
        countries
            .iter()
            .map(pick)
            .fold(0_u32, u32::saturating_add)
    };
    let rows: Vec<Value> = countries.iter().map(standing_json).collect();
    json!({
        "info": {
            "asOf": "2024-08-11T18:00:00Z",
            "totalEvents": 329,
            "finishedEvents": 329,
            "scheduledEvents": 0,
            "gold": sum(|c| c.gold),
            "silver": sum(|c| c.silver),
            "bronze": sum(|c| c.bronze),
            "total": sum(|c| c.total),
            "sportId": "GLO",
            "sportName": "All sports",
            "sportShortName": null
        },
        "countries": rows
    })
}

fn standing_json(standing: &CountryStanding) -> Value {
    json!({
        "countryId": standing.country_id,
        "geoId": standing.geo_id,
        "name": standing.name,
        "shortCode": standing.short_code,
        "gold": standing.gold,
        "silver": standing.silver,
        "bronze": standing.bronze,
        "total": standing.total,
        "goldRank": standing.gold_rank,
        "goldSortRank": standing.gold_sort_rank,
        "totalRank": standing.total_rank,
        "totalSortRank": standing.total_sort_rank
    })
}
