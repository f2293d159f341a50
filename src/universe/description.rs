use crate::universe::model::{Faction, Ring, Service};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

const UNITED_EARTH: [&str; 5] = [
    "A well-ordered United Earth system. Patrol cutters keep the {ring} lanes quiet and customs scans are thorough.",
    "Terran colony charters cover every rock here. {ring} traffic runs on strict timetables set from Sol.",
    "Naval yards and agricultural stations share the {ring} approaches of this United Earth holding.",
    "An old Earth settlement, proud of its founding date and its {ring} trade links.",
    "United Earth flags fly over busy docks. Officials boast of {tech}.",
];
const MARS_REPUBLIC: [&str; 5] = [
    "A Mars Republic industrial hub. Ore haulers crowd the {ring} jump points around the clock.",
    "Martian engineers terraformed what they could here and domed the rest. Known for {tech}.",
    "Republic militia keep a watchful eye on Earth traffic passing through this {ring} system.",
    "Red-dust refineries ring the main world; the Republic taxes every tonne leaving the {ring} lanes.",
    "A Mars Republic research outpost, quietly competing with Sol for {tech}.",
];
const TRADERS_GUILD: [&str; 5] = [
    "Guild warehouses line every orbit. Anything can be bought here, for a price, and the {ring} lanes never sleep.",
    "A neutral Traders Guild exchange where rival factions settle accounts. Brokers advertise {tech}.",
    "Cargo manifests outnumber residents ten to one in this {ring} Guild waystation.",
    "The Guild charter guarantees safe passage; the markets guarantee little else.",
    "A sprawling bazaar system at the crossroads of several {ring} trade routes.",
];
const FRONTIER_ALLIANCE: [&str; 5] = [
    "Frontier Alliance homesteaders scratch a living from thin soil and thinner {ring} trade.",
    "A loose Alliance council governs here by vote and by necessity. Settlers make do with {tech}.",
    "Prospectors and surveyors use this {ring} system as a staging point for deeper runs.",
    "Alliance militia volunteers guard the jump points. Outsiders are welcome if they pull their weight.",
    "Prefab domes and half-finished stations speak to a colony still finding its feet in the {ring}.",
];
const INDEPENDENT: [&str; 5] = [
    "No flag claims this system. Its people prefer it that way and trade on their own {ring} terms.",
    "An independent enclave run by old families, wary of outsiders and proud of {tech}.",
    "A lawless scatter of habitats; every station sets its own rules out here in the {ring}.",
    "Independent miners guard their claims jealously. Strangers are met with questions.",
    "A forgotten colony that drifted out of contact and has only recently rejoined the {ring} lanes.",
];
const PIRATE_CLANS: [&str; 5] = [
    "Clan beacons warn off the unwary. Those who stay pay tribute or lose their cargo in the {ring} dark.",
    "A pirate haven where stolen goods change hands openly. The fences here favour {tech}.",
    "Burned-out hulks drift near the jump point, a reminder of whose {ring} territory this is.",
    "The clans hold this system by reputation alone, and the reputation is well earned.",
    "Smugglers, deserters and worse gather here beyond the reach of any navy patrolling the {ring}.",
];

const PLANET_TEMPLATES: [&str; 6] = [
    "{pop} A {faction} world with {services}.",
    "{pop} Settlers under {faction} rule keep {services} running.",
    "{pop} Dockside signage lists {services}; {faction} inspectors are rarely seen.",
    "{pop} Visitors come for {services} and leave as soon as {faction} customs allows.",
    "{pop} The local {faction} governor takes a cut of {services}.",
    "{pop} A quiet stop offering {services} under {faction} colours.",
];

fn faction_paragraphs(faction: Faction) -> &'static [&'static str; 5] {
    match faction {
        Faction::UnitedEarth => &UNITED_EARTH,
        Faction::MarsRepublic => &MARS_REPUBLIC,
        Faction::TradersGuild => &TRADERS_GUILD,
        Faction::FrontierAlliance => &FRONTIER_ALLIANCE,
        Faction::Independent => &INDEPENDENT,
        Faction::PirateClans => &PIRATE_CLANS,
    }
}

fn ring_phrase(ring: Ring) -> &'static str {
    match ring {
        Ring::Core => "core",
        Ring::Mid => "midworld",
        Ring::Outer => "outer",
        Ring::Edge => "edge",
    }
}

fn tech_phrase(tech_level: u8) -> &'static str {
    match tech_level {
        0..=2 => "salvaged, barely working machinery",
        3..=4 => "serviceable if dated equipment",
        5..=6 => "solid modern industry",
        7..=8 => "advanced fabrication and research",
        _ => "cutting-edge technology found nowhere else",
    }
}

/// Flavor paragraph for a system; one of five per faction, filled in for ring and tech.
pub fn describe_system(
    rng: &mut ChaCha8Rng,
    faction: Faction,
    ring: Ring,
    tech_level: u8,
) -> String {
    let paragraphs = faction_paragraphs(faction);
    let template = paragraphs[rng.gen_range(0..paragraphs.len())];
    template
        .replace("{ring}", ring_phrase(ring))
        .replace("{tech}", tech_phrase(tech_level))
}

fn population_phrase(population: u64) -> &'static str {
    match population {
        0..=9_999 => "A sparse outpost.",
        10_000..=999_999 => "A modest settlement.",
        1_000_000..=99_999_999 => "A busy colony.",
        _ => "A teeming world.",
    }
}

fn services_phrase(services: &[Service]) -> String {
    let labels: Vec<&str> = services.iter().map(|s| s.label()).collect();
    match labels.as_slice() {
        [] => "nothing in particular".to_string(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

pub fn describe_planet(
    rng: &mut ChaCha8Rng,
    faction: Faction,
    services: &[Service],
    population: u64,
) -> String {
    let template = PLANET_TEMPLATES[rng.gen_range(0..PLANET_TEMPLATES.len())];
    template
        .replace("{pop}", population_phrase(population))
        .replace("{faction}", faction.label())
        .replace("{services}", &services_phrase(services))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn system_descriptions_fill_every_placeholder() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for faction in Faction::ALL {
            for ring in Ring::ALL {
                for tech in 1..=10 {
                    let text = describe_system(&mut rng, faction, ring, tech);
                    assert!(!text.contains('{'), "unfilled template: {}", text);
                    assert!(!text.is_empty());
                }
            }
        }
    }

    #[test]
    fn same_stream_same_description() {
        let mut a = ChaCha8Rng::seed_from_u64(10);
        let mut b = ChaCha8Rng::seed_from_u64(10);
        assert_eq!(
            describe_system(&mut a, Faction::PirateClans, Ring::Edge, 9),
            describe_system(&mut b, Faction::PirateClans, Ring::Edge, 9)
        );
    }

    #[test]
    fn services_are_listed_in_prose() {
        assert_eq!(services_phrase(&[Service::Trading]), "trading");
        assert_eq!(
            services_phrase(&[Service::Trading, Service::Bar, Service::Missions]),
            "trading, bar and missions"
        );
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let text = describe_planet(&mut rng, Faction::TradersGuild, &[Service::Trading], 500);
        assert!(text.starts_with("A sparse outpost."));
        assert!(text.contains("trading"));
        assert!(!text.contains('{'));
    }
}
