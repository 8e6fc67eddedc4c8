use std::{collections::HashMap, sync::LazyLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverIdentity {
    pub name: String,
    pub abbreviation: String,
    pub team: String,
}

// (car number, name, code, team)
const GRID: &[(u32, &str, &str, &str)] = &[
    (1, "Max Verstappen", "VER", "Red Bull Racing"),
    (22, "Yuki Tsunoda", "TSU", "Red Bull Racing"),
    (16, "Charles Leclerc", "LEC", "Ferrari"),
    (44, "Lewis Hamilton", "HAM", "Ferrari"),
    (63, "George Russell", "RUS", "Mercedes"),
    (12, "Kimi Antonelli", "ANT", "Mercedes"),
    (4, "Lando Norris", "NOR", "McLaren"),
    (81, "Oscar Piastri", "PIA", "McLaren"),
    (14, "Fernando Alonso", "ALO", "Aston Martin"),
    (18, "Lance Stroll", "STR", "Aston Martin"),
    (10, "Pierre Gasly", "GAS", "Alpine"),
    (43, "Franco Colapinto", "COL", "Alpine"),
    (31, "Esteban Ocon", "OCO", "Haas"),
    (87, "Oliver Bearman", "BEA", "Haas"),
    (27, "Niko Hulkenberg", "HUL", "Kick Sauber"),
    (5, "Gabriel Bortoleto", "BOR", "Kick Sauber"),
    (23, "Alexander Albon", "ALB", "Williams"),
    (2, "Logan Sargeant", "SAR", "Williams"),
    (55, "Carlos Sainz", "SAI", "Williams"),
    (30, "Liam Lawson", "LAW", "Racing Bulls"),
    (6, "Isack Hadjar", "HAD", "Racing Bulls"),
];

static DRIVERS: LazyLock<HashMap<u32, DriverIdentity>> = LazyLock::new(|| {
    GRID.iter()
        .map(|(number, name, abbreviation, team)| {
            (
                *number,
                DriverIdentity {
                    name: name.to_string(),
                    abbreviation: abbreviation.to_string(),
                    team: team.to_string(),
                },
            )
        })
        .collect()
});

/// Identity for a car number. Unknown numbers get a placeholder instead of failing.
pub fn identity_of(number: u32) -> DriverIdentity {
    DRIVERS
        .get(&number)
        .cloned()
        .unwrap_or_else(|| DriverIdentity {
            name: format!("Driver {number}"),
            abbreviation: format!("D{number}"),
            team: "Unknown".to_string(),
        })
}
