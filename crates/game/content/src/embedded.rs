//! Default content compiled into the crate.

/// Named action catalogs, loaded in this order.
pub const ACTION_CATALOGS: &[(&str, &str)] = &[
    ("attack.ron", include_str!("../data/actions/attack.ron")),
    ("magic.ron", include_str!("../data/actions/magic.ron")),
    ("spirit.ron", include_str!("../data/actions/spirit.ron")),
    ("support.ron", include_str!("../data/actions/support.ron")),
];

/// Default combat configuration.
pub const COMBAT_CONFIG: &str = include_str!("../data/config.toml");

/// Default scenario: a small skirmish between two teams.
pub const SKIRMISH_SCENARIO: &str = include_str!("../data/scenarios/skirmish.ron");
