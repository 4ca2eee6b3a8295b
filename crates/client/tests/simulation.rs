use std::io::Write;

use tactics_content::{ActionCatalogLoader, ConfigLoader, ScenarioLoader};
use tactics_core::UnitId;
use tactics_sim::Simulator;

const DUEL: &str = r#"
(
    units: [
        (
            id: 1,
            team: 0,
            resources: (
                hp: (current: 50, maximum: 50),
                ap: (current: 2, maximum: 2),
            ),
        ),
        (
            id: 2,
            team: 1,
            resources: (
                hp: (current: 30, maximum: 30),
                ap: (current: 1, maximum: 1),
            ),
            defenses: (physical: 3),
        ),
    ],
    orders: [
        (unit: 1, action: "slash", targets: [2]),
        (unit: 2, action: "fireball", targets: [1]),
        (unit: 1, action: "teleport"),
    ],
    area_attacks: [
        (unit: 2, target: (x: 0, y: 0)),
    ],
)
"#;

fn simulator() -> Simulator {
    Simulator::new(
        ActionCatalogLoader::embedded().unwrap(),
        ConfigLoader::embedded().unwrap(),
    )
    .unwrap()
}

#[test]
fn duel_from_file_reports_every_outcome() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DUEL.as_bytes()).unwrap();
    let scenario = ScenarioLoader::load(file.path()).unwrap();

    let mut simulator = simulator();
    let (report, roster) = simulator.run(&scenario).unwrap();

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].action, "teleport");

    assert_eq!(report.actions.len(), 2);
    let slash = report.actions.iter().find(|a| a.unit == UnitId(1)).unwrap();
    assert!(slash.success);
    assert_eq!(roster.get(UnitId(2)).unwrap().hp(), 15);

    let fireball = report.actions.iter().find(|a| a.unit == UnitId(2)).unwrap();
    assert_eq!(fireball.failure_code, Some("ACTION_INSUFFICIENT_RESOURCES"));
    assert_eq!(roster.get(UnitId(1)).unwrap().hp(), 50);

    assert_eq!(report.area_attacks.len(), 1);
    assert!(report.area_attacks[0].report.is_none());
    assert!(report.area_attacks[0].error.is_some());

    assert_eq!(report.statistics.actions_executed, 1);
    assert_eq!(report.statistics.actions_failed, 1);
    assert_eq!(report.statistics.total_damage, 15);
    assert_eq!(simulator.session().turn(), 1);
}

#[test]
fn embedded_skirmish_runs_to_completion() {
    let scenario = ScenarioLoader::embedded().unwrap();
    let mut simulator = simulator();

    let (report, roster) = simulator.run(&scenario).unwrap();

    assert!(report.rejected.is_empty());
    assert_eq!(report.timeline.len(), scenario.orders.len());
    assert_eq!(report.actions.len(), scenario.orders.len());

    let stats = &report.statistics;
    assert_eq!(
        stats.actions_executed + stats.actions_failed,
        scenario.orders.len() as u64
    );
    for unit in roster.iter() {
        assert!(unit.hp() <= unit.max_hp());
        assert_eq!(unit.is_alive(), unit.hp() > 0);
    }

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json["actions"].as_array().unwrap().len(),
        scenario.orders.len()
    );
}
