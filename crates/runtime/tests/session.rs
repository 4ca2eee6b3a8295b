//! Session-level tests: queueing, timeline execution, phases and area attacks.

use tactics_core::{
    ActionDefinition, AttackProfile, DamageType, EffectKind, PhaseError, Position, Priority,
    ResourceCost, ResourceKind, Roster, TeamId, UnitId, UnitPhase, UnitState,
};
use tactics_runtime::{BattleSession, SessionError};

const MAGE: UnitId = UnitId(1);
const KNIGHT: UnitId = UnitId(2);
const GOBLIN: UnitId = UnitId(10);
const SHAMAN: UnitId = UnitId(11);

// ============================================================================
// Fixtures
// ============================================================================

fn mage(max_mp: u32) -> UnitState {
    UnitState::new(MAGE, TeamId(0), 70, max_mp)
        .with_pool(ResourceKind::Ap, 3)
        .with_initiative(50)
        .with_position(Position::new(0, 0))
        .with_attack(
            AttackProfile::melee(DamageType::Magical, 30)
                .with_range(4)
                .with_area(2.0, None),
        )
}

fn roster_with(mage_mp: u32, goblin_hp: u32) -> Roster {
    Roster::from_units([
        mage(mage_mp),
        UnitState::new(KNIGHT, TeamId(0), 120, 0)
            .with_pool(ResourceKind::Ap, 3)
            .with_initiative(30)
            .with_position(Position::new(1, 0)),
        UnitState::new(GOBLIN, TeamId(1), goblin_hp, 0)
            .with_pool(ResourceKind::Ap, 2)
            .with_initiative(60)
            .with_position(Position::new(4, 0)),
        UnitState::new(SHAMAN, TeamId(1), 50, 0)
            .with_pool(ResourceKind::Ap, 2)
            .with_initiative(20)
            .with_position(Position::new(5, 0)),
    ])
    .unwrap()
}

fn roster() -> Roster {
    roster_with(60, 40)
}

fn session() -> BattleSession {
    BattleSession::builder()
        .register_action(
            ActionDefinition::new("fireball", "Fireball")
                .with_effect(EffectKind::damage(30, DamageType::Magical))
                .with_cost(ResourceCost::ap(1))
                .with_cost(ResourceCost::mp(15)),
        )
        .register_action(
            ActionDefinition::new("slash", "Slash")
                .with_effect(EffectKind::damage(18, DamageType::Physical))
                .with_cost(ResourceCost::ap(1)),
        )
        .register_action(
            ActionDefinition::new("power_strike", "Power Strike")
                .with_effect(EffectKind::damage(25, DamageType::Physical))
                .with_cooldown(2),
        )
        .build()
        .unwrap()
}

fn hp(roster: &Roster, unit: UnitId) -> u32 {
    roster.get(unit).unwrap().hp()
}

// ============================================================================
// Timeline ordering and execution
// ============================================================================

#[test]
fn timeline_orders_by_priority_then_initiative() {
    let mut session = session();
    let mut roster = roster();

    session
        .queue_action(GOBLIN, "slash", vec![KNIGHT], Priority::Normal)
        .unwrap();
    session
        .queue_action(KNIGHT, "slash", vec![GOBLIN], Priority::High)
        .unwrap();
    session
        .queue_action(MAGE, "fireball", vec![GOBLIN], Priority::Normal)
        .unwrap();

    let preview = session.preview_timeline(&roster.unit_stats());
    let order: Vec<UnitId> = preview.iter().map(|p| p.unit).collect();
    assert_eq!(order, vec![KNIGHT, GOBLIN, MAGE]);
    assert_eq!(session.pending(), 3);

    let reports = session.execute_queued_actions(&mut roster);

    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.success));
    assert_eq!(hp(&roster, KNIGHT), 102);
    assert_eq!(hp(&roster, GOBLIN), 0);
    assert_eq!(reports[2].defeated, vec![GOBLIN]);
    assert_eq!(reports[2].damage_dealt(), 22);
    assert_eq!(session.pending(), 0);

    let stats = session.statistics().snapshot();
    assert_eq!(stats.actions_executed, 3);
    assert_eq!(stats.actions_failed, 0);
    assert_eq!(stats.total_damage, 58);
    assert_eq!(stats.units_defeated, 1);
}

#[test]
fn failed_entry_does_not_stop_the_timeline() {
    let mut session = session();
    let mut roster = roster_with(10, 40);

    session
        .queue_action(MAGE, "fireball", vec![GOBLIN], Priority::High)
        .unwrap();
    session
        .queue_action(KNIGHT, "slash", vec![GOBLIN], Priority::Normal)
        .unwrap();

    let reports = session.execute_queued_actions(&mut roster);

    assert!(!reports[0].success);
    assert_eq!(reports[0].failure_code, Some("ACTION_INSUFFICIENT_RESOURCES"));
    assert!(reports[0].cost_paid.is_empty());
    assert_eq!(
        roster.get(MAGE).unwrap().resources.current(ResourceKind::Ap),
        3
    );
    assert_eq!(roster.get(MAGE).unwrap().mp(), 10);

    assert!(reports[1].success);
    assert_eq!(hp(&roster, GOBLIN), 22);

    assert_eq!(session.phase(MAGE), UnitPhase::Executed);
    assert_eq!(session.statistics().failed(), 1);
}

#[test]
fn unit_killed_earlier_in_the_timeline_cannot_act() {
    let mut session = session();
    let mut roster = roster_with(60, 15);

    session
        .queue_action(GOBLIN, "slash", vec![KNIGHT], Priority::Normal)
        .unwrap();
    session
        .queue_action(KNIGHT, "slash", vec![GOBLIN], Priority::High)
        .unwrap();

    let reports = session.execute_queued_actions(&mut roster);

    assert_eq!(reports[0].unit, KNIGHT);
    assert_eq!(reports[0].defeated, vec![GOBLIN]);
    assert_eq!(reports[1].failure_code, Some("ACTION_CASTER_DEAD"));
    assert_eq!(hp(&roster, KNIGHT), 120);
}

#[test]
fn reports_serialize_with_failure_code() {
    let mut session = session();
    let mut roster = roster_with(10, 40);

    session
        .queue_action(MAGE, "fireball", vec![GOBLIN], Priority::Normal)
        .unwrap();
    let reports = session.execute_queued_actions(&mut roster);

    let json = serde_json::to_value(&reports[0]).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["action_id"], "fireball");
    assert_eq!(json["failure_code"], "ACTION_INSUFFICIENT_RESOURCES");
}

// ============================================================================
// Turn phases
// ============================================================================

#[test]
fn phases_follow_the_turn_lifecycle() {
    let mut session = session();
    let mut roster = roster();

    assert_eq!(session.phase(KNIGHT), UnitPhase::Idle);
    session
        .queue_action(KNIGHT, "slash", vec![GOBLIN], Priority::Normal)
        .unwrap();
    session
        .queue_action(KNIGHT, "slash", vec![SHAMAN], Priority::Normal)
        .unwrap();
    assert_eq!(session.phase(KNIGHT), UnitPhase::ActionQueued);

    let timeline = session.resolve_timeline(&roster.unit_stats());
    assert_eq!(session.phase(KNIGHT), UnitPhase::Resolving);

    session.execute(&timeline, &mut roster);
    assert_eq!(session.phase(KNIGHT), UnitPhase::Executed);

    let err = session
        .queue_action(KNIGHT, "slash", vec![GOBLIN], Priority::Normal)
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Phase(PhaseError::IllegalTransition {
            from: UnitPhase::Executed,
            ..
        })
    ));

    session.end_turn(&mut roster);
    assert_eq!(session.turn(), 1);
    assert_eq!(session.phase(KNIGHT), UnitPhase::Idle);
    assert!(session
        .queue_action(KNIGHT, "slash", vec![GOBLIN], Priority::Normal)
        .is_ok());
}

#[test]
fn end_turn_discards_unresolved_actions_and_ticks_cooldowns() {
    let mut session = session();
    let mut roster = roster();

    session
        .queue_action(KNIGHT, "power_strike", vec![SHAMAN], Priority::Normal)
        .unwrap();
    assert!(session.execute_queued_actions(&mut roster)[0].success);
    assert_eq!(hp(&roster, SHAMAN), 25);

    session
        .queue_action(GOBLIN, "slash", vec![KNIGHT], Priority::Normal)
        .unwrap();
    session.end_turn(&mut roster);
    assert_eq!(session.pending(), 0);
    assert_eq!(hp(&roster, KNIGHT), 120);

    session
        .queue_action(KNIGHT, "power_strike", vec![SHAMAN], Priority::Normal)
        .unwrap();
    let reports = session.execute_queued_actions(&mut roster);
    assert_eq!(reports[0].failure_code, Some("ACTION_ON_COOLDOWN"));

    session.end_turn(&mut roster);
    session
        .queue_action(KNIGHT, "power_strike", vec![SHAMAN], Priority::Normal)
        .unwrap();
    let reports = session.execute_queued_actions(&mut roster);
    assert!(reports[0].success);
    assert_eq!(hp(&roster, SHAMAN), 0);
}

// ============================================================================
// Area attacks
// ============================================================================

#[test]
fn area_attack_applies_falloff_and_records_damage() {
    let mut session = session();
    let mut roster = roster();

    let report = session
        .area_attack(MAGE, Position::new(4, 0), &mut roster)
        .unwrap();

    assert_eq!(report.hits.len(), 2);
    assert_eq!(hp(&roster, GOBLIN), 10);
    assert_eq!(hp(&roster, SHAMAN), 34);
    assert_eq!(hp(&roster, KNIGHT), 120);
    assert_eq!(report.total_damage(), 46);
    assert!(report.defeated.is_empty());
    assert_eq!(session.statistics().snapshot().total_damage, 46);
}

#[test]
fn area_attack_errors_leave_the_roster_untouched() {
    let mut session = session();
    let mut roster = roster();
    let before = roster.clone();

    let out_of_range = session
        .area_attack(MAGE, Position::new(6, 0), &mut roster)
        .unwrap_err();
    assert!(matches!(out_of_range, SessionError::Combat(_)));

    let not_capable = session
        .area_attack(GOBLIN, Position::new(1, 0), &mut roster)
        .unwrap_err();
    assert!(matches!(not_capable, SessionError::Combat(_)));

    let missing = session
        .area_attack(UnitId(99), Position::new(1, 0), &mut roster)
        .unwrap_err();
    assert!(matches!(
        missing,
        SessionError::UnitNotFound { unit: UnitId(99) }
    ));

    assert_eq!(roster, before);
}
