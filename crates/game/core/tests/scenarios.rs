//! End-to-end resolution scenarios over the public API.

use std::sync::Arc;

use tactics_core::{
    ActionDefinition, ActionError, ActionQueue, AreaAttack, AreaConfig, DamageEffect, DamageTable,
    DamageType, EffectContext, HealingEffect, Position, Priority, ResourceCost, ResourceKind,
    Roster, TeamId, UnitId, UnitState, UnitStats, UnitStatsMap, calculate_area_damage, execute,
};

fn stats(pairs: &[(u32, i32)]) -> UnitStatsMap {
    pairs
        .iter()
        .map(|&(id, initiative)| (UnitId(id), UnitStats { initiative }))
        .collect()
}

#[test]
fn high_priority_acts_before_faster_unit() {
    let mut queue = ActionQueue::new();
    let a = Arc::new(ActionDefinition::new("a", "A"));
    let b = Arc::new(ActionDefinition::new("b", "B"));
    queue.queue_action(UnitId(1), a, vec![], Priority::High);
    queue.queue_action(UnitId(2), b, vec![], Priority::Normal);

    let timeline = queue.resolve_timeline(&stats(&[(1, 60), (2, 90)]));

    let order: Vec<_> = timeline.iter().map(|e| e.action.id.as_str()).collect();
    assert_eq!(order, ["a", "b"]);
}

#[test]
fn damage_then_heal() {
    let mut unit =
        UnitState::new(UnitId(1), TeamId(0), 100, 0).with_defenses(DamageTable::new(5, 0, 0));
    let action = "test".into();

    let mut ctx = EffectContext::new(UnitId(2), &action, &mut unit);
    DamageEffect::new(25, DamageType::Physical).apply(&mut ctx);
    assert_eq!(ctx.target.hp(), 80);

    HealingEffect::new(15).apply(&mut ctx);
    assert_eq!(unit.hp(), 95);
}

#[test]
fn area_falloff_example() {
    let units = [
        UnitState::new(UnitId(1), TeamId(0), 50, 0).with_position(Position::new(0, 0)),
        UnitState::new(UnitId(2), TeamId(1), 50, 0).with_position(Position::new(2, 0)),
    ];
    let attack = AreaAttack {
        origin: Position::new(0, 0),
        radius: 3.0,
        base_damage: 30,
        attack_type: DamageType::Physical,
        caster: UnitId(1),
        friendly_fire: false,
    };

    let results = calculate_area_damage(&attack, &units, &AreaConfig::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].amount, 12);
}

#[test]
fn fireball_cost_is_all_or_nothing() {
    let caster = UnitState::new(UnitId(1), TeamId(0), 40, 50);
    let target = UnitState::new(UnitId(2), TeamId(1), 100, 0);
    let fireball = |mp| {
        ActionDefinition::new("fireball", "Fireball")
            .with_effect(DamageEffect::new(30, DamageType::Magical))
            .with_cost(ResourceCost::mp(mp))
    };

    let mut roster = Roster::from_units([caster.clone(), target.clone()]).unwrap();
    execute(&fireball(15), UnitId(1), &[UnitId(2)], &mut roster).unwrap();
    assert_eq!(roster.get(UnitId(1)).unwrap().mp(), 35);

    let mut roster = Roster::from_units([caster, target]).unwrap();
    let err = execute(&fireball(60), UnitId(1), &[UnitId(2)], &mut roster).unwrap_err();
    assert!(matches!(
        err,
        ActionError::InsufficientResources {
            resource: ResourceKind::Mp,
            ..
        }
    ));
    assert_eq!(roster.get(UnitId(1)).unwrap().mp(), 50);
    assert_eq!(roster.get(UnitId(2)).unwrap().hp(), 100);
}

#[test]
fn one_unit_three_priorities() {
    let mut queue = ActionQueue::new();
    for (id, priority) in [
        ("low", Priority::Low),
        ("normal", Priority::Normal),
        ("high", Priority::High),
    ] {
        queue.queue_action(
            UnitId(1),
            Arc::new(ActionDefinition::new(id, id)),
            vec![],
            priority,
        );
    }

    let timeline = queue.resolve_timeline(&stats(&[(1, 10)]));
    let priorities: Vec<_> = timeline.iter().map(|e| e.priority).collect();

    assert_eq!(priorities, [Priority::High, Priority::Normal, Priority::Low]);
}

#[test]
fn hp_stays_within_bounds_under_any_sequence() {
    let mut unit = UnitState::new(UnitId(1), TeamId(0), 60, 0);
    let action = "sequence".into();
    let amounts = [7u32, 90, 13, 1, 250, 60, 3];

    for (i, amount) in amounts.into_iter().enumerate() {
        let mut ctx = EffectContext::new(UnitId(2), &action, &mut unit);
        if i % 2 == 0 {
            HealingEffect::new(amount).apply(&mut ctx);
        } else {
            DamageEffect::new(amount, DamageType::Spiritual).apply(&mut ctx);
        }
        assert!(unit.hp() <= unit.max_hp());
    }
    assert_eq!(unit.hp(), 0);
}
