//! Purchase mechanism and catalog cost curves.

use outbreak_core::{
    catalog::{ActionKind, CostCurve, Effect, ACTIONS},
    config::SimConfig,
    error::SimError,
    purchase::{apply_action, purchase, try_purchase},
    state::{create_initial_state, GameState, Upgrade},
    tick::tick,
};

fn rich_state() -> GameState {
    let mut state = create_initial_state(&SimConfig::default_test());
    state.current_viruses = 1_000_000.0;
    state.total_viruses = 1_000_000.0;
    state
}

#[test]
fn replicate_is_free_and_breeds_one_virus() {
    let state = create_initial_state(&SimConfig::default_test());
    let next = try_purchase(&state, ActionKind::Replicate, &SimConfig::default_test()).unwrap();
    assert_eq!(next.current_viruses, 1.0);
    assert_eq!(next.total_viruses, 1.0);
}

#[test]
fn upgrade_deducts_pre_purchase_cost_and_raises_level() {
    let mut state = rich_state();
    state.rate_of_infection = 5;
    let cost = ActionKind::AdaptImmuneSystem.def().cost(&state);
    assert_eq!(cost, (200.0 * 1.04f64.powi(5)).floor());

    let next = try_purchase(&state, ActionKind::AdaptImmuneSystem, &SimConfig::default_test()).unwrap();
    assert_eq!(next.rate_of_infection, 6);
    assert_eq!(next.current_viruses, state.current_viruses - cost);
    assert_eq!(next.total_viruses, state.total_viruses, "spending never touches the total");
}

#[test]
fn effect_fields_win_over_the_deduction() {
    // The breed effect is computed from the pre-purchase pool, so a
    // non-zero price on it is overwritten rather than subtracted.
    let state = rich_state();
    let next = apply_action(500.0, Effect::BreedVirus)(&state);
    assert_eq!(next.current_viruses, state.current_viruses + 1.0);
}

#[test]
fn infect_human_moves_one_healthy_human_into_the_buffer() {
    let state = rich_state();
    let next = try_purchase(&state, ActionKind::InfectHuman, &SimConfig::default_test()).unwrap();
    assert_eq!(next.manual_infections, 1);
    assert_eq!(next.healthy_humans, state.healthy_humans - 1.0);
    assert_eq!(next.total_infected(), 1.0);
    assert_eq!(next.accounted_humans(), next.total_humans);
}

#[test]
fn purchase_is_unconditional() {
    let state = create_initial_state(&SimConfig::default_test());
    let next = purchase(&state, ActionKind::WeakenDefenses);
    assert_eq!(next.contagion_time, 1);
    assert_eq!(next.current_viruses, -200.0);
}

#[test]
fn try_purchase_refuses_hidden_actions() {
    let mut state = create_initial_state(&SimConfig::default_test());
    state.current_viruses = 1_000.0;
    let err = try_purchase(&state, ActionKind::InvadeSystems, &SimConfig::default_test()).unwrap_err();
    assert!(matches!(err, SimError::Hidden { action: ActionKind::InvadeSystems }));
}

#[test]
fn try_purchase_refuses_unaffordable_actions() {
    let mut state = create_initial_state(&SimConfig::default_test());
    state.total_viruses = 200.0;
    state.current_viruses = 150.0;
    match try_purchase(&state, ActionKind::AdaptPhysiology, &SimConfig::default_test()) {
        Err(SimError::Unaffordable { cost, available, .. }) => {
            assert_eq!(cost, 200.0);
            assert_eq!(available, 150.0);
        }
        other => panic!("expected Unaffordable, got {other:?}"),
    }
}

#[test]
fn try_purchase_refuses_maxed_actions() {
    let mut state = rich_state();
    state.sanitation = 30;
    assert!(matches!(
        try_purchase(&state, ActionKind::LowerSanitation, &SimConfig::default_test()),
        Err(SimError::Maxed { .. })
    ));

    let mut drained = rich_state();
    drained.healthy_humans = 0.0;
    assert!(matches!(
        try_purchase(&drained, ActionKind::InfectHuman, &SimConfig::default_test()),
        Err(SimError::Maxed { .. })
    ));
}

#[test]
fn invade_systems_stops_once_a_retired_cohort_dies_in_full() {
    let harsh = SimConfig { mortality_factor: 1.0, ..SimConfig::default_test() };
    let mut state = rich_state();
    state.lethality = 1.0;
    state.infected.add_oldest(10.0);
    state.healthy_humans = state.reconciled_healthy();

    let next = tick(&state, &harsh);
    assert_eq!(next.dead_humans, 10.0, "lethality 1 at factor 1 kills the whole cohort");
    assert!(matches!(
        try_purchase(&state, ActionKind::InvadeSystems, &harsh),
        Err(SimError::Maxed { action: ActionKind::InvadeSystems })
    ));

    // The same level is far from the cap at the default factor.
    let upgraded = try_purchase(&state, ActionKind::InvadeSystems, &SimConfig::default_test()).unwrap();
    assert_eq!(upgraded.lethality, 2.0);

    let mut deadly = rich_state();
    deadly.lethality = 20.0;
    assert!(matches!(
        try_purchase(&deadly, ActionKind::InvadeSystems, &SimConfig::default_test()),
        Err(SimError::Maxed { .. })
    ));
}

#[test]
fn purchase_leaves_its_input_untouched() {
    let state = rich_state();
    let before = state.clone();
    let _ = purchase(&state, ActionKind::InfectHuman);
    let _ = purchase(&state, ActionKind::LowerSanitation);
    assert_eq!(state, before);
}

#[test]
fn exponential_costs_never_decrease_with_level() {
    for def in ACTIONS.iter() {
        let CostCurve::Exponential { upgrade, factor, .. } = def.cost else {
            continue;
        };
        assert!(factor > 1.0, "{} should get pricier", def.name);

        let mut state = create_initial_state(&SimConfig::default_test());
        let mut previous = def.cost(&state);
        for level in 1..=60 {
            upgrade.set_level(&mut state, level as f64);
            let cost = def.cost(&state);
            assert!(cost >= previous, "{} got cheaper at level {level}", def.name);
            assert_eq!(cost, cost.floor());
            previous = cost;
        }
    }
}

#[test]
fn manual_infection_cost_depends_on_sanitation() {
    let def = ActionKind::InfectHuman.def();
    let config = SimConfig::default_test();

    // Without sanitation the price never moves.
    let mut state = rich_state();
    for _ in 0..5 {
        assert_eq!(def.cost(&state), 100.0);
        state = try_purchase(&state, ActionKind::InfectHuman, &config).unwrap();
    }

    // With sanitation every manual infection deepens the discount.
    let mut state = rich_state();
    state.sanitation = 10;
    let mut previous = def.cost(&state);
    assert_eq!(previous, 90.0);
    for _ in 0..6 {
        state = try_purchase(&state, ActionKind::InfectHuman, &config).unwrap();
        let cost = def.cost(&state);
        assert!(cost <= previous, "{cost} > {previous}");
        assert!(cost >= 0.0);
        previous = cost;
    }
    assert_eq!(previous, 0.0, "10 * 1.5^6 exceeds the base price");
}

#[test]
fn every_upgrade_action_raises_its_own_feature() {
    let state = rich_state();
    for def in ACTIONS.iter() {
        let Effect::Raise(upgrade) = def.effect else { continue };
        let next = try_purchase(&state, def.kind, &SimConfig::default_test()).unwrap();
        assert_eq!(upgrade.level(&next), upgrade.level(&state) + 1.0, "{}", def.name);
    }
    // Lethality is the one fractional level.
    let mut half = rich_state();
    half.lethality = 0.5;
    let next = purchase(&half, ActionKind::InvadeSystems);
    assert_eq!(Upgrade::Lethality.level(&next), 1.5);
}
