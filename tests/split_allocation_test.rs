mod common;

use common::*;
use multiversx_sc_scenario::imports::*;
use network_registry::network_registry_proxy::NetworkRegistryProxy;
use network_registry::types::{DeactivationPolicy, DustPolicy};
use split_wallet_mock::split_wallet_mock_proxy::SplitWalletMockProxy;

/// Main registry with a, b (50%), c started at T0 and accrued to T0 + 30 days.
fn accrued_world(policy: network_registry::types::RegistryPolicy) -> ScenarioWorld {
    let mut world = world();
    setup_main(&mut world, policy);
    add_members(&mut world, &[MEMBER_A, MEMBER_B, MEMBER_C], &[100, 50, 100], T0);
    world.current_block().block_timestamp(T0 + 30 * DAY);
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .accrue_activity(0u64)
        .run();
    world
}

fn addresses(list: &[TestAddress]) -> Vec<Address> {
    list.iter().map(|account| account.to_address()).collect()
}

// ============================================================
// calculate
// ============================================================

#[test]
fn calculate_is_proportional_and_sums_to_scale() {
    let mut world = accrued_world(default_policy());

    let (recipients, percentages) = calculate(&mut world, MAIN, &[MEMBER_A, MEMBER_B, MEMBER_C]);
    assert_eq!(recipients, addresses(&[MEMBER_A, MEMBER_B, MEMBER_C]));
    assert_eq!(percentages, vec![400_000, 200_000, 400_000]);
}

#[test]
fn calculate_rejects_bad_account_lists() {
    let mut world = accrued_world(default_policy());

    world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .calculate(accounts(&[MEMBER_A, MEMBER_B]))
        .returns(ExpectMessage("Member list size mismatch"))
        .run();

    world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .calculate(accounts(&[MEMBER_B, MEMBER_A, MEMBER_C]))
        .returns(ExpectMessage("Accounts out of order or invalid"))
        .run();

    world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .calculate(accounts(&[MEMBER_A, MEMBER_A, MEMBER_C]))
        .returns(ExpectMessage("Accounts out of order or invalid"))
        .run();

    let expected = format!("Member not registered: {}", hex(MEMBER_D.to_address()));
    world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .calculate(accounts(&[MEMBER_A, MEMBER_B, MEMBER_D]))
        .returns(ExpectMessage(expected.as_str()))
        .run();
}

#[test]
fn calculate_skips_inactive_and_zero_contribution_members() {
    let mut world = accrued_world(policy(
        DeactivationPolicy::RetainInactive,
        DustPolicy::FirstRecipient,
    ));

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_members_activity(accounts(&[MEMBER_B]), u32s(&[0]))
        .run();
    // active, but nothing accrued yet
    add_members(&mut world, &[MEMBER_D], &[100], T0 + 30 * DAY);

    let (recipients, percentages) =
        calculate(&mut world, MAIN, &[MEMBER_A, MEMBER_B, MEMBER_C, MEMBER_D]);
    assert_eq!(recipients, addresses(&[MEMBER_A, MEMBER_C]));
    assert_eq!(percentages, vec![500_000, 500_000]);
}

#[test]
fn calculate_without_contributions_fails() {
    let mut world = world();
    setup_main(&mut world, default_policy());
    add_members(&mut world, &[MEMBER_A], &[100], T0);

    world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .calculate(accounts(&[MEMBER_A]))
        .returns(ExpectMessage("No active members"))
        .run();
}

#[test]
fn contribution_views() {
    let mut world = accrued_world(default_policy());

    let contribution = world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .calculate_contribution_of(managed(MEMBER_B.to_address()))
        .returns(ReturnsResult)
        .run();
    assert_eq!(contribution, 15 * DAY);

    let total = world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .calculate_total_contributions()
        .returns(ReturnsResult)
        .run();
    assert_eq!(total, BigUint::<StaticApi>::from(75 * DAY));
}

// ============================================================
// Split wallet attachment
// ============================================================

#[test]
fn set_split_requires_control_offer() {
    let mut world = accrued_world(default_policy());

    world
        .tx()
        .from(OWNER)
        .typed(SplitWalletMockProxy)
        .init(managed(OWNER.to_address()))
        .code(SPLIT_WALLET_CODE)
        .new_address(SPLIT_A)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .set_split(managed(SPLIT_A.to_address()))
        .returns(ExpectMessage("Split control not handed over"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .set_split(ManagedAddress::<StaticApi>::zero())
        .returns(ExpectMessage("Invalid split wallet address"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(SPLIT_A)
        .typed(SplitWalletMockProxy)
        .transfer_control(managed(MAIN.to_address()))
        .run();
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .set_split(managed(SPLIT_A.to_address()))
        .run();

    let controller = world
        .query()
        .to(SPLIT_A)
        .typed(SplitWalletMockProxy)
        .controller()
        .returns(ReturnsResult)
        .run();
    assert_eq!(controller, managed(MAIN.to_address()));

    let split_wallet = world
        .query()
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .get_split_wallet()
        .returns(ReturnsResult)
        .run();
    assert_eq!(split_wallet, managed(SPLIT_A.to_address()));
}

#[test]
fn update_splits_pushes_distribution() {
    let mut world = accrued_world(default_policy());

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_splits(accounts(&[MEMBER_A, MEMBER_B, MEMBER_C]), 0u32)
        .returns(ExpectMessage("Invalid split wallet address"))
        .run();

    attach_main_split(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_splits(accounts(&[MEMBER_A, MEMBER_B, MEMBER_C]), 100_001u32)
        .returns(ExpectMessage("Invalid distributor fee"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_splits(accounts(&[MEMBER_A, MEMBER_B, MEMBER_C]), 20_000u32)
        .run();

    let (recipients, percentages) = split_distribution(&mut world, SPLIT_A);
    assert_eq!(recipients, addresses(&[MEMBER_A, MEMBER_B, MEMBER_C]));
    assert_eq!(percentages, vec![400_000, 200_000, 400_000]);

    let fee = world
        .query()
        .to(SPLIT_A)
        .typed(SplitWalletMockProxy)
        .distributor_fee()
        .returns(ReturnsResult)
        .run();
    assert_eq!(fee, 20_000);
}

#[test]
fn update_splits_without_contributions_is_an_empty_distribution() {
    let mut world = world();
    setup_main(&mut world, default_policy());
    add_members(&mut world, &[MEMBER_A], &[100], T0);
    attach_main_split(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_splits(accounts(&[MEMBER_A]), 0u32)
        .returns(ExpectMessage("Empty distribution"))
        .run();
}

// ============================================================
// updateAll
// ============================================================

#[test]
fn update_all_accrues_then_distributes() {
    let mut world = world();
    setup_main(&mut world, default_policy());
    add_members(&mut world, &[MEMBER_A, MEMBER_B, MEMBER_C], &[100, 50, 100], T0);
    attach_main_split(&mut world);

    world.current_block().block_timestamp(T0 + 30 * DAY);
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_all(0u64, accounts(&[MEMBER_A, MEMBER_B, MEMBER_C]), 0u32)
        .run();

    assert_eq!(seconds_active(&mut world, MAIN, MEMBER_A), 2_592_000);
    assert_eq!(seconds_active(&mut world, MAIN, MEMBER_B), 1_296_000);
    assert_eq!(seconds_active(&mut world, MAIN, MEMBER_C), 2_592_000);
    assert_eq!(last_activity_update(&mut world, MAIN), T0 + 30 * DAY);

    let (_, percentages) = split_distribution(&mut world, SPLIT_A);
    assert_eq!(percentages, vec![400_000, 200_000, 400_000]);
}

#[test]
fn update_all_is_atomic() {
    let mut world = world();
    setup_main(&mut world, default_policy());
    add_members(&mut world, &[MEMBER_A, MEMBER_B], &[100, 100], T0);
    attach_main_split(&mut world);
    world.current_block().block_timestamp(T0 + DAY);

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_all(0u64, accounts(&[MEMBER_B, MEMBER_A]), 0u32)
        .returns(ExpectMessage("Accounts out of order or invalid"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_all(0u64, accounts(&[MEMBER_A, MEMBER_B]), 200_000u32)
        .returns(ExpectMessage("Invalid distributor fee"))
        .run();

    assert_eq!(last_activity_update(&mut world, MAIN), 0);
    assert_eq!(seconds_active(&mut world, MAIN, MEMBER_A), 0);
}

#[test]
fn update_all_sees_contributions_accrued_in_the_same_call() {
    let mut world = world();
    setup_main(&mut world, default_policy());
    add_members(&mut world, &[MEMBER_A], &[100], T0);
    attach_main_split(&mut world);

    // nothing accrued before the call: plain updateSplits would be empty
    world.current_block().block_timestamp(T0 + DAY);
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_all(0u64, accounts(&[MEMBER_A]), 0u32)
        .run();

    let (recipients, percentages) = split_distribution(&mut world, SPLIT_A);
    assert_eq!(recipients, addresses(&[MEMBER_A]));
    assert_eq!(percentages, vec![PERCENTAGE_SCALE]);
}

// ============================================================
// Split control handoff and forwarded calls
// ============================================================

#[test]
fn split_control_can_be_offered_and_withdrawn() {
    let mut world = accrued_world(default_policy());
    attach_main_split(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .transfer_split_control(ManagedAddress::<StaticApi>::zero())
        .returns(ExpectMessage("Invalid address"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .transfer_split_control(managed(OWNER.to_address()))
        .run();
    let pending = world
        .query()
        .to(SPLIT_A)
        .typed(SplitWalletMockProxy)
        .get_pending_controller()
        .returns(ReturnsResult)
        .run();
    assert_eq!(pending, managed(OWNER.to_address()));

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .cancel_split_control_transfer()
        .run();
    let pending = world
        .query()
        .to(SPLIT_A)
        .typed(SplitWalletMockProxy)
        .get_pending_controller()
        .returns(ReturnsResult)
        .run();
    assert!(pending.is_zero());

    // hand control away for good: the registry can no longer push splits
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .transfer_split_control(managed(OWNER.to_address()))
        .run();
    world
        .tx()
        .from(OWNER)
        .to(SPLIT_A)
        .typed(SplitWalletMockProxy)
        .accept_control()
        .run();
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_splits(accounts(&[MEMBER_A, MEMBER_B, MEMBER_C]), 0u32)
        .returns(ExpectMessage("Split control not handed over"))
        .run();

    // and take it back through acceptSplitControl
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .accept_split_control()
        .returns(ExpectMessage("Split control not handed over"))
        .run();
    world
        .tx()
        .from(OWNER)
        .to(SPLIT_A)
        .typed(SplitWalletMockProxy)
        .transfer_control(managed(MAIN.to_address()))
        .run();
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .accept_split_control()
        .run();
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_splits(accounts(&[MEMBER_A, MEMBER_B, MEMBER_C]), 0u32)
        .run();
}

#[test]
fn split_wallet_calls_are_forwarded() {
    let mut world = accrued_world(default_policy());
    attach_main_split(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .execute_split_wallet_calls(split_wallet_calls(2, 0))
        .run();
    assert_eq!(exec_call_count(&mut world, SPLIT_A), 2);

    // more EGLD than the wallet holds: the wallet's failure surfaces here
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .execute_split_wallet_calls(split_wallet_calls(1, 1))
        .returns(ExpectMessage("Insufficient balance"))
        .run();
    assert_eq!(exec_call_count(&mut world, SPLIT_A), 2);
}
