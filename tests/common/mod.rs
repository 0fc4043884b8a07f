#![allow(dead_code)]

use bridge_mock::{bridge_mock_proxy::BridgeMockProxy, OutboundMessage};
use multiversx_sc_scenario::imports::*;
pub use multiversx_sc_scenario::scenario_model::Log;
use network_registry::network_registry_proxy::NetworkRegistryProxy;
use network_registry::types::{
    ContributionCurve, DeactivationPolicy, DustPolicy, Member, RegistryPolicy, SplitWalletCall,
};
use split_wallet_mock::split_wallet_mock_proxy::SplitWalletMockProxy;

pub const REGISTRY_CODE: MxscPath = MxscPath::new("output/network-registry.mxsc.json");
pub const BRIDGE_CODE: MxscPath =
    MxscPath::new("test-contracts/bridge-mock/output/bridge-mock.mxsc.json");
pub const SPLIT_WALLET_CODE: MxscPath =
    MxscPath::new("test-contracts/split-wallet-mock/output/split-wallet-mock.mxsc.json");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const STRANGER: TestAddress = TestAddress::new("stranger");
pub const RELAYER: TestAddress = TestAddress::new("relayer");
pub const DELEGATE: TestAddress = TestAddress::new("delegate");

// ascending byte order: a < b < c < d
pub const MEMBER_A: TestAddress = TestAddress::new("member-a");
pub const MEMBER_B: TestAddress = TestAddress::new("member-b");
pub const MEMBER_C: TestAddress = TestAddress::new("member-c");
pub const MEMBER_D: TestAddress = TestAddress::new("member-d");

pub const MAIN: TestSCAddress = TestSCAddress::new("main-registry");
pub const REPLICA: TestSCAddress = TestSCAddress::new("replica-registry");
pub const BRIDGE_A: TestSCAddress = TestSCAddress::new("bridge-a");
pub const BRIDGE_B: TestSCAddress = TestSCAddress::new("bridge-b");
pub const SPLIT_A: TestSCAddress = TestSCAddress::new("split-a");
pub const SPLIT_B: TestSCAddress = TestSCAddress::new("split-b");

pub const DOMAIN_A: u32 = 1_111;
pub const DOMAIN_B: u32 = 2_222;
/// Destination key under which the main registry knows the replica.
pub const CHAIN_B: u32 = 42;

pub const T0: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;
pub const RELAYER_FEE: u64 = 1_000;
pub const PERCENTAGE_SCALE: u32 = 1_000_000;

pub fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(REGISTRY_CODE, network_registry::ContractBuilder);
    world.register_contract(BRIDGE_CODE, bridge_mock::ContractBuilder);
    world.register_contract(SPLIT_WALLET_CODE, split_wallet_mock::ContractBuilder);
    world
}

pub fn policy(deactivation: DeactivationPolicy, dust: DustPolicy) -> RegistryPolicy {
    RegistryPolicy {
        deactivation,
        dust,
        contribution: ContributionCurve::Linear,
    }
}

pub fn default_policy() -> RegistryPolicy {
    policy(DeactivationPolicy::RemoveMember, DustPolicy::FirstRecipient)
}

// ============================================================
// Argument builders
// ============================================================

pub fn managed(address: Address) -> ManagedAddress<StaticApi> {
    ManagedAddress::from_address(&address)
}

pub fn accounts(list: &[TestAddress]) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    let mut result = ManagedVec::new();
    for account in list {
        result.push(managed(account.to_address()));
    }
    result
}

pub fn u32s(values: &[u32]) -> ManagedVec<StaticApi, u32> {
    let mut result = ManagedVec::new();
    for value in values {
        result.push(*value);
    }
    result
}

pub fn u64s(values: &[u64]) -> ManagedVec<StaticApi, u64> {
    let mut result = ManagedVec::new();
    for value in values {
        result.push(*value);
    }
    result
}

pub fn fees(values: &[u64]) -> ManagedVec<StaticApi, BigUint<StaticApi>> {
    let mut result = ManagedVec::new();
    for value in values {
        result.push(BigUint::from(*value));
    }
    result
}

pub fn fee_payment(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount)
}

/// Lowercase hex, as rendered in "Member not registered" messages.
pub fn hex(address: Address) -> String {
    address
        .as_bytes()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

// ============================================================
// Deployments
// ============================================================

/// Main registry on domain A with its bridge, at `T0`.
pub fn setup_main(world: &mut ScenarioWorld, policy: RegistryPolicy) {
    world.current_block().block_timestamp(T0);
    world.account(OWNER).nonce(1).balance(1_000_000_000u64);
    world.account(STRANGER).nonce(1).balance(1_000_000_000u64);
    world.account(RELAYER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(BridgeMockProxy)
        .init(DOMAIN_A)
        .code(BRIDGE_CODE)
        .new_address(BRIDGE_A)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(NetworkRegistryProxy)
        .init(
            managed(OWNER.to_address()),
            managed(BRIDGE_A.to_address()),
            0u32,
            ManagedAddress::<StaticApi>::zero(),
            policy,
        )
        .code(REGISTRY_CODE)
        .new_address(MAIN)
        .run();
}

/// Replica on domain B following the main registry, registered on the
/// main registry under `CHAIN_B`. The replica keeps no owner.
pub fn setup_replica(world: &mut ScenarioWorld, policy: RegistryPolicy) {
    world
        .tx()
        .from(OWNER)
        .typed(BridgeMockProxy)
        .init(DOMAIN_B)
        .code(BRIDGE_CODE)
        .new_address(BRIDGE_B)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(NetworkRegistryProxy)
        .init(
            ManagedAddress::<StaticApi>::zero(),
            managed(BRIDGE_B.to_address()),
            DOMAIN_A,
            managed(MAIN.to_address()),
            policy,
        )
        .code(REGISTRY_CODE)
        .new_address(REPLICA)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .update_network_registry(
            CHAIN_B,
            DOMAIN_B,
            managed(REPLICA.to_address()),
            managed(DELEGATE.to_address()),
        )
        .run();
}

/// Split wallet controlled by OWNER, with control offered to `registry`.
pub fn deploy_split_wallet(world: &mut ScenarioWorld, split: TestSCAddress, registry: TestSCAddress) {
    world
        .tx()
        .from(OWNER)
        .typed(SplitWalletMockProxy)
        .init(managed(OWNER.to_address()))
        .code(SPLIT_WALLET_CODE)
        .new_address(split)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(split)
        .typed(SplitWalletMockProxy)
        .transfer_control(managed(registry.to_address()))
        .run();
}

/// Deploys SPLIT_A and attaches it to the main registry.
pub fn attach_main_split(world: &mut ScenarioWorld) {
    deploy_split_wallet(world, SPLIT_A, MAIN);
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .set_split(managed(SPLIT_A.to_address()))
        .run();
}

pub fn add_members(world: &mut ScenarioWorld, list: &[TestAddress], multipliers: &[u32], start: u64) {
    let start_dates: Vec<u64> = list.iter().map(|_| start).collect();
    world
        .tx()
        .from(OWNER)
        .to(MAIN)
        .typed(NetworkRegistryProxy)
        .add_members(accounts(list), u32s(multipliers), u64s(&start_dates))
        .run();
}

// ============================================================
// Relaying
// ============================================================

pub fn outbound_count(world: &mut ScenarioWorld, bridge: TestSCAddress) -> usize {
    world
        .query()
        .to(bridge)
        .typed(BridgeMockProxy)
        .outbound_count()
        .returns(ReturnsResult)
        .run()
}

pub fn outbound(world: &mut ScenarioWorld, bridge: TestSCAddress, index: usize) -> OutboundMessage<StaticApi> {
    world
        .query()
        .to(bridge)
        .typed(BridgeMockProxy)
        .get_outbound(index)
        .returns(ReturnsResult)
        .run()
}

/// Hands one message to bridge B and checks the replica accepted it.
/// Returns every log of the delivery, replica events included.
pub fn deliver(world: &mut ScenarioWorld, message: OutboundMessage<StaticApi>) -> Vec<Log> {
    let message_id = message.message_id.clone();
    let logs = world
        .tx()
        .from(RELAYER)
        .to(BRIDGE_B)
        .typed(BridgeMockProxy)
        .deliver(
            message.message_id,
            DOMAIN_A,
            message.origin_sender,
            message.to,
            message.call_data,
        )
        .returns(ReturnsLogs)
        .run();
    assert_eq!(delivery_error(world, BRIDGE_B, message_id), "");
    logs
}

/// What the target reverted with on the last delivery of `transfer_id`.
pub fn delivery_error(
    world: &mut ScenarioWorld,
    bridge: TestSCAddress,
    transfer_id: ManagedByteArray<StaticApi, 32>,
) -> String {
    let error = world
        .query()
        .to(bridge)
        .typed(BridgeMockProxy)
        .delivery_error(transfer_id)
        .returns(ReturnsResult)
        .run();
    String::from_utf8(error.to_vec()).unwrap_or_default()
}

/// Delivers, in order, every message bridge A queued after the first
/// `delivered` ones; returns the new delivered count.
pub fn relay(world: &mut ScenarioWorld, delivered: usize) -> usize {
    let count = outbound_count(world, BRIDGE_A);
    for index in delivered + 1..=count {
        let message = outbound(world, BRIDGE_A, index);
        assert_eq!(message.destination, DOMAIN_B);
        deliver(world, message);
    }
    count
}

// ============================================================
// Events
// ============================================================

pub fn events<'a>(logs: &'a [Log], identifier: &str) -> Vec<&'a Log> {
    logs.iter()
        .filter(|log| log.topics.first().map(Vec::as_slice) == Some(identifier.as_bytes()))
        .collect()
}

/// `(action, success)` of every `syncActionPerformed` in `logs`.
pub fn performed_actions(logs: &[Log]) -> Vec<(String, bool)> {
    events(logs, "syncActionPerformed")
        .into_iter()
        .map(|log| {
            let action = String::from_utf8(log.topics[3].clone()).unwrap_or_default();
            // top-encoded bool: true is [1], false is empty
            (action, log.topics[4] == [1u8])
        })
        .collect()
}

/// Reasons carried by every `syncActionFailed` in `logs`.
pub fn failure_reasons(logs: &[Log]) -> Vec<String> {
    events(logs, "syncActionFailed")
        .into_iter()
        .map(|log| String::from_utf8(log.data[0].clone()).unwrap_or_default())
        .collect()
}

// ============================================================
// Reads
// ============================================================

pub fn member(world: &mut ScenarioWorld, registry: TestSCAddress, account: TestAddress) -> Member<StaticApi> {
    world
        .query()
        .to(registry)
        .typed(NetworkRegistryProxy)
        .get_member(managed(account.to_address()))
        .returns(ReturnsResult)
        .run()
}

pub fn seconds_active(world: &mut ScenarioWorld, registry: TestSCAddress, account: TestAddress) -> u64 {
    member(world, registry, account).seconds_active
}

pub fn is_member(world: &mut ScenarioWorld, registry: TestSCAddress, account: TestAddress) -> bool {
    world
        .query()
        .to(registry)
        .typed(NetworkRegistryProxy)
        .is_member(managed(account.to_address()))
        .returns(ReturnsResult)
        .run()
}

pub fn total_members(world: &mut ScenarioWorld, registry: TestSCAddress) -> u64 {
    world
        .query()
        .to(registry)
        .typed(NetworkRegistryProxy)
        .total_members()
        .returns(ReturnsResult)
        .run()
}

pub fn total_active_members(world: &mut ScenarioWorld, registry: TestSCAddress) -> u64 {
    world
        .query()
        .to(registry)
        .typed(NetworkRegistryProxy)
        .total_active_members()
        .returns(ReturnsResult)
        .run()
}

pub fn last_activity_update(world: &mut ScenarioWorld, registry: TestSCAddress) -> u64 {
    world
        .query()
        .to(registry)
        .typed(NetworkRegistryProxy)
        .last_activity_update()
        .returns(ReturnsResult)
        .run()
}

/// `calculate` as plain vectors.
pub fn calculate(
    world: &mut ScenarioWorld,
    registry: TestSCAddress,
    sorted: &[TestAddress],
) -> (Vec<Address>, Vec<u32>) {
    let (recipients, percentages) = world
        .query()
        .to(registry)
        .typed(NetworkRegistryProxy)
        .calculate(accounts(sorted))
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    (
        recipients.iter().map(|address| address.to_address()).collect(),
        percentages.iter().collect(),
    )
}

pub fn split_distribution(world: &mut ScenarioWorld, split: TestSCAddress) -> (Vec<Address>, Vec<u32>) {
    let recipients = world
        .query()
        .to(split)
        .typed(SplitWalletMockProxy)
        .recipients()
        .returns(ReturnsResult)
        .run();
    let percentages = world
        .query()
        .to(split)
        .typed(SplitWalletMockProxy)
        .percent_allocations()
        .returns(ReturnsResult)
        .run();
    (
        recipients.iter().map(|address| address.to_address()).collect(),
        percentages.iter().collect(),
    )
}

pub fn split_distribution_hash(world: &mut ScenarioWorld, split: TestSCAddress) -> Vec<u8> {
    let hash = world
        .query()
        .to(split)
        .typed(SplitWalletMockProxy)
        .get_distribution_hash()
        .returns(ReturnsResult)
        .run();
    hash.to_byte_array().to_vec()
}

pub fn exec_call_count(world: &mut ScenarioWorld, split: TestSCAddress) -> u64 {
    world
        .query()
        .to(split)
        .typed(SplitWalletMockProxy)
        .exec_call_count()
        .returns(ReturnsResult)
        .run()
}

pub fn split_wallet_calls(count: usize, egld_value: u64) -> ManagedVec<StaticApi, SplitWalletCall<StaticApi>> {
    let mut calls = ManagedVec::new();
    for _ in 0..count {
        calls.push(SplitWalletCall {
            to: managed(DELEGATE.to_address()),
            egld_value: BigUint::from(egld_value),
            endpoint_name: ManagedBuffer::from("ping"),
            arguments: ManagedVec::new(),
        });
    }
    calls
}
