multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Constants
// ============================================================

/// Activity multiplier of a fully active member (percentage of elapsed time)
pub const MAX_ACTIVITY_MULTIPLIER: u32 = 100;

/// Fixed-point base of split allocations: 1_000_000 = 100.0000%
pub const PERCENTAGE_SCALE: u32 = 1_000_000;

/// Largest distributor fee the split wallet accepts: 10% of PERCENTAGE_SCALE
pub const MAX_DISTRIBUTOR_FEE: u32 = 100_000;

/// Gas for a replayed split wallet batch, and what is kept back for its callback
pub const SPLIT_WALLET_CALLS_GAS: u64 = 20_000_000;
pub const SPLIT_WALLET_CALLBACK_GAS: u64 = 5_000_000;

// ============================================================
// Member: one ledger entry per registered account
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct Member<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    /// 0..=100. Zero only ever persists under `DeactivationPolicy::RetainInactive`.
    pub activity_multiplier: u32,
    pub start_date: u64,
    /// Effective active seconds credited up to `lastActivityUpdate`
    pub seconds_active: u64,
}

impl<M: ManagedTypeApi> Member<M> {
    pub fn is_active(&self) -> bool {
        self.activity_multiplier > 0
    }
}

// ============================================================
// Replica: where a main registry relays its updates
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct ReplicaConfig<M: ManagedTypeApi> {
    /// Bridge domain of the network hosting the replica
    pub domain_id: u32,
    pub registry_address: ManagedAddress<M>,
    /// Address allowed to act on failed deliveries on the destination network
    pub delegate: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> ReplicaConfig<M> {
    pub fn empty() -> Self {
        ReplicaConfig {
            domain_id: 0,
            registry_address: ManagedAddress::zero(),
            delegate: ManagedAddress::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.domain_id == 0 && self.registry_address.is_zero() && self.delegate.is_zero()
    }

    /// Either fully registered, or the all-zero value that clears a registration.
    pub fn is_well_formed(&self) -> bool {
        if self.domain_id == 0 {
            self.is_empty()
        } else {
            !self.registry_address.is_zero()
        }
    }
}

// ============================================================
// Updater config: decides whether an instance is main or replica
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct UpdaterConfig<M: ManagedTypeApi> {
    /// Bridge contract delivering inbound messages and accepting outbound ones
    pub connext: ManagedAddress<M>,
    /// Origin domain of the main registry (0 on a main registry)
    pub updater_domain: u32,
    /// Main registry address on `updater_domain` (zero on a main registry)
    pub updater: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> UpdaterConfig<M> {
    pub fn is_replica(&self) -> bool {
        self.updater_domain != 0 && !self.updater.is_zero()
    }

    pub fn is_main(&self) -> bool {
        self.updater_domain == 0 && self.updater.is_zero()
    }
}

// ============================================================
// Policy: behavioral variants, fixed at deployment
// ============================================================

/// What happens to a member whose activity multiplier is set to 0.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum DeactivationPolicy {
    /// The entry, including its accrued seconds, is deleted.
    RemoveMember,
    /// The entry stays with multiplier 0 and accrues nothing further.
    RetainInactive,
}

/// Who receives the rounding residual of a split allocation.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum DustPolicy {
    /// First recipient in ascending account order.
    FirstRecipient,
    /// Recipient with the smallest contribution (first one on ties).
    SmallestContribution,
}

/// How accrued seconds translate into a contribution score.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ContributionCurve {
    Linear,
    SquareRoot,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct RegistryPolicy {
    pub deactivation: DeactivationPolicy,
    pub dust: DustPolicy,
    pub contribution: ContributionCurve,
}

// ============================================================
// Split wallet call: forwarded through the split wallet
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct SplitWalletCall<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub egld_value: BigUint<M>,
    pub endpoint_name: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}
