multiversx_sc::imports!();

use crate::types::{Member, RegistryPolicy, ReplicaConfig, UpdaterConfig};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Authority ──

    /// Zero once renounced (replicas only).
    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getUpdaterConfig)]
    #[storage_mapper("updaterConfig")]
    fn updater_config(&self) -> SingleValueMapper<UpdaterConfig<Self::Api>>;

    #[view(getPolicy)]
    #[storage_mapper("policy")]
    fn policy(&self) -> SingleValueMapper<RegistryPolicy>;

    // ── Member ledger ──

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("member")]
    fn member(&self, account: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    #[view(totalActiveMembers)]
    #[storage_mapper("activeMembers")]
    fn active_members(&self) -> SingleValueMapper<u64>;

    #[view(lastActivityUpdate)]
    #[storage_mapper("lastActivityUpdate")]
    fn last_activity_update(&self) -> SingleValueMapper<u64>;

    // ── Replicas (main only) ──

    #[storage_mapper("replicas")]
    fn replicas(&self, chain_id: u32) -> SingleValueMapper<ReplicaConfig<Self::Api>>;

    // ── Split wallet ──

    #[storage_mapper("splitWallet")]
    fn split_wallet(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Split wallet state, read in place ──
    //
    // Same keys as the split wallet's own storage. An address that is not
    // a split wallet reads as empty.

    #[storage_mapper_from_address("controller")]
    fn split_wallet_controller(
        &self,
        split_wallet: ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    #[storage_mapper_from_address("pendingController")]
    fn split_wallet_pending_controller(
        &self,
        split_wallet: ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    #[storage_mapper_from_address("distributionHash")]
    fn split_wallet_distribution_hash(
        &self,
        split_wallet: ManagedAddress,
    ) -> SingleValueMapper<ManagedByteArray<Self::Api, 32>, ManagedAddress>;
}
