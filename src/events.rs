multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Member ledger ──

    #[event("memberAdded")]
    fn member_added_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] start_date: u64,
        activity_multiplier: u32,
    );

    #[event("memberUpdated")]
    fn member_updated_event(&self, #[indexed] account: &ManagedAddress, activity_multiplier: u32);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] account: &ManagedAddress);

    /// One per member on every accrual.
    #[event("memberActivityUpdated")]
    fn member_activity_updated_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] activity_multiplier: u32,
        seconds_active: u64,
    );

    #[event("registryActivityUpdate")]
    fn registry_activity_update_event(&self, #[indexed] cutoff: u64, total_members: u64);

    // ── Split wallet ──

    #[event("splitsDistributionUpdated")]
    fn splits_distribution_updated_event(
        &self,
        #[indexed] split_wallet: &ManagedAddress,
        #[indexed] distribution_hash: &ManagedByteArray<Self::Api, 32>,
        distributor_fee: u32,
    );

    #[event("splitUpdated")]
    fn split_updated_event(&self, #[indexed] split_wallet: &ManagedAddress);

    #[event("splitControlTransferred")]
    fn split_control_transferred_event(
        &self,
        #[indexed] split_wallet: &ManagedAddress,
        new_controller: &ManagedAddress,
    );

    #[event("splitControlAccepted")]
    fn split_control_accepted_event(&self, #[indexed] split_wallet: &ManagedAddress);

    #[event("splitControlTransferCancelled")]
    fn split_control_transfer_cancelled_event(&self, #[indexed] split_wallet: &ManagedAddress);

    #[event("splitWalletCallsExecuted")]
    fn split_wallet_calls_executed_event(
        &self,
        #[indexed] split_wallet: &ManagedAddress,
        call_count: usize,
    );

    // ── Role ──

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        new_owner: &ManagedAddress,
    );

    #[event("newUpdaterConfig")]
    fn new_updater_config_event(
        &self,
        #[indexed] connext: &ManagedAddress,
        #[indexed] updater_domain: u32,
        updater: &ManagedAddress,
    );

    #[event("networkRegistryUpdated")]
    fn network_registry_updated_event(
        &self,
        #[indexed] chain_id: u32,
        #[indexed] registry_address: &ManagedAddress,
        #[indexed] domain_id: u32,
        delegate: &ManagedAddress,
    );

    #[event("replicaUpgradeRequested")]
    fn replica_upgrade_requested_event(
        &self,
        #[indexed] source: &ManagedAddress,
        code_metadata: CodeMetadata,
    );

    // ── Sync channel ──

    #[event("syncMessageSubmitted")]
    fn sync_message_submitted_event(
        &self,
        #[indexed] message_id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] chain_id: u32,
        #[indexed] action: &ManagedBuffer,
        target: &ManagedAddress,
    );

    /// `success == false` records an action that was delivered but not applied.
    #[event("syncActionPerformed")]
    fn sync_action_performed_event(
        &self,
        #[indexed] message_id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] origin_domain: u32,
        #[indexed] action: &ManagedBuffer,
        #[indexed] success: bool,
        origin_sender: &ManagedAddress,
    );

    /// Companion of a `success == false` syncActionPerformed.
    #[event("syncActionFailed")]
    fn sync_action_failed_event(
        &self,
        #[indexed] message_id: &ManagedByteArray<Self::Api, 32>,
        reason: &ManagedBuffer,
    );
}
