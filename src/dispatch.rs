multiversx_sc::imports!();

use crate::actions::SyncAction;
use crate::connext_proxy;
use crate::errors::{RegistryError, ERR_MAIN_ONLY};
use crate::types::{Member, ReplicaConfig, SplitWalletCall};

// ============================================================
// Sync dispatcher (main)
//
// Every `sync*` endpoint takes the destination chain ids and one
// relayer fee per destination, paid out of the attached EGLD.
// Ledger and split operations run locally first; the remaining
// ones only manage replicas and are sent as-is.
// ============================================================

#[multiversx_sc::module]
pub trait DispatchModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::role::RoleModule
    + crate::ledger::LedgerModule
    + crate::splits::SplitsModule
    + crate::receiver::ReceiverModule
{
    // ========================================================
    // Ledger + splits: local first, then relayed
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(syncAddMembers)]
    fn sync_add_members(
        &self,
        accounts: ManagedVec<ManagedAddress>,
        activity_multipliers: ManagedVec<u32>,
        start_dates: ManagedVec<u64>,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let action = SyncAction::AddMembers {
            accounts,
            activity_multipliers,
            start_dates,
        };
        self.apply_and_dispatch(action, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncUpdateMembersActivity)]
    fn sync_update_members_activity(
        &self,
        accounts: ManagedVec<ManagedAddress>,
        activity_multipliers: ManagedVec<u32>,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let action = SyncAction::UpdateMembersActivity {
            accounts,
            activity_multipliers,
        };
        self.apply_and_dispatch(action, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncRemoveMembers)]
    fn sync_remove_members(
        &self,
        accounts: ManagedVec<ManagedAddress>,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        self.apply_and_dispatch(SyncAction::RemoveMembers { accounts }, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncAccrueActivity)]
    fn sync_accrue_activity(
        &self,
        cutoff: u64,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let cutoff = self.pin_cutoff(cutoff);
        self.apply_and_dispatch(SyncAction::AccrueActivity { cutoff }, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncUpdateSplits)]
    fn sync_update_splits(
        &self,
        sorted_accounts: ManagedVec<ManagedAddress>,
        distributor_fee: u32,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let action = SyncAction::UpdateSplits {
            sorted_accounts,
            distributor_fee,
        };
        self.apply_and_dispatch(action, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncUpdateAll)]
    fn sync_update_all(
        &self,
        cutoff: u64,
        sorted_accounts: ManagedVec<ManagedAddress>,
        distributor_fee: u32,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let action = SyncAction::UpdateAll {
            cutoff: self.pin_cutoff(cutoff),
            sorted_accounts,
            distributor_fee,
        };
        self.apply_and_dispatch(action, &chain_ids, &relayer_fees);
    }

    /// Re-sends full member records (all members when `accounts` is
    /// empty) together with the current accrual point.
    #[payable("EGLD")]
    #[endpoint(syncNetworkMemberRegistry)]
    fn sync_network_member_registry(
        &self,
        accounts: ManagedVec<ManagedAddress>,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let mut members = ManagedVec::<Self::Api, Member<Self::Api>>::new();
        if accounts.is_empty() {
            for account in self.members().iter() {
                members.push(self.member(&account).get());
            }
        } else {
            for account in accounts.iter() {
                members.push(self.get_member(account.clone_value()));
            }
        }

        let action = SyncAction::SyncMemberRegistry {
            members,
            last_activity_update: self.last_activity_update().get(),
        };
        self.dispatch_only(action, &chain_ids, &relayer_fees);
    }

    // ========================================================
    // Replica management: relayed only
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(syncSetUpdaterConfig)]
    fn sync_set_updater_config(
        &self,
        connext: ManagedAddress,
        updater_domain: u32,
        updater: ManagedAddress,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let action = SyncAction::SetUpdaterConfig {
            connext,
            updater_domain,
            updater,
        };
        self.dispatch_only(action, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncSetSplit)]
    fn sync_set_split(
        &self,
        split_wallet: ManagedAddress,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        self.dispatch_only(SyncAction::SetSplit { split_wallet }, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncAcceptSplitControl)]
    fn sync_accept_split_control(
        &self,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        self.dispatch_only(SyncAction::AcceptSplitControl, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncTransferSplitControl)]
    fn sync_transfer_split_control(
        &self,
        new_controller: ManagedAddress,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let action = SyncAction::TransferSplitControl { new_controller };
        self.dispatch_only(action, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncCancelSplitControlTransfer)]
    fn sync_cancel_split_control_transfer(
        &self,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        self.dispatch_only(SyncAction::CancelSplitControlTransfer, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncExecuteSplitWalletCalls)]
    fn sync_execute_split_wallet_calls(
        &self,
        calls: ManagedVec<SplitWalletCall<Self::Api>>,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        self.dispatch_only(SyncAction::ExecuteSplitWalletCalls { calls }, &chain_ids, &relayer_fees);
    }

    #[payable("EGLD")]
    #[endpoint(syncUpgradeReplica)]
    fn sync_upgrade_replica(
        &self,
        source: ManagedAddress,
        code_metadata: CodeMetadata,
        chain_ids: ManagedVec<u32>,
        relayer_fees: ManagedVec<BigUint>,
    ) {
        let action = SyncAction::UpgradeImplementation {
            source,
            code_metadata,
        };
        self.dispatch_only(action, &chain_ids, &relayer_fees);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn apply_and_dispatch(
        &self,
        action: SyncAction<Self::Api>,
        chain_ids: &ManagedVec<u32>,
        relayer_fees: &ManagedVec<BigUint>,
    ) {
        let replicas = self.require_dispatch(chain_ids, relayer_fees);
        let result = self.apply_sync_action(&action);
        self.ok_or_panic(result);
        self.dispatch_action(&action, chain_ids, &replicas, relayer_fees);
    }

    fn dispatch_only(
        &self,
        action: SyncAction<Self::Api>,
        chain_ids: &ManagedVec<u32>,
        relayer_fees: &ManagedVec<BigUint>,
    ) {
        let replicas = self.require_dispatch(chain_ids, relayer_fees);
        self.dispatch_action(&action, chain_ids, &replicas, relayer_fees);
    }

    /// Checks caller, fees and destinations; returns the destination
    /// replicas in `chain_ids` order.
    fn require_dispatch(
        &self,
        chain_ids: &ManagedVec<u32>,
        relayer_fees: &ManagedVec<BigUint>,
    ) -> ManagedVec<ReplicaConfig<Self::Api>> {
        require!(!self.is_replica(), ERR_MAIN_ONLY);
        self.require_owner();

        if chain_ids.len() != relayer_fees.len() {
            self.ok_or_panic(Err(RegistryError::ParamsSizeMismatch));
        }

        let mut total_fees = BigUint::zero();
        for fee in relayer_fees.iter() {
            total_fees += &*fee;
        }
        let payment = self.call_value().egld_value().clone_value();
        if total_fees > payment {
            self.ok_or_panic(Err(RegistryError::ValueSentLessThanRelayerFees));
        }

        let mut replicas = ManagedVec::new();
        for chain_id in chain_ids.iter() {
            let mapper = self.replicas(chain_id);
            if mapper.is_empty() {
                self.ok_or_panic(Err(RegistryError::NoReplicaOnNetwork(chain_id)));
            }
            replicas.push(mapper.get());
        }
        replicas
    }

    fn dispatch_action(
        &self,
        action: &SyncAction<Self::Api>,
        chain_ids: &ManagedVec<u32>,
        replicas: &ManagedVec<ReplicaConfig<Self::Api>>,
        relayer_fees: &ManagedVec<BigUint>,
    ) {
        if chain_ids.is_empty() {
            return;
        }

        let call_data = self.encode_action(action);
        let selector = action.selector();
        let connext = self.updater_config().get().connext;

        for (index, replica) in replicas.iter().enumerate() {
            let chain_id = chain_ids.get(index);
            let relayer_fee = relayer_fees.get(index).clone_value();

            let message_id = self
                .tx()
                .to(&connext)
                .typed(connext_proxy::ConnextProxy)
                .xcall(
                    replica.domain_id,
                    &replica.registry_address,
                    &replica.delegate,
                    &call_data,
                )
                .egld(relayer_fee)
                .returns(ReturnsResult)
                .sync_call();

            self.sync_message_submitted_event(
                &message_id,
                chain_id,
                &selector,
                &replica.registry_address,
            );
        }
    }

    fn encode_action(&self, action: &SyncAction<Self::Api>) -> ManagedBuffer {
        let mut call_data = ManagedBuffer::new();
        if action.top_encode(&mut call_data).is_err() {
            sc_panic!("Sync action encoding failed");
        }
        call_data
    }

    /// A relayed `0` would resolve to each replica's own delivery time.
    fn pin_cutoff(&self, cutoff: u64) -> u64 {
        if cutoff == 0 {
            self.blockchain().get_block_timestamp()
        } else {
            cutoff
        }
    }
}
