multiversx_sc::imports!();

use crate::actions::{SyncAction, ACTION_EXECUTE_SPLIT_WALLET_CALLS};
use crate::errors::{RegistryError, ERR_UNAUTHORIZED_CALLDATA, ERR_UNAUTHORIZED_SYNC_CALLER};
use crate::split_wallet_proxy;
use crate::types::{
    SplitWalletCall, UpdaterConfig, SPLIT_WALLET_CALLBACK_GAS, SPLIT_WALLET_CALLS_GAS,
};

// ============================================================
// Sync receiver (replica)
//
// Only two things revert an inbound message: a caller other than
// the configured updater channel, and a payload that is not a
// SyncAction. Everything past that point is reported through
// `syncActionPerformed` and the message counts as delivered.
// Forwarded split wallet batches report from their callback.
// ============================================================

#[multiversx_sc::module]
pub trait ReceiverModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::role::RoleModule
    + crate::ledger::LedgerModule
    + crate::splits::SplitsModule
{
    #[endpoint(xReceive)]
    fn x_receive(
        &self,
        transfer_id: ManagedByteArray<Self::Api, 32>,
        origin_domain: u32,
        origin_sender: ManagedAddress,
        call_data: ManagedBuffer,
    ) {
        let config = self.updater_config().get();
        let caller = self.blockchain().get_caller();
        require!(
            config.is_replica()
                && caller == config.connext
                && origin_domain == config.updater_domain
                && origin_sender == config.updater,
            ERR_UNAUTHORIZED_SYNC_CALLER
        );

        let action = match SyncAction::<Self::Api>::top_decode(call_data) {
            Ok(action) => action,
            Err(_) => sc_panic!(ERR_UNAUTHORIZED_CALLDATA),
        };

        if let SyncAction::ExecuteSplitWalletCalls { calls } = &action {
            match self.controlled_split_wallet() {
                Ok(split_wallet) => self.replay_split_wallet_calls(
                    transfer_id,
                    origin_domain,
                    origin_sender,
                    split_wallet,
                    calls,
                ),
                Err(err) => self.report_sync_action(
                    &transfer_id,
                    origin_domain,
                    &action.selector(),
                    &origin_sender,
                    Err(err),
                ),
            }
            return;
        }

        let result = self.apply_sync_action(&action);
        let success = result.is_ok();
        self.report_sync_action(
            &transfer_id,
            origin_domain,
            &action.selector(),
            &origin_sender,
            result,
        );

        if let (true, SyncAction::UpgradeImplementation { source, code_metadata }) =
            (success, action)
        {
            self.upgrade_from_source(source, code_metadata);
        }
    }

    /// Outcome of a forwarded split wallet batch. The delivery has already
    /// completed, so a failure here is only reported.
    #[promises_callback]
    fn split_wallet_calls_callback(
        &self,
        #[call_result] result: ManagedAsyncCallResult<IgnoreValue>,
        transfer_id: ManagedByteArray<Self::Api, 32>,
        origin_domain: u32,
        origin_sender: ManagedAddress,
        split_wallet: ManagedAddress,
        call_count: usize,
    ) {
        let outcome = match result {
            ManagedAsyncCallResult::Ok(_) => {
                self.split_wallet_calls_executed_event(&split_wallet, call_count);
                Ok(())
            },
            ManagedAsyncCallResult::Err(err) => {
                Err(RegistryError::SplitWalletCallFailed(err.err_msg))
            },
        };
        let selector = ManagedBuffer::from(ACTION_EXECUTE_SPLIT_WALLET_CALLS);
        self.report_sync_action(&transfer_id, origin_domain, &selector, &origin_sender, outcome);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Runs one action against the local ledger and split wallet.
    ///
    /// Shared by the receiver and by the main registry's local-first
    /// sync endpoints, so both sides execute the exact same code.
    fn apply_sync_action(
        &self,
        action: &SyncAction<Self::Api>,
    ) -> Result<(), RegistryError<Self::Api>> {
        match action {
            SyncAction::AddMembers {
                accounts,
                activity_multipliers,
                start_dates,
            } => self.apply_add_members(accounts, activity_multipliers, start_dates),
            SyncAction::UpdateMembersActivity {
                accounts,
                activity_multipliers,
            } => self.apply_update_members_activity(accounts, activity_multipliers),
            SyncAction::RemoveMembers { accounts } => self.apply_remove_members(accounts),
            SyncAction::AccrueActivity { cutoff } => self.apply_accrue_activity(*cutoff),
            SyncAction::UpdateSplits {
                sorted_accounts,
                distributor_fee,
            } => self.apply_update_splits(sorted_accounts, *distributor_fee),
            SyncAction::UpdateAll {
                cutoff,
                sorted_accounts,
                distributor_fee,
            } => self.apply_update_all(*cutoff, sorted_accounts, *distributor_fee),
            SyncAction::SyncMemberRegistry {
                members,
                last_activity_update,
            } => self.apply_sync_member_registry(members, *last_activity_update),
            SyncAction::SetUpdaterConfig {
                connext,
                updater_domain,
                updater,
            } => self.apply_updater_config(UpdaterConfig {
                connext: connext.clone(),
                updater_domain: *updater_domain,
                updater: updater.clone(),
            }),
            SyncAction::SetSplit { split_wallet } => self.apply_set_split(split_wallet),
            SyncAction::AcceptSplitControl => self.apply_accept_split_control(),
            SyncAction::TransferSplitControl { new_controller } => {
                self.apply_transfer_split_control(new_controller)
            },
            SyncAction::CancelSplitControlTransfer => self.apply_cancel_split_control_transfer(),
            SyncAction::ExecuteSplitWalletCalls { calls } => {
                self.apply_execute_split_wallet_calls(calls)
            },
            SyncAction::UpgradeImplementation {
                source,
                code_metadata,
            } => self.apply_upgrade_request(source, *code_metadata),
        }
    }

    fn report_sync_action(
        &self,
        transfer_id: &ManagedByteArray<Self::Api, 32>,
        origin_domain: u32,
        selector: &ManagedBuffer,
        origin_sender: &ManagedAddress,
        result: Result<(), RegistryError<Self::Api>>,
    ) {
        if let Err(err) = &result {
            self.sync_action_failed_event(transfer_id, &err.message());
        }
        self.sync_action_performed_event(
            transfer_id,
            origin_domain,
            selector,
            result.is_ok(),
            origin_sender,
        );
    }

    /// Forwards the batch as a promise: arbitrary calls can fail on the
    /// wallet side, and that must not take the delivery down with it.
    fn replay_split_wallet_calls(
        &self,
        transfer_id: ManagedByteArray<Self::Api, 32>,
        origin_domain: u32,
        origin_sender: ManagedAddress,
        split_wallet: ManagedAddress,
        calls: &ManagedVec<SplitWalletCall<Self::Api>>,
    ) {
        let call_count = calls.len();
        self.tx()
            .to(&split_wallet)
            .typed(split_wallet_proxy::SplitWalletProxy)
            .exec_calls(calls.clone())
            .gas(SPLIT_WALLET_CALLS_GAS)
            .callback(self.callbacks().split_wallet_calls_callback(
                transfer_id,
                origin_domain,
                origin_sender,
                split_wallet.clone(),
                call_count,
            ))
            .gas_for_callback(SPLIT_WALLET_CALLBACK_GAS)
            .register_promise();
    }

    fn apply_upgrade_request(
        &self,
        source: &ManagedAddress,
        code_metadata: CodeMetadata,
    ) -> Result<(), RegistryError<Self::Api>> {
        if source.is_zero() || !self.blockchain().is_smart_contract(source) {
            return Err(RegistryError::InvalidAddress);
        }

        self.replica_upgrade_requested_event(source, code_metadata);
        Ok(())
    }

    /// Self-upgrade; the replica has to be its own owner on its network.
    fn upgrade_from_source(&self, source: ManagedAddress, code_metadata: CodeMetadata) {
        self.tx()
            .to(self.blockchain().get_sc_address())
            .raw_upgrade()
            .from_source(source)
            .code_metadata(code_metadata)
            .upgrade_async_call_and_exit();
    }
}
