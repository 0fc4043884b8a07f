multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::types::{Member, SplitWalletCall};

// ============================================================
// SyncAction: the closed set of operations a replica executes
// ============================================================
//
// A sync message payload is the top-encoding of exactly one `SyncAction`.
// The enum discriminant is the action selector: anything that does not
// decode into a known variant never reaches the ledger.

/// Reported from the promise callback, where the action itself is gone.
pub const ACTION_EXECUTE_SPLIT_WALLET_CALLS: &str = "executeSplitWalletCalls";

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum SyncAction<M: ManagedTypeApi> {
    AddMembers {
        accounts: ManagedVec<M, ManagedAddress<M>>,
        activity_multipliers: ManagedVec<M, u32>,
        start_dates: ManagedVec<M, u64>,
    },
    UpdateMembersActivity {
        accounts: ManagedVec<M, ManagedAddress<M>>,
        activity_multipliers: ManagedVec<M, u32>,
    },
    RemoveMembers {
        accounts: ManagedVec<M, ManagedAddress<M>>,
    },
    AccrueActivity {
        cutoff: u64,
    },
    UpdateSplits {
        sorted_accounts: ManagedVec<M, ManagedAddress<M>>,
        distributor_fee: u32,
    },
    UpdateAll {
        cutoff: u64,
        sorted_accounts: ManagedVec<M, ManagedAddress<M>>,
        distributor_fee: u32,
    },
    /// Full member records, used to backfill or repair a replica.
    SyncMemberRegistry {
        members: ManagedVec<M, Member<M>>,
        last_activity_update: u64,
    },
    SetUpdaterConfig {
        connext: ManagedAddress<M>,
        updater_domain: u32,
        updater: ManagedAddress<M>,
    },
    SetSplit {
        split_wallet: ManagedAddress<M>,
    },
    AcceptSplitControl,
    TransferSplitControl {
        new_controller: ManagedAddress<M>,
    },
    CancelSplitControlTransfer,
    ExecuteSplitWalletCalls {
        calls: ManagedVec<M, SplitWalletCall<M>>,
    },
    /// Self-upgrade of the replica from code already deployed on its network.
    UpgradeImplementation {
        source: ManagedAddress<M>,
        code_metadata: CodeMetadata,
    },
}

impl<M: ManagedTypeApi> SyncAction<M> {
    /// Name of the replica endpoint the action stands for.
    pub fn endpoint_name(&self) -> &'static str {
        match self {
            SyncAction::AddMembers { .. } => "addMembers",
            SyncAction::UpdateMembersActivity { .. } => "updateMembersActivity",
            SyncAction::RemoveMembers { .. } => "removeMembers",
            SyncAction::AccrueActivity { .. } => "accrueActivity",
            SyncAction::UpdateSplits { .. } => "updateSplits",
            SyncAction::UpdateAll { .. } => "updateAll",
            SyncAction::SyncMemberRegistry { .. } => "syncMemberRegistry",
            SyncAction::SetUpdaterConfig { .. } => "setUpdaterConfig",
            SyncAction::SetSplit { .. } => "setSplit",
            SyncAction::AcceptSplitControl => "acceptSplitControl",
            SyncAction::TransferSplitControl { .. } => "transferSplitControl",
            SyncAction::CancelSplitControlTransfer => "cancelSplitControlTransfer",
            SyncAction::ExecuteSplitWalletCalls { .. } => ACTION_EXECUTE_SPLIT_WALLET_CALLS,
            SyncAction::UpgradeImplementation { .. } => "upgradeImplementation",
        }
    }

    pub fn selector(&self) -> ManagedBuffer<M> {
        ManagedBuffer::from(self.endpoint_name())
    }
}
