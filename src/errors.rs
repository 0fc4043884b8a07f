multiversx_sc::imports!();

// ============================================================
// Authorization messages (always fatal, raised with require!)
// ============================================================

pub const ERR_NOT_OWNER: &str = "Caller is not the owner";
pub const ERR_REPLICA_SYNC_ONLY: &str = "Replica accepts updates from the updater channel only";
pub const ERR_MAIN_ONLY: &str = "Only a main registry can dispatch sync messages";
pub const ERR_UNAUTHORIZED_SYNC_CALLER: &str = "Connext only: unauthorized sync caller";
pub const ERR_UNAUTHORIZED_CALLDATA: &str = "Unauthorized calldata";

/// Validation and business-rule failures of ledger, split and role operations.
///
/// Operations returning this error have not written anything to storage yet,
/// so the caller decides whether it is fatal (local endpoint) or only reported
/// (inbound sync message).
#[derive(Clone, PartialEq, Debug)]
pub enum RegistryError<M: ManagedTypeApi> {
    ParamsSizeMismatch,
    InvalidAddress,
    DuplicateAccount,
    AlreadyRegistered,
    NotRegistered(ManagedAddress<M>),
    InvalidActivityMultiplier,
    StartDateInTheFuture,
    InvalidCutoffDate,
    MemberListSizeMismatch,
    AccountsOutOfOrder,
    NoActiveMembers,
    EmptyDistribution,
    InvalidDistributorFee,
    InvalidSplitAddress,
    ControlNotHandedOver,
    InvalidConnextAddress,
    InvalidUpdaterConfig,
    NeitherOwnableNorReplicaUpdater,
    InvalidReplica,
    NoReplicaOnNetwork(u32),
    ValueSentLessThanRelayerFees,
    SplitWalletCallFailed(ManagedBuffer<M>),
}

impl<M: ManagedTypeApi> RegistryError<M> {
    pub fn message(&self) -> ManagedBuffer<M> {
        match self {
            RegistryError::ParamsSizeMismatch => "Params size mismatch".into(),
            RegistryError::InvalidAddress => "Invalid address".into(),
            RegistryError::DuplicateAccount => "Duplicate account in batch".into(),
            RegistryError::AlreadyRegistered => "Member already registered".into(),
            RegistryError::NotRegistered(account) => {
                let mut message = ManagedBufferBuilder::<M>::new_from_slice(&[]);
                multiversx_sc::derive::format_receiver_args!(
                    message,
                    "Member not registered: {:x}",
                    account
                );
                message.into_managed_buffer()
            },
            RegistryError::InvalidActivityMultiplier => "Invalid activity multiplier".into(),
            RegistryError::StartDateInTheFuture => "Start date in the future".into(),
            RegistryError::InvalidCutoffDate => "Invalid cutoff date".into(),
            RegistryError::MemberListSizeMismatch => "Member list size mismatch".into(),
            RegistryError::AccountsOutOfOrder => "Accounts out of order or invalid".into(),
            RegistryError::NoActiveMembers => "No active members".into(),
            RegistryError::EmptyDistribution => "Empty distribution".into(),
            RegistryError::InvalidDistributorFee => "Invalid distributor fee".into(),
            RegistryError::InvalidSplitAddress => "Invalid split wallet address".into(),
            RegistryError::ControlNotHandedOver => "Split control not handed over".into(),
            RegistryError::InvalidConnextAddress => "Invalid connext address".into(),
            RegistryError::InvalidUpdaterConfig => "Invalid updater config".into(),
            RegistryError::NeitherOwnableNorReplicaUpdater => {
                "Neither ownable nor replica updater".into()
            },
            RegistryError::InvalidReplica => "Invalid replica".into(),
            RegistryError::NoReplicaOnNetwork(chain_id) => {
                let mut message = ManagedBufferBuilder::<M>::new_from_slice(&[]);
                multiversx_sc::derive::format_receiver_args!(
                    message,
                    "No replica on network: {}",
                    chain_id
                );
                message.into_managed_buffer()
            },
            RegistryError::ValueSentLessThanRelayerFees => {
                "Value sent less than relayer fees".into()
            },
            RegistryError::SplitWalletCallFailed(reason) => {
                let mut message = ManagedBuffer::from("Split wallet call failed: ");
                message.append(reason);
                message
            },
        }
    }
}
