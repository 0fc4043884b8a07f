use multiversx_sc::proxy_imports::*;

use crate::types::{Member, RegistryPolicy, ReplicaConfig, SplitWalletCall, UpdaterConfig};

/// Typed calls into a network registry, used by sibling registries'
/// tooling and by the scenario tests.
pub struct NetworkRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for NetworkRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = NetworkRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        NetworkRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct NetworkRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> NetworkRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u32>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<RegistryPolicy>,
    >(
        self,
        owner: Arg0,
        connext: Arg1,
        updater_domain: Arg2,
        updater: Arg3,
        policy: Arg4,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&owner)
            .argument(&connext)
            .argument(&updater_domain)
            .argument(&updater)
            .argument(&policy)
            .original_result()
    }
}

impl<Env, From, To, Gas> NetworkRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> NetworkRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_updater_config<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        connext: Arg0,
        updater_domain: Arg1,
        updater: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setUpdaterConfig")
            .argument(&connext)
            .argument(&updater_domain)
            .argument(&updater)
            .original_result()
    }

    pub fn transfer_ownership<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferOwnership")
            .argument(&new_owner)
            .original_result()
    }

    pub fn renounce_ownership(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("renounceOwnership")
            .original_result()
    }

    pub fn update_network_registry<
        Arg0: ProxyArg<u32>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        chain_id: Arg0,
        domain_id: Arg1,
        registry_address: Arg2,
        delegate: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateNetworkRegistry")
            .argument(&chain_id)
            .argument(&domain_id)
            .argument(&registry_address)
            .argument(&delegate)
            .original_result()
    }

    pub fn is_main_registry(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMainRegistry")
            .original_result()
    }

    pub fn get_replica<
        Arg0: ProxyArg<u32>,
    >(
        self,
        chain_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ReplicaConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReplica")
            .argument(&chain_id)
            .original_result()
    }

    pub fn owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("owner")
            .original_result()
    }

    pub fn get_updater_config(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, UpdaterConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUpdaterConfig")
            .original_result()
    }

    pub fn get_policy(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, RegistryPolicy> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPolicy")
            .original_result()
    }

    pub fn total_active_members(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalActiveMembers")
            .original_result()
    }

    pub fn last_activity_update(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("lastActivityUpdate")
            .original_result()
    }

    pub fn add_members<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, u64>>,
    >(
        self,
        accounts: Arg0,
        activity_multipliers: Arg1,
        start_dates: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMembers")
            .argument(&accounts)
            .argument(&activity_multipliers)
            .argument(&start_dates)
            .original_result()
    }

    pub fn update_members_activity<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
    >(
        self,
        accounts: Arg0,
        activity_multipliers: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateMembersActivity")
            .argument(&accounts)
            .argument(&activity_multipliers)
            .original_result()
    }

    pub fn remove_members<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        accounts: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMembers")
            .argument(&accounts)
            .original_result()
    }

    pub fn accrue_activity<
        Arg0: ProxyArg<u64>,
    >(
        self,
        cutoff: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("accrueActivity")
            .argument(&cutoff)
            .original_result()
    }

    pub fn get_member<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Member<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMember")
            .argument(&account)
            .original_result()
    }

    pub fn get_members<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Member<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMembers")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_members_properties<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        accounts: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Member<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMembersProperties")
            .argument(&accounts)
            .original_result()
    }

    pub fn total_members(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalMembers")
            .original_result()
    }

    pub fn is_member<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&account)
            .original_result()
    }

    pub fn update_splits<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<u32>,
    >(
        self,
        sorted_accounts: Arg0,
        distributor_fee: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateSplits")
            .argument(&sorted_accounts)
            .argument(&distributor_fee)
            .original_result()
    }

    pub fn update_all<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg2: ProxyArg<u32>,
    >(
        self,
        cutoff: Arg0,
        sorted_accounts: Arg1,
        distributor_fee: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateAll")
            .argument(&cutoff)
            .argument(&sorted_accounts)
            .argument(&distributor_fee)
            .original_result()
    }

    pub fn set_split<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        split_wallet: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setSplit")
            .argument(&split_wallet)
            .original_result()
    }

    pub fn accept_split_control(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("acceptSplitControl")
            .original_result()
    }

    pub fn transfer_split_control<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        new_controller: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferSplitControl")
            .argument(&new_controller)
            .original_result()
    }

    pub fn cancel_split_control_transfer(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelSplitControlTransfer")
            .original_result()
    }

    pub fn execute_split_wallet_calls<
        Arg0: ProxyArg<ManagedVec<Env::Api, SplitWalletCall<Env::Api>>>,
    >(
        self,
        calls: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeSplitWalletCalls")
            .argument(&calls)
            .original_result()
    }

    pub fn get_split_wallet(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSplitWallet")
            .original_result()
    }

    pub fn calculate_contribution_of<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculateContributionOf")
            .argument(&account)
            .original_result()
    }

    pub fn calculate_total_contributions(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculateTotalContributions")
            .original_result()
    }

    pub fn calculate<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        sorted_accounts: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<ManagedVec<Env::Api, ManagedAddress<Env::Api>>, ManagedVec<Env::Api, u32>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculate")
            .argument(&sorted_accounts)
            .original_result()
    }

    pub fn x_receive<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        transfer_id: Arg0,
        origin_domain: Arg1,
        origin_sender: Arg2,
        call_data: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("xReceive")
            .argument(&transfer_id)
            .argument(&origin_domain)
            .argument(&origin_sender)
            .argument(&call_data)
            .original_result()
    }

    pub fn sync_add_members<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, u64>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg4: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        accounts: Arg0,
        activity_multipliers: Arg1,
        start_dates: Arg2,
        chain_ids: Arg3,
        relayer_fees: Arg4,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncAddMembers")
            .argument(&accounts)
            .argument(&activity_multipliers)
            .argument(&start_dates)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_update_members_activity<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        accounts: Arg0,
        activity_multipliers: Arg1,
        chain_ids: Arg2,
        relayer_fees: Arg3,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncUpdateMembersActivity")
            .argument(&accounts)
            .argument(&activity_multipliers)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_remove_members<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        accounts: Arg0,
        chain_ids: Arg1,
        relayer_fees: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncRemoveMembers")
            .argument(&accounts)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_accrue_activity<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        cutoff: Arg0,
        chain_ids: Arg1,
        relayer_fees: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncAccrueActivity")
            .argument(&cutoff)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_update_splits<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        sorted_accounts: Arg0,
        distributor_fee: Arg1,
        chain_ids: Arg2,
        relayer_fees: Arg3,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncUpdateSplits")
            .argument(&sorted_accounts)
            .argument(&distributor_fee)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_update_all<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg2: ProxyArg<u32>,
        Arg3: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg4: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        cutoff: Arg0,
        sorted_accounts: Arg1,
        distributor_fee: Arg2,
        chain_ids: Arg3,
        relayer_fees: Arg4,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncUpdateAll")
            .argument(&cutoff)
            .argument(&sorted_accounts)
            .argument(&distributor_fee)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_network_member_registry<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        accounts: Arg0,
        chain_ids: Arg1,
        relayer_fees: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncNetworkMemberRegistry")
            .argument(&accounts)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_set_updater_config<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg4: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        connext: Arg0,
        updater_domain: Arg1,
        updater: Arg2,
        chain_ids: Arg3,
        relayer_fees: Arg4,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncSetUpdaterConfig")
            .argument(&connext)
            .argument(&updater_domain)
            .argument(&updater)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_set_split<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        split_wallet: Arg0,
        chain_ids: Arg1,
        relayer_fees: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncSetSplit")
            .argument(&split_wallet)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_accept_split_control<
        Arg0: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        chain_ids: Arg0,
        relayer_fees: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncAcceptSplitControl")
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_transfer_split_control<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        new_controller: Arg0,
        chain_ids: Arg1,
        relayer_fees: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncTransferSplitControl")
            .argument(&new_controller)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_cancel_split_control_transfer<
        Arg0: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        chain_ids: Arg0,
        relayer_fees: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncCancelSplitControlTransfer")
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_execute_split_wallet_calls<
        Arg0: ProxyArg<ManagedVec<Env::Api, SplitWalletCall<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        calls: Arg0,
        chain_ids: Arg1,
        relayer_fees: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncExecuteSplitWalletCalls")
            .argument(&calls)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }

    pub fn sync_upgrade_replica<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<CodeMetadata>,
        Arg2: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        source: Arg0,
        code_metadata: Arg1,
        chain_ids: Arg2,
        relayer_fees: Arg3,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("syncUpgradeReplica")
            .argument(&source)
            .argument(&code_metadata)
            .argument(&chain_ids)
            .argument(&relayer_fees)
            .original_result()
    }
}
