use multiversx_sc::proxy_imports::*;

use crate::SplitWalletCall;

pub struct SplitWalletMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for SplitWalletMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = SplitWalletMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        SplitWalletMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct SplitWalletMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> SplitWalletMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        controller: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&controller)
            .original_result()
    }
}

impl<Env, From, To, Gas> SplitWalletMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_distribution<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u32>>,
        Arg2: ProxyArg<u32>,
    >(
        self,
        recipients: Arg0,
        percent_allocations: Arg1,
        distributor_fee: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDistribution")
            .argument(&recipients)
            .argument(&percent_allocations)
            .argument(&distributor_fee)
            .original_result()
    }

    pub fn transfer_control<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        new_controller: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferControl")
            .argument(&new_controller)
            .original_result()
    }

    pub fn accept_control(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("acceptControl")
            .original_result()
    }

    pub fn cancel_control_transfer(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelControlTransfer")
            .original_result()
    }

    pub fn exec_calls<
        Arg0: ProxyArg<ManagedVec<Env::Api, SplitWalletCall<Env::Api>>>,
    >(
        self,
        calls: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execCalls")
            .argument(&calls)
            .original_result()
    }

    pub fn get_pending_controller(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingController")
            .original_result()
    }

    pub fn get_distribution_hash(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDistributionHash")
            .original_result()
    }

    pub fn controller(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getController")
            .original_result()
    }

    pub fn recipients(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedVec<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRecipients")
            .original_result()
    }

    pub fn percent_allocations(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedVec<Env::Api, u32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPercentAllocations")
            .original_result()
    }

    pub fn distributor_fee(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDistributorFee")
            .original_result()
    }

    pub fn exec_call_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execCallCount")
            .original_result()
    }
}
