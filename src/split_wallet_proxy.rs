use multiversx_sc::proxy_imports::*;

use crate::types::SplitWalletCall;

/// Revenue split wallet: holds funds and pays out per its distribution table.
pub struct SplitWalletProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for SplitWalletProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = SplitWalletProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        SplitWalletProxyMethods { wrapped_tx: tx }
    }
}

pub struct SplitWalletProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> SplitWalletProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_controller(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getController")
            .original_result()
    }

    pub fn get_pending_controller(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingController")
            .original_result()
    }

    pub fn get_distribution_hash(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDistributionHash")
            .original_result()
    }

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

    pub fn transfer_control<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
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

    pub fn exec_calls<Arg0: ProxyArg<ManagedVec<Env::Api, SplitWalletCall<Env::Api>>>>(
        self,
        calls: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execCalls")
            .argument(&calls)
            .original_result()
    }
}
