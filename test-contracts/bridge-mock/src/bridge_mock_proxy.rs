use multiversx_sc::proxy_imports::*;

use crate::OutboundMessage;

pub struct BridgeMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for BridgeMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = BridgeMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        BridgeMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct BridgeMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> BridgeMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<u32>,
    >(
        self,
        domain: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&domain)
            .original_result()
    }
}

impl<Env, From, To, Gas> BridgeMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn xcall<
        Arg0: ProxyArg<u32>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        destination: Arg0,
        to: Arg1,
        delegate: Arg2,
        call_data: Arg3,
    ) -> TxTypedCall<Env, From, To, (), Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .raw_call("xcall")
            .argument(&destination)
            .argument(&to)
            .argument(&delegate)
            .argument(&call_data)
            .original_result()
    }

    pub fn deliver<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        transfer_id: Arg0,
        origin_domain: Arg1,
        origin_sender: Arg2,
        to: Arg3,
        call_data: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("deliver")
            .argument(&transfer_id)
            .argument(&origin_domain)
            .argument(&origin_sender)
            .argument(&to)
            .argument(&call_data)
            .original_result()
    }

    pub fn outbound_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("outboundCount")
            .original_result()
    }

    pub fn get_outbound<
        Arg0: ProxyArg<usize>,
    >(
        self,
        index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OutboundMessage<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOutbound")
            .argument(&index)
            .original_result()
    }

    pub fn domain(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDomain")
            .original_result()
    }

    pub fn delivered_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("deliveredCount")
            .original_result()
    }

    pub fn delivery_error<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        transfer_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDeliveryError")
            .argument(&transfer_id)
            .original_result()
    }
}
