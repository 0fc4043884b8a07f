use multiversx_sc::proxy_imports::*;

/// Outbound side of the cross-domain bridge.
pub struct ConnextProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ConnextProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ConnextProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ConnextProxyMethods { wrapped_tx: tx }
    }
}

pub struct ConnextProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ConnextProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable in EGLD: the attached value is the relayer fee.
    /// Returns the bridge-assigned transfer id.
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
}
