#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod bridge_mock_proxy;

// ============================================================
// Bridge mock
//
// Records every outbound `xcall` instead of relaying it. Tests
// play relayer by reading the queue of one bridge and handing
// the messages to `deliver` on the bridge of the destination.
// Delivery is asynchronous: a target that fails does not fail
// the relayer, its error is kept per transfer id.
// ============================================================

const DELIVERY_GAS: u64 = 100_000_000;
const DELIVERY_CALLBACK_GAS: u64 = 5_000_000;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct OutboundMessage<M: ManagedTypeApi> {
    pub message_id: ManagedByteArray<M, 32>,
    pub origin_sender: ManagedAddress<M>,
    pub destination: u32,
    pub to: ManagedAddress<M>,
    pub delegate: ManagedAddress<M>,
    pub relayer_fee: BigUint<M>,
    pub call_data: ManagedBuffer<M>,
}

#[multiversx_sc::contract]
pub trait BridgeMock {
    #[init]
    fn init(&self, domain: u32) {
        self.domain().set(domain);
    }

    #[payable("EGLD")]
    #[endpoint(xcall)]
    fn xcall(
        &self,
        destination: u32,
        to: ManagedAddress,
        delegate: ManagedAddress,
        call_data: ManagedBuffer,
    ) -> ManagedByteArray<Self::Api, 32> {
        let nonce = self.nonce().update(|nonce| {
            *nonce += 1;
            *nonce
        });
        let mut preimage = ManagedBuffer::new();
        preimage.append_bytes(&self.domain().get().to_be_bytes());
        preimage.append_bytes(&nonce.to_be_bytes());
        let message_id = self.crypto().keccak256(&preimage);

        self.outbound().push(&OutboundMessage {
            message_id: message_id.clone(),
            origin_sender: self.blockchain().get_caller(),
            destination,
            to,
            delegate,
            relayer_fee: self.call_value().egld_value().clone_value(),
            call_data,
        });
        message_id
    }

    /// Hands a message to its target the way the real bridge would.
    #[endpoint(deliver)]
    fn deliver(
        &self,
        transfer_id: ManagedByteArray<Self::Api, 32>,
        origin_domain: u32,
        origin_sender: ManagedAddress,
        to: ManagedAddress,
        call_data: ManagedBuffer,
    ) {
        self.tx()
            .to(&to)
            .raw_call("xReceive")
            .argument(&transfer_id)
            .argument(&origin_domain)
            .argument(&origin_sender)
            .argument(&call_data)
            .gas(DELIVERY_GAS)
            .callback(self.callbacks().delivery_callback(transfer_id))
            .gas_for_callback(DELIVERY_CALLBACK_GAS)
            .register_promise();
    }

    #[promises_callback]
    fn delivery_callback(
        &self,
        #[call_result] result: ManagedAsyncCallResult<IgnoreValue>,
        transfer_id: ManagedByteArray<Self::Api, 32>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(_) => {
                self.delivery_error(transfer_id).clear();
                self.delivered_count().update(|count| *count += 1);
            },
            ManagedAsyncCallResult::Err(err) => {
                self.delivery_error(transfer_id).set(err.err_msg);
            },
        }
    }

    #[view(outboundCount)]
    fn outbound_count(&self) -> usize {
        self.outbound().len()
    }

    /// 1-based, like the underlying VecMapper.
    #[view(getOutbound)]
    fn get_outbound(&self, index: usize) -> OutboundMessage<Self::Api> {
        self.outbound().get(index)
    }

    #[view(getDomain)]
    #[storage_mapper("domain")]
    fn domain(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("nonce")]
    fn nonce(&self) -> SingleValueMapper<u64>;

    #[view(deliveredCount)]
    #[storage_mapper("deliveredCount")]
    fn delivered_count(&self) -> SingleValueMapper<u64>;

    /// Empty unless the last delivery of that transfer failed.
    #[view(getDeliveryError)]
    #[storage_mapper("deliveryError")]
    fn delivery_error(
        &self,
        transfer_id: ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("outbound")]
    fn outbound(&self) -> VecMapper<OutboundMessage<Self::Api>>;
}
