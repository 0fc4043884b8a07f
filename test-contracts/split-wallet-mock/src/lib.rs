#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod split_wallet_mock_proxy;

const PERCENTAGE_SCALE: u64 = 1_000_000;
const MAX_DISTRIBUTOR_FEE: u32 = 100_000;

/// Same encoding as the registry's `SplitWalletCall`.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct SplitWalletCall<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub egld_value: BigUint<M>,
    pub endpoint_name: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Split wallet mock
//
// Keeps the distribution table and the two-step control
// handoff; forwarded calls are only counted, after checking
// the wallet could cover the EGLD they carry.
// ============================================================

#[multiversx_sc::contract]
pub trait SplitWalletMock {
    #[init]
    fn init(&self, controller: ManagedAddress) {
        self.controller().set(&controller);
    }

    #[endpoint(setDistribution)]
    fn set_distribution(
        &self,
        recipients: ManagedVec<ManagedAddress>,
        percent_allocations: ManagedVec<u32>,
        distributor_fee: u32,
    ) {
        self.require_controller();
        require!(
            !recipients.is_empty() && recipients.len() == percent_allocations.len(),
            "Invalid recipients"
        );
        let total: u64 = percent_allocations.iter().map(|share| share as u64).sum();
        require!(total == PERCENTAGE_SCALE, "Invalid percent allocations");
        require!(distributor_fee <= MAX_DISTRIBUTOR_FEE, "Invalid distributor fee");

        let mut preimage = ManagedBuffer::new();
        for (index, recipient) in recipients.iter().enumerate() {
            preimage.append(recipient.as_managed_buffer());
            preimage.append_bytes(&percent_allocations.get(index).to_be_bytes());
        }
        preimage.append_bytes(&distributor_fee.to_be_bytes());

        self.distribution_hash().set(self.crypto().keccak256(&preimage));
        self.recipients().set(&recipients);
        self.percent_allocations().set(&percent_allocations);
        self.distributor_fee().set(distributor_fee);
    }

    #[endpoint(transferControl)]
    fn transfer_control(&self, new_controller: ManagedAddress) {
        self.require_controller();
        self.pending_controller().set(&new_controller);
    }

    #[endpoint(acceptControl)]
    fn accept_control(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.pending_controller().is_empty() && self.pending_controller().get() == caller,
            "Not the pending controller"
        );
        self.controller().set(&caller);
        self.pending_controller().clear();
    }

    #[endpoint(cancelControlTransfer)]
    fn cancel_control_transfer(&self) {
        self.require_controller();
        self.pending_controller().clear();
    }

    #[endpoint(execCalls)]
    fn exec_calls(&self, calls: ManagedVec<SplitWalletCall<Self::Api>>) {
        self.require_controller();
        let mut total_value = BigUint::zero();
        for call in calls.iter() {
            total_value += &call.egld_value;
        }
        let balance = self.blockchain().get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(total_value <= balance, "Insufficient balance");
        self.exec_call_count().update(|count| *count += calls.len() as u64);
    }

    #[view(getPendingController)]
    fn get_pending_controller(&self) -> ManagedAddress {
        if self.pending_controller().is_empty() {
            return ManagedAddress::zero();
        }
        self.pending_controller().get()
    }

    #[view(getDistributionHash)]
    fn get_distribution_hash(&self) -> ManagedByteArray<Self::Api, 32> {
        if self.distribution_hash().is_empty() {
            return ManagedByteArray::new_from_bytes(&[0u8; 32]);
        }
        self.distribution_hash().get()
    }

    fn require_controller(&self) {
        require!(
            self.blockchain().get_caller() == self.controller().get(),
            "Caller is not the controller"
        );
    }

    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pendingController")]
    fn pending_controller(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("distributionHash")]
    fn distribution_hash(&self) -> SingleValueMapper<ManagedByteArray<Self::Api, 32>>;

    #[view(getRecipients)]
    #[storage_mapper("recipients")]
    fn recipients(&self) -> SingleValueMapper<ManagedVec<ManagedAddress>>;

    #[view(getPercentAllocations)]
    #[storage_mapper("percentAllocations")]
    fn percent_allocations(&self) -> SingleValueMapper<ManagedVec<u32>>;

    #[view(getDistributorFee)]
    #[storage_mapper("distributorFee")]
    fn distributor_fee(&self) -> SingleValueMapper<u32>;

    #[view(execCallCount)]
    #[storage_mapper("execCallCount")]
    fn exec_call_count(&self) -> SingleValueMapper<u64>;
}
