multiversx_sc::imports!();

use crate::allocation::{self, Allocation};
use crate::contribution::{contribution_of, credited_seconds};
use crate::errors::RegistryError;
use crate::split_wallet_proxy;
use crate::types::{SplitWalletCall, MAX_DISTRIBUTOR_FEE};

// ============================================================
// Split allocation engine + split wallet control
//
// The registry may only push distributions to a split wallet it
// controls: control is offered by the current controller and has
// to be accepted explicitly (setSplit / acceptSplitControl).
// ============================================================

#[multiversx_sc::module]
pub trait SplitsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::role::RoleModule
    + crate::ledger::LedgerModule
{
    // ========================================================
    // ENDPOINTS (main only)
    // ========================================================

    #[endpoint(updateSplits)]
    fn update_splits(&self, sorted_accounts: ManagedVec<ManagedAddress>, distributor_fee: u32) {
        self.require_local_mutation();
        let result = self.apply_update_splits(&sorted_accounts, distributor_fee);
        self.ok_or_panic(result);
    }

    /// Accrual followed by a split update, both or neither.
    #[endpoint(updateAll)]
    fn update_all(
        &self,
        cutoff: u64,
        sorted_accounts: ManagedVec<ManagedAddress>,
        distributor_fee: u32,
    ) {
        self.require_local_mutation();
        let result = self.apply_update_all(cutoff, &sorted_accounts, distributor_fee);
        self.ok_or_panic(result);
    }

    #[endpoint(setSplit)]
    fn set_split(&self, split_wallet: ManagedAddress) {
        self.require_local_mutation();
        let result = self.apply_set_split(&split_wallet);
        self.ok_or_panic(result);
    }

    #[endpoint(acceptSplitControl)]
    fn accept_split_control(&self) {
        self.require_local_mutation();
        let result = self.apply_accept_split_control();
        self.ok_or_panic(result);
    }

    #[endpoint(transferSplitControl)]
    fn transfer_split_control(&self, new_controller: ManagedAddress) {
        self.require_local_mutation();
        let result = self.apply_transfer_split_control(&new_controller);
        self.ok_or_panic(result);
    }

    #[endpoint(cancelSplitControlTransfer)]
    fn cancel_split_control_transfer(&self) {
        self.require_local_mutation();
        let result = self.apply_cancel_split_control_transfer();
        self.ok_or_panic(result);
    }

    #[endpoint(executeSplitWalletCalls)]
    fn execute_split_wallet_calls(&self, calls: ManagedVec<SplitWalletCall<Self::Api>>) {
        self.require_local_mutation();
        let result = self.apply_execute_split_wallet_calls(&calls);
        self.ok_or_panic(result);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getSplitWallet)]
    fn get_split_wallet(&self) -> ManagedAddress {
        self.current_split_wallet()
    }

    #[view(calculateContributionOf)]
    fn calculate_contribution_of(&self, account: ManagedAddress) -> u64 {
        let member = self.get_member(account);
        contribution_of(member.seconds_active, self.policy().get().contribution)
    }

    #[view(calculateTotalContributions)]
    fn calculate_total_contributions(&self) -> BigUint {
        let curve = self.policy().get().contribution;
        let mut total = BigUint::zero();
        for account in self.members().iter() {
            let member = self.member(&account).get();
            if member.is_active() {
                total += BigUint::from(contribution_of(member.seconds_active, curve));
            }
        }
        total
    }

    /// Recipients (active members, ascending) and their percentages,
    /// summing to exactly 1_000_000.
    #[view(calculate)]
    fn calculate(
        &self,
        sorted_accounts: ManagedVec<ManagedAddress>,
    ) -> MultiValue2<ManagedVec<ManagedAddress>, ManagedVec<u32>> {
        match self.compute_allocation(&sorted_accounts, None, RegistryError::NoActiveMembers) {
            Ok(allocation) => (allocation.recipients, allocation.percent_allocations).into(),
            Err(err) => sc_panic!(err.message()),
        }
    }

    // ========================================================
    // INTERNAL: allocation
    // ========================================================

    /// Validates `sorted_accounts` against the ledger and allocates among
    /// its active members.
    ///
    /// With `projected_cutoff`, contributions are evaluated as if
    /// `accrueActivity` had already run up to that (validated) cutoff.
    fn compute_allocation(
        &self,
        sorted_accounts: &ManagedVec<ManagedAddress>,
        projected_cutoff: Option<u64>,
        empty_error: RegistryError<Self::Api>,
    ) -> Result<Allocation<Self::Api>, RegistryError<Self::Api>> {
        if sorted_accounts.len() != self.members().len() {
            return Err(RegistryError::MemberListSizeMismatch);
        }

        let policy = self.policy().get();
        let last_activity_update = self.last_activity_update().get();
        let mut recipients = ManagedVec::new();
        let mut contributions = ManagedVec::<Self::Api, u64>::new();
        let mut previous: Option<[u8; 32]> = None;

        for account in sorted_accounts.iter() {
            let key = account.to_byte_array();
            if let Some(previous_key) = previous {
                if previous_key >= key {
                    return Err(RegistryError::AccountsOutOfOrder);
                }
            }
            previous = Some(key);

            self.require_registered(&account)?;
            let member = self.member(&account).get();
            if !member.is_active() {
                continue;
            }

            let mut seconds_active = member.seconds_active;
            if let Some(cutoff) = projected_cutoff {
                seconds_active = seconds_active.saturating_add(credited_seconds(
                    member.start_date,
                    last_activity_update,
                    cutoff,
                    member.activity_multiplier,
                ));
            }
            let contribution = contribution_of(seconds_active, policy.contribution);
            if contribution > 0 {
                recipients.push(account.clone_value());
                contributions.push(contribution);
            }
        }

        allocation::allocate(recipients, &contributions, policy.dust).map_err(|err| match err {
            RegistryError::NoActiveMembers => empty_error,
            other => other,
        })
    }

    // ========================================================
    // INTERNAL: validate-then-apply split operations
    // ========================================================

    fn apply_update_splits(
        &self,
        sorted_accounts: &ManagedVec<ManagedAddress>,
        distributor_fee: u32,
    ) -> Result<(), RegistryError<Self::Api>> {
        let split_wallet = self.controlled_split_wallet()?;
        if distributor_fee > MAX_DISTRIBUTOR_FEE {
            return Err(RegistryError::InvalidDistributorFee);
        }
        let allocation =
            self.compute_allocation(sorted_accounts, None, RegistryError::EmptyDistribution)?;

        self.push_distribution(&split_wallet, allocation, distributor_fee);
        Ok(())
    }

    fn apply_update_all(
        &self,
        cutoff: u64,
        sorted_accounts: &ManagedVec<ManagedAddress>,
        distributor_fee: u32,
    ) -> Result<(), RegistryError<Self::Api>> {
        let effective_cutoff = self.resolve_cutoff(cutoff)?;
        let split_wallet = self.controlled_split_wallet()?;
        if distributor_fee > MAX_DISTRIBUTOR_FEE {
            return Err(RegistryError::InvalidDistributorFee);
        }
        let allocation = self.compute_allocation(
            sorted_accounts,
            Some(effective_cutoff),
            RegistryError::EmptyDistribution,
        )?;

        self.apply_accrue_activity(effective_cutoff)?;
        self.push_distribution(&split_wallet, allocation, distributor_fee);
        Ok(())
    }

    fn apply_set_split(
        &self,
        split_wallet: &ManagedAddress,
    ) -> Result<(), RegistryError<Self::Api>> {
        if split_wallet.is_zero() || !self.blockchain().is_smart_contract(split_wallet) {
            return Err(RegistryError::InvalidSplitAddress);
        }

        let own_address = self.blockchain().get_sc_address();
        if self.split_controller(split_wallet) != own_address {
            if self.split_pending_controller(split_wallet) != own_address {
                return Err(RegistryError::ControlNotHandedOver);
            }
            self.accept_control_of(split_wallet);
        }

        self.split_wallet().set(split_wallet);
        self.split_updated_event(split_wallet);
        Ok(())
    }

    fn apply_accept_split_control(&self) -> Result<(), RegistryError<Self::Api>> {
        let split_wallet = self.current_split_wallet();
        if split_wallet.is_zero() || !self.blockchain().is_smart_contract(&split_wallet) {
            return Err(RegistryError::InvalidSplitAddress);
        }

        if self.split_pending_controller(&split_wallet) != self.blockchain().get_sc_address() {
            return Err(RegistryError::ControlNotHandedOver);
        }

        self.accept_control_of(&split_wallet);
        Ok(())
    }

    fn apply_transfer_split_control(
        &self,
        new_controller: &ManagedAddress,
    ) -> Result<(), RegistryError<Self::Api>> {
        if new_controller.is_zero() {
            return Err(RegistryError::InvalidAddress);
        }
        let split_wallet = self.controlled_split_wallet()?;

        self.tx()
            .to(&split_wallet)
            .typed(split_wallet_proxy::SplitWalletProxy)
            .transfer_control(new_controller)
            .sync_call();
        self.split_control_transferred_event(&split_wallet, new_controller);
        Ok(())
    }

    fn apply_cancel_split_control_transfer(&self) -> Result<(), RegistryError<Self::Api>> {
        let split_wallet = self.controlled_split_wallet()?;

        self.tx()
            .to(&split_wallet)
            .typed(split_wallet_proxy::SplitWalletProxy)
            .cancel_control_transfer()
            .sync_call();
        self.split_control_transfer_cancelled_event(&split_wallet);
        Ok(())
    }

    fn apply_execute_split_wallet_calls(
        &self,
        calls: &ManagedVec<SplitWalletCall<Self::Api>>,
    ) -> Result<(), RegistryError<Self::Api>> {
        let split_wallet = self.controlled_split_wallet()?;

        self.tx()
            .to(&split_wallet)
            .typed(split_wallet_proxy::SplitWalletProxy)
            .exec_calls(calls.clone())
            .sync_call();
        self.split_wallet_calls_executed_event(&split_wallet, calls.len());
        Ok(())
    }

    // ========================================================
    // INTERNAL: split wallet access
    // ========================================================

    fn current_split_wallet(&self) -> ManagedAddress {
        let mapper = self.split_wallet();
        if mapper.is_empty() {
            return ManagedAddress::zero();
        }
        mapper.get()
    }

    /// The attached split wallet, provided this registry controls it.
    fn controlled_split_wallet(&self) -> Result<ManagedAddress, RegistryError<Self::Api>> {
        let split_wallet = self.current_split_wallet();
        if split_wallet.is_zero() || !self.blockchain().is_smart_contract(&split_wallet) {
            return Err(RegistryError::InvalidSplitAddress);
        }
        if self.split_controller(&split_wallet) != self.blockchain().get_sc_address() {
            return Err(RegistryError::ControlNotHandedOver);
        }
        Ok(split_wallet)
    }

    fn split_controller(&self, split_wallet: &ManagedAddress) -> ManagedAddress {
        let mapper = self.split_wallet_controller(split_wallet.clone());
        if mapper.is_empty() {
            return ManagedAddress::zero();
        }
        mapper.get()
    }

    fn split_pending_controller(&self, split_wallet: &ManagedAddress) -> ManagedAddress {
        let mapper = self.split_wallet_pending_controller(split_wallet.clone());
        if mapper.is_empty() {
            return ManagedAddress::zero();
        }
        mapper.get()
    }

    fn accept_control_of(&self, split_wallet: &ManagedAddress) {
        self.tx()
            .to(split_wallet)
            .typed(split_wallet_proxy::SplitWalletProxy)
            .accept_control()
            .sync_call();
        self.split_control_accepted_event(split_wallet);
    }

    fn push_distribution(
        &self,
        split_wallet: &ManagedAddress,
        allocation: Allocation<Self::Api>,
        distributor_fee: u32,
    ) {
        self.tx()
            .to(split_wallet)
            .typed(split_wallet_proxy::SplitWalletProxy)
            .set_distribution(allocation.recipients, allocation.percent_allocations, distributor_fee)
            .sync_call();

        let distribution_hash = self.split_wallet_distribution_hash(split_wallet.clone()).get();
        self.splits_distribution_updated_event(split_wallet, &distribution_hash, distributor_fee);
    }
}
