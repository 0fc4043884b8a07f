multiversx_sc::imports!();

use crate::contribution::credited_seconds;
use crate::errors::RegistryError;
use crate::types::{DeactivationPolicy, Member, MAX_ACTIVITY_MULTIPLIER};

// ============================================================
// Member ledger
//
// Every `apply_*` function validates its whole input before the
// first storage write, so an `Err` always leaves the ledger as it
// was. Local endpoints turn the error into a revert; the sync
// receiver only reports it.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::role::RoleModule
{
    // ========================================================
    // ENDPOINTS (main only)
    // ========================================================

    #[endpoint(addMembers)]
    fn add_members(
        &self,
        accounts: ManagedVec<ManagedAddress>,
        activity_multipliers: ManagedVec<u32>,
        start_dates: ManagedVec<u64>,
    ) {
        self.require_local_mutation();
        let result = self.apply_add_members(&accounts, &activity_multipliers, &start_dates);
        self.ok_or_panic(result);
    }

    #[endpoint(updateMembersActivity)]
    fn update_members_activity(
        &self,
        accounts: ManagedVec<ManagedAddress>,
        activity_multipliers: ManagedVec<u32>,
    ) {
        self.require_local_mutation();
        let result = self.apply_update_members_activity(&accounts, &activity_multipliers);
        self.ok_or_panic(result);
    }

    #[endpoint(removeMembers)]
    fn remove_members(&self, accounts: ManagedVec<ManagedAddress>) {
        self.require_local_mutation();
        let result = self.apply_remove_members(&accounts);
        self.ok_or_panic(result);
    }

    /// `cutoff == 0` accrues up to the current block timestamp.
    #[endpoint(accrueActivity)]
    fn accrue_activity(&self, cutoff: u64) {
        self.require_local_mutation();
        let result = self.apply_accrue_activity(cutoff);
        self.ok_or_panic(result);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMember)]
    fn get_member(&self, account: ManagedAddress) -> Member<Self::Api> {
        let mapper = self.member(&account);
        if mapper.is_empty() {
            let result = Err(RegistryError::NotRegistered(account));
            self.ok_or_panic(result);
        }
        mapper.get()
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<Member<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for account in self.members().iter().skip(from as usize).take(count as usize) {
            result.push(self.member(&account).get());
        }
        result
    }

    #[view(getMembersProperties)]
    fn get_members_properties(
        &self,
        accounts: ManagedVec<ManagedAddress>,
    ) -> MultiValueEncoded<Member<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for account in accounts.iter() {
            result.push(self.get_member(account.clone_value()));
        }
        result
    }

    #[view(totalMembers)]
    fn total_members(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(isMember)]
    fn is_member(&self, account: ManagedAddress) -> bool {
        self.members().contains(&account)
    }

    // ========================================================
    // INTERNAL: validate-then-apply ledger operations
    // ========================================================

    fn apply_add_members(
        &self,
        accounts: &ManagedVec<ManagedAddress>,
        activity_multipliers: &ManagedVec<u32>,
        start_dates: &ManagedVec<u64>,
    ) -> Result<(), RegistryError<Self::Api>> {
        if accounts.len() != activity_multipliers.len() || accounts.len() != start_dates.len() {
            return Err(RegistryError::ParamsSizeMismatch);
        }
        self.require_distinct(accounts)?;

        let now = self.blockchain().get_block_timestamp();
        for (index, account) in accounts.iter().enumerate() {
            if account.is_zero() {
                return Err(RegistryError::InvalidAddress);
            }
            if self.members().contains(&account) {
                return Err(RegistryError::AlreadyRegistered);
            }
            let activity_multiplier = activity_multipliers.get(index);
            if activity_multiplier == 0 || activity_multiplier > MAX_ACTIVITY_MULTIPLIER {
                return Err(RegistryError::InvalidActivityMultiplier);
            }
            if start_dates.get(index) > now {
                return Err(RegistryError::StartDateInTheFuture);
            }
        }

        for (index, account) in accounts.iter().enumerate() {
            let member = Member {
                account: account.clone_value(),
                activity_multiplier: activity_multipliers.get(index),
                start_date: start_dates.get(index),
                seconds_active: 0,
            };
            self.insert_member(&member);
        }
        Ok(())
    }

    fn apply_update_members_activity(
        &self,
        accounts: &ManagedVec<ManagedAddress>,
        activity_multipliers: &ManagedVec<u32>,
    ) -> Result<(), RegistryError<Self::Api>> {
        if accounts.len() != activity_multipliers.len() {
            return Err(RegistryError::ParamsSizeMismatch);
        }
        self.require_distinct(accounts)?;

        for (index, account) in accounts.iter().enumerate() {
            self.require_registered(&account)?;
            if activity_multipliers.get(index) > MAX_ACTIVITY_MULTIPLIER {
                return Err(RegistryError::InvalidActivityMultiplier);
            }
        }

        let deactivation = self.policy().get().deactivation;
        for (index, account) in accounts.iter().enumerate() {
            let activity_multiplier = activity_multipliers.get(index);
            if activity_multiplier == 0 && deactivation == DeactivationPolicy::RemoveMember {
                self.delete_member(&account);
                continue;
            }

            let mut member = self.member(&account).get();
            self.track_activation(member.activity_multiplier, activity_multiplier);
            member.activity_multiplier = activity_multiplier;
            self.member(&account).set(&member);
            self.member_updated_event(&account, activity_multiplier);
        }
        Ok(())
    }

    fn apply_remove_members(
        &self,
        accounts: &ManagedVec<ManagedAddress>,
    ) -> Result<(), RegistryError<Self::Api>> {
        self.require_distinct(accounts)?;
        for account in accounts.iter() {
            self.require_registered(&account)?;
        }

        for account in accounts.iter() {
            self.delete_member(&account);
        }
        Ok(())
    }

    fn apply_accrue_activity(&self, cutoff: u64) -> Result<(), RegistryError<Self::Api>> {
        let effective_cutoff = self.resolve_cutoff(cutoff)?;
        let last_activity_update = self.last_activity_update().get();

        for account in self.members().iter() {
            let mapper = self.member(&account);
            let mut member = mapper.get();
            member.seconds_active = member.seconds_active.saturating_add(credited_seconds(
                member.start_date,
                last_activity_update,
                effective_cutoff,
                member.activity_multiplier,
            ));
            mapper.set(&member);
            self.member_activity_updated_event(
                &account,
                member.activity_multiplier,
                member.seconds_active,
            );
        }

        self.last_activity_update().set(effective_cutoff);
        self.registry_activity_update_event(effective_cutoff, self.members().len() as u64);
        Ok(())
    }

    /// Upserts complete member records sent by the main registry.
    fn apply_sync_member_registry(
        &self,
        members: &ManagedVec<Member<Self::Api>>,
        last_activity_update: u64,
    ) -> Result<(), RegistryError<Self::Api>> {
        let deactivation = self.policy().get().deactivation;
        let now = self.blockchain().get_block_timestamp();
        let mut accounts = ManagedVec::<Self::Api, ManagedAddress>::new();
        for member in members.iter() {
            if member.account.is_zero() {
                return Err(RegistryError::InvalidAddress);
            }
            if member.activity_multiplier > MAX_ACTIVITY_MULTIPLIER
                || (member.activity_multiplier == 0
                    && deactivation == DeactivationPolicy::RemoveMember)
            {
                return Err(RegistryError::InvalidActivityMultiplier);
            }
            if member.start_date > now {
                return Err(RegistryError::StartDateInTheFuture);
            }
            accounts.push(member.account.clone());
        }
        self.require_distinct(&accounts)?;

        for member in members.iter() {
            let record = Member {
                account: member.account.clone(),
                activity_multiplier: member.activity_multiplier,
                start_date: member.start_date,
                seconds_active: member.seconds_active,
            };
            let mapper = self.member(&record.account);
            if mapper.is_empty() {
                self.insert_member(&record);
            } else {
                self.track_activation(mapper.get().activity_multiplier, record.activity_multiplier);
                mapper.set(&record);
                self.member_updated_event(&record.account, record.activity_multiplier);
            }
        }

        if last_activity_update > self.last_activity_update().get() {
            self.last_activity_update().set(last_activity_update);
        }
        Ok(())
    }

    // ========================================================
    // INTERNAL: helpers
    // ========================================================

    /// Resolves `0` to the current block timestamp and checks
    /// `lastActivityUpdate <= cutoff <= now`.
    fn resolve_cutoff(&self, cutoff: u64) -> Result<u64, RegistryError<Self::Api>> {
        let now = self.blockchain().get_block_timestamp();
        let effective_cutoff = if cutoff == 0 { now } else { cutoff };
        if effective_cutoff < self.last_activity_update().get() || effective_cutoff > now {
            return Err(RegistryError::InvalidCutoffDate);
        }
        Ok(effective_cutoff)
    }

    fn require_registered(&self, account: &ManagedAddress) -> Result<(), RegistryError<Self::Api>> {
        if self.members().contains(account) {
            Ok(())
        } else {
            Err(RegistryError::NotRegistered(account.clone()))
        }
    }

    fn require_distinct(
        &self,
        accounts: &ManagedVec<ManagedAddress>,
    ) -> Result<(), RegistryError<Self::Api>> {
        for (index, account) in accounts.iter().enumerate() {
            for previous in accounts.iter().take(index) {
                if *previous == *account {
                    return Err(RegistryError::DuplicateAccount);
                }
            }
        }
        Ok(())
    }

    fn insert_member(&self, member: &Member<Self::Api>) {
        self.members().insert(member.account.clone());
        self.member(&member.account).set(member);
        if member.is_active() {
            self.active_members().update(|active| *active += 1);
        }
        self.member_added_event(&member.account, member.start_date, member.activity_multiplier);
    }

    fn delete_member(&self, account: &ManagedAddress) {
        if self.member(account).get().is_active() {
            self.active_members().update(|active| *active -= 1);
        }
        self.member(account).clear();
        self.members().swap_remove(account);
        self.member_removed_event(account);
    }

    fn track_activation(&self, previous_multiplier: u32, new_multiplier: u32) {
        if previous_multiplier > 0 && new_multiplier == 0 {
            self.active_members().update(|active| *active -= 1);
        } else if previous_multiplier == 0 && new_multiplier > 0 {
            self.active_members().update(|active| *active += 1);
        }
    }
}
