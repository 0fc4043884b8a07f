#![no_std]

multiversx_sc::imports!();

pub mod actions;
pub mod allocation;
pub mod connext_proxy;
pub mod contribution;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod network_registry_proxy;
pub mod receiver;
pub mod role;
pub mod split_wallet_proxy;
pub mod splits;
pub mod storage;
pub mod types;

use types::{RegistryPolicy, UpdaterConfig};

// ============================================================
// Contract
//
// One deployment = one registry instance. The updater config
// passed at init decides its role:
//   main    -> updater_domain 0, zero updater, owner required
//   replica -> updater_domain + updater of the main registry
// ============================================================

#[multiversx_sc::contract]
pub trait NetworkRegistry:
    storage::StorageModule
    + events::EventsModule
    + role::RoleModule
    + ledger::LedgerModule
    + splits::SplitsModule
    + receiver::ReceiverModule
    + dispatch::DispatchModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        owner: ManagedAddress,
        connext: ManagedAddress,
        updater_domain: u32,
        updater: ManagedAddress,
        policy: RegistryPolicy,
    ) {
        self.owner().set(&owner);
        if !owner.is_zero() {
            self.ownership_transferred_event(&ManagedAddress::zero(), &owner);
        }

        let result = self.apply_updater_config(UpdaterConfig {
            connext,
            updater_domain,
            updater,
        });
        self.ok_or_panic(result);

        self.policy().set(policy);
        self.last_activity_update().set(0u64);
        self.active_members().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
