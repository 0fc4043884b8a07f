multiversx_sc::imports!();

use crate::errors::{RegistryError, ERR_NOT_OWNER, ERR_REPLICA_SYNC_ONLY};
use crate::types::{ReplicaConfig, UpdaterConfig};

// ============================================================
// Registry role
//
// Main:    updater domain 0 and zero updater; driven by the owner,
//          may register replicas and dispatch sync messages.
// Replica: updater domain and updater set; ledger mutations only
//          arrive through the authenticated updater channel. The
//          owner, if kept, can only reconfigure the updater channel
//          and hand over / renounce ownership.
// ============================================================

#[multiversx_sc::module]
pub trait RoleModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: setUpdaterConfig
    // Owner override; the updater can do the same through a
    // sync message.
    // ========================================================

    #[endpoint(setUpdaterConfig)]
    fn set_updater_config(&self, connext: ManagedAddress, updater_domain: u32, updater: ManagedAddress) {
        self.require_owner();
        let result = self.apply_updater_config(UpdaterConfig {
            connext,
            updater_domain,
            updater,
        });
        self.ok_or_panic(result);
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), "Ownable: new owner is the zero address");

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);
        self.ownership_transferred_event(&previous_owner, &new_owner);
    }

    /// Only a replica can give up its owner: the updater channel stays in charge.
    #[endpoint(renounceOwnership)]
    fn renounce_ownership(&self) {
        self.require_owner();
        if !self.is_replica() {
            self.ok_or_panic(Err(RegistryError::NeitherOwnableNorReplicaUpdater));
        }

        let previous_owner = self.owner().get();
        let nobody = ManagedAddress::zero();
        self.owner().set(&nobody);
        self.ownership_transferred_event(&previous_owner, &nobody);
    }

    // ========================================================
    // ENDPOINT: updateNetworkRegistry (main only)
    // Registers, replaces or clears (all-zero) the replica
    // reached through `chain_id`.
    // ========================================================

    #[endpoint(updateNetworkRegistry)]
    fn update_network_registry(
        &self,
        chain_id: u32,
        domain_id: u32,
        registry_address: ManagedAddress,
        delegate: ManagedAddress,
    ) {
        self.require_local_mutation();

        let replica = ReplicaConfig {
            domain_id,
            registry_address,
            delegate,
        };
        if !replica.is_well_formed() {
            self.ok_or_panic(Err(RegistryError::InvalidReplica));
        }

        if replica.is_empty() {
            self.replicas(chain_id).clear();
        } else {
            self.replicas(chain_id).set(&replica);
        }

        self.network_registry_updated_event(
            chain_id,
            &replica.registry_address,
            replica.domain_id,
            &replica.delegate,
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMainRegistry)]
    fn is_main_registry(&self) -> bool {
        !self.is_replica()
    }

    #[view(getReplica)]
    fn get_replica(&self, chain_id: u32) -> ReplicaConfig<Self::Api> {
        let mapper = self.replicas(chain_id);
        if mapper.is_empty() {
            return ReplicaConfig::empty();
        }
        mapper.get()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn is_replica(&self) -> bool {
        self.updater_config().get().is_replica()
    }

    fn require_owner(&self) {
        let owner = self.owner().get();
        let caller = self.blockchain().get_caller();
        require!(!owner.is_zero() && caller == owner, ERR_NOT_OWNER);
    }

    /// Gate of every locally initiated ledger, split and replica-set change.
    fn require_local_mutation(&self) {
        require!(!self.is_replica(), ERR_REPLICA_SYNC_ONLY);
        self.require_owner();
    }

    fn apply_updater_config(
        &self,
        config: UpdaterConfig<Self::Api>,
    ) -> Result<(), RegistryError<Self::Api>> {
        if config.connext.is_zero() {
            return Err(RegistryError::InvalidConnextAddress);
        }
        if !config.is_main() && !config.is_replica() {
            return Err(RegistryError::InvalidUpdaterConfig);
        }
        if config.is_main() && self.owner().get().is_zero() {
            return Err(RegistryError::NeitherOwnableNorReplicaUpdater);
        }

        self.new_updater_config_event(&config.connext, config.updater_domain, &config.updater);
        self.updater_config().set(&config);
        Ok(())
    }

    fn ok_or_panic(&self, result: Result<(), RegistryError<Self::Api>>) {
        if let Err(err) = result {
            sc_panic!(err.message());
        }
    }
}
