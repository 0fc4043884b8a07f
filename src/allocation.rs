//! Proportional split allocation with a single dust recipient.

multiversx_sc::imports!();

use crate::errors::RegistryError;
use crate::types::{DustPolicy, PERCENTAGE_SCALE};

/// Distribution table ready to hand to the split wallet.
///
/// `percent_allocations` sums to exactly `PERCENTAGE_SCALE`.
pub struct Allocation<M: ManagedTypeApi> {
    pub recipients: ManagedVec<M, ManagedAddress<M>>,
    pub percent_allocations: ManagedVec<M, u32>,
}

/// Splits `PERCENTAGE_SCALE` proportionally to `contributions`.
///
/// `recipients` must already be filtered to active members and sorted in
/// ascending account order; `contributions` is parallel to it. Each share is
/// floored and the residual goes to the single recipient picked by `dust`.
pub fn allocate<M: ManagedTypeApi>(
    recipients: ManagedVec<M, ManagedAddress<M>>,
    contributions: &ManagedVec<M, u64>,
    dust: DustPolicy,
) -> Result<Allocation<M>, RegistryError<M>> {
    if recipients.len() != contributions.len() {
        return Err(RegistryError::ParamsSizeMismatch);
    }

    let total: u128 = contributions
        .iter()
        .map(|contribution| contribution as u128)
        .sum();
    if recipients.is_empty() || total == 0 {
        return Err(RegistryError::NoActiveMembers);
    }

    let dust_index = match dust {
        DustPolicy::FirstRecipient => 0,
        DustPolicy::SmallestContribution => smallest_contribution_index(contributions),
    };

    let scale = PERCENTAGE_SCALE as u128;
    let mut floored = ManagedVec::<M, u32>::new();
    let mut allocated = 0u32;
    for contribution in contributions.iter() {
        // contribution <= total, so the share never exceeds the scale
        let share = (contribution as u128 * scale / total) as u32;
        allocated += share;
        floored.push(share);
    }
    let residual = PERCENTAGE_SCALE - allocated;

    let mut percent_allocations = ManagedVec::new();
    for (index, share) in floored.iter().enumerate() {
        if index == dust_index {
            percent_allocations.push(share + residual);
        } else {
            percent_allocations.push(share);
        }
    }

    Ok(Allocation {
        recipients,
        percent_allocations,
    })
}

/// Index of the first minimal contribution.
fn smallest_contribution_index<M: ManagedTypeApi>(contributions: &ManagedVec<M, u64>) -> usize {
    let mut smallest_index = 0;
    let mut smallest = u64::MAX;
    for (index, contribution) in contributions.iter().enumerate() {
        if contribution < smallest {
            smallest = contribution;
            smallest_index = index;
        }
    }
    smallest_index
}
