#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use types::{Voting, VotingStatus};

// ============================================================
// Constants
// ============================================================

/// Entry fee: exactly 0.01 EGLD (18 decimals)
pub const ENTRY_FEE: u64 = 10_000_000_000_000_000;

/// Share of every entry fee kept by the platform
pub const FEE_PERCENTAGE: u64 = 10;

pub const PERCENTAGE_DENOMINATOR: u64 = 100;

/// Voting window: 3 days in seconds
pub const VOTING_DURATION: u64 = 3 * 24 * 60 * 60;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait VotingContest {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.fee_balance().set(BigUint::zero());
        self.voting_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createVoting
    // Owner opens a new voting with a fixed 3-day window.
    // ========================================================

    #[endpoint(createVoting)]
    fn create_voting(&self) -> u64 {
        self.require_owner();

        let voting_id = self.voting_count().get();
        let now = self.blockchain().get_block_timestamp();
        let deadline = now + VOTING_DURATION;

        let voting = Voting::<Self::Api>::new(voting_id, now, deadline);
        self.votings(voting_id).set(&voting);
        self.voting_count().set(voting_id + 1);

        self.voting_created_event(voting_id, deadline);

        voting_id
    }

    // ========================================================
    // ENDPOINT: join
    // Pay the exact entry fee to become a candidate.
    // ========================================================

    #[endpoint(join)]
    #[payable("EGLD")]
    fn join(&self, voting_id: u64) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        let mut voting = self.require_active_voting(voting_id);
        require!(payment == ENTRY_FEE, ERR_WRONG_ENTRY_FEE);
        require!(
            !self.candidates(voting_id).contains(&caller),
            ERR_ALREADY_JOINED
        );

        // ── Fee split: platform share to the fee pool, the rest to the voting pool ──
        let fee = &payment * FEE_PERCENTAGE / PERCENTAGE_DENOMINATOR;
        let pool_share = &payment - &fee;

        self.candidates(voting_id).insert(caller.clone());
        voting.pool += &pool_share;
        self.votings(voting_id).set(&voting);
        self.fee_balance().update(|balance| *balance += &fee);

        self.join_event(voting_id, &caller, &pool_share);
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per candidate, cast for any candidate of the same voting.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, voting_id: u64, candidate: ManagedAddress) {
        let caller = self.blockchain().get_caller();

        let mut voting = self.require_active_voting(voting_id);
        require!(
            self.candidates(voting_id).contains(&caller),
            ERR_NOT_A_CANDIDATE
        );
        require!(
            self.candidates(voting_id).contains(&candidate),
            ERR_UNKNOWN_CANDIDATE
        );
        require!(
            !self.votes_cast(voting_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        self.votes_cast(voting_id, &caller).set(true);
        let new_count = self.vote_count(voting_id, &candidate).update(|count| {
            *count += 1;
            *count
        });

        voting.record_vote(&candidate, new_count);
        self.votings(voting_id).set(&voting);

        self.vote_event(voting_id, &caller, &candidate);
    }

    // ========================================================
    // ENDPOINT: endVoting
    // Anyone can settle once the deadline has passed and a leader exists.
    // ========================================================

    #[endpoint(endVoting)]
    fn end_voting(&self, voting_id: u64) {
        let mut voting = self.require_active_voting(voting_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= voting.deadline, ERR_VOTING_NOT_OVER);

        let winner = match &voting.leader {
            Some(leader) => leader.clone(),
            None => sc_panic!(ERR_NO_LEADER),
        };

        let payout = core::mem::replace(&mut voting.pool, BigUint::zero());
        voting.status = VotingStatus::Ended;
        self.votings(voting_id).set(&voting);

        self.send().direct_egld(&winner, &payout);
        self.voting_ended_event(voting_id, &winner, &payout);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Owner withdraws accumulated platform fees.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let owner = self.require_owner();
        require!(amount <= self.fee_balance().get(), ERR_INSUFFICIENT_FEES);

        self.fee_balance().update(|balance| *balance -= &amount);

        if amount > 0u64 {
            self.send().direct_egld(&owner, &amount);
        }
        self.fees_withdrawn_event(&owner, &amount);
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        let owner = self.owner().get();
        require!(caller == owner, ERR_NOT_OWNER);
        owner
    }

    /// Loads a voting that still accepts joins, votes and settlement.
    /// Unknown ids and ended votings fail the same way.
    fn require_active_voting(&self, voting_id: u64) -> Voting<Self::Api> {
        require!(
            !self.votings(voting_id).is_empty(),
            ERR_VOTING_NOT_ACTIVE
        );
        let voting = self.votings(voting_id).get();
        require!(voting.is_active(), ERR_VOTING_NOT_ACTIVE);
        voting
    }

    fn require_existing_voting(&self, voting_id: u64) -> Voting<Self::Api> {
        require!(
            !self.votings(voting_id).is_empty(),
            ERR_VOTING_NOT_FOUND
        );
        self.votings(voting_id).get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getVotingsNum)]
    fn get_votings_num(&self) -> u64 {
        self.voting_count().get()
    }

    #[view(getVoting)]
    fn get_voting(&self, voting_id: u64) -> Voting<Self::Api> {
        self.require_existing_voting(voting_id)
    }

    #[view(getVotingActive)]
    fn get_voting_active(&self, voting_id: u64) -> bool {
        self.require_existing_voting(voting_id).is_active()
    }

    #[view(getVotersNum)]
    fn get_voters_num(&self, voting_id: u64) -> u64 {
        self.require_existing_voting(voting_id);
        self.candidates(voting_id).len() as u64
    }

    #[view(getVotingDeadline)]
    fn get_voting_deadline(&self, voting_id: u64) -> u64 {
        self.require_existing_voting(voting_id).deadline
    }

    #[view(getLeader)]
    fn get_leader(&self, voting_id: u64) -> ManagedAddress {
        match self.require_existing_voting(voting_id).leader {
            Some(leader) => leader,
            None => sc_panic!(ERR_NO_LEADER),
        }
    }

    #[view(getVotingBudget)]
    fn get_voting_budget(&self, voting_id: u64) -> BigUint {
        self.require_existing_voting(voting_id).pool
    }

    #[view(getBudget)]
    fn get_budget(&self) -> BigUint {
        self.fee_balance().get()
    }

    #[view(getCandidates)]
    fn get_candidates(
        &self,
        voting_id: u64,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<ManagedAddress> {
        self.require_existing_voting(voting_id);

        let mut result = MultiValueEncoded::new();
        // compared in u64: usize is 32 bits on wasm
        let total = self.candidates(voting_id).len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        for (idx, candidate) in self.candidates(voting_id).iter().enumerate() {
            let idx = idx as u64;
            if idx >= end {
                break;
            }
            if idx >= from {
                result.push(candidate);
            }
        }
        result
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self, voting_id: u64, candidate: &ManagedAddress) -> u64 {
        self.require_existing_voting(voting_id);
        self.vote_count(voting_id, candidate).get()
    }

    #[view(isCandidate)]
    fn is_candidate(&self, voting_id: u64, address: &ManagedAddress) -> bool {
        self.require_existing_voting(voting_id);
        self.candidates(voting_id).contains(address)
    }

    #[view(hasVoted)]
    fn has_voted(&self, voting_id: u64, address: &ManagedAddress) -> bool {
        self.require_existing_voting(voting_id);
        self.votes_cast(voting_id, address).get()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<BigUint, u64, u64> {
        (BigUint::from(ENTRY_FEE), FEE_PERCENTAGE, VOTING_DURATION).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("votingCreated")]
    fn voting_created_event(&self, #[indexed] voting_id: u64, deadline: u64);

    #[event("join")]
    fn join_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] candidate: &ManagedAddress,
        pool_share: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] candidate: &ManagedAddress,
    );

    #[event("votingEnded")]
    fn voting_ended_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] winner: &ManagedAddress,
        payout: &BigUint,
    );

    #[event("feesWithdrawn")]
    fn fees_withdrawn_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Fee pool ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("feeBalance")]
    fn fee_balance(&self) -> SingleValueMapper<BigUint>;

    // ── Votings ──

    #[storage_mapper("votingCount")]
    fn voting_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votings")]
    fn votings(&self, voting_id: u64) -> SingleValueMapper<Voting<Self::Api>>;

    #[storage_mapper("candidates")]
    fn candidates(&self, voting_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("votesCast")]
    fn votes_cast(&self, voting_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("voteCount")]
    fn vote_count(&self, voting_id: u64, candidate: &ManagedAddress) -> SingleValueMapper<u64>;
}
