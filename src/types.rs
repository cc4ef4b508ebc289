multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Voting Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VotingStatus {
    /// Accepting joins and votes. Settles once the deadline has passed.
    Active,
    /// Pool paid out to the leader. Terminal state.
    Ended,
}

// ============================================================
// Voting — one contest instance
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Voting<M: ManagedTypeApi> {
    pub id: u64,
    pub status: VotingStatus,
    pub created_at: u64,
    /// Earliest block timestamp at which the voting can be ended
    pub deadline: u64,
    /// Net entry fees held for the winner, zero once ended
    pub pool: BigUint<M>,
    /// Candidate with the highest vote count; the first to reach a count keeps it on ties
    pub leader: Option<ManagedAddress<M>>,
    pub leader_votes: u64,
    pub total_votes: u64,
}

impl<M: ManagedTypeApi> Voting<M> {
    pub fn new(id: u64, created_at: u64, deadline: u64) -> Self {
        Voting {
            id,
            status: VotingStatus::Active,
            created_at,
            deadline,
            pool: BigUint::zero(),
            leader: None,
            leader_votes: 0,
            total_votes: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == VotingStatus::Active
    }

    /// Records a vote that brought `candidate` to `new_count` votes.
    /// Leadership only moves on a strictly higher count.
    pub fn record_vote(&mut self, candidate: &ManagedAddress<M>, new_count: u64) {
        self.total_votes += 1;
        if self.leader.is_none() || new_count > self.leader_votes {
            self.leader = Some(candidate.clone());
            self.leader_votes = new_count;
        }
    }
}
