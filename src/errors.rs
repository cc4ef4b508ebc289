pub const ERR_NOT_OWNER: &str = "Caller is not the owner";
pub const ERR_VOTING_NOT_ACTIVE: &str = "Voting does not exist or is not active";
pub const ERR_VOTING_NOT_FOUND: &str = "Voting does not exist";
pub const ERR_WRONG_ENTRY_FEE: &str = "Entry fee must be exactly 0.01 EGLD";
pub const ERR_ALREADY_JOINED: &str = "Already joined this voting";
pub const ERR_NOT_A_CANDIDATE: &str = "Only candidates of this voting can vote";
pub const ERR_UNKNOWN_CANDIDATE: &str = "Candidate has not joined this voting";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_VOTING_NOT_OVER: &str = "Voting deadline has not passed";
pub const ERR_NO_LEADER: &str = "Voting has no leader";
pub const ERR_INSUFFICIENT_FEES: &str = "Amount exceeds the fee balance";
