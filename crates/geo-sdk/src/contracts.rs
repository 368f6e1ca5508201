//! Calldata for the Geo space contracts.
//!
//! All publishing goes through the space registry's `enter` call, which
//! routes an action (identified by a keccak-256 label) from one space to
//! another. DAO spaces additionally take proposals whose actions are plain
//! contract calls, and new spaces come from a registry or factory call.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::codec::abi::{Token, encode, encode_function_call, keccak256};
use crate::codec::bytes::Address;
use crate::error::ValidationError;
use crate::validate::Scope;

const ENTER: &str = "enter(bytes16,bytes16,bytes32,bytes32,bytes,bytes)";
const PUBLISH: &str = "publish(bytes32,bytes,bytes)";
const CREATE_PERSONAL_SPACE: &str = "createPersonalSpace()";
const CREATE_DAO_SPACE_PROXY: &str =
    "createDAOSpaceProxy((uint32,uint64,uint64,uint64),bytes16[],bytes16[],bytes,bytes16)";

/// Percentages are sent as parts per million.
const RATIO_BASE_PER_PERCENT: f64 = 10_000.0;
const SECONDS_PER_DAY: u64 = 86_400;

lazy_static! {
    /// Registry action for edits published directly by a space.
    pub static ref EDITS_PUBLISHED: [u8; 32] = keccak256(b"GOVERNANCE.EDITS_PUBLISHED");
    /// Registry action for a new DAO proposal.
    pub static ref PROPOSAL_CREATED: [u8; 32] = keccak256(b"GOVERNANCE.PROPOSAL_CREATED");
}

pub const EMPTY_TOPIC: [u8; 32] = [0u8; 32];

/// Accepted by the registry only when the caller is the source space itself.
pub const EMPTY_SIGNATURE: &[u8] = &[];

/// ABI-encodes a content identifier as a single `string` parameter, the
/// form indexers read edit URIs in.
pub fn encode_content_uri(content_id: &str) -> Vec<u8> {
    encode(&[Token::String(content_id.to_string())])
}

/// `SpaceRegistry.enter(fromSpaceId, toSpaceId, action, topic, data, signature)`
pub fn encode_enter(
    from_space: &[u8; 16],
    to_space: &[u8; 16],
    action: &[u8; 32],
    topic: &[u8; 32],
    data: &[u8],
    signature: &[u8],
) -> Vec<u8> {
    encode_function_call(
        ENTER,
        &[
            Token::FixedBytes(from_space.to_vec()),
            Token::FixedBytes(to_space.to_vec()),
            Token::FixedBytes(action.to_vec()),
            Token::FixedBytes(topic.to_vec()),
            Token::Bytes(data.to_vec()),
            Token::Bytes(signature.to_vec()),
        ],
    )
}

/// `DAOSpace.publish(topic, editsContentUri, editsMetadata)`
pub fn encode_publish(topic: &[u8; 32], content_uri: &[u8], metadata: &[u8]) -> Vec<u8> {
    encode_function_call(
        PUBLISH,
        &[
            Token::FixedBytes(topic.to_vec()),
            Token::Bytes(content_uri.to_vec()),
            Token::Bytes(metadata.to_vec()),
        ],
    )
}

/// `SpaceRegistry.createPersonalSpace()`
pub fn create_personal_space_calldata() -> Vec<u8> {
    encode_function_call(CREATE_PERSONAL_SPACE, &[])
}

// =============================================================================
// PROPOSALS
// =============================================================================

/// Which execution path a DAO proposal takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VotingMode {
    /// Percentage threshold over the full voting period.
    Slow,
    /// Flat approval count; executes as soon as it is reached.
    #[default]
    Fast,
}

impl VotingMode {
    /// The `uint8` the governance contract expects.
    pub fn discriminant(self) -> u8 {
        match self {
            VotingMode::Slow => 0,
            VotingMode::Fast => 1,
        }
    }
}

/// A contract call executed if a proposal passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalAction {
    pub to: Address,
    /// Wei sent with the call.
    pub value: u128,
    pub data: Vec<u8>,
}

/// `abi.encode(bytes16 proposalId, uint8 votingMode, (address,uint256,bytes)[] actions)`
pub fn encode_proposal_payload(
    proposal_id: &[u8; 16],
    voting_mode: VotingMode,
    actions: &[ProposalAction],
) -> Vec<u8> {
    let actions = actions
        .iter()
        .map(|action| {
            Token::Tuple(vec![
                Token::Address(action.to),
                Token::Uint(action.value),
                Token::Bytes(action.data.clone()),
            ])
        })
        .collect();

    encode(&[
        Token::FixedBytes(proposal_id.to_vec()),
        Token::Uint(voting_mode.discriminant().into()),
        Token::Array(actions),
    ])
}

// =============================================================================
// DAO SPACE FACTORY
// =============================================================================

/// Governance parameters of a new DAO space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingSettings {
    /// Share of votes (0 to 100, fractions allowed) a slow-path proposal needs.
    pub slow_path_percentage_threshold: f64,
    /// Approvals a fast-path proposal needs.
    pub fast_path_flat_threshold: u64,
    pub quorum: u64,
    pub duration_in_days: u64,
}

impl VotingSettings {
    /// Checks that the settings fit the factory's parameter types.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let scope = Scope::new("createSpace").within("votingSettings");
        let pct = self.slow_path_percentage_threshold;
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(ValidationError::invalid_argument(
                scope.label("slowPathPercentageThreshold"),
                format!("expected a percentage between 0 and 100, got {}", pct),
            ));
        }
        if self.duration_in_days.checked_mul(SECONDS_PER_DAY).is_none() {
            return Err(ValidationError::invalid_argument(
                scope.label("durationInDays"),
                format!("{} days does not fit in uint64 seconds", self.duration_in_days),
            ));
        }
        Ok(())
    }

    fn to_token(self) -> Token {
        let ratio = (self.slow_path_percentage_threshold * RATIO_BASE_PER_PERCENT).round() as u128;
        Token::Tuple(vec![
            Token::Uint(ratio),
            Token::Uint(self.fast_path_flat_threshold.into()),
            Token::Uint(self.quorum.into()),
            Token::Uint(u128::from(self.duration_in_days) * u128::from(SECONDS_PER_DAY)),
        ])
    }
}

/// Arguments of `createDAOSpaceProxy`, already decoded to raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct DaoSpaceCreation<'a> {
    pub voting_settings: VotingSettings,
    pub initial_editors: &'a [[u8; 16]],
    pub initial_members: &'a [[u8; 16]],
    pub content_id: &'a str,
    /// Zero when the space starts without a topic.
    pub initial_topic: [u8; 16],
}

/// `DAOSpaceFactory.createDAOSpaceProxy(votingSettings, initialEditorSpaceIds,
/// initialMemberSpaceIds, initialEditsContentUri, initialTopicId)`
pub fn create_dao_space_calldata(args: &DaoSpaceCreation<'_>) -> Result<Vec<u8>, ValidationError> {
    args.voting_settings.validate()?;
    if args.initial_editors.is_empty() {
        return Err(ValidationError::invalid_argument(
            Scope::new("createSpace").label("initialEditorSpaceIds"),
            "at least one initial editor is required",
        ));
    }

    let space_ids = |ids: &[[u8; 16]]| {
        Token::Array(ids.iter().map(|id| Token::FixedBytes(id.to_vec())).collect())
    };

    Ok(encode_function_call(
        CREATE_DAO_SPACE_PROXY,
        &[
            args.voting_settings.to_token(),
            space_ids(args.initial_editors),
            space_ids(args.initial_members),
            Token::Bytes(encode_content_uri(args.content_id)),
            Token::FixedBytes(args.initial_topic.to_vec()),
        ],
    ))
}
