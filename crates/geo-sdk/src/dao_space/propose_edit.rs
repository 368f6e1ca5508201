use tracing::{debug, info};

use crate::codec::bytes::{
    Address, bytes16_to_bytes32_left_aligned, decode_bytes16, decode_bytes32, to_prefixed_hex,
};
use crate::config::Network;
use crate::contracts::{
    EMPTY_SIGNATURE, EMPTY_TOPIC, PROPOSAL_CREATED, ProposalAction, VotingMode, encode_content_uri,
    encode_enter, encode_proposal_payload, encode_publish,
};
use crate::error::Result;
use crate::model::id::generate;
use crate::model::{Edit, Id, Op};
use crate::publish::EditPublisher;
use crate::validate::Scope;

#[derive(Debug, Clone, PartialEq)]
pub struct ProposeEditParams {
    pub name: String,
    pub ops: Vec<Op>,
    pub author: String,
    /// Contract address of the DAO space the proposal publishes to.
    pub dao_space_address: String,
    /// Bytes16 hex id of the proposing space.
    pub caller_space_id: String,
    /// Bytes16 hex id of the DAO space.
    pub dao_space_id: String,
    pub voting_mode: VotingMode,
    /// Bytes16 hex; generated when omitted.
    pub proposal_id: Option<String>,
    pub network: Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposeEditResult {
    pub edit_id: Id,
    pub content_id: String,
    /// The space registry.
    pub to: Address,
    /// `0x`-prefixed hex.
    pub calldata: String,
    /// Bytes16 hex.
    pub proposal_id: String,
}

/// Publishes `ops` and builds the registry call that opens a proposal in a
/// DAO space. If the proposal passes, the DAO space calls its own
/// `publish` with the edit's content identifier.
///
/// Every parameter is checked before publishing.
pub async fn propose_edit<P>(publisher: &P, params: ProposeEditParams) -> Result<ProposeEditResult>
where
    P: EditPublisher + ?Sized,
{
    let author = Scope::new("proposeEdit").id("author", &params.author)?;
    let caller_space = decode_bytes16(&params.caller_space_id, "callerSpaceId")?;
    let dao_space = decode_bytes16(&params.dao_space_id, "daoSpaceId")?;
    let dao_space_address = Address::parse_field(&params.dao_space_address, "daoSpaceAddress")?;
    let proposal_id = match params.proposal_id {
        Some(proposal_id) => proposal_id,
        None => format!("0x{}", generate()),
    };
    let proposal = decode_bytes16(&proposal_id, "proposalId")?;
    let topic = decode_bytes32(&bytes16_to_bytes32_left_aligned(&proposal_id)?)?;

    let edit = Edit {
        name: params.name,
        ops: params.ops,
        author,
        network: params.network,
    };
    debug!(
        dao_space = %params.dao_space_id,
        proposal_id = %proposal_id,
        ops = edit.ops.len(),
        "publishing proposed edit"
    );
    let published = publisher.publish_edit(&edit).await?;

    let action = ProposalAction {
        to: dao_space_address,
        value: 0,
        data: encode_publish(&EMPTY_TOPIC, &encode_content_uri(&published.content_id), &[]),
    };
    let payload = encode_proposal_payload(&proposal, params.voting_mode, &[action]);
    let calldata = encode_enter(
        &caller_space,
        &dao_space,
        &PROPOSAL_CREATED,
        &topic,
        &payload,
        EMPTY_SIGNATURE,
    );

    info!(
        edit_id = %published.edit_id,
        proposal_id = %proposal_id,
        voting_mode = ?params.voting_mode,
        "built proposal calldata"
    );
    Ok(ProposeEditResult {
        edit_id: published.edit_id,
        content_id: published.content_id,
        to: params.network.config().space_registry_address,
        calldata: to_prefixed_hex(&calldata),
        proposal_id,
    })
}
