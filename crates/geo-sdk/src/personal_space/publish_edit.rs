use tracing::{debug, info};

use crate::codec::bytes::{Address, to_prefixed_hex};
use crate::config::Network;
use crate::contracts::{EDITS_PUBLISHED, EMPTY_SIGNATURE, EMPTY_TOPIC, encode_content_uri, encode_enter};
use crate::error::{Result, ValidationError};
use crate::model::id::{is_dashless, is_valid, parse_id};
use crate::model::{Edit, Id, Op};
use crate::publish::EditPublisher;
use crate::validate::Scope;

#[derive(Debug, Clone, PartialEq)]
pub struct PublishEditParams {
    pub name: String,
    /// Space id, either as an id or in its 32-hex on-chain form.
    pub space_id: String,
    pub ops: Vec<Op>,
    pub author: String,
    pub network: Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishEditResult {
    pub edit_id: Id,
    pub content_id: String,
    pub to: Address,
    /// `0x`-prefixed hex.
    pub calldata: String,
}

/// Resolves a personal space id to the 16 bytes the registry keys spaces by.
///
/// The 32-hex on-chain form is tried first: on-chain ids are not
/// necessarily valid UUIDs even though they share the dashless syntax.
pub fn space_id_to_bytes16(space_id: &str) -> std::result::Result<[u8; 16], ValidationError> {
    let invalid = || ValidationError::InvalidSpaceId {
        value: space_id.to_string(),
    };

    if is_dashless(space_id) {
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(space_id.to_lowercase(), &mut bytes).map_err(|_| invalid())?;
        return Ok(bytes);
    }
    if is_valid(space_id) {
        return parse_id(space_id).map(Id::into_bytes).ok_or_else(invalid);
    }
    Err(invalid())
}

/// Publishes `ops` and builds the registry call that records them in the
/// author's personal space.
///
/// The space enters itself, so the call must be sent by the space account.
/// Nothing is published if the space id or author is invalid.
pub async fn publish_edit<P>(publisher: &P, params: PublishEditParams) -> Result<PublishEditResult>
where
    P: EditPublisher + ?Sized,
{
    let space = space_id_to_bytes16(&params.space_id)?;
    let author = Scope::new("publishEdit").id("author", &params.author)?;

    let edit = Edit {
        name: params.name,
        ops: params.ops,
        author,
        network: params.network,
    };
    debug!(space = %params.space_id, ops = edit.ops.len(), "publishing edit");
    let published = publisher.publish_edit(&edit).await?;

    let calldata = encode_enter(
        &space,
        &space,
        &EDITS_PUBLISHED,
        &EMPTY_TOPIC,
        &encode_content_uri(&published.content_id),
        EMPTY_SIGNATURE,
    );
    let to = params.network.config().space_registry_address;

    info!(
        edit_id = %published.edit_id,
        content_id = %published.content_id,
        "built personal space publish calldata"
    );
    Ok(PublishEditResult {
        edit_id: published.edit_id,
        content_id: published.content_id,
        to,
        calldata: to_prefixed_hex(&calldata),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use crate::error::{Error, ErrorKind};
    use crate::graph::{CreateEntityParams, create_entity};
    use crate::publish::mock::{CONTENT_ID, MockPublisher};

    const AUTHOR: &str = "0eed5491b917cf58b33ac81255fe7ae9";

    fn params(space_id: &str) -> PublishEditParams {
        let entity = create_entity(CreateEntityParams {
            name: Some("Test Entity".to_string()),
            ..Default::default()
        })
        .unwrap();

        PublishEditParams {
            name: "Test Edit".to_string(),
            space_id: space_id.to_string(),
            ops: entity.ops,
            author: AUTHOR.to_string(),
            network: Network::Testnet,
        }
    }

    #[test]
    fn test_space_id_forms() {
        let expected = [
            0xab, 0xcd, 0xef, 0x12, 0x34, 0x56, 0x78, 0x90, 0x12, 0x34, 0x56, 0x78, 0x90, 0xab,
            0xcd, 0xef,
        ];
        assert_eq!(space_id_to_bytes16("abcdef12345678901234567890abcdef").unwrap(), expected);
        assert_eq!(space_id_to_bytes16("ABCDEF12345678901234567890ABCDEF").unwrap(), expected);
        assert_eq!(
            space_id_to_bytes16("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            *"550e8400e29b41d4a716446655440000".parse::<Id>().unwrap().as_bytes()
        );

        let err = space_id_to_bytes16("not-a-space").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid spaceId: \"not-a-space\". Expected a valid UUID or 32-character hex string."
        );
        assert_eq!(err.kind(), ErrorKind::InvalidSpaceIdentifier);
    }

    #[tokio::test]
    async fn test_publish_edit_result() {
        let publisher = MockPublisher::new();
        let space_id = "0eed5491b917cf58b33ac81255fe7ae9";
        let result = publish_edit(&publisher, params(space_id)).await.unwrap();

        assert_eq!(result.content_id, CONTENT_ID);
        assert_eq!(result.to, NetworkConfig::testnet().space_registry_address);
        assert_eq!(result.edit_id.to_string().len(), 32);

        let space: [u8; 16] = space_id_to_bytes16(space_id).unwrap();
        let expected = encode_enter(
            &space,
            &space,
            &EDITS_PUBLISHED,
            &EMPTY_TOPIC,
            &encode_content_uri(CONTENT_ID),
            EMPTY_SIGNATURE,
        );
        assert_eq!(result.calldata, to_prefixed_hex(&expected));
        assert!(result.calldata.starts_with("0x4d9ad2b3"));

        let edits = publisher.published();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].name, "Test Edit");
        assert_eq!(edits[0].author.to_string(), AUTHOR);
        assert_eq!(edits[0].ops.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_space_id_publishes_nothing() {
        let publisher = MockPublisher::new();
        let err = publish_edit(&publisher, params("invalid-space-id"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::InvalidSpaceIdentifier));
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_author() {
        let publisher = MockPublisher::new();
        let mut input = params(AUTHOR);
        input.author = "0x0000000000000000000000000000000000000000".to_string();

        let err = publish_edit(&publisher, input).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid id: \"0x0000000000000000000000000000000000000000\" for `author` in `publishEdit`"
        );
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn test_publisher_failure_propagates() {
        let publisher = MockPublisher::failing("pin failed");
        let err = publish_edit(&publisher, params(AUTHOR)).await.unwrap_err();
        match err {
            Error::Publish(e) => assert_eq!(e.message(), "pin failed"),
            other => panic!("Expected publish error, got {:?}", other),
        }
    }
}
