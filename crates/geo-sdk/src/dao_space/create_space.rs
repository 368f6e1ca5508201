use tracing::{debug, info};

use crate::codec::bytes::{Address, decode_bytes16, to_prefixed_hex};
use crate::config::{Network, NetworkConfig};
use crate::contracts::{DaoSpaceCreation, VotingSettings, create_dao_space_calldata};
use crate::error::{Result, ValidationError};
use crate::genesis::types;
use crate::graph::{CreateEntityParams, create_entity};
use crate::model::{Edit, Id, Op};
use crate::publish::EditPublisher;
use crate::validate::Scope;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSpaceParams {
    pub name: String,
    pub voting_settings: VotingSettings,
    /// Bytes16 hex space ids. At least one is required.
    pub initial_editor_space_ids: Vec<String>,
    /// Bytes16 hex space ids.
    pub initial_member_space_ids: Vec<String>,
    pub author: String,
    /// Published after the ops creating the space entity.
    pub ops: Vec<Op>,
    pub initial_topic_id: Option<String>,
    pub network: Network,
    /// Overrides the factory of the network config.
    pub dao_space_factory_address: Option<Address>,
}

impl CreateSpaceParams {
    pub fn new(
        name: impl Into<String>,
        voting_settings: VotingSettings,
        initial_editor_space_ids: Vec<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            voting_settings,
            initial_editor_space_ids,
            initial_member_space_ids: Vec::new(),
            author: author.into(),
            ops: Vec::new(),
            initial_topic_id: None,
            network: Network::default(),
            dao_space_factory_address: None,
        }
    }

    /// Targets a deployment described by `config`, taking its network and,
    /// unless already overridden, its DAO space factory.
    pub fn with_config(mut self, config: &NetworkConfig) -> Self {
        self.network = config.network;
        self.dao_space_factory_address = self
            .dao_space_factory_address
            .or(config.dao_space_factory_address);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSpaceResult {
    /// The DAO space factory.
    pub to: Address,
    /// `0x`-prefixed hex.
    pub calldata: String,
    pub space_entity_id: Id,
    pub content_id: String,
}

/// Publishes the initial edit of a new DAO space and builds the factory call
/// deploying it.
///
/// The edit starts with a `Space`-typed entity named after the space,
/// followed by `params.ops`. Every parameter is checked before publishing.
pub async fn create_space<P>(publisher: &P, params: CreateSpaceParams) -> Result<CreateSpaceResult>
where
    P: EditPublisher + ?Sized,
{
    let scope = Scope::new("createSpace");
    let author = scope.id("author", &params.author)?;
    let editors = params
        .initial_editor_space_ids
        .iter()
        .map(|id| decode_bytes16(id, "initialEditorSpaceIds"))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let members = params
        .initial_member_space_ids
        .iter()
        .map(|id| decode_bytes16(id, "initialMemberSpaceIds"))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let topic = scope
        .optional_id("initialTopicId", params.initial_topic_id.as_deref())?
        .map(Id::into_bytes)
        .unwrap_or_default();
    if editors.is_empty() {
        return Err(ValidationError::invalid_argument(
            scope.label("initialEditorSpaceIds"),
            "at least one initial editor is required",
        )
        .into());
    }
    params.voting_settings.validate()?;

    let config = params.network.config();
    let factory = params
        .dao_space_factory_address
        .or(config.dao_space_factory_address)
        .ok_or_else(|| {
            ValidationError::invalid_argument(
                scope.label("daoSpaceFactoryAddress"),
                format!("no DAO space factory is configured for {}", params.network),
            )
        })?;

    let space_entity = create_entity(CreateEntityParams {
        name: Some(params.name.clone()),
        types: vec![types::space().to_string()],
        ..Default::default()
    })?;
    let mut ops = space_entity.ops;
    ops.extend(params.ops);

    let edit = Edit {
        name: format!("Create DAO Space: {}", params.name),
        ops,
        author,
        network: params.network,
    };
    debug!(space_entity = %space_entity.id, ops = edit.ops.len(), "publishing DAO space edit");
    let published = publisher.publish_edit(&edit).await?;

    let calldata = create_dao_space_calldata(&DaoSpaceCreation {
        voting_settings: params.voting_settings,
        initial_editors: &editors,
        initial_members: &members,
        content_id: &published.content_id,
        initial_topic: topic,
    })?;

    info!(
        space_entity = %space_entity.id,
        content_id = %published.content_id,
        factory = %factory,
        "built DAO space creation calldata"
    );
    Ok(CreateSpaceResult {
        to: factory,
        calldata: to_prefixed_hex(&calldata),
        space_entity_id: space_entity.id,
        content_id: published.content_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::abi::selector;
    use crate::error::{Error, ErrorKind};
    use crate::genesis::properties;
    use crate::graph::{DeleteEntityParams, delete_entity};
    use crate::publish::mock::{CONTENT_ID, MockPublisher};

    const AUTHOR: &str = "0eed5491b917cf58b33ac81255fe7ae9";
    const EDITOR: &str = "0x0eed5491b917cf58b33ac81255fe7ae9";
    const MEMBER: &str = "0x1cc6995f6b8a4b3b9c6e2a4d1e6f7a8b";

    fn factory() -> Address {
        Address::from_bytes([0x42; 20])
    }

    fn settings() -> VotingSettings {
        VotingSettings {
            slow_path_percentage_threshold: 50.0,
            fast_path_flat_threshold: 1,
            quorum: 1,
            duration_in_days: 1,
        }
    }

    fn params() -> CreateSpaceParams {
        CreateSpaceParams {
            initial_member_space_ids: vec![MEMBER.to_string()],
            dao_space_factory_address: Some(factory()),
            ..CreateSpaceParams::new("Research DAO", settings(), vec![EDITOR.to_string()], AUTHOR)
        }
    }

    #[tokio::test]
    async fn test_create_space() {
        let publisher = MockPublisher::new();
        let extra = delete_entity(DeleteEntityParams {
            id: MEMBER[2..].to_string(),
        })
        .unwrap();

        let result = create_space(
            &publisher,
            CreateSpaceParams {
                ops: extra.ops.clone(),
                ..params()
            },
        )
        .await
        .unwrap();

        assert_eq!(result.to, factory());
        assert_eq!(result.content_id, CONTENT_ID);
        let prefix = format!(
            "0x{}",
            hex::encode(selector(
                "createDAOSpaceProxy((uint32,uint64,uint64,uint64),bytes16[],bytes16[],bytes,bytes16)"
            ))
        );
        assert!(result.calldata.starts_with(&prefix));

        let edits = publisher.published();
        assert_eq!(edits.len(), 1);
        let edit = &edits[0];
        assert_eq!(edit.name, "Create DAO Space: Research DAO");
        assert_eq!(edit.author.to_string(), AUTHOR);
        // entity, its Space type relation, then the caller's ops
        assert_eq!(edit.ops.len(), 3);
        assert_eq!(edit.ops[0].subject(), result.space_entity_id);
        match &edit.ops[1] {
            Op::CreateRelation(rel) => {
                assert_eq!(rel.relation_type, properties::types());
                assert_eq!(rel.to, types::space());
            }
            other => panic!("Expected CreateRelation op, got {:?}", other),
        }
        assert_eq!(edit.ops[2], extra.ops[0]);
    }

    #[tokio::test]
    async fn test_factory_from_config_or_error() {
        let publisher = MockPublisher::new();
        let err = create_space(
            &publisher,
            CreateSpaceParams {
                dao_space_factory_address: None,
                ..params()
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::InvalidArgument));
        assert_eq!(
            err.to_string(),
            "Invalid value for `daoSpaceFactoryAddress` in `createSpace`: no DAO space factory is configured for TESTNET"
        );
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn test_factory_from_deployment_config() {
        let publisher = MockPublisher::new();
        let config = NetworkConfig::testnet().with_dao_space_factory(factory());

        let result = create_space(
            &publisher,
            CreateSpaceParams {
                dao_space_factory_address: None,
                ..params()
            }
            .with_config(&config),
        )
        .await
        .unwrap();
        assert_eq!(result.to, factory());

        let explicit = Address::from_bytes([0x07; 20]);
        let overridden = CreateSpaceParams {
            dao_space_factory_address: Some(explicit),
            ..params()
        }
        .with_config(&config);
        assert_eq!(overridden.dao_space_factory_address, Some(explicit));
    }

    #[tokio::test]
    async fn test_validation_happens_before_publishing() {
        let publisher = MockPublisher::new();

        let cases = vec![
            CreateSpaceParams {
                initial_editor_space_ids: vec![],
                ..params()
            },
            CreateSpaceParams {
                initial_editor_space_ids: vec!["0x1234".to_string()],
                ..params()
            },
            CreateSpaceParams {
                initial_member_space_ids: vec![MEMBER[2..].to_string()],
                ..params()
            },
            CreateSpaceParams {
                initial_topic_id: Some("topic".to_string()),
                ..params()
            },
            CreateSpaceParams {
                author: "nobody".to_string(),
                ..params()
            },
            CreateSpaceParams {
                voting_settings: VotingSettings {
                    slow_path_percentage_threshold: 150.0,
                    ..settings()
                },
                ..params()
            },
        ];

        for case in cases {
            let err = create_space(&publisher, case).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "{:?}", err);
        }
        assert!(publisher.published().is_empty());

        let err = create_space(
            &publisher,
            CreateSpaceParams {
                initial_editor_space_ids: vec!["0x1234".to_string()],
                ..params()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "initialEditorSpaceIds must be bytes16 hex (0x followed by 32 hex chars). Received: 0x1234"
        );
    }

    #[tokio::test]
    async fn test_topic_is_encoded_last() {
        let publisher = MockPublisher::new();
        let topic = "7a3d1e2f4b5c4d6e8f9a0b1c2d3e4f50";
        let result = create_space(
            &publisher,
            CreateSpaceParams {
                initial_topic_id: Some(topic.to_string()),
                ..params()
            },
        )
        .await
        .unwrap();

        // selector (8 hex chars after 0x) + 7 head words, then the topic word
        let start = 2 + 8 + 7 * 64;
        assert_eq!(&result.calldata[start..start + 32], topic);
        assert_eq!(&result.calldata[start + 32..start + 64], "0".repeat(32));
    }
}
