//! The edit publishing seam.
//!
//! Serializing an edit and pinning it to content-addressed storage happens
//! outside this crate. The space assemblers only need the resulting content
//! identifier, which they embed in calldata.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PublishError;
use crate::model::{Edit, Id};

/// What the publisher hands back for an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEdit {
    /// Content identifier, e.g. `ipfs://bafkrei...`.
    pub content_id: String,
    pub edit_id: Id,
}

/// Serializes an edit and stores it, returning its content identifier.
#[async_trait]
pub trait EditPublisher: Send + Sync {
    async fn publish_edit(&self, edit: &Edit) -> Result<PublishedEdit, PublishError>;
}

#[async_trait]
impl<P: EditPublisher + ?Sized> EditPublisher for Arc<P> {
    async fn publish_edit(&self, edit: &Edit) -> Result<PublishedEdit, PublishError> {
        (**self).publish_edit(edit).await
    }
}

#[async_trait]
impl<'a, P: EditPublisher + ?Sized> EditPublisher for &'a P {
    async fn publish_edit(&self, edit: &Edit) -> Result<PublishedEdit, PublishError> {
        (**self).publish_edit(edit).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use super::*;
    use crate::model::id::generate;

    pub(crate) const CONTENT_ID: &str =
        "ipfs://bafkreidgvpkjawlxz6sffxzwgooowe5yt7i6wsyg236mfoks77nywkptdq";

    /// Records every edit it is asked to publish. Optionally fails.
    #[derive(Default)]
    pub(crate) struct MockPublisher {
        published: Mutex<Vec<Edit>>,
        failure: Option<String>,
    }

    impl MockPublisher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                published: Mutex::new(Vec::new()),
                failure: Some(message.to_string()),
            }
        }

        pub(crate) fn published(&self) -> Vec<Edit> {
            self.published.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EditPublisher for MockPublisher {
        async fn publish_edit(&self, edit: &Edit) -> Result<PublishedEdit, PublishError> {
            if let Some(message) = &self.failure {
                return Err(PublishError::new(message.clone()));
            }
            self.published.lock().unwrap().push(edit.clone());
            Ok(PublishedEdit {
                content_id: CONTENT_ID.to_string(),
                edit_id: generate(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{CONTENT_ID, MockPublisher};
    use super::*;

    async fn publish_through<P: EditPublisher>(publisher: P) -> Result<PublishedEdit, PublishError> {
        publisher
            .publish_edit(&Edit::new("Test", Id::from_bytes([1; 16])))
            .await
    }

    #[tokio::test]
    async fn test_blanket_impls_forward() {
        let publisher = Arc::new(MockPublisher::new());

        let published = publish_through(publisher.clone()).await.unwrap();
        assert_eq!(published.content_id, CONTENT_ID);
        publish_through(&*publisher).await.unwrap();

        let edits = publisher.published();
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].name, "Test");
    }

    #[tokio::test]
    async fn test_failure_surfaces_message() {
        let err = publish_through(MockPublisher::failing("gateway timeout"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "gateway timeout");
        assert_eq!(err.to_string(), "failed to publish edit: gateway timeout");
    }
}
