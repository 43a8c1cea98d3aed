//! # Mock Framework
//!
//! Utilities for testing clients and sessions in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list`] or [`expect_action`] to assert behavior.
//! [`ScriptedStub`] stands in for a stub collaborator with a fixed answer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, FrameworkError};
use crate::domain::ProductId;
use crate::stubs::{MockCollaborator, StubError, StubOutcome};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls, so the test plays the part
/// of the actor and can answer with success, failure or nothing at all.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Stub collaborator that answers immediately with a scripted result and
/// counts how often it was asked.
pub struct ScriptedStub {
    name: &'static str,
    answer: Result<StubOutcome, StubError>,
    calls: AtomicUsize,
}

impl ScriptedStub {
    pub fn new(name: &'static str, answer: Result<StubOutcome, StubError>) -> Arc<Self> {
        Arc::new(Self { name, answer, calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MockCollaborator for ScriptedStub {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn request_mock_result(&self, subject: Option<ProductId>) -> Result<StubOutcome, StubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match (&self.answer, subject) {
            // echo the subject back, as the AR stub does
            (Ok(StubOutcome::Product(_)), Some(id)) => Ok(StubOutcome::Product(id)),
            (answer, _) => answer.clone(),
        }
    }

    fn cancel(&self) -> bool {
        false
    }

    fn is_pending(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CatalogClient;
    use crate::domain::{Category, Product, CategoryKind};
    use crate::product_actor::{CatalogError, ProductAction, ProductActionResult};

    #[tokio::test]
    async fn test_mock_client() {
        let (products, mut product_rx) = create_mock_client::<Product>(10);
        let (categories, _category_rx) = create_mock_client::<Category>(10);
        let catalog = CatalogClient::new(products, categories);

        let search_task = tokio::spawn(async move { catalog.search("mouse").await });

        let responder = expect_list(&mut product_rx).await.expect("Expected List request");
        responder.send(Ok(vec![
            Product::new(1, "Wireless Gaming Mouse", 89.99, 119.99, CategoryKind::Gaming, ""),
            Product::new(2, "Desk Lamp", 20.0, 20.0, CategoryKind::Furniture, ""),
        ])).unwrap();

        let hits = search_task.await.unwrap().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId(1));
    }

    #[tokio::test]
    async fn test_mock_action_error_mapping() {
        let (products, mut product_rx) = create_mock_client::<Product>(10);
        let (categories, _category_rx) = create_mock_client::<Category>(10);
        let catalog = CatalogClient::new(products, categories);

        let task = tokio::spawn(async move { catalog.check_availability(ProductId(7)).await });

        let (id, action, responder) = expect_action(&mut product_rx).await.expect("Expected Action request");
        assert_eq!(id, ProductId(7));
        assert!(matches!(action, ProductAction::CheckAvailability));
        responder.send(Err(FrameworkError::NotFound("7".to_string()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(CatalogError::ProductNotFound(ProductId(7))));
    }

    #[tokio::test]
    async fn test_mock_action_unexpected_result() {
        let (products, mut product_rx) = create_mock_client::<Product>(10);
        let (categories, _category_rx) = create_mock_client::<Category>(10);
        let catalog = CatalogClient::new(products, categories);

        let task = tokio::spawn(async move { catalog.check_availability(ProductId(3)).await });
        let (_, _, responder) = expect_action(&mut product_rx).await.unwrap();
        responder.send(Ok(ProductActionResult::QuoteSavings { amount: 1.0, percent: 1 })).unwrap();

        assert!(matches!(task.await.unwrap(), Err(CatalogError::UnexpectedResult(_))));
    }

    #[tokio::test]
    async fn test_scripted_stub_echoes_subject() {
        let stub = ScriptedStub::new("ar", Ok(StubOutcome::Product(ProductId(0))));
        assert_eq!(stub.request_mock_result(Some(ProductId(3))).await, Ok(StubOutcome::Product(ProductId(3))));
        assert_eq!(stub.calls(), 1);
    }
}
