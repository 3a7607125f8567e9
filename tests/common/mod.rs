#![allow(dead_code)]

pub mod server;

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use games_config_rs::facade::{OperationListener, OperationSignal};
use games_config_rs::models::remote::RemoteItem;
use games_config_rs::models::{ConfigurationResource, ResourceKind};
use games_config_rs::reconcile::ConfigurationEndpoint;
use games_config_rs::util::error::ApiError;

/// In-memory stand-in for one configuration collection.
pub struct FakeEndpoint<R> {
    kind: ResourceKind,
    items: Mutex<Vec<RemoteItem>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    inserted: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
    fail_list: bool,
    fail_insert_named: Option<String>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> FakeEndpoint<R> {
    pub fn new(kind: ResourceKind, existing: &[&str]) -> Self {
        let items = existing
            .iter()
            .enumerate()
            .map(|(index, name)| RemoteItem::new(format!("{}-remote-{}", kind, index), *name))
            .collect();
        FakeEndpoint {
            kind,
            items: Mutex::new(items),
            next_id: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            inserted: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_list: false,
            fail_insert_named: None,
            _resource: PhantomData,
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_insert(mut self, name: &str) -> Self {
        self.fail_insert_named = Some(String::from(name));
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn inserted(&self) -> Vec<String> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter_map(|item| item.name().map(String::from))
            .collect()
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.lock().unwrap().iter().map(|item| item.id.clone()).collect()
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Status {
        code: 500,
        message: String::from(message),
    }
}

#[async_trait]
impl<R> ConfigurationEndpoint for FakeEndpoint<R>
where
    R: ConfigurationResource,
{
    type Resource = R;

    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn list(&self) -> Result<Vec<RemoteItem>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(server_error("backend unavailable"));
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn insert(&self, resource: R) -> Result<RemoteItem, ApiError> {
        let name = resource.display_name().to_owned();
        self.inserted.lock().unwrap().push(name.clone());
        if self.fail_insert_named.as_deref() == Some(name.as_str()) {
            return Err(server_error("insert rejected"));
        }
        let id = format!("{}-new-{}", self.kind, self.next_id.fetch_add(1, Ordering::SeqCst));
        let item = RemoteItem::new(id, name);
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.deleted.lock().unwrap().push(String::from(id));
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::Status {
                code: 404,
                message: format!("{} not found", id),
            });
        }
        Ok(())
    }
}

/// Records every signal in order.
#[derive(Default)]
pub struct RecordingListener {
    signals: Mutex<Vec<OperationSignal>>,
}

impl RecordingListener {
    pub fn signals(&self) -> Vec<OperationSignal> {
        self.signals.lock().unwrap().clone()
    }
}

impl OperationListener for RecordingListener {
    fn on_signal(&self, signal: &OperationSignal) {
        self.signals.lock().unwrap().push(signal.clone());
    }
}
