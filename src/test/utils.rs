// Test utilities shared across unit tests
// Only compiled when running tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::errors::GatewayError;
use crate::gateway::{AuthApi, AuthSession, RequisitionApi};
use crate::types::requisition::{CreateRequisitionData, Requisition, RequisitionQuery};
use crate::types::user::{LoginData, RegisterData, UpdateProfileData, User};

/// A requisition fixture with server-assigned id and timestamps
pub fn requisition_named(id: &str, name: &str) -> Requisition {
    Requisition {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        measurements: Default::default(),
        contact_info: None,
        status: Default::default(),
        priority: Default::default(),
        due_date: None,
        created_at: "2024-01-05T10:00:00Z".to_string(),
        updated_at: "2024-01-05T10:00:00Z".to_string(),
    }
}

/// A user fixture as the backend would return it
pub fn user_named(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        phone: None,
        role: Default::default(),
        is_active: true,
        last_login: None,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

type ListScript = (
    Option<oneshot::Receiver<()>>,
    Result<Vec<Requisition>, GatewayError>,
);

/// Scripted requisition gateway
///
/// Responses are consumed in call order; a list script may carry a gate
/// so a test can decide when that response "arrives". Calling an
/// operation with nothing scripted is a test bug and panics.
#[derive(Default)]
pub struct ScriptedRequisitionApi {
    lists: Mutex<VecDeque<ListScript>>,
    fetches: Mutex<VecDeque<Result<Requisition, GatewayError>>>,
    creates: Mutex<VecDeque<Result<Requisition, GatewayError>>>,
    updates: Mutex<VecDeque<Result<Requisition, GatewayError>>>,
    deletes: Mutex<VecDeque<Result<(), GatewayError>>>,
}

impl ScriptedRequisitionApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_list(
        &self,
        gate: Option<oneshot::Receiver<()>>,
        result: Result<Vec<Requisition>, GatewayError>,
    ) {
        self.lists.lock().unwrap().push_back((gate, result));
    }

    pub fn script_fetch(&self, result: Result<Requisition, GatewayError>) {
        self.fetches.lock().unwrap().push_back(result);
    }

    pub fn script_create(&self, result: Result<Requisition, GatewayError>) {
        self.creates.lock().unwrap().push_back(result);
    }

    pub fn script_update(&self, result: Result<Requisition, GatewayError>) {
        self.updates.lock().unwrap().push_back(result);
    }

    pub fn script_delete(&self, result: Result<(), GatewayError>) {
        self.deletes.lock().unwrap().push_back(result);
    }
}

#[async_trait]
impl RequisitionApi for ScriptedRequisitionApi {
    async fn list(&self, _query: &RequisitionQuery) -> Result<Vec<Requisition>, GatewayError> {
        let (gate, result) = self
            .lists
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted list call");
        if let Some(gate) = gate {
            gate.await.expect("list gate dropped");
        }
        result
    }

    async fn fetch(&self, _id: &str) -> Result<Requisition, GatewayError> {
        self.fetches
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted fetch call")
    }

    async fn create(&self, _data: &CreateRequisitionData) -> Result<Requisition, GatewayError> {
        self.creates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted create call")
    }

    async fn update(
        &self,
        _id: &str,
        _data: &CreateRequisitionData,
    ) -> Result<Requisition, GatewayError> {
        self.updates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted update call")
    }

    async fn delete(&self, _id: &str) -> Result<(), GatewayError> {
        self.deletes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted delete call")
    }
}

/// Scripted auth gateway, consumed in call order like
/// [`ScriptedRequisitionApi`]
#[derive(Default)]
pub struct ScriptedAuthApi {
    registers: Mutex<VecDeque<Result<AuthSession, GatewayError>>>,
    logins: Mutex<VecDeque<Result<AuthSession, GatewayError>>>,
    profiles: Mutex<VecDeque<Result<User, GatewayError>>>,
    profile_updates: Mutex<VecDeque<Result<User, GatewayError>>>,
    profile_deletes: Mutex<VecDeque<Result<(), GatewayError>>>,
}

impl ScriptedAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_register(&self, result: Result<AuthSession, GatewayError>) {
        self.registers.lock().unwrap().push_back(result);
    }

    pub fn script_login(&self, result: Result<AuthSession, GatewayError>) {
        self.logins.lock().unwrap().push_back(result);
    }

    pub fn script_fetch_profile(&self, result: Result<User, GatewayError>) {
        self.profiles.lock().unwrap().push_back(result);
    }

    pub fn script_update_profile(&self, result: Result<User, GatewayError>) {
        self.profile_updates.lock().unwrap().push_back(result);
    }

    pub fn script_delete_profile(&self, result: Result<(), GatewayError>) {
        self.profile_deletes.lock().unwrap().push_back(result);
    }
}

#[async_trait]
impl AuthApi for ScriptedAuthApi {
    async fn register(&self, _data: &RegisterData) -> Result<AuthSession, GatewayError> {
        self.registers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted register call")
    }

    async fn login(&self, _data: &LoginData) -> Result<AuthSession, GatewayError> {
        self.logins
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted login call")
    }

    async fn fetch_profile(&self) -> Result<User, GatewayError> {
        self.profiles
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted profile fetch call")
    }

    async fn update_profile(&self, _data: &UpdateProfileData) -> Result<User, GatewayError> {
        self.profile_updates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted profile update call")
    }

    async fn delete_profile(&self) -> Result<(), GatewayError> {
        self.profile_deletes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted profile delete call")
    }
}
