//! Scripted fake collaborators for exercising the gate without platform
//! hardware, shared by test modules across the crate.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;

use crate::platform::{
    NavigationSignal, PasscodeChallenge, PasscodeResponse, PlatformError, PromptChoice,
    PromptRequest, SensorKind, SensorProvider, SensorResponse, UserPrompt,
};
use crate::storage::{KeyValueStore, StorageError};

/// Load the test environment once for the whole test binary.
pub(crate) fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

/// Sensor driver double with scripted availability and session responses.
///
/// Tracks how many sessions were opened and released, and the highest
/// number of sessions ever open at once, so tests can assert the
/// open/always-release discipline.
pub(crate) struct FakeSensor {
    availability: Mutex<Result<bool, PlatformError>>,
    kind: Mutex<Result<Option<SensorKind>, PlatformError>>,
    responses: Mutex<VecDeque<Result<SensorResponse, PlatformError>>>,
    latency: bool,
    authenticate_calls: AtomicUsize,
    release_calls: AtomicUsize,
    current_sessions: AtomicUsize,
    max_sessions: AtomicUsize,
}

impl FakeSensor {
    fn new(
        availability: Result<bool, PlatformError>,
        kind: Result<Option<SensorKind>, PlatformError>,
    ) -> Self {
        Self {
            availability: Mutex::new(availability),
            kind: Mutex::new(kind),
            responses: Mutex::new(VecDeque::new()),
            latency: false,
            authenticate_calls: AtomicUsize::new(0),
            release_calls: AtomicUsize::new(0),
            current_sessions: AtomicUsize::new(0),
            max_sessions: AtomicUsize::new(0),
        }
    }

    /// A usable sensor of the given kind.
    pub(crate) fn capable(kind: SensorKind) -> Self {
        Self::new(Ok(true), Ok(Some(kind)))
    }

    /// A device without a biometric sensor.
    pub(crate) fn absent() -> Self {
        Self::new(Ok(false), Ok(None))
    }

    /// A driver that faults on every query.
    pub(crate) fn faulty(message: &str) -> Self {
        Self::new(
            Err(PlatformError::Sensor(message.to_string())),
            Err(PlatformError::Sensor(message.to_string())),
        )
    }

    /// Queue the response for the next authentication session.
    pub(crate) fn with_response(self, response: Result<SensorResponse, PlatformError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Make each session take a moment, so concurrent attempts can overlap
    /// if nothing serializes them.
    pub(crate) fn with_latency(mut self) -> Self {
        self.latency = true;
        self
    }

    /// Change availability between calls, as the OS revoking the sensor.
    pub(crate) fn set_available(&self, available: bool) {
        *self.availability.lock().unwrap() = Ok(available);
    }

    pub(crate) fn authenticate_calls(&self) -> usize {
        self.authenticate_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn release_calls(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn max_concurrent_sessions(&self) -> usize {
        self.max_sessions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SensorProvider for FakeSensor {
    async fn is_available(&self) -> Result<bool, PlatformError> {
        self.availability.lock().unwrap().clone()
    }

    async fn sensor_kind(&self) -> Result<Option<SensorKind>, PlatformError> {
        self.kind.lock().unwrap().clone()
    }

    async fn authenticate(&self, _description: &str) -> Result<SensorResponse, PlatformError> {
        self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
        let open = self.current_sessions.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_sessions.fetch_max(open, Ordering::SeqCst);

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(SensorResponse::Denied));

        if self.latency {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        response
    }

    async fn release(&self) {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .current_sessions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

/// Passcode challenge double with scripted support and verdict.
pub(crate) struct FakePasscode {
    supported: Result<bool, PlatformError>,
    response: Result<PasscodeResponse, PlatformError>,
    authenticate_calls: AtomicUsize,
}

impl FakePasscode {
    /// A device with a passcode that resolves every challenge as given.
    pub(crate) fn supported(response: PasscodeResponse) -> Self {
        Self {
            supported: Ok(true),
            response: Ok(response),
            authenticate_calls: AtomicUsize::new(0),
        }
    }

    /// A device that confirms it has no passcode configured.
    pub(crate) fn unsupported() -> Self {
        Self {
            supported: Ok(false),
            response: Ok(PasscodeResponse::Denied),
            authenticate_calls: AtomicUsize::new(0),
        }
    }

    /// A platform that cannot answer the support query.
    pub(crate) fn support_unknown(message: &str) -> Self {
        Self {
            supported: Err(PlatformError::Passcode(message.to_string())),
            response: Ok(PasscodeResponse::Denied),
            authenticate_calls: AtomicUsize::new(0),
        }
    }

    /// A device with a passcode whose challenge UI faults.
    pub(crate) fn supported_but_faulty(message: &str) -> Self {
        Self {
            supported: Ok(true),
            response: Err(PlatformError::Passcode(message.to_string())),
            authenticate_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn authenticate_calls(&self) -> usize {
        self.authenticate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasscodeChallenge for FakePasscode {
    async fn is_supported(&self) -> Result<bool, PlatformError> {
        self.supported.clone()
    }

    async fn authenticate(&self) -> Result<PasscodeResponse, PlatformError> {
        self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Records the navigation directives the flows fire.
pub(crate) struct FakeNavigation {
    resets: AtomicUsize,
    suppressions: AtomicUsize,
}

impl FakeNavigation {
    pub(crate) fn new() -> Self {
        Self {
            resets: AtomicUsize::new(0),
            suppressions: AtomicUsize::new(0),
        }
    }

    pub(crate) fn resets(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }

    pub(crate) fn suppressions(&self) -> usize {
        self.suppressions.load(Ordering::SeqCst)
    }
}

impl NavigationSignal for FakeNavigation {
    fn reset_to_unauthenticated_root(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }

    fn suppress_auto_unlock(&self) {
        self.suppressions.fetch_add(1, Ordering::SeqCst);
    }
}

/// Dialog double answering scripted choices, in order. When the script
/// runs out the user backs out, which is the safe default for every flow
/// under test.
pub(crate) struct FakePrompt {
    answers: Mutex<VecDeque<PromptChoice>>,
    confirms: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl FakePrompt {
    pub(crate) fn answering(choices: impl IntoIterator<Item = PromptChoice>) -> Self {
        Self {
            answers: Mutex::new(choices.into_iter().collect()),
            confirms: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Number of two-action prompts shown so far.
    pub(crate) fn confirms_shown(&self) -> usize {
        self.confirms.lock().unwrap().len()
    }

    /// Messages of the notices shown so far.
    pub(crate) fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserPrompt for FakePrompt {
    async fn confirm(&self, request: PromptRequest<'_>) -> PromptChoice {
        self.confirms.lock().unwrap().push(request.message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PromptChoice::Cancelled)
    }

    async fn notice(&self, _title: &str, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

/// Key-value store double: an in-memory map plus failure switches and a log
/// of attempted removals in order.
pub(crate) struct ScriptedStore {
    entries: tokio::sync::Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    failing_removals: Mutex<HashSet<String>>,
    removals: Mutex<Vec<String>>,
}

impl ScriptedStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: tokio::sync::Mutex::new(HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            failing_removals: Mutex::new(HashSet::new()),
            removals: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_removal_of(&self, key: &str) {
        self.failing_removals.lock().unwrap().insert(key.to_string());
    }

    /// Keys whose removal was attempted, in call order.
    pub(crate) fn removals(&self) -> Vec<String> {
        self.removals.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyValueStore for ScriptedStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Read("scripted read failure".to_string()));
        }
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write("scripted write failure".to_string()));
        }
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.removals.lock().unwrap().push(key.to_string());
        if self.failing_removals.lock().unwrap().contains(key) {
            return Err(StorageError::Delete("scripted delete failure".to_string()));
        }
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
