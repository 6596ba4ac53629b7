//! Password tester - wires input, the remote API, the fallback evaluator and
//! display state together.

use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::display::{BruteForceDisplay, DetailedDisplay, StrengthDisplay};
use crate::evaluator::evaluate_password_strength;
use crate::guard::BruteForceGate;
use crate::throttle::Throttle;
use crate::types::StrengthReport;
use crate::wire::{HashAlgorithm, HealthStatus, MAX_BRUTE_FORCE_ATTEMPTS, PasswordCheckResponse};

/// Longest password the backend will brute force.
pub const MAX_BRUTE_FORCE_LENGTH: usize = 6;

#[derive(Error, Debug)]
pub enum TesterError {
    #[error("Please enter a password first")]
    EmptyPassword,
    #[error("Brute-force tests are limited to {max} characters")]
    BruteForceTooLong { max: usize },
    #[error("A brute-force test is already running")]
    BruteForceInFlight,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Where a strength result came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrengthOutcome {
    Remote(PasswordCheckResponse),
    /// The strength API failed; scored locally.
    Fallback(StrengthReport),
}

impl StrengthOutcome {
    pub fn display(&self) -> StrengthDisplay {
        match self {
            StrengthOutcome::Remote(response) => StrengthDisplay::from_response(response),
            StrengthOutcome::Fallback(report) => StrengthDisplay::from_report(report),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, StrengthOutcome::Fallback(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Dropped by the input throttle.
    Throttled,
    /// Password is empty; show the "no data yet" state.
    Cleared,
    Evaluated(StrengthOutcome),
}

impl InputOutcome {
    /// Display update for this event, `None` if it was throttled.
    pub fn display(&self) -> Option<StrengthDisplay> {
        match self {
            InputOutcome::Throttled => None,
            InputOutcome::Cleared => Some(StrengthDisplay::empty()),
            InputOutcome::Evaluated(outcome) => Some(outcome.display()),
        }
    }
}

/// Password input timestamped when it happened.
#[derive(Debug)]
pub struct InputEvent {
    pub password: SecretString,
    pub at: Instant,
}

impl InputEvent {
    pub fn new(password: SecretString, at: Instant) -> Self {
        Self { password, at }
    }

    pub fn now(password: SecretString) -> Self {
        Self::new(password, Instant::now())
    }
}

/// Returns the password with surrounding whitespace removed, or `None` if
/// nothing is left.
fn trimmed(password: &SecretString) -> Option<SecretString> {
    let pwd = password.expose_secret().trim();
    if pwd.is_empty() {
        None
    } else {
        Some(SecretString::new(pwd.into()))
    }
}

pub struct PasswordTester {
    api: ApiClient,
    brute_force_gate: BruteForceGate,
    throttle: Mutex<Throttle>,
}

impl PasswordTester {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::with_client(ApiClient::new(config)?))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self {
            api,
            brute_force_gate: BruteForceGate::new(),
            throttle: Mutex::new(Throttle::default()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Scores a password remotely, falling back to the local evaluator on
    /// any API failure. Returns `None` for an empty password.
    pub async fn check_password_strength(
        &self,
        password: &SecretString,
    ) -> Option<StrengthOutcome> {
        let password = trimmed(password)?;

        match self.api.check_password(&password).await {
            Ok(response) => Some(StrengthOutcome::Remote(response)),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Strength API unavailable, using local evaluation: {}", _e);
                Some(StrengthOutcome::Fallback(evaluate_password_strength(
                    &password,
                )))
            }
        }
    }

    /// Throttled entry point for password input events.
    pub async fn on_input(&self, password: &SecretString, at: Instant) -> InputOutcome {
        let fire = self
            .throttle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .try_fire(at);
        if !fire {
            return InputOutcome::Throttled;
        }

        match self.check_password_strength(password).await {
            Some(outcome) => InputOutcome::Evaluated(outcome),
            None => InputOutcome::Cleared,
        }
    }

    /// Asks the backend for a detailed verdict. No local fallback.
    pub async fn check_detailed(
        &self,
        password: &SecretString,
    ) -> Result<DetailedDisplay, TesterError> {
        let password = trimmed(password).ok_or(TesterError::EmptyPassword)?;
        let response = self.api.check_strength(&password).await.inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Error checking password strength: {}", _e);
        })?;
        Ok(DetailedDisplay::from(&response))
    }

    /// Whether a brute-force test may be started for this password.
    pub fn brute_force_enabled(&self, password: &SecretString) -> bool {
        let len = password.expose_secret().trim().chars().count();
        (1..=MAX_BRUTE_FORCE_LENGTH).contains(&len)
    }

    pub fn brute_force_in_flight(&self) -> bool {
        self.brute_force_gate.is_in_flight()
    }

    /// Runs a brute-force simulation. At most one runs at a time; a call made
    /// while another is in flight fails with `BruteForceInFlight`. Passwords
    /// longer than [`MAX_BRUTE_FORCE_LENGTH`] are refused with
    /// `BruteForceTooLong` before anything is sent.
    ///
    /// On `Err(TesterError::Api(_))` callers show [`BruteForceDisplay::failed`].
    pub async fn run_brute_force(
        &self,
        password: &SecretString,
        algorithm: HashAlgorithm,
    ) -> Result<BruteForceDisplay, TesterError> {
        let password = trimmed(password).ok_or(TesterError::EmptyPassword)?;
        if !self.brute_force_enabled(&password) {
            return Err(TesterError::BruteForceTooLong {
                max: MAX_BRUTE_FORCE_LENGTH,
            });
        }
        let _in_flight = self
            .brute_force_gate
            .try_acquire()
            .ok_or(TesterError::BruteForceInFlight)?;

        #[cfg(feature = "tracing")]
        tracing::info!("brute-force test started ({})", algorithm);

        let response = self
            .api
            .brute_force(&password, algorithm, MAX_BRUTE_FORCE_ATTEMPTS)
            .await
            .inspect_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Error running brute force test: {}", _e);
            })?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "brute-force test finished: success={} attempts={}",
            response.success,
            response.attempts
        );

        Ok(BruteForceDisplay::from(&response))
    }

    pub async fn health(&self) -> Result<HealthStatus, TesterError> {
        Ok(self.api.health().await?)
    }
}

/// Feeds input events through the tester until `token` is cancelled or the
/// event channel closes, sending one display update per accepted event.
///
/// Events are evaluated one at a time, so updates arrive in input order and
/// a slow reply for an older password never replaces a newer update. An
/// event that arrives while a check is running waits for it, then goes
/// through the throttle with its own timestamp.
pub async fn run_input_session(
    tester: &PasswordTester,
    mut events: mpsc::Receiver<InputEvent>,
    updates: mpsc::Sender<StrengthDisplay>,
    token: CancellationToken,
) {
    loop {
        let event = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            event = events.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };

        let Some(display) = tester.on_input(&event.password, event.at).await.display() else {
            continue;
        };

        if updates.send(display).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::debug!("display receiver dropped, ending input session");
            break;
        }
    }
}
