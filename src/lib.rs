//! Password strength tester client
//!
//! Sends passwords to a password analysis backend for strength scoring and
//! brute-force simulation, maps the answers to display state, and scores
//! passwords locally when the strength API cannot be reached.
//!
//! # Features
//!
//! - `async` (default): Enables the HTTP client, the tester and the input session
//! - `tracing`: Enables logging via tracing crate
//! - `system-clipboard`: Enables `SystemClipboard`, a native clipboard writer
//!
//! # Environment Variables
//!
//! - `PWD_API_BASE_URL`: Backend address (default: `http://localhost:8000`)
//! - `PWD_API_TIMEOUT_SECS`: Request timeout in seconds (default: `30`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_tester::{StrengthDisplay, evaluate_password_strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password_strength(&password);
//!
//! println!("Score: {}", report.score.value());
//! println!("Strength: {}", report.label);
//! println!("Crack time: {}", report.crack_time);
//!
//! let display = StrengthDisplay::from_report(&report);
//! for line in &display.suggestions {
//!     println!("- {}", line);
//! }
//! ```
//!
//! With the `async` feature:
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use pwd_tester::{ClientConfig, HashAlgorithm, PasswordTester};
//! use secrecy::SecretString;
//!
//! let tester = PasswordTester::new(&ClientConfig::from_env()?)?;
//! let password = SecretString::new("abc".to_string().into());
//!
//! if let Some(outcome) = tester.check_password_strength(&password).await {
//!     println!("{}", outcome.display().strength_text);
//! }
//! if tester.brute_force_enabled(&password) {
//!     let result = tester.run_brute_force(&password, HashAlgorithm::Sha256).await?;
//!     println!("{} in {}", result.status, result.time_text);
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod clipboard;
mod config;
mod display;
mod evaluator;
mod guard;
mod profile;
mod sections;
mod throttle;
mod types;
mod wire;

#[cfg(feature = "async")]
mod api;
#[cfg(feature = "async")]
mod tester;

#[cfg(all(test, feature = "async"))]
mod test_support;

// Public API
pub use clipboard::{
    COPIED_LABEL, COPY_FAILED_MESSAGE, COPY_FEEDBACK_DURATION, ClipboardError, ClipboardWriter,
    CopyFeedback, CopyOutcome, MemoryClipboard, copy_suggestion,
};
pub use config::{ClientConfig, ConfigError, DEFAULT_API_BASE_URL, get_api_base_url};
pub use display::{
    BruteForceDisplay, DetailedDisplay, Indicator, MeterLevel, ResultTone, StrengthDisplay,
};
pub use evaluator::evaluate_password_strength;
pub use guard::{BruteForceGate, InFlight};
pub use profile::{CharacterProfile, SYMBOLS};
pub use throttle::{INPUT_THROTTLE_WINDOW, Throttle};
pub use types::{CrackTimeBucket, Score, StrengthLabel, StrengthReport};
pub use wire::{
    BruteForceResponse, HashAlgorithm, HealthStatus, MAX_BRUTE_FORCE_ATTEMPTS,
    PasswordCheckResponse, StrengthCheckResponse, StrengthTier, UnsupportedAlgorithm,
};

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;

#[cfg(feature = "async")]
pub use api::{ApiClient, ApiError};
#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
#[cfg(feature = "async")]
pub use tester::{
    InputEvent, InputOutcome, MAX_BRUTE_FORCE_LENGTH, PasswordTester, StrengthOutcome, TesterError,
    run_input_session,
};
