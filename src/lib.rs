//! Password generator with a brute-force crack-time estimate.
//!
//! Generated passwords always contain at least one lowercase letter, one
//! uppercase letter, one digit and one symbol. The estimate assumes an offline
//! attacker trying one billion guesses per second.
//!
//! ```rust
//! use passgen::{estimate, generate_password, ASSUMED_ALPHABET_SIZE};
//!
//! let password = generate_password(16).expect("16 is a valid length");
//! assert_eq!(password.len(), 16);
//! println!("{password}: {}", estimate(16, ASSUMED_ALPHABET_SIZE));
//! ```

pub mod app;
pub mod charset;
pub mod crack_time;
pub mod error;
pub mod logging;
pub mod password;
pub mod settings;
pub mod widget;

pub use charset::{ASSUMED_ALPHABET_SIZE, CharClass, GENERATION_ALPHABET_SIZE};
pub use crack_time::{CrackTime, GUESSES_PER_SECOND, TimeUnit, estimate, estimate_crack_time};
pub use error::{InvalidLength, SettingsError};
pub use password::{MAX_LENGTH, MIN_LENGTH, generate_password, generate_password_with};
pub use widget::{Action, GeneratorState, Outcome, reduce};
