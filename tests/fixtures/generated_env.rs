// @generated by envgen from `.env`. Do not edit by hand.
//
// Accessor names are fixed at generation time; values are read from the env
// file when `init` runs. Regenerate only after adding or removing keys.

use std::path::Path;
use std::sync::OnceLock;

use envgen::runtime::{EnvSet, EnvStore, Result};

/// Env file read by [`init`] and [`Env::load`].
pub const ENV_FILE: &str = ".env";

static ENV: OnceLock<Env> = OnceLock::new();
static EMPTY: OnceLock<Env> = OnceLock::new();

/// Loads [`ENV_FILE`] into the process-wide store.
///
/// Must run once before any accessor is read. Later calls return the store
/// loaded by the first successful call.
///
/// # Errors
///
/// Returns an error if the env file is missing or cannot be read.
pub fn init() -> Result<&'static Env> {
    if let Some(env) = ENV.get() {
        return Ok(env);
    }
    let env = Env::load()?;
    Ok(ENV.get_or_init(|| env))
}

/// Returns the store loaded by [`init`], or an empty store before it runs.
#[must_use]
pub fn env() -> &'static Env {
    ENV.get().unwrap_or_else(|| EMPTY.get_or_init(Env::default))
}

/// Typed accessors over the variables in [`ENV_FILE`].
#[derive(Debug, Clone, Default)]
pub struct Env {
    store: EnvStore,
}

#[allow(non_snake_case)]
impl Env {
    /// Reads [`ENV_FILE`] relative to the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the env file is missing or cannot be read.
    pub fn load() -> Result<Self> {
        Self::from_path(ENV_FILE)
    }

    /// Reads the env file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        EnvStore::load(path).map(Self::from_store)
    }

    /// Wraps an already loaded store.
    #[must_use]
    pub fn from_store(store: EnvStore) -> Self {
        Self { store }
    }

    /// Every variable in the store, in file order.
    #[must_use]
    pub fn all(&self) -> &EnvSet {
        self.store.all()
    }

    /// `APP_NAME`
    #[must_use]
    pub fn appName(&self) -> Option<&str> {
        self.store.get("APP_NAME")
    }

    /// `APP_DEBUG`
    #[must_use]
    pub fn appDebug(&self) -> Option<&str> {
        self.store.get("APP_DEBUG")
    }
}
