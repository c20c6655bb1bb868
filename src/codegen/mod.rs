// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rust module generation from an [`EnvSet`].
//!
//! ```text
//! EnvSet (snapshot of names)
//!    |
//!    v
//! plan_accessors()  key --> identifier, collision check
//!    |
//!    v
//! generate() --> module text
//!   header          @generated marker
//!   ENV_FILE        canonical env file path
//!   static ENV      OnceLock<Env>, empty until init()
//!   init() / env()  process-wide store
//!   struct Env      load / from_path / from_store / all
//!   accessors       one per key, Option<&str>, live values
//!    |
//!    v
//! write_module()    delete old file --> atomic write
//! ```
//!
//! Names are fixed at generation time. Values are re-read from the env file
//! when the generated `init()` runs, so only key changes require
//! regenerating.

pub mod ident;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::path::Path;

use bon::Builder;

use crate::envfile::EnvSet;
use crate::error::{FsError, GenerateError};
use crate::utility::fs::replace_file;

pub use ident::{AccessorCase, to_camel_case, to_identifier, to_snake_case};

/// Method names the generated type defines itself.
const RESERVED_ACCESSORS: &[&str] = &["load", "from_path", "from_store", "all"];

/// Options controlling the generated module.
#[derive(Debug, Clone, Builder)]
pub struct GenerateOptions {
    /// Env file path the generated `init()` reads at runtime.
    #[builder(into, setters(name = with_env_file), default = String::from(".env"))]
    env_file: String,
    #[builder(setters(name = with_accessor_case), default)]
    accessor_case: AccessorCase,
    /// Name of the generated accessor struct.
    #[builder(into, setters(name = with_type_name), default = String::from("Env"))]
    type_name: String,
    /// Crate path providing the `runtime` module.
    #[builder(into, setters(name = with_runtime_crate), default = String::from("envgen"))]
    runtime_crate: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GenerateOptions {
    #[must_use]
    pub fn env_file(&self) -> &str {
        &self.env_file
    }

    #[must_use]
    pub const fn accessor_case(&self) -> AccessorCase {
        self.accessor_case
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn runtime_crate(&self) -> &str {
        &self.runtime_crate
    }
}

/// One generated accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Original env key, looked up at runtime.
    pub key: String,
    /// Rust method name.
    pub ident: String,
}

/// Maps every key to its accessor name, in `EnvSet` order.
///
/// # Errors
///
/// Returns a [`GenerateError`] if a key yields no identifier, yields one of
/// the reserved method names, or collides with an earlier key.
pub fn plan_accessors(
    entries: &EnvSet,
    case: AccessorCase,
) -> Result<Vec<Accessor>, GenerateError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(entries.len());
    let mut accessors = Vec::with_capacity(entries.len());

    for key in entries.keys() {
        let ident = to_identifier(key, case).ok_or_else(|| GenerateError::InvalidIdentifier {
            key: key.to_string(),
        })?;

        if RESERVED_ACCESSORS.contains(&ident.as_str()) {
            return Err(GenerateError::ReservedIdentifier {
                key: key.to_string(),
                ident,
            });
        }

        if let Some(first) = seen.get(&ident) {
            return Err(GenerateError::IdentifierCollision {
                ident,
                first: (*first).to_string(),
                second: key.to_string(),
            });
        }

        seen.insert(ident.clone(), key);
        accessors.push(Accessor {
            key: key.to_string(),
            ident,
        });
    }

    Ok(accessors)
}

/// Renders the accessor module for `entries`.
///
/// Pure and deterministic: the same ordered `EnvSet` and options always
/// produce the same text. Values in `entries` are ignored; only names are
/// baked in.
///
/// # Errors
///
/// Returns a [`GenerateError`] if the keys cannot be mapped to distinct
/// identifiers (see [`plan_accessors`]).
pub fn generate(entries: &EnvSet, options: &GenerateOptions) -> Result<String, GenerateError> {
    let accessors = plan_accessors(entries, options.accessor_case())?;

    let mut module = ModuleWriter::default();
    render_prelude(&mut module, options);
    render_type(&mut module, options, &accessors);

    tracing::debug!(accessors = accessors.len(), "rendered module");
    Ok(module.finish())
}

/// Writes generated text to `path`, fully replacing any previous file.
///
/// # Errors
///
/// Returns an [`FsError`] if the old file cannot be removed or the new one
/// cannot be written.
pub fn write_module(path: &Path, text: &str, dry: bool) -> Result<(), FsError> {
    if dry {
        tracing::info!(path = %path.display(), "dry run: would write generated module");
        return Ok(());
    }
    replace_file(path, text.as_bytes())
}

#[derive(Default)]
struct ModuleWriter {
    out: String,
}

impl ModuleWriter {
    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

fn render_prelude(m: &mut ModuleWriter, options: &GenerateOptions) {
    let ty = options.type_name();

    m.line(format!(
        "// @generated by envgen from `{}`. Do not edit by hand.",
        options.env_file()
    ));
    m.line("//");
    m.line("// Accessor names are fixed at generation time; values are read from the env");
    m.line("// file when `init` runs. Regenerate only after adding or removing keys.");
    m.blank();
    m.line("use std::path::Path;");
    m.line("use std::sync::OnceLock;");
    m.blank();
    m.line(format!(
        "use {}::runtime::{{EnvSet, EnvStore, Result}};",
        options.runtime_crate()
    ));
    m.blank();
    m.line(format!("/// Env file read by [`init`] and [`{ty}::load`]."));
    m.line(format!("pub const ENV_FILE: &str = {:?};", options.env_file()));
    m.blank();
    m.line(format!("static ENV: OnceLock<{ty}> = OnceLock::new();"));
    m.line(format!("static EMPTY: OnceLock<{ty}> = OnceLock::new();"));
    m.blank();
    m.line("/// Loads [`ENV_FILE`] into the process-wide store.");
    m.line("///");
    m.line("/// Must run once before any accessor is read. Later calls return the store");
    m.line("/// loaded by the first successful call.");
    m.line("///");
    m.line("/// # Errors");
    m.line("///");
    m.line("/// Returns an error if the env file is missing or cannot be read.");
    m.line(format!("pub fn init() -> Result<&'static {ty}> {{"));
    m.line("    if let Some(env) = ENV.get() {");
    m.line("        return Ok(env);");
    m.line("    }");
    m.line(format!("    let env = {ty}::load()?;"));
    m.line("    Ok(ENV.get_or_init(|| env))");
    m.line("}");
    m.blank();
    m.line("/// Returns the store loaded by [`init`], or an empty store before it runs.");
    m.line("#[must_use]");
    m.line(format!("pub fn env() -> &'static {ty} {{"));
    m.line(format!(
        "    ENV.get().unwrap_or_else(|| EMPTY.get_or_init({ty}::default))"
    ));
    m.line("}");
    m.blank();
}

fn render_type(m: &mut ModuleWriter, options: &GenerateOptions, accessors: &[Accessor]) {
    let ty = options.type_name();

    m.line("/// Typed accessors over the variables in [`ENV_FILE`].");
    m.line("#[derive(Debug, Clone, Default)]");
    m.line(format!("pub struct {ty} {{"));
    m.line("    store: EnvStore,");
    m.line("}");
    m.blank();
    if options.accessor_case() == AccessorCase::Camel {
        m.line("#[allow(non_snake_case)]");
    }
    m.line(format!("impl {ty} {{"));
    m.line("    /// Reads [`ENV_FILE`] relative to the working directory.");
    m.line("    ///");
    m.line("    /// # Errors");
    m.line("    ///");
    m.line("    /// Returns an error if the env file is missing or cannot be read.");
    m.line("    pub fn load() -> Result<Self> {");
    m.line("        Self::from_path(ENV_FILE)");
    m.line("    }");
    m.blank();
    m.line("    /// Reads the env file at `path`.");
    m.line("    ///");
    m.line("    /// # Errors");
    m.line("    ///");
    m.line("    /// Returns an error if the file is missing or cannot be read.");
    m.line("    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {");
    m.line("        EnvStore::load(path).map(Self::from_store)");
    m.line("    }");
    m.blank();
    m.line("    /// Wraps an already loaded store.");
    m.line("    #[must_use]");
    m.line("    pub fn from_store(store: EnvStore) -> Self {");
    m.line("        Self { store }");
    m.line("    }");
    m.blank();
    m.line("    /// Every variable in the store, in file order.");
    m.line("    #[must_use]");
    m.line("    pub fn all(&self) -> &EnvSet {");
    m.line("        self.store.all()");
    m.line("    }");

    for accessor in accessors {
        m.blank();
        m.line(format!("    /// `{}`", accessor.key));
        m.line("    #[must_use]");
        m.line(format!(
            "    pub fn {}(&self) -> Option<&str> {{",
            accessor.ident
        ));
        m.line(format!("        self.store.get({:?})", accessor.key));
        m.line("    }");
    }

    m.line("}");
}
