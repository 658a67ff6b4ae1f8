//! Build-time and runtime configuration.
//!
//! Both configurations deserialize from TOML and fall back to defaults for every
//! missing key.

use std::path::{ Path, PathBuf };
use serde::Deserialize ;
use thiserror::Error ;

use crate::EntryPoint ;
use crate::entry_point::{ SOURCE_EXTENSION, ARTIFACT_EXTENSION };
use crate::source_index::IndexOptions ;
use crate::synthesis::DEFAULT_CRATE_PATH ;



#[derive( Error, Debug )]
pub enum ConfigError {
	#[error( "Failed to read config {}: {source}", path.display() )]
	Io { path: PathBuf, #[source] source: std::io::Error },
	#[error( "Failed to parse config: {0}" )]
	Parse( #[from] toml::de::Error ),
}

fn read_toml<T: serde::de::DeserializeOwned>( path: &Path ) -> Result<T, ConfigError> {
	let text = std::fs::read_to_string( path )
		.map_err(| source | ConfigError::Io { path: path.to_path_buf(), source })?;
	Ok( toml::from_str( &text )? )
}

/// Runtime configuration of the host process.
///
/// ```
/// use plugin_natives::BridgeConfig ;
///
/// let config = BridgeConfig::from_toml_str( r#"plugins_dir = "/var/lib/app/plugins""# ).unwrap();
/// assert_eq!( config.plugins_dir, std::path::PathBuf::from( "/var/lib/app/plugins" ));
/// assert_eq!( config.artifact_extension, "wasm" );
/// ```
#[derive( Debug, Clone, PartialEq, Eq, Deserialize )]
#[serde( default )]
pub struct BridgeConfig {
	/// Directory scanned for plugins that did not exist at build time.
	/// The `@plugins` alias resolves here. Relative paths are taken relative to
	/// `base_dir`, see [`BridgeConfig::plugins_root`].
	pub plugins_dir: PathBuf,
	/// Root that relative requests and the fixed alias targets resolve against.
	pub base_dir: PathBuf,
	/// Extension of runtime native entry points and loadable modules.
	pub artifact_extension: String,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			plugins_dir: PathBuf::from( "./plugins" ),
			base_dir: PathBuf::from( "." ),
			artifact_extension: ARTIFACT_EXTENSION.to_string(),
		}
	}
}

impl BridgeConfig {

	pub fn new( base_dir: impl Into<PathBuf>, plugins_dir: impl Into<PathBuf> ) -> Self {
		Self { base_dir: base_dir.into(), plugins_dir: plugins_dir.into(), ..Self::default() }
	}

	/// # Errors
	/// Fails on malformed TOML or mistyped keys.
	pub fn from_toml_str( text: &str ) -> Result<Self, ConfigError> { Ok( toml::from_str( text )? )}

	/// # Errors
	/// Fails if the file cannot be read or parsed.
	pub fn from_file( path: &Path ) -> Result<Self, ConfigError> { read_toml( path )}

	/// The runtime plugins directory, with a relative `plugins_dir` taken
	/// relative to `base_dir`.
	///
	/// The runtime loader lists this directory and `@plugins` points at it.
	pub fn plugins_root( &self ) -> PathBuf {
		match self.plugins_dir.is_absolute() {
			true => self.plugins_dir.clone(),
			false => self.base_dir.join( &self.plugins_dir ),
		}
	}

	/// Native entry point filenames inside the runtime plugins directory.
	#[inline] pub fn entry_point( &self ) -> EntryPoint { EntryPoint::new( &self.artifact_extension )}

}

/// Build-time configuration of module generation.
#[derive( Debug, Clone, PartialEq, Eq, Deserialize )]
#[serde( default )]
pub struct BuildConfig {
	/// Root of the source tree that is indexed and that holds the plugin roots.
	pub source_root: PathBuf,
	/// Plugin roots relative to `source_root`, visited in order.
	pub plugin_dirs: Vec<String>,
	/// Extension of build-time native entry points.
	pub entry_extension: String,
	/// Which files of the source tree are indexed.
	pub index: IndexOptions,
	/// Whether the compiled target runs inside the privileged host process.
	pub host_process: bool,
	/// Path under which generated code refers to this crate.
	pub crate_path: String,
}

impl Default for BuildConfig {
	fn default() -> Self {
		Self {
			source_root: PathBuf::from( "src" ),
			plugin_dirs: vec![ "plugins".to_string(), "userplugins".to_string() ],
			entry_extension: SOURCE_EXTENSION.to_string(),
			index: IndexOptions::default(),
			host_process: true,
			crate_path: DEFAULT_CRATE_PATH.to_string(),
		}
	}
}

impl BuildConfig {

	pub fn new( source_root: impl Into<PathBuf> ) -> Self {
		Self { source_root: source_root.into(), ..Self::default() }
	}

	/// # Errors
	/// Fails on malformed TOML or mistyped keys.
	pub fn from_toml_str( text: &str ) -> Result<Self, ConfigError> { Ok( toml::from_str( text )? )}

	/// # Errors
	/// Fails if the file cannot be read or parsed.
	pub fn from_file( path: &Path ) -> Result<Self, ConfigError> { read_toml( path )}

	/// Plugin roots joined onto the source root.
	pub fn plugin_roots( &self ) -> Vec<PathBuf> {
		self.plugin_dirs.iter().map(| dir | self.source_root.join( dir )).collect()
	}

	/// Native entry point filenames inside build-time plugin roots.
	#[inline] pub fn entry_point( &self ) -> EntryPoint { EntryPoint::new( &self.entry_extension )}

}
