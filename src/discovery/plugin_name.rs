use std::path::PathBuf ;
use serde::Deserialize ;
use thiserror::Error ;

use super::PluginDescriptor ;



/// Maps a discovered plugin to the logical name it is exported under.
pub trait PluginNameResolver {
	/// Returns the logical name for `descriptor`.
	///
	/// # Errors
	/// Implementations fail when the plugin's declared name cannot be read.
	fn resolve_name( &self, descriptor: &PluginDescriptor ) -> Result<String, PluginNameError> ;
}

#[derive( Error, Debug )]
pub enum PluginNameError {
	#[error( "Failed to read plugin manifest {}: {source}", path.display() )]
	Io { path: PathBuf, #[source] source: std::io::Error },
	#[error( "Failed to parse plugin manifest {}: {source}", path.display() )]
	Manifest { path: PathBuf, #[source] source: toml::de::Error },
}

/// Uses the plugin's directory name as its logical name.
#[derive( Debug, Clone, Copy, Default )]
pub struct DirectoryName ;

impl PluginNameResolver for DirectoryName {
	fn resolve_name( &self, descriptor: &PluginDescriptor ) -> Result<String, PluginNameError> {
		Ok( descriptor.name().to_string() )
	}
}

/// Reads `name` from a `plugin.toml` in the plugin root.
///
/// Plugins without a manifest, or whose manifest has no `name`, fall back to
/// their directory name.
#[derive( Debug, Clone, Copy, Default )]
pub struct ManifestName ;

impl ManifestName {
	pub const MANIFEST_FILE: &'static str = "plugin.toml" ;
}

#[derive( Deserialize )]
struct PluginManifest {
	name: Option<String>,
}

impl PluginNameResolver for ManifestName {
	fn resolve_name( &self, descriptor: &PluginDescriptor ) -> Result<String, PluginNameError> {

		let path = descriptor.root_path().join( Self::MANIFEST_FILE );
		let text = match std::fs::read_to_string( &path ) {
			Ok( text ) => text,
			Err( err ) if err.kind() == std::io::ErrorKind::NotFound => return DirectoryName.resolve_name( descriptor ),
			Err( source ) => return Err( PluginNameError::Io { path, source }),
		};

		let manifest: PluginManifest = toml::from_str( &text )
			.map_err(| source | PluginNameError::Manifest { path, source })?;

		Ok( manifest.name.unwrap_or_else(|| descriptor.name().to_string() ))

	}
}
