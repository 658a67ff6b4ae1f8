//! Plugin discovery.
//!
//! Walks plugin root directories and yields a [`PluginDescriptor`] for every
//! immediate subdirectory. A directory that does not exist is an empty result,
//! never an error. Entries are reported in filesystem listing order, which varies
//! across platforms; nothing downstream relies on it beyond naming bindings.

mod plugin_descriptor ;
mod plugin_name ;

use std::path::{ Path, PathBuf };
use itertools::Itertools ;
use thiserror::Error ;
use tracing::debug ;

use crate::EntryPoint ;

pub use plugin_descriptor::PluginDescriptor ;
pub use plugin_name::{ PluginNameResolver, PluginNameError, DirectoryName, ManifestName };



#[derive( Error, Debug )]
pub enum DiscoveryError {
	#[error( "Failed to read plugin directory {}: {source}", path.display() )]
	ReadDir { path: PathBuf, #[source] source: std::io::Error },
}

/// Lists every plugin directory directly under `dir`.
///
/// Each descriptor records whether its root holds a native entry point.
///
/// # Errors
/// Fails if `dir` exists but cannot be listed.
pub fn scan_plugin_dir( dir: &Path, entry_point: &EntryPoint ) -> Result<Vec<PluginDescriptor>, DiscoveryError> {

	let read_dir_error = | source | DiscoveryError::ReadDir { path: dir.to_path_buf(), source };

	let entries = match std::fs::read_dir( dir ) {
		Ok( entries ) => entries,
		Err( err ) if err.kind() == std::io::ErrorKind::NotFound => {
			debug!( path = ?dir, "Plugin directory does not exist" );
			return Ok( Vec::with_capacity( 0 ));
		},
		Err( err ) => return Err( read_dir_error( err )),
	};

	entries
		.map_ok(| entry | entry.path() )
		.filter_ok(| path | path.is_dir() )
		.map_ok(| path | PluginDescriptor::inspect( path, entry_point ))
		.collect::<Result<Vec<_>, _>>()
		.map_err( read_dir_error )

}

/// Collects the plugins with a native entry point across all `roots`.
///
/// Roots are visited in the order given; missing roots contribute nothing.
///
/// # Errors
/// Fails if any existing root cannot be listed.
pub fn discover_plugins<P: AsRef<Path>>(
	roots: impl IntoIterator<Item = P>,
	entry_point: &EntryPoint,
) -> Result<Vec<PluginDescriptor>, DiscoveryError> {

	let plugins = roots.into_iter()
		.map(| root | scan_plugin_dir( root.as_ref(), entry_point ))
		.flatten_ok()
		.filter_ok( PluginDescriptor::has_native )
		.collect::<Result<Vec<_>, _>>()?;

	plugins.iter().for_each(| plugin | debug!( plugin = %plugin.name(), root = ?plugin.root_path(), "Discovered native plugin" ));
	Ok( plugins )

}
