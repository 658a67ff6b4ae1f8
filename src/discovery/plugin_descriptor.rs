use std::path::{ Path, PathBuf };

use crate::EntryPoint ;



/// A candidate plugin found during a directory walk.
///
/// Identity is the plugin's root path: two descriptors with the same root are the
/// same plugin regardless of name. Descriptors are immutable and only live for the
/// phase (build or run) that produced them.
#[derive( Debug, Clone )]
pub struct PluginDescriptor {
	name: String,
	root_path: PathBuf,
	has_native: bool,
}

impl PluginDescriptor {

	/// Inspects `root_path` for a native entry point.
	pub fn inspect( root_path: PathBuf, entry_point: &EntryPoint ) -> Self {
		let name = root_path.file_name()
			.map(| name | name.to_string_lossy().into_owned() )
			.unwrap_or_default();
		let has_native = entry_point.locate( &root_path ).is_some();
		Self { name, root_path, has_native }
	}

	/// Directory name of the plugin, unique within its parent directory.
	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn root_path( &self ) -> &Path { &self.root_path }
	/// Whether the root contained a native entry point when it was inspected.
	#[inline] pub fn has_native( &self ) -> bool { self.has_native }

}

impl PartialEq for PluginDescriptor {
	fn eq( &self, other: &Self ) -> bool { self.root_path == other.root_path }
}

impl Eq for PluginDescriptor {}

impl std::hash::Hash for PluginDescriptor {
	fn hash<H: std::hash::Hasher>( &self, state: &mut H ) { self.root_path.hash( state ) }
}
