//! Native entry point filenames.
//!
//! A plugin exposes a native module either as a `native.<ext>` file in its root
//! or as `native/index.<ext>`. The extension differs between the build-time
//! source form and the runtime artifact form.

use std::path::{ Path, PathBuf };

/// Extension of native entry points in the build-time source tree.
pub const SOURCE_EXTENSION: &str = "wat" ;
/// Extension of native entry points shipped as runtime artifacts.
pub const ARTIFACT_EXTENSION: &str = "wasm" ;

/// Describes the filenames a native entry point may take inside a plugin root.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct EntryPoint {
	stem: String,
	index: String,
	extension: String,
}

impl EntryPoint {

	const STEM: &'static str = "native" ;
	const INDEX: &'static str = "index" ;

	/// `native.<extension>` or `native/index.<extension>`.
	pub fn new( extension: impl Into<String> ) -> Self {
		Self { stem: Self::STEM.to_string(), index: Self::INDEX.to_string(), extension: extension.into() }
	}

	/// Entry point as found in the build-time source tree.
	#[inline] pub fn source() -> Self { Self::new( SOURCE_EXTENSION ) }

	/// Entry point as found in a runtime plugins directory.
	#[inline] pub fn artifact() -> Self { Self::new( ARTIFACT_EXTENSION ) }

	#[inline] pub fn stem( &self ) -> &str { &self.stem }
	#[inline] pub fn extension( &self ) -> &str { &self.extension }

	/// Both candidate paths, direct file first.
	pub fn candidates( &self, plugin_root: &Path ) -> [PathBuf; 2] {[
		plugin_root.join( format!( "{}.{}", self.stem, self.extension )),
		plugin_root.join( &self.stem ).join( format!( "{}.{}", self.index, self.extension )),
	]}

	/// The first candidate that exists as a file.
	pub fn locate( &self, plugin_root: &Path ) -> Option<PathBuf> {
		self.candidates( plugin_root ).into_iter().find(| path | path.is_file() )
	}

	/// The extension-less request that names this entry point in `plugin_root`.
	pub fn request( &self, plugin_root: &Path ) -> String {
		format!( "{}/{}", plugin_root.to_string_lossy(), self.stem )
	}

}
