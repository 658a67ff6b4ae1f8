//! Index of the build-time source tree.
//!
//! Maps a normalized logical path (relative to the source root, prefixed with `.`,
//! extension stripped) to the request string used to load that module at runtime.
//! The index is built once at build time, embedded in the generated module, and
//! only read afterwards.

use std::collections::BTreeMap ;
use std::path::{ Path, PathBuf };
use rayon::prelude::* ;
use serde::Deserialize ;
use thiserror::Error ;

use crate::entry_point::{ SOURCE_EXTENSION, ARTIFACT_EXTENSION };



/// Which files of the source tree are indexed.
#[derive( Debug, Clone, PartialEq, Eq, Deserialize )]
#[serde( default )]
pub struct IndexOptions {
	/// File extensions (without the dot) that count as source modules.
	pub extensions: Vec<String>,
	/// File stems ending in any of these suffixes are skipped, e.g. `.d` for
	/// declaration-only files like `types.d.wat`.
	pub excluded_suffixes: Vec<String>,
}

impl Default for IndexOptions {
	fn default() -> Self {
		Self {
			extensions: vec![ SOURCE_EXTENSION.to_string() ],
			excluded_suffixes: vec![ ".d".to_string() ],
		}
	}
}

impl IndexOptions {
	/// The extension-less file stem if `file_name` is an indexed module.
	fn module_stem<'a>( &self, file_name: &'a str ) -> Option<&'a str> {
		let ( stem, extension ) = file_name.rsplit_once( '.' )?;
		if stem.is_empty() { return None }
		if !self.extensions.iter().any(| ext | ext == extension ) { return None }
		match self.excluded_suffixes.iter().any(| suffix | stem.ends_with( suffix.as_str() )) {
			true => None,
			false => Some( stem ),
		}
	}
}

#[derive( Error, Debug )]
pub enum IndexError {
	#[error( "Failed to walk source directory {}: {source}", path.display() )]
	Io { path: PathBuf, #[source] source: std::io::Error },
}

/// Logical path -> request string for every module of the source tree.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct SourceModuleIndex {
	modules: BTreeMap<String, String>,
	artifact_extension: String,
}

impl Default for SourceModuleIndex {
	fn default() -> Self {
		Self { modules: BTreeMap::new(), artifact_extension: ARTIFACT_EXTENSION.to_string() }
	}
}

impl SourceModuleIndex {

	/// Marks logical paths as relative to the source root.
	pub const ROOT_PREFIX: &'static str = "." ;
	const INDEX_STEM: &'static str = "index" ;

	/// Walks `root` recursively, listing each subdirectory concurrently.
	///
	/// Every branch of the walk is joined before this returns, so the index is
	/// never observed partially populated. A missing `root` yields an empty index.
	///
	/// # Errors
	/// Fails if any directory of an existing tree cannot be read.
	pub fn build( root: &Path, options: &IndexOptions ) -> Result<Self, IndexError> {
		if !root.is_dir() { return Ok( Self::default() )}
		let modules = walk( root, Self::ROOT_PREFIX, options )?
			.into_iter()
			.map(| logical | ( logical.clone(), logical ))
			.collect();
		Ok( Self { modules, ..Self::default() })
	}

	/// Rebuilds an index from the table embedded in a generated module.
	pub fn from_pairs( pairs: &[( &str, &str )] ) -> Self {
		let modules = pairs.iter()
			.map(|( logical, request )| (( *logical ).to_string(), ( *request ).to_string() ))
			.collect();
		Self { modules, ..Self::default() }
	}

	/// Sets the runtime artifact extension [`Self::lookup`] ignores.
	/// Defaults to `wasm`.
	pub fn with_artifact_extension( mut self, extension: impl Into<String> ) -> Self {
		self.artifact_extension = extension.into();
		self
	}

	#[inline] pub fn artifact_extension( &self ) -> &str { &self.artifact_extension }

	#[inline] pub fn len( &self ) -> usize { self.modules.len() }
	#[inline] pub fn is_empty( &self ) -> bool { self.modules.is_empty() }

	/// Entries in logical path order.
	pub fn iter( &self ) -> impl Iterator<Item = ( &str, &str )> {
		self.modules.iter().map(|( logical, request )| ( logical.as_str(), request.as_str() ))
	}

	/// Exact lookup by logical path.
	#[inline] pub fn get( &self, logical: &str ) -> Option<&str> {
		self.modules.get( logical ).map( String::as_str )
	}

	/// Looks up a runtime request.
	///
	/// The configured runtime artifact extension is ignored, and a request naming
	/// a directory matches that directory's `index` module.
	pub fn lookup( &self, request: &str ) -> Option<&str> {
		let request = request
			.strip_suffix( self.artifact_extension.as_str() )
			.and_then(| rest | rest.strip_suffix( '.' ))
			.unwrap_or( request );
		self.get( request )
			.or_else(|| self.get( &format!( "{}/{}", request, Self::INDEX_STEM )))
	}

}

fn walk( dir: &Path, prefix: &str, options: &IndexOptions ) -> Result<Vec<String>, IndexError> {

	let io_error = | source | IndexError::Io { path: dir.to_path_buf(), source };

	let entries = std::fs::read_dir( dir )
		.and_then(| entries | entries.collect::<Result<Vec<_>, _>>() )
		.map_err( io_error )?;

	let mut directories = Vec::new();
	let mut modules = Vec::new();
	for entry in entries {
		let file_name = entry.file_name();
		let Some( file_name ) = file_name.to_str() else { continue };
		match entry.file_type().map_err( io_error )?.is_dir() {
			true => directories.push(( entry.path(), format!( "{}/{}", prefix, file_name ))),
			false => if let Some( stem ) = options.module_stem( file_name ) {
				modules.push( format!( "{}/{}", prefix, stem ));
			},
		}
	}

	let nested = directories
		.par_iter()
		.map(|( path, prefix )| walk( path, prefix, options ))
		.collect::<Result<Vec<_>, _>>()?;

	modules.extend( nested.into_iter().flatten() );
	Ok( modules )

}
