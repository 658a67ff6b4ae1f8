use std::path::{ Path, PathBuf };

use super::{ ModuleResolver, ResolveError };



/// Default resolution against the filesystem.
///
/// Relative requests resolve against `base_dir`, absolute ones as they are. A
/// request may name the file itself, the file without its extension, or a
/// directory holding an `index` module.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct FsResolver {
	base_dir: PathBuf,
	extension: String,
}

impl FsResolver {

	const INDEX_STEM: &'static str = "index" ;

	pub fn new( base_dir: impl Into<PathBuf>, extension: impl Into<String> ) -> Self {
		Self { base_dir: base_dir.into(), extension: extension.into() }
	}

	#[inline] pub fn base_dir( &self ) -> &Path { &self.base_dir }
	#[inline] pub fn extension( &self ) -> &str { &self.extension }

	fn candidates( &self, request: &str ) -> [PathBuf; 3] {
		let path = self.base_dir.join( request );
		let mut with_extension = path.clone().into_os_string();
		with_extension.push( "." );
		with_extension.push( &self.extension );
		let index = path.join( format!( "{}.{}", Self::INDEX_STEM, self.extension ));
		[ path, PathBuf::from( with_extension ), index ]
	}

}

impl ModuleResolver for FsResolver {
	fn resolve( &self, request: &str ) -> Result<PathBuf, ResolveError> {
		self.candidates( request )
			.into_iter()
			.find(| path | path.is_file() )
			.ok_or_else(|| ResolveError::NotFound { request: request.to_string() })
	}
}
