use std::path::{ Path, PathBuf };

use crate::SourceModuleIndex ;
use super::SynthesisError ;



/// One build-time native plugin as imported by the generated module.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct NativeImport {
	/// Local binding name, `p0, p1, …` in discovery order.
	binding: String,
	/// Logical plugin name the binding is exported under.
	name: String,
	/// Entry point located during discovery.
	entry_path: PathBuf,
}

impl NativeImport {
	pub(super) fn new( binding: String, name: String, entry_path: PathBuf ) -> Self {
		Self { binding, name, entry_path }
	}

	#[inline] pub fn binding( &self ) -> &str { &self.binding }
	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn entry_path( &self ) -> &Path { &self.entry_path }
}

/// The synthesized `~pluginNatives` module, before it is rendered to source.
///
/// Holds the build-time native plugins, the source module index and the baked
/// host-process condition that gates the runtime bootstrap.
#[derive( Debug, Clone )]
#[must_use = "call .render() to produce the module source"]
pub struct VirtualModule {
	imports: Vec<NativeImport>,
	source_modules: SourceModuleIndex,
	host_process: bool,
	crate_path: String,
}

impl VirtualModule {

	/// Contract name plugin authors import the natives mapping under.
	pub const MODULE_ID: &'static str = "~pluginNatives" ;

	pub(super) fn new( imports: Vec<NativeImport>, source_modules: SourceModuleIndex ) -> Self {
		Self { imports, source_modules, host_process: true, crate_path: super::DEFAULT_CRATE_PATH.to_string() }
	}

	/// Sets whether the compiled target runs inside the privileged host process.
	///
	/// When `false` the generated bootstrap is unreachable.
	pub fn with_host_process( mut self, host_process: bool ) -> Self {
		self.host_process = host_process ;
		self
	}

	/// Sets the path generated code uses to refer to this crate.
	pub fn with_crate_path( mut self, crate_path: impl Into<String> ) -> Self {
		self.crate_path = crate_path.into();
		self
	}

	#[inline] pub fn imports( &self ) -> &[NativeImport] { &self.imports }
	#[inline] pub fn source_modules( &self ) -> &SourceModuleIndex { &self.source_modules }
	#[inline] pub fn is_host_process( &self ) -> bool { self.host_process }
	#[inline] pub fn crate_path( &self ) -> &str { &self.crate_path }

	/// Keys of the exported mapping.
	pub fn names( &self ) -> impl Iterator<Item = &str> {
		self.imports.iter().map( NativeImport::name )
	}

	/// The import exported under `name`.
	pub fn get( &self, name: &str ) -> Option<&NativeImport> {
		self.imports.iter().find(| import | import.name() == name )
	}

	/// Renders the module as Rust source meant to be `include!`d.
	///
	/// # Errors
	/// Fails if an entry point located during discovery no longer exists. No
	/// partial source is produced in that case.
	pub fn render( &self ) -> Result<String, SynthesisError> {
		super::render::render( self )
	}

}
