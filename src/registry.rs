//! Loading native modules by request.
//!
//! A [`ModuleRegistry`] is the only way runtime code loads a module: requests go
//! through the injected resolver, compiled components are cached per resolved
//! path, and every load is instantiated into a fresh [`NativeModule`].
//!
//! [`PluginNatives`] does the same for the build-time plugins embedded in the
//! generated module, yielding the name -> module mapping.

use std::collections::HashMap ;
use std::path::{ Path, PathBuf };
use std::sync::Arc ;
use parking_lot::Mutex ;
use thiserror::Error ;
use wasmtime::Engine ;
use wasmtime::component::{ Component, Linker };

use crate::{ HostContext, NativeModule };
use crate::loader::ModuleLoad ;
use crate::resolver::{ ModuleResolver, ResolveError };



#[derive( Error, Debug )]
pub enum LoadError {
	#[error( "{0}" )]
	Resolve( #[from] ResolveError ),
	#[error( "Failed to compile {module}: {error}" )]
	Compile { module: String, error: wasmtime::Error },
	#[error( "Failed to instantiate {module}: {error}" )]
	Instantiate { module: String, error: wasmtime::Error },
	#[error( "Loading {module} panicked: {message}" )]
	Panicked { module: String, message: String },
}

/// Capability-scoped loader over an injected [`ModuleResolver`].
pub struct ModuleRegistry {
	engine: Engine,
	linker: Linker<HostContext>,
	resolver: Arc<dyn ModuleResolver>,
	components: Mutex<HashMap<PathBuf, Component>>,
}

impl std::fmt::Debug for ModuleRegistry {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ModuleRegistry" )
			.field( "cached", &self.components.lock().keys().collect::<Vec<_>>() )
			.finish_non_exhaustive()
	}
}

impl ModuleRegistry {

	/// Host functions in `linker` are available to every module loaded here.
	pub fn new( engine: &Engine, linker: &Linker<HostContext>, resolver: Arc<dyn ModuleResolver> ) -> Self {
		Self {
			engine: engine.clone(),
			linker: linker.clone(),
			resolver,
			components: Mutex::new( HashMap::new() ),
		}
	}

	#[inline] pub fn resolver( &self ) -> &Arc<dyn ModuleResolver> { &self.resolver }

	/// Resolves `request` and instantiates a fresh instance of it.
	///
	/// # Errors
	/// Fails if the request doesn't resolve, or the module doesn't compile or
	/// instantiate.
	pub fn load( &self, request: &str ) -> Result<NativeModule, LoadError> {
		let path = self.resolver.resolve( request )?;
		let component = self.component( request, &path )?;
		NativeModule::instantiate( request, &self.engine, &self.linker, &component )
			.map_err(| error | LoadError::Instantiate { module: request.to_string(), error })
	}

	/// The lock is not held while compiling. Two loads racing on the same path
	/// may both compile it; the first to finish is cached and returned to both.
	fn component( &self, request: &str, path: &Path ) -> Result<Component, LoadError> {
		if let Some( component ) = self.components.lock().get( path ) { return Ok( component.clone() )}
		let component = Component::from_file( &self.engine, path )
			.map_err(| error | LoadError::Compile { module: request.to_string(), error })?;
		Ok( self.components.lock()
			.entry( path.to_path_buf() )
			.or_insert( component )
			.clone()
		)
	}

}

impl ModuleLoad for ModuleRegistry {
	type Module = NativeModule ;
	fn load( &self, request: &str ) -> Result<NativeModule, LoadError> { Self::load( self, request )}
}

/// A build-time native plugin embedded in the generated module.
#[derive( Debug, Clone, Copy )]
pub struct StaticNative {
	name: &'static str,
	bytes: &'static [u8],
}

impl StaticNative {
	/// `bytes` may be a binary component or its text form.
	pub const fn new( name: &'static str, bytes: &'static [u8] ) -> Self {
		Self { name, bytes }
	}

	#[inline] pub fn name( &self ) -> &'static str { self.name }
	#[inline] pub fn bytes( &self ) -> &'static [u8] { self.bytes }
}

/// Build-time native modules keyed by logical plugin name.
#[derive( Debug )]
pub struct PluginNatives {
	modules: HashMap<String, NativeModule>,
}

impl PluginNatives {

	/// Compiles and instantiates every embedded native.
	///
	/// These were verified when the module was generated, so unlike runtime
	/// plugins a failure here is returned rather than skipped.
	///
	/// # Errors
	/// Fails on the first native that doesn't compile or instantiate.
	pub fn instantiate( engine: &Engine, linker: &Linker<HostContext>, natives: &[StaticNative] ) -> Result<Self, LoadError> {
		natives.iter()
			.map(| native | -> Result<_, LoadError> {
				let component = Component::new( engine, native.bytes() )
					.map_err(| error | LoadError::Compile { module: native.name().to_string(), error })?;
				let module = NativeModule::instantiate( native.name(), engine, linker, &component )
					.map_err(| error | LoadError::Instantiate { module: native.name().to_string(), error })?;
				Ok(( native.name().to_string(), module ))
			})
			.collect::<Result<HashMap<_, _>, _>>()
			.map(| modules | Self { modules })
	}

	#[inline] pub fn get( &self, name: &str ) -> Option<&NativeModule> { self.modules.get( name )}
	#[inline] pub fn get_mut( &mut self, name: &str ) -> Option<&mut NativeModule> { self.modules.get_mut( name )}
	#[inline] pub fn len( &self ) -> usize { self.modules.len() }
	#[inline] pub fn is_empty( &self ) -> bool { self.modules.is_empty() }

	pub fn names( &self ) -> impl Iterator<Item = &str> { self.modules.keys().map( String::as_str )}

	pub fn into_inner( self ) -> HashMap<String, NativeModule> { self.modules }

}
