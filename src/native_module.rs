use thiserror::Error ;
use wasmtime::component::{ Component, Instance, Linker, ResourceTable, Val };
use wasmtime::{ Engine, Store };



/// Store data of every native module instance.
///
/// Host functions added to the [`Linker`] receive this context, which is where
/// host-process privileges are handed to native code.
pub struct HostContext {
	module: String,
	resource_table: ResourceTable,
}

impl std::fmt::Debug for HostContext {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
		f.debug_struct( "HostContext" )
			.field( "module", &self.module )
			.finish_non_exhaustive()
	}
}

impl HostContext {
	pub fn new( module: impl Into<String> ) -> Self {
		Self { module: module.into(), resource_table: ResourceTable::new() }
	}

	/// Request or logical name the owning module was loaded under.
	#[inline] pub fn module( &self ) -> &str { &self.module }

	#[inline] pub fn resource_table( &mut self ) -> &mut ResourceTable { &mut self.resource_table }
}

/// The loaded exports of one native entry point.
///
/// Every load produces its own instance and store; no two loaders ever share one.
pub struct NativeModule {
	name: String,
	store: Store<HostContext>,
	instance: Instance,
}

impl std::fmt::Debug for NativeModule {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
		f.debug_struct( "NativeModule" )
			.field( "name", &self.name )
			.field( "data", self.store.data() )
			.finish_non_exhaustive()
	}
}

/// Errors that can occur when calling into a native module.
#[derive( Error, Debug )]
pub enum CallError {
	/// The specified interface path doesn't match any export.
	#[error( "Invalid Interface Path: {0}" )] InvalidInterfacePath( String ),
	/// The specified function doesn't exist on the interface.
	#[error( "Invalid Function: {0}" )] InvalidFunction( String ),
	/// The WASM function trapped or the arguments didn't match its signature.
	#[error( "Runtime Exception: {0}" )] RuntimeException( wasmtime::Error ),
}

impl NativeModule {

	pub(crate) fn instantiate(
		name: impl Into<String>,
		engine: &Engine,
		linker: &Linker<HostContext>,
		component: &Component,
	) -> Result<Self, wasmtime::Error> {
		let name = name.into();
		let mut store = Store::new( engine, HostContext::new( name.clone() ));
		let instance = linker.instantiate( &mut store, component )?;
		Ok( Self { name, store, instance })
	}

	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn context( &self ) -> &HostContext { self.store.data() }
	#[inline] pub fn context_mut( &mut self ) -> &mut HostContext { self.store.data_mut() }

	/// Calls an exported function.
	///
	/// `interface_path` names an exported instance such as `"my:package/example"`;
	/// `None` looks the function up among the component's top-level exports.
	/// `results` must have one slot per value the function returns.
	///
	/// # Errors
	/// Fails if the export doesn't exist or the call traps.
	pub fn call(
		&mut self,
		interface_path: Option<&str>,
		function_name: &str,
		args: &[Val],
		results: &mut [Val],
	) -> Result<(), CallError> {

		let interface_index = match interface_path {
			Some( path ) => Some( self.instance
				.get_export_index( &mut self.store, None, path )
				.ok_or( CallError::InvalidInterfacePath( path.to_string() ))?
			),
			None => None,
		};
		let qualified = || match interface_path {
			Some( path ) => format!( "{}:{}", path, function_name ),
			None => function_name.to_string(),
		};
		let func_index = self.instance
			.get_export_index( &mut self.store, interface_index.as_ref(), function_name )
			.ok_or_else(|| CallError::InvalidFunction( qualified() ))?;
		let func = self.instance
			.get_func( &mut self.store, func_index )
			.ok_or_else(|| CallError::InvalidFunction( qualified() ))?;

		func.call( &mut self.store, args, results ).map_err( CallError::RuntimeException )?;
		let _ = func.post_return( &mut self.store );
		Ok(())

	}

}
