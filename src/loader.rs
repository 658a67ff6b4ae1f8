//! Loading of plugins that did not exist at build time.
//!
//! The [`RuntimeNativeLoader`] lists the runtime plugins directory and issues one
//! load request per plugin with a native entry point. Loads run one after the
//! other, never overlapping. A plugin whose load fails or panics is logged and
//! skipped; the remaining plugins still load and the loader itself never fails.
//!
//! There is no timeout: a load that never returns blocks the loader.

use std::any::Any ;
use std::panic::{ catch_unwind, AssertUnwindSafe };
use std::path::{ Path, PathBuf };
use tracing::{ debug, error, info, warn };

use crate::{ BridgeConfig, EntryPoint };
use crate::discovery::{ scan_plugin_dir, PluginDescriptor };
use crate::registry::LoadError ;



/// Something that can load a module by request string.
pub trait ModuleLoad {
	type Module ;

	/// # Errors
	/// Fails if the module cannot be resolved, compiled or instantiated.
	fn load( &self, request: &str ) -> Result<Self::Module, LoadError> ;
}

/// A runtime plugin whose native module loaded.
#[derive( Debug )]
pub struct LoadedPlugin<M> {
	name: String,
	module: M,
}

impl<M> LoadedPlugin<M> {
	/// Directory name of the plugin.
	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn module( &self ) -> &M { &self.module }
	#[inline] pub fn module_mut( &mut self ) -> &mut M { &mut self.module }
	#[inline] pub fn into_module( self ) -> M { self.module }
}

/// A runtime plugin whose native module failed to load.
#[derive( Debug )]
pub struct PluginLoadFailure {
	name: String,
	error: LoadError,
}

impl PluginLoadFailure {
	/// Directory name of the plugin.
	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn error( &self ) -> &LoadError { &self.error }
}

/// Outcome of a loader run: what loaded and what was skipped.
#[derive( Debug )]
pub struct LoadReport<M> {
	loaded: Vec<LoadedPlugin<M>>,
	failed: Vec<PluginLoadFailure>,
}

impl<M> Default for LoadReport<M> {
	fn default() -> Self { Self { loaded: Vec::new(), failed: Vec::new() }}
}

impl<M> LoadReport<M> {
	#[inline] pub fn loaded( &self ) -> &[LoadedPlugin<M>] { &self.loaded }
	#[inline] pub fn failed( &self ) -> &[PluginLoadFailure] { &self.failed }
	/// Number of load requests issued.
	#[inline] pub fn attempted( &self ) -> usize { self.loaded.len() + self.failed.len() }
	#[inline] pub fn is_empty( &self ) -> bool { self.attempted() == 0 }
	pub fn deconstruct( self ) -> ( Vec<LoadedPlugin<M>>, Vec<PluginLoadFailure> ) {( self.loaded, self.failed )}
}

impl<M> FromIterator<Result<LoadedPlugin<M>, PluginLoadFailure>> for LoadReport<M> {
	fn from_iter<T: IntoIterator<Item = Result<LoadedPlugin<M>, PluginLoadFailure>>>( iter: T ) -> Self {
		iter.into_iter().fold( Self::default(), | mut acc, item | {
			match item {
				Ok( plugin ) => acc.loaded.push( plugin ),
				Err( failure ) => acc.failed.push( failure ),
			}
			acc
		})
	}
}

/// Discovers and loads the native modules of runtime plugins.
#[derive( Debug, Clone )]
pub struct RuntimeNativeLoader {
	plugins_dir: PathBuf,
	entry_point: EntryPoint,
}

impl RuntimeNativeLoader {

	pub fn new( plugins_dir: impl Into<PathBuf>, entry_point: EntryPoint ) -> Self {
		Self { plugins_dir: plugins_dir.into(), entry_point }
	}

	pub fn from_config( config: &BridgeConfig ) -> Self {
		Self::new( config.plugins_root(), config.entry_point() )
	}

	#[inline] pub fn plugins_dir( &self ) -> &Path { &self.plugins_dir }

	/// Loads every runtime plugin that has a native entry point.
	///
	/// A missing plugins directory means there are no runtime plugins and nothing
	/// is requested. An unreadable one is logged and treated the same way.
	pub fn load_all<L: ModuleLoad>( &self, loader: &L ) -> LoadReport<L::Module> {

		let plugins = match scan_plugin_dir( &self.plugins_dir, &self.entry_point ) {
			Ok( plugins ) => plugins,
			Err( err ) => {
				warn!( error = %err, "Skipping runtime plugins" );
				return LoadReport::default();
			},
		};

		plugins.into_iter()
			.filter(| plugin | match plugin.has_native() {
				true => true,
				false => { debug!( plugin = %plugin.name(), "No native entry point" ); false },
			})
			.map(| plugin | self.load_one( loader, &plugin ))
			.collect()

	}

	fn load_one<L: ModuleLoad>( &self, loader: &L, plugin: &PluginDescriptor ) -> Result<LoadedPlugin<L::Module>, PluginLoadFailure> {

		let request = self.entry_point.request( plugin.root_path() );
		let outcome = catch_unwind( AssertUnwindSafe(|| loader.load( &request )))
			.unwrap_or_else(| payload | Err( LoadError::Panicked {
				module: request.clone(),
				message: panic_message( payload.as_ref() ),
			}));

		match outcome {
			Ok( module ) => {
				info!( plugin = %plugin.name(), "Loaded runtime native plugin" );
				Ok( LoadedPlugin { name: plugin.name().to_string(), module })
			},
			Err( error ) => {
				error!( plugin = %plugin.name(), error = %error, "Failure while loading plugin {:?}", plugin.name() );
				Err( PluginLoadFailure { name: plugin.name().to_string(), error })
			},
		}

	}

}

fn panic_message( payload: &( dyn Any + Send )) -> String {
	payload.downcast_ref::<&str>().map(| message | ( *message ).to_string() )
		.or_else(|| payload.downcast_ref::<String>().cloned() )
		.unwrap_or_else(|| "non-string panic payload".to_string() )
}
