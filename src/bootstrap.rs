//! Host process startup.

use std::sync::Arc ;
use tracing::{ debug, info };
use wasmtime::Engine ;
use wasmtime::component::Linker ;

use crate::{ BridgeConfig, HostContext, NativeModule, PathAliasTable, SourceModuleIndex };
use crate::loader::{ LoadReport, RuntimeNativeLoader };
use crate::registry::ModuleRegistry ;
use crate::resolver::{ install, AliasingResolver, FsResolver, Installation, ModuleResolver };



/// What a [`bootstrap`] call did.
#[derive( Debug )]
pub enum BootstrapOutcome {
	/// This call installed the resolver and ran the runtime loader.
	Bootstrapped {
		registry: ModuleRegistry,
		report: LoadReport<NativeModule>,
	},
	/// An earlier call already did; nothing was loaded.
	AlreadyBootstrapped,
}

/// Installs the resolver chain and loads runtime plugins.
///
/// Builds the alias table and source index, installs the resolver chain for the
/// process, then loads every runtime plugin exactly once. Only the call that
/// installs the resolver loads anything; later calls return
/// [`BootstrapOutcome::AlreadyBootstrapped`].
///
/// Runtime plugin failures are logged and reported, never returned as errors.
pub fn bootstrap(
	config: &BridgeConfig,
	engine: &Engine,
	linker: &Linker<HostContext>,
	source_modules: &[( &str, &str )],
) -> BootstrapOutcome {

	let resolver: Arc<dyn ModuleResolver> = Arc::new( AliasingResolver::new(
		PathAliasTable::reserved( config.plugins_root() ),
		SourceModuleIndex::from_pairs( source_modules ).with_artifact_extension( &config.artifact_extension ),
		FsResolver::new( &config.base_dir, &config.artifact_extension ),
	));

	let resolver = match install( resolver ) {
		Installation::Installed( resolver ) => resolver,
		Installation::AlreadyInstalled( _ ) => {
			debug!( "Resolver already installed, skipping runtime plugins" );
			return BootstrapOutcome::AlreadyBootstrapped;
		},
	};

	let registry = ModuleRegistry::new( engine, linker, resolver );
	let report = RuntimeNativeLoader::from_config( config ).load_all( &registry );
	info!(
		loaded = report.loaded().len(),
		failed = report.failed().len(),
		plugins_dir = ?config.plugins_root(),
		"Runtime native plugins loaded",
	);

	BootstrapOutcome::Bootstrapped { registry, report }

}
