//! Generation of the `~pluginNatives` module.
//!
//! At build time the discovered native plugins are bound to `p0, p1, …` in
//! discovery order and exported under their logical names, next to the source
//! module index and a bootstrap that only runs inside the host process. The
//! result is Rust source for a consumer's `build.rs` to write into `OUT_DIR`:
//!
//! ```ignore
//! // build.rs
//! fn main() {
//! 	let out = std::path::PathBuf::from( std::env::var( "OUT_DIR" ).unwrap() ).join( "plugin_natives.rs" );
//! 	plugin_natives::generate_to_file( &plugin_natives::BuildConfig::new( "src" ), &plugin_natives::ManifestName, &out )
//! 		.expect( "failed to generate plugin natives" );
//! }
//!
//! // src/lib.rs
//! mod natives { include!( concat!( env!( "OUT_DIR" ), "/plugin_natives.rs" )); }
//! ```
//!
//! Build-time failures are fatal: nothing is written unless every step succeeds.

mod render ;
mod virtual_module ;

use std::collections::HashMap ;
use std::path::{ Path, PathBuf };
use thiserror::Error ;
use tracing::info ;

use crate::{ BuildConfig, EntryPoint, SourceModuleIndex };
use crate::discovery::{ discover_plugins, DiscoveryError, PluginDescriptor, PluginNameError, PluginNameResolver };
use crate::source_index::IndexError ;

pub use virtual_module::{ VirtualModule, NativeImport };

/// Path generated code uses for this crate unless configured otherwise.
pub const DEFAULT_CRATE_PATH: &str = "::plugin_natives" ;

/// Default file name of the generated module inside `OUT_DIR`.
pub const DEFAULT_OUTPUT_FILE: &str = "plugin_natives.rs" ;



#[derive( Error, Debug )]
pub enum SynthesisError {
	/// A plugin known at discovery time lost its native entry before generation.
	#[error( "Native entry of plugin '{plugin}' vanished before code generation: {}", path.display() )]
	EntryVanished { plugin: String, path: PathBuf },
	#[error( "Plugin name '{name}' is declared by both {} and {}", first.display(), second.display() )]
	DuplicatePlugin { name: String, first: PathBuf, second: PathBuf },
	#[error( "Failed to resolve plugin name: {0}" )]
	PluginName( #[from] PluginNameError ),
}

#[derive( Error, Debug )]
pub enum BuildError {
	#[error( "Discovery error: {0}" )] Discovery( #[from] DiscoveryError ),
	#[error( "Index error: {0}" )] Index( #[from] IndexError ),
	#[error( "Synthesis error: {0}" )] Synthesis( #[from] SynthesisError ),
	#[error( "Failed to write {}: {source}", path.display() )]
	Write { path: PathBuf, #[source] source: std::io::Error },
}

/// Binds every native plugin in `plugins` and pairs them with `source_modules`.
///
/// Plugins without a native entry are skipped. Binding names follow the order of
/// `plugins`; that order has no other observable effect.
///
/// # Errors
/// Fails if an entry point can no longer be located, if a name cannot be
/// resolved, or if two plugins resolve to the same logical name.
pub fn synthesize(
	plugins: &[PluginDescriptor],
	names: &dyn PluginNameResolver,
	entry_point: &EntryPoint,
	source_modules: SourceModuleIndex,
) -> Result<VirtualModule, SynthesisError> {

	let mut seen = HashMap::<String, PathBuf>::new();

	let imports = plugins.iter()
		.filter(| plugin | plugin.has_native() )
		.enumerate()
		.map(|( i, plugin )| -> Result<_, SynthesisError> {

			let entry_path = entry_point.locate( plugin.root_path() )
				.ok_or_else(|| SynthesisError::EntryVanished {
					plugin: plugin.name().to_string(),
					path: plugin.root_path().join( entry_point.stem() ),
				})?;

			let name = names.resolve_name( plugin )?;
			if let Some( first ) = seen.insert( name.clone(), plugin.root_path().to_path_buf() ) {
				return Err( SynthesisError::DuplicatePlugin { name, first, second: plugin.root_path().to_path_buf() });
			}

			Ok( NativeImport::new( format!( "p{}", i ), name, entry_path ))

		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok( VirtualModule::new( imports, source_modules ))

}

/// Discovers, indexes and synthesizes according to `config`, returning the
/// rendered module source.
///
/// # Errors
/// Any discovery, indexing or synthesis failure aborts generation.
pub fn generate( config: &BuildConfig, names: &dyn PluginNameResolver ) -> Result<String, BuildError> {

	let entry_point = config.entry_point();
	let plugins = discover_plugins( config.plugin_roots(), &entry_point )?;
	let source_modules = SourceModuleIndex::build( &config.source_root, &config.index )?;

	let module = synthesize( &plugins, names, &entry_point, source_modules )?
		.with_host_process( config.host_process )
		.with_crate_path( &config.crate_path );

	info!(
		plugins = module.imports().len(),
		source_modules = module.source_modules().len(),
		host_process = module.is_host_process(),
		"Synthesized {}", VirtualModule::MODULE_ID,
	);

	Ok( module.render()? )

}

/// Like [`generate`], writing the source to `output`.
///
/// # Errors
/// Fails like [`generate`], or if `output` cannot be written. Nothing is written
/// when generation fails.
pub fn generate_to_file( config: &BuildConfig, names: &dyn PluginNameResolver, output: &Path ) -> Result<(), BuildError> {
	let code = generate( config, names )?;
	std::fs::write( output, code )
		.map_err(| source | BuildError::Write { path: output.to_path_buf(), source })
}
