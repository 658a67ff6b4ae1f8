//! Discovery and isolated loading of plugin native modules.
//!
//! Plugins are optional extension units. Some of them ship a **native module**: a
//! WASM component meant to run inside the privileged host process, where it gets
//! whatever host functions the host adds to its [`Linker`]. `plugin_natives`
//! bridges two moments at which such plugins are found:
//!
//! - **Build time.** [`generate`] walks the plugin roots of the source tree, binds
//! 	each native entry point, indexes every source module and renders a Rust
//! 	module (the `~pluginNatives` module) for a build script to write into
//! 	`OUT_DIR`. Its `PLUGIN_NATIVES` table maps logical plugin names to embedded
//! 	components; [`PluginNatives`] instantiates it.
//!
//! - **Run time.** The generated `bootstrap` (or [`bootstrap()`] directly) installs
//! 	a resolver chain once per process and lets the [`RuntimeNativeLoader`] load
//! 	plugins dropped into a plugins directory after the build. Each plugin loads in
//! 	isolation: a failure is logged and the others still load.
//!
//! # Core Concepts
//!
//! - [`EntryPoint`]: where a plugin keeps its native module, `native.<ext>` or
//! 	`native/index.<ext>`. Build-time sources use `wat`, runtime artifacts `wasm`.
//!
//! - [`PathAliasTable`]: reserved prefixes (`@utils`, `@webpack/common`,
//! 	`@plugins`, …) rewritten to real locations.
//!
//! - [`SourceModuleIndex`]: logical path -> request string for every module of the
//! 	build-time source tree, so runtime code can load them by name.
//!
//! - [`ModuleResolver`]: the resolution strategy. [`AliasingResolver`] chains
//! 	alias rewrite, index lookup and a default [`FsResolver`].
//!
//! - [`ModuleRegistry`]: loads a module by request through an injected resolver,
//! 	returning a fresh [`NativeModule`] per load.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc ;
//! use plugin_natives::{ Engine, Linker, EntryPoint, FsResolver, ModuleRegistry, RuntimeNativeLoader };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A runtime plugins directory with one good and one broken plugin.
//! let plugins = tempfile::tempdir()?;
//! std::fs::create_dir( plugins.path().join( "hello" ))?;
//! std::fs::write( plugins.path().join( "hello" ).join( "native.wasm" ), "(component)" )?;
//! std::fs::create_dir( plugins.path().join( "broken" ))?;
//! std::fs::write( plugins.path().join( "broken" ).join( "native.wasm" ), "not a component" )?;
//!
//! let engine = Engine::default();
//! let linker = Linker::new( &engine );
//! let registry = ModuleRegistry::new( &engine, &linker, Arc::new( FsResolver::new( plugins.path(), "wasm" )));
//!
//! let report = RuntimeNativeLoader::new( plugins.path(), EntryPoint::artifact() ).load_all( &registry );
//! assert_eq!( report.loaded().len(), 1 );
//! assert_eq!( report.loaded()[0].name(), "hello" );
//! assert_eq!( report.failed()[0].name(), "broken" );
//! # Ok(())
//! # }
//! ```

pub mod alias ;
mod bootstrap ;
mod config ;
pub mod discovery ;
mod entry_point ;
mod loader ;
mod native_module ;
mod registry ;
pub mod resolver ;
pub mod source_index ;
pub mod synthesis ;

#[doc( no_inline )]
pub use wasmtime::Engine ;
#[doc( no_inline )]
pub use wasmtime::component::{ Component, Linker, ResourceTable, Val };

pub use alias::{ Alias, PathAliasTable };
pub use bootstrap::{ bootstrap, BootstrapOutcome };
pub use config::{ BridgeConfig, BuildConfig, ConfigError };
pub use discovery::{ discover_plugins, PluginDescriptor, PluginNameResolver, DirectoryName, ManifestName };
pub use entry_point::{ EntryPoint, SOURCE_EXTENSION, ARTIFACT_EXTENSION };
pub use loader::{ ModuleLoad, RuntimeNativeLoader, LoadReport, LoadedPlugin, PluginLoadFailure };
pub use native_module::{ HostContext, NativeModule, CallError };
pub use registry::{ ModuleRegistry, LoadError, StaticNative, PluginNatives };
pub use resolver::{ ModuleResolver, FsResolver, AliasingResolver, ResolveError };
pub use source_index::{ SourceModuleIndex, IndexOptions };
pub use synthesis::{ synthesize, generate, generate_to_file, VirtualModule, NativeImport, SynthesisError, BuildError };
