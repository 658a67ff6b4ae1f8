use std::path::PathBuf ;
use itertools::Itertools ;

use super::{ NativeImport, SynthesisError, VirtualModule };



const HEADER: &str = "// @generated by plugin-natives. Do not edit.\n" ;

pub(super) fn render( module: &VirtualModule ) -> Result<String, SynthesisError> {

	let imports = module.imports().iter()
		.map(| import | canonical_entry( import ).map(| path | ( import, path )))
		.collect::<Result<Vec<_>, _>>()?;

	let krate = module.crate_path();

	let statics = imports.iter()
		.map(|( import, path )| format!(
			"static {}: &[u8] = include_bytes!( {:?} );\n",
			static_name( import ), path.to_string_lossy(),
		))
		.join( "" );

	let natives = imports.iter()
		.map(|( import, _ )| format!(
			"\t{}::StaticNative::new( {:?}, {} ),\n",
			krate, import.name(), static_name( import ),
		))
		.join( "" );

	let source_modules = module.source_modules().iter()
		.map(|( logical, request )| format!( "\t( {:?}, {:?} ),\n", logical, request ))
		.join( "" );

	let mut code = String::from( HEADER );
	code.push_str( &statics );
	code.push_str( &format!( "\npub const MODULE_ID: &str = {:?};\n", VirtualModule::MODULE_ID ));
	code.push_str( &format!( "\npub const HOST_PROCESS: bool = {};\n", module.is_host_process() ));
	code.push_str( &format!( "\npub static PLUGIN_NATIVES: &[{}::StaticNative] = &[\n{}];\n", krate, natives ));
	code.push_str( &format!( "\npub static SOURCE_MODULES: &[( &str, &str )] = &[\n{}];\n", source_modules ));
	code.push_str( &format!( concat!(
		"\npub fn bootstrap(\n",
		"\tconfig: &{k}::BridgeConfig,\n",
		"\tengine: &{k}::Engine,\n",
		"\tlinker: &{k}::Linker<{k}::HostContext>,\n",
		") -> Option<{k}::BootstrapOutcome> {{\n",
		"\tif !HOST_PROCESS {{ return None }}\n",
		"\tSome( {k}::bootstrap( config, engine, linker, SOURCE_MODULES ))\n",
		"}}\n",
	), k = krate ));

	Ok( code )

}

fn static_name( import: &NativeImport ) -> String { import.binding().to_uppercase() }

/// `include_bytes!` resolves relative to the generated file, so entries are
/// embedded by absolute path. A vanished entry fails here.
fn canonical_entry( import: &NativeImport ) -> Result<PathBuf, SynthesisError> {
	std::fs::canonicalize( import.entry_path() )
		.map_err(| _ | SynthesisError::EntryVanished {
			plugin: import.name().to_string(),
			path: import.entry_path().to_path_buf(),
		})
}
