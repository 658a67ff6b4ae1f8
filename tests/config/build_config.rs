use std::path::PathBuf ;
use plugin_natives::{ BuildConfig, EntryPoint, IndexOptions };

#[test]
fn build_config_defaults() {

	let config = BuildConfig::new( "/work/app/src" );

	assert_eq!( config.plugin_roots(), vec![
		PathBuf::from( "/work/app/src/plugins" ),
		PathBuf::from( "/work/app/src/userplugins" ),
	]);
	assert_eq!( config.entry_point(), EntryPoint::source() );
	assert_eq!( config.index, IndexOptions::default() );
	assert!( config.host_process );
	assert_eq!( config.crate_path, "::plugin_natives" );

}

#[test]
fn build_config_partial_toml() {

	let config = BuildConfig::from_toml_str( concat!(
		"source_root = \"native-src\"\n",
		"plugin_dirs = [\"plugins\"]\n",
		"host_process = false\n",
		"\n",
		"[index]\n",
		"excluded_suffixes = [\".d\", \".test\"]\n",
	)).expect( "Failed to parse config" );

	assert_eq!( config.source_root, PathBuf::from( "native-src" ));
	assert_eq!( config.plugin_roots(), vec![ PathBuf::from( "native-src/plugins" )]);
	assert!( !config.host_process );
	assert_eq!( config.index.extensions, vec![ "wat".to_string() ]);
	assert_eq!( config.index.excluded_suffixes, vec![ ".d".to_string(), ".test".to_string() ]);
	assert_eq!( config.entry_extension, "wat" );

}
