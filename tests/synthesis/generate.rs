use plugin_natives::{ generate, generate_to_file, BuildConfig, BuildError, DirectoryName, SynthesisError };
use crate::fixtures ;

#[test]
fn generate_covers_both_plugin_roots() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	fixtures::write( root.path(), "src/plugins/alpha/native.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "src/plugins/docs/README.md", "no native" );
	fixtures::write( root.path(), "src/userplugins/beta/native/index.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "src/utils/text.wat", fixtures::EMPTY );

	let code = generate( &BuildConfig::new( root.path().join( "src" )), &DirectoryName ).expect( "Generation failed" );

	assert!( code.contains( "StaticNative::new( \"alpha\"," ));
	assert!( code.contains( "StaticNative::new( \"beta\"," ));
	assert!( !code.contains( "\"docs\"" ));
	assert!( code.contains( "( \"./utils/text\", \"./utils/text\" )," ));
	assert!( code.contains( "( \"./plugins/alpha/native\", \"./plugins/alpha/native\" )," ));

}

#[test]
fn generate_to_file_writes_module() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	fixtures::write( root.path(), "src/plugins/alpha/native.wat", fixtures::EMPTY );
	let output = root.path().join( "plugin_natives.rs" );

	generate_to_file( &BuildConfig::new( root.path().join( "src" )), &DirectoryName, &output ).expect( "Generation failed" );

	let code = std::fs::read_to_string( &output ).expect( "Output missing" );
	assert!( code.contains( "pub static PLUGIN_NATIVES" ));

}

#[test]
fn failed_generation_writes_nothing() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	fixtures::write( root.path(), "src/plugins/alpha/native.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "src/userplugins/alpha/native.wat", fixtures::EMPTY );
	let output = root.path().join( "plugin_natives.rs" );

	match generate_to_file( &BuildConfig::new( root.path().join( "src" )), &DirectoryName, &output ) {
		Err( BuildError::Synthesis( SynthesisError::DuplicatePlugin { .. })) => {}
		value => panic!( "Expected DuplicatePlugin error, found: {:#?}", value ),
	}
	assert!( !output.exists() );

}

#[test]
fn generate_without_plugins() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	let config = BuildConfig { host_process: false, ..BuildConfig::new( root.path().join( "src" )) };

	let code = generate( &config, &DirectoryName ).expect( "Generation failed" );

	assert!( code.contains( "pub static PLUGIN_NATIVES: &[::plugin_natives::StaticNative] = &[\n];" ));
	assert!( code.contains( "pub const HOST_PROCESS: bool = false;" ));

}
