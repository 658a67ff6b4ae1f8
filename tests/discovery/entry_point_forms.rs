use std::path::Path ;
use plugin_natives::{ EntryPoint, PluginDescriptor };
use crate::fixtures ;

#[test]
fn entry_point_direct_file() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	let entry = fixtures::write( root.path(), "native.wat", fixtures::EMPTY );

	assert_eq!( EntryPoint::source().locate( root.path() ), Some( entry ));

}

#[test]
fn entry_point_index_file() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	let entry = fixtures::write( root.path(), "native/index.wat", fixtures::EMPTY );

	assert_eq!( EntryPoint::source().locate( root.path() ), Some( entry ));

}

#[test]
fn entry_point_prefers_direct_file() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	let direct = fixtures::write( root.path(), "native.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "native/index.wat", fixtures::EMPTY );

	assert_eq!( EntryPoint::source().locate( root.path() ), Some( direct ));

}

#[test]
fn entry_point_directory_without_index() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	fixtures::mkdir( root.path(), "native.wat" );
	fixtures::write( root.path(), "native/main.wat", fixtures::EMPTY );

	assert_eq!( EntryPoint::source().locate( root.path() ), None );
	assert!( !PluginDescriptor::inspect( root.path().to_path_buf(), &EntryPoint::source() ).has_native() );

}

#[test]
fn entry_point_request_has_no_extension() {
	let request = EntryPoint::artifact().request( Path::new( "/opt/plugins/alpha" ));
	assert_eq!( request, "/opt/plugins/alpha/native" );
}

#[test]
fn descriptors_are_identified_by_root() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	fixtures::write( root.path(), "alpha/native.wat", fixtures::EMPTY );

	let before = PluginDescriptor::inspect( root.path().join( "alpha" ), &EntryPoint::source() );
	std::fs::remove_file( root.path().join( "alpha/native.wat" )).expect( "Failed to remove entry" );
	let after = PluginDescriptor::inspect( root.path().join( "alpha" ), &EntryPoint::source() );

	assert_eq!( before, after );
	assert!( before.has_native() );
	assert!( !after.has_native() );

}
