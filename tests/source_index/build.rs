use plugin_natives::{ SourceModuleIndex, IndexOptions };
use crate::fixtures ;

fn source_tree() -> tempfile::TempDir {
	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	fixtures::write( root.path(), "main.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "utils/text.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "utils/types.d.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "utils/README.md", "docs" );
	fixtures::write( root.path(), "webpack/common/index.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "webpack/wreq.d.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "plugins/alpha/native.wat", fixtures::EMPTY );
	fixtures::write( root.path(), "deep/a/b/c/leaf.wat", fixtures::EMPTY );
	fixtures::mkdir( root.path(), "empty/dir" );
	root
}

#[test]
fn index_contains_every_module() {

	let root = source_tree();
	let index = SourceModuleIndex::build( root.path(), &IndexOptions::default() ).expect( "Failed to build index" );

	assert_eq!( index.iter().map(|( logical, _ )| logical ).collect::<Vec<_>>(), vec![
		"./deep/a/b/c/leaf",
		"./main",
		"./plugins/alpha/native",
		"./utils/text",
		"./webpack/common/index",
	]);
	assert!( index.iter().all(|( logical, request )| logical == request ));

}

#[test]
fn declaration_files_are_excluded() {

	let root = source_tree();
	let index = SourceModuleIndex::build( root.path(), &IndexOptions::default() ).expect( "Failed to build index" );

	assert_eq!( index.get( "./utils/types.d" ), None );
	assert_eq!( index.get( "./webpack/wreq.d" ), None );

}

#[test]
fn exclusions_are_configurable() {

	let root = source_tree();
	fixtures::write( root.path(), "utils/legacy.wast", fixtures::EMPTY );
	let options = IndexOptions {
		extensions: vec![ "wat".to_string(), "wast".to_string() ],
		excluded_suffixes: Vec::new(),
	};
	let index = SourceModuleIndex::build( root.path(), &options ).expect( "Failed to build index" );

	assert_eq!( index.get( "./utils/types.d" ), Some( "./utils/types.d" ));
	assert_eq!( index.get( "./utils/legacy" ), Some( "./utils/legacy" ));
	assert_eq!( index.len(), 8 );

}

#[test]
fn missing_root_gives_empty_index() {

	let root = tempfile::tempdir().expect( "Failed to create temp dir" );
	let index = SourceModuleIndex::build( &root.path().join( "src" ), &IndexOptions::default() ).expect( "Failed to build index" );

	assert!( index.is_empty() );

}

#[test]
fn repeated_builds_are_identical() {

	let root = source_tree();
	let first = SourceModuleIndex::build( root.path(), &IndexOptions::default() ).expect( "Failed to build index" );
	let second = SourceModuleIndex::build( root.path(), &IndexOptions::default() ).expect( "Failed to build index" );

	assert_eq!( first, second );

}
