use std::path::Path ;
use plugin_natives::{ AliasingResolver, FsResolver, ModuleResolver, PathAliasTable, ResolveError, SourceModuleIndex };
use crate::fixtures ;

struct Layout {
	base: tempfile::TempDir,
	plugins: tempfile::TempDir,
}

impl Layout {
	fn new() -> Self {
		let base = tempfile::tempdir().expect( "Failed to create temp dir" );
		let plugins = tempfile::tempdir().expect( "Failed to create temp dir" );
		fixtures::write( base.path(), "utils/text.wasm", fixtures::EMPTY );
		fixtures::write( base.path(), "webpack/common/index.wasm", fixtures::EMPTY );
		fixtures::write( base.path(), "webpack/webpack.wasm", fixtures::EMPTY );
		fixtures::write( base.path(), "lib/thing.wasm", fixtures::EMPTY );
		fixtures::write( base.path(), "@scope/pkg.wasm", fixtures::EMPTY );
		fixtures::write( plugins.path(), "foo/native.wasm", fixtures::EMPTY );
		Self { base, plugins }
	}

	fn resolver( &self ) -> AliasingResolver<FsResolver> {
		AliasingResolver::new(
			PathAliasTable::reserved( self.plugins.path() ),
			SourceModuleIndex::from_pairs( &[( "./named/thing", "./lib/thing" )]),
			FsResolver::new( self.base.path(), "wasm" ),
		)
	}

	fn base( &self, relative: &str ) -> std::path::PathBuf { self.base.path().join( relative ) }
}

fn resolved( resolver: &dyn ModuleResolver, request: &str ) -> std::path::PathBuf {
	resolver.resolve( request ).unwrap_or_else(| err | panic!( "Failed to resolve {}: {}", request, err ))
}

#[test]
fn aliased_requests_resolve_to_targets() {

	let layout = Layout::new();
	let resolver = layout.resolver();

	assert_eq!( resolved( &resolver, "@utils/text" ), layout.base( "utils/text.wasm" ));
	assert_eq!( resolved( &resolver, "@webpack/common" ), layout.base( "webpack/common/index.wasm" ));
	assert_eq!( resolved( &resolver, "@webpack" ), layout.base( "webpack/webpack.wasm" ));
	assert_eq!( resolved( &resolver, "@plugins/foo/native" ), layout.plugins.path().join( "foo/native.wasm" ));

}

#[test]
fn unknown_sigil_passes_through() {

	let layout = Layout::new();
	let resolver = layout.resolver();

	assert_eq!( resolved( &resolver, "@scope/pkg" ), layout.base( "@scope/pkg.wasm" ));

	match resolver.resolve( "@webpackish" ) {
		Err( ResolveError::NotFound { request }) if request == "@webpackish" => {}
		value => panic!( "Expected NotFound error, found: {:#?}", value ),
	}

}

#[test]
fn indexed_requests_use_index_entry() {

	let layout = Layout::new();
	let resolver = layout.resolver();

	assert_eq!( resolved( &resolver, "./named/thing" ), layout.base( "lib/thing.wasm" ));
	assert_eq!( resolved( &resolver, "./named/thing.wasm" ), layout.base( "lib/thing.wasm" ));

}

#[test]
fn other_requests_use_fallback() {

	let layout = Layout::new();
	let resolver = layout.resolver();

	assert_eq!( resolved( &resolver, "./lib/thing" ), layout.base( "lib/thing.wasm" ));
	assert_eq!( resolved( &resolver, "lib/thing.wasm" ), layout.base( "lib/thing.wasm" ));

}

#[test]
fn alias_with_missing_target_is_not_found() {

	let layout = Layout::new();
	let resolver = layout.resolver();

	match resolver.resolve( "@shared/missing" ) {
		Err( ResolveError::NotFound { request }) => assert_eq!( request, "./shared/missing" ),
		value => panic!( "Expected NotFound error, found: {:#?}", value ),
	}

}

#[test]
fn fallback_sees_rewritten_request() {

	struct Recording( parking_lot::Mutex<Vec<String>> );

	impl ModuleResolver for Recording {
		fn resolve( &self, request: &str ) -> Result<std::path::PathBuf, ResolveError> {
			self.0.lock().push( request.to_string() );
			Ok( Path::new( request ).to_path_buf() )
		}
	}

	let resolver = AliasingResolver::new(
		PathAliasTable::reserved( "/srv/plugins" ),
		SourceModuleIndex::from_pairs( &[( "./utils/index", "./utils/index" )]),
		Recording( parking_lot::Mutex::new( Vec::new() )),
	);

	[ "@utils", "@utils/text", "@plugins/foo/native", "@vendor/lib", "./other" ]
		.into_iter()
		.for_each(| request | { resolved( &resolver, request ); });

	assert_eq!( *resolver.fallback().0.lock(), vec![
		"./utils/index",
		"./utils/text",
		"/srv/plugins/foo/native",
		"@vendor/lib",
		"./other",
	]);

}

#[test]
fn indexed_requests_with_configured_extension() {

	let base = tempfile::tempdir().expect( "Failed to create temp dir" );
	let module = fixtures::write( base.path(), "lib/value.cwasm", fixtures::EMPTY );
	let resolver = AliasingResolver::new(
		PathAliasTable::reserved( base.path().join( "plugins" )),
		SourceModuleIndex::from_pairs( &[( "./value", "./lib/value" )]).with_artifact_extension( "cwasm" ),
		FsResolver::new( base.path(), "cwasm" ),
	);

	assert_eq!( resolved( &resolver, "./value" ), module );
	assert_eq!( resolved( &resolver, "./value.cwasm" ), module );

}
