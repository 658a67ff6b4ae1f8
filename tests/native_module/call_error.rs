use plugin_natives::{ Engine, Linker, Val, CallError, PluginNatives, StaticNative };
use crate::fixtures ;

fn get_value() -> PluginNatives {
	let engine = Engine::default();
	let linker = Linker::new( &engine );
	PluginNatives::instantiate( &engine, &linker, &[ StaticNative::new( "alpha", fixtures::GET_VALUE.as_bytes() )])
		.expect( "Failed to instantiate natives" )
}

#[test]
fn call_error_invalid_interface() {

	let mut natives = get_value();
	let alpha = natives.get_mut( "alpha" ).expect( "alpha missing" );

	match alpha.call( Some( "my:package/missing" ), "get-value", &[], &mut [ Val::U32( 0 )]) {
		Err( CallError::InvalidInterfacePath( path )) if path == "my:package/missing" => {}
		value => panic!( "Expected InvalidInterfacePath error, found: {:#?}", value ),
	}

}

#[test]
fn call_error_invalid_function() {

	let mut natives = get_value();
	let alpha = natives.get_mut( "alpha" ).expect( "alpha missing" );

	match alpha.call( Some( "my:package/example" ), "nonexistent-function", &[], &mut []) {
		Err( CallError::InvalidFunction( name )) if name == "my:package/example:nonexistent-function" => {}
		value => panic!( "Expected InvalidFunction error, found: {:#?}", value ),
	}

}

#[test]
fn call_error_invalid_argument_list() {

	let mut natives = get_value();
	let alpha = natives.get_mut( "alpha" ).expect( "alpha missing" );

	match alpha.call( None, "get-value", &[ Val::U32( 1 )], &mut [ Val::U32( 0 )]) {
		Err( CallError::RuntimeException( _ )) => {}
		value => panic!( "Expected RuntimeException error, found: {:#?}", value ),
	}

}
