//! Reserved path aliases.
//!
//! An alias is a reserved prefix such as `@utils` that the resolver rewrites to a
//! real location before resolution. The table is ordered and the first declared
//! match wins, which is why `@webpack/types` is declared before `@webpack`.
//!
//! A prefix only matches a request that is either exactly the prefix or the prefix
//! followed by a path separator, so `@webpack` never claims `@webpackish`.
//!
//! ```
//! use plugin_natives::PathAliasTable ;
//!
//! let aliases = PathAliasTable::reserved( "/opt/app/plugins" );
//! assert_eq!( aliases.rewrite( "@utils/text" ).as_deref(), Some( "./utils/text" ));
//! assert_eq!( aliases.rewrite( "@webpack/types" ).as_deref(), Some( "./webpack/common/types" ));
//! assert_eq!( aliases.rewrite( "@plugins/foo/native" ).as_deref(), Some( "/opt/app/plugins/foo/native" ));
//! assert_eq!( aliases.rewrite( "@webpackish" ), None );
//! ```

use std::path::Path ;
use pipe_trait::Pipe ;

/// Leading character shared by every reserved prefix.
pub const ALIAS_SIGIL: char = '@' ;

/// Separator that must follow a prefix for a non-exact match.
pub const PATH_SEPARATOR: char = '/' ;

/// Fixed part of the reserved table. `@plugins` is appended by
/// [`PathAliasTable::reserved`] since its target is only known at runtime.
const RESERVED: [( &str, &str ); 10] = [
	( "@main", "./main" ),
	( "@api", "./api" ),
	( "@components", "./components" ),
	( "@utils", "./utils" ),
	( "@shared", "./shared" ),
	( "@webpack/types", "./webpack/common/types" ),
	( "@webpack/patcher", "./webpack/patchWebpack" ),
	( "@webpack/common", "./webpack/common" ),
	( "@webpack/wreq.d", "./webpack/wreq.d" ),
	( "@webpack", "./webpack/webpack" ),
];

/// Prefix of the alias resolved to the runtime plugins directory.
pub const PLUGINS_ALIAS: &str = "@plugins" ;

/// A single `prefix -> target` pair.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Alias {
	prefix: String,
	target: String,
}

impl Alias {
	#[inline]
	pub fn new( prefix: impl Into<String>, target: impl Into<String> ) -> Self {
		Self { prefix: prefix.into(), target: target.into() }
	}

	#[inline] pub fn prefix( &self ) -> &str { &self.prefix }
	#[inline] pub fn target( &self ) -> &str { &self.target }

	/// Returns the remainder of `request` after the prefix if the prefix matches
	/// on a separator boundary.
	fn strip<'a>( &self, request: &'a str ) -> Option<&'a str> {
		let rest = request.strip_prefix( self.prefix.as_str() )?;
		match rest.is_empty() || rest.starts_with( PATH_SEPARATOR ) {
			true => Some( rest ),
			false => None,
		}
	}
}

/// Ordered set of reserved prefixes, static for the process lifetime.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PathAliasTable {
	aliases: Vec<Alias>,
}

impl PathAliasTable {

	/// Creates a table from aliases in declaration order.
	pub fn new( aliases: impl IntoIterator<Item = Alias> ) -> Self {
		Self { aliases: aliases.into_iter().collect() }
	}

	/// The reserved table, with `@plugins` pointing at `plugins_dir`.
	pub fn reserved( plugins_dir: impl AsRef<Path> ) -> Self {
		RESERVED.iter()
			.map(|( prefix, target )| Alias::new( *prefix, *target ))
			.chain( std::iter::once( Alias::new( PLUGINS_ALIAS, plugins_dir.as_ref().to_string_lossy() )))
			.pipe( Self::new )
	}

	#[inline] pub fn aliases( &self ) -> &[Alias] { &self.aliases }

	/// Finds the first alias whose prefix matches `request`.
	pub fn matching( &self, request: &str ) -> Option<&Alias> {
		self.aliases.iter().find(| alias | alias.strip( request ).is_some() )
	}

	/// Rewrites `request` to `target + remainder` using the first matching alias.
	///
	/// Aliases are not recursive: the rewritten path is never matched again.
	pub fn rewrite( &self, request: &str ) -> Option<String> {
		self.aliases.iter().find_map(| alias | alias.strip( request )
			.map(| rest | format!( "{}{}", alias.target, rest ))
		)
	}

}
