use std::path::PathBuf ;
use tracing::trace ;

use crate::{ PathAliasTable, SourceModuleIndex };
use crate::alias::ALIAS_SIGIL ;
use super::{ ModuleResolver, ResolveError };



/// Chain of responsibility: alias rewrite, then index lookup, then the wrapped
/// resolver.
///
/// - A request matching a reserved prefix is rewritten once (aliases are not
/// 	recursive) and continues down the chain.
/// - A request starting with the alias sigil but matching no prefix goes to the
/// 	wrapped resolver untouched, so third-party paths sharing the sigil keep working.
/// - Any other request that names an indexed source module is resolved through
/// 	the index's request string; everything else is delegated unchanged.
#[derive( Debug, Clone )]
pub struct AliasingResolver<R> {
	aliases: PathAliasTable,
	index: SourceModuleIndex,
	fallback: R,
}

impl<R: ModuleResolver> AliasingResolver<R> {

	pub fn new( aliases: PathAliasTable, index: SourceModuleIndex, fallback: R ) -> Self {
		Self { aliases, index, fallback }
	}

	#[inline] pub fn aliases( &self ) -> &PathAliasTable { &self.aliases }
	#[inline] pub fn index( &self ) -> &SourceModuleIndex { &self.index }
	#[inline] pub fn fallback( &self ) -> &R { &self.fallback }

}

impl<R: ModuleResolver> ModuleResolver for AliasingResolver<R> {
	fn resolve( &self, request: &str ) -> Result<PathBuf, ResolveError> {

		let request = match self.aliases.rewrite( request ) {
			Some( rewritten ) => {
				trace!( %request, %rewritten, "Rewrote aliased request" );
				rewritten
			},
			None if request.starts_with( ALIAS_SIGIL ) => return self.fallback.resolve( request ),
			None => request.to_string(),
		};

		match self.index.lookup( &request ) {
			Some( indexed ) => self.fallback.resolve( indexed ),
			None => self.fallback.resolve( &request ),
		}

	}
}
