use std::sync::Arc ;
use once_cell::sync::OnceCell ;

use super::ModuleResolver ;



static RESOLVER: OnceCell<Arc<dyn ModuleResolver>> = OnceCell::new();

/// Result of [`install`]. Both variants carry the resolver that is in effect.
pub enum Installation {
	/// This call installed the resolver.
	Installed( Arc<dyn ModuleResolver> ),
	/// A resolver was already installed; the one passed in was dropped.
	AlreadyInstalled( Arc<dyn ModuleResolver> ),
}

impl Installation {
	/// The process-wide resolver.
	pub fn resolver( &self ) -> &Arc<dyn ModuleResolver> {
		match self {
			Self::Installed( resolver ) | Self::AlreadyInstalled( resolver ) => resolver,
		}
	}

	#[inline] pub fn is_fresh( &self ) -> bool { matches!( self, Self::Installed( _ )) }
}

impl std::fmt::Debug for Installation {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		match self {
			Self::Installed( _ ) => f.write_str( "Installed" ),
			Self::AlreadyInstalled( _ ) => f.write_str( "AlreadyInstalled" ),
		}
	}
}

/// Installs `resolver` as the process-wide resolver, once.
///
/// The check and the set are a single atomic step, so concurrent callers can
/// never both install. Every call after the first is a no-op that leaves the
/// first resolver in place; nothing is ever wrapped twice.
pub fn install( resolver: Arc<dyn ModuleResolver> ) -> Installation {
	let mut fresh = false ;
	let installed = RESOLVER.get_or_init(|| { fresh = true ; resolver }).clone();
	match fresh {
		true => Installation::Installed( installed ),
		false => Installation::AlreadyInstalled( installed ),
	}
}

/// The process-wide resolver, if one was installed.
pub fn installed() -> Option<Arc<dyn ModuleResolver>> {
	RESOLVER.get().cloned()
}
