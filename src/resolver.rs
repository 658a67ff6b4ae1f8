//! Module resolution.
//!
//! A [`ModuleResolver`] turns a request string into the file that backs it. The
//! host's default strategy is [`FsResolver`]; [`AliasingResolver`] wraps it in a
//! chain that first rewrites reserved aliases, then consults the source module
//! index, and finally delegates to the wrapped resolver.
//!
//! The chain is installed once per process with [`install`] and is never torn
//! down for the rest of the process lifetime. Code that needs a resolver should
//! receive one explicitly; [`installed`] exists for code running after startup.

mod aliasing_resolver ;
mod fs_resolver ;
mod install ;

use std::path::PathBuf ;
use thiserror::Error ;

pub use aliasing_resolver::AliasingResolver ;
pub use fs_resolver::FsResolver ;
pub use install::{ install, installed, Installation };



/// Resolution failures. Aliases add no error kind of their own: an alias whose
/// target does not exist fails like any other missing module.
#[derive( Error, Debug )]
pub enum ResolveError {
	#[error( "Cannot find module '{request}'" )]
	NotFound { request: String },
}

/// Strategy turning a request into the file that backs it.
pub trait ModuleResolver: Send + Sync {
	/// # Errors
	/// Fails if no file backs `request`.
	fn resolve( &self, request: &str ) -> Result<PathBuf, ResolveError> ;
}
