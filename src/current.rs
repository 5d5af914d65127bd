//! The identity of the running instance.
//!
//! An [`InstanceContext`] is a labeled slot for one [`ServiceInstanceName`]. Code that can be
//! handed a context should take one explicitly. For everything else there are the free functions
//! [`get_current`], [`set_current`] and [`free_current`]. They operate on the active context:
//!
//! - inside [`scope`], [`sync_scope`] or [`propagate`]: the context of the innermost scope,
//! - otherwise: the process wide [`global`] context.
//!
//! A scope is tied to the future (or closure) it wraps. Changes made inside a scope never leak
//! back to the code that created it. [`propagate`] gives a spawned task a copy of the identity
//! of the code that spawns it.
//!
//! ```
//! use instance_name::{ *, current::* };
//!
//! let name = ServiceInstanceName::parse( "Prod_DC0_MACHINE01_Gallery_IN2" ).unwrap();
//!
//! assert_eq!( None, get_current() );
//!
//! set_current( name.clone() );
//! assert_eq!( Some( name ), get_current() );
//!
//! free_current();
//! assert_eq!( None, get_current() );
//! ```
//
mod context ;
mod scope   ;

pub use
{
	context :: * ,
	scope   :: * ,
};

use crate::{ import::*, ServiceInstanceName };


static GLOBAL: SyncLazy<InstanceContext> = SyncLazy::new( InstanceContext::new );


/// The process wide context, used when no scope is active.
//
pub fn global() -> &'static InstanceContext
{
	&GLOBAL
}


/// The identity in the active context, if any has been set.
//
pub fn get_current() -> Option<ServiceInstanceName>
{
	with_active( InstanceContext::get )
}


/// Overwrite the identity in the active context.
//
pub fn set_current( name: ServiceInstanceName )
{
	with_active( |cx| cx.set( name ) )
}


/// Clear the identity in the active context.
//
pub fn free_current()
{
	with_active( InstanceContext::free )
}


fn with_active<R>( f: impl FnOnce( &InstanceContext ) -> R ) -> R
{
	match scope::active()
	{
		Some( cx ) => f( &cx     ),
		None       => f( global() ),
	}
}
