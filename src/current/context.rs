use crate::{ import::*, ServiceInstanceName };


/// A slot holding the identity of the running instance.
///
/// Cheap to read and write: reads clone the name, which only bumps reference counts.
//
#[ derive( Debug, Default ) ]
//
pub struct InstanceContext
{
	slot: Mutex< Option<ServiceInstanceName> >,
}


impl InstanceContext
{
	/// An empty context.
	//
	pub fn new() -> Self
	{
		Self::default()
	}


	/// A context that starts out holding `name`.
	//
	pub fn with_name( name: ServiceInstanceName ) -> Self
	{
		Self { slot: Mutex::new( Some( name ) ) }
	}


	/// The identity in this context, if any.
	//
	pub fn get( &self ) -> Option<ServiceInstanceName>
	{
		self.slot.lock().clone()
	}


	/// Overwrite the identity in this context.
	//
	pub fn set( &self, name: ServiceInstanceName )
	{
		debug!( "current service instance set to: {}", &name );

		*self.slot.lock() = Some( name );
	}


	/// Clear the identity in this context.
	//
	pub fn free( &self )
	{
		// The guard must be gone before logging, a subscriber might read this context.
		//
		let old = self.slot.lock().take();

		if let Some( old ) = old
		{
			debug!( "current service instance freed, was: {}", old );
		}
	}


	/// A new context holding a copy of the identity in this one. Changes to either will not be
	/// seen by the other.
	//
	pub fn fork( &self ) -> Self
	{
		Self { slot: Mutex::new( self.get() ) }
	}
}



#[cfg(test)]
//
mod tests
{
	// What's tested:
	// 1. lifecycle: empty, set, overwrite, free.
	// 2. forks are independent of their parent.
	//
	use super::{ *, assert_eq };
	use crate::{ DatacenterName, ServiceHostName };


	fn name( instance_id: i32 ) -> ServiceInstanceName
	{
		ServiceInstanceName::new( ServiceHostName::new( DatacenterName::new( "Test", 1 ), "box" ), "svc", instance_id )
	}


	#[test]
	//
	fn lifecycle()
	{
		let cx = InstanceContext::new();
		assert_eq!( None, cx.get() );

		cx.set( name( 1 ) );
		assert_eq!( Some( name( 1 ) ), cx.get() );

		cx.set( name( 2 ) );
		assert_eq!( Some( name( 2 ) ), cx.get() );

		cx.free();
		assert_eq!( None, cx.get() );

		// freeing an empty context is fine.
		//
		cx.free();
		assert_eq!( None, cx.get() );
	}


	#[test]
	//
	fn fork()
	{
		let parent = InstanceContext::with_name( name( 1 ) );
		let child  = parent.fork();

		assert_eq!( Some( name( 1 ) ), child.get() );

		child.set( name( 2 ) );
		assert_eq!( Some( name( 1 ) ), parent.get() );

		parent.free();
		assert_eq!( Some( name( 2 ) ), child.get() );
	}
}
