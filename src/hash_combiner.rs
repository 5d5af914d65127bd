use crate::{ import::* };


/// Combines the hashes of several values into one in an order sensitive way.
///
/// The std `DefaultHasher` is randomly seeded per process. This uses xxhash with a fixed seed
/// instead, so the result is identical across processes and can be shipped to other machines,
/// eg. to shard work by instance name.
///
/// ```
/// use instance_name::*;
///
/// let a = DatacenterName::new( "Prod", 0 );
/// let b = DatacenterName::new( "PROD", 0 );
///
/// assert_eq!( HashCombiner::start().add( &a ).finish(), a.stable_hash() );
/// assert_eq!( a.stable_hash(), b.stable_hash() );
/// ```
//
#[ derive( Default ) ]
//
pub struct HashCombiner
{
	hasher: XxHash64,
}


impl HashCombiner
{
	/// Start an empty combination.
	//
	pub fn start() -> Self
	{
		Self::default()
	}


	/// Feed the next value. Order matters: `a, b` and `b, a` will give different results.
	//
	pub fn add<T: Hash + ?Sized>( mut self, value: &T ) -> Self
	{
		value.hash( &mut self.hasher );
		self
	}


	/// The combined hash of everything added so far.
	//
	pub fn finish( &self ) -> u64
	{
		self.hasher.finish()
	}
}



impl fmt::Debug for HashCombiner
{
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result
	{
		write!( f, "HashCombiner({:#018x})", self.finish() )
	}
}
