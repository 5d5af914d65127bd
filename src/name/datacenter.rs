use
{
	crate :: { import::*, caseless, HashCombiner, InstanceNameErr, NameKind, FormatFault },
	super :: { grammar::{ self, Matched } },
};


/// A deployment environment instance: an environment label and a numeric index.
///
/// Formats as `<environment>_DC<datacenter_id>`. The environment compares ignoring case.
/// The environment must not contain `_DC`, or the flat form won't parse back to the same value.
//
#[ derive( Debug, Clone ) ]
//
pub struct DatacenterName
{
	environment  : Arc<str>,
	datacenter_id: i32     ,
}


impl DatacenterName
{
	/// No validation is done.
	//
	pub fn new( environment: impl Into< Arc<str> >, datacenter_id: i32 ) -> Self
	{
		Self { environment: environment.into(), datacenter_id }
	}


	/// The environment label, eg. `Prod`.
	//
	pub fn environment( &self ) -> &str
	{
		&self.environment
	}


	/// The index of the datacenter within the environment.
	//
	pub fn datacenter_id( &self ) -> i32
	{
		self.datacenter_id
	}


	/// Parse `<environment>_DC<datacenter_id>`. Returns `None` if the text doesn't match.
	//
	pub fn try_parse( token: &str ) -> Option<Self>
	{
		Self::parse( token )

			.map_err( |e| trace!( "DatacenterName::try_parse rejected: {}", e ) )
			.ok()
	}


	/// Parse `<environment>_DC<datacenter_id>`.
	///
	/// # Errors
	///
	/// [`InstanceNameErr::Format`] if the text does not match the grammar or if the datacenter id
	/// is not a 32 bit integer.
	//
	pub fn parse( token: &str ) -> Result<Self, InstanceNameErr>
	{
		let m = Matched::new( &grammar::DATACENTER, NameKind::Datacenter, token )?;

		Self::from_match( &m )
	}


	pub(crate) fn from_match( m: &Matched<'_> ) -> Result<Self, InstanceNameErr>
	{
		let datacenter_id = m.int32( "dc", FormatFault::DatacenterId )?;

		Ok( Self::new( m.text( "env" ), datacenter_id ) )
	}


	/// A hash that is stable across processes and platforms. Equal names give equal hashes.
	//
	pub fn stable_hash( &self ) -> u64
	{
		HashCombiner::start().add( self ).finish()
	}


	fn hash_parts<H: Hasher>( &self, state: &mut H )
	{
		caseless::hash( &self.environment, state );
		state.write( &self.datacenter_id.to_le_bytes() );
	}
}


flat_token_traits!( DatacenterName );


impl Ord for DatacenterName
{
	fn cmp( &self, other: &Self ) -> Ordering
	{
		caseless::cmp( &self.environment, &other.environment )

			.then( self.datacenter_id.cmp( &other.datacenter_id ) )
	}
}


impl fmt::Display for DatacenterName
{
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result
	{
		write!( f, "{}_DC{}", self.environment, self.datacenter_id )
	}
}



#[cfg(test)]
//
mod tests
{
	// What's tested:
	// 1. display.
	// 2. equality and hash ignore the case of the environment, not the id.
	// 3. parsing, including failure.
	//
	use super::{ *, assert_eq };


	#[test]
	//
	fn display()
	{
		assert_eq!( "Prod_DC0", DatacenterName::new( "Prod", 0 ).to_string() );
		assert_eq!( "Int_DC-3", DatacenterName::new( "Int", -3 ).to_string() );
	}


	#[test]
	//
	fn equality()
	{
		let a = DatacenterName::new( "Prod", 1 );

		assert_eq!( a, DatacenterName::new( "PROD", 1 ) );
		assert_ne!( a, DatacenterName::new( "Prod", 2 ) );
		assert_ne!( a, DatacenterName::new( "Test", 1 ) );

		assert_eq!( a.stable_hash(), DatacenterName::new( "prod", 1 ).stable_hash() );
	}


	#[test]
	//
	fn parse()
	{
		assert_eq!( Some( DatacenterName::new( "Prod", 12 ) ), DatacenterName::try_parse( "Prod_DC12" ) );
		assert_eq!( Some( DatacenterName::new( "a_DC", 1 ) ), DatacenterName::try_parse( "a_DC_DC1"  ) );

		assert_eq!( None, DatacenterName::try_parse( "Prod"    ) );
		assert_eq!( None, DatacenterName::try_parse( "Prod_DC" ) );

		assert_eq!
		(
			Err( InstanceNameErr::format( NameKind::Datacenter, "Prod_DCx", FormatFault::DatacenterId ) ),
			DatacenterName::parse( "Prod_DCx" )
		);
	}
}
