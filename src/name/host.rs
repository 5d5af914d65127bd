use
{
	crate :: { import::*, caseless, DatacenterName, HashCombiner, InstanceNameErr, NameKind },
	super :: { grammar::{ self, Matched } },
};


/// A named machine within a datacenter.
///
/// Formats as `<datacenter>_<host_name>`. The host name compares ignoring case.
//
#[ derive( Debug, Clone ) ]
//
pub struct ServiceHostName
{
	datacenter: DatacenterName,
	host_name : Arc<str>      ,
}


impl ServiceHostName
{
	/// No validation is done.
	//
	pub fn new( datacenter: DatacenterName, host_name: impl Into< Arc<str> > ) -> Self
	{
		Self { datacenter, host_name: host_name.into() }
	}


	/// The datacenter this host lives in.
	//
	pub fn datacenter( &self ) -> &DatacenterName
	{
		&self.datacenter
	}


	/// The name of the machine, eg. `MACHINE01`.
	//
	pub fn host_name( &self ) -> &str
	{
		&self.host_name
	}


	/// Parse `<environment>_DC<datacenter_id>_<host_name>`. Returns `None` if the text doesn't match.
	//
	pub fn try_parse( token: &str ) -> Option<Self>
	{
		Self::parse( token )

			.map_err( |e| trace!( "ServiceHostName::try_parse rejected: {}", e ) )
			.ok()
	}


	/// Parse `<environment>_DC<datacenter_id>_<host_name>`.
	///
	/// # Errors
	///
	/// [`InstanceNameErr::Format`] if the text does not match the grammar or if the datacenter id
	/// is not a 32 bit integer.
	//
	pub fn parse( token: &str ) -> Result<Self, InstanceNameErr>
	{
		let m = Matched::new( &grammar::HOST, NameKind::Host, token )?;

		Self::from_match( &m )
	}


	pub(crate) fn from_match( m: &Matched<'_> ) -> Result<Self, InstanceNameErr>
	{
		let datacenter = DatacenterName::from_match( m )?;

		Ok( Self::new( datacenter, m.text( "host" ) ) )
	}


	/// A hash that is stable across processes and platforms. Equal names give equal hashes.
	//
	pub fn stable_hash( &self ) -> u64
	{
		HashCombiner::start().add( self ).finish()
	}


	fn hash_parts<H: Hasher>( &self, state: &mut H )
	{
		self.datacenter.hash( state );
		caseless::hash( &self.host_name, state );
	}
}


flat_token_traits!( ServiceHostName );


impl Ord for ServiceHostName
{
	fn cmp( &self, other: &Self ) -> Ordering
	{
		self.datacenter.cmp( &other.datacenter )

			.then_with( || caseless::cmp( &self.host_name, &other.host_name ) )
	}
}


impl fmt::Display for ServiceHostName
{
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result
	{
		write!( f, "{}_{}", self.datacenter, self.host_name )
	}
}
