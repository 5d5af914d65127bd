use
{
	crate :: { import::*, caseless, DatacenterName, HashCombiner, InstanceNameErr, NameKind, FormatFault, ServiceHostName },
	super :: { grammar::{ self, Matched } },
};


/// One running copy of a named service on a given host.
///
/// The flat form is:
///
/// ```text
/// <environment>_DC<datacenter_id>_<host_name>_<name>_IN<instance_id>
/// ```
///
/// Equality, ordering and hashing are structural. The environment, host name and service name
/// compare ignoring case, the ids by value.
///
/// ```
/// use instance_name::*;
///
/// let name = ServiceInstanceName::new
/// (
///    ServiceHostName::new( DatacenterName::new( "Prod", 0 ), "MACHINE01" ),
///    "Gallery",
///    2,
/// );
///
/// assert_eq!( "Prod_DC0_MACHINE01_Gallery_IN2", name.to_string()         );
/// assert_eq!( "Gallery_IN2"                   , name.full_instance_name() );
///
/// assert_eq!( Some( name ), ServiceInstanceName::try_parse( "prod_DC0_machine01_GALLERY_IN2" ) );
/// ```
//
#[ derive( Debug, Clone ) ]
//
pub struct ServiceInstanceName
{
	host       : ServiceHostName,
	name       : Arc<str>       ,
	instance_id: i32            ,
}


impl ServiceInstanceName
{
	/// No validation is done.
	//
	pub fn new( host: ServiceHostName, name: impl Into< Arc<str> >, instance_id: i32 ) -> Self
	{
		Self { host, name: name.into(), instance_id }
	}


	/// The host this instance runs on.
	//
	pub fn host( &self ) -> &ServiceHostName
	{
		&self.host
	}


	/// Shortcut for `self.host().datacenter()`.
	//
	pub fn datacenter( &self ) -> &DatacenterName
	{
		self.host.datacenter()
	}


	/// The service name, eg. `Gallery`.
	//
	pub fn name( &self ) -> &str
	{
		&self.name
	}


	/// The index of this instance of the service on the host.
	//
	pub fn instance_id( &self ) -> i32
	{
		self.instance_id
	}


	/// `<name>_IN<instance_id>`, computed on every call.
	//
	pub fn full_instance_name( &self ) -> String
	{
		format!( "{}_IN{}", self.name, self.instance_id )
	}


	/// Parse a flat token. Returns `None` if the token does not match the grammar or if
	/// either id is not a 32 bit integer.
	//
	pub fn try_parse( token: &str ) -> Option<Self>
	{
		Self::parse( token )

			.map_err( |e| trace!( "ServiceInstanceName::try_parse rejected: {}", e ) )
			.ok()
	}


	/// Parse a flat token.
	///
	/// # Errors
	///
	/// [`InstanceNameErr::Format`] if the token does not match the grammar or if either id is
	/// not a 32 bit integer.
	//
	pub fn parse( token: &str ) -> Result<Self, InstanceNameErr>
	{
		let m           = Matched::new( &grammar::INSTANCE, NameKind::Instance, token )?;
		let host        = ServiceHostName::from_match( &m )?;
		let instance_id = m.int32( "instance", FormatFault::InstanceId )?;

		Ok( Self::new( host, m.text( "service" ), instance_id ) )
	}


	/// A hash that is stable across processes and platforms. Equal names give equal hashes.
	//
	pub fn stable_hash( &self ) -> u64
	{
		HashCombiner::start().add( self ).finish()
	}


	fn hash_parts<H: Hasher>( &self, state: &mut H )
	{
		self.host.hash( state );
		caseless::hash( &self.name, state );
		state.write( &self.instance_id.to_le_bytes() );
	}
}


flat_token_traits!( ServiceInstanceName );


impl Ord for ServiceInstanceName
{
	fn cmp( &self, other: &Self ) -> Ordering
	{
		self.host.cmp( &other.host )

			.then_with( || caseless::cmp( &self.name, &other.name ) )
			.then     (    self.instance_id.cmp( &other.instance_id ) )
	}
}


impl fmt::Display for ServiceInstanceName
{
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result
	{
		write!( f, "{}_{}_IN{}", self.host, self.name, self.instance_id )
	}
}
