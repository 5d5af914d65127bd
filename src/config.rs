//! Establishing the identity of the process at startup.
//!
//! The identity usually comes from the deployment, either as a complete flat token in the
//! `SERVICE_INSTANCE_NAME` environment variable or as separate fields in a config file.
//!
//! ```
//! use instance_name::{ *, config::* };
//!
//! std::env::set_var( "MY_INSTANCE", "Prod_DC0_MACHINE01_Gallery_IN2" );
//!
//! let name = from_env_var( "MY_INSTANCE" ).unwrap().expect( "variable is set" );
//!
//! assert_eq!( "Gallery_IN2", name.full_instance_name() );
//! ```
//
use crate::{ import::*, current, DatacenterName, InstanceNameErr, ServiceHostName, ServiceInstanceName };


/// The environment variable read by [`from_env`].
//
pub const DEFAULT_ENV_VAR: &str = "SERVICE_INSTANCE_NAME";


/// The identity of an instance as it appears in configuration. Either a complete flat token:
///
/// ```text
/// { "instance": "Prod_DC0_MACHINE01_Gallery_IN2" }
/// ```
///
/// or the separate parts:
///
/// ```text
/// { "environment": "Prod", "datacenter_id": 0, "host": "MACHINE01", "service": "Gallery", "instance_id": 2 }
/// ```
///
/// The parts form does not go through the grammar, so it can express names that contain `_`.
/// A token that does not parse fails deserialization with the [`InstanceNameErr::Format`] message.
//
#[ derive( Debug, Clone, PartialEq, Eq, Deserialize ) ]
//
#[ serde( try_from = "RawIdentityConfig" ) ]
//
pub enum IdentityConfig
{
	/// A complete flat token.
	//
	Token
	{
		/// The flat token.
		//
		instance: ServiceInstanceName,
	},

	/// The parts of the name.
	//
	Parts
	{
		/// The environment label.
		//
		environment: String,

		/// The index of the datacenter.
		//
		datacenter_id: i32,

		/// The name of the machine.
		//
		host: String,

		/// The name of the service.
		//
		service: String,

		/// The index of the instance on the host.
		//
		instance_id: i32,
	},
}


/// The shape of the config before the token is parsed, so a bad token reports the parse error
/// instead of failing to match either form.
//
#[ derive( Deserialize ) ]
//
#[ serde( untagged ) ]
//
enum RawIdentityConfig
{
	Token
	{
		instance: String,
	},

	Parts
	{
		environment  : String,
		datacenter_id: i32   ,
		host         : String,
		service      : String,
		instance_id  : i32   ,
	},
}


impl TryFrom< RawIdentityConfig > for IdentityConfig
{
	type Error = InstanceNameErr;

	fn try_from( raw: RawIdentityConfig ) -> Result<Self, InstanceNameErr>
	{
		match raw
		{
			RawIdentityConfig::Token{ instance } =>
			{
				Ok( Self::Token{ instance: ServiceInstanceName::parse( &instance )? } )
			}

			RawIdentityConfig::Parts{ environment, datacenter_id, host, service, instance_id } =>
			{
				Ok( Self::Parts{ environment, datacenter_id, host, service, instance_id } )
			}
		}
	}
}


impl IdentityConfig
{
	/// Build the name this config describes.
	//
	pub fn into_name( self ) -> ServiceInstanceName
	{
		match self
		{
			Self::Token{ instance } => instance,

			Self::Parts{ environment, datacenter_id, host, service, instance_id } =>
			{
				let datacenter = DatacenterName::new( environment, datacenter_id );

				ServiceInstanceName::new( ServiceHostName::new( datacenter, host ), service, instance_id )
			}
		}
	}
}



/// Read the name from [`DEFAULT_ENV_VAR`].
//
pub fn from_env() -> Result< Option<ServiceInstanceName>, InstanceNameErr >
{
	from_env_var( DEFAULT_ENV_VAR )
}


/// Read the name from the environment variable `var`. Returns `Ok(None)` when it's not set.
///
/// # Errors
///
/// - [`InstanceNameErr::EnvNotUnicode`] when the variable is not valid unicode.
/// - [`InstanceNameErr::Format`] when it does not hold a valid flat token.
//
pub fn from_env_var( var: &str ) -> Result< Option<ServiceInstanceName>, InstanceNameErr >
{
	match std::env::var( var )
	{
		Ok( token ) => ServiceInstanceName::parse( token.trim() ).map( Some ),

		Err( std::env::VarError::NotPresent ) =>
		{
			debug!( "environment variable {} is not set, no service instance name", var );
			Ok( None )
		}

		Err( std::env::VarError::NotUnicode(_) ) =>
		{
			Err( InstanceNameErr::EnvNotUnicode{ var: var.to_string() } )
		}
	}
}


/// Make `name` the identity of this process: set it in the global context.
//
pub fn install( name: ServiceInstanceName )
{
	info!( "service instance: {}", &name );

	current::global().set( name );
}
