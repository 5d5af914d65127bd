use crate::{ import::* };


/// Errors that can happen in instance_name.
//
#[ derive( Debug, Error, Clone, PartialEq, Eq ) ]
//
#[ non_exhaustive ]
//
pub enum InstanceNameErr
{
	/// The input is not a validly formatted name.
	//
	#[ error( "{input:?} is not a validly formatted {kind}: {fault}." ) ]
	//
	Format
	{
		/// Which name was being parsed.
		//
		kind: NameKind,

		/// The text that was rejected.
		//
		input: String,

		/// Which part of the grammar failed.
		//
		fault: FormatFault,
	},


	/// The environment variable holding the instance name does not contain valid unicode.
	//
	#[ error( "Environment variable {var} does not contain valid unicode." ) ]
	//
	EnvNotUnicode
	{
		/// The name of the variable.
		//
		var: String,
	},
}


impl InstanceNameErr
{
	pub(crate) fn format( kind: NameKind, input: &str, fault: FormatFault ) -> Self
	{
		Self::Format { kind, input: input.to_string(), fault }
	}
}



/// The kind of name that failed to parse.
//
#[ derive( Debug, Error, Clone, Copy, PartialEq, Eq ) ]
//
pub enum NameKind
{
	/// `<environment>_DC<datacenterId>`
	//
	#[ error( "datacenter name" ) ]
	//
	Datacenter,

	/// `<environment>_DC<datacenterId>_<hostName>`
	//
	#[ error( "service host name" ) ]
	//
	Host,

	/// `<environment>_DC<datacenterId>_<hostName>_<serviceName>_IN<instanceId>`
	//
	#[ error( "service instance name" ) ]
	//
	Instance,
}



/// What went wrong while parsing a name.
//
#[ derive( Debug, Error, Clone, Copy, PartialEq, Eq ) ]
//
pub enum FormatFault
{
	/// The text does not have the shape of the grammar.
	//
	#[ error( "the text does not match the expected shape" ) ]
	//
	Shape,

	/// The text after `_DC` is not a 32 bit integer.
	//
	#[ error( "the datacenter id is not a 32 bit integer" ) ]
	//
	DatacenterId,

	/// The text after `_IN` is not a 32 bit integer.
	//
	#[ error( "the instance id is not a 32 bit integer" ) ]
	//
	InstanceId,
}



#[cfg(test)]
//
mod tests
{
	use super::{ *, assert_eq };


	#[test]
	//
	fn display_format()
	{
		let err = InstanceNameErr::format( NameKind::Instance, "garbage", FormatFault::Shape );

		assert_eq!
		(
			"\"garbage\" is not a validly formatted service instance name: the text does not match the expected shape.",
			&err.to_string()
		);
	}
}
