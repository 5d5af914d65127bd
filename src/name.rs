//! The three levels of the identity and the grammar of their flat form.
//!
//! ```text
//! <environment>_DC<datacenterId>_<hostName>_<serviceName>_IN<instanceId>
//! |-- DatacenterName ----------|
//! |-- ServiceHostName -----------------------|
//! |-- ServiceInstanceName ---------------------------------------------|
//! ```
//!
//! The free text fields are matched greedily from left to right. Since none of the separators
//! are excluded from the free text, a token only parses back to its original components when
//! the host name and service name contain no `_`, and the environment does not contain `_DC`.
//! Eg. `Prod_DC1_web_01_Gallery_IN1` will be read with `1_web` as datacenter id, which is not a
//! number, so it fails to parse.
//

/// Implement the traits that are the same for all three names in terms of their inherent
/// `parse`, `hash_parts`, `Ord` and `Display`. Must stay above the modules that use it.
//
macro_rules! flat_token_traits
{
	( $name:ident ) =>
	{
		impl FromStr for $name
		{
			type Err = InstanceNameErr;

			fn from_str( token: &str ) -> Result<Self, InstanceNameErr>
			{
				Self::parse( token )
			}
		}


		impl TryFrom< &str > for $name
		{
			type Error = InstanceNameErr;

			fn try_from( token: &str ) -> Result<Self, InstanceNameErr>
			{
				Self::parse( token )
			}
		}


		impl Hash for $name
		{
			fn hash<H: Hasher>( &self, state: &mut H )
			{
				self.hash_parts( state )
			}
		}


		impl PartialOrd for $name
		{
			fn partial_cmp( &self, other: &Self ) -> Option<Ordering>
			{
				Some( self.cmp( other ) )
			}
		}


		impl PartialEq for $name
		{
			fn eq( &self, other: &Self ) -> bool
			{
				self.cmp( other ) == Ordering::Equal
			}
		}

		impl Eq for $name {}


		/// Serializes as the flat token.
		//
		impl Serialize for $name
		{
			fn serialize<S: Serializer>( &self, serializer: S ) -> Result<S::Ok, S::Error>
			{
				serializer.collect_str( self )
			}
		}


		/// Deserializes from the flat token with the strict parser.
		//
		impl<'de> Deserialize<'de> for $name
		{
			fn deserialize<D: Deserializer<'de>>( deserializer: D ) -> Result<Self, D::Error>
			{
				let token = String::deserialize( deserializer )?;

				Self::parse( &token ).map_err( D::Error::custom )
			}
		}
	}
}


mod datacenter ;
mod grammar    ;
mod host       ;
mod instance   ;

pub use
{
	datacenter :: * ,
	host       :: * ,
	instance   :: * ,
};
