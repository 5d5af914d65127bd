#![ allow( dead_code ) ]


pub mod import
{
	pub use
	{
		instance_name :: { *, current } ,

		std::
		{
			collections :: { HashMap, HashSet, BTreeSet } ,
			sync        :: Arc                            ,
			str         :: FromStr                        ,
		},

		futures::
		{
			executor :: { block_on, ThreadPool } ,
			task     :: { SpawnExt             } ,
		},

		pretty_assertions :: { assert_eq, assert_ne } ,
	};
}


use import::*;


/// Build an instance name from its five parts.
//
pub fn instance( env: &str, dc: i32, host: &str, service: &str, instance_id: i32 ) -> ServiceInstanceName
{
	ServiceInstanceName::new( ServiceHostName::new( DatacenterName::new( env, dc ), host ), service, instance_id )
}


/// The example used throughout the docs.
//
pub fn gallery() -> ServiceInstanceName
{
	instance( "Prod", 0, "MACHINE01", "Gallery", 2 )
}


/// Log to stdout when RUST_LOG is set.
//
pub fn init_log()
{
	let _ = tracing_subscriber::fmt()

		.with_env_filter( tracing_subscriber::EnvFilter::from_default_env() )
		.with_test_writer()
		.try_init()
	;
}
