//! # Service instance names
//!
//! Identify one running instance of a service in a multi datacenter deployment. The identity is
//! a three level hierarchy:
//!
//! ```text
//! DatacenterName      : environment + datacenter index
//! ServiceHostName     : DatacenterName + host name
//! ServiceInstanceName : ServiceHostName + service name + instance index
//! ```
//!
//! Every level converts to and from a flat token, eg. `Prod_DC0_MACHINE01_Gallery_IN2`, which is
//! what ends up in process names, log correlation labels and handshakes between processes.
//! String components compare ignoring case, so names can be deduplicated and looked up
//! regardless of how they were typed in a config file.
//!
//! The [`current`] module holds the identity of the running process, either in the global
//! context or in a context scoped to a task.
//
#![ doc    ( html_root_url = "https://docs.rs/instance_name"               ) ]
#![ deny   ( missing_docs, bare_trait_objects                             ) ]
#![ forbid ( unsafe_code                                                  ) ]
#![ allow  ( clippy::suspicious_else_formatting                           ) ]

#![ warn
(
	missing_debug_implementations ,
	nonstandard_style             ,
	rust_2018_idioms              ,
	trivial_casts                 ,
	trivial_numeric_casts         ,
	unused_extern_crates          ,
	unused_qualifications         ,
	single_use_lifetimes          ,
	unreachable_pub               ,
	variant_size_differences      ,
)]


    mod caseless      ;
pub mod config        ;
pub mod current       ;
    mod error         ;
    mod hash_combiner ;
pub mod name          ;

pub use
{
	config        :: { IdentityConfig                          } ,
	current       :: { InstanceContext                         } ,
	error         :: { InstanceNameErr, NameKind, FormatFault  } ,
	hash_combiner :: { HashCombiner                            } ,
	name          :: * ,
};



// Import module. Avoid * imports here. These are all the foreign names that exist throughout
// the crate. They must all be unique.
//
mod import
{
	pub(crate) use
	{
		once_cell   :: { sync::Lazy as SyncLazy             } ,
		parking_lot :: { Mutex                              } ,
		regex       :: { Regex, Captures                    } ,
		serde       :: { Serialize, Serializer, Deserialize, Deserializer, de::Error as _ } ,
		thiserror   :: { Error                              } ,
		tracing     :: { trace, debug, info                 } ,
		twox_hash   :: { XxHash64                           } ,

		std ::
		{
			cmp     :: { Ordering                           } ,
			fmt                                               ,
			future  :: { Future                             } ,
			hash    :: { Hash, Hasher                       } ,
			str     :: { FromStr                            } ,
			sync    :: { Arc                                } ,
		},
	};


	#[ cfg(test) ]
	//
	pub(crate) use
	{
		pretty_assertions :: { assert_eq          } ,
		futures           :: { executor::block_on } ,
	};
}
