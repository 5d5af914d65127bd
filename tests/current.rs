// Tests:
//
// ✔ lifecycle of the global register: absent, set, equal value, overwrite, free
// ✔ install sets the global context
// ✔ a task scope hides the global identity and doesn't leak changes back
// ✔ propagate hands a copy of the identity to spawned tasks
//
// Everything that touches the global context lives in a single test, since tests in this
// file run in parallel.
//
mod common;

use common::*                       ;
use common::import::{ *, assert_eq };


#[test]
//
fn global_lifecycle()
{
	init_log();

	assert_eq!( None, current::get_current() );

	current::set_current( gallery() );

	let got = current::get_current().expect( "current is set" );

	assert_eq!( gallery()       , got                 );
	assert_eq!( gallery().to_string(), got.to_string() );

	let other = instance( "Prod", 0, "MACHINE02", "Gallery", 1 );

	current::set_current( other.clone() );
	assert_eq!( Some( other.clone() ), current::get_current() );
	assert_eq!( Some( other        ), current::global().get() );

	current::free_current();
	assert_eq!( None, current::get_current() );

	config::install( gallery() );
	assert_eq!( Some( gallery() ), current::get_current() );

	// A scope hides the global context.
	//
	let scoped = Arc::new( current::InstanceContext::new() );

	let seen = block_on( current::scope( scoped.clone(), async
	{
		let before = current::get_current();

		current::set_current( instance( "Int", 1, "box", "svc", 1 ) );

		before
	}));

	assert_eq!( None, seen );
	assert_eq!( Some( instance( "int", 1, "BOX", "svc", 1 ) ), scoped.get() );
	assert_eq!( Some( gallery() ), current::get_current() );

	// Outside of a scope, propagate forks the global context.
	//
	let child = current::propagate( async
	{
		let seen = current::get_current();
		current::free_current();
		seen
	});

	assert_eq!( Some( gallery() ), block_on( child ) );
	assert_eq!( Some( gallery() ), current::get_current() );

	current::free_current();
	assert_eq!( None, current::get_current() );
}


#[test]
//
fn spawned_tasks()
{
	let pool = ThreadPool::new().expect( "create threadpool" );
	let cx   = Arc::new( InstanceContext::with_name( instance( "Prod", 3, "web", "api", 1 ) ) );

	let handles: Vec<_> = current::sync_scope( cx.clone(), ||
	{
		( 0..4 ).map( |i|
		{
			let task = current::propagate( async move
			{
				let inherited = current::get_current();

				current::set_current( instance( "Prod", 3, "web", "api", 100 + i ) );

				( inherited, current::get_current() )
			});

			pool.spawn_with_handle( task ).expect( "spawn" )
		})
		.collect()
	});

	for ( i, ( inherited, own ) ) in block_on( futures::future::join_all( handles ) ).into_iter().enumerate()
	{
		assert_eq!( Some( instance( "Prod", 3, "web", "api", 1 ) ), inherited );
		assert_eq!( Some( instance( "Prod", 3, "web", "api", 100 + i as i32 ) ), own );
	}

	// None of the children changed the parent.
	//
	assert_eq!( Some( instance( "Prod", 3, "web", "api", 1 ) ), cx.get() );
}
