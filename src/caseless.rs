//! Ordinal comparison of strings ignoring case.
//!
//! Characters are folded one by one to their upper case. When the upper case of a character is
//! more than one character (eg. `ß`), the character is kept as is, so folding never changes the
//! length of a string. This is not locale aware.
//
use crate::{ import::* };


fn fold( c: char ) -> char
{
	let mut upper = c.to_uppercase();

	match ( upper.next(), upper.next() )
	{
		( Some(u), None ) => u,
		_                 => c,
	}
}


fn folded( s: &str ) -> impl Iterator< Item=char > + '_
{
	s.chars().map( fold )
}


pub(crate) fn eq( a: &str, b: &str ) -> bool
{
	folded( a ).eq( folded( b ) )
}


pub(crate) fn cmp( a: &str, b: &str ) -> Ordering
{
	folded( a ).cmp( folded( b ) )
}


/// Writes the folded characters as little endian code points followed by a terminator, so that
/// adjacent fields can not run into each other.
//
pub(crate) fn hash<H: Hasher>( s: &str, state: &mut H )
{
	for c in folded( s )
	{
		state.write( &( c as u32 ).to_le_bytes() );
	}

	state.write_u8( 0xff );
}
