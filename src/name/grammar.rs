//! Regular expressions for the flat forms and the number rules shared by all three parsers.
//!
//! `.*` is greedy and the regex engine gives leftmost-first priority, so every group takes the
//! longest text that still lets the rest of the pattern match, in group order. The optional
//! `\n` before the end anchor lets a single trailing newline through, like `$` does in most
//! backtracking engines.
//
use crate::{ import::*, InstanceNameErr, NameKind, FormatFault };


pub(crate) static DATACENTER: SyncLazy<Regex> = SyncLazy::new( ||
{
	Regex::new( r"^(?P<env>.*)_DC(?P<dc>.*)\n?$" ).expect( "valid datacenter regex" )
});


pub(crate) static HOST: SyncLazy<Regex> = SyncLazy::new( ||
{
	Regex::new( r"^(?P<env>.*)_DC(?P<dc>.*)_(?P<host>.*)\n?$" ).expect( "valid host regex" )
});


pub(crate) static INSTANCE: SyncLazy<Regex> = SyncLazy::new( ||
{
	Regex::new( r"^(?P<env>.*)_DC(?P<dc>.*)_(?P<host>.*)_(?P<service>.*)_IN(?P<instance>.*)\n?$" )

		.expect( "valid instance regex" )
});



/// A successful match of one of the regexes above against a token.
//
#[ derive( Debug ) ]
//
pub(crate) struct Matched<'t>
{
	kind : NameKind     ,
	token: &'t str      ,
	caps : Captures<'t> ,
}


impl<'t> Matched<'t>
{
	pub(crate) fn new( re: &Regex, kind: NameKind, token: &'t str ) -> Result<Self, InstanceNameErr>
	{
		match re.captures( token )
		{
			Some( caps ) => Ok( Self { kind, token, caps } ),
			None         => Err( InstanceNameErr::format( kind, token, FormatFault::Shape ) ),
		}
	}


	/// A free text group.
	//
	pub(crate) fn text( &self, group: &str ) -> &'t str
	{
		self.caps.name( group ).map( |m| m.as_str() ).unwrap_or_default()
	}


	/// A number group. Accepts surrounding white space and a sign. Fails on anything else,
	/// including values that don't fit in 32 bits.
	//
	pub(crate) fn int32( &self, group: &str, fault: FormatFault ) -> Result<i32, InstanceNameErr>
	{
		let digits = self.text( group ).trim_matches( is_number_space );

		digits.parse::<i32>()

			.map_err( |_| InstanceNameErr::format( self.kind, self.token, fault ) )
	}
}


fn is_number_space( c: char ) -> bool
{
	matches!( c, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' )
}
