use crate::{ import::*, InstanceContext };


tokio::task_local!
{
	static ACTIVE: Arc<InstanceContext>;
}


/// The context of the innermost scope, if we are in one.
//
pub(super) fn active() -> Option< Arc<InstanceContext> >
{
	ACTIVE.try_with( Arc::clone ).ok()
}


/// Run `fut` with `cx` as the active context. Works on any executor, the scope travels with the
/// future, not with the thread polling it.
//
pub async fn scope<F: Future>( cx: Arc<InstanceContext>, fut: F ) -> F::Output
{
	ACTIVE.scope( cx, fut ).await
}


/// Run `f` with `cx` as the active context.
//
pub fn sync_scope<R>( cx: Arc<InstanceContext>, f: impl FnOnce() -> R ) -> R
{
	ACTIVE.sync_scope( cx, f )
}


/// Fork the active context right now and run `fut` in the fork. Use this on futures that get
/// spawned, so they see the identity of the code spawning them without being able to change it.
//
pub fn propagate<F: Future>( fut: F ) -> impl Future< Output = F::Output >
{
	let forked = match active()
	{
		Some( cx ) => cx.fork(),
		None       => super::global().fork(),
	};

	ACTIVE.scope( Arc::new( forked ), fut )
}
