use crate::params::Params;

/// A route value that can be invoked with a caller context and the
/// extracted params.
pub trait Handler<C> {
    type Output;

    fn call(&self, ctx: C, params: Params<'_>) -> Self::Output;
}

impl<C, F, O> Handler<C> for F
where
    F: Fn(C, Params<'_>) -> O,
{
    type Output = O;

    fn call(&self, ctx: C, params: Params<'_>) -> O {
        (self)(ctx, params)
    }
}
