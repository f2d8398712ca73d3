/// Something that can be called with its arguments packed into a tuple.
///
/// Implemented for every `Fn` taking up to eight arguments, so that
/// `f(a, b, c)` can be spelled `f.call_with((a, b, c))`. The arguments
/// are forwarded unchanged and in order.
///
/// Note the one-tuple for a single argument: `f.call_with((a,))`.
pub trait Callable<Args> {
    type Output;

    fn call_with(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg,)*> Callable<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call_with(&self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);
impl_callable!(A, B, C, D, E);
impl_callable!(A, B, C, D, E, F);
impl_callable!(A, B, C, D, E, F, G);
impl_callable!(A, B, C, D, E, F, G, H);
