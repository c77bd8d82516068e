/// Callable run when a command is triggered.
///
/// Implemented for every `Fn(M, Vec<String>) -> R` that is `Send + Sync`,
/// so plain functions and closures can be used directly.
pub trait CommandAction<M, R = ()>: Send + Sync {
    fn run(&self, message: M, args: Vec<String>) -> R;
}

impl<M, R, F> CommandAction<M, R> for F
where
    F: Fn(M, Vec<String>) -> R + Send + Sync,
{
    fn run(&self, message: M, args: Vec<String>) -> R {
        self(message, args)
    }
}

/// Callable run when an event fires.
///
/// The argument list is forwarded as-is, whatever its length.
pub trait EventAction<A, R = ()>: Send + Sync {
    fn run(&self, args: Vec<A>) -> R;
}

impl<A, R, F> EventAction<A, R> for F
where
    F: Fn(Vec<A>) -> R + Send + Sync,
{
    fn run(&self, args: Vec<A>) -> R {
        self(args)
    }
}
