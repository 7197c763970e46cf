/// Fire-and-forget directives to the host application's navigation stack.
///
/// The gate never inspects a result; implementors are free to enqueue the
/// directive and apply it whenever their UI loop gets around to it.
pub trait NavigationSignal: Send + Sync {
    /// Discard any in-memory session state and replace the stack with the
    /// unauthenticated root.
    fn reset_to_unauthenticated_root(&self);

    /// Re-mount the unlock screen with automatic unlock suppressed, so the
    /// sensor prompt does not immediately fire again.
    fn suppress_auto_unlock(&self);
}
