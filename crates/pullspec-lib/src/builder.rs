//! Accumulate-then-finalize scaffolding shared by every builder.
//!
//! A context collects items in declaration order and converts them into an
//! immutable value exactly once, when the configuration block returns.

/// Ordered accumulator paired with the factory that finalizes it.
#[derive(Debug)]
pub struct BuilderContext<T, R> {
    items: Vec<T>,
    finish: fn(Vec<T>) -> R,
}

impl<T, R> BuilderContext<T, R> {
    pub fn new(finish: fn(Vec<T>) -> R) -> Self {
        Self {
            items: Vec::new(),
            finish,
        }
    }

    /// Append an item. No validation beyond the item type.
    pub fn add(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Items accumulated so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the accumulator and produce the final value.
    pub fn finish(self) -> R {
        (self.finish)(self.items)
    }
}

/// Companion factory for a builder context.
///
/// Implementors only say how to create a fresh context and how to finalize
/// it; `build` and `try_build` drive the block in between.
pub trait Build: Sized {
    type Output;

    /// Fresh context with an empty accumulator.
    fn fresh() -> Self;

    /// Number of items accumulated so far.
    fn pending(&self) -> usize;

    fn finish(self) -> Self::Output;

    /// Run `block` against a fresh context and return the finished value.
    fn build(block: impl FnOnce(&mut Self)) -> Self::Output {
        let context = std::any::type_name::<Self>();
        let _span = tracing::trace_span!("build", context).entered();

        let mut ctx = Self::fresh();
        block(&mut ctx);
        tracing::trace!(items = ctx.pending(), "finished");
        ctx.finish()
    }

    /// Like [`Build::build`], but the block may fail.
    ///
    /// The first error is returned as-is and the partially filled context is
    /// dropped; no value is produced.
    fn try_build<E>(block: impl FnOnce(&mut Self) -> Result<(), E>) -> Result<Self::Output, E> {
        let context = std::any::type_name::<Self>();
        let _span = tracing::trace_span!("try_build", context).entered();

        let mut ctx = Self::fresh();
        if let Err(err) = block(&mut ctx) {
            tracing::trace!(items = ctx.pending(), "aborted");
            return Err(err);
        }
        tracing::trace!(items = ctx.pending(), "finished");
        Ok(ctx.finish())
    }
}
