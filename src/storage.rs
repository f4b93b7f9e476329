use crate::type_info::TypeInfo;
use std::any::Any;

/// The uniform interface every erased payload exposes.
///
/// Nothing here mentions the payload's concrete type, so a container can hold
/// a single `Box<dyn Storage>` whatever was stored in it.
pub(crate) trait Storage: Any + Send {
    /// Identity of the wrapped value's type. Fixed for the life of the wrapper.
    fn type_info(&self) -> TypeInfo;

    /// Produces a new, independently owned wrapper around a copy of the value.
    fn clone_boxed(&self) -> Box<dyn Storage>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Wraps a single `T` by value.
pub(crate) struct Holder<T> {
    pub(crate) value: T,
}

impl<T: Clone + Send + 'static> Holder<T> {
    pub(crate) fn boxed(value: T) -> Box<dyn Storage> {
        Box::new(Self { value })
    }
}

impl<T: Clone + Send + 'static> Storage for Holder<T> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn clone_boxed(&self) -> Box<dyn Storage> {
        Holder::boxed(self.value.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn Storage {
    pub(crate) fn value_ref<T: 'static>(&self) -> Option<&T> {
        if !self.type_info().is::<T>() {
            return None;
        }
        self.as_any()
            .downcast_ref::<Holder<T>>()
            .map(|holder| &holder.value)
    }

    pub(crate) fn value_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if !self.type_info().is::<T>() {
            return None;
        }
        self.as_any_mut()
            .downcast_mut::<Holder<T>>()
            .map(|holder| &mut holder.value)
    }

    /// Unwraps the value, handing the box back untouched on a type mismatch.
    pub(crate) fn into_value<T: 'static>(self: Box<Self>) -> Result<T, Box<dyn Storage>> {
        if !self.type_info().is::<T>() {
            return Err(self);
        }
        match self.into_any().downcast::<Holder<T>>() {
            Ok(holder) => Ok(holder.value),
            // The identity check above guarantees the holder type.
            Err(_) => unreachable!("payload identity disagrees with its holder type"),
        }
    }
}
