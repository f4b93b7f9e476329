use crate::any_value::AnyValue;
use std::fmt;
use std::marker::PhantomData;

/// A zero-sized tag naming the type to construct in place.
///
/// Used with [`AnyValue::in_place`] to pick the stored type when it cannot be
/// inferred from the arguments.
pub struct InPlaceType<T>(PhantomData<fn() -> T>);

impl<T> InPlaceType<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for InPlaceType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for InPlaceType<T> {}

impl<T> Default for InPlaceType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InPlaceType<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InPlaceType<{}>", std::any::type_name::<T>())
    }
}

/// Returns the in-place construction tag for `T`.
pub const fn in_place_type<T>() -> InPlaceType<T> {
    InPlaceType::new()
}

/// Builds a container holding a `T` constructed from `args`.
///
/// # Examples
///
/// ```
/// use sovran_any::{any_cast_ref, make_any};
///
/// let pair = make_any::<(i32, i32), _>((3, 4));
/// assert_eq!(any_cast_ref::<(i32, i32)>(Some(&pair)), Some(&(3, 4)));
/// assert_eq!(any_cast_ref::<i32>(Some(&pair)), None);
/// ```
pub fn make_any<T, A>(args: A) -> AnyValue
where
    T: From<A> + Clone + Send + 'static,
{
    AnyValue::in_place(in_place_type::<T>(), args)
}

/// Borrows the value in `value` as a `T`.
///
/// Returns `None` if `value` is `None`, the container is empty, or it holds a
/// type other than `T`.
///
/// # Examples
///
/// ```
/// use sovran_any::{any_cast_ref, AnyValue};
///
/// let value = AnyValue::from_value(2.5f64);
/// assert_eq!(any_cast_ref::<f64>(Some(&value)), Some(&2.5));
/// assert_eq!(any_cast_ref::<f32>(Some(&value)), None);
/// assert_eq!(any_cast_ref::<f64>(None), None);
/// ```
pub fn any_cast_ref<T: 'static>(value: Option<&AnyValue>) -> Option<&T> {
    value?.downcast_ref::<T>()
}

/// Mutably borrows the value in `value` as a `T`.
///
/// Returns `None` if `value` is `None`, the container is empty, or it holds a
/// type other than `T`.
///
/// # Examples
///
/// ```
/// use sovran_any::{any_cast_mut, make_any};
///
/// let mut text = make_any::<String, _>("plain text");
/// if let Some(text) = any_cast_mut::<String>(Some(&mut text)) {
///     *text = "other plain text".to_string();
/// }
/// assert_eq!(text.downcast_ref::<String>().unwrap(), "other plain text");
/// ```
pub fn any_cast_mut<T: 'static>(value: Option<&mut AnyValue>) -> Option<&mut T> {
    value?.downcast_mut::<T>()
}
