use crate::cast::InPlaceType;
use crate::error::AnyError;
use crate::storage::{Holder, Storage};
use crate::type_info::TypeInfo;
use std::fmt;

/// A container for a single value of any `Clone + Send + 'static` type.
///
/// `AnyValue` is either empty or owns exactly one value. The value's type is
/// erased from the container's own type but recorded at runtime, so the value
/// can be borrowed back as its concrete type with [`downcast_ref`] and
/// [`downcast_mut`] (or the free functions [`any_cast_ref`] and
/// [`any_cast_mut`]). A request for any other type yields `None`.
///
/// Cloning an `AnyValue` deep-copies the held value through its own `Clone`
/// implementation; the clone and the original never share storage.
///
/// `AnyValue` is `Send` but not `Sync`, and does no locking of its own. It can
/// be moved to another thread; sharing one between threads takes a lock owned
/// by the caller, such as `Arc<Mutex<AnyValue>>`.
///
/// # Examples
///
/// ```
/// use sovran_any::AnyValue;
///
/// let mut a = AnyValue::new();
/// assert!(!a.has_value());
///
/// a.set("plain text".to_string());
/// assert_eq!(a.downcast_ref::<String>().map(String::as_str), Some("plain text"));
/// assert!(a.downcast_ref::<i32>().is_none());
///
/// let b = a.clone();
/// a.downcast_mut::<String>().unwrap().push_str("!");
/// assert_eq!(b.downcast_ref::<String>().unwrap(), "plain text");
/// ```
///
/// [`downcast_ref`]: AnyValue::downcast_ref
/// [`downcast_mut`]: AnyValue::downcast_mut
/// [`any_cast_ref`]: crate::any_cast_ref
/// [`any_cast_mut`]: crate::any_cast_mut
#[derive(Default)]
pub struct AnyValue {
    instance: Option<Box<dyn Storage>>,
}

impl AnyValue {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Creates a container holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let value = AnyValue::from_value(vec![1, 2, 3]);
    /// assert!(value.is::<Vec<i32>>());
    /// ```
    pub fn from_value<T: Clone + Send + 'static>(value: T) -> Self {
        Self {
            instance: Some(Holder::boxed(value)),
        }
    }

    /// Creates a container holding a `T` built directly from `args`.
    ///
    /// `args` is anything `T` converts from: a single value, or a tuple for
    /// types such as pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyValue, InPlaceType};
    ///
    /// let text = AnyValue::in_place(InPlaceType::<String>::new(), "plain text");
    /// assert_eq!(text.downcast_ref::<String>().unwrap(), "plain text");
    /// ```
    pub fn in_place<T, A>(_tag: InPlaceType<T>, args: A) -> Self
    where
        T: From<A> + Clone + Send + 'static,
    {
        Self::from_value(T::from(args))
    }

    /// Replaces the held value (if any) with `value`.
    pub fn set<T: Clone + Send + 'static>(&mut self, value: T) {
        self.instance = Some(Holder::boxed(value));
    }

    /// Replaces the held value (if any) with a `T` built from `args`, and
    /// returns a mutable reference to it.
    pub fn emplace<T, A>(&mut self, args: A) -> &mut T
    where
        T: From<A> + Clone + Send + 'static,
    {
        let storage = self.instance.insert(Holder::boxed(T::from(args)));
        match storage.value_mut::<T>() {
            Some(value) => value,
            None => unreachable!("freshly stored payload must match its own type"),
        }
    }

    /// Drops the held value, leaving the container empty.
    pub fn reset(&mut self) {
        self.instance = None;
    }

    /// Moves the held value out into a new container, leaving this one empty.
    pub fn take(&mut self) -> Self {
        Self {
            instance: self.instance.take(),
        }
    }

    /// Exchanges the contents of two containers without copying either value.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.instance, &mut other.instance);
    }

    /// Returns `true` if the container holds a value.
    pub fn has_value(&self) -> bool {
        self.instance.is_some()
    }

    /// Returns the identity of the held value's type, or [`TypeInfo::none`]
    /// when empty.
    pub fn type_info(&self) -> TypeInfo {
        self.instance
            .as_ref()
            .map_or_else(TypeInfo::none, |storage| storage.type_info())
    }

    /// Returns `true` if the container holds a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.instance
            .as_ref()
            .is_some_and(|storage| storage.type_info().is::<T>())
    }

    /// Borrows the held value as a `T`, or returns `None` if the container is
    /// empty or holds another type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.instance.as_ref()?.value_ref::<T>()
    }

    /// Mutably borrows the held value as a `T`, or returns `None` if the
    /// container is empty or holds another type.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.instance.as_mut()?.value_mut::<T>()
    }

    /// Takes the held value out as a `T`.
    ///
    /// On failure the container is handed back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let value = AnyValue::from_value(42u8);
    /// let value = value.downcast::<i8>().unwrap_err();
    /// assert_eq!(value.downcast::<u8>().ok(), Some(42));
    /// ```
    pub fn downcast<T: 'static>(self) -> Result<T, Self> {
        let Some(storage) = self.instance else {
            return Err(Self::new());
        };
        storage.into_value::<T>().map_err(|storage| Self {
            instance: Some(storage),
        })
    }

    /// Returns a clone of the held value.
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if the container holds no value
    /// - Returns `AnyError::TypeMismatch` if the held value is not a `T`
    pub fn get<T: Clone + 'static>(&self) -> Result<T, AnyError> {
        self.with(|value: &T| value.clone())
    }

    /// Runs `f` against the held value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyValue, AnyError};
    ///
    /// let value = AnyValue::from_value(vec![1, 2, 3]);
    /// let len = value.with(|v: &Vec<i32>| v.len())?;
    /// assert_eq!(len, 3);
    /// # Ok::<(), AnyError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if the container holds no value
    /// - Returns `AnyError::TypeMismatch` if the held value is not a `T`
    pub fn with<T: 'static, F, R>(&self, f: F) -> Result<R, AnyError>
    where
        F: FnOnce(&T) -> R,
    {
        let found = self.type_info();
        let storage = self.instance.as_ref().ok_or(AnyError::Empty)?;
        let value = storage.value_ref::<T>().ok_or(AnyError::TypeMismatch {
            expected: TypeInfo::of::<T>(),
            found,
        })?;
        Ok(f(value))
    }

    /// Runs `f` against the held value with write access.
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if the container holds no value
    /// - Returns `AnyError::TypeMismatch` if the held value is not a `T`
    pub fn with_mut<T: 'static, F, R>(&mut self, f: F) -> Result<R, AnyError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let found = self.type_info();
        let storage = self.instance.as_mut().ok_or(AnyError::Empty)?;
        let value = storage.value_mut::<T>().ok_or(AnyError::TypeMismatch {
            expected: TypeInfo::of::<T>(),
            found,
        })?;
        Ok(f(value))
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            instance: self.instance.as_ref().map(|storage| storage.clone_boxed()),
        }
    }

    // The clone is complete before the old payload is dropped, so a panicking
    // `Clone` leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let instance = source.instance.as_ref().map(|storage| storage.clone_boxed());
        self.instance = instance;
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.instance {
            Some(storage) => f
                .debug_struct("AnyValue")
                .field("type", &storage.type_info().name())
                .finish(),
            None => f.write_str("AnyValue { empty }"),
        }
    }
}
