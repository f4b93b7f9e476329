use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

// Identity reported by an empty `AnyValue`. Uninhabited, so nothing can be stored as one.
enum NoType {}

/// A comparable runtime identity for a concrete type.
///
/// Two `TypeInfo`s are equal exactly when they were created for the same type.
/// The type name is carried for diagnostics only and takes no part in equality
/// or hashing.
///
/// # Examples
///
/// ```
/// use sovran_any::TypeInfo;
///
/// assert_eq!(TypeInfo::of::<String>(), TypeInfo::of::<String>());
/// assert_ne!(TypeInfo::of::<String>(), TypeInfo::of::<&str>());
/// assert!(TypeInfo::none().is_none());
/// ```
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Returns the identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the "no type" identity reported by an empty container.
    ///
    /// This never equals the identity of any type a container can hold, `()` included.
    pub fn none() -> Self {
        Self {
            id: TypeId::of::<NoType>(),
            name: "<none>",
        }
    }

    /// Checks whether this is the identity of `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Checks whether this is the "no type" identity
    pub fn is_none(&self) -> bool {
        self.id == TypeId::of::<NoType>()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The compiler-provided name of the type. Not guaranteed to be unique or stable.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq<TypeId> for TypeInfo {
    fn eq(&self, other: &TypeId) -> bool {
        self.id == *other
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TypeInfo({})", self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}
