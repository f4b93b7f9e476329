//! # sovran-any
//!
//! A type-erased value container with deep copy and checked downcasting.
//!
//! `sovran-any` provides [`AnyValue`], a container that can hold one value of any
//! `Clone + Send + 'static` type. The value's type disappears from the container's
//! signature but is recorded at runtime, so it can be borrowed back later, and the
//! container itself can be cloned without knowing what it holds.
//!
//! ## Key Features
//!
//! - **Type-safe**: Values are borrowed back only as the exact type they were stored as
//! - **Deep copy**: Cloning a container clones the held value; no storage is shared
//! - **No panics on mismatch**: A wrong-type request returns `None`, never fails unsafely
//! - **Compile-time checks**: Types that cannot be cloned are rejected by the compiler
//! - **No macros**: Plain generics and a single trait object
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_any::{any_cast_mut, any_cast_ref, AnyValue};
//!
//! let mut a = AnyValue::new();
//! assert!(!a.has_value());
//!
//! a.set("plain text".to_string());
//! assert!(a.has_value());
//! assert_eq!(any_cast_ref::<String>(Some(&a)).unwrap(), "plain text");
//! assert!(any_cast_ref::<i32>(Some(&a)).is_none());
//!
//! // Modify in place through the returned reference
//! if let Some(text) = any_cast_mut::<String>(Some(&mut a)) {
//!     *text = "other text".to_string();
//! }
//! assert_eq!(any_cast_ref::<String>(Some(&a)).unwrap(), "other text");
//!
//! // Copies are independent
//! let mut b = a.clone();
//! *any_cast_mut::<String>(Some(&mut b)).unwrap() = "b-only".to_string();
//! assert_eq!(any_cast_ref::<String>(Some(&a)).unwrap(), "other text");
//! ```
//!
//! ### Constructing in Place
//!
//! ```rust
//! use sovran_any::{make_any, AnyValue, InPlaceType};
//!
//! // Arguments are anything the target type converts from
//! let pair = make_any::<(i32, i32), _>((3, 4));
//! assert_eq!(pair.downcast_ref::<(i32, i32)>(), Some(&(3, 4)));
//! assert!(pair.downcast_ref::<i32>().is_none());
//!
//! let text = AnyValue::in_place(InPlaceType::<String>::new(), "plain text");
//! assert!(text.is::<String>());
//! ```
//!
//! ### Error Handling
//!
//! The borrowing accessors return `Option`. The closure and copy-out accessors
//! report why they failed:
//!
//! ```rust
//! use sovran_any::{AnyError, AnyValue};
//!
//! let mut value = AnyValue::from_value(vec!["setting1", "setting2"]);
//!
//! match value.get::<String>() {
//!     Ok(text) => println!("Config: {}", text),
//!     Err(AnyError::Empty) => println!("No config stored"),
//!     Err(AnyError::TypeMismatch { found, .. }) => println!("Config is a {}", found),
//! }
//!
//! value.reset();
//! assert_eq!(value.with(|v: &Vec<&'static str>| v.len()), Err(AnyError::Empty));
//! ```
//!
//! ### Rejected at Compile Time
//!
//! ```rust,compile_fail
//! use sovran_any::AnyValue;
//!
//! struct NotClone;
//!
//! let value = AnyValue::from_value(NotClone);
//! ```
//!
//! ## Threads
//!
//! `AnyValue` does no locking of its own. Stored values must be `Send`, so a
//! container can move to another thread, and sharing one is done behind a
//! lock the caller owns:
//!
//! ```rust
//! use sovran_any::AnyValue;
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//!
//! let shared = Arc::new(Mutex::new(AnyValue::from_value(1u32)));
//! let worker = Arc::clone(&shared);
//! thread::spawn(move || {
//!     worker.lock().unwrap().set(2u32);
//! })
//! .join()
//! .unwrap();
//! assert_eq!(shared.lock().unwrap().get::<u32>(), Ok(2));
//! ```
//!
//! `AnyValue` is not `Sync`, so it cannot be shared without that lock:
//!
//! ```rust,compile_fail
//! use sovran_any::AnyValue;
//!
//! fn assert_sync<T: Sync>(_: &T) {}
//! assert_sync(&AnyValue::from_value(1));
//! ```
//!
//! Values that cannot leave their thread are rejected:
//!
//! ```rust,compile_fail
//! use sovran_any::AnyValue;
//! use std::rc::Rc;
//!
//! let value = AnyValue::from_value(Rc::new(1));
//! ```

mod any_value;
mod cast;
mod error;
mod storage;
mod type_info;

pub use any_value::AnyValue;
pub use cast::{any_cast_mut, any_cast_ref, in_place_type, make_any, InPlaceType};
pub use error::AnyError;
pub use type_info::TypeInfo;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
