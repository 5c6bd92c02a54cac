use std::ops::{Deref, DerefMut};

use crate::Quat;

/// Named access to the components of a [`Quat`].
#[repr(C)]
pub struct IJKW<T> {
    pub i: T,
    pub j: T,
    pub k: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// `Quat<T>` is `repr(transparent)` over a `Vector<T, 4>`, which is laid out like `[T; 4]`.
impl<T> Deref for Quat<T> {
    type Target = IJKW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { &*(self as *const Self as *const IJKW<T>) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *(self as *mut Self as *mut IJKW<T>) }
    }
}
