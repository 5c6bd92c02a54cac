//! Named field access (`v.x`, `v.y`, ...) for vectors.

use std::ops::{Deref, DerefMut};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// `Vector<T, N>` is `repr(transparent)` over `[T; N]`, which has the same layout as the `repr(C)`
// views above (the zero-sized `_priv` field adds no padding).
macro_rules! view {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { &*(self as *const Self as *const $view<T>) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut Self as *mut $view<T>) }
                }
            }
        )+
    };
}

view!(2 => XY, 3 => XYZ, 4 => XYZW);
