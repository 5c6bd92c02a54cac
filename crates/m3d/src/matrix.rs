use std::{array, fmt};

use crate::{scalar::Scalar, Float, Number, One, Quat, Trig, Vec2, Vec3, Vector, Zero};

mod ops;

/// A 3x3 matrix.
///
/// Used for 2D transforms in homogeneous coordinates (a [`Vec2`] point is extended with a `1`).
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`Scalar`] elements.
pub type Mat3f = Mat3<Scalar>;
/// A 4x4 matrix.
///
/// Used for 3D transforms and projections in homogeneous coordinates.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`Scalar`] elements.
pub type Mat4f = Mat4<Scalar>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal, and
///   [`Matrix::identity`] returns the identity matrix.
/// - [`Mat3`] and [`Mat4`] have constructors for projections (`ortho`, `perspective`) and
///   rotations, and by-value builders (`rotate`, `scale`, `translate`) that overwrite the cells
///   belonging to that transform and leave every other cell alone.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use m3d::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Memory Layout
///
/// Elements are stored row by row with no padding, so `Matrix<f32, 4, 4>` is exactly 16 [`f32`]s.
/// Graphics APIs that expect column-major data need the [`Matrix::transpose`] of the matrix (or
/// have to be told that the data is row-major).
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns a reference to the rows of this matrix.
    ///
    /// `as_rows()[row][col]` is the same element as `self[(row, col)]`.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Converts this matrix into an array of its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Returns the row at index `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }

    /// Returns the column at index `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize>(&'a [T; C]);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector or
    /// matrix with it returns that vector or matrix unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let v = vec4(1.0, 2.0, 3.0, 1.0);
    /// assert_eq!(Mat4f::identity() * v, v);
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

/// The rotation block of a unit quaternion, shared by [`Mat3::from_quat`] and [`Mat4::rotate`].
fn quat_rotation_block<T: Number>(q: Quat<T>) -> [[T; 3]; 3] {
    let two = T::ONE + T::ONE;

    let i2 = q.i * q.i * two;
    let j2 = q.j * q.j * two;
    let k2 = q.k * q.k * two;

    let ij = q.i * q.j * two;
    let jk = q.j * q.k * two;
    let ik = q.i * q.k * two;

    let iw = q.i * q.w * two;
    let jw = q.j * q.w * two;
    let kw = q.k * q.w * two;

    #[rustfmt::skip]
    let block = [
        [T::ONE - j2 - k2, ij - kw,          ik + jw],
        [ij + kw,          T::ONE - i2 - k2, jk - iw],
        [ik - jw,          jk + iw,          T::ONE - i2 - j2],
    ];
    block
}

/// 2D transforms.
impl<T> Matrix<T, 3, 3> {
    /// Creates a 2D orthographic projection mapping the rectangle `left..right`, `bottom..top` to
    /// `-1..1` on both axes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let proj = Mat3f::ortho(0.0, 512.0, 0.0, 256.0);
    /// assert_eq!(proj * vec3(256.0, 128.0, 1.0), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn ortho(left: T, right: T, bottom: T, top: T) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let rml = T::ONE / (right - left);
        let tmb = T::ONE / (top - bottom);

        let mut mat = Self::ZERO;
        mat.0[0][0] = two * rml;
        mat.0[1][1] = two * tmb;
        mat.0[2][2] = T::ONE;
        mat.0[0][2] = -(right + left) * rml;
        mat.0[1][2] = -(top + bottom) * tmb;
        mat
    }

    /// Creates a 2D orthographic projection of a `width` by `height` rectangle centered on the
    /// origin.
    pub fn ortho_centered(width: T, height: T) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        Self::from_diagonal([two / width, two / height, T::ONE])
    }

    /// Creates the rotation matrix of the unit quaternion `q`.
    ///
    /// Multiplying a vector with the result rotates it the same way as [`Quat::rotate_vector`].
    pub fn from_quat(q: Quat<T>) -> Self
    where
        T: Number,
    {
        Self(quat_rotation_block(q))
    }

    /// Sets the rotation part of this matrix to a counterclockwise rotation by `radians`.
    ///
    /// Only the upper-left 2x2 block is overwritten.
    pub fn rotate(mut self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        self.0[0][0] = cos;
        self.0[0][1] = -sin;
        self.0[1][0] = sin;
        self.0[1][1] = cos;
        self
    }

    /// Sets the scale factors on the diagonal of this matrix.
    pub fn scale(mut self, s: Vec2<T>) -> Self
    where
        T: Copy,
    {
        self.0[0][0] = s.x;
        self.0[1][1] = s.y;
        self
    }

    /// Sets the translation column of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let mat = Mat3f::identity().translate(vec2(2.0, -1.0));
    /// assert_eq!(mat * vec3(1.0, 1.0, 1.0), vec3(3.0, 0.0, 1.0));
    /// ```
    pub fn translate(mut self, t: Vec2<T>) -> Self
    where
        T: Copy,
    {
        self.0[0][2] = t.x;
        self.0[1][2] = t.y;
        self
    }
}

/// 3D transforms and projections.
///
/// Projections follow the OpenGL clip-space convention: view space is right-handed and looks down
/// the negative Z axis, and the near and far planes (at `z = -near` and `z = -far`) are mapped to
/// a normalized depth of -1 and 1 respectively.
impl<T> Matrix<T, 4, 4> {
    /// Creates an orthographic projection of the box bounded by `left..right`, `bottom..top`, and
    /// the `near` and `far` planes.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let rml = T::ONE / (right - left);
        let tmb = T::ONE / (top - bottom);
        let fmn = T::ONE / (far - near);

        let mut mat = Self::ZERO;
        mat.0[0][0] = two * rml;
        mat.0[1][1] = two * tmb;
        mat.0[2][2] = -two * fmn;
        mat.0[3][3] = T::ONE;
        mat.0[0][3] = -(right + left) * rml;
        mat.0[1][3] = -(top + bottom) * tmb;
        mat.0[2][3] = -(far + near) * fmn;
        mat
    }

    /// Creates an orthographic projection of a `width` by `height` box centered on the Z axis.
    pub fn ortho_centered(width: T, height: T, near: T, far: T) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let fmn = T::ONE / (far - near);

        let mut mat = Self::ZERO;
        mat.0[0][0] = two / width;
        mat.0[1][1] = two / height;
        mat.0[2][2] = -two * fmn;
        mat.0[3][3] = T::ONE;
        mat.0[2][3] = -(far + near) * fmn;
        mat
    }

    /// Creates a perspective projection.
    ///
    /// `fov_y` is the vertical field of view in radians. The aspect ratio is `width / height`;
    /// only the ratio matters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// # use approx::assert_abs_diff_eq;
    /// let proj = Mat4f::perspective(16.0, 9.0, 60.0 * DEG_TO_RAD, 0.1, 100.0);
    /// let clip = proj * vec4(0.0, 0.0, -0.1, 1.0);
    /// assert_abs_diff_eq!(clip.z / clip.w, -1.0, epsilon = 1e-4);
    /// ```
    pub fn perspective(width: T, height: T, fov_y: T, near: T, far: T) -> Self
    where
        T: Float,
    {
        let two = T::ONE + T::ONE;
        let cot_fov = T::ONE / (fov_y / two).tan();
        let fmn = T::ONE / (far - near);
        let aspect = width / height;

        let mut mat = Self::ZERO;
        mat.0[0][0] = cot_fov / aspect;
        mat.0[1][1] = cot_fov;
        mat.0[2][2] = -(far + near) * fmn;
        mat.0[2][3] = -two * (far * near) * fmn;
        mat.0[3][2] = -T::ONE;
        mat
    }

    /// Sets the upper-left 3x3 block of this matrix to the rotation described by `q`.
    ///
    /// The block is the same as [`Mat3::from_quat`]; translation and the last row are kept.
    pub fn rotate(mut self, q: Quat<T>) -> Self
    where
        T: Number,
    {
        for (row, block_row) in quat_rotation_block(q).into_iter().enumerate() {
            self.0[row][..3].copy_from_slice(&block_row);
        }
        self
    }

    /// Sets the rotation part of this matrix to a rotation by `radians` around the Y axis.
    ///
    /// Only the cells `(0, 0)`, `(0, 2)`, `(2, 0)` and `(2, 2)` are overwritten.
    pub fn rotate_y(mut self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        self.0[0][0] = cos;
        self.0[0][2] = sin;
        self.0[2][0] = -sin;
        self.0[2][2] = cos;
        self
    }

    /// Sets the scale factors on the diagonal of this matrix.
    pub fn scale(mut self, s: Vec3<T>) -> Self
    where
        T: Copy,
    {
        self.0[0][0] = s.x;
        self.0[1][1] = s.y;
        self.0[2][2] = s.z;
        self
    }

    /// Sets the translation column of this matrix.
    pub fn translate(mut self, t: Vec3<T>) -> Self
    where
        T: Copy,
    {
        self.0[0][3] = t.x;
        self.0[1][3] = t.y;
        self.0[2][3] = t.z;
        self
    }

    /// Inverts a rigid transform (a rotation followed by a translation).
    ///
    /// The upper-left 3x3 block must be a pure rotation, and the last row must be `(0, 0, 0, 1)`.
    /// The inverse is then `[Rᵀ | -Rᵀt]`, which is much cheaper than a general inverse. Matrices
    /// with scale or projection components produce meaningless results.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// # use approx::assert_abs_diff_eq;
    /// let q = Quatf::from_angle_axis(0.5, Vec3f::Y);
    /// let mat = Mat4f::identity().rotate(q).translate(vec3(1.0, 2.0, 3.0));
    /// let p = vec4(-4.0, 0.5, 2.0, 1.0);
    /// assert_abs_diff_eq!(mat.inverse_homogeneous() * (mat * p), p, epsilon = 1e-5);
    /// ```
    pub fn inverse_homogeneous(&self) -> Self
    where
        T: Number,
    {
        let t = self.column(3).truncate();
        let mut inv = Self::identity();
        for row in 0..3 {
            let rt_row = Vector::<T, 3>::from_fn(|k| self.0[k][row]);
            inv.0[row][..3].copy_from_slice(rt_row.as_array());
            inv.0[row][3] = -rt_row.dot(t);
        }
        inv
    }
}

/// Extracts the upper-left 3x3 block.
impl<T: Copy> From<Mat4<T>> for Mat3<T> {
    fn from(m: Mat4<T>) -> Self {
        Self::from_fn(|row, col| m.0[row][col])
    }
}

/// Embeds a 3x3 matrix in the upper-left block of an identity matrix.
impl<T: Zero + One + Copy> From<Mat3<T>> for Mat4<T> {
    fn from(m: Mat3<T>) -> Self {
        Self::from_fn(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => m.0[row][col],
        })
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}
