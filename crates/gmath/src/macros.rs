// Elementwise operator impls shared by the small vector types.
//
// `impl_elementwise_ops!(Vec3, f32, x, y, z)` generates vector-vector and
// broadcast vector-scalar / scalar-vector `+ - * /`, the compound
// assignment forms and negation.
macro_rules! impl_elementwise_ops {
    ($ty:ident, $scalar:ty, $($f:ident),+) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl std::ops::Mul for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl std::ops::Div for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl std::ops::Add<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: $scalar) -> Self {
                Self { $($f: self.$f + rhs),+ }
            }
        }

        impl std::ops::Sub<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: $scalar) -> Self {
                Self { $($f: self.$f - rhs),+ }
            }
        }

        impl std::ops::Mul<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $scalar) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl std::ops::Div<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $scalar) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl std::ops::Add<$ty> for $scalar {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($f: self + rhs.$f),+ }
            }
        }

        impl std::ops::Sub<$ty> for $scalar {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($f: self - rhs.$f),+ }
            }
        }

        impl std::ops::Mul<$ty> for $scalar {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                $ty { $($f: self * rhs.$f),+ }
            }
        }

        impl std::ops::Div<$ty> for $scalar {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: $ty) -> $ty {
                $ty { $($f: self / rhs.$f),+ }
            }
        }

        impl std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl std::ops::AddAssign<$scalar> for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $scalar) {
                $(self.$f += rhs;)+
            }
        }

        impl std::ops::SubAssign<$scalar> for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $scalar) {
                $(self.$f -= rhs;)+
            }
        }

        impl std::ops::MulAssign<$scalar> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                $(self.$f *= rhs;)+
            }
        }

        impl std::ops::DivAssign<$scalar> for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: $scalar) {
                $(self.$f /= rhs;)+
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }
    };
}

// Bounds-checked `Index`/`IndexMut` over named fields.
macro_rules! impl_field_index {
    ($ty:ident, $scalar:ty, $($i:literal => $f:ident),+) => {
        impl std::ops::Index<usize> for $ty {
            type Output = $scalar;
            #[inline]
            fn index(&self, i: usize) -> &$scalar {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($ty), i),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut $scalar {
                match i {
                    $($i => &mut self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($ty), i),
                }
            }
        }
    };
}
