use crate::real::Real;
use core::{
    borrow::Borrow,
    fmt::{self, Display, Formatter},
    iter::{Product, Sum},
    ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign},
};
use derive_more::{From, Into};
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Immutable pair of real and imaginary components over a shared [`Real`]
/// representation. Operations never mutate in place; they return new values.
#[derive(Clone, Copy, Debug, Default, PartialEq, From, Into)]
pub struct Complex<T> {
    real: T,
    imag: T,
}

impl<T> Complex<T> {
    pub const fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }
}

impl<T: Display> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.real, self.imag)
    }
}

impl<T: Real> Complex<T> {
    /// Builds `rho * (cos(theta) + i sin(theta))`.
    pub fn from_polar(rho: T, theta: T) -> Self {
        Self::new(rho * theta.cos(), rho * theta.sin())
    }

    pub fn from_c64(value: Complex<f64>) -> Self {
        Self::new(T::from_f64(value.real), T::from_f64(value.imag))
    }

    pub fn from_c32(value: Complex<f32>) -> Self {
        Self::new(T::from_f32(value.real), T::from_f32(value.imag))
    }

    pub fn to_c64(self) -> Complex<f64> {
        Complex::new(self.real.to_f64(), self.imag.to_f64())
    }

    pub fn to_c32(self) -> Complex<f32> {
        Complex::new(self.real.to_f32(), self.imag.to_f32())
    }

    pub fn real(&self) -> T {
        self.real
    }

    pub fn imag(&self) -> T {
        self.imag
    }

    pub fn abs(self) -> T {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }

    /// Principal argument in `(-pi, pi]`.
    pub fn arg(self) -> T {
        self.imag.atan2(self.real)
    }

    /// Squared magnitude, summed directly to skip the square-root round trip.
    pub fn norm(self) -> T {
        self.real * self.real + self.imag * self.imag
    }

    pub fn conj(self) -> Self {
        Self::new(self.real, -self.imag)
    }

    /// True iff both component distances to `other` are within `accuracy`,
    /// taken absolute. The components are checked independently.
    pub fn approx_eq(self, other: Self, accuracy: T) -> bool {
        let accuracy = accuracy.abs();
        (self.real - other.real).abs() <= accuracy && (self.imag - other.imag).abs() <= accuracy
    }
}

impl<T: Real> Neg for &Complex<T> {
    type Output = Complex<T>;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Complex::new(-self.real, -self.imag)
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Real> AddAssign<&Complex<T>> for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: &Complex<T>) {
        self.real += rhs.real;
        self.imag += rhs.imag;
    }
}

impl<T: Real> SubAssign<&Complex<T>> for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: &Complex<T>) {
        self.real -= rhs.real;
        self.imag -= rhs.imag;
    }
}

impl<T: Real> MulAssign<&Complex<T>> for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: &Complex<T>) {
        *self = Complex::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.imag * rhs.real + self.real * rhs.imag,
        );
    }
}

impl<T: Real> DivAssign<&Complex<T>> for Complex<T> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: &Complex<T>) {
        let cd = rhs.real * rhs.real + rhs.imag * rhs.imag;
        *self = Complex::new(
            (self.real * rhs.real + self.imag * rhs.imag) / cd,
            (self.imag * rhs.real - self.real * rhs.imag) / cd,
        );
    }
}

impl<T: Real> AddAssign<&T> for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: &T) {
        self.real += *rhs;
    }
}

impl<T: Real> SubAssign<&T> for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: &T) {
        self.real -= *rhs;
    }
}

impl<T: Real> MulAssign<&T> for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: &T) {
        self.real *= *rhs;
        self.imag *= *rhs;
    }
}

impl<T: Real> DivAssign<&T> for Complex<T> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: &T) {
        self.real /= *rhs;
        self.imag /= *rhs;
    }
}

macro_rules! impl_op_by_op_assign_ref {
    ($(impl $trait:ident),* $(,)?) => {
        $(
            paste::paste! {
                impl<T: Real> core::ops::[<$trait Assign>]<Complex<T>> for Complex<T> {
                    #[inline(always)]
                    fn [<$trait:lower _assign>](&mut self, rhs: Complex<T>) {
                        self.[<$trait:lower _assign>](&rhs);
                    }
                }

                impl<T: Real> core::ops::[<$trait Assign>]<T> for Complex<T> {
                    #[inline(always)]
                    fn [<$trait:lower _assign>](&mut self, rhs: T) {
                        self.[<$trait:lower _assign>](&rhs);
                    }
                }

                impl<T: Real> core::ops::$trait<Complex<T>> for Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](mut self, rhs: Complex<T>) -> Complex<T> {
                        self.[<$trait:lower _assign>](&rhs);
                        self
                    }
                }

                impl<T: Real> core::ops::$trait<&Complex<T>> for Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](mut self, rhs: &Complex<T>) -> Complex<T> {
                        self.[<$trait:lower _assign>](rhs);
                        self
                    }
                }

                impl<T: Real> core::ops::$trait<Complex<T>> for &Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](self, rhs: Complex<T>) -> Complex<T> {
                        let mut lhs = *self;
                        lhs.[<$trait:lower _assign>](&rhs);
                        lhs
                    }
                }

                impl<T: Real> core::ops::$trait<&Complex<T>> for &Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](self, rhs: &Complex<T>) -> Complex<T> {
                        let mut lhs = *self;
                        lhs.[<$trait:lower _assign>](rhs);
                        lhs
                    }
                }

                impl<T: Real> core::ops::$trait<T> for Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](mut self, rhs: T) -> Complex<T> {
                        self.[<$trait:lower _assign>](&rhs);
                        self
                    }
                }

                impl<T: Real> core::ops::$trait<&T> for Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](mut self, rhs: &T) -> Complex<T> {
                        self.[<$trait:lower _assign>](rhs);
                        self
                    }
                }

                impl<T: Real> core::ops::$trait<T> for &Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](self, rhs: T) -> Complex<T> {
                        let mut lhs = *self;
                        lhs.[<$trait:lower _assign>](&rhs);
                        lhs
                    }
                }

                impl<T: Real> core::ops::$trait<&T> for &Complex<T> {
                    type Output = Complex<T>;

                    #[inline(always)]
                    fn [<$trait:lower>](self, rhs: &T) -> Complex<T> {
                        let mut lhs = *self;
                        lhs.[<$trait:lower _assign>](rhs);
                        lhs
                    }
                }
            }
        )*
    };
}

impl_op_by_op_assign_ref!(impl Add, impl Sub, impl Mul, impl Div);

// Scalar-on-the-left shapes have to be enumerated per concrete scalar, since
// a generic impl would leave the self type uncovered.
macro_rules! impl_op_for_real_lhs {
    ($($t:ty),* $(,)?) => {
        $(
            impl core::ops::Add<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn add(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::new(self + rhs.real, rhs.imag)
                }
            }

            impl core::ops::Sub<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn sub(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::new(self - rhs.real, -rhs.imag)
                }
            }

            impl core::ops::Mul<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn mul(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::new(self * rhs.real, self * rhs.imag)
                }
            }

            impl core::ops::Div<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn div(self, rhs: Complex<$t>) -> Complex<$t> {
                    let cd = rhs.real * rhs.real + rhs.imag * rhs.imag;
                    Complex::new((self * rhs.real) / cd, (-self * rhs.imag) / cd)
                }
            }
        )*
    };
}

impl_op_for_real_lhs!(f32, f64);

// Lets an integer literal sit on the left of a complex value, as in
// `3 + 4.0f64.i()`.
impl<T: Real> core::ops::Add<Complex<T>> for i64 {
    type Output = Complex<T>;

    #[inline(always)]
    fn add(self, rhs: Complex<T>) -> Complex<T> {
        Complex::new(T::from_i64(self) + rhs.real, rhs.imag)
    }
}

macro_rules! impl_from_primitive {
    ($($p:ty => $from:ident),* $(,)?) => {
        $(
            impl<T: Real> From<$p> for Complex<T> {
                #[inline(always)]
                fn from(value: $p) -> Self {
                    Self::new(T::$from(value as _), T::zero())
                }
            }
        )*
    };
}

impl_from_primitive!(
    f64 => from_f64,
    f32 => from_f32,
    i64 => from_i64,
    i32 => from_i64,
    i16 => from_i64,
    i8 => from_i64,
    u32 => from_i64,
    u16 => from_i64,
    u8 => from_i64,
    isize => from_i64,
    usize => from_i64,
);

impl<T: Real> Zero for Complex<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }
}

impl<T: Real> One for Complex<T> {
    fn one() -> Self {
        Self::new(T::one(), T::zero())
    }
}

impl<T: Real, I: Borrow<Complex<T>>> Sum<I> for Complex<T> {
    fn sum<It: Iterator<Item = I>>(iter: It) -> Self {
        iter.fold(Self::zero(), |acc, item| acc + item.borrow())
    }
}

impl<T: Real, I: Borrow<Complex<T>>> Product<I> for Complex<T> {
    fn product<It: Iterator<Item = I>>(iter: It) -> Self {
        iter.fold(Self::one(), |acc, item| acc * item.borrow())
    }
}

impl<T> Distribution<Complex<T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        Complex::new(rng.gen(), rng.gen())
    }
}

#[macro_export]
macro_rules! assert_eq_real {
    ($lhs:expr, $rhs:expr, $accuracy:expr $(,)?) => {{
        let (lhs, rhs, accuracy) = ($lhs, $rhs, $accuracy);
        assert!(
            $crate::Real::abs(lhs - rhs) <= $crate::Real::abs(accuracy),
            "assertion `left == right +/- {}` failed\n  left: {}\n right: {}",
            accuracy,
            lhs,
            rhs,
        );
    }};
}

#[macro_export]
macro_rules! assert_eq_complex {
    ($lhs:expr, $rhs:expr, $accuracy:expr $(,)?) => {{
        let (lhs, rhs, accuracy) = ($lhs, $rhs, $accuracy);
        assert!(
            lhs.approx_eq(rhs, accuracy),
            "assertion `left == right +/- {}` failed\n  left: {}\n right: {}",
            accuracy,
            lhs,
            rhs,
        );
    }};
}
