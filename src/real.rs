use crate::complex::Complex;
use core::{
    fmt::{Debug, Display},
    ops::Neg,
};
use num_traits::{Num, NumAssignOps, Zero};

/// Scalar representation a [`Complex`] can be instantiated over.
///
/// Each implementation binds its own precision-matched transcendental
/// primitives, so dispatch resolves at compile time.
pub trait Real:
    Copy
    + Debug
    + Default
    + Display
    + PartialEq
    + PartialOrd
    + Neg<Output = Self>
    + Num
    + NumAssignOps
{
    fn from_f64(value: f64) -> Self;

    fn from_f32(value: f32) -> Self;

    fn from_i64(value: i64) -> Self;

    fn to_f64(self) -> f64;

    fn to_f32(self) -> f32;

    fn cos(self) -> Self;

    fn sin(self) -> Self;

    fn sqrt(self) -> Self;

    fn atan2(self, other: Self) -> Self;

    fn abs(self) -> Self;

    /// Lifts the scalar onto the imaginary axis, so `4.0f64.i()` reads as `4i`.
    fn i(self) -> Complex<Self> {
        Complex::new(Self::zero(), self)
    }
}

macro_rules! impl_real {
    ($($t:ty),* $(,)?) => {
        $(
            impl Real for $t {
                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    value as _
                }

                #[inline(always)]
                fn from_f32(value: f32) -> Self {
                    value as _
                }

                #[inline(always)]
                fn from_i64(value: i64) -> Self {
                    value as _
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as _
                }

                #[inline(always)]
                fn to_f32(self) -> f32 {
                    self as _
                }

                #[inline(always)]
                fn cos(self) -> Self {
                    <$t>::cos(self)
                }

                #[inline(always)]
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }

                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline(always)]
                fn atan2(self, other: Self) -> Self {
                    <$t>::atan2(self, other)
                }

                #[inline(always)]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

impl_real!(f32, f64);
