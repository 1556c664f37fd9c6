use std::fmt;
use std::ops::{Add, Mul};

use crate::dim::Dim;
use crate::{Error, Result};

/// Highest rank a [`DDim`] can hold.
pub const MAX_RANK: usize = 9;

/// A dynamically ranked shape.
///
/// The rank of a shape is only known at runtime, but every shape is stored as
/// one of nine statically ranked [`Dim`] payloads, so a `DDim` lives entirely
/// on the stack and copying it never allocates. The rank is fixed at
/// construction; [`DDim::set`] mutates extents in place but a different rank
/// always means a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DDim {
    D1(Dim<1>),
    D2(Dim<2>),
    D3(Dim<3>),
    D4(Dim<4>),
    D5(Dim<5>),
    D6(Dim<6>),
    D7(Dim<7>),
    D8(Dim<8>),
    D9(Dim<9>),
}

/// Rank-erased read access to whichever payload a [`DDim`] holds.
///
/// Implementations are written once, generically over the rank. The match
/// over the nine variants happens exactly once, inside
/// [`DDim::apply_visitor`], so call sites never branch on the rank
/// themselves.
pub trait DimVisitor {
    type Output;

    fn visit<const N: usize>(self, dim: &Dim<N>) -> Self::Output;
}

/// Mutating twin of [`DimVisitor`].
pub trait DimVisitorMut {
    type Output;

    fn visit<const N: usize>(self, dim: &mut Dim<N>) -> Self::Output;
}

macro_rules! for_each_variant {
    ($ddim:expr, $dim:ident => $body:expr) => {
        match $ddim {
            DDim::D1($dim) => $body,
            DDim::D2($dim) => $body,
            DDim::D3($dim) => $body,
            DDim::D4($dim) => $body,
            DDim::D5($dim) => $body,
            DDim::D6($dim) => $body,
            DDim::D7($dim) => $body,
            DDim::D8($dim) => $body,
            DDim::D9($dim) => $body,
        }
    };
}

macro_rules! elementwise {
    ($lhs:expr, $rhs:expr, $op:tt) => {
        match ($lhs, $rhs) {
            (DDim::D1(lhs), DDim::D1(rhs)) => Ok(DDim::D1(lhs $op rhs)),
            (DDim::D2(lhs), DDim::D2(rhs)) => Ok(DDim::D2(lhs $op rhs)),
            (DDim::D3(lhs), DDim::D3(rhs)) => Ok(DDim::D3(lhs $op rhs)),
            (DDim::D4(lhs), DDim::D4(rhs)) => Ok(DDim::D4(lhs $op rhs)),
            (DDim::D5(lhs), DDim::D5(rhs)) => Ok(DDim::D5(lhs $op rhs)),
            (DDim::D6(lhs), DDim::D6(rhs)) => Ok(DDim::D6(lhs $op rhs)),
            (DDim::D7(lhs), DDim::D7(rhs)) => Ok(DDim::D7(lhs $op rhs)),
            (DDim::D8(lhs), DDim::D8(rhs)) => Ok(DDim::D8(lhs $op rhs)),
            (DDim::D9(lhs), DDim::D9(rhs)) => Ok(DDim::D9(lhs $op rhs)),
            (lhs, rhs) => Err(Error::RankMismatch {
                lhs: lhs.arity(),
                rhs: rhs.arity(),
            }),
        }
    };
}

impl DDim {
    /// Apply `visitor` to the active payload.
    pub fn apply_visitor<V: DimVisitor>(&self, visitor: V) -> V::Output {
        for_each_variant!(self, dim => visitor.visit(dim))
    }

    /// Apply `visitor` to the active payload, with mutable access.
    pub fn apply_visitor_mut<V: DimVisitorMut>(&mut self, visitor: V) -> V::Output {
        for_each_variant!(self, dim => visitor.visit(dim))
    }

    /// The active rank, read off the payload type rather than scanned.
    pub fn arity(&self) -> usize {
        self.apply_visitor(Arity)
    }

    /// The extent of axis `idx`.
    pub fn get(&self, idx: usize) -> Result<i64> {
        self.apply_visitor(Get { index: idx })
    }

    /// Overwrite the extent of axis `idx`. The rank never changes.
    pub fn set(&mut self, idx: usize, value: i64) -> Result<()> {
        self.apply_visitor_mut(Set { index: idx, value })
    }

    /// Number of elements a tensor of this shape holds.
    pub fn product(&self) -> i64 {
        self.apply_visitor(Product)
    }

    /// Materialize the extents as a plain vector, in axis order.
    pub fn vectorize(&self) -> Vec<i64> {
        self.apply_visitor(Vectorize)
    }

    /// Unwrap into a statically ranked [`Dim`].
    ///
    /// The one place rank erasure is undone: callers state the rank they
    /// expect and get [`Error::RankMismatch`] if the shape disagrees.
    pub fn to_dim<const N: usize>(&self) -> Result<Dim<N>> {
        Dim::try_from(self)
    }
}

impl Default for DDim {
    fn default() -> Self {
        DDim::D1(Dim::default())
    }
}

struct Arity;

impl DimVisitor for Arity {
    type Output = usize;

    fn visit<const N: usize>(self, _dim: &Dim<N>) -> usize {
        N
    }
}

struct Get {
    index: usize,
}

impl DimVisitor for Get {
    type Output = Result<i64>;

    fn visit<const N: usize>(self, dim: &Dim<N>) -> Result<i64> {
        dim.get(self.index)
    }
}

struct Set {
    index: usize,
    value: i64,
}

impl DimVisitorMut for Set {
    type Output = Result<()>;

    fn visit<const N: usize>(self, dim: &mut Dim<N>) -> Result<()> {
        dim.set(self.index, self.value)
    }
}

struct Product;

impl DimVisitor for Product {
    type Output = i64;

    fn visit<const N: usize>(self, dim: &Dim<N>) -> i64 {
        dim.product()
    }
}

struct Vectorize;

impl DimVisitor for Vectorize {
    type Output = Vec<i64>;

    fn visit<const N: usize>(self, dim: &Dim<N>) -> Vec<i64> {
        dim.as_slice().to_vec()
    }
}

struct Format<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
}

impl DimVisitor for Format<'_, '_> {
    type Output = fmt::Result;

    fn visit<const N: usize>(self, dim: &Dim<N>) -> fmt::Result {
        write!(self.f, "{dim}")
    }
}

impl fmt::Display for DDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.apply_visitor(Format { f })
    }
}

/// Build a shape from `extents`, whose length selects the rank.
pub fn make_ddim(extents: &[i64]) -> Result<DDim> {
    DDim::try_from(extents)
}

impl TryFrom<&[i64]> for DDim {
    type Error = Error;

    fn try_from(extents: &[i64]) -> Result<Self> {
        match extents.len() {
            1 => Ok(DDim::D1(extents.try_into()?)),
            2 => Ok(DDim::D2(extents.try_into()?)),
            3 => Ok(DDim::D3(extents.try_into()?)),
            4 => Ok(DDim::D4(extents.try_into()?)),
            5 => Ok(DDim::D5(extents.try_into()?)),
            6 => Ok(DDim::D6(extents.try_into()?)),
            7 => Ok(DDim::D7(extents.try_into()?)),
            8 => Ok(DDim::D8(extents.try_into()?)),
            9 => Ok(DDim::D9(extents.try_into()?)),
            len => Err(Error::InvalidRank { len }),
        }
    }
}

impl TryFrom<Vec<i64>> for DDim {
    type Error = Error;

    fn try_from(extents: Vec<i64>) -> Result<Self> {
        extents.as_slice().try_into()
    }
}

impl<const N: usize> TryFrom<&DDim> for Dim<N> {
    type Error = Error;

    fn try_from(ddim: &DDim) -> Result<Self> {
        let rank = ddim.arity();
        if rank != N {
            return Err(Error::RankMismatch { lhs: N, rhs: rank });
        }
        let mut dim = Dim::default();
        for axis in 0..N {
            dim.set(axis, ddim.get(axis)?)?;
        }
        Ok(dim)
    }
}

macro_rules! ddim_from_dim {
    ($variant:ident, $rank:literal) => {
        impl From<Dim<$rank>> for DDim {
            fn from(dim: Dim<$rank>) -> Self {
                DDim::$variant(dim)
            }
        }
    };
}

ddim_from_dim!(D1, 1);
ddim_from_dim!(D2, 2);
ddim_from_dim!(D3, 3);
ddim_from_dim!(D4, 4);
ddim_from_dim!(D5, 5);
ddim_from_dim!(D6, 6);
ddim_from_dim!(D7, 7);
ddim_from_dim!(D8, 8);
ddim_from_dim!(D9, 9);

impl Add for DDim {
    type Output = Result<DDim>;

    fn add(self, rhs: Self) -> Self::Output {
        elementwise!(self, rhs, +)
    }
}

impl Mul for DDim {
    type Output = Result<DDim>;

    fn mul(self, rhs: Self) -> Self::Output {
        elementwise!(self, rhs, *)
    }
}
